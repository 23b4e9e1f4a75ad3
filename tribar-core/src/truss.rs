use std::f64::consts::SQRT_2;
use std::fmt;

use crate::{AreaPair, StudyConfig};

/// Number of member-stress constraints.
pub const CONSTRAINT_COUNT: usize = 3;

/// Absolute slack below which a constraint counts as active.
pub const ACTIVE_TOLERANCE: f64 = 1e-6;

/// The three objective variants of the study.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
    /// Material volume of the three members.
    Material,
    /// Tip deflection under the applied load.
    Deflection,
    /// Weighted blend of material volume and deflection.
    Weighted,
}

impl Objective {
    /// All variants, in study order.
    pub const ALL: [Self; 3] = [Self::Material, Self::Deflection, Self::Weighted];

    /// 1-based position of the variant in the study.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Material => 1,
            Self::Deflection => 2,
            Self::Weighted => 3,
        }
    }

    /// Display title used in tables and figure names.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Material => "Material Volume",
            Self::Deflection => "Tip Deflection",
            Self::Weighted => "Weighted Blend",
        }
    }
}

/// The three-bar bracket sizing problem.
///
/// Two inclined outer members of area `a1` and a vertical middle member of
/// area `a2` carry a load `P` at the tip. Every method is a pure function of
/// its inputs, which keeps repeated evaluation and finite-difference
/// gradients inside the solver valid.
#[derive(Debug, Clone, Copy)]
pub struct TrussProblem {
    config: StudyConfig,
}

impl TrussProblem {
    #[must_use]
    pub const fn new(config: StudyConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &StudyConfig {
        &self.config
    }

    /// Total material volume of the members, `2·√2·a1 + a2`.
    #[must_use]
    pub fn material_volume(&self, a: AreaPair) -> f64 {
        2.0 * SQRT_2 * a.a1 + a.a2
    }

    /// Tip deflection under the applied load, `(P·H/E) / (a1 + √2·a2)`.
    #[must_use]
    pub fn deflection(&self, a: AreaPair) -> f64 {
        let c = &self.config;
        (c.load * c.height / c.modulus) / (a.a1 + SQRT_2 * a.a2)
    }

    /// Weighted blend of material volume and deflection.
    ///
    /// Weights are normalized by their sum, so the default 0.5/0.5 pair
    /// reproduces the arithmetic mean of the two sub-objectives exactly.
    #[must_use]
    pub fn weighted(&self, a: AreaPair) -> f64 {
        let c = &self.config;
        let total = c.material_weight + c.deflection_weight;
        (c.material_weight / total) * self.material_volume(a)
            + (c.deflection_weight / total) * self.deflection(a)
    }

    /// Evaluates one objective variant at a point.
    #[must_use]
    pub fn evaluate(&self, objective: Objective, a: AreaPair) -> f64 {
        match objective {
            Objective::Material => self.material_volume(a),
            Objective::Deflection => self.deflection(a),
            Objective::Weighted => self.weighted(a),
        }
    }

    /// Axial stresses `[σ1, σ2, σ3]` in the three members.
    ///
    /// The denominators vanish when an area reaches zero; the config
    /// invariant `area_min > 0` together with the solver's box bounds keeps
    /// evaluation away from the singularity.
    #[must_use]
    pub fn member_stresses(&self, a: AreaPair) -> [f64; CONSTRAINT_COUNT] {
        let AreaPair { a1, a2 } = a;
        let p = self.config.load;
        let cross = SQRT_2 * a1 * a1 + 2.0 * a1 * a2;
        [
            p * (a2 + SQRT_2 * a1) / cross,
            p / (a1 + SQRT_2 * a2),
            p * a2 / cross,
        ]
    }

    /// Slack of each stress constraint, `limit − stress`.
    ///
    /// A point is feasible when every value is non-negative.
    #[must_use]
    pub fn constraint_values(&self, a: AreaPair) -> [f64; CONSTRAINT_COUNT] {
        let [s1, s2, s3] = self.member_stresses(a);
        [
            self.config.sigma_tension - s1,
            self.config.sigma_tension - s2,
            self.config.sigma_compression - s3,
        ]
    }

    /// Whether all constraints hold at `a`, within an absolute tolerance.
    #[must_use]
    pub fn is_feasible(&self, a: AreaPair, tol: f64) -> bool {
        self.constraint_values(a).iter().all(|&v| v >= -tol)
    }
}

/// The constraints with zero slack at a point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSet {
    indices: Vec<usize>,
}

impl ActiveSet {
    /// Classifies which constraint values sit within `tol` of zero.
    #[must_use]
    pub fn classify(values: &[f64; CONSTRAINT_COUNT], tol: f64) -> Self {
        let indices = values
            .iter()
            .enumerate()
            .filter(|&(_, v)| v.abs() <= tol)
            .map(|(i, _)| i + 1)
            .collect();
        Self { indices }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// 1-based indices of the active constraints, in constraint order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}

impl fmt::Display for ActiveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.indices.is_empty() {
            return f.write_str("None");
        }
        let labels: Vec<String> = self
            .indices
            .iter()
            .map(|i| format!("Constraint {i}"))
            .collect();
        f.write_str(&labels.join(", "))
    }
}
