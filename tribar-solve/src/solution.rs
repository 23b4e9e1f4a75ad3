use slsqp_rssl::{SlsqpError, SlsqpMode, SlsqpResult};

use crate::IterationRecord;

/// Indicates how the solver finished.
///
/// Non-convergence is data, not an error: callers decide whether to warn,
/// retry, or discard the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// The solver reported successful convergence.
    Converged,

    /// The iteration cap was reached before convergence.
    IterationLimit,

    /// The solver stopped on an internal failure.
    Failed {
        /// Solver exit code.
        code: i32,
        /// Solver exit description.
        message: String,
    },
}

impl Status {
    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(self, Self::Converged)
    }
}

/// The outcome of one constrained minimization run.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Best decision variables found.
    pub x: [f64; 2],

    /// Objective value at `x`.
    pub objective: f64,

    /// Major iterations performed, equal to the trace length.
    pub iterations: usize,

    /// One record per major iteration, in solve order.
    pub trace: Vec<IterationRecord>,
}

impl Solution {
    pub(crate) fn new(result: SlsqpResult, trace: Vec<IterationRecord>) -> Self {
        let status = if result.status == SlsqpMode::Success as i32 {
            Status::Converged
        } else if result.status == SlsqpError::IterationLimitExceeded as i32 {
            Status::IterationLimit
        } else {
            Status::Failed {
                code: result.status,
                message: result.message,
            }
        };

        Self {
            status,
            x: [result.x[0], result.x[1]],
            objective: result.fun,
            iterations: trace.len(),
            trace,
        }
    }
}
