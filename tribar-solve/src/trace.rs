use slsqp_rssl::{SlsqpEvent, SlsqpObserver};

/// One major solver iteration: the iterate and its objective value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationRecord {
    /// 1-based index in solve order.
    pub iteration: usize,
    /// Decision variables at this iterate.
    pub x: [f64; 2],
    /// Objective value re-evaluated at the iterate.
    pub objective: f64,
}

/// Accumulates one [`IterationRecord`] per major solver iteration.
///
/// The solver emits a step event after every internal step; line-search
/// steps share a major iteration number, so only the first event of each new
/// iteration is kept. The objective is re-evaluated at the recorded iterate
/// rather than read back from solver internals.
pub(crate) struct Trace<'a, F> {
    objective: &'a F,
    records: Vec<IterationRecord>,
    last_iteration: usize,
}

impl<'a, F> Trace<'a, F>
where
    F: Fn(&[f64]) -> f64,
{
    pub(crate) fn new(objective: &'a F) -> Self {
        Self {
            objective,
            records: Vec::new(),
            last_iteration: 0,
        }
    }

    pub(crate) fn into_records(self) -> Vec<IterationRecord> {
        self.records
    }
}

impl<F> SlsqpObserver for &mut Trace<'_, F>
where
    F: Fn(&[f64]) -> f64,
{
    fn is_active(&self) -> bool {
        true
    }

    fn on_event(&mut self, event: SlsqpEvent) {
        let SlsqpEvent::Step { iter, x, .. } = event;
        if iter <= self.last_iteration || x.len() < 2 {
            return;
        }
        self.last_iteration = iter;

        let point = [x[0], x[1]];
        self.records.push(IterationRecord {
            iteration: self.records.len() + 1,
            x: point,
            objective: (self.objective)(&point),
        });
    }
}
