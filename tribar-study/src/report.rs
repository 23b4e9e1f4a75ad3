use tribar_solve::IterationRecord;

use crate::SummaryRow;

/// Formats the per-run iteration trace as a fixed-width table.
#[must_use]
pub fn render_trace(trace: &[IterationRecord]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>9}  {:>12}  {:>12}  {:>12}\n",
        "Iteration", "A1", "A2", "f(X)"
    ));
    for record in trace {
        out.push_str(&format!(
            "{:>9}  {:>12.6}  {:>12.6}  {:>12.6}\n",
            record.iteration, record.x[0], record.x[1], record.objective
        ));
    }
    out
}

/// Formats the cross-run summary as a fixed-width table.
#[must_use]
pub fn render_summary(rows: &[SummaryRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<16}  {:>10}  {:>10}  {:>10}  {:>10}  {:<26}  {:>10}  {:>10}  {:>16}\n",
        "Title", "A1", "A2", "f(X)", "Iterations", "Active Constraints", "f1(x)", "f2(x)", "Runtime"
    ));
    for row in rows {
        out.push_str(&format!(
            "{:<16}  {:>10.6}  {:>10.6}  {:>10.6}  {:>10}  {:<26}  {:>10.6}  {:>10.6}  {:>16}\n",
            row.title,
            row.optimum.a1,
            row.optimum.a2,
            row.objective,
            row.iterations,
            row.active_constraints,
            row.material,
            row.deflection,
            format!("{:.4} seconds", row.runtime.as_secs_f64()),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tribar_core::AreaPair;

    use super::*;

    #[test]
    fn trace_table_lists_every_iteration() {
        let trace = [
            IterationRecord {
                iteration: 1,
                x: [2.0, 2.0],
                objective: 7.656854,
            },
            IterationRecord {
                iteration: 2,
                x: [1.6, 0.9],
                objective: 5.425483,
            },
        ];

        let table = render_trace(&trace);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Iteration"));
        assert!(lines[0].contains("f(X)"));
        assert!(lines[1].contains("7.656854"));
        assert!(lines[2].contains("5.425483"));
    }

    #[test]
    fn summary_table_carries_all_columns() {
        let rows = [SummaryRow {
            title: "Material Volume",
            optimum: AreaPair::new(1.577350, 0.816497),
            objective: 5.277917,
            iterations: 8,
            active_constraints: "Constraint 1".to_string(),
            material: 5.277917,
            deflection: 8.784610,
            runtime: Duration::from_micros(123_400),
            converged: true,
        }];

        let table = render_summary(&rows);
        assert!(table.contains("Material Volume"));
        assert!(table.contains("Constraint 1"));
        assert!(table.contains("5.277917"));
        assert!(table.contains("8.784610"));
        assert!(table.contains("0.1234 seconds"));
    }
}
