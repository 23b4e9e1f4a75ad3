//! The three-variant bracket sizing study.
//!
//! Runs each objective variant through the solve runner from a shared
//! starting point, times the solve, classifies the active constraints at the
//! optimum, and assembles one summary row per variant. [`render_trace`] and
//! [`render_summary`] format the console tables; figure rendering is driven
//! by the binary.

mod report;
mod study;

pub use report::{render_summary, render_trace};
pub use study::{SummaryRow, VariantSettings, run_variant, variant_settings};
