//! Schema validation: column checks, the evaluator that composes them, and
//! the issues they report.

mod checks;
mod evaluator;
mod issue;

pub use checks::{CategoricalCheck, ColumnCheck, RangeCheck, TypeCheck, UniquenessCheck};
pub use evaluator::{ConstraintEvaluator, SchemaValidation};
pub use issue::{Issue, IssueDetail, IssueKind};
