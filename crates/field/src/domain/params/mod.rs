mod field_filter;
mod field_patch;

pub use field_filter::{FieldFilter, FilterCondition, FilterOp, NearPredicate};
pub use field_patch::FieldPatch;
