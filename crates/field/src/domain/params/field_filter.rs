// crates/field/src/domain/params/field_filter.rs

use serde_json::Value;
use shared_kernel::domain::value_objects::{Distance, GeoPoint};
use shared_kernel::errors::{DomainError, Result};
use crate::domain::value_objects::FieldAttributes;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Gt,
    Gte,
    Lt,
    Lte,
}

/// `attribut <op> valeur` sur le document. Pour `Eq`, un attribut tableau
/// (ex: `sports`) correspond s'il contient la valeur.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCondition {
    attribute: &'static str,
    op: FilterOp,
    value: Value,
}

impl FilterCondition {
    pub fn attribute(&self) -> &'static str { self.attribute }
    pub fn op(&self) -> FilterOp { self.op }
    pub fn value(&self) -> &Value { &self.value }
}

/// Prédicat géo natif : `near center, maxDistance radius`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearPredicate {
    pub center: GeoPoint,
    pub max_distance: Distance,
}

/// Conjonction de conditions, prédicat géo optionnel, limite optionnelle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldFilter {
    conditions: Vec<FilterCondition>,
    near: Option<NearPredicate>,
    limit: Option<usize>,
}

impl FieldFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_condition(mut self, attribute: &str, op: FilterOp, value: impl Into<Value>) -> Result<Self> {
        let attribute = FieldAttributes::FILTERABLE
            .iter()
            .copied()
            .find(|known| *known == attribute)
            .ok_or_else(|| DomainError::Validation {
                field: "filter.attribute",
                reason: format!("Unknown field attribute '{attribute}'"),
            })?;

        let value = value.into();
        if op != FilterOp::Eq && !(value.is_number() || value.is_string()) {
            return Err(DomainError::Validation {
                field: "filter.value",
                reason: format!("Range filters need a number or a string, got {value}"),
            });
        }

        self.conditions.push(FilterCondition { attribute, op, value });
        Ok(self)
    }

    pub fn where_eq(self, attribute: &str, value: impl Into<Value>) -> Result<Self> {
        self.with_condition(attribute, FilterOp::Eq, value)
    }

    pub fn near(mut self, center: GeoPoint, max_distance: Distance) -> Self {
        self.near = Some(NearPredicate { center, max_distance });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn conditions(&self) -> &[FilterCondition] { &self.conditions }
    pub fn near_predicate(&self) -> Option<&NearPredicate> { self.near.as_ref() }
    pub fn max_results(&self) -> Option<usize> { self.limit }

    /// Évaluation en mémoire des conditions (hors prédicat géo)
    pub fn matches_document(&self, document: &Value) -> bool {
        self.conditions.iter().all(|c| c.matches(document.get(c.attribute)))
    }
}

impl FilterCondition {
    fn matches(&self, actual: Option<&Value>) -> bool {
        let Some(actual) = actual else { return false };

        if self.op == FilterOp::Eq {
            return match actual {
                Value::Array(items) => items.contains(&self.value) || actual == &self.value,
                _ => actual == &self.value,
            };
        }

        let ordering = match (actual, &self.value) {
            (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
                (Some(a), Some(b)) => a.partial_cmp(&b),
                _ => None,
            },
            (Value::String(a), Value::String(b)) => Some(a.as_str().cmp(b.as_str())),
            _ => None,
        };

        let Some(ordering) = ordering else { return false };
        match self.op {
            FilterOp::Gt => ordering.is_gt(),
            FilterOp::Gte => ordering.is_ge(),
            FilterOp::Lt => ordering.is_lt(),
            FilterOp::Lte => ordering.is_le(),
            FilterOp::Eq => ordering.is_eq(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_attribute_is_rejected() {
        let result = FieldFilter::new().where_eq("location; DROP TABLE fields", "x");
        assert!(matches!(result, Err(DomainError::Validation { field: "filter.attribute", .. })));
    }

    #[test]
    fn test_range_on_bool_is_rejected() {
        let result = FieldFilter::new().with_condition("isPublic", FilterOp::Gt, true);
        assert!(matches!(result, Err(DomainError::Validation { field: "filter.value", .. })));
    }

    #[test]
    fn test_conditions_are_a_conjunction() {
        let doc = json!({ "city": "Paris", "sports": ["soccer", "tennis"], "isPublic": true });

        let filter = FieldFilter::new()
            .where_eq("city", "Paris").unwrap()
            .where_eq("sports", "tennis").unwrap();
        assert!(filter.matches_document(&doc));

        let filter = filter.where_eq("isPublic", false).unwrap();
        assert!(!filter.matches_document(&doc));
    }

    #[test]
    fn test_range_on_strings() {
        let doc = json!({ "name": "Marcel Cerdan" });

        let after_l = FieldFilter::new().with_condition("name", FilterOp::Gte, "L").unwrap();
        let before_l = FieldFilter::new().with_condition("name", FilterOp::Lt, "L").unwrap();

        assert!(after_l.matches_document(&doc));
        assert!(!before_l.matches_document(&doc));
    }

    #[test]
    fn test_missing_attribute_never_matches() {
        let filter = FieldFilter::new().where_eq("owner", "someone").unwrap();
        assert!(!filter.matches_document(&json!({})));
    }
}
