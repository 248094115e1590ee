// crates/field/src/application/field_dto.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared_kernel::domain::entities::Entity;
use shared_kernel::domain::value_objects::GeoJsonPoint;
use crate::application::geo_search::SearchResult;
use crate::domain::entities::Field;
use crate::domain::value_objects::{FieldAttributes, FieldId};

/// Représentation d'un terrain vers la couche externe
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDto {
    pub id: FieldId,
    pub location: GeoJsonPoint,
    #[serde(flatten)]
    pub attributes: FieldAttributes,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Field> for FieldDto {
    fn from(field: Field) -> Self {
        Self {
            id: *field.id(),
            location: GeoJsonPoint::from(field.location()),
            created_at: field.created_at(),
            updated_at: field.updated_at(),
            attributes: field.attributes().clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldsResponse {
    pub total_fields: usize,
    pub fields: Vec<FieldDto>,
}

impl From<SearchResult> for FieldsResponse {
    fn from(result: SearchResult) -> Self {
        Self {
            total_fields: result.total_count,
            fields: result.fields.into_iter().map(FieldDto::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_kernel::domain::value_objects::GeoPoint;
    use crate::domain::builders::FieldBuilder;

    #[test]
    fn test_fields_response_shape() {
        let field = FieldBuilder::new(GeoPoint::try_new(-122.42, 37.77).unwrap())
            .with_name("Dolores Park")
            .with_visibility(true)
            .build();
        let id = field.id().to_string();

        let response = FieldsResponse::from(SearchResult { fields: vec![field], total_count: 1 });
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["totalFields"], 1);
        let dto = &json["fields"][0];
        assert_eq!(dto["id"], id);
        assert_eq!(dto["name"], "Dolores Park");
        assert_eq!(dto["isPublic"], true);
        assert_eq!(dto["location"], serde_json::json!({ "type": "Point", "coordinates": [-122.42, 37.77] }));
        assert!(dto.get("createdAt").is_some());
    }
}
