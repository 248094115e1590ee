// crates/field/src/infrastructure/postgres/rows/postgres_field_row.rs

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;
use shared_kernel::domain::value_objects::GeoPoint;
use shared_kernel::domain::Identifier;
use shared_kernel::errors::{DomainError, Result};
use crate::domain::builders::FieldBuilder;
use crate::domain::entities::Field;
use crate::domain::value_objects::{FieldAttributes, FieldId};

/// Colonnes communes à toutes les lectures de `fields`
pub(crate) const FIELD_COLUMNS: &str = r#"
    id, document,
    ST_X(location::geometry) AS lon,
    ST_Y(location::geometry) AS lat,
    created_at, updated_at
"#;

#[derive(FromRow)]
pub struct PostgresFieldRow {
    pub id: Uuid,
    pub document: Json<FieldAttributes>,
    pub lon: f64,
    pub lat: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<PostgresFieldRow> for Field {
    type Error = DomainError;

    fn try_from(row: PostgresFieldRow) -> Result<Self> {
        // La colonne geography garantit des bornes valides : restauration sans validation
        Ok(FieldBuilder::restore(
            FieldId::from_uuid(row.id),
            GeoPoint::from_raw(row.lon, row.lat),
            row.document.0,
            row.created_at,
            row.updated_at,
        ))
    }
}
