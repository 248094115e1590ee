// crates/field/src/infrastructure/postgres/repositories/postgres_field_repository.rs

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{PgPool, Postgres, QueryBuilder};
use shared_kernel::domain::entities::Entity;
use shared_kernel::domain::Identifier;
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::infrastructure::postgres::SqlxErrorExt;
use crate::domain::entities::Field;
use crate::domain::params::{FieldFilter, FieldPatch, FilterCondition, FilterOp};
use crate::domain::repositories::FieldRepository;
use crate::domain::value_objects::FieldId;
use crate::infrastructure::postgres::rows::{PostgresFieldRow, FIELD_COLUMNS};

/// Store principal : document JSONB + colonne geography(Point, 4326)
pub struct PostgresFieldRepository {
    pool: PgPool,
}

impl PostgresFieldRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn push_condition(qb: &mut QueryBuilder<'_, Postgres>, condition: &FilterCondition) {
        let attribute = condition.attribute();

        match condition.op() {
            FilterOp::Eq => {
                // Égalité stricte, ou appartenance si l'attribut est un tableau
                qb.push(" AND (document -> ")
                    .push_bind(attribute)
                    .push("::text = ")
                    .push_bind(condition.value().clone())
                    .push(" OR (jsonb_typeof(document -> ")
                    .push_bind(attribute)
                    .push("::text) = 'array' AND document -> ")
                    .push_bind(attribute)
                    .push("::text @> jsonb_build_array(")
                    .push_bind(condition.value().clone())
                    .push(")))");
            }
            op => {
                let sql_op = match op {
                    FilterOp::Gt => " > ",
                    FilterOp::Gte => " >= ",
                    FilterOp::Lt => " < ",
                    _ => " <= ",
                };

                match condition.value() {
                    Value::Number(n) => {
                        // CASE : pas de cast sur un attribut non numérique
                        qb.push(" AND CASE WHEN jsonb_typeof(document -> ")
                            .push_bind(attribute)
                            .push("::text) = 'number' THEN (document ->> ")
                            .push_bind(attribute)
                            .push("::text)::float8 END")
                            .push(sql_op)
                            .push_bind(n.as_f64().unwrap_or_default());
                    }
                    other => {
                        qb.push(" AND document ->> ")
                            .push_bind(attribute)
                            .push("::text")
                            .push(sql_op)
                            .push_bind(other.as_str().unwrap_or_default().to_string());
                    }
                }
            }
        }
    }
}

#[async_trait]
impl FieldRepository for PostgresFieldRepository {
    async fn insert(&self, field: &Field) -> Result<()> {
        let document = serde_json::to_value(field.attributes())
            .map_err(|e| DomainError::Internal(format!("Field document serialization: {e}")))?;

        let sql = r#"
            INSERT INTO fields (id, document, location, created_at, updated_at)
            VALUES (
                $1, $2,
                ST_SetSRID(ST_MakePoint($3, $4), 4326)::geography,
                $5, $6
            )
        "#;

        sqlx::query(sql)
            .bind(field.id().as_uuid())
            .bind(document)
            .bind(field.location().lon())
            .bind(field.location().lat())
            .bind(field.created_at())
            .bind(field.updated_at())
            .execute(&self.pool)
            .await
            .map_store("FieldInsert")?;

        Ok(())
    }

    async fn find_by_id(&self, id: &FieldId) -> Result<Option<Field>> {
        let sql = format!("SELECT {FIELD_COLUMNS} FROM fields WHERE id = $1");

        let row = sqlx::query_as::<_, PostgresFieldRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_store("FieldFetch")?;

        row.map(Field::try_from).transpose()
    }

    async fn find_many(&self, filter: &FieldFilter) -> Result<Vec<Field>> {
        let mut qb = QueryBuilder::<Postgres>::new(format!("SELECT {FIELD_COLUMNS} FROM fields WHERE TRUE"));

        for condition in filter.conditions() {
            Self::push_condition(&mut qb, condition);
        }

        match filter.near_predicate() {
            Some(near) => {
                let (lon, lat) = (near.center.lon(), near.center.lat());

                qb.push(" AND ST_DWithin(location, ST_SetSRID(ST_MakePoint(")
                    .push_bind(lon)
                    .push(", ")
                    .push_bind(lat)
                    .push("), 4326)::geography, ")
                    .push_bind(near.max_distance.meters())
                    .push(")");

                qb.push(" ORDER BY ST_Distance(location, ST_SetSRID(ST_MakePoint(")
                    .push_bind(lon)
                    .push(", ")
                    .push_bind(lat)
                    .push("), 4326)::geography) ASC, id ASC");
            }
            None => {
                qb.push(" ORDER BY created_at ASC, id ASC");
            }
        }

        if let Some(limit) = filter.max_results() {
            qb.push(" LIMIT ").push_bind(i64::try_from(limit).unwrap_or(i64::MAX));
        }

        let rows = qb
            .build_query_as::<PostgresFieldRow>()
            .fetch_all(&self.pool)
            .await
            .map_store("FieldFindMany")?;

        rows.into_iter().map(Field::try_from).collect()
    }

    async fn update(&self, id: &FieldId, patch: &FieldPatch) -> Result<Option<Field>> {
        // Merge JSONB : seules les clés fournies sont remplacées
        let sql = format!(
            r#"
            UPDATE fields SET
                document = document || $2,
                location = COALESCE(ST_SetSRID(ST_MakePoint($3, $4), 4326)::geography, location),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {FIELD_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, PostgresFieldRow>(&sql)
            .bind(id.as_uuid())
            .bind(Value::Object(patch.to_document()))
            .bind(patch.location.map(|l| l.lon()))
            .bind(patch.location.map(|l| l.lat()))
            .fetch_optional(&self.pool)
            .await
            .map_store("FieldUpdate")?;

        row.map(Field::try_from).transpose()
    }

    async fn delete(&self, id: &FieldId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM fields WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_store("FieldDelete")?;

        Ok(result.rows_affected() > 0)
    }
}
