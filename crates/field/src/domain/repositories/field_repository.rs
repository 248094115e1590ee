// crates/field/src/domain/repositories/field_repository.rs

use async_trait::async_trait;
use shared_kernel::errors::Result;
use crate::domain::entities::Field;
use crate::domain::params::{FieldFilter, FieldPatch};
use crate::domain::value_objects::FieldId;

/// Store principal des terrains (source de vérité)
#[async_trait]
pub trait FieldRepository: Send + Sync {
    async fn insert(&self, field: &Field) -> Result<()>;

    async fn find_by_id(&self, id: &FieldId) -> Result<Option<Field>>;

    /// Avec un prédicat `near`, résultats triés du plus proche au plus lointain
    async fn find_many(&self, filter: &FieldFilter) -> Result<Vec<Field>>;

    /// Applique le patch et retourne le document à jour, `None` si absent
    async fn update(&self, id: &FieldId, patch: &FieldPatch) -> Result<Option<Field>>;

    /// `true` si une ligne a été supprimée
    async fn delete(&self, id: &FieldId) -> Result<bool>;
}
