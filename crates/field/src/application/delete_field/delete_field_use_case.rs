// crates/field/src/application/delete_field/delete_field_use_case.rs

use std::sync::Arc;
use shared_kernel::errors::Result;
use crate::application::delete_field::DeleteFieldCommand;
use crate::application::geo_search::GeoSearchCoordinator;
use crate::domain::repositories::FieldRepository;

/// Rejouable : un second appel ne trouve rien à supprimer et réussit.
pub struct DeleteFieldUseCase {
    repo: Arc<dyn FieldRepository>,
    geo: Arc<GeoSearchCoordinator>,
}

impl DeleteFieldUseCase {
    pub fn new(repo: Arc<dyn FieldRepository>, geo: Arc<GeoSearchCoordinator>) -> Self {
        Self { repo, geo }
    }

    pub async fn execute(&self, cmd: DeleteFieldCommand) -> Result<()> {
        let id = cmd.field_id;

        // 1. Store principal
        let deleted = self.repo.delete(&id).await;
        match &deleted {
            Ok(true) => tracing::info!(field_id = %id, "Field deleted"),
            Ok(false) => tracing::warn!(field_id = %id, "Field delete affected no row"),
            Err(e) => tracing::error!(field_id = %id, error = %e, "Field delete failed in store"),
        }

        // 2. L'entrée d'index est retirée dans tous les cas
        let removed = self.geo.remove_location(&id).await;

        deleted?;
        removed
    }
}
