// crates/field/src/application/update_field/update_field_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::Result;
use crate::application::geo_search::GeoSearchCoordinator;
use crate::application::update_field::UpdateFieldCommand;
use crate::domain::entities::Field;
use crate::domain::repositories::FieldRepository;

pub struct UpdateFieldUseCase {
    repo: Arc<dyn FieldRepository>,
    geo: Arc<GeoSearchCoordinator>,
}

impl UpdateFieldUseCase {
    pub fn new(repo: Arc<dyn FieldRepository>, geo: Arc<GeoSearchCoordinator>) -> Self {
        Self { repo, geo }
    }

    pub async fn execute(&self, cmd: UpdateFieldCommand) -> Result<Field> {
        // 1. Un point désérialisé n'est pas validé : on le fait avant toute écriture
        if let Some(location) = &cmd.patch.location {
            location.validate()?;
        }

        // 2. Récupération
        let current = self.repo
            .find_by_id(&cmd.field_id)
            .await?
            .ok_or_not_found(cmd.field_id)?;

        // Idempotence : rien à écrire
        if cmd.patch.is_empty() {
            return Ok(current);
        }

        // 3. Mise à jour partielle côté store (supprimé entre-temps => NotFound)
        let updated = self.repo
            .update(&cmd.field_id, &cmd.patch)
            .await?
            .ok_or_not_found(cmd.field_id)?;

        // 4. Ré-indexation uniquement si la position a bougé
        if let Some(location) = cmd.patch.location.filter(|l| *l != current.location()) {
            if let Err(e) = self.geo.index_location(&cmd.field_id, location.lon(), location.lat()).await {
                tracing::error!(field_id = %cmd.field_id, error = %e, "Field moved but location re-indexing failed");
            }
        }

        Ok(updated)
    }
}
