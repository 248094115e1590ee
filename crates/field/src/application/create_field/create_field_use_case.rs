// crates/field/src/application/create_field/create_field_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::entities::Entity;
use shared_kernel::domain::value_objects::GeoPoint;
use shared_kernel::errors::Result;
use crate::application::create_field::CreateFieldCommand;
use crate::application::geo_search::GeoSearchCoordinator;
use crate::domain::builders::FieldBuilder;
use crate::domain::entities::Field;
use crate::domain::repositories::FieldRepository;

pub struct CreateFieldUseCase {
    repo: Arc<dyn FieldRepository>,
    geo: Arc<GeoSearchCoordinator>,
}

impl CreateFieldUseCase {
    pub fn new(repo: Arc<dyn FieldRepository>, geo: Arc<GeoSearchCoordinator>) -> Self {
        Self { repo, geo }
    }

    pub async fn execute(&self, cmd: CreateFieldCommand) -> Result<Field> {
        // 1. Validation de la position avant toute écriture
        let location = GeoPoint::try_from(cmd.location)?;

        // 2. Instanciation (l'id est attribué par le builder)
        let field = FieldBuilder::new(location)
            .with_attributes(cmd.attributes)
            .build();

        // 3. Store principal
        self.repo.insert(&field).await?;

        // 4. Index de localisation : pas de rollback du document en cas d'échec
        if let Err(e) = self.geo.index_location(field.id(), location.lon(), location.lat()).await {
            tracing::error!(field_id = %field.id(), error = %e, "Field created but location indexing failed");
        }

        tracing::info!(field_id = %field.id(), "Field created");
        Ok(field)
    }
}
