// crates/field/src/application/get_field/get_field_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::errors::Result;
use crate::application::get_field::GetFieldCommand;
use crate::domain::entities::Field;
use crate::domain::repositories::FieldRepository;

pub struct GetFieldUseCase {
    repo: Arc<dyn FieldRepository>,
}

impl GetFieldUseCase {
    pub fn new(repo: Arc<dyn FieldRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, cmd: GetFieldCommand) -> Result<Field> {
        self.repo
            .find_by_id(&cmd.field_id)
            .await?
            .ok_or_not_found(cmd.field_id)
    }
}
