#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use shared_kernel::domain::entities::Entity;
    use shared_kernel::domain::value_objects::GeoPoint;
    use shared_kernel::errors::DomainError;
    use crate::application::get_field::{GetFieldCommand, GetFieldUseCase};
    use crate::domain::builders::FieldBuilder;
    use crate::domain::value_objects::FieldId;
    use crate::utils::FieldRepositoryStub;

    #[tokio::test]
    async fn test_get_existing_field() {
        let field = FieldBuilder::new(GeoPoint::try_new(2.35, 48.85).unwrap())
            .with_name("Stade Charléty")
            .build();
        let repo = Arc::new(FieldRepositoryStub::with_fields(vec![field.clone()]));
        let use_case = GetFieldUseCase::new(repo);

        let result = use_case.execute(GetFieldCommand { field_id: *field.id() }).await.unwrap();

        assert_eq!(result, field);
    }

    #[tokio::test]
    async fn test_get_missing_field_is_not_found() {
        let use_case = GetFieldUseCase::new(Arc::new(FieldRepositoryStub::default()));
        let missing = FieldId::new();

        let result = use_case.execute(GetFieldCommand { field_id: missing }).await;

        match result {
            Err(DomainError::NotFound { entity, id }) => {
                assert_eq!(entity, "Field");
                assert_eq!(id, missing.to_string());
            }
            other => panic!("NotFound attendu, obtenu {other:?}"),
        }
    }
}
