#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use shared_kernel::domain::entities::Entity;
    use shared_kernel::domain::value_objects::GeoPoint;
    use shared_kernel::errors::DomainError;
    use crate::application::delete_field::{DeleteFieldCommand, DeleteFieldUseCase};
    use crate::application::geo_search::{GeoSearchCoordinator, SearchQuery};
    use crate::domain::builders::FieldBuilder;
    use crate::domain::entities::Field;
    use crate::domain::value_objects::FieldId;
    use crate::utils::{FieldRepositoryStub, LocationIndexStub};

    async fn setup() -> (DeleteFieldUseCase, Arc<GeoSearchCoordinator>, Arc<FieldRepositoryStub>, Arc<LocationIndexStub>, Field) {
        let field = FieldBuilder::new(GeoPoint::try_new(-122.42, 37.77).unwrap()).build();
        let repo = Arc::new(FieldRepositoryStub::with_fields(vec![field.clone()]));
        let index = Arc::new(LocationIndexStub::default());
        let geo = Arc::new(GeoSearchCoordinator::new(repo.clone(), Some(index.clone())));
        geo.index_location(field.id(), -122.42, 37.77).await.unwrap();

        (DeleteFieldUseCase::new(repo.clone(), geo.clone()), geo, repo, index, field)
    }

    #[tokio::test]
    async fn test_deleted_field_disappears_from_search() {
        let (use_case, geo, repo, index, field) = setup().await;
        let query = SearchQuery::new(-122.42, 37.77, 1.0);
        assert_eq!(geo.search(&query).await.unwrap().total_count, 1);

        use_case.execute(DeleteFieldCommand { field_id: *field.id() }).await.unwrap();

        assert!(!repo.contains(field.id()));
        assert!(index.is_empty());
        assert_eq!(geo.search(&query).await.unwrap().total_count, 0);
    }

    #[tokio::test]
    async fn test_delete_is_replayable() {
        let (use_case, _, _, _, field) = setup().await;

        use_case.execute(DeleteFieldCommand { field_id: *field.id() }).await.unwrap();
        use_case.execute(DeleteFieldCommand { field_id: *field.id() }).await.unwrap();
    }

    #[tokio::test]
    async fn test_unknown_id_is_tolerated() {
        let (use_case, _, repo, index, _) = setup().await;

        use_case.execute(DeleteFieldCommand { field_id: FieldId::new() }).await.unwrap();

        assert_eq!(repo.fields.lock().unwrap().len(), 1);
        assert_eq!(index.len(), 1);
    }

    #[tokio::test]
    async fn test_index_failure_is_surfaced_after_store_delete() {
        let (use_case, _, repo, index, field) = setup().await;
        index.fail_with(DomainError::IndexWrite("connection refused".into()));

        let result = use_case.execute(DeleteFieldCommand { field_id: *field.id() }).await;

        assert!(matches!(result, Err(DomainError::IndexWrite(_))));
        assert!(!repo.contains(field.id()));
    }

    #[tokio::test]
    async fn test_store_failure_still_removes_index_entry() {
        let (use_case, _, repo, index, field) = setup().await;
        repo.fail_with(DomainError::Store("timeout".into()));

        let result = use_case.execute(DeleteFieldCommand { field_id: *field.id() }).await;

        assert!(matches!(result, Err(DomainError::Store(_))));
        assert!(index.is_empty());
    }
}
