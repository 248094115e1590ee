// crates/field/src/utils/field_repository_stub.rs

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use async_trait::async_trait;
use shared_kernel::domain::entities::Entity;
use shared_kernel::errors::{DomainError, Result};
use crate::domain::entities::Field;
use crate::domain::params::{FieldFilter, FieldPatch};
use crate::domain::repositories::FieldRepository;
use crate::domain::value_objects::FieldId;

// --- STUB FIELD REPOSITORY (Postgres) ---
/// Store en mémoire, ordre d'insertion conservé. Le prédicat `near`
/// est évalué en haversine comme ST_DWithin sur geography.
#[derive(Default)]
pub struct FieldRepositoryStub {
    pub fields: Mutex<Vec<Field>>,
    pub error_to_return: Mutex<Option<DomainError>>,
    pub find_by_id_calls: AtomicUsize,
}

impl FieldRepositoryStub {
    pub fn with_fields(fields: Vec<Field>) -> Self {
        Self {
            fields: Mutex::new(fields),
            ..Default::default()
        }
    }

    pub fn fail_with(&self, err: DomainError) {
        *self.error_to_return.lock().unwrap() = Some(err);
    }

    pub fn contains(&self, id: &FieldId) -> bool {
        self.fields.lock().unwrap().iter().any(|f| f.id() == id)
    }

    pub fn find_by_id_calls(&self) -> usize {
        self.find_by_id_calls.load(Ordering::SeqCst)
    }

    fn check_error(&self) -> Result<()> {
        match self.error_to_return.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl FieldRepository for FieldRepositoryStub {
    async fn insert(&self, field: &Field) -> Result<()> {
        self.check_error()?;
        let mut fields = self.fields.lock().unwrap();
        if fields.iter().any(|f| f.id() == field.id()) {
            return Err(DomainError::Store(format!("duplicate key {}", field.id())));
        }
        fields.push(field.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &FieldId) -> Result<Option<Field>> {
        self.find_by_id_calls.fetch_add(1, Ordering::SeqCst);
        self.check_error()?;
        Ok(self.fields.lock().unwrap().iter().find(|f| f.id() == id).cloned())
    }

    async fn find_many(&self, filter: &FieldFilter) -> Result<Vec<Field>> {
        self.check_error()?;
        let fields = self.fields.lock().unwrap();

        let mut matched: Vec<(Field, f64)> = fields
            .iter()
            .filter(|f| {
                let doc = serde_json::to_value(f.attributes()).unwrap_or_default();
                filter.matches_document(&doc)
            })
            .filter_map(|f| match filter.near_predicate() {
                Some(near) => {
                    let distance = near.center.distance_to(&f.location());
                    (distance <= near.max_distance.meters()).then(|| (f.clone(), distance))
                }
                None => Some((f.clone(), 0.0)),
            })
            .collect();

        if filter.near_predicate().is_some() {
            matched.sort_by(|a, b| a.1.total_cmp(&b.1));
        }

        let limit = filter.max_results().unwrap_or(usize::MAX);
        Ok(matched.into_iter().take(limit).map(|(f, _)| f).collect())
    }

    async fn update(&self, id: &FieldId, patch: &FieldPatch) -> Result<Option<Field>> {
        self.check_error()?;
        let mut fields = self.fields.lock().unwrap();
        Ok(fields.iter_mut().find(|f| f.id() == id).map(|f| {
            f.apply_patch(patch);
            f.clone()
        }))
    }

    async fn delete(&self, id: &FieldId) -> Result<bool> {
        self.check_error()?;
        let mut fields = self.fields.lock().unwrap();
        let before = fields.len();
        fields.retain(|f| f.id() != id);
        Ok(fields.len() != before)
    }
}
