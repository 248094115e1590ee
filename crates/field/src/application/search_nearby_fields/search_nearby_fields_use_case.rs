// crates/field/src/application/search_nearby_fields/search_nearby_fields_use_case.rs

use std::sync::Arc;
use shared_kernel::errors::Result;
use crate::application::field_dto::FieldsResponse;
use crate::application::geo_search::{GeoSearchCoordinator, SearchQuery, DEFAULT_MAX_RESULTS};
use crate::application::search_nearby_fields::SearchNearbyFieldsCommand;

pub struct SearchNearbyFieldsUseCase {
    geo: Arc<GeoSearchCoordinator>,
    default_max_results: usize,
}

impl SearchNearbyFieldsUseCase {
    pub fn new(geo: Arc<GeoSearchCoordinator>) -> Self {
        Self { geo, default_max_results: DEFAULT_MAX_RESULTS }
    }

    pub fn with_default_max_results(mut self, max_results: usize) -> Self {
        self.default_max_results = max_results;
        self
    }

    pub async fn execute(&self, cmd: SearchNearbyFieldsCommand) -> Result<FieldsResponse> {
        let query = SearchQuery::new(cmd.longitude, cmd.latitude, cmd.radius)
            .with_unit(cmd.unit)
            .with_max_results(cmd.max_results.unwrap_or(self.default_max_results));

        let result = self.geo.search(&query).await?;
        Ok(FieldsResponse::from(result))
    }
}
