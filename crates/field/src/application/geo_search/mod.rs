mod geo_search_coordinator;
mod search_query;
mod search_result;

pub use geo_search_coordinator::{GeoSearchCoordinator, SearchMode};
pub use search_query::{SearchQuery, DEFAULT_MAX_RESULTS};
pub use search_result::{NearbyCandidates, SearchResult};
