mod search_nearby_fields_command;
mod search_nearby_fields_use_case;

pub use search_nearby_fields_command::SearchNearbyFieldsCommand;
pub use search_nearby_fields_use_case::SearchNearbyFieldsUseCase;
