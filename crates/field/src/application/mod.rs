pub mod create_field;
pub mod delete_field;
pub mod field_dto;
pub mod geo_search;
pub mod get_field;
pub mod search_nearby_fields;
pub mod update_field;
