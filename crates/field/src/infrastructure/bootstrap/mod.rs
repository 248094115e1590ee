mod field_service_config;
mod field_service_context;

pub use field_service_config::FieldServiceConfig;
pub use field_service_context::{FieldServiceContext, FieldServiceContextBuilder, SERVICE_NAME};
