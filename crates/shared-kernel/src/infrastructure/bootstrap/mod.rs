mod health;

pub use health::{HealthReport, HealthState, HealthStatus};
