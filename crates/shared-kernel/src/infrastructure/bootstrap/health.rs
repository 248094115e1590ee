// crates/shared-kernel/src/infrastructure/bootstrap/health.rs

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthStatus {
    #[serde(rename = "initializing")]
    Initializing,
    #[serde(rename = "ok")]
    Ok,
    #[serde(rename = "no connection to database")]
    DbConnection,
    #[serde(rename = "unknown error")]
    Unknown,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initializing => "initializing",
            Self::Ok => "ok",
            Self::DbConnection => "no connection to database",
            Self::Unknown => "unknown error",
        }
    }

    fn to_u8(self) -> u8 {
        match self {
            Self::Initializing => 0,
            Self::Ok => 1,
            Self::DbConnection => 2,
            Self::Unknown => 3,
        }
    }

    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Initializing,
            1 => Self::Ok,
            2 => Self::DbConnection,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Statut de santé partagé. Écrit uniquement par le contexte de service
/// (connexion, ping), lu par la couche qui expose la santé.
#[derive(Debug, Clone)]
pub struct HealthState {
    status: Arc<AtomicU8>,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            status: Arc::new(AtomicU8::new(HealthStatus::Initializing.to_u8())),
        }
    }
}

impl HealthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> HealthStatus {
        HealthStatus::from_u8(self.status.load(Ordering::Acquire))
    }

    pub fn set(&self, status: HealthStatus) {
        let previous = HealthStatus::from_u8(self.status.swap(status.to_u8(), Ordering::AcqRel));
        if previous != status {
            tracing::info!(from = %previous, to = %status, "Health status changed");
        }
    }

    pub fn report(&self, service: &'static str) -> HealthReport {
        HealthReport { service, status: self.get() }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub service: &'static str,
    pub status: HealthStatus,
}
