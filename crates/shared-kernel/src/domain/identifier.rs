// crates/shared-kernel/src/domain/identifier.rs

use uuid::Uuid;

/// Trait pour uniformiser les IDs à travers le système.
/// Les stores ne voient qu'un UUID, l'index Redis que sa forme texte.
pub trait Identifier: serde::Serialize + for<'de> serde::Deserialize<'de> + Clone + Send + Sync + PartialEq {
    fn as_uuid(&self) -> Uuid;
    fn from_uuid(uuid: Uuid) -> Self;

    fn as_string(&self) -> String {
        self.as_uuid().to_string()
    }
}
