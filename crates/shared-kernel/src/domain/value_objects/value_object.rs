use crate::errors::Result;

/// Objet valeur auto-validant : `try_new` appelle `validate`, `from_raw` non.
pub trait ValueObject: PartialEq + Clone {
    fn validate(&self) -> Result<()>;
}
