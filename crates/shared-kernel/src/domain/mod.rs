pub mod entities;
mod identifier;
pub mod value_objects;

pub use identifier::Identifier;
