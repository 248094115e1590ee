// crates/field/src/lib.rs

pub mod application;
pub mod domain;
pub mod infrastructure;

#[cfg(any(test, feature = "test-utils"))]
pub mod utils;
