pub mod bootstrap;
pub mod postgres;
pub mod redis;
