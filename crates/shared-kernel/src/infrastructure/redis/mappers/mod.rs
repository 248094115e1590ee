mod redis_error_mapper;

pub use redis_error_mapper::FredErrorExt;
