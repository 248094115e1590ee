mod redis_location_index;

pub use redis_location_index::{RedisLocationIndex, DEFAULT_GEO_KEY};
