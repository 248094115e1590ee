mod distance;
mod geo_json_point;
mod geo_point;
mod latitude;
mod longitude;
mod value_object;

pub use distance::{Distance, DistanceUnit, METERS_PER_MILE};
pub use geo_json_point::GeoJsonPoint;
pub use geo_point::GeoPoint;
pub use latitude::Latitude;
pub use longitude::Longitude;
pub use value_object::ValueObject;
