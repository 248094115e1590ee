pub mod builders;
pub mod entities;
pub mod params;
pub mod repositories;
pub mod value_objects;
