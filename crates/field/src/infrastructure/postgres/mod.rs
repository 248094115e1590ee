pub mod repositories;
pub mod rows;
pub mod utils;
