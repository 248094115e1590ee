pub mod factories;
pub mod mappers;
pub mod utils;

pub use mappers::FredErrorExt;
