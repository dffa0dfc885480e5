pub mod authorization;
pub mod database;

pub use authorization::*;
pub use database::*;
