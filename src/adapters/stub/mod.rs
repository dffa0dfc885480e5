pub mod auth_stub;
pub mod database_stub;

pub use auth_stub::AuthStub;
pub use database_stub::DatabaseStub;
