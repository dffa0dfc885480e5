use rusty_library_top_down::{
    adapters::stub::{AuthStub, DatabaseStub},
    application::loan::LoanService,
    config::{ConfigError, DemoConfig},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), ConfigError> {
    let config = DemoConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(denied_users = ?config.denied_users, "starting loan demo with stubs");

    // Initialize adapters
    let database = Arc::new(DatabaseStub::new());
    let authorization = Arc::new(AuthStub::denying(config.denied_users.iter().copied()));

    let service = LoanService::new(database, authorization);

    for (user_id, book_id) in &config.scenarios {
        let outcome = service.lend_book(*user_id, *book_id);
        tracing::info!(%user_id, %book_id, %outcome, "lend_book finished");
    }

    Ok(())
}
