use sea_orm::Database;
use tracing::info;

use marquee_api::config::ApiConfig;
use marquee_api::router::build_router;
use marquee_api::state::AppState;
use marquee_api_migration::{Migrator, MigratorTrait};
use marquee_auth_types::identity::TokenSecret;

#[tokio::main]
async fn main() {
    marquee_core::tracing::init_tracing("info,tower_http=debug");

    let config = ApiConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    if config.run_migrations {
        Migrator::up(&db, None)
            .await
            .expect("failed to apply migrations");
        info!("migrations applied");
    }

    if config.token_ttl_secs.is_none() {
        info!("TOKEN_TTL_SECS unset; issued tokens do not expire");
    }

    let state = AppState {
        db,
        token_secret: TokenSecret::new(config.secret_key),
        token_ttl_secs: config.token_ttl_secs,
        bcrypt_cost: config.bcrypt_cost,
        unique_key: config.unique_key,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("api listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
