use axum::Router;
use sqlx::PgPool;

use crate::Config;

mod health;
mod index;
mod searches;
mod weather;

// ---

pub fn router(pool: PgPool, config: Config) -> Router {
    // ---
    Router::new()
        .merge(weather::router())
        .merge(searches::router())
        .merge(index::router())
        .merge(health::router())
        .with_state((pool, config))
}
