//! Recent-search endpoints backed by the `search_history` table.
//!
//! The history is append-only (writes happen in the weather route); this
//! module reads the newest five entries and clears the table on request.

use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};
use serde::Serialize;
use sqlx::PgPool;
use tracing::{error, info};

use crate::Config;

// ---

pub fn router() -> Router<(PgPool, Config)> {
    // ---
    Router::new().route("/api/recent-searches", get(recent).delete(clear))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecentSearchesResponse {
    success: bool,
    recent_searches: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecentSearchesError {
    success: bool,
    error: &'static str,
    recent_searches: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ClearResponse {
    success: bool,
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct ClearError {
    success: bool,
    error: &'static str,
}

async fn recent(State((pool, _config)): State<(PgPool, Config)>) -> impl IntoResponse {
    // ---
    match fetch_recent(&pool).await {
        Ok(names) => (
            StatusCode::OK,
            Json(RecentSearchesResponse {
                success: true,
                recent_searches: names,
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Error fetching recent searches: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RecentSearchesError {
                    success: false,
                    error: "Could not fetch recent searches.",
                    recent_searches: Vec::new(),
                }),
            )
                .into_response()
        }
    }
}

async fn clear(State((pool, _config)): State<(PgPool, Config)>) -> impl IntoResponse {
    // ---
    match sqlx::query("DELETE FROM search_history").execute(&pool).await {
        Ok(result) => {
            info!("Cleared {} search history rows", result.rows_affected());
            (
                StatusCode::OK,
                Json(ClearResponse {
                    success: true,
                    message: "Search history cleared successfully.",
                }),
            )
                .into_response()
        }
        Err(e) => {
            error!("Error clearing search history: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ClearError {
                    success: false,
                    error: "Could not clear search history.",
                }),
            )
                .into_response()
        }
    }
}

// ---

/// Newest five searched city names, most recent first
async fn fetch_recent(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
    // ---
    sqlx::query_scalar(
        r#"
        SELECT location_name
        FROM search_history
        ORDER BY search_date DESC, id DESC
        LIMIT 5
        "#,
    )
    .fetch_all(pool)
    .await
}
