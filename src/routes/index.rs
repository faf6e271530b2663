//! Service banner at `/` listing the available endpoints.

use axum::{routing::get, Json, Router};
use serde::Serialize;

// ---

#[derive(Serialize)]
struct IndexResponse {
    message: &'static str,
    endpoints: Endpoints,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Endpoints {
    weather: &'static str,
    recent_searches: &'static str,
    clear_history: &'static str,
}

async fn index() -> Json<IndexResponse> {
    // ---
    Json(IndexResponse {
        message: "Farmer Weather Advisory API is running!",
        endpoints: Endpoints {
            weather: "GET /api/weather?location=cityname",
            recent_searches: "GET /api/recent-searches",
            clear_history: "DELETE /api/recent-searches",
        },
    })
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(index))
}
