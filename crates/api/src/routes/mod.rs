pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies, /movies/                   list, create
/// /movies/{id}                        get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(movies::router())
}
