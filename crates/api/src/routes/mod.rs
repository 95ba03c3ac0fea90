pub mod contact;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /contact        submit contact form (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(contact::router())
}
