pub mod graphql;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// GET  /graphql?type={projects|testimonials|inquiries|notifications|analytics}
/// POST /graphql    {type, data}  -> one of ~20 named mutations
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(graphql::router())
}
