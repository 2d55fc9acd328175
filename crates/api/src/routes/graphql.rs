//! The single multiplexed API route, method-discriminated: GET dispatches
//! on the `type` query parameter, POST on the `{type, data}` body.
//!
//! The path is a legacy of the front end's fetch layer; the protocol is
//! plain JSON over HTTP, not GraphQL.

use axum::routing::get;
use axum::Router;

use crate::handlers::{mutation, query};
use crate::state::AppState;

/// Routes mounted at `/graphql`.
pub fn router() -> Router<AppState> {
    Router::new().route("/graphql", get(query::query).post(mutation::mutate))
}
