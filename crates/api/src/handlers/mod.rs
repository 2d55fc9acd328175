//! Handlers for the multiplexed `/api/graphql` route: GET queries
//! dispatched on the `type` query parameter, POST mutations dispatched on
//! the `{type, data}` body.

pub mod mutation;
pub mod query;
