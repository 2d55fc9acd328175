//! Entity models and DTOs for the four persisted resource collections.
//!
//! Everything serializes camelCase because the consuming front end is
//! JavaScript and the JSON files are shared with it as-is.

pub mod inquiry;
pub mod notification;
pub mod project;
pub mod testimonial;
