//! Router assembly: common probes, entity resources, OpenAPI document.

mod common;
mod docs;
mod entity;

pub use common::{common_routes, common_routes_with_ready};
pub use docs::{docs_routes, ApiDoc};
pub use entity::entity_routes;
