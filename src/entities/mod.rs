//! Persisted record types and the contract the repositories rely on.

mod dining_commons_menu_item;
mod menu_item_review;
mod organization;
mod recommendation_request;

pub use dining_commons_menu_item::{UcsbDiningCommonsMenuItem, UcsbDiningCommonsMenuItemParams};
pub use menu_item_review::{MenuItemReview, MenuItemReviewParams};
pub use organization::{UcsbOrganization, UcsbOrganizationParams};
pub use recommendation_request::{RecommendationRequest, RecommendationRequestParams};

use serde::{de::DeserializeOwned, Serialize};
use std::fmt::{Debug, Display};

/// A flat record stored in its own table.
pub trait Entity: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + Unpin + 'static {
    type Id: Clone + Debug + Display + Ord + Send + Sync + DeserializeOwned + 'static;

    /// Name used in error messages, e.g. "MenuItemReview with id 7 not found".
    const NAME: &'static str;

    fn id(&self) -> Self::Id;

    /// True when the store has not assigned an identifier yet.
    fn is_new(&self) -> bool;

    /// Sets a store-assigned identifier. Entities keyed by a natural key ignore it.
    fn assign_id(&mut self, id: i64);

    /// Position of this record in the store's id sequence, or `None` for natural keys.
    fn seq(&self) -> Option<i64> {
        None
    }

    /// Full-record replacement: every field except the identifier is taken from `other`.
    fn overwrite_with(&mut self, other: Self);
}
