use super::Entity;
use crate::repository::PgEntity;
use crate::sql::{ColumnDef, PgBindValue, TableDef};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A diner's rating of one menu item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemReview {
    #[serde(default)]
    pub id: i64,
    /// Menu item being reviewed. Not checked against the menu item table.
    pub item_id: i64,
    pub reviewer_email: String,
    pub stars: i32,
    #[schema(value_type = String, example = "2025-10-25T13:45:00")]
    pub date_reviewed: NaiveDateTime,
    pub comments: String,
}

/// Query parameters accepted by `POST /api/menuitemreview/post`.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct MenuItemReviewParams {
    pub item_id: i64,
    pub reviewer_email: String,
    pub stars: i32,
    /// ISO date-time, e.g. 2025-10-25T13:45:00
    #[param(value_type = String)]
    pub date_reviewed: NaiveDateTime,
    pub comments: String,
}

impl From<MenuItemReviewParams> for MenuItemReview {
    fn from(p: MenuItemReviewParams) -> Self {
        MenuItemReview {
            id: 0,
            item_id: p.item_id,
            reviewer_email: p.reviewer_email,
            stars: p.stars,
            date_reviewed: p.date_reviewed,
            comments: p.comments,
        }
    }
}

impl Entity for MenuItemReview {
    type Id = i64;
    const NAME: &'static str = "MenuItemReview";

    fn id(&self) -> i64 {
        self.id
    }

    fn is_new(&self) -> bool {
        self.id == 0
    }

    fn assign_id(&mut self, id: i64) {
        self.id = id;
    }

    fn seq(&self) -> Option<i64> {
        Some(self.id)
    }

    fn overwrite_with(&mut self, other: Self) {
        self.item_id = other.item_id;
        self.reviewer_email = other.reviewer_email;
        self.stars = other.stars;
        self.date_reviewed = other.date_reviewed;
        self.comments = other.comments;
    }
}

impl PgEntity for MenuItemReview {
    const TABLE: TableDef = TableDef {
        table: "menu_item_reviews",
        pk: ColumnDef::new("id", "bigint"),
        pk_generated: true,
        columns: &[
            ColumnDef::new("item_id", "bigint"),
            ColumnDef::new("reviewer_email", "text"),
            ColumnDef::new("stars", "integer"),
            ColumnDef::new("date_reviewed", "timestamp"),
            ColumnDef::new("comments", "text"),
        ],
    };

    fn column_values(&self) -> Vec<PgBindValue> {
        vec![
            self.item_id.into(),
            self.reviewer_email.clone().into(),
            self.stars.into(),
            self.date_reviewed.into(),
            self.comments.clone().into(),
        ]
    }
}
