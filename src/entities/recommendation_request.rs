use super::Entity;
use crate::repository::PgEntity;
use crate::sql::{ColumnDef, PgBindValue, TableDef};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A student's request for a letter of recommendation from a professor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    #[serde(default)]
    pub id: i64,
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    #[schema(value_type = String, example = "2022-04-20T09:30:00")]
    pub date_requested: NaiveDateTime,
    #[schema(value_type = String, example = "2022-05-01T23:59:00")]
    pub date_needed: NaiveDateTime,
    pub done: bool,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct RecommendationRequestParams {
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    #[param(value_type = String)]
    pub date_requested: NaiveDateTime,
    #[param(value_type = String)]
    pub date_needed: NaiveDateTime,
    pub done: bool,
}

impl From<RecommendationRequestParams> for RecommendationRequest {
    fn from(p: RecommendationRequestParams) -> Self {
        RecommendationRequest {
            id: 0,
            requester_email: p.requester_email,
            professor_email: p.professor_email,
            explanation: p.explanation,
            date_requested: p.date_requested,
            date_needed: p.date_needed,
            done: p.done,
        }
    }
}

impl Entity for RecommendationRequest {
    type Id = i64;
    const NAME: &'static str = "RecommendationRequest";

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
        self.requester_email = other.requester_email;
        self.professor_email = other.professor_email;
        self.explanation = other.explanation;
        self.date_requested = other.date_requested;
        self.date_needed = other.date_needed;
        self.done = other.done;
    }
}

impl PgEntity for RecommendationRequest {
    const TABLE: TableDef = TableDef {
        table: "recommendation_requests",
        pk: ColumnDef::new("id", "bigint"),
        pk_generated: true,
        columns: &[
            ColumnDef::new("requester_email", "text"),
            ColumnDef::new("professor_email", "text"),
            ColumnDef::new("explanation", "text"),
            ColumnDef::new("date_requested", "timestamp"),
            ColumnDef::new("date_needed", "timestamp"),
            ColumnDef::new("done", "boolean"),
        ],
    };

    fn column_values(&self) -> Vec<PgBindValue> {
        vec![
            self.requester_email.clone().into(),
            self.professor_email.clone().into(),
            self.explanation.clone().into(),
            self.date_requested.into(),
            self.date_needed.into(),
            self.done.into(),
        ]
    }
}
