use super::Entity;
use crate::repository::PgEntity;
use crate::sql::{ColumnDef, PgBindValue, TableDef};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A student organization, keyed by its organization code.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UcsbOrganization {
    #[serde(default)]
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct UcsbOrganizationParams {
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

impl From<UcsbOrganizationParams> for UcsbOrganization {
    fn from(p: UcsbOrganizationParams) -> Self {
        UcsbOrganization {
            org_code: p.org_code,
            org_translation_short: p.org_translation_short,
            org_translation: p.org_translation,
            inactive: p.inactive,
        }
    }
}

impl Entity for UcsbOrganization {
    type Id = String;
    const NAME: &'static str = "UCSBOrganization";

    fn id(&self) -> String {
        self.org_code.clone()
    }

    fn is_new(&self) -> bool {
        false
    }

    fn assign_id(&mut self, _id: i64) {}

    fn overwrite_with(&mut self, other: Self) {
        self.org_translation_short = other.org_translation_short;
        self.org_translation = other.org_translation;
        self.inactive = other.inactive;
    }
}

impl PgEntity for UcsbOrganization {
    const TABLE: TableDef = TableDef {
        table: "ucsb_organizations",
        pk: ColumnDef::new("org_code", "text"),
        pk_generated: false,
        columns: &[
            ColumnDef::new("org_translation_short", "text"),
            ColumnDef::new("org_translation", "text"),
            ColumnDef::new("inactive", "boolean"),
        ],
    };

    fn column_values(&self) -> Vec<PgBindValue> {
        vec![
            self.org_translation_short.clone().into(),
            self.org_translation.clone().into(),
            self.inactive.into(),
        ]
    }
}
