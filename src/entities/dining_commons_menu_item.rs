use super::Entity;
use crate::repository::PgEntity;
use crate::sql::{ColumnDef, PgBindValue, TableDef};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A dish served at one station of a dining commons.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UcsbDiningCommonsMenuItem {
    #[serde(default)]
    pub id: i64,
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct UcsbDiningCommonsMenuItemParams {
    /// Dining commons the item is served at, e.g. "ortega"
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

impl From<UcsbDiningCommonsMenuItemParams> for UcsbDiningCommonsMenuItem {
    fn from(p: UcsbDiningCommonsMenuItemParams) -> Self {
        UcsbDiningCommonsMenuItem {
            id: 0,
            dining_commons_code: p.dining_commons_code,
            name: p.name,
            station: p.station,
        }
    }
}

impl Entity for UcsbDiningCommonsMenuItem {
    type Id = i64;
    const NAME: &'static str = "UCSBDiningCommonsMenuItem";

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
        self.dining_commons_code = other.dining_commons_code;
        self.name = other.name;
        self.station = other.station;
    }
}

impl PgEntity for UcsbDiningCommonsMenuItem {
    const TABLE: TableDef = TableDef {
        table: "ucsb_dining_commons_menu_items",
        pk: ColumnDef::new("id", "bigint"),
        pk_generated: true,
        columns: &[
            ColumnDef::new("dining_commons_code", "text"),
            ColumnDef::new("name", "text"),
            ColumnDef::new("station", "text"),
        ],
    };

    fn column_values(&self) -> Vec<PgBindValue> {
        vec![
            self.dining_commons_code.clone().into(),
            self.name.clone().into(),
            self.station.clone().into(),
        ]
    }
}
