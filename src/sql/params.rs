//! Column values that sqlx can bind without knowing the entity type.

use chrono::NaiveDateTime;
use sqlx::encode::{Encode, IsNull};
use sqlx::postgres::{PgTypeInfo, Postgres};
use sqlx::{Database, Type};

/// A value bound to a PostgreSQL query parameter. Each variant reports its own type.
#[derive(Clone, Debug, PartialEq)]
pub enum PgBindValue {
    Bool(bool),
    I32(i32),
    I64(i64),
    Text(String),
    Timestamp(NaiveDateTime),
}

impl From<bool> for PgBindValue {
    fn from(v: bool) -> Self {
        PgBindValue::Bool(v)
    }
}

impl From<i32> for PgBindValue {
    fn from(v: i32) -> Self {
        PgBindValue::I32(v)
    }
}

impl From<i64> for PgBindValue {
    fn from(v: i64) -> Self {
        PgBindValue::I64(v)
    }
}

impl From<String> for PgBindValue {
    fn from(v: String) -> Self {
        PgBindValue::Text(v)
    }
}

impl From<NaiveDateTime> for PgBindValue {
    fn from(v: NaiveDateTime) -> Self {
        PgBindValue::Timestamp(v)
    }
}

impl<'q> Encode<'q, Postgres> for PgBindValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        Ok(match self {
            PgBindValue::Bool(b) => <bool as Encode<Postgres>>::encode_by_ref(b, buf)?,
            PgBindValue::I32(n) => <i32 as Encode<Postgres>>::encode_by_ref(n, buf)?,
            PgBindValue::I64(n) => <i64 as Encode<Postgres>>::encode_by_ref(n, buf)?,
            PgBindValue::Text(s) => {
                let s_ref: &str = s.as_str();
                <&str as Encode<Postgres>>::encode_by_ref(&s_ref, buf)?
            }
            PgBindValue::Timestamp(d) => <NaiveDateTime as Encode<Postgres>>::encode_by_ref(d, buf)?,
        })
    }

    fn produces(&self) -> Option<PgTypeInfo> {
        match self {
            PgBindValue::Bool(_) => Some(<bool as Type<Postgres>>::type_info()),
            PgBindValue::I32(_) => Some(<i32 as Type<Postgres>>::type_info()),
            PgBindValue::I64(_) => Some(<i64 as Type<Postgres>>::type_info()),
            PgBindValue::Text(_) => Some(<String as Type<Postgres>>::type_info()),
            PgBindValue::Timestamp(_) => Some(<NaiveDateTime as Type<Postgres>>::type_info()),
        }
    }
}

impl Type<Postgres> for PgBindValue {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_name("TEXT")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_report_their_own_type() {
        let v: PgBindValue = 7i64.into();
        assert_eq!(v.produces(), Some(<i64 as Type<Postgres>>::type_info()));
        let v: PgBindValue = String::from("x").into();
        assert_eq!(v, PgBindValue::Text("x".into()));
        assert_eq!(v.produces(), Some(<String as Type<Postgres>>::type_info()));
    }
}
