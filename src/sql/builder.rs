//! Builds parameterized SELECT, INSERT, UPSERT, DELETE from a static table definition.

use super::params::PgBindValue;

/// One column of an entity table. Names and types are compile-time constants, never user input.
#[derive(Clone, Copy, Debug)]
pub struct ColumnDef {
    pub name: &'static str,
    /// PostgreSQL type used for DDL and parameter casts (e.g. "timestamp").
    pub pg_type: &'static str,
}

impl ColumnDef {
    pub const fn new(name: &'static str, pg_type: &'static str) -> Self {
        ColumnDef {
            name,
            pg_type,
        }
    }
}

/// Table backing one entity type. `columns` excludes the primary key.
#[derive(Clone, Copy, Debug)]
pub struct TableDef {
    pub table: &'static str,
    pub pk: ColumnDef,
    /// Primary key is assigned by the database (BIGSERIAL) rather than by the client.
    pub pk_generated: bool,
    pub columns: &'static [ColumnDef],
}

/// Quote identifier for PostgreSQL (safe: only from table definitions).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Full qualified table name.
fn qualified_table(schema: &str, table: &str) -> String {
    format!("{}.{}", quoted(schema), quoted(table))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<PgBindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: PgBindValue) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v);
        n
    }
}

/// Primary key followed by every column, in definition order.
fn select_column_list(def: &TableDef) -> String {
    std::iter::once(&def.pk)
        .chain(def.columns.iter())
        .map(|c| quoted(c.name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn placeholder(n: u32, col: &ColumnDef) -> String {
    format!("${}::{}", n, col.pg_type)
}

/// SELECT every row ordered by primary key.
pub fn select_all(schema: &str, def: &TableDef) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_column_list(def),
        qualified_table(schema, def.table),
        quoted(def.pk.name)
    );
    q
}

/// SELECT by primary key.
pub fn select_by_id(schema: &str, def: &TableDef, id: PgBindValue) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(id);
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = {}",
        select_column_list(def),
        qualified_table(schema, def.table),
        quoted(def.pk.name),
        placeholder(n, &def.pk)
    );
    q
}

/// INSERT letting the database assign the primary key. `values` follow `def.columns`.
pub fn insert(schema: &str, def: &TableDef, values: Vec<PgBindValue>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::with_capacity(def.columns.len());
    let mut placeholders = Vec::with_capacity(def.columns.len());
    for (c, v) in def.columns.iter().zip(values) {
        let n = q.push_param(v);
        cols.push(quoted(c.name));
        placeholders.push(placeholder(n, c));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        qualified_table(schema, def.table),
        cols.join(", "),
        placeholders.join(", "),
        select_column_list(def)
    );
    q
}

/// INSERT with an explicit primary key, overwriting every column when the key already exists.
pub fn upsert(schema: &str, def: &TableDef, id: PgBindValue, values: Vec<PgBindValue>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(id);
    let mut cols = vec![quoted(def.pk.name)];
    let mut placeholders = vec![placeholder(n, &def.pk)];
    let mut sets = Vec::with_capacity(def.columns.len());
    for (c, v) in def.columns.iter().zip(values) {
        let n = q.push_param(v);
        let name = quoted(c.name);
        sets.push(format!("{} = EXCLUDED.{}", name, name));
        cols.push(name);
        placeholders.push(placeholder(n, c));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) ON CONFLICT ({}) DO UPDATE SET {} RETURNING {}",
        qualified_table(schema, def.table),
        cols.join(", "),
        placeholders.join(", "),
        quoted(def.pk.name),
        sets.join(", "),
        select_column_list(def)
    );
    q
}

/// DELETE by primary key.
pub fn delete(schema: &str, def: &TableDef, id: PgBindValue) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(id);
    q.sql = format!(
        "DELETE FROM {} WHERE {} = {}",
        qualified_table(schema, def.table),
        quoted(def.pk.name),
        placeholder(n, &def.pk)
    );
    q
}

/// CREATE TABLE IF NOT EXISTS for the definition. Generated keys become BIGSERIAL.
pub fn create_table(schema: &str, def: &TableDef) -> String {
    let pk_type = if def.pk_generated {
        "BIGSERIAL"
    } else {
        def.pk.pg_type
    };
    let mut col_defs = vec![format!("{} {} PRIMARY KEY", quoted(def.pk.name), pk_type)];
    for c in def.columns {
        col_defs.push(format!("{} {} NOT NULL", quoted(c.name), c.pg_type));
    }
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n  {}\n)",
        qualified_table(schema, def.table),
        col_defs.join(",\n  ")
    )
}
