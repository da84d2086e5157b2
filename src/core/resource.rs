//! Per-entity metadata driving the generic CRUD stack
//!
//! Each resource family implements [`Resource`] once. Repositories, services
//! and the HTTP handlers are generic over it, so the three families share one
//! behaviour and differ only in these constants.

use chrono::NaiveDateTime;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use sqlx::mysql::{MySqlArguments, MySqlRow};
use sqlx::{FromRow, MySql};

/// Query type used when binding entity columns for writes
pub type MySqlQuery<'q> = sqlx::query::Query<'q, MySql, MySqlArguments>;

/// How a delete is carried out in storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteStrategy {
    /// Row is removed
    Physical,
    /// Row is marked deleted with a timestamp and hidden from every read
    Soft,
}

/// Server-assigned audit columns shared by every table
///
/// Clients may send these fields but they are ignored; storage sets them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AuditTimestamps {
    #[serde(default, skip_deserializing)]
    pub insert_time: Option<NaiveDateTime>,
    #[serde(default, skip_deserializing)]
    pub update_time: Option<NaiveDateTime>,
}

impl AuditTimestamps {
    /// Stamp a freshly inserted row
    pub fn inserted(now: NaiveDateTime) -> Self {
        Self {
            insert_time: Some(now),
            update_time: Some(now),
        }
    }

    /// Stamp a replaced row, keeping the original insert time
    pub fn updated(previous: &AuditTimestamps, now: NaiveDateTime) -> Self {
        Self {
            insert_time: previous.insert_time.or(Some(now)),
            update_time: Some(now),
        }
    }
}

/// An entity served by the generic CRUD stack
pub trait Resource:
    Clone
    + std::fmt::Debug
    + Serialize
    + DeserializeOwned
    + for<'r> FromRow<'r, MySqlRow>
    + Send
    + Sync
    + Unpin
    + 'static
{
    /// Route segment under `/api`, e.g. `dept`
    const PATH: &'static str;
    /// Backing table
    const TABLE: &'static str;
    /// Identity column (also the JSON field name)
    const ID_COLUMN: &'static str;
    /// Column matched by substring search
    const SEARCH_COLUMN: &'static str;
    /// Query parameter carrying the search text on the list endpoint
    const SEARCH_PARAM: &'static str;
    /// Writable columns, in the order `bind_columns` binds them
    const COLUMNS: &'static [&'static str];
    const DELETE_STRATEGY: DeleteStrategy = DeleteStrategy::Physical;

    /// `None` until the entity has been persisted once
    fn id(&self) -> Option<i64>;

    fn set_id(&mut self, id: i64);

    /// Value of the designated search field
    fn search_field(&self) -> &str;

    fn timestamps(&self) -> &AuditTimestamps;

    fn timestamps_mut(&mut self) -> &mut AuditTimestamps;

    /// Bind every column of `COLUMNS` in order
    fn bind_columns<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q>;
}

/// Escape `LIKE` metacharacters so `text` matches literally
pub fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Unanchored `LIKE` pattern for a substring search
pub fn contains_pattern(text: &str) -> String {
    format!("%{}%", escape_like(text))
}
