use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::resource::{AuditTimestamps, DeleteStrategy, MySqlQuery, Resource};

/// Department row (`tb_dept`)
///
/// Departments are soft-deleted: a removed department stays in the table
/// with `delete_yn = 'Y'` and is hidden from every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Department {
    #[serde(rename = "dno", default)]
    #[sqlx(rename = "dno")]
    pub id: Option<i64>,

    #[serde(rename = "dname")]
    #[sqlx(rename = "dname")]
    pub name: String,

    #[serde(rename = "loc")]
    #[sqlx(rename = "loc")]
    pub location: String,

    #[serde(flatten)]
    #[sqlx(flatten)]
    pub timestamps: AuditTimestamps,
}

impl Department {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            location: location.into(),
            timestamps: AuditTimestamps::default(),
        }
    }
}

impl Resource for Department {
    const PATH: &'static str = "dept";
    const TABLE: &'static str = "tb_dept";
    const ID_COLUMN: &'static str = "dno";
    const SEARCH_COLUMN: &'static str = "dname";
    const SEARCH_PARAM: &'static str = "dname";
    const COLUMNS: &'static [&'static str] = &["dname", "loc"];
    const DELETE_STRATEGY: DeleteStrategy = DeleteStrategy::Soft;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn search_field(&self) -> &str {
        &self.name
    }

    fn timestamps(&self) -> &AuditTimestamps {
        &self.timestamps
    }

    fn timestamps_mut(&mut self) -> &mut AuditTimestamps {
        &mut self.timestamps
    }

    fn bind_columns<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q> {
        query.bind(&self.name).bind(&self.location)
    }
}
