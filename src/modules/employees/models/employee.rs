use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::resource::{AuditTimestamps, MySqlQuery, Resource};

/// Employee row (`tb_emp`)
///
/// `manager` and `department_id` are logical references only; nothing checks
/// that the referenced employee or department exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Employee {
    #[serde(rename = "eno", default)]
    #[sqlx(rename = "eno")]
    pub id: Option<i64>,

    #[serde(rename = "ename")]
    #[sqlx(rename = "ename")]
    pub name: String,

    pub job: String,

    #[serde(default)]
    pub manager: Option<i64>,

    /// Free-form date string, stored as given
    #[serde(rename = "hiredate")]
    #[sqlx(rename = "hiredate")]
    pub hire_date: String,

    pub salary: i64,

    #[serde(default)]
    pub commission: Option<i64>,

    #[serde(rename = "dno")]
    #[sqlx(rename = "dno")]
    pub department_id: i64,

    #[serde(flatten)]
    #[sqlx(flatten)]
    pub timestamps: AuditTimestamps,
}

impl Resource for Employee {
    const PATH: &'static str = "emp";
    const TABLE: &'static str = "tb_emp";
    const ID_COLUMN: &'static str = "eno";
    const SEARCH_COLUMN: &'static str = "ename";
    const SEARCH_PARAM: &'static str = "ename";
    const COLUMNS: &'static [&'static str] = &[
        "ename",
        "job",
        "manager",
        "hiredate",
        "salary",
        "commission",
        "dno",
    ];

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
        query
            .bind(&self.name)
            .bind(&self.job)
            .bind(self.manager)
            .bind(&self.hire_date)
            .bind(self.salary)
            .bind(self.commission)
            .bind(self.department_id)
    }
}
