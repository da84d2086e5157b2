use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::resource::{AuditTimestamps, MySqlQuery, Resource};

/// FAQ entry (`tb_faq`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Faq {
    #[serde(rename = "no", default)]
    #[sqlx(rename = "no")]
    pub id: Option<i64>,

    pub title: String,

    pub content: String,

    #[serde(flatten)]
    #[sqlx(flatten)]
    pub timestamps: AuditTimestamps,
}

impl Faq {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            timestamps: AuditTimestamps::default(),
        }
    }
}

impl Resource for Faq {
    const PATH: &'static str = "faq";
    const TABLE: &'static str = "tb_faq";
    const ID_COLUMN: &'static str = "no";
    const SEARCH_COLUMN: &'static str = "title";
    const SEARCH_PARAM: &'static str = "title";
    const COLUMNS: &'static [&'static str] = &["title", "content"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn search_field(&self) -> &str {
        &self.title
    }

    fn timestamps(&self) -> &AuditTimestamps {
        &self.timestamps
    }

    fn timestamps_mut(&mut self) -> &mut AuditTimestamps {
        &mut self.timestamps
    }

    fn bind_columns<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q> {
        query.bind(&self.title).bind(&self.content)
    }
}
