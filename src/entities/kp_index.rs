//! KpIndex entity - Planetary K-index sample (NOAA SWPC feed)

use super::{Entity, Field, FieldKind, FieldValue};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct KpIndex {
    /// Assigned by the store on insert
    pub id: Option<i64>,
    pub time_tag: NaiveDateTime,
    pub kp_index: i64,
    pub estimated_kp: Option<f64>,
    // e.g. "1P", "3K"
    pub kp: Option<String>,
}

impl KpIndex {
    pub fn new(time_tag: NaiveDateTime, kp_index: i64) -> Self {
        Self {
            id: None,
            time_tag,
            kp_index,
            estimated_kp: None,
            kp: None,
        }
    }

    pub fn with_estimated_kp(mut self, estimated_kp: f64) -> Self {
        self.estimated_kp = Some(estimated_kp);
        self
    }

    pub fn with_kp(mut self, kp: impl Into<String>) -> Self {
        self.kp = Some(kp.into());
        self
    }
}

impl Entity for KpIndex {
    const NAME: &'static str = "KpIndex";
    const TABLE: &'static str = "kp_index";
    const FIELDS: &'static [Field] = &[
        Field::required("time_tag", FieldKind::Timestamp),
        Field::required("kp_index", FieldKind::Integer),
        Field::optional("estimated_kp", FieldKind::Real),
        Field::optional("kp", FieldKind::Text),
    ];
    const DDL: &'static str = r#"
        CREATE TABLE IF NOT EXISTS kp_index (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            time_tag TIMESTAMP NOT NULL UNIQUE,
            kp_index INTEGER NOT NULL,
            estimated_kp REAL,
            kp TEXT
        )
    "#;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn values(&self) -> Vec<FieldValue> {
        vec![
            self.time_tag.into(),
            self.kp_index.into(),
            self.estimated_kp.into(),
            self.kp.clone().into(),
        ]
    }
}
