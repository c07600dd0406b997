//! FieldValue - Dynamically typed column value used for inserts and partial updates
//!
//! `Field` is the static description of one persisted column: its name, the
//! kind of value it stores and whether it accepts NULL.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{QueryBuilder, Sqlite};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Real,
    Timestamp,
    Text,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Integer => "integer",
            FieldKind::Real => "real",
            FieldKind::Timestamp => "timestamp",
            FieldKind::Text => "text",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    pub nullable: bool,
}

impl Field {
    /// NOT NULL column
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            nullable: false,
        }
    }

    /// Nullable column
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            nullable: true,
        }
    }

    /// Whether `value` can be stored in this column as is.
    ///
    /// Integers are accepted by real columns; nothing else is converted.
    pub fn accepts(&self, value: &FieldValue) -> bool {
        match (self.kind, value) {
            (_, FieldValue::Null) => self.nullable,
            (FieldKind::Integer, FieldValue::Integer(_))
            | (FieldKind::Real, FieldValue::Real(_) | FieldValue::Integer(_))
            | (FieldKind::Timestamp, FieldValue::Timestamp(_))
            | (FieldKind::Text, FieldValue::Text(_)) => true,
            _ => false,
        }
    }

    /// e.g. `integer` or `nullable text`
    pub fn describe(&self) -> String {
        if self.nullable {
            format!("nullable {}", self.kind)
        } else {
            self.kind.to_string()
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Integer(i64),
    Real(f64),
    Timestamp(NaiveDateTime),
    Text(String),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Integer(_) => "integer",
            FieldValue::Real(_) => "real",
            FieldValue::Timestamp(_) => "timestamp",
            FieldValue::Text(_) => "text",
        }
    }

    /// Appends a `?` placeholder to `builder` and binds this value to it
    pub(crate) fn push_bind<'args>(self, builder: &mut QueryBuilder<'args, Sqlite>) {
        match self {
            FieldValue::Null => {
                builder.push_bind(Option::<i64>::None);
            }
            FieldValue::Integer(value) => {
                builder.push_bind(value);
            }
            FieldValue::Real(value) => {
                builder.push_bind(value);
            }
            FieldValue::Timestamp(value) => {
                builder.push_bind(value);
            }
            FieldValue::Text(value) => {
                builder.push_bind(value);
            }
        }
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(value.into())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Real(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(value: NaiveDateTime) -> Self {
        FieldValue::Timestamp(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn conversions() {
        assert_eq!(FieldValue::from(5), FieldValue::Integer(5));
        assert_eq!(FieldValue::from(5.5), FieldValue::Real(5.5));
        assert_eq!(FieldValue::from("3K"), FieldValue::Text("3K".to_string()));
        assert_eq!(FieldValue::from(None::<String>), FieldValue::Null);
        assert_eq!(FieldValue::from(Some(2.1)), FieldValue::Real(2.1));

        let time_tag = NaiveDate::from_ymd_opt(2025, 5, 27)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        assert_eq!(FieldValue::from(time_tag), FieldValue::Timestamp(time_tag));
    }

    #[test]
    fn field_accepts_matching_kind_only() {
        let time_tag = Field::required("time_tag", FieldKind::Timestamp);
        assert!(time_tag.accepts(&FieldValue::Timestamp(NaiveDateTime::MIN)));
        assert!(!time_tag.accepts(&FieldValue::Integer(5)));
        assert!(!time_tag.accepts(&FieldValue::Null));

        let kp = Field::optional("kp", FieldKind::Text);
        assert!(kp.accepts(&FieldValue::Text("3K".to_string())));
        assert!(kp.accepts(&FieldValue::Null));
        assert!(!kp.accepts(&FieldValue::Integer(5)));

        let kp_index = Field::required("kp_index", FieldKind::Integer);
        assert!(!kp_index.accepts(&FieldValue::Text("abc".to_string())));
        assert!(!kp_index.accepts(&FieldValue::Real(5.5)));
    }

    #[test]
    fn real_field_accepts_integers() {
        let estimated_kp = Field::optional("estimated_kp", FieldKind::Real);
        assert!(estimated_kp.accepts(&FieldValue::Integer(5)));
        assert!(estimated_kp.accepts(&FieldValue::Real(5.5)));
    }

    #[test]
    fn describe_mentions_nullability() {
        assert_eq!(Field::required("kp_index", FieldKind::Integer).describe(), "integer");
        assert_eq!(Field::optional("kp", FieldKind::Text).describe(), "nullable text");
    }

    #[test]
    fn json_representation_is_untagged() {
        assert_eq!(serde_json::to_string(&FieldValue::Integer(5)).unwrap(), "5");
        assert_eq!(serde_json::to_string(&FieldValue::Null).unwrap(), "null");

        let text: FieldValue = serde_json::from_str("\"3K\"").unwrap();
        assert_eq!(text, FieldValue::Text("3K".to_string()));
        let real: FieldValue = serde_json::from_str("5.5").unwrap();
        assert_eq!(real, FieldValue::Real(5.5));
        let null: FieldValue = serde_json::from_str("null").unwrap();
        assert!(null.is_null());
    }

    #[test]
    fn push_bind_adds_one_placeholder_per_value() {
        let mut builder = QueryBuilder::<Sqlite>::new("SELECT ");
        FieldValue::Integer(1).push_bind(&mut builder);
        builder.push(", ");
        FieldValue::Null.push_bind(&mut builder);
        assert_eq!(builder.sql(), "SELECT ?, ?");
    }
}
