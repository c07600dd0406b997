//! Entities - Persisted record types and the descriptor they expose to repositories

pub mod changes;
pub mod field;
pub mod kp_index;

pub use changes::Changes;
pub use field::{Field, FieldKind, FieldValue};
pub use kp_index::KpIndex;

use sqlx::FromRow;
use sqlx::sqlite::SqliteRow;

/// Static descriptor of a persisted record type.
///
/// Implementors map to one table with an integer surrogate key assigned by the
/// store. `FIELDS` lists the persisted columns other than the identifier, with
/// their kind and nullability, and is the registry partial updates are
/// validated against.
pub trait Entity: for<'r> FromRow<'r, SqliteRow> + Send + Unpin + 'static {
    /// Type name used in error reports
    const NAME: &'static str;

    const TABLE: &'static str;

    const ID_COLUMN: &'static str = "id";

    const FIELDS: &'static [Field];

    /// Idempotent `CREATE TABLE IF NOT EXISTS` statement for `TABLE`
    const DDL: &'static str;

    /// `None` until the store has assigned one
    fn id(&self) -> Option<i64>;

    /// Current value of every entry of `FIELDS`, in the same order
    fn values(&self) -> Vec<FieldValue>;

    fn field(name: &str) -> Option<&'static Field> {
        Self::FIELDS.iter().find(|field| field.name == name)
    }

    fn has_field(name: &str) -> bool {
        Self::field(name).is_some()
    }
}
