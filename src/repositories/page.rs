//! Page - OFFSET/LIMIT window for list queries

use serde::{Deserialize, Serialize};

/// `Page::default()` selects every row
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    /// Number of leading rows skipped
    #[serde(default)]
    pub offset: u64,
    /// Maximum number of rows returned, unbounded when `None`
    #[serde(default)]
    pub limit: Option<u64>,
}

impl Page {
    pub fn new(offset: u64, limit: u64) -> Self {
        Self {
            offset,
            limit: Some(limit),
        }
    }

    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Value for SQLite's `LIMIT`, where a negative number means no limit
    pub(crate) fn sql_limit(&self) -> i64 {
        self.limit.map_or(-1, saturate)
    }

    pub(crate) fn sql_offset(&self) -> i64 {
        saturate(self.offset)
    }
}

fn saturate(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unbounded() {
        let page = Page::default();
        assert_eq!(page, Page::all());
        assert_eq!(page.sql_offset(), 0);
        assert_eq!(page.sql_limit(), -1);
    }

    #[test]
    fn explicit_window() {
        let page = Page::new(1, 1);
        assert_eq!(page.sql_offset(), 1);
        assert_eq!(page.sql_limit(), 1);
        assert_eq!(Page::all().with_offset(1).with_limit(1), page);
    }

    #[test]
    fn zero_limit_is_kept() {
        assert_eq!(Page::new(0, 0).sql_limit(), 0);
    }

    #[test]
    fn huge_values_saturate() {
        let page = Page::new(u64::MAX, u64::MAX);
        assert_eq!(page.sql_offset(), i64::MAX);
        assert_eq!(page.sql_limit(), i64::MAX);
    }
}
