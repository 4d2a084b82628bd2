//! Pagination query parameters.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

pub const DEFAULT_SKIP: u64 = 0;
pub const DEFAULT_LIMIT: u64 = 100;

fn default_skip() -> u64 {
    DEFAULT_SKIP
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

/// `?skip=&limit=` for `GET /api/v1/items`.
///
/// Both are unsigned, so a negative value fails extraction and is reported
/// as a validation error. Large values are accepted and simply yield an
/// empty page.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct ListItemsQuery {
    #[serde_as(as = "DisplayFromStr")]
    #[serde(default = "default_skip")]
    pub skip: u64,

    #[serde_as(as = "DisplayFromStr")]
    #[serde(default = "default_limit")]
    pub limit: u64,
}

impl Default for ListItemsQuery {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Number of pages of `limit` items needed to hold `total` items.
///
/// Zero when `limit` is zero.
pub fn page_count(total: i64, limit: u64) -> u64 {
    let total = u64::try_from(total).unwrap_or(0);
    if limit == 0 {
        0
    } else {
        total.div_ceil(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::extract::rejection::QueryRejection;
    use axum::http::Uri;

    fn parse(query: &str) -> Result<ListItemsQuery, QueryRejection> {
        let uri: Uri = format!("http://localhost/api/v1/items?{query}").parse().unwrap();
        Query::<ListItemsQuery>::try_from_uri(&uri).map(|Query(q)| q)
    }

    #[test]
    fn test_defaults() {
        let q = parse("").unwrap();
        assert_eq!(q.skip, 0);
        assert_eq!(q.limit, 100);
    }

    #[test]
    fn test_explicit_values() {
        let q = parse("skip=20&limit=5").unwrap();
        assert_eq!(q.skip, 20);
        assert_eq!(q.limit, 5);
    }

    #[test]
    fn test_negative_is_error() {
        assert!(parse("skip=-1").is_err());
        assert!(parse("limit=-10").is_err());
    }

    #[test]
    fn test_non_numeric_is_error() {
        assert!(parse("limit=ten").is_err());
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 100), 0);
        assert_eq!(page_count(3, 1), 3);
        assert_eq!(page_count(101, 100), 2);
        assert_eq!(page_count(100, 100), 1);
        assert_eq!(page_count(5, 0), 0);
    }
}
