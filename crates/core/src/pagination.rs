//! Limit/offset paging for list endpoints.

/// Page size when the request names none.
pub const DEFAULT_LIST_LIMIT: i64 = 50;

/// Largest page a client may ask for.
pub const MAX_LIST_LIMIT: i64 = 200;

/// A clamped `LIMIT`/`OFFSET` pair, ready to bind into a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIST_LIMIT,
            offset: 0,
        }
    }
}

impl Page {
    /// Limit is kept within `1..=MAX_LIST_LIMIT`; a negative offset is 0.
    pub fn clamped(limit: Option<i64>, offset: Option<i64>) -> Self {
        Self {
            limit: limit.unwrap_or(DEFAULT_LIST_LIMIT).clamp(1, MAX_LIST_LIMIT),
            offset: offset.unwrap_or(0).max(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_values_give_the_first_default_page() {
        assert_eq!(Page::clamped(None, None), Page::default());
    }

    #[test]
    fn oversized_limit_is_capped() {
        assert_eq!(Page::clamped(Some(10_000), None).limit, MAX_LIST_LIMIT);
    }

    #[test]
    fn non_positive_limit_becomes_one() {
        assert_eq!(Page::clamped(Some(0), None).limit, 1);
        assert_eq!(Page::clamped(Some(-3), None).limit, 1);
    }

    #[test]
    fn negative_offset_becomes_zero() {
        assert_eq!(Page::clamped(None, Some(-10)).offset, 0);
        assert_eq!(Page::clamped(None, Some(40)).offset, 40);
    }
}
