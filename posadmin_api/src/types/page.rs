//! The offset-pagination envelope returned by every list endpoint.

use serde::{Deserialize, Serialize};

/// One page of a paginated listing plus its metadata.
///
/// Mirrors the backend's paginator: `current_page` is authoritative (the
/// server may clamp an out-of-range request, e.g. after a delete empties the
/// last page), and `from`/`to` give the 1-based index range of the returned
/// rows within the whole result set.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub current_page: i64,
    pub last_page: i64,
    pub per_page: i64,
    pub total: i64,
    pub from: Option<i64>,
    pub to: Option<i64>,
}

impl<T> Page<T> {
    /// An empty first page, used as the initial state before any fetch.
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            current_page: 1,
            last_page: 1,
            per_page: 0,
            total: 0,
            from: None,
            to: None,
        }
    }

    /// Display row number for the item at zero-based position `i` on this
    /// page: `from + i` when the server sent a range, else `i + 1`.
    pub fn row_number(&self, i: usize) -> i64 {
        self.from.unwrap_or(1) + i as i64
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Envelope for single-entity responses (`{"data": {...}}`).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Response<T> {
    pub data: T,
}

/// Reply to a delete request.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Deleted {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_number_uses_from_when_present() {
        let page = Page::<i32> {
            data: vec![0, 0, 0],
            current_page: 3,
            last_page: 5,
            per_page: 10,
            total: 42,
            from: Some(21),
            to: Some(23),
        };
        assert_eq!(page.row_number(0), 21);
        assert_eq!(page.row_number(2), 23);
    }

    #[test]
    fn row_number_falls_back_to_position() {
        let page = Page::<i32>::empty();
        assert_eq!(page.row_number(0), 1);
        assert_eq!(page.row_number(4), 5);
    }
}
