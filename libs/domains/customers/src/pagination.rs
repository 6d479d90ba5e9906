//! Cursor-assisted pagination contract for keyword search.
//!
//! Every storage backend must enforce the same bounds before touching
//! data and return the same envelope shape. The continuation cursor is
//! the id of the last item of the previous page; `total` always reflects
//! the full match count, independent of the cursor.

use uuid::Uuid;

use crate::error::{CustomerError, CustomerResult};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 10;
pub const MAX_PER_PAGE: u32 = 20;

/// Pagination parameters for a keyword scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageRequest {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    /// Continuation cursor: resume the scan after this id.
    pub last_id: Option<Uuid>,
}

impl PageRequest {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub fn per_page(&self) -> u32 {
        self.per_page.unwrap_or(DEFAULT_PER_PAGE)
    }

    /// Bounds checks every backend runs before any data access.
    pub fn validate_scan(&self, keyword: &str) -> CustomerResult<()> {
        let page = self.page();
        let per_page = self.per_page();

        if per_page > MAX_PER_PAGE {
            return Err(CustomerError::Storage(format!(
                "You are trying to get {} items, but the maximum is {}",
                per_page, MAX_PER_PAGE
            )));
        }

        if page < 1 {
            return Err(CustomerError::Storage(format!(
                "You are trying to get page {}, but the minimum is 1",
                page
            )));
        }

        if per_page < 1 {
            return Err(CustomerError::Storage(format!(
                "You are trying to get {} items, but the minimum is 1",
                per_page
            )));
        }

        if keyword.trim().is_empty() {
            return Err(CustomerError::Storage(
                "You are trying to search customers with an empty keyword".to_string(),
            ));
        }

        Ok(())
    }
}

/// One page of a keyword scan.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Count of all keyword matches, independent of page and cursor.
    pub total: u64,
    pub per_page: u32,
    pub current_page: u32,
    pub prev: Option<u32>,
    pub next: Option<u32>,
    /// Id of the last returned item when a further page exists.
    pub last_id: Option<Uuid>,
}

impl<T> Page<T> {
    /// Envelope for a scan with zero matches.
    pub fn empty(page: u32, per_page: u32) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            per_page,
            current_page: page,
            prev: None,
            next: None,
            last_id: None,
        }
    }

    /// Assemble an envelope from a scan that fetched up to `per_page + 1`
    /// rows: the extra row signals a continuation and is dropped.
    pub fn from_scan(
        mut items: Vec<T>,
        total: u64,
        page: u32,
        per_page: u32,
        id_of: impl Fn(&T) -> Uuid,
    ) -> Self {
        let has_more = items.len() > per_page as usize;
        if has_more {
            items.truncate(per_page as usize);
        }

        let last_id = if has_more {
            items.last().map(id_of)
        } else {
            None
        };

        Self {
            next: if has_more { Some(page + 1) } else { None },
            prev: if page > 1 { Some(page - 1) } else { None },
            last_id,
            items,
            total,
            per_page,
            current_page: page,
        }
    }
}
