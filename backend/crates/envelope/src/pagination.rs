//! Page requests and the pagination metadata carried by list outcomes.
//!
//! A [`PageRequest`] is what a caller asks for, a [`Pagination`] is what the
//! envelope reports back, and a [`Page`] bundles one slice of items with its
//! metadata so it can be turned straight into an
//! [`Outcome`](crate::Outcome).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failures raised by pagination constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// Page numbers are one-based.
    #[error("page must be at least 1")]
    ZeroPage,
    /// A page must hold at least one item.
    #[error("limit must be at least 1")]
    ZeroLimit,
    /// The reported page count does not follow from `total` and `limit`.
    #[error("totalPages must be {expected}, got {actual}")]
    TotalPagesMismatch {
        /// Page count derived from `total` and `limit`.
        expected: u64,
        /// Page count found in the payload.
        actual: u64,
    },
}

/// A validated request for one page of results.
///
/// # Examples
/// ```
/// use envelope::PageRequest;
///
/// let request = PageRequest::new(3, 20).expect("valid request");
/// assert_eq!(request.offset(), 40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl PageRequest {
    /// Validate a one-based page number and a positive limit.
    pub const fn new(page: u64, limit: u64) -> Result<Self, PaginationError> {
        if page == 0 {
            return Err(PaginationError::ZeroPage);
        }
        if limit == 0 {
            return Err(PaginationError::ZeroLimit);
        }
        Ok(Self { page, limit })
    }

    /// Request the first page with the given limit.
    pub const fn first(limit: u64) -> Result<Self, PaginationError> {
        Self::new(1, limit)
    }

    /// One-based page number.
    #[must_use]
    pub const fn page(&self) -> u64 {
        self.page
    }

    /// Maximum number of items on the page.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.limit
    }

    /// Number of items preceding this page. Saturates instead of overflowing,
    /// which simply yields an empty page for absurd page numbers.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Cap the limit at `max`. A zero `max` leaves the request unchanged.
    #[must_use]
    pub const fn capped_at(self, max: u64) -> Self {
        if max == 0 || self.limit <= max {
            return self;
        }
        Self {
            page: self.page,
            limit: max,
        }
    }
}

/// Pagination metadata reported alongside list payloads.
///
/// `total_pages` is always derived as `ceil(total / limit)`; payloads that
/// disagree are rejected during deserialisation.
///
/// # Examples
/// ```
/// use envelope::Pagination;
///
/// let pagination = Pagination::new(1, 10, 95).expect("valid pagination");
/// assert_eq!(pagination.total_pages(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(try_from = "PaginationDto")]
pub struct Pagination {
    page: u64,
    limit: u64,
    total: u64,
    total_pages: u64,
}

impl Pagination {
    /// Build pagination metadata, deriving the page count.
    pub const fn new(page: u64, limit: u64, total: u64) -> Result<Self, PaginationError> {
        match PageRequest::new(page, limit) {
            Ok(request) => Ok(Self::for_request(request, total)),
            Err(err) => Err(err),
        }
    }

    /// Build pagination metadata for an already validated request.
    #[must_use]
    pub const fn for_request(request: PageRequest, total: u64) -> Self {
        Self {
            page: request.page,
            limit: request.limit,
            total,
            total_pages: total.div_ceil(request.limit),
        }
    }

    /// One-based page number.
    #[must_use]
    pub const fn page(&self) -> u64 {
        self.page
    }

    /// Page size used for the listing.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.limit
    }

    /// Total number of items across all pages.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Number of pages needed to hold `total` items.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.total_pages
    }

    /// Whether a later page holds items.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether an earlier page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
struct PaginationDto {
    page: u64,
    limit: u64,
    total: u64,
    total_pages: u64,
}

impl TryFrom<PaginationDto> for Pagination {
    type Error = PaginationError;

    fn try_from(value: PaginationDto) -> Result<Self, Self::Error> {
        let PaginationDto {
            page,
            limit,
            total,
            total_pages,
        } = value;
        let pagination = Self::new(page, limit, total)?;
        if pagination.total_pages != total_pages {
            return Err(PaginationError::TotalPagesMismatch {
                expected: pagination.total_pages,
                actual: total_pages,
            });
        }
        Ok(pagination)
    }
}

/// One page of items together with its pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    items: Vec<T>,
    pagination: Pagination,
}

impl<T> Page<T> {
    /// Wrap the items fetched for `request` out of `total` available items.
    #[must_use]
    pub const fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            pagination: Pagination::for_request(request, total),
        }
    }

    /// Items on this page.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Metadata describing this page.
    #[must_use]
    pub const fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Convert every item, keeping the metadata.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }

    /// Split into items and metadata.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, Pagination) {
        (self.items, self.pagination)
    }
}
