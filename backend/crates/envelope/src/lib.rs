//! Outcome envelope shared by every service boundary.
//!
//! Every operation reports its result as an [`Outcome`]: a success flag, then
//! either a payload or an error string, an optional message, and pagination
//! metadata for list results. The crate has no I/O and no runtime state; all
//! constructors are pure.
//!
//! ```
//! use envelope::{Outcome, Page, PageRequest};
//!
//! let request = PageRequest::new(1, 2).expect("valid request");
//! let outcome: Outcome<Vec<&str>> = Page::new(vec!["ann", "bob"], request, 5).into();
//! let pagination = outcome.pagination().expect("list outcomes carry pagination");
//! assert_eq!(pagination.total_pages(), 3);
//! ```

mod outcome;
mod pagination;

pub use outcome::{Outcome, OutcomeValidationError};
pub use pagination::{Page, PageRequest, Pagination, PaginationError};
