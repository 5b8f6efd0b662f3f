//! Static drone-imagery dataset plus the presentation model over it.
//!
//! The dataset is bundled with the binary and immutable for the process
//! lifetime. Everything else in this crate is a pure transformation:
//! sortable read-only views ([`sorted_view`]) and the explicit view-state
//! record with its single reducer ([`view::reduce`]).

mod dataset;
mod record;
mod sort;

pub mod view;

pub use dataset::dataset;
pub use record::ImageRecord;
pub use sort::{SortField, SortOrder, sorted_view};
