//! Query cache for paginated list fetches.
//!
//! - [`CacheKey`]: resource name plus [`PageQuery`](admin_model::PageQuery)
//! - [`QueryCache`]: `get_or_fetch` with one in-flight fetch per key, and
//!   predicate-based invalidation driven by successful mutations
//! - [`QueryView`]: latest-wins guard for a screen's current key

pub mod cache;
pub mod key;
pub mod view;

pub use cache::{FetchStatus, QueryCache};
pub use key::CacheKey;
pub use view::{QueryView, Ticket};
