//! Data model for the admin console.
//!
//! This crate holds the value types shared by the API client, the query cache
//! and the table controllers:
//!
//! - [`record`]: the `Card` and `User` records served by the admin API
//! - [`page`]: `PageQuery` / `PageResult` and sort order
//! - [`resource`]: the two resource collections and their endpoint layout
//! - [`display`]: timestamp formatting used by the table renderers
//!
//! Nothing here performs I/O.

pub mod display;
pub mod error;
pub mod id;
pub mod page;
pub mod record;
pub mod resource;

pub use display::{DEFAULT_UTC_OFFSET_HOURS, format_timestamp};
pub use error::{ModelError, Result};
pub use id::RecordId;
pub use page::{
    DEFAULT_PAGE_SIZE, DEFAULT_SORT_FIELD, PAGE_SIZE_OPTIONS, PageMeta, PageQuery, PageResult,
    SortOrder, page_count,
};
pub use record::{Card, CardOwner, DEFAULT_AVATAR_URL, Record, Social, User};
pub use resource::ResourceKind;
