//! The merge pipeline.
//!
//! One invocation takes files grouped by format plus a skip-rows setting and
//! produces, per group, merged output bytes with a suggested name and a
//! result summary. Groups fail independently; a group whose inputs contain
//! no usable data reports an empty outcome rather than an error.

pub mod combine;
pub mod error;
pub mod normalize;
pub mod pipeline;

pub use combine::combine;
pub use error::{MergeError, Result};
pub use normalize::normalize;
pub use pipeline::{MergeOptions, PREVIEW_ROWS, group_by_kind, merge_groups};
