//! RQL (Resource Query Language) filter builder
//!
//! Pure string construction, no I/O. Every function returns a [`Fragment`];
//! bad or empty input yields the empty fragment, which the combinators treat
//! as "no predicate".
//!
//! ```
//! use bvbrc_client::rql::{and, eq, gt, lt};
//!
//! let filter = and([gt("start", 100), lt("end", 5000), eq("strand", "+")]);
//! assert_eq!(filter.as_str(), "and(gt(start,100),lt(end,5000),eq(strand,%22%2B%22))");
//! ```

pub mod builder;
pub mod encode;
pub mod fragment;

pub use builder::{
    and, between, build_and_from, eq, gt, http_download, in_, keyword, limit, lt, ne, obj_to_eq,
    or, select, sort,
};
pub use encode::encode_value;
pub use fragment::Fragment;
