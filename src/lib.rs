#![doc = include_str!("../README.md")]
#![cfg_attr(not(all(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, allow(unused_attributes))]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc as std;

#[cfg(feature = "std")]
extern crate std;

mod arena;
mod node;

mod builder;
pub use builder::Builder;

mod error;
pub use error::Error;

mod height;
pub use height::HeightGenerator;

mod list;
pub use list::{Entry, Iter, SkipList, Towers};

mod options;
pub use options::Options;

mod types;
pub use types::Height;

/// The default maximum tower height of a [`SkipList`].
pub const DEFAULT_MAX_HEIGHT: usize = 16;
