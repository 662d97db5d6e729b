//! Pulpit Core
//!
//! Platform-agnostic domain types shared by every Pulpit crate.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `PlayableItem` and its `ItemId`
//! - **Formatting**: `format_time` for `M:SS` position display
//!
//! It has no knowledge of HTTP, audio engines or UI toolkits.
//!
//! # Example
//!
//! ```rust
//! use pulpit_core::{format_time, ItemId, PlayableItem};
//!
//! let item = PlayableItem::new(ItemId::new(1), "Grace", "Speaker", "https://example.com/a.mp3");
//! assert!(item.is_playable());
//! assert_eq!(format_time(75.0), "1:15");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod format;
pub mod types;

pub use format::format_time;
pub use types::{ItemId, PlayableItem};
