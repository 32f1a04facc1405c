//! Domain model types (pure).
//!
//! All types in this module are pure data; nothing here touches a host.

pub mod entry;
pub mod error;
pub mod geometry;
pub mod key_action;
pub mod style;

// Re-export for convenience
pub use entry::{Entry, VideoSpec, DEFAULT_VIDEO_FPS, DEFAULT_VIDEO_SIZE};
pub use error::{
    AppError, DocumentError, HostError, InputError, MarkupError, ResourceKind,
    ResourceMissingError,
};
pub use geometry::{Color, Rect, ScrollOffset};
pub use key_action::KeyAction;
pub use style::{FontKind, ListingStyle, DEFAULT_MARGIN_TEXT};
