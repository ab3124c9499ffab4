//! Host-independent logic for the trusted-by section: content, reveal timing
//! and viewport visibility tracking

#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod reveal;
pub mod visibility;

pub use content::SectionContent;
pub use reveal::{RevealElement, RevealTable};
pub use visibility::{ObserverOptions, VisibilityObserver};
