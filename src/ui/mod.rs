pub mod pages;
pub mod reveal;
pub mod trusted_by;

pub use pages::{LandingPage, NotFoundPage};
pub use reveal::{Reveal, use_reveal_on_scroll};
pub use trusted_by::TrustedBySection;
