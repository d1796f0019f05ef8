//! Scroll-driven carousels for a page document.
//!
//! A [`CarouselController`] owns one horizontally scrolling container, infers
//! which of its items is active from the live scroll offset, mirrors that onto
//! the items and an optional row of indicator dots, and scrolls to an item on
//! request. A [`CarouselRegistry`] holds one controller per container and is
//! the single entry point for "previous/next" controls elsewhere on the page.

pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod registry;

pub use config::{Alignment, CarouselConfig, ACTIVE_CLASS, DEFAULT_DEBOUNCE, DEFAULT_ITEM_GAP};
pub use controller::{CarouselController, Direction};
pub use debounce::Debouncer;
pub use error::{CarouselError, MissingPart};
pub use registry::CarouselRegistry;
