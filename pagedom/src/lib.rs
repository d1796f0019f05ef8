pub mod animation;
pub mod document;
pub mod element;
pub mod event;
pub mod scroll;
pub mod selector;
pub mod types;

pub use animation::{Easing, ScrollAnimation};
pub use document::Document;
pub use element::Element;
pub use event::Event;
pub use scroll::ScrollBehavior;
pub use selector::Selector;
pub use types::*;
