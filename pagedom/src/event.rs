/// High-level page events with element targeting
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Scroll offset of an element changed
    Scroll { target: String },
    /// Window resized
    Resize { width: f32, height: f32 },
    /// Element clicked
    Click { target: String },
}

impl Event {
    /// The element the event is aimed at, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Scroll { target } | Self::Click { target } => Some(target),
            Self::Resize { .. } => None,
        }
    }
}
