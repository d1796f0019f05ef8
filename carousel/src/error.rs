use std::fmt;

/// Which part of a carousel's markup could not be found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPart {
    Container,
    Items,
}

impl fmt::Display for MissingPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Container => write!(f, "container element"),
            Self::Items => write!(f, "items"),
        }
    }
}

/// Errors raised by carousel setup and navigation.
///
/// None of these are fatal to the page: a carousel that fails to initialize
/// is simply left out, and navigation errors leave the current state as is.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CarouselError {
    /// The container or its items were not found at construction time.
    #[error("Carousel initialization skipped for #{container_id}: {missing} not found")]
    ConfigurationMissing {
        container_id: String,
        missing: MissingPart,
    },

    /// No item exists at the requested index.
    #[error("No carousel item at index {index} (item count {len})")]
    InvalidIndex { index: usize, len: usize },

    /// A step direction other than -1 or +1.
    #[error("Invalid step direction {0}, expected -1 or 1")]
    InvalidDirection(i32),

    /// No carousel is registered for the container.
    #[error("No carousel registered for #{0}")]
    UnknownCarousel(String),
}

impl CarouselError {
    pub fn missing(container_id: impl Into<String>, missing: MissingPart) -> Self {
        Self::ConfigurationMissing {
            container_id: container_id.into(),
            missing,
        }
    }
}
