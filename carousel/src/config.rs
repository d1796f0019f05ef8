use std::time::Duration;

/// Item spacing used when it can't be measured from layout.
pub const DEFAULT_ITEM_GAP: f32 = 20.0;

/// Spacing between the wider service cards.
pub const SERVICES_ITEM_GAP: f32 = 32.0;

/// Quiet period after the last scroll event before active state is recomputed.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(50);

const SERVICE_CARD_SELECTOR: &str = ".service-card-h";
const TESTIMONIALS_CONTAINER: &str = "testimonials-scroll";

/// Class toggled on the active item and the active dot.
pub const ACTIVE_CLASS: &str = "active";

/// How the active item is inferred from the scroll offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    /// Items snap to the container's content start; the item whose leading
    /// edge is nearest that start is active.
    #[default]
    Start,
    /// Items snap to the middle of the container; the item whose center is
    /// nearest the visible center is active.
    Center,
}

/// Static configuration for one carousel, fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    pub container_id: String,
    pub dots_container_id: Option<String>,
    pub item_selector: String,
    pub item_gap: f32,
    pub alignment: Alignment,
    pub dot_class: String,
    pub debounce: Duration,
}

impl CarouselConfig {
    pub fn new(container_id: impl Into<String>, item_selector: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            dots_container_id: None,
            item_selector: item_selector.into(),
            item_gap: DEFAULT_ITEM_GAP,
            alignment: Alignment::Start,
            dot_class: "dot".to_string(),
            debounce: DEFAULT_DEBOUNCE,
        }
    }

    /// Config following the site's markup conventions: service cards are
    /// spaced wider and use `carousel-dot` indicators, and the testimonials
    /// container is center-aligned. Anything else gets the plain defaults.
    pub fn site(container_id: impl Into<String>, item_selector: impl Into<String>) -> Self {
        let mut config = Self::new(container_id, item_selector);
        if config.item_selector == SERVICE_CARD_SELECTOR {
            config.item_gap = SERVICES_ITEM_GAP;
            config.dot_class = "carousel-dot".to_string();
        }
        if config.container_id == TESTIMONIALS_CONTAINER {
            config.alignment = Alignment::Center;
        }
        config
    }

    /// Services strip: wide cards, start-aligned, `carousel-dot` indicators.
    pub fn services() -> Self {
        Self::site("services-scroll", SERVICE_CARD_SELECTOR).dots("carousel-dots")
    }

    /// Testimonials strip: the active card is the one in the middle.
    pub fn testimonials() -> Self {
        Self::site(TESTIMONIALS_CONTAINER, ".testimonial-card").dots("testimonials-dots")
    }

    /// Partner logos. The page usually has no dots container for these.
    pub fn partners() -> Self {
        Self::site("partners-scroll", ".partner-logo").dots("partners-dots")
    }

    /// The three carousels of the site, in initialization order.
    pub fn site_defaults() -> Vec<Self> {
        vec![Self::services(), Self::testimonials(), Self::partners()]
    }

    pub fn dots(mut self, dots_container_id: impl Into<String>) -> Self {
        self.dots_container_id = Some(dots_container_id.into());
        self
    }

    pub fn item_gap(mut self, item_gap: f32) -> Self {
        self.item_gap = item_gap;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn dot_class(mut self, dot_class: impl Into<String>) -> Self {
        self.dot_class = dot_class.into();
        self
    }

    pub fn debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}
