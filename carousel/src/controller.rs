use std::time::Instant;

use log::{debug, trace};
use pagedom::{Document, Element, Event, ScrollBehavior};

use crate::config::{Alignment, CarouselConfig, ACTIVE_CLASS};
use crate::debounce::Debouncer;
use crate::error::{CarouselError, MissingPart};

/// Direction of a previous/next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    pub fn delta(self) -> isize {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

impl TryFrom<i32> for Direction {
    type Error = CarouselError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Previous),
            1 => Ok(Self::Next),
            other => Err(CarouselError::InvalidDirection(other)),
        }
    }
}

/// Live box of one item, read from layout.
#[derive(Debug, Clone, Copy)]
struct ItemBox {
    left: f32,
    width: f32,
}

impl ItemBox {
    fn center(self) -> f32 {
        self.left + self.width / 2.0
    }
}

/// Drives one scrolling carousel.
///
/// Items and dots are fixed at construction. Positions and widths are read
/// from the document on every computation, so reflows are picked up without
/// any invalidation. The container's left padding is the exception: it is
/// measured once here and kept for the controller's lifetime.
#[derive(Debug)]
pub struct CarouselController {
    config: CarouselConfig,
    items: Vec<String>,
    dots: Vec<String>,
    container_inset: f32,
    debounce: Debouncer,
    active: Option<usize>,
}

impl CarouselController {
    /// Bind a carousel to its container, build its dots and apply the initial
    /// active state.
    pub fn new(doc: &mut Document, config: CarouselConfig) -> Result<Self, CarouselError> {
        let container = config.container_id.as_str();
        if !doc.contains(container) {
            return Err(CarouselError::missing(container, MissingPart::Container));
        }

        let items = doc.query_selector_all(container, &config.item_selector);
        if items.is_empty() {
            return Err(CarouselError::missing(container, MissingPart::Items));
        }

        let container_inset = doc.padding_left(container).unwrap_or(0.0);

        let dots_container = config
            .dots_container_id
            .as_deref()
            .filter(|id| doc.contains(id));
        let dots = match dots_container {
            Some(dots_container) if items.len() > 1 => {
                build_dots(doc, dots_container, &config, items.len())
            }
            _ => Vec::new(),
        };

        debug!(
            "Carousel #{}: {} items, {} dots, {:?} alignment, inset {}",
            config.container_id,
            items.len(),
            dots.len(),
            config.alignment,
            container_inset
        );

        let mut controller = Self {
            debounce: Debouncer::new(config.debounce),
            config,
            items,
            dots,
            container_inset,
            active: None,
        };
        controller.refresh(doc);
        Ok(controller)
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn container_id(&self) -> &str {
        &self.config.container_id
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn dots(&self) -> &[String] {
        &self.dots
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn has_dots(&self) -> bool {
        !self.dots.is_empty()
    }

    /// Left padding of the container as measured at construction.
    pub fn container_inset(&self) -> f32 {
        self.container_inset
    }

    /// Index most recently rendered as active. For inspection only; stepping
    /// always re-derives the index from the live scroll offset.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    // ------------------------------------------------------------------
    // Active-index inference
    // ------------------------------------------------------------------

    /// Infer the active item from the current scroll offset and live layout.
    /// Always within `0..item_count`.
    pub fn compute_active_index(&self, doc: &Document) -> usize {
        self.clamp_index(self.estimate_index(doc))
    }

    /// Unclamped index estimate. Start alignment can overshoot either end
    /// when the content has extra room past the items.
    fn estimate_index(&self, doc: &Document) -> isize {
        let container = self.container_id();
        let Some(scroll_left) = doc.scroll_left(container) else {
            return 0;
        };

        match self.config.alignment {
            Alignment::Center => {
                let container_width = doc.offset_width(container).unwrap_or(0.0);
                let viewport_center = scroll_left + container_width / 2.0;

                let mut closest = f32::INFINITY;
                let mut active = 0;
                for index in 0..self.items.len() {
                    let Ok(item) = self.item_box(doc, index) else {
                        continue;
                    };
                    // Strict comparison: the lower index wins exact ties
                    let distance = (item.center() - viewport_center).abs();
                    if distance < closest {
                        closest = distance;
                        active = index;
                    }
                }
                active as isize
            }
            Alignment::Start => {
                let step = self.step_width(doc);
                if !step.is_finite() || step <= 0.0 {
                    return 0;
                }
                let adjusted = scroll_left + self.container_inset;
                (adjusted / step).round() as isize
            }
        }
    }

    /// Distance between the leading edges of consecutive items, measured from
    /// the first two; falls back to the first item's width plus the gap.
    fn step_width(&self, doc: &Document) -> f32 {
        let Ok(first) = self.item_box(doc, 0) else {
            return 0.0;
        };
        match self.item_box(doc, 1) {
            Ok(second) => second.left - first.left,
            Err(_) => first.width + self.config.item_gap,
        }
    }

    fn item_box(&self, doc: &Document, index: usize) -> Result<ItemBox, CarouselError> {
        let invalid = || CarouselError::InvalidIndex {
            index,
            len: self.items.len(),
        };
        let id = self.items.get(index).ok_or_else(invalid)?;
        let el = doc.element(id).ok_or_else(invalid)?;
        Ok(ItemBox {
            left: el.offset_left,
            width: el.offset_width,
        })
    }

    fn clamp_index(&self, index: isize) -> usize {
        let last = self.items.len().saturating_sub(1) as isize;
        index.clamp(0, last) as usize
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Recompute the active index and render it. Returns the index.
    pub fn refresh(&mut self, doc: &mut Document) -> usize {
        let index = self.compute_active_index(doc);
        self.apply_active_state(doc, index);
        index
    }

    fn apply_active_state(&mut self, doc: &mut Document, index: usize) {
        for (i, id) in self.items.iter().enumerate() {
            doc.toggle_class(id, ACTIVE_CLASS, i == index);
        }
        for (i, id) in self.dots.iter().enumerate() {
            doc.toggle_class(id, ACTIVE_CLASS, i == index);
        }

        if self.active != Some(index) {
            debug!(
                "Carousel #{}: active {:?} -> {}",
                self.config.container_id, self.active, index
            );
        }
        self.active = Some(index);
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Smooth-scroll so the item at `index` sits where the alignment policy
    /// puts the active item. Does nothing for an index with no item.
    ///
    /// Active state is not touched here; it follows from the scroll events the
    /// animation produces. Returns the (clamped) scroll target.
    pub fn scroll_to_index(&self, doc: &mut Document, index: usize) -> Option<f32> {
        let item = match self.item_box(doc, index) {
            Ok(item) => item,
            Err(err) => {
                trace!("Carousel #{}: {err}", self.config.container_id);
                return None;
            }
        };

        let container = self.container_id();
        let target = match self.config.alignment {
            Alignment::Center => {
                let container_width = doc.offset_width(container).unwrap_or(0.0);
                item.left - (container_width - item.width) / 2.0
            }
            Alignment::Start => item.left - self.container_inset,
        };

        debug!("Carousel #{container}: seek to item {index} (offset {target})");
        doc.scroll_to(container, target, ScrollBehavior::Smooth)
    }

    /// Move one item back or forward from the item currently under the
    /// scroll position, stopping at either end.
    pub fn step(&self, doc: &mut Document, direction: Direction) -> Option<f32> {
        // The estimate saturates when the step width is tiny
        let estimate = self.estimate_index(doc);
        let target = self.clamp_index(estimate.saturating_add(direction.delta()));
        self.scroll_to_index(doc, target)
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    /// A scroll happened on the container: (re)start the quiet-period timer.
    pub fn on_scroll(&mut self, now: Instant) {
        let replaced = self.debounce.schedule(now);
        trace!(
            "Carousel #{}: scroll, refresh deferred{}",
            self.config.container_id,
            if replaced { " (rescheduled)" } else { "" }
        );
    }

    pub fn on_resize(&mut self, doc: &mut Document) -> usize {
        self.refresh(doc)
    }

    /// Index carried by one of this carousel's dots.
    pub fn dot_index(&self, doc: &Document, dot_id: &str) -> Option<usize> {
        if !self.dots.iter().any(|id| id == dot_id) {
            return None;
        }
        doc.data(dot_id, "index")?.parse().ok()
    }

    /// Route a page event. Returns true if the event concerned this carousel.
    pub fn handle_event(&mut self, doc: &mut Document, event: &Event, now: Instant) -> bool {
        match event {
            Event::Scroll { target } if *target == self.config.container_id => {
                self.on_scroll(now);
                true
            }
            Event::Resize { .. } => {
                self.on_resize(doc);
                true
            }
            Event::Click { target } => match self.dot_index(doc, target) {
                Some(index) => {
                    self.scroll_to_index(doc, index);
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    /// Run the deferred refresh if its quiet period has elapsed.
    pub fn poll(&mut self, doc: &mut Document, now: Instant) -> bool {
        if !self.debounce.fire_if_due(now) {
            return false;
        }
        self.refresh(doc);
        true
    }

    /// When the pending deferred refresh is due, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debounce.deadline()
    }
}

/// Replace the contents of the dots container with one dot per item.
fn build_dots(
    doc: &mut Document,
    dots_container: &str,
    config: &CarouselConfig,
    count: usize,
) -> Vec<String> {
    doc.clear_children(dots_container);

    (0..count)
        .map(|index| {
            let id = format!("{dots_container}-{index}");
            let dot = Element::div()
                .id(id.clone())
                .class(config.dot_class.clone())
                .data("index", index.to_string())
                .data("carousel", config.container_id.clone());
            doc.append_child(dots_container, dot);
            id
        })
        .collect()
}
