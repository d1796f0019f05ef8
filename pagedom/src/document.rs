//! The page document: element tree, viewport, scrolling and the event queue.

use std::collections::VecDeque;
use std::time::Instant;

use log::{trace, warn};

use crate::element::{find_element, find_element_mut, walk_descendants, Content, Element};
use crate::event::Event;
use crate::scroll::{ScrollBehavior, ScrollState};
use crate::selector::Selector;
use crate::types::Viewport;

/// Headless page document.
///
/// Layout is resolved up front (each element carries its offset and width);
/// every layout read goes to the live tree, so edits made through
/// [`Document::element_mut`] or [`Document::set_box`] are visible immediately.
#[derive(Debug)]
pub struct Document {
    root: Element,
    viewport: Viewport,
    scroll: ScrollState,
    events: VecDeque<Event>,
}

impl Document {
    pub fn new(root: Element, viewport: Viewport) -> Self {
        Self {
            root,
            viewport,
            scroll: ScrollState::new(),
            events: VecDeque::new(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    // ------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------

    pub fn element(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    /// IDs of all descendants of `scope` matching `selector`, in document order.
    /// An unknown scope or an unsupported selector matches nothing.
    pub fn query_selector_all(&self, scope: &str, selector: &str) -> Vec<String> {
        let Some(parsed) = Selector::parse(selector) else {
            warn!("Unsupported selector {selector:?}");
            return Vec::new();
        };
        let Some(scope) = self.element(scope) else {
            return Vec::new();
        };

        let mut matches = Vec::new();
        walk_descendants(scope, &mut |element| {
            if parsed.matches(element) {
                matches.push(element.id.clone());
            }
        });
        matches
    }

    // ------------------------------------------------------------------
    // Tree mutation
    // ------------------------------------------------------------------

    /// Append `child` to `parent`. Returns false if the parent doesn't exist.
    pub fn append_child(&mut self, parent: &str, child: Element) -> bool {
        let Some(parent) = self.element_mut(parent) else {
            return false;
        };
        match &mut parent.content {
            Content::Children(children) => children.push(child),
            content => *content = Content::Children(vec![child]),
        }
        true
    }

    /// Remove all children of `parent`, returning how many were removed.
    pub fn clear_children(&mut self, parent: &str) -> usize {
        let Some(parent) = self.element_mut(parent) else {
            return 0;
        };
        let removed = parent.content.children().len();
        parent.content = Content::None;
        removed
    }

    // ------------------------------------------------------------------
    // Classes and attributes
    // ------------------------------------------------------------------

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.element(id).is_some_and(|el| el.has_class(class))
    }

    /// Add or remove a class. Returns true if the class list changed.
    pub fn toggle_class(&mut self, id: &str, class: &str, on: bool) -> bool {
        self.element_mut(id)
            .is_some_and(|el| el.toggle_class(class, on))
    }

    pub fn data(&self, id: &str, key: &str) -> Option<&str> {
        self.element(id).and_then(|el| el.data_value(key))
    }

    // ------------------------------------------------------------------
    // Layout reads
    // ------------------------------------------------------------------

    pub fn offset_left(&self, id: &str) -> Option<f32> {
        self.element(id).map(|el| el.offset_left)
    }

    pub fn offset_width(&self, id: &str) -> Option<f32> {
        self.element(id).map(|el| el.offset_width)
    }

    /// Resolved left padding, as `getComputedStyle(el).paddingLeft` would report it.
    pub fn padding_left(&self, id: &str) -> Option<f32> {
        self.element(id).map(|el| el.padding.left)
    }

    pub fn scroll_left(&self, id: &str) -> Option<f32> {
        self.element(id).map(|el| el.scroll_left)
    }

    /// Largest reachable scroll offset: content extent minus the client width.
    pub fn max_scroll_left(&self, id: &str) -> Option<f32> {
        self.element(id)
            .map(|el| (el.content_extent() - el.offset_width).max(0.0))
    }

    /// Move and resize an element's box, as a reflow would.
    pub fn set_box(&mut self, id: &str, offset_left: f32, width: f32) -> bool {
        let Some(el) = self.element_mut(id) else {
            return false;
        };
        el.offset_left = offset_left;
        el.offset_width = width;
        true
    }

    // ------------------------------------------------------------------
    // Scrolling
    // ------------------------------------------------------------------

    /// User-driven scroll: cancels any smooth scroll on the element and jumps
    /// to `left`, clamped to the scrollable range. Queues a `Scroll` event if
    /// the offset changed.
    pub fn set_scroll_left(&mut self, id: &str, left: f32) -> bool {
        self.scroll.cancel(id);
        self.write_scroll_left(id, left)
    }

    /// Programmatic scroll, like `Element.scrollTo({ left, behavior })`.
    /// Returns the clamped target offset, or `None` for an unknown element.
    pub fn scroll_to(&mut self, id: &str, left: f32, behavior: ScrollBehavior) -> Option<f32> {
        let max = self.max_scroll_left(id)?;
        let target = left.clamp(0.0, max);

        match behavior {
            ScrollBehavior::Instant => {
                self.scroll.cancel(id);
                self.write_scroll_left(id, target);
            }
            ScrollBehavior::Smooth => {
                let from = self.scroll_left(id)?;
                if from == target {
                    self.scroll.cancel(id);
                } else {
                    trace!("Smooth scroll #{id}: {from} -> {target}");
                    self.scroll.request(id, from, target);
                }
            }
        }

        Some(target)
    }

    /// Advance smooth scrolls to `now`. Returns the number of elements whose
    /// offset changed this frame.
    pub fn tick(&mut self, now: Instant) -> usize {
        let frames = self.scroll.advance(now);
        frames
            .into_iter()
            .filter(|(id, left)| self.write_scroll_left(id, *left))
            .count()
    }

    pub fn is_animating(&self) -> bool {
        self.scroll.is_animating()
    }

    /// Target of a pending or running smooth scroll.
    pub fn scroll_target(&self, id: &str) -> Option<f32> {
        self.scroll.target(id)
    }

    /// Earliest moment a running smooth scroll lands on its target.
    pub fn next_animation_deadline(&self) -> Option<Instant> {
        self.scroll.next_completion_time()
    }

    fn write_scroll_left(&mut self, id: &str, left: f32) -> bool {
        let Some(max) = self.max_scroll_left(id) else {
            return false;
        };
        let Some(el) = self.element_mut(id) else {
            return false;
        };

        let left = left.clamp(0.0, max);
        if el.scroll_left == left {
            return false;
        }
        el.scroll_left = left;
        self.events.push_back(Event::Scroll {
            target: id.to_string(),
        });
        true
    }

    // ------------------------------------------------------------------
    // Window and input
    // ------------------------------------------------------------------

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        self.events.push_back(Event::Resize { width, height });
    }

    /// Click an element. Returns false if it doesn't exist.
    pub fn click(&mut self, id: &str) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.events.push_back(Event::Click {
            target: id.to_string(),
        });
        true
    }

    /// Take all queued events, oldest first.
    pub fn drain_events(&mut self) -> Vec<Event> {
        self.events.drain(..).collect()
    }

    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }
}
