use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{walk_descendants, Content};
use crate::types::Edges;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

pub(crate) fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: String,
    pub classes: Vec<String>,

    // Content
    pub content: Content,

    // Resolved horizontal box, relative to the nearest scroll container's
    // origin (the `offsetParent` of nested tracks is still the scroller)
    pub offset_left: f32,
    pub offset_width: f32,
    pub padding: Edges,

    // Scroll state (only meaningful for scroll containers)
    pub scroll_left: f32,

    // `data-*` attributes, keyed without the prefix
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: "div".to_string(),
            classes: Vec::new(),
            content: Content::None,
            offset_left: 0.0,
            offset_width: 0.0,
            padding: Edges::default(),
            scroll_left: 0.0,
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(&tag),
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    // Layout
    pub fn offset_left(mut self, offset_left: f32) -> Self {
        self.offset_left = offset_left;
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.offset_width = width;
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn scroll_left(mut self, scroll_left: f32) -> Self {
        self.scroll_left = scroll_left;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        for child in children {
            self = self.child(child);
        }
        self
    }

    // Class list
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add or remove `class`. Returns true if the class list changed.
    pub fn toggle_class(&mut self, class: &str, on: bool) -> bool {
        let present = self.has_class(class);
        if on && !present {
            self.classes.push(class.to_string());
            true
        } else if !on && present {
            self.classes.retain(|c| c != class);
            true
        } else {
            false
        }
    }

    pub fn data_value(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// Right edge of the laid-out content, used to derive scroll extents.
    ///
    /// Every descendant counts, so items wrapped in an unsized track still
    /// stretch the scroller.
    pub(crate) fn content_extent(&self) -> f32 {
        let mut right = 0.0_f32;
        walk_descendants(self, &mut |el| {
            right = right.max(el.offset_left + el.offset_width);
        });
        right + self.padding.right
    }
}
