//! JSON scenario format: a page layout, the carousels on it, and a script of
//! interactions to replay.

use std::path::Path;

use carousel::{Alignment, CarouselConfig};
use pagedom::{Document, Edges, Element, Viewport};
use serde::Deserialize;

use crate::error::SiteError;

#[derive(Debug, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub viewport: Option<ViewportSpec>,
    pub page: NodeSpec,
    /// Carousels to register. Defaults to the site's three carousels.
    #[serde(default)]
    pub carousels: Option<Vec<CarouselSpec>>,
    #[serde(default)]
    pub actions: Vec<Action>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ViewportSpec {
    pub width: f32,
    pub height: f32,
}

/// One element of the page, with its resolved horizontal box.
#[derive(Debug, Deserialize)]
pub struct NodeSpec {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default = "default_tag")]
    pub tag: String,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub left: f32,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub padding_left: f32,
    #[serde(default)]
    pub padding_right: f32,
    #[serde(default)]
    pub children: Vec<NodeSpec>,
}

fn default_tag() -> String {
    "div".to_string()
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlignSpec {
    Start,
    Center,
}

/// An explicit carousel. Fields left out follow the site's conventions for
/// the container and item selector (see [`CarouselConfig::site`]).
#[derive(Debug, Deserialize)]
pub struct CarouselSpec {
    pub container: String,
    pub items: String,
    #[serde(default)]
    pub dots: Option<String>,
    #[serde(default)]
    pub gap: Option<f32>,
    #[serde(default)]
    pub align: Option<AlignSpec>,
    #[serde(default)]
    pub dot_class: Option<String>,
    #[serde(default)]
    pub debounce_ms: Option<u64>,
}

/// New position of one element after a reflow.
#[derive(Debug, Clone, Deserialize)]
pub struct BoxSpec {
    pub id: String,
    pub left: f32,
    pub width: f32,
}

/// One scripted interaction.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Jump the container to an offset, as a scrollbar drag would.
    Scroll { container: String, left: f32 },
    /// Programmatic smooth scroll, as `scrollTo({ behavior: 'smooth' })`.
    SmoothScroll { container: String, left: f32 },
    /// Scroll in small increments, producing a burst of scroll events.
    Swipe {
        container: String,
        to: f32,
        #[serde(default = "default_swipe_steps")]
        steps: u32,
        #[serde(default = "default_swipe_interval")]
        interval_ms: u64,
    },
    /// Resize the window, optionally moving elements as the reflow would.
    Resize {
        width: f32,
        height: f32,
        #[serde(default)]
        reflow: Vec<BoxSpec>,
    },
    Click { target: String },
    /// Previous (-1) / next (1) arrow on a carousel.
    Step { container: String, direction: i32 },
    Wait { ms: u64 },
}

fn default_swipe_steps() -> u32 {
    8
}

fn default_swipe_interval() -> u64 {
    10
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self, SiteError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SiteError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| SiteError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn document(&self) -> Document {
        let viewport = self
            .viewport
            .map(|v| Viewport::new(v.width, v.height))
            .unwrap_or_default();
        Document::new(self.page.to_element(), viewport)
    }

    pub fn carousel_configs(&self) -> Vec<CarouselConfig> {
        match &self.carousels {
            Some(specs) => specs.iter().map(CarouselSpec::to_config).collect(),
            None => CarouselConfig::site_defaults(),
        }
    }
}

impl NodeSpec {
    pub fn to_element(&self) -> Element {
        let mut element = Element::new(self.tag.clone())
            .offset_left(self.left)
            .width(self.width)
            .padding(Edges::new(0.0, self.padding_right, 0.0, self.padding_left));
        if let Some(id) = &self.id {
            element = element.id(id.clone());
        }
        for class in &self.classes {
            element = element.class(class.clone());
        }
        element.children(self.children.iter().map(NodeSpec::to_element))
    }
}

impl CarouselSpec {
    pub fn to_config(&self) -> CarouselConfig {
        let mut config = CarouselConfig::site(self.container.clone(), self.items.clone());
        if let Some(dots) = &self.dots {
            config = config.dots(dots.clone());
        }
        if let Some(gap) = self.gap {
            config = config.item_gap(gap);
        }
        if let Some(dot_class) = &self.dot_class {
            config = config.dot_class(dot_class.clone());
        }
        if let Some(ms) = self.debounce_ms {
            config = config.debounce(std::time::Duration::from_millis(ms));
        }
        if let Some(align) = self.align {
            config = config.alignment(match align {
                AlignSpec::Start => Alignment::Start,
                AlignSpec::Center => Alignment::Center,
            });
        }
        config
    }
}
