//! Registry for the carousels on a page, keyed by container id.

use std::collections::HashMap;
use std::time::Instant;

use log::{debug, warn};
use pagedom::{Document, Event};

use crate::config::CarouselConfig;
use crate::controller::{CarouselController, Direction};
use crate::error::CarouselError;

#[derive(Debug, Default)]
pub struct CarouselRegistry {
    controllers: HashMap<String, CarouselController>,
}

impl CarouselRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and register a carousel.
    ///
    /// A carousel whose container or items are missing is logged and left out;
    /// the rest of the page keeps working. Returns true if it was registered.
    pub fn register(&mut self, doc: &mut Document, config: CarouselConfig) -> bool {
        match CarouselController::new(doc, config) {
            Ok(controller) => {
                let id = controller.container_id().to_string();
                if self.controllers.insert(id.clone(), controller).is_some() {
                    debug!("Carousel #{id} re-registered, previous instance dropped");
                }
                true
            }
            Err(err) => {
                warn!("{err}");
                false
            }
        }
    }

    /// Register every config, returning how many carousels came up.
    pub fn register_all(
        &mut self,
        doc: &mut Document,
        configs: impl IntoIterator<Item = CarouselConfig>,
    ) -> usize {
        configs
            .into_iter()
            .filter(|config| self.register(doc, config.clone()))
            .count()
    }

    pub fn get(&self, container_id: &str) -> Option<&CarouselController> {
        self.controllers.get(container_id)
    }

    pub fn get_mut(&mut self, container_id: &str) -> Option<&mut CarouselController> {
        self.controllers.get_mut(container_id)
    }

    pub fn contains(&self, container_id: &str) -> bool {
        self.controllers.contains_key(container_id)
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Registered container ids, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.controllers.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Previous/next entry point for arrow buttons: `direction` is -1 or 1.
    /// Returns the scroll target, if a scroll was issued.
    pub fn step(
        &self,
        doc: &mut Document,
        container_id: &str,
        direction: i32,
    ) -> Result<Option<f32>, CarouselError> {
        let controller = self
            .get(container_id)
            .ok_or_else(|| CarouselError::UnknownCarousel(container_id.to_string()))?;
        let direction = Direction::try_from(direction)?;
        Ok(controller.step(doc, direction))
    }

    /// Hand a page event to every carousel it concerns.
    pub fn handle_event(&mut self, doc: &mut Document, event: &Event, now: Instant) -> usize {
        let mut handled = 0;
        for controller in self.controllers.values_mut() {
            if controller.handle_event(doc, event, now) {
                handled += 1;
            }
        }
        handled
    }

    /// Run every deferred refresh that is due. Returns how many ran.
    pub fn poll(&mut self, doc: &mut Document, now: Instant) -> usize {
        let mut fired = 0;
        for controller in self.controllers.values_mut() {
            if controller.poll(doc, now) {
                fired += 1;
            }
        }
        fired
    }

    /// Earliest pending deferred refresh across all carousels.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.controllers
            .values()
            .filter_map(CarouselController::next_deadline)
            .min()
    }
}
