//! Event loop driving the page: scripted input, smooth-scroll frames and
//! debounced carousel refreshes.

use std::time::Instant;

use carousel::{CarouselConfig, CarouselRegistry};
use log::{debug, info, trace, warn};
use pagedom::{Document, ScrollBehavior};
use tokio::time::{Duration, MissedTickBehavior, sleep_until};

use crate::scenario::Action;

/// Frame interval while a smooth scroll is running.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Final state of one carousel after a run.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselReport {
    pub container_id: String,
    pub active: Option<usize>,
    pub item_count: usize,
    pub scroll_left: f32,
}

fn now() -> Instant {
    tokio::time::Instant::now().into_std()
}

/// Sleep until the deadline, or forever if there is none.
/// This is used as a conditional branch in tokio::select!
async fn sleep_until_optional(deadline: Option<Instant>) {
    match deadline {
        Some(d) => sleep_until(tokio::time::Instant::from_std(d)).await,
        None => std::future::pending::<()>().await,
    }
}

pub struct Runtime {
    doc: Document,
    registry: CarouselRegistry,
}

impl Runtime {
    /// Register the carousels on the page. Carousels whose markup is missing
    /// are skipped with a warning.
    pub fn new(mut doc: Document, configs: Vec<CarouselConfig>) -> Self {
        let mut registry = CarouselRegistry::new();
        let requested = configs.len();
        let registered = registry.register_all(&mut doc, configs);
        info!("Registered {registered} of {requested} carousels");
        Self { doc, registry }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn registry(&self) -> &CarouselRegistry {
        &self.registry
    }

    /// Replay the script, then keep running until every smooth scroll and
    /// deferred refresh has finished.
    pub async fn run(&mut self, actions: &[Action]) {
        for action in actions {
            debug!("Action: {action:?}");
            match action {
                Action::Wait { ms } => self.pump(Some(Duration::from_millis(*ms))).await,
                Action::Swipe {
                    container,
                    to,
                    steps,
                    interval_ms,
                } => self.swipe(container, *to, *steps, *interval_ms).await,
                other => {
                    self.apply(other);
                    self.dispatch_events();
                }
            }
        }
        self.pump(None).await;
    }

    /// Apply an input that completes immediately.
    fn apply(&mut self, action: &Action) {
        match action {
            Action::Scroll { container, left } => {
                if self.doc.scroll_left(container).is_none() {
                    warn!("Scroll on unknown element #{container}");
                }
                self.doc.set_scroll_left(container, *left);
            }
            Action::SmoothScroll { container, left } => {
                match self.doc.scroll_to(container, *left, ScrollBehavior::Smooth) {
                    Some(target) => debug!("Smooth scroll of #{container} towards {target}"),
                    None => warn!("Smooth scroll on unknown element #{container}"),
                }
            }
            Action::Resize {
                width,
                height,
                reflow,
            } => {
                for entry in reflow {
                    if !self.doc.set_box(&entry.id, entry.left, entry.width) {
                        warn!("Reflow of unknown element #{}", entry.id);
                    }
                }
                self.doc.resize(*width, *height);
            }
            Action::Click { target } => {
                if !self.doc.click(target) {
                    warn!("Click on unknown element #{target}");
                }
            }
            Action::Step {
                container,
                direction,
            } => {
                if let Err(err) = self.registry.step(&mut self.doc, container, *direction) {
                    warn!("{err}");
                }
            }
            Action::Wait { .. } | Action::Swipe { .. } => {}
        }
    }

    async fn swipe(&mut self, container: &str, to: f32, steps: u32, interval_ms: u64) {
        let Some(from) = self.doc.scroll_left(container) else {
            warn!("Swipe on unknown element #{container}");
            return;
        };
        let steps = steps.max(1);
        for step in 1..=steps {
            let left = from + (to - from) * step as f32 / steps as f32;
            self.doc.set_scroll_left(container, left);
            self.dispatch_events();
            self.pump(Some(Duration::from_millis(interval_ms))).await;
        }
    }

    /// Deliver queued page events to the carousels.
    fn dispatch_events(&mut self) {
        let at = now();
        for event in self.doc.drain_events() {
            trace!("Event: {event:?}");
            let handled = self.registry.handle_event(&mut self.doc, &event, at);
            if handled == 0 {
                trace!("Event not handled by any carousel");
            }
        }
    }

    /// Run the loop for `duration`, or until nothing is pending when `None`.
    async fn pump(&mut self, duration: Option<Duration>) {
        let end = duration.map(|d| now() + d);
        let mut frames = tokio::time::interval(FRAME_INTERVAL);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            let animating = self.doc.is_animating();
            let next_deadline = self.registry.next_deadline();
            let landing = self.doc.next_animation_deadline();
            if end.is_none() && !animating && next_deadline.is_none() {
                break;
            }

            tokio::select! {
                _ = sleep_until_optional(end) => break,

                _ = sleep_until_optional(next_deadline) => {
                    let fired = self.registry.poll(&mut self.doc, now());
                    trace!("Deferred refresh: {fired} carousel(s)");
                }

                _ = frames.tick(), if animating => {
                    self.doc.tick(now());
                }

                // Final frame exactly when a scroll lands
                _ = sleep_until_optional(landing) => {
                    self.doc.tick(now());
                }
            }

            self.dispatch_events();
        }
    }

    /// Final state of every registered carousel, sorted by container id.
    pub fn report(&self) -> Vec<CarouselReport> {
        self.registry
            .ids()
            .into_iter()
            .filter_map(|id| {
                let controller = self.registry.get(id)?;
                Some(CarouselReport {
                    container_id: id.to_string(),
                    active: controller.active_index(),
                    item_count: controller.item_count(),
                    scroll_left: self.doc.scroll_left(id).unwrap_or(0.0),
                })
            })
            .collect()
    }
}
