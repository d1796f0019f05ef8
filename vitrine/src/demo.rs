//! Built-in page used when no scenario file is given.

use pagedom::{Document, Edges, Element, Viewport};

use crate::scenario::{Action, BoxSpec};

const VIEWPORT: Viewport = Viewport::new(1280.0, 800.0);

fn strip(
    id: &str,
    item_class: &str,
    count: usize,
    item_width: f32,
    gap: f32,
    container_width: f32,
    padding: Edges,
) -> Element {
    Element::div()
        .id(id)
        .class("scroll-container")
        .width(container_width)
        .padding(padding)
        .children((0..count).map(|i| {
            Element::div()
                .id(format!("{id}-{i}"))
                .class(item_class)
                .offset_left(padding.left + i as f32 * (item_width + gap))
                .width(item_width)
        }))
}

/// The marketing page: services, testimonials and partner logos. The partners
/// section has no dots container.
pub fn page() -> Document {
    let root = Element::new("body")
        .id("body")
        .child(
            Element::new("section")
                .id("services")
                .child(strip(
                    "services-scroll",
                    "service-card-h",
                    6,
                    320.0,
                    32.0,
                    1100.0,
                    Edges::new(0.0, 800.0, 0.0, 24.0),
                ))
                .child(Element::div().id("carousel-dots").class("carousel-dots")),
        )
        .child(
            Element::new("section")
                .id("testimonials")
                .child(strip(
                    "testimonials-scroll",
                    "testimonial-card",
                    5,
                    360.0,
                    20.0,
                    900.0,
                    Edges::horizontal(270.0),
                ))
                .child(Element::div().id("testimonials-dots").class("dots")),
        )
        .child(
            Element::new("section").id("partners").child(strip(
                "partners-scroll",
                "partner-logo",
                10,
                160.0,
                20.0,
                1100.0,
                Edges::new(0.0, 1000.0, 0.0, 0.0),
            )),
        );
    Document::new(root, VIEWPORT)
}

/// A short tour: swipe, arrows, a dot click and a narrow-window reflow.
pub fn actions() -> Vec<Action> {
    let mut actions = vec![
        Action::Swipe {
            container: "services-scroll".to_string(),
            to: 700.0,
            steps: 12,
            interval_ms: 8,
        },
        Action::Wait { ms: 120 },
        Action::Step {
            container: "testimonials-scroll".to_string(),
            direction: 1,
        },
        Action::Wait { ms: 500 },
        Action::Step {
            container: "testimonials-scroll".to_string(),
            direction: 1,
        },
        Action::Wait { ms: 500 },
        Action::Click {
            target: "carousel-dots-4".to_string(),
        },
        Action::Wait { ms: 500 },
        Action::Step {
            container: "partners-scroll".to_string(),
            direction: 1,
        },
        Action::Step {
            container: "partners-scroll".to_string(),
            direction: -1,
        },
        Action::Wait { ms: 500 },
    ];

    // Narrow window: service cards shrink to 280px with the same gap
    let reflow = (0..6)
        .map(|i| BoxSpec {
            id: format!("services-scroll-{i}"),
            left: 24.0 + i as f32 * 312.0,
            width: 280.0,
        })
        .collect();
    actions.push(Action::Resize {
        width: 768.0,
        height: 1024.0,
        reflow,
    });
    actions.push(Action::Wait { ms: 100 });
    actions
}
