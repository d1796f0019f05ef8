use std::time::{Duration, Instant};

use carousel::{Alignment, CarouselConfig, CarouselError, CarouselRegistry, ACTIVE_CLASS};
use pagedom::{Document, Edges, Element, Viewport};

fn scroller(id: &str, class: &str, count: usize, step: f32, width: f32) -> Element {
    Element::div()
        .id(id)
        .width(400.0)
        .padding(Edges::horizontal(40.0))
        .children((0..count).map(|i| {
            Element::div()
                .id(format!("{id}-{i}"))
                .class(class)
                .offset_left(40.0 + i as f32 * step)
                .width(width)
        }))
}

/// The site's three carousel regions. There is no `partners-dots` element.
fn site() -> Document {
    let root = Element::new("body")
        .id("body")
        .child(scroller("services-scroll", "service-card-h", 6, 352.0, 320.0))
        .child(Element::div().id("carousel-dots"))
        .child(scroller("testimonials-scroll", "testimonial-card", 5, 320.0, 300.0))
        .child(Element::div().id("testimonials-dots"))
        .child(scroller("partners-scroll", "partner-logo", 8, 180.0, 160.0));
    Document::new(root, Viewport::default())
}

fn settle(doc: &mut Document, registry: &mut CarouselRegistry, start: Instant) -> Instant {
    let mut now = start;
    loop {
        doc.tick(now);
        for event in doc.drain_events() {
            registry.handle_event(doc, &event, now);
        }
        registry.poll(doc, now);
        if !doc.is_animating() && registry.next_deadline().is_none() {
            return now;
        }
        now += Duration::from_millis(16);
    }
}

// ============================================================================
// Registration
// ============================================================================

#[test]
fn test_register_site_defaults() {
    let mut doc = site();
    let mut registry = CarouselRegistry::new();

    assert_eq!(registry.register_all(&mut doc, CarouselConfig::site_defaults()), 3);
    assert_eq!(
        registry.ids(),
        vec!["partners-scroll", "services-scroll", "testimonials-scroll"]
    );

    let services = registry.get("services-scroll").unwrap();
    assert_eq!(services.dots().len(), 6);
    assert_eq!(doc.query_selector_all("carousel-dots", ".carousel-dot").len(), 6);

    let testimonials = registry.get("testimonials-scroll").unwrap();
    assert_eq!(doc.query_selector_all("testimonials-dots", ".dot").len(), 5);
    assert_eq!(testimonials.active_index(), Some(0));

    assert!(!registry.get("partners-scroll").unwrap().has_dots());
}

#[test]
fn test_site_conventions_follow_markup() {
    // Service cards keep their wider spacing and dot class in any container
    let services = CarouselConfig::site("featured-scroll", ".service-card-h");
    assert_eq!(services.item_gap, 32.0);
    assert_eq!(services.dot_class, "carousel-dot");
    assert_eq!(services.alignment, Alignment::Start);

    let testimonials = CarouselConfig::site("testimonials-scroll", ".quote");
    assert_eq!(testimonials.alignment, Alignment::Center);
    assert_eq!(testimonials.item_gap, 20.0);
    assert_eq!(testimonials.dot_class, "dot");

    assert_eq!(
        CarouselConfig::site("press-scroll", ".logo"),
        CarouselConfig::new("press-scroll", ".logo")
    );
}

#[test]
fn test_missing_carousel_leaves_others_working() {
    let mut doc = site();
    let mut registry = CarouselRegistry::new();

    assert!(!registry.register(&mut doc, CarouselConfig::new("missing-scroll", ".card")));
    assert!(registry.register(&mut doc, CarouselConfig::services()));
    assert_eq!(registry.len(), 1);
    assert!(!registry.contains("missing-scroll"));

    assert_eq!(
        registry.step(&mut doc, "missing-scroll", 1),
        Err(CarouselError::UnknownCarousel("missing-scroll".to_string()))
    );
    assert_eq!(registry.step(&mut doc, "services-scroll", 1), Ok(Some(352.0)));
}

// ============================================================================
// Step entry point
// ============================================================================

#[test]
fn test_step_rejects_bad_direction() {
    let mut doc = site();
    let mut registry = CarouselRegistry::new();
    registry.register(&mut doc, CarouselConfig::services());

    assert_eq!(
        registry.step(&mut doc, "services-scroll", 3),
        Err(CarouselError::InvalidDirection(3))
    );
    assert!(!doc.is_animating());
}

#[test]
fn test_step_past_last_item_keeps_last_active() {
    let mut doc = site();
    let mut registry = CarouselRegistry::new();
    registry.register_all(&mut doc, CarouselConfig::site_defaults());

    let mut now = Instant::now();
    for _ in 0..10 {
        registry.step(&mut doc, "testimonials-scroll", 1).unwrap();
        now = settle(&mut doc, &mut registry, now);
    }

    let testimonials = registry.get("testimonials-scroll").unwrap();
    assert_eq!(testimonials.active_index(), Some(4));
    assert!(doc.has_class("testimonials-scroll-4", ACTIVE_CLASS));
    assert!(doc.has_class("testimonials-dots-4", ACTIVE_CLASS));
    // Other carousels did not move
    assert_eq!(registry.get("services-scroll").unwrap().active_index(), Some(0));
}

#[test]
fn test_step_back_from_first_item_is_noop() {
    let mut doc = site();
    let mut registry = CarouselRegistry::new();
    registry.register(&mut doc, CarouselConfig::services());

    // Target is item 0, which is where the strip already is
    assert_eq!(registry.step(&mut doc, "services-scroll", -1), Ok(Some(0.0)));
    assert!(!doc.is_animating());
}

// ============================================================================
// Event routing
// ============================================================================

#[test]
fn test_dot_click_routes_to_owning_carousel() {
    let mut doc = site();
    let mut registry = CarouselRegistry::new();
    registry.register_all(&mut doc, CarouselConfig::site_defaults());

    doc.click("carousel-dots-3");
    settle(&mut doc, &mut registry, Instant::now());

    assert_eq!(registry.get("services-scroll").unwrap().active_index(), Some(3));
    assert_eq!(doc.scroll_left("services-scroll"), Some(1056.0));
    assert_eq!(doc.scroll_left("testimonials-scroll"), Some(0.0));
}

#[test]
fn test_independent_pending_refreshes() {
    let mut doc = site();
    let mut registry = CarouselRegistry::new();
    registry.register_all(&mut doc, CarouselConfig::site_defaults());

    let t0 = Instant::now();
    doc.set_scroll_left("services-scroll", 704.0);
    doc.set_scroll_left("partners-scroll", 540.0);
    for event in doc.drain_events() {
        registry.handle_event(&mut doc, &event, t0);
    }
    assert_eq!(registry.next_deadline(), Some(t0 + Duration::from_millis(50)));

    assert_eq!(registry.poll(&mut doc, t0 + Duration::from_millis(10)), 0);
    assert_eq!(registry.poll(&mut doc, t0 + Duration::from_millis(50)), 2);
    assert_eq!(registry.get("services-scroll").unwrap().active_index(), Some(2));
    assert_eq!(registry.get("partners-scroll").unwrap().active_index(), Some(3));
}
