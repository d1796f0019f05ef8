use std::time::{Duration, Instant};

use carousel::{CarouselConfig, CarouselController, Debouncer, DEFAULT_DEBOUNCE};
use pagedom::{Document, Edges, Element, Viewport};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn strip() -> Document {
    let root = Element::div().id("body").child(
        Element::div()
            .id("strip")
            .width(400.0)
            .padding(Edges::new(0.0, 100.0, 0.0, 0.0))
            .children((0..6).map(|i| {
                Element::div()
                    .id(format!("card-{i}"))
                    .class("card")
                    .offset_left(i as f32 * 352.0)
                    .width(320.0)
            })),
    );
    Document::new(root, Viewport::default())
}

// =============================================================================
// Debouncer
// =============================================================================

#[test]
fn test_debouncer_fires_after_delay() {
    let t0 = Instant::now();
    let mut debounce = Debouncer::new(ms(50));

    assert!(!debounce.schedule(t0));
    assert_eq!(debounce.deadline(), Some(t0 + ms(50)));
    assert!(!debounce.fire_if_due(t0 + ms(49)));
    assert!(debounce.fire_if_due(t0 + ms(50)));
    // Consumed
    assert!(!debounce.is_pending());
    assert!(!debounce.fire_if_due(t0 + ms(100)));
}

#[test]
fn test_debouncer_reschedule_replaces_deadline() {
    let t0 = Instant::now();
    let mut debounce = Debouncer::new(ms(50));

    debounce.schedule(t0);
    assert!(debounce.schedule(t0 + ms(30)));
    assert!(!debounce.fire_if_due(t0 + ms(60)));
    assert!(debounce.fire_if_due(t0 + ms(80)));
}

#[test]
fn test_debouncer_cancel() {
    let t0 = Instant::now();
    let mut debounce = Debouncer::new(ms(50));

    assert!(!debounce.cancel());
    debounce.schedule(t0);
    assert!(debounce.cancel());
    assert!(!debounce.fire_if_due(t0 + ms(500)));
}

// =============================================================================
// Scroll bursts through a controller
// =============================================================================

#[test]
fn test_scroll_burst_collapses_into_one_refresh() {
    let mut doc = strip();
    let mut controller =
        CarouselController::new(&mut doc, CarouselConfig::new("strip", ".card")).unwrap();
    assert_eq!(controller.config().debounce, DEFAULT_DEBOUNCE);

    let t0 = Instant::now();
    let offsets = [100.0, 300.0, 500.0, 700.0, 1056.0];
    for (i, offset) in offsets.iter().enumerate() {
        let at = t0 + ms(i as u64 * 10);
        doc.set_scroll_left("strip", *offset);
        for event in doc.drain_events() {
            controller.handle_event(&mut doc, &event, at);
        }
        // Nothing is recomputed while the burst is going on
        assert!(!controller.poll(&mut doc, at));
        assert_eq!(controller.active_index(), Some(0));
    }
    let last = t0 + ms(40);

    let mut refreshes = 0;
    let mut now = last;
    while now <= last + ms(200) {
        if controller.poll(&mut doc, now) {
            refreshes += 1;
            assert!(now >= last + DEFAULT_DEBOUNCE);
        }
        now += ms(5);
    }

    assert_eq!(refreshes, 1);
    // Computed from the last offset of the burst: 1056 / 352 = 3
    assert_eq!(controller.active_index(), Some(3));
}

#[test]
fn test_separate_bursts_refresh_separately() {
    let mut doc = strip();
    let mut controller =
        CarouselController::new(&mut doc, CarouselConfig::new("strip", ".card")).unwrap();
    let t0 = Instant::now();

    controller.on_scroll(t0);
    assert_eq!(controller.next_deadline(), Some(t0 + DEFAULT_DEBOUNCE));
    doc.set_scroll_left("strip", 352.0);
    assert!(controller.poll(&mut doc, t0 + ms(60)));
    assert_eq!(controller.active_index(), Some(1));

    controller.on_scroll(t0 + ms(100));
    doc.set_scroll_left("strip", 704.0);
    assert!(!controller.poll(&mut doc, t0 + ms(120)));
    assert!(controller.poll(&mut doc, t0 + ms(150)));
    assert_eq!(controller.active_index(), Some(2));
    assert_eq!(controller.next_deadline(), None);
}

#[test]
fn test_scroll_on_other_container_is_ignored() {
    let mut doc = strip();
    let mut controller =
        CarouselController::new(&mut doc, CarouselConfig::new("strip", ".card")).unwrap();

    let event = pagedom::Event::Scroll {
        target: "elsewhere".to_string(),
    };
    assert!(!controller.handle_event(&mut doc, &event, Instant::now()));
    assert_eq!(controller.next_deadline(), None);
}
