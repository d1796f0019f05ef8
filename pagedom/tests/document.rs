use pagedom::{Document, Edges, Element, Event, Viewport};

fn strip() -> Document {
    let root = Element::new("body").id("body").child(
        Element::div()
            .id("strip")
            .class("scroller")
            .width(400.0)
            .padding(Edges::horizontal(16.0))
            .children((0..3).map(|i| {
                Element::div()
                    .id(format!("card-{i}"))
                    .class("card")
                    .offset_left(16.0 + i as f32 * 200.0)
                    .width(180.0)
            })),
    );
    Document::new(root, Viewport::default())
}

// ============================================================================
// Lookup and selectors
// ============================================================================

#[test]
fn test_query_selector_all_document_order() {
    let doc = strip();
    assert_eq!(
        doc.query_selector_all("strip", ".card"),
        vec!["card-0", "card-1", "card-2"]
    );
}

#[test]
fn test_query_selector_all_scoped_to_descendants() {
    let doc = strip();
    // The scope itself is not a match candidate
    assert!(doc.query_selector_all("strip", ".scroller").is_empty());
    assert_eq!(doc.query_selector_all("body", ".scroller"), vec!["strip"]);
}

#[test]
fn test_query_selector_all_groups_and_ids() {
    let doc = strip();
    assert_eq!(
        doc.query_selector_all("body", "#card-2, div#card-0"),
        vec!["card-0", "card-2"]
    );
}

#[test]
fn test_query_selector_all_unknown_scope_or_bad_selector() {
    let doc = strip();
    assert!(doc.query_selector_all("missing", ".card").is_empty());
    assert!(doc.query_selector_all("strip", ".a .b").is_empty());
}

// ============================================================================
// Tree mutation and classes
// ============================================================================

#[test]
fn test_append_and_clear_children() {
    let mut doc = strip();
    assert!(doc.append_child("strip", Element::span().id("extra").class("card")));
    assert_eq!(doc.query_selector_all("strip", ".card").len(), 4);

    assert_eq!(doc.clear_children("strip"), 4);
    assert!(doc.query_selector_all("strip", ".card").is_empty());
    assert!(!doc.append_child("missing", Element::div()));
}

#[test]
fn test_toggle_class_reports_changes() {
    let mut doc = strip();
    assert!(doc.toggle_class("card-1", "active", true));
    assert!(!doc.toggle_class("card-1", "active", true));
    assert!(doc.has_class("card-1", "active"));
    assert!(doc.toggle_class("card-1", "active", false));
    assert!(!doc.has_class("card-1", "active"));
    assert!(!doc.toggle_class("missing", "active", true));
}

// ============================================================================
// Layout and scrolling
// ============================================================================

#[test]
fn test_layout_reads() {
    let doc = strip();
    assert_eq!(doc.offset_left("card-1"), Some(216.0));
    assert_eq!(doc.offset_width("card-1"), Some(180.0));
    assert_eq!(doc.padding_left("strip"), Some(16.0));
    // Content ends at 16 + 400 + 180 + 16 = 612, client width is 400
    assert_eq!(doc.max_scroll_left("strip"), Some(212.0));
}

#[test]
fn test_set_scroll_left_clamps_and_emits_once() {
    let mut doc = strip();
    assert!(doc.set_scroll_left("strip", 1000.0));
    assert_eq!(doc.scroll_left("strip"), Some(212.0));

    // Same offset again: no change, no event
    assert!(!doc.set_scroll_left("strip", 500.0));

    assert!(doc.set_scroll_left("strip", -20.0));
    assert_eq!(doc.scroll_left("strip"), Some(0.0));

    let events = doc.drain_events();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.target() == Some("strip")));
    assert!(!doc.has_pending_events());
}

#[test]
fn test_set_box_is_visible_to_layout_reads() {
    let mut doc = strip();
    assert!(doc.set_box("card-2", 500.0, 300.0));
    assert_eq!(doc.offset_left("card-2"), Some(500.0));
    assert_eq!(doc.max_scroll_left("strip"), Some(416.0));
}

#[test]
fn test_scroll_extent_counts_nested_track() {
    // Cards live inside an unsized track; their boxes still stretch the scroller
    let root = Element::new("body").id("body").child(
        Element::div().id("rail").width(300.0).child(
            Element::div().id("track").children((0..3).map(|i| {
                Element::div()
                    .id(format!("slide-{i}"))
                    .class("card")
                    .offset_left(i as f32 * 352.0)
                    .width(332.0)
            })),
        ),
    );
    let mut doc = Document::new(root, Viewport::default());

    // 704 + 332 - 300
    assert_eq!(doc.max_scroll_left("rail"), Some(736.0));
    assert!(doc.set_scroll_left("rail", 352.0));
    assert_eq!(doc.scroll_left("rail"), Some(352.0));
}

// ============================================================================
// Window and input events
// ============================================================================

#[test]
fn test_resize_and_click_events() {
    let mut doc = strip();
    doc.resize(390.0, 844.0);
    assert!(doc.click("card-0"));
    assert!(!doc.click("missing"));

    assert_eq!(doc.viewport(), Viewport::new(390.0, 844.0));
    assert_eq!(
        doc.drain_events(),
        vec![
            Event::Resize {
                width: 390.0,
                height: 844.0
            },
            Event::Click {
                target: "card-0".to_string()
            },
        ]
    );
}
