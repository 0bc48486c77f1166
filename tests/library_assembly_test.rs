use std::sync::{Arc, Mutex};

use librarium::{
    AccessibilityDecorator, AudioDecorator, Catalog, DigitalItemProxy, Item, ItemFactory,
    Notifier, Observer, SummaryDecorator,
};

struct RecordingObserver {
    name: &'static str,
    log: Arc<Mutex<Vec<String>>>,
}

impl Observer for RecordingObserver {
    fn receive(&self, message: &str) {
        self.log
            .lock()
            .unwrap()
            .push(format!("Notification for {}: {}", self.name, message));
    }
}

// The full reference assembly: factory-built items, decorated editions, a
// denied proxy, all registered in the shared catalog, one observer notified.
// Kept as a single test so nothing else races the process-wide catalog.
#[test]
fn test_end_to_end_assembly() {
    let design_patterns = ItemFactory::create("digital", "Design Patterns", "GoF").unwrap();
    let clean_code = ItemFactory::create("fisico", "Clean Code", "Robert C. Martin").unwrap();

    let summary_edition = SummaryDecorator::new(
        ItemFactory::create("fisico", "Clean Code", "Robert C. Martin").unwrap(),
    );
    let audio_edition =
        AudioDecorator::new(ItemFactory::create("digital", "Design Patterns", "GoF").unwrap());
    let accessible_edition = AccessibilityDecorator::new(
        ItemFactory::create("digital", "Design Patterns", "GoF").unwrap(),
    );
    let restricted = DigitalItemProxy::new("Refactoring", "Martin Fowler", false);

    let mut catalog = Catalog::instance().lock().unwrap();
    catalog.add_item(design_patterns);
    catalog.add_item(clean_code);
    catalog.add_item(Box::new(summary_edition));
    catalog.add_item(Box::new(restricted));
    catalog.add_item(Box::new(audio_edition));
    catalog.add_item(Box::new(accessible_edition));
    assert_eq!(catalog.items().len(), 6);

    // Decorated physical item renders two lines.
    assert_eq!(
        catalog.items()[2].render(),
        "[Físico] Clean Code - Robert C. Martin\n[Summary available]"
    );

    // Denied proxy renders exactly one line and no [E-Book] tag.
    let denial = catalog.items()[3].render();
    assert_eq!(denial, "Access denied to digital item: Refactoring");
    assert_eq!(denial.lines().count(), 1);

    assert_eq!(
        catalog.items()[4].render(),
        "[E-Book] Design Patterns - GoF\n[Audiobook available]"
    );
    assert_eq!(
        catalog.items()[5].render(),
        "[E-Book] Design Patterns - GoF\n[Accessibility: high-contrast text and screen-reader support]"
    );

    // Lookup is case-insensitive; a miss is None.
    assert_eq!(
        catalog.find_by_title("clean code").unwrap().author(),
        "Robert C. Martin"
    );
    assert!(catalog.find_by_title("Nonexistent").is_none());

    // The same instance is reachable through a second handle.
    assert!(std::ptr::eq(Catalog::instance(), Catalog::instance()));

    // One registered observer gets the broadcast, personalized.
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut notifier = Notifier::new();
    notifier.add_observer(Arc::new(RecordingObserver {
        name: "Alice",
        log: Arc::clone(&log),
    }));
    notifier.notify("New item available: Design Patterns");
    assert_eq!(
        *log.lock().unwrap(),
        ["Notification for Alice: New item available: Design Patterns"]
    );
}

#[test]
fn test_factory_rejects_unknown_kind() {
    let err = ItemFactory::create("papyrus", "Clean Code", "Robert C. Martin")
        .err()
        .unwrap();
    assert_eq!(err.to_string(), "Unknown item kind: papyrus");
}

#[test]
fn test_granted_proxy_builds_the_item_once_and_renders_consistently() {
    let proxy = DigitalItemProxy::new("Refactoring", "Martin Fowler", true);
    assert!(!proxy.is_materialized());

    let first = proxy.render();
    let second = proxy.render();
    assert_eq!(first, "[E-Book] Refactoring - Martin Fowler");
    assert_eq!(first, second);
    assert!(proxy.is_materialized());
}
