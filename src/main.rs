use std::sync::Arc;

use librarium::utils::logger;
use librarium::{
    AccessibilityDecorator, AudioDecorator, Catalog, DigitalItemProxy, Item, ItemFactory,
    Notifier, Reader, SummaryDecorator,
};

fn main() -> anyhow::Result<()> {
    logger::init_logger();
    tracing::info!("Starting librarium demo");

    let design_patterns = ItemFactory::create("digital", "Design Patterns", "GoF")?;
    let clean_code = ItemFactory::create("fisico", "Clean Code", "Robert C. Martin")?;
    let new_arrival = design_patterns.title().to_string();

    // Decorators take exclusive ownership, so wrapped editions are built
    // separately from the bare copies registered above.
    let summary_edition = SummaryDecorator::new(ItemFactory::create(
        "fisico",
        "Clean Code",
        "Robert C. Martin",
    )?);
    let audio_edition =
        AudioDecorator::new(ItemFactory::create("digital", "Design Patterns", "GoF")?);
    let accessible_edition =
        AccessibilityDecorator::new(ItemFactory::create("digital", "Design Patterns", "GoF")?);
    let restricted = DigitalItemProxy::new("Refactoring", "Martin Fowler", false);

    let mut catalog = Catalog::instance().lock().expect("catalog lock poisoned");
    catalog.add_item(design_patterns);
    catalog.add_item(clean_code);
    catalog.add_item(Box::new(summary_edition));
    catalog.add_item(Box::new(restricted));
    catalog.add_item(Box::new(audio_edition));
    catalog.add_item(Box::new(accessible_edition));

    let alice = Arc::new(Reader::new("Alice"));
    catalog.register_user(Arc::clone(&alice));

    let mut notifier = Notifier::new();
    notifier.add_observer(alice);
    notifier.notify(&format!("New item available: {}", new_arrival));

    // The wrapped editions and the restricted proxy sit at positions 2..6.
    for item in &catalog.items()[2..] {
        println!("{}", item.render());
    }

    match catalog.find_by_title("clean code") {
        Some(item) => println!("Found: {} - {}", item.title(), item.author()),
        None => println!("Not found: clean code"),
    }
    if catalog.find_by_title("The Pragmatic Programmer").is_none() {
        println!("Not found: The Pragmatic Programmer");
    }

    tracing::info!("Demo finished");
    Ok(())
}
