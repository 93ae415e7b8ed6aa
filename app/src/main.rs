//! Scripted CLI demo for the Far Away packing list.
//!
//! Walks the full intent surface: seeding a list, adding through the form
//! draft, toggling, filtering, sorting, grouped display, clearing packed
//! items, and the confirmed clear-all.

use faraway::{Category, Filter, ListAction, ListEnvironment, ListReducer, ListState, SortKey, view};
use faraway_core::environment::{MonotonicIdGenerator, SystemClock};
use faraway_runtime::Store;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type ListStore = Store<ListState, ListAction, ListEnvironment, ListReducer>;

/// The items the original list starts with
const SEED: [(&str, u32, Category, bool); 5] = [
    ("Passports", 2, Category::Documents, false),
    ("Socks", 12, Category::Clothing, true),
    ("Phone Charger", 1, Category::Electronics, false),
    ("Sunscreen SPF 50", 2, Category::Toiletries, false),
    ("Travel Adapter", 1, Category::Electronics, true),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "faraway=debug,faraway_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Far Away: Your Smart Travel Companion ===\n");

    let env = ListEnvironment::new(Arc::new(SystemClock), Arc::new(MonotonicIdGenerator::new()));
    let store = Store::new(ListState::new(), ListReducer::new(), env);

    // Seed the list the way the UI would: one intent per change
    for (description, quantity, category, packed) in SEED {
        store
            .send(ListAction::ItemAdded {
                description: description.to_string(),
                quantity,
                category,
            })
            .await?;
        if packed {
            let id = store
                .state(|s| s.items.first().map(|i| i.id))
                .await
                .ok_or("seed item missing")?;
            store.send(ListAction::ItemToggled { id }).await?;
        }
    }
    print_list(&store, "Seeded list").await;

    // Add a new item through the form draft
    for action in [
        ListAction::DraftDescriptionChanged("  Power Bank ".to_string()),
        ListAction::DraftQuantityChanged(1),
        ListAction::DraftCategoryChanged(Category::Electronics),
        ListAction::DraftSubmitted,
    ] {
        store.send(action).await?;
    }
    print_list(&store, "After adding Power Bank via the form").await;

    // Pack the passports
    if let Some(id) = store
        .state(|s| s.items.iter().find(|i| i.description == "Passports").map(|i| i.id))
        .await
    {
        store.send(ListAction::ItemToggled { id }).await?;
    }

    // Show only what still needs packing, largest quantities first
    store.send(ListAction::FilterChanged(Filter::Unpacked)).await?;
    store.send(ListAction::SortChanged(SortKey::Quantity)).await?;
    print_list(&store, "Still needed, by quantity").await;

    // Back to everything, A-Z
    store.send(ListAction::FilterChanged(Filter::All)).await?;
    store.send(ListAction::SortChanged(SortKey::Name)).await?;
    print_list(&store, "All items, A-Z").await;

    // Drop what is already packed
    store.send(ListAction::PackedCleared).await?;
    print_list(&store, "After removing packed items").await;

    // Clear everything. The confirmation dialog belongs to the boundary;
    // only a confirmed answer may send the action.
    let confirmed = confirm("Clear your entire packing list? This cannot be undone.");
    if confirmed {
        store.send(ListAction::ListCleared).await?;
    }
    print_list(&store, "After confirmed clear").await;

    println!("=== Demo Complete ===");
    Ok(())
}

/// Stand-in for the rendering layer's confirm dialog
fn confirm(prompt: &str) -> bool {
    println!("confirm: {prompt} -> yes\n");
    true
}

/// Renders the grouped projection and statistics for the current snapshot
async fn print_list(store: &ListStore, heading: &str) {
    let snapshot = store.state(Clone::clone).await;
    let visible = view::visible_items(&snapshot);
    let stats = view::Stats::of(&snapshot);

    println!("--- {heading} ---");
    println!("{} of {} items", visible.len(), stats.total);

    for group in view::group_by_category(&visible) {
        println!("{} ({})", group.category.label(), group.len());
        for item in group.items {
            let mark = if item.packed { "✓" } else { " " };
            println!("  [{mark}] {}× {}", item.quantity, item.description);
        }
    }

    println!(
        "{} packed, {} left — {}% — {}\n",
        stats.packed,
        stats.remaining,
        stats.percent,
        stats.progress.message()
    );
}
