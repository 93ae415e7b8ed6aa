//! End-to-end flows through the Store runtime.
//!
//! Drives the packing list the way a rendering layer would: one intent per
//! user gesture, projections recomputed from fresh snapshots.

use faraway::{Category, Filter, ListAction, ListEnvironment, ListReducer, ListState, SortKey, view};
use faraway_runtime::Store;
use faraway_testing::{SequentialIdGenerator, test_clock};
use std::sync::Arc;

type ListStore = Store<ListState, ListAction, ListEnvironment, ListReducer>;

fn test_store() -> ListStore {
    let env = ListEnvironment::new(
        Arc::new(test_clock()),
        Arc::new(SequentialIdGenerator::new()),
    );
    Store::new(ListState::new(), ListReducer::new(), env)
}

async fn add(store: &ListStore, description: &str, quantity: u32, category: Category) {
    store
        .send(ListAction::ItemAdded {
            description: description.to_string(),
            quantity,
            category,
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn add_toggle_and_stats_flow() {
    let store = test_store();

    add(&store, "Passports", 2, Category::Documents).await;
    add(&store, "Socks", 12, Category::Clothing).await;
    add(&store, "Phone Charger", 1, Category::Electronics).await;

    let stats = store.state(|s| view::Stats::of(s)).await;
    assert_eq!(stats.total, 3);
    assert_eq!(stats.packed, 0);
    assert_eq!(stats.percent, 0);

    // Pack the socks
    let socks = store
        .state(|s| s.items.iter().find(|i| i.description == "Socks").map(|i| i.id))
        .await
        .unwrap();
    store.send(ListAction::ItemToggled { id: socks }).await.unwrap();

    let stats = store.state(|s| view::Stats::of(s)).await;
    assert_eq!(stats.packed, 1);
    assert_eq!(stats.percent, 33);
    assert_eq!(stats.remaining, 2);
}

#[tokio::test]
async fn form_draft_flow_resets_after_successful_add() {
    let store = test_store();

    for action in [
        ListAction::DraftDescriptionChanged(" Travel Adapter ".to_string()),
        ListAction::DraftQuantityChanged(1),
        ListAction::DraftCategoryChanged(Category::Electronics),
        ListAction::DraftSubmitted,
    ] {
        store.send(action).await.unwrap();
    }

    let (count, draft) = store.state(|s| (s.total_count(), s.draft.clone())).await;
    assert_eq!(count, 1);
    assert_eq!(draft, faraway::Draft::default());

    let description = store.state(|s| s.items[0].description.clone()).await;
    assert_eq!(description, "Travel Adapter");
}

#[tokio::test]
async fn filtered_sorted_grouped_projection() {
    let store = test_store();

    add(&store, "Phone Charger", 1, Category::Electronics).await;
    add(&store, "Passports", 2, Category::Documents).await;
    add(&store, "Travel Adapter", 1, Category::Electronics).await;
    add(&store, "Socks", 12, Category::Clothing).await;

    let socks = store
        .state(|s| s.items.iter().find(|i| i.description == "Socks").map(|i| i.id))
        .await
        .unwrap();
    store.send(ListAction::ItemToggled { id: socks }).await.unwrap();

    store
        .send(ListAction::FilterChanged(Filter::Unpacked))
        .await
        .unwrap();
    store.send(ListAction::SortChanged(SortKey::Newest)).await.unwrap();

    let snapshot = store.state(Clone::clone).await;
    let visible = view::visible_items(&snapshot);
    let names: Vec<&str> = visible.iter().map(|i| i.description.as_str()).collect();
    // Socks is packed and filtered out; the rest newest first
    assert_eq!(names, ["Travel Adapter", "Passports", "Phone Charger"]);

    let groups = view::group_by_category(&visible);
    let order: Vec<Category> = groups.iter().map(|g| g.category).collect();
    assert_eq!(order, [Category::Electronics, Category::Documents]);
    assert_eq!(groups[0].len(), 2);
}

#[tokio::test]
async fn clear_packed_then_confirmed_clear_all() {
    let store = test_store();

    add(&store, "Socks", 12, Category::Clothing).await;
    add(&store, "Passports", 2, Category::Documents).await;

    let socks = store
        .state(|s| s.items.iter().find(|i| i.description == "Socks").map(|i| i.id))
        .await
        .unwrap();
    store.send(ListAction::ItemToggled { id: socks }).await.unwrap();

    store.send(ListAction::PackedCleared).await.unwrap();
    let snapshot = store.state(Clone::clone).await;
    assert!(view::filter_items(&snapshot.items, Filter::Packed).is_empty());
    assert_eq!(snapshot.total_count(), 1);

    // The boundary declined: no action is sent, nothing changes
    let confirmed = false;
    if confirmed {
        store.send(ListAction::ListCleared).await.unwrap();
    }
    assert_eq!(store.state(ListState::total_count).await, 1);

    // The boundary confirmed
    store.send(ListAction::ListCleared).await.unwrap();
    let stats = store.state(|s| view::Stats::of(s)).await;
    assert_eq!(stats.total, 0);
    assert_eq!(stats.progress, view::Progress::Empty);
}

#[tokio::test]
async fn observers_are_notified_after_each_intent() {
    let store = test_store();
    let mut rx = store.subscribe_actions();

    add(&store, "Socks", 1, Category::Clothing).await;

    let observed = rx.recv().await.unwrap();
    assert!(matches!(observed, ListAction::ItemAdded { .. }));

    // The snapshot the observer reads is already post-mutation
    assert_eq!(store.state(ListState::total_count).await, 1);
}
