//! Reducer logic for the packing list.
//!
//! Every user intent is one action; the reducer validates it, applies the
//! mutation to the snapshot, and returns no effects. The list is a pure
//! state machine. Invalid input (empty description, unknown id) reduces to
//! a silent no-op, never an error: for a local, single-user list, absence
//! of a target is not exceptional.

use crate::types::{
    Category, Draft, Filter, Item, ItemId, ListState, MAX_DRAFT_QUANTITY, MIN_DRAFT_QUANTITY,
    SortKey,
};
use faraway_core::{
    SmallVec,
    effect::Effect,
    environment::{Clock, IdGenerator},
    reducer::Reducer,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Environment dependencies for the list reducer
#[derive(Clone)]
pub struct ListEnvironment {
    /// Clock for creation timestamps
    pub clock: Arc<dyn Clock>,
    /// Source of fresh item ids
    pub ids: Arc<dyn IdGenerator>,
}

impl ListEnvironment {
    /// Creates a new `ListEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { clock, ids }
    }
}

/// User intents against the packing list
///
/// Bulk destruction (`ListCleared`) is gated at the boundary: the caller
/// obtains confirmation from its own UI and only then sends the action.
/// The core never prompts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListAction {
    /// Add-form description text changed
    DraftDescriptionChanged(String),
    /// Add-form quantity changed; clamped to the form's 1..=20 range
    DraftQuantityChanged(u32),
    /// Add-form category changed
    DraftCategoryChanged(Category),
    /// Add-form submitted
    ///
    /// Adds an item from the draft and resets the draft; rejected (and the
    /// draft left untouched) when the trimmed description is empty.
    DraftSubmitted,
    /// Programmatic add, bypassing the form
    ///
    /// Same trim/empty-rejection rule as the form, but the quantity bound is
    /// not enforced here: that bound belongs to the input surface.
    ItemAdded {
        /// Item label; trimmed before storage
        description: String,
        /// How many to pack
        quantity: u32,
        /// Item category
        category: Category,
    },
    /// Checkbox toggled on an item
    ItemToggled {
        /// Target item
        id: ItemId,
    },
    /// Delete button pressed on an item
    ItemRemoved {
        /// Target item
        id: ItemId,
    },
    /// Entire list cleared; the caller has already confirmed
    ListCleared,
    /// Every packed item removed
    PackedCleared,
    /// Filter mode selected
    FilterChanged(Filter),
    /// Sort key selected
    SortChanged(SortKey),
}

/// Reducer for the packing list
#[derive(Clone, Copy, Debug, Default)]
pub struct ListReducer;

impl ListReducer {
    /// Creates a new `ListReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Trims a raw description, rejecting empty results
    fn valid_description(raw: &str) -> Option<&str> {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Prepends a freshly created item; no-op when the description is empty
    ///
    /// Returns whether an item was actually added.
    fn add_item(
        state: &mut ListState,
        env: &ListEnvironment,
        description: &str,
        quantity: u32,
        category: Category,
    ) -> bool {
        let Some(description) = Self::valid_description(description) else {
            return false;
        };

        let item = Item::new(
            ItemId::new(env.ids.next_id()),
            description.to_string(),
            quantity,
            category,
            env.clock.now(),
        );
        state.items.insert(0, item);
        true
    }
}

impl Reducer for ListReducer {
    type State = ListState;
    type Action = ListAction;
    type Environment = ListEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Add form ==========
            ListAction::DraftDescriptionChanged(description) => {
                state.draft.description = description;
            },
            ListAction::DraftQuantityChanged(quantity) => {
                state.draft.quantity = quantity.clamp(MIN_DRAFT_QUANTITY, MAX_DRAFT_QUANTITY);
            },
            ListAction::DraftCategoryChanged(category) => {
                state.draft.category = category;
            },
            ListAction::DraftSubmitted => {
                let Draft {
                    description,
                    quantity,
                    category,
                } = state.draft.clone();
                if Self::add_item(state, env, &description, quantity, category) {
                    state.draft.reset();
                }
            },

            // ========== Collection mutations ==========
            ListAction::ItemAdded {
                description,
                quantity,
                category,
            } => {
                Self::add_item(state, env, &description, quantity, category);
            },
            ListAction::ItemToggled { id } => {
                if let Some(item) = state.items.iter_mut().find(|i| i.id == id) {
                    item.toggle();
                }
            },
            ListAction::ItemRemoved { id } => {
                state.items.retain(|i| i.id != id);
            },
            ListAction::ListCleared => {
                state.items.clear();
            },
            ListAction::PackedCleared => {
                state.items.retain(|i| !i.packed);
            },

            // ========== View configuration ==========
            ListAction::FilterChanged(filter) => {
                state.filter = filter;
            },
            ListAction::SortChanged(sort) => {
                state.sort = sort;
            },
        }

        SmallVec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faraway_testing::{ReducerTest, SequentialIdGenerator, assertions, test_clock};

    fn test_env() -> ListEnvironment {
        ListEnvironment::new(Arc::new(test_clock()), Arc::new(SequentialIdGenerator::new()))
    }

    fn add(description: &str, quantity: u32, category: Category) -> ListAction {
        ListAction::ItemAdded {
            description: description.to_string(),
            quantity,
            category,
        }
    }

    /// Applies a sequence of actions to a fresh state under `env`
    fn state_after_in(
        env: &ListEnvironment,
        actions: impl IntoIterator<Item = ListAction>,
    ) -> ListState {
        let reducer = ListReducer::new();
        let mut state = ListState::new();
        for action in actions {
            let _ = reducer.reduce(&mut state, action, env);
        }
        state
    }

    /// Applies a sequence of actions to a fresh state and returns it
    fn state_after(actions: impl IntoIterator<Item = ListAction>) -> ListState {
        state_after_in(&test_env(), actions)
    }

    #[test]
    fn add_prepends_unpacked_item() {
        // One environment throughout, so the tested add gets a fresh id
        let env = test_env();
        ReducerTest::new(ListReducer::new())
            .with_env(env.clone())
            .given_state(state_after_in(&env, [add("Socks", 12, Category::Clothing)]))
            .when_action(add("Passports", 2, Category::Documents))
            .then_state(|state| {
                assert_eq!(state.total_count(), 2);
                // Newest first
                assert_eq!(state.items[0].description, "Passports");
                assert!(!state.items[0].packed);
                assert_eq!(state.items[1].description, "Socks");
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn add_trims_description() {
        let state = state_after([add("  Phone Charger  ", 1, Category::Electronics)]);
        assert_eq!(state.items[0].description, "Phone Charger");
    }

    #[test]
    fn add_with_blank_description_is_a_no_op() {
        for raw in ["", "   ", "\t\n"] {
            ReducerTest::new(ListReducer::new())
                .with_env(test_env())
                .given_state(ListState::new())
                .when_action(add(raw, 1, Category::General))
                .then_state(|state| assert_eq!(state.total_count(), 0))
                .then_effects(assertions::assert_no_effects)
                .run();
        }
    }

    #[test]
    fn add_assigns_unique_increasing_ids() {
        let state = state_after([
            add("Socks", 1, Category::Clothing),
            add("Hat", 1, Category::Clothing),
            add("Scarf", 1, Category::Clothing),
        ]);
        // Newest first, so ids descend
        assert_eq!(state.items[0].id, ItemId::new(3));
        assert_eq!(state.items[1].id, ItemId::new(2));
        assert_eq!(state.items[2].id, ItemId::new(1));
    }

    #[test]
    fn ids_are_not_reused_after_deletion() {
        let state = state_after([
            add("Socks", 1, Category::Clothing),
            ListAction::ItemRemoved { id: ItemId::new(1) },
            add("Hat", 1, Category::Clothing),
        ]);
        assert_eq!(state.items[0].id, ItemId::new(2));
    }

    #[test]
    fn store_does_not_enforce_form_quantity_bound() {
        let state = state_after([add("Socks", 99, Category::Clothing)]);
        assert_eq!(state.items[0].quantity, 99);
    }

    #[test]
    fn draft_submit_adds_item_and_resets_draft() {
        ReducerTest::new(ListReducer::new())
            .with_env(test_env())
            .given_state(state_after([
                ListAction::DraftDescriptionChanged("  Sunscreen SPF 50 ".to_string()),
                ListAction::DraftQuantityChanged(2),
                ListAction::DraftCategoryChanged(Category::Toiletries),
            ]))
            .when_action(ListAction::DraftSubmitted)
            .then_state(|state| {
                assert_eq!(state.total_count(), 1);
                assert_eq!(state.items[0].description, "Sunscreen SPF 50");
                assert_eq!(state.items[0].quantity, 2);
                assert_eq!(state.items[0].category, Category::Toiletries);
                assert_eq!(state.draft, Draft::default());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn rejected_submit_leaves_draft_untouched() {
        ReducerTest::new(ListReducer::new())
            .with_env(test_env())
            .given_state(state_after([
                ListAction::DraftDescriptionChanged("   ".to_string()),
                ListAction::DraftQuantityChanged(5),
            ]))
            .when_action(ListAction::DraftSubmitted)
            .then_state(|state| {
                assert_eq!(state.total_count(), 0);
                assert_eq!(state.draft.description, "   ");
                assert_eq!(state.draft.quantity, 5);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn draft_quantity_is_clamped_to_form_range() {
        let state = state_after([ListAction::DraftQuantityChanged(500)]);
        assert_eq!(state.draft.quantity, MAX_DRAFT_QUANTITY);

        let state = state_after([ListAction::DraftQuantityChanged(0)]);
        assert_eq!(state.draft.quantity, MIN_DRAFT_QUANTITY);
    }

    #[test]
    fn toggle_twice_is_an_involution() {
        let before = state_after([add("Socks", 1, Category::Clothing)]);
        let id = before.items[0].id;

        let env = test_env();
        let reducer = ListReducer::new();
        let mut state = before.clone();
        let _ = reducer.reduce(&mut state, ListAction::ItemToggled { id }, &env);
        assert!(state.items[0].packed);
        let _ = reducer.reduce(&mut state, ListAction::ItemToggled { id }, &env);
        assert_eq!(state, before);
    }

    #[test]
    fn toggle_changes_no_other_field_or_item() {
        let before = state_after([
            add("Socks", 12, Category::Clothing),
            add("Passports", 2, Category::Documents),
        ]);
        let id = before.items[0].id;

        let env = test_env();
        let reducer = ListReducer::new();
        let mut state = before.clone();
        let _ = reducer.reduce(&mut state, ListAction::ItemToggled { id }, &env);

        assert!(state.items[0].packed);
        assert_eq!(state.items[0].description, before.items[0].description);
        assert_eq!(state.items[0].quantity, before.items[0].quantity);
        assert_eq!(state.items[0].category, before.items[0].category);
        assert_eq!(state.items[1], before.items[1]);
    }

    #[test]
    fn toggle_of_unknown_id_is_a_no_op() {
        let before = state_after([add("Socks", 1, Category::Clothing)]);
        let mut state = before.clone();
        let _ = ListReducer::new().reduce(
            &mut state,
            ListAction::ItemToggled { id: ItemId::new(999) },
            &test_env(),
        );
        assert_eq!(state, before);
    }

    #[test]
    fn remove_is_idempotent() {
        let env = test_env();
        let reducer = ListReducer::new();
        let mut state = state_after([
            add("Socks", 1, Category::Clothing),
            add("Hat", 1, Category::Clothing),
        ]);
        let id = state.items[0].id;

        let _ = reducer.reduce(&mut state, ListAction::ItemRemoved { id }, &env);
        assert_eq!(state.total_count(), 1);
        let after_first = state.clone();

        let _ = reducer.reduce(&mut state, ListAction::ItemRemoved { id }, &env);
        assert_eq!(state, after_first);
    }

    #[test]
    fn add_toggle_remove_round_trip_preserves_the_rest() {
        // One environment throughout, so the tested add gets a fresh id
        let env = test_env();
        let before = state_after_in(
            &env,
            [
                add("Socks", 12, Category::Clothing),
                add("Passports", 2, Category::Documents),
            ],
        );

        let reducer = ListReducer::new();
        let mut state = before.clone();
        let _ = reducer.reduce(&mut state, add("Towel", 1, Category::General), &env);
        let id = state.items[0].id;
        let _ = reducer.reduce(&mut state, ListAction::ItemToggled { id }, &env);
        let _ = reducer.reduce(&mut state, ListAction::ItemRemoved { id }, &env);

        assert_eq!(state, before);
    }

    #[test]
    fn clear_all_empties_the_list() {
        ReducerTest::new(ListReducer::new())
            .with_env(test_env())
            .given_state(state_after([
                add("Socks", 1, Category::Clothing),
                add("Hat", 1, Category::Clothing),
            ]))
            .when_action(ListAction::ListCleared)
            .then_state(|state| assert_eq!(state.total_count(), 0))
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn clear_packed_keeps_unpacked_in_relative_order() {
        let state = state_after([
            add("Socks", 1, Category::Clothing),
            add("Hat", 1, Category::Clothing),
            add("Scarf", 1, Category::Clothing),
            ListAction::ItemToggled { id: ItemId::new(2) },
            ListAction::PackedCleared,
        ]);

        assert_eq!(state.total_count(), 2);
        assert_eq!(state.items[0].description, "Scarf");
        assert_eq!(state.items[1].description, "Socks");
        assert_eq!(state.packed_count(), 0);
    }

    #[test]
    fn filter_and_sort_selection_are_recorded() {
        let state = state_after([
            ListAction::FilterChanged(Filter::Unpacked),
            ListAction::SortChanged(SortKey::Quantity),
        ]);
        assert_eq!(state.filter, Filter::Unpacked);
        assert_eq!(state.sort, SortKey::Quantity);
    }
}
