//! Far Away packing-list manager.
//!
//! The core of a client-side travel packing list: a user adds, categorizes,
//! toggles, filters, sorts, and removes items while aggregate progress is
//! derived for display. Built on the Far Away state container:
//!
//! - [`types::ListState`] is the single authoritative snapshot
//! - [`reducer::ListAction`] enumerates every user intent
//! - [`reducer::ListReducer`] validates intents and applies mutations
//! - [`view`] derives the filtered, sorted, grouped projection and statistics
//!
//! Rendering is an external collaborator: it reads projections and sends
//! intents, nothing more. There is no persistence and no undo.
//!
//! # Quick Start
//!
//! ```no_run
//! use faraway::{ListAction, ListEnvironment, ListReducer, ListState, view};
//! use faraway_core::environment::{MonotonicIdGenerator, SystemClock};
//! use faraway_runtime::Store;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let env = ListEnvironment::new(Arc::new(SystemClock), Arc::new(MonotonicIdGenerator::new()));
//! let store = Store::new(ListState::new(), ListReducer::new(), env);
//!
//! store
//!     .send(ListAction::ItemAdded {
//!         description: "Passports".to_string(),
//!         quantity: 2,
//!         category: faraway::Category::Documents,
//!     })
//!     .await?;
//!
//! let stats = store.state(|s| view::Stats::of(s)).await;
//! println!("{} of {} packed", stats.packed, stats.total);
//! # Ok(())
//! # }
//! ```

pub mod reducer;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use reducer::{ListAction, ListEnvironment, ListReducer};
pub use types::{Category, Draft, Filter, Item, ItemId, ListState, SortKey};
