//! Domain types for the packing list.
//!
//! A packing list is an ordered collection of items (newest first), plus the
//! view configuration (filter, sort key) and the transient add-form draft.
//! The whole thing is one state value owned by the store; everything shown
//! to a user is derived from it in [`crate::view`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a packing-list item
///
/// Ids are strictly increasing in creation order within a session and are
/// never reused, even after deletion. Descending id order is therefore
/// "newest first".
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(u64);

impl ItemId {
    /// Creates an `ItemId` from a raw value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Item category
///
/// A fixed enumerated set; anything unrecognized resolves to `General`,
/// which doubles as the display fallback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Catch-all category and the fallback for unrecognized values
    #[default]
    General,
    /// Passports, tickets, insurance papers
    Documents,
    /// Clothing
    Clothing,
    /// Chargers, adapters, devices
    Electronics,
    /// Toiletries
    Toiletries,
    /// Food
    Food,
}

impl Category {
    /// All categories, in display-table order
    pub const ALL: [Self; 6] = [
        Self::General,
        Self::Documents,
        Self::Clothing,
        Self::Electronics,
        Self::Toiletries,
        Self::Food,
    ];

    /// The stored value, used for lexicographic category sorting
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Documents => "documents",
            Self::Clothing => "clothing",
            Self::Electronics => "electronics",
            Self::Toiletries => "toiletries",
            Self::Food => "food",
        }
    }

    /// Display label for this category
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::General => "📦 General",
            Self::Documents => "📄 Documents",
            Self::Clothing => "👕 Clothing",
            Self::Electronics => "🔌 Electronics",
            Self::Toiletries => "🧴 Toiletries",
            Self::Food => "🍎 Food",
        }
    }

    /// Parses a stored value, falling back to `General` when unrecognized
    #[must_use]
    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == value)
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single packing-list item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// Trimmed, non-empty label
    pub description: String,
    /// How many to pack; at least 1
    pub quantity: u32,
    /// Whether the item has been packed
    pub packed: bool,
    /// Item category
    pub category: Category,
    /// When the item was created
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Creates a new, unpacked item
    #[must_use]
    pub const fn new(
        id: ItemId,
        description: String,
        quantity: u32,
        category: Category,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            description,
            quantity,
            packed: false,
            category,
            created_at,
        }
    }

    /// Inverts the packed flag
    pub const fn toggle(&mut self) {
        self.packed = !self.packed;
    }
}

/// Which items a projection shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Every item
    #[default]
    All,
    /// Only packed items
    Packed,
    /// Only unpacked items
    Unpacked,
}

impl Filter {
    /// Whether an item survives this filter
    #[must_use]
    pub const fn matches(self, item: &Item) -> bool {
        match self {
            Self::All => true,
            Self::Packed => item.packed,
            Self::Unpacked => !item.packed,
        }
    }
}

/// Total order applied to the filtered projection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Most recently created first (descending id)
    #[default]
    Newest,
    /// Case-insensitive A-Z by description
    Name,
    /// Quantity, high to low
    Quantity,
    /// Ascending lexicographic by category value
    Category,
    /// Unpacked items before packed items
    Packed,
}

/// Smallest quantity the add form offers
pub const MIN_DRAFT_QUANTITY: u32 = 1;

/// Largest quantity the add form offers
///
/// This bound belongs to the input surface only; the store itself accepts
/// any positive quantity.
pub const MAX_DRAFT_QUANTITY: u32 = 20;

/// Transient add-form state
///
/// Reset to defaults after a successful submit; left alone when a submit is
/// rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    /// Raw description text, not yet trimmed
    pub description: String,
    /// Chosen quantity, within the form's 1..=20 range
    pub quantity: u32,
    /// Chosen category
    pub category: Category,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            description: String::new(),
            quantity: MIN_DRAFT_QUANTITY,
            category: Category::General,
        }
    }
}

impl Draft {
    /// Restores the form defaults
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// State of the packing list
///
/// The single authoritative snapshot. Items are kept newest first; display
/// order beyond that is a projection concern.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListState {
    /// All items, newest first
    pub items: Vec<Item>,
    /// Active filter mode
    pub filter: Filter,
    /// Active sort key
    pub sort: SortKey,
    /// Add-form draft
    pub draft: Draft,
}

impl ListState {
    /// Creates a new empty list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of items
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of packed items
    #[must_use]
    pub fn packed_count(&self) -> usize {
        self.items.iter().filter(|i| i.packed).count()
    }

    /// Returns an item by id
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Checks if an item exists
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }
}
