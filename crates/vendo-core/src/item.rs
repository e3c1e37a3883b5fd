//! # Item Module
//!
//! Sellable items and their categories.
//!
//! The upstream design modeled each category as a subclass built through
//! runtime type reflection. Here a category is plain data: one [`Item`] struct
//! carrying an [`ItemCategory`] tag, and the only behavioral difference
//! between categories (the consumption message) is a pure function of the tag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::VendError;

// =============================================================================
// Item Category
// =============================================================================

/// The category of a sellable item.
///
/// Determines the message shown after the customer consumes the item;
/// nothing else in the machine depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Candy,
    Gum,
    Drink,
    Chip,
}

impl ItemCategory {
    /// The message the customer sees after consuming an item of this category.
    pub const fn eat_message(self) -> &'static str {
        match self {
            ItemCategory::Candy => "Munch Munch, Yum!",
            ItemCategory::Gum => "Chew Chew, Yum!",
            ItemCategory::Drink => "Glug Glug, Yum!",
            ItemCategory::Chip => "Crunch Crunch, Yum!",
        }
    }
}

/// Case-insensitive lookup used by restock parsing: `"gum"`, `"Gum"` and
/// `"GUM"` all resolve to [`ItemCategory::Gum`].
impl FromStr for ItemCategory {
    type Err = VendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "candy" => Ok(ItemCategory::Candy),
            "gum" => Ok(ItemCategory::Gum),
            "drink" => Ok(ItemCategory::Drink),
            "chip" => Ok(ItemCategory::Chip),
            _ => Err(VendError::InvalidCategory {
                category: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ItemCategory::Candy => "Candy",
            ItemCategory::Gum => "Gum",
            ItemCategory::Drink => "Drink",
            ItemCategory::Chip => "Chip",
        };
        write!(f, "{name}")
    }
}

// =============================================================================
// Item
// =============================================================================

/// One unit of a sellable product. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    category: ItemCategory,
}

impl Item {
    /// Creates an item with the given display name and category.
    pub fn new(name: impl Into<String>, category: ItemCategory) -> Self {
        Item {
            name: name.into(),
            category,
        }
    }

    /// The display name of the item (i.e. "M&Ms", "Sprite").
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The category of the item.
    #[inline]
    pub const fn category(&self) -> ItemCategory {
        self.category
    }

    /// The message the customer sees after consuming this item.
    ///
    /// ## Example
    /// ```rust
    /// use vendo_core::item::{Item, ItemCategory};
    ///
    /// let doritos = Item::new("Doritos", ItemCategory::Chip);
    /// assert_eq!(doritos.eat_message(), "Crunch Crunch, Yum!");
    /// ```
    #[inline]
    pub const fn eat_message(&self) -> &'static str {
        self.category.eat_message()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eat_messages() {
        assert_eq!(
            Item::new("Snickers", ItemCategory::Candy).eat_message(),
            "Munch Munch, Yum!"
        );
        assert_eq!(
            Item::new("Spearmint", ItemCategory::Gum).eat_message(),
            "Chew Chew, Yum!"
        );
        assert_eq!(
            Item::new("Sprite", ItemCategory::Drink).eat_message(),
            "Glug Glug, Yum!"
        );
        assert_eq!(
            Item::new("Doritos", ItemCategory::Chip).eat_message(),
            "Crunch Crunch, Yum!"
        );
    }

    #[test]
    fn test_category_from_str_case_insensitive() {
        assert_eq!("Candy".parse::<ItemCategory>().unwrap(), ItemCategory::Candy);
        assert_eq!("gum".parse::<ItemCategory>().unwrap(), ItemCategory::Gum);
        assert_eq!("DRINK".parse::<ItemCategory>().unwrap(), ItemCategory::Drink);
        assert_eq!("cHiP".parse::<ItemCategory>().unwrap(), ItemCategory::Chip);
    }

    #[test]
    fn test_category_from_str_unknown() {
        for bad in ["Khandie", "Chyps", "Dronk", "Crisps", "Gummmm", ""] {
            let err = bad.parse::<ItemCategory>().unwrap_err();
            assert!(matches!(err, VendError::InvalidCategory { .. }), "{bad}");
        }
    }
}
