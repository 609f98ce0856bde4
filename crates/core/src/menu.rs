//! Menu items and category tags.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use rusty_money::{Money, iso};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a category tag is not one of the known set.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category tag: {0}")]
pub struct UnknownCategory(pub String);

/// Closed set of menu categories.
///
/// Category tags cross every boundary (wire, persistence) as lowercase
/// strings and are validated back into this enum on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Grilled skewer plates, the house staple.
    Skewer,
    /// Desserts.
    Dessert,
    /// Side dishes and add-ons.
    Side,
    /// Drinks.
    Drink,
}

impl Category {
    /// Every known category, in menu display order.
    pub const ALL: [Category; 4] = [
        Category::Skewer,
        Category::Dessert,
        Category::Side,
        Category::Drink,
    ];

    /// The lowercase tag used on the wire and in storage.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Category::Skewer => "skewer",
            Category::Dessert => "dessert",
            Category::Side => "side",
            Category::Drink => "drink",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.tag() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A sellable menu entry.
///
/// Immutable once fetched into a cart context; the id is assigned by the
/// catalog store, not by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Catalog-assigned id.
    pub id: u32,

    /// Item name.
    pub name: String,

    /// Item description.
    pub description: String,

    /// Unit price. Positive by construction at every ingestion boundary.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Category tag.
    pub category: Category,
}

impl MenuItem {
    /// Render the unit price as Brazilian reais for receipts and menus.
    #[must_use]
    pub fn price_display(&self) -> String {
        Money::from_decimal(self.price, iso::BRL).to_string()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn category_tags_round_trip() -> TestResult {
        for category in Category::ALL {
            let parsed: Category = category.tag().parse()?;

            assert_eq!(parsed, category);
        }

        Ok(())
    }

    #[test]
    fn unknown_category_tag_is_rejected() {
        let result = "comida".parse::<Category>();

        assert_eq!(result, Err(UnknownCategory("comida".to_string())));
    }

    #[test]
    fn category_serializes_as_lowercase_tag() -> TestResult {
        let json = serde_json::to_string(&Category::Dessert)?;

        assert_eq!(json, "\"dessert\"");

        Ok(())
    }

    #[test]
    fn price_display_formats_as_reais() {
        let item = MenuItem {
            id: 1,
            name: "Espeto de picanha".to_string(),
            description: String::new(),
            price: dec!(29.90),
            category: Category::Skewer,
        };

        assert_eq!(item.price_display(), "R$29,90");
    }
}
