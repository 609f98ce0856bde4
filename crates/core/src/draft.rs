//! Order drafts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line of a finalized order, detached from the catalog.
///
/// Drafts carry the name and unit price by value so the order survives later
/// catalog edits unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftLine {
    /// Item name at the time of ordering.
    pub name: String,

    /// Unit price at the time of ordering.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// How many were ordered.
    pub quantity: u32,
}

/// A finalized cart, ready for submission to the order ledger.
///
/// The ledger assigns the order id at submission time, so a draft carries
/// none. Serializes to the submission wire shape: prices ride as JSON
/// numbers, the total as a two-decimal string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    /// The table the order is for.
    #[serde(rename = "tableId")]
    pub table: String,

    /// Ordered lines, in selection order.
    pub lines: Vec<DraftLine>,

    /// Total across all lines, rounded to two decimal places.
    pub total: Decimal,
}
