use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::choices::TransactionType;
use crate::contacts::UserSummary;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryCategory {
    pub id: i64,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryCategoryPayload {
    pub name: String,
    pub description: String,
}

/// A stocked item.
///
/// `quantity_on_hand` is maintained by the server from transactions and is
/// read-only for clients.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Category ID
    pub category: Option<i64>,
    pub category_name: Option<String>,
    /// e.g. "pieces", "kg", "boxes"
    pub unit_of_measure: String,
    pub quantity_on_hand: Decimal,
    pub reorder_level: Decimal,
    pub last_stocktake_date: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Body for creating or updating an item. Has no `quantity_on_hand`:
/// stock only moves through transactions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryItemPayload {
    pub name: String,
    pub description: String,
    pub category: Option<i64>,
    pub unit_of_measure: String,
    /// Two fraction digits, e.g. `"10.00"`
    pub reorder_level: Option<String>,
}

/// A recorded stock movement
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryTransaction {
    pub id: i64,
    pub item: i64,
    pub item_name: Option<String>,
    pub item_unit_of_measure: Option<String>,
    pub transaction_type: TransactionType,
    pub transaction_type_display: Option<String>,
    /// Positive for IN/OUT, signed delta for ADJ
    pub quantity: Decimal,
    pub transaction_date: Option<String>, // RFC 3339 timestamp
    pub user: Option<UserSummary>,
    pub notes: String,
}

/// Body for recording a stock movement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryTransactionPayload {
    pub item: i64,
    pub transaction_type: TransactionType,
    /// Quantity exactly as entered (scale preserved), e.g. `"-2.5"`
    pub quantity: Option<String>,
    pub notes: String,
}
