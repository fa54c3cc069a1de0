use super::{check_non_negative, check_reference, require_text, CollectionForm, RecordForm, ResourceForm};
use crate::error_map::ErrorMap;
use crate::input::{self, InputError};
use crate::resources::{InventoryItems, InventoryTransactions};
use rust_decimal::Decimal;
use shared::{InventoryItem, InventoryItemPayload, InventoryTransactionPayload, TransactionType};

pub mod fields {
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const CATEGORY: &str = "category";
    pub const UNIT_OF_MEASURE: &str = "unit_of_measure";
    pub const REORDER_LEVEL: &str = "reorder_level";
    pub const TRANSACTION_TYPE: &str = "transaction_type";
    pub const QUANTITY: &str = "quantity";
    pub const NOTES: &str = "notes";
}

/// Catalogue data of a stock item. The on-hand quantity is not editable here;
/// it only moves through stock adjustments.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItemForm {
    pub name: String,
    pub description: String,
    pub category: String,
    pub unit_of_measure: String,
    pub reorder_level: String,
}

impl Default for InventoryItemForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            category: String::new(),
            unit_of_measure: "pcs".to_string(),
            reorder_level: "0.00".to_string(),
        }
    }
}

impl ResourceForm for InventoryItemForm {
    type Payload = InventoryItemPayload;

    fn validate(&self) -> ErrorMap {
        let mut errors = ErrorMap::new();
        require_text(&mut errors, fields::NAME, &self.name, "Item name is required.");
        check_reference(&mut errors, fields::CATEGORY, &self.category, Some("Category is required."));
        require_text(&mut errors, fields::UNIT_OF_MEASURE, &self.unit_of_measure, "Unit of measure is required.");
        check_non_negative(&mut errors, fields::REORDER_LEVEL, &self.reorder_level, "Reorder level");
        errors
    }

    fn to_payload(&self) -> InventoryItemPayload {
        // The column is not nullable; a blank level means zero.
        let reorder_level = if self.reorder_level.trim().is_empty() {
            Some(input::currency_string(Decimal::ZERO))
        } else {
            input::normalize_currency(&self.reorder_level)
        };

        InventoryItemPayload {
            name: self.name.trim().to_string(),
            description: self.description.clone(),
            category: input::parse_id(&self.category),
            unit_of_measure: self.unit_of_measure.trim().to_string(),
            reorder_level,
        }
    }
}

impl CollectionForm for InventoryItemForm {
    type Resource = InventoryItems;
}

impl RecordForm for InventoryItemForm {
    fn from_record(record: &InventoryItem) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone(),
            category: record.category.map(|id| id.to_string()).unwrap_or_default(),
            unit_of_measure: record.unit_of_measure.clone(),
            reorder_level: input::currency_string(record.reorder_level),
        }
    }
}

/// A stock movement against one item.
///
/// `IN` and `OUT` take a positive quantity; `ADJ` takes a signed correction
/// that is added to the on-hand quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct StockAdjustmentForm {
    pub item_id: i64,
    pub transaction_type: TransactionType,
    pub quantity: String,
    pub notes: String,
    /// Stock on hand when the form was opened, if known
    pub on_hand: Option<Decimal>,
}

impl StockAdjustmentForm {
    pub fn new(item_id: i64, on_hand: Option<Decimal>) -> Self {
        Self {
            item_id,
            transaction_type: TransactionType::default(),
            quantity: String::new(),
            notes: String::new(),
            on_hand,
        }
    }

    pub fn for_item(item: &InventoryItem) -> Self {
        Self::new(item.id, Some(item.quantity_on_hand))
    }

    /// Stock level after this movement, when both sides are known
    pub fn projected_on_hand(&self) -> Option<Decimal> {
        let on_hand = self.on_hand?;
        let quantity = input::parse_decimal(&self.quantity).ok()?;
        Some(match self.transaction_type {
            TransactionType::In | TransactionType::Adjustment => on_hand + quantity,
            TransactionType::Out => on_hand - quantity,
        })
    }
}

impl ResourceForm for StockAdjustmentForm {
    type Payload = InventoryTransactionPayload;

    fn validate(&self) -> ErrorMap {
        let mut errors = ErrorMap::new();
        let quantity = match input::parse_decimal(&self.quantity) {
            Ok(quantity) if !quantity.is_zero() => quantity,
            Ok(_) | Err(InputError::Empty) => {
                errors.insert(fields::QUANTITY, "Quantity is required and cannot be zero.");
                return errors;
            }
            Err(_) => {
                errors.insert(fields::QUANTITY, "Quantity must be a number.");
                return errors;
            }
        };

        match self.transaction_type {
            TransactionType::In | TransactionType::Out if quantity.is_sign_negative() => {
                errors.insert(fields::QUANTITY, "Quantity must be positive for IN/OUT.");
            }
            TransactionType::Out => {
                if let Some(on_hand) = self.on_hand.filter(|on_hand| quantity > *on_hand) {
                    errors.insert(
                        fields::QUANTITY,
                        format!("Cannot stock out more than available ({}).", on_hand.normalize()),
                    );
                }
            }
            TransactionType::Adjustment => {
                if let Some(on_hand) = self.on_hand.filter(|on_hand| quantity.is_sign_negative() && -quantity > *on_hand) {
                    errors.insert(
                        fields::QUANTITY,
                        format!("Adjustment would leave negative stock (available: {}).", on_hand.normalize()),
                    );
                }
            }
            TransactionType::In => {}
        }
        errors
    }

    fn to_payload(&self) -> InventoryTransactionPayload {
        InventoryTransactionPayload {
            item: self.item_id,
            transaction_type: self.transaction_type,
            quantity: input::normalize_quantity(&self.quantity),
            notes: self.notes.clone(),
        }
    }
}

impl CollectionForm for StockAdjustmentForm {
    type Resource = InventoryTransactions;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn adjustment(transaction_type: TransactionType, quantity: &str, on_hand: i64) -> StockAdjustmentForm {
        StockAdjustmentForm {
            transaction_type,
            quantity: quantity.to_string(),
            ..StockAdjustmentForm::new(5, Some(Decimal::new(on_hand, 0)))
        }
    }

    #[test]
    fn test_item_requires_name_category_and_unit() {
        let form = InventoryItemForm {
            unit_of_measure: " ".to_string(),
            ..InventoryItemForm::default()
        };
        let errors = form.validate();

        assert_eq!(errors.get(fields::NAME), Some("Item name is required."));
        assert_eq!(errors.get(fields::CATEGORY), Some("Category is required."));
        assert_eq!(errors.get(fields::UNIT_OF_MEASURE), Some("Unit of measure is required."));
        assert!(!errors.contains(fields::REORDER_LEVEL));
    }

    #[test]
    fn test_reorder_level_checks() {
        let mut form = InventoryItemForm {
            name: "Rice".to_string(),
            category: "2".to_string(),
            unit_of_measure: "kg".to_string(),
            reorder_level: "-1".to_string(),
            ..InventoryItemForm::default()
        };
        assert_eq!(form.validate().get(fields::REORDER_LEVEL), Some("Reorder level cannot be negative."));

        form.reorder_level = "lots".to_string();
        assert_eq!(form.validate().get(fields::REORDER_LEVEL), Some("Reorder level must be a number."));
        assert_eq!(form.to_payload().reorder_level, None);

        form.reorder_level = String::new();
        assert!(form.validate().is_empty());
        assert_eq!(form.to_payload().reorder_level.as_deref(), Some("0.00"));

        form.reorder_level = "25".to_string();
        let value = serde_json::to_value(form.to_payload()).unwrap();
        assert_eq!(value["reorder_level"], json!("25.00"));
        assert_eq!(value["category"], json!(2));
        assert!(value.get("quantity_on_hand").is_none());
    }

    #[test]
    fn test_zero_or_blank_quantity_rejected() {
        for quantity in ["", "0", "0.00"] {
            let errors = adjustment(TransactionType::In, quantity, 10).validate();
            assert_eq!(errors.get(fields::QUANTITY), Some("Quantity is required and cannot be zero."));
        }
    }

    #[test]
    fn test_in_and_out_need_positive_quantity() {
        let errors = adjustment(TransactionType::In, "-3", 10).validate();
        assert_eq!(errors.get(fields::QUANTITY), Some("Quantity must be positive for IN/OUT."));

        let errors = adjustment(TransactionType::Out, "-3", 10).validate();
        assert_eq!(errors.get(fields::QUANTITY), Some("Quantity must be positive for IN/OUT."));
    }

    #[test]
    fn test_stock_out_bounded_by_on_hand() {
        let errors = adjustment(TransactionType::Out, "12", 10).validate();
        assert_eq!(errors.get(fields::QUANTITY), Some("Cannot stock out more than available (10)."));

        assert!(adjustment(TransactionType::Out, "10", 10).validate().is_empty());

        let unknown = StockAdjustmentForm {
            transaction_type: TransactionType::Out,
            quantity: "12".to_string(),
            ..StockAdjustmentForm::new(5, None)
        };
        assert!(unknown.validate().is_empty());
    }

    #[test]
    fn test_adjustment_is_a_signed_delta() {
        let form = adjustment(TransactionType::Adjustment, "-4", 10);
        assert!(form.validate().is_empty());
        assert_eq!(form.projected_on_hand(), Some(Decimal::new(6, 0)));

        let errors = adjustment(TransactionType::Adjustment, "-11", 10).validate();
        assert_eq!(
            errors.get(fields::QUANTITY),
            Some("Adjustment would leave negative stock (available: 10).")
        );
    }

    #[test]
    fn test_transaction_payload_keeps_typed_precision() {
        let form = adjustment(TransactionType::Out, "2.50", 10);
        let value = serde_json::to_value(form.to_payload()).unwrap();

        assert_eq!(value["item"], json!(5));
        assert_eq!(value["transaction_type"], json!("OUT"));
        assert_eq!(value["quantity"], json!("2.50"));
        assert_eq!(form.projected_on_hand(), Some(Decimal::new(750, 2)));
    }
}
