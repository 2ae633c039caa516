use super::line_items::LineItem;
use thiserror::Error;

/// Причина отказа в отправке документа. Номер строки в сообщениях
/// считается с единицы, как его видит пользователь.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PurchaseValidationError {
    #[error("Supplier must be selected")]
    MissingSupplier,

    #[error("Unknown supplier id: {0}")]
    InvalidSupplier(String),

    #[error("Status must be selected")]
    MissingStatus,

    #[error("Current user is unknown, please sign in again")]
    MissingCreator,

    #[error("At least one item is required")]
    NoItems,

    #[error("Item #{row}: product must be selected")]
    MissingProduct { row: usize },

    #[error("Item #{row}: quantity must be greater than zero")]
    InvalidQuantity { row: usize },

    #[error("Purchase is already being saved")]
    SaveInProgress,
}

/// Проверка строк: у каждой выбран товар и количество больше нуля
pub fn validate_items(items: &[LineItem]) -> Result<(), PurchaseValidationError> {
    if items.is_empty() {
        return Err(PurchaseValidationError::NoItems);
    }

    for (index, item) in items.iter().enumerate() {
        let row = index + 1;
        if item.product_id.trim().is_empty() {
            return Err(PurchaseValidationError::MissingProduct { row });
        }
        if item.quantity_value() <= 0.0 {
            return Err(PurchaseValidationError::InvalidQuantity { row });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(product_id: &str, quantity: &str) -> LineItem {
        LineItem {
            product_id: product_id.to_string(),
            quantity: quantity.to_string(),
            ..LineItem::default()
        }
    }

    #[test]
    fn test_valid_items() {
        assert_eq!(validate_items(&[line("p1", "5"), line("p1", "0.5")]), Ok(()));
    }

    #[test]
    fn test_empty_list_rejected() {
        assert_eq!(validate_items(&[]), Err(PurchaseValidationError::NoItems));
    }

    #[test]
    fn test_missing_product_reports_row() {
        let err = validate_items(&[line("p1", "1"), line("  ", "1")]).unwrap_err();
        assert_eq!(err, PurchaseValidationError::MissingProduct { row: 2 });
        assert_eq!(err.to_string(), "Item #2: product must be selected");
    }

    #[test]
    fn test_quantity_must_be_positive() {
        for quantity in ["", "0", "-1", "abc"] {
            assert_eq!(
                validate_items(&[line("p1", quantity)]),
                Err(PurchaseValidationError::InvalidQuantity { row: 1 }),
                "quantity {:?}",
                quantity
            );
        }
    }
}
