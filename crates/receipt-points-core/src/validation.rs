//! Receipt validation: structural checks over every field grammar.
//!
//! A receipt is accepted whole or not at all. Checks short-circuit on the
//! first failing field; which field failed is reported for diagnostics only.

use crate::error::ValidationError;
use crate::grammar::Field;
use crate::receipt::{Amount, LineItem, Receipt, ValidItem, ValidReceipt};

/// Validate a candidate receipt and lift it into a [`ValidReceipt`].
///
/// This performs, in order:
/// - Retailer grammar
/// - Purchase date grammar
/// - Purchase time grammar
/// - Each line item (description, then price)
/// - Total grammar
///
/// An empty item list is accepted.
pub fn validate_receipt(receipt: &Receipt) -> Result<ValidReceipt, ValidationError> {
    check(Field::Retailer, &receipt.retailer)?;
    check(Field::PurchaseDate, &receipt.purchase_date)?;
    check(Field::PurchaseTime, &receipt.purchase_time)?;

    let items = receipt
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            validate_item(item).map_err(|field| ValidationError::Item { index, field })
        })
        .collect::<Result<Vec<_>, _>>()?;

    check(Field::Total, &receipt.total)?;

    Ok(ValidReceipt::new(
        &receipt.retailer,
        &receipt.purchase_date,
        &receipt.purchase_time,
        items,
        &receipt.total,
    ))
}

/// Check a candidate receipt without building the validated form.
pub fn is_valid_receipt(receipt: &Receipt) -> bool {
    validate_receipt(receipt).is_ok()
}

/// Validate one line item. Returns the first field that failed.
pub fn validate_item(item: &LineItem) -> Result<ValidItem, Field> {
    if !Field::ShortDescription.accepts(&item.short_description) {
        return Err(Field::ShortDescription);
    }
    if !Field::Price.accepts(&item.price) {
        return Err(Field::Price);
    }

    Ok(ValidItem {
        description: item.short_description.clone(),
        price: Amount::from_matched(&item.price),
    })
}

fn check(field: Field, value: &str) -> Result<(), ValidationError> {
    if field.accepts(value) {
        Ok(())
    } else {
        Err(ValidationError::Field(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_valid_receipt() -> Receipt {
        Receipt::builder()
            .retailer("Target")
            .purchase_date("2022-01-01")
            .purchase_time("13:01")
            .item("Mountain Dew 12PK", "6.49")
            .item("Emils Cheese Pizza", "12.25")
            .total("18.74")
            .build()
    }

    #[test]
    fn test_valid_receipt() {
        let valid = validate_receipt(&make_valid_receipt()).unwrap();

        assert_eq!(valid.retailer(), "Target");
        assert_eq!(valid.purchase_date().last_digit(), 1);
        assert_eq!(valid.purchase_time().hour(), 13);
        assert_eq!(valid.items().len(), 2);
        assert_eq!(valid.items()[1].price().total_cents(), 1225);
        assert_eq!(valid.total().total_cents(), 1874);
    }

    #[test]
    fn test_empty_items_are_valid() {
        let mut receipt = make_valid_receipt();
        receipt.items.clear();

        assert!(is_valid_receipt(&receipt));
    }

    #[test]
    fn test_total_with_one_decimal_rejected() {
        let mut receipt = make_valid_receipt();
        receipt.total = "9.0".into();

        let result = validate_receipt(&receipt);
        assert_eq!(result, Err(ValidationError::Field(Field::Total)));
    }

    #[test]
    fn test_each_receipt_field_rejected() {
        let cases: [(fn(&mut Receipt), Field); 4] = [
            (|r| r.retailer = "Trader Joe's".into(), Field::Retailer),
            (|r| r.purchase_date = "2022-13-01".into(), Field::PurchaseDate),
            (|r| r.purchase_time = "24:00".into(), Field::PurchaseTime),
            (|r| r.total = "".into(), Field::Total),
        ];

        for (mutate, field) in cases {
            let mut receipt = make_valid_receipt();
            mutate(&mut receipt);
            assert_eq!(validate_receipt(&receipt), Err(ValidationError::Field(field)));
        }
    }

    #[test]
    fn test_invalid_item_reports_index() {
        let mut receipt = make_valid_receipt();
        receipt.items[1].price = "12.5".into();

        let result = validate_receipt(&receipt);
        assert_eq!(
            result,
            Err(ValidationError::Item {
                index: 1,
                field: Field::Price
            })
        );
    }

    #[test]
    fn test_invalid_item_description() {
        let item = LineItem::new("Salt & Pepper", "1.00");
        assert_eq!(validate_item(&item), Err(Field::ShortDescription));

        let item = LineItem::new("", "1.00");
        assert_eq!(validate_item(&item), Err(Field::ShortDescription));
    }

    #[test]
    fn test_short_circuits_on_first_failure() {
        let receipt = Receipt::default();
        assert_eq!(
            validate_receipt(&receipt),
            Err(ValidationError::Field(Field::Retailer))
        );
    }

    #[test]
    fn test_impossible_calendar_date_accepted() {
        let mut receipt = make_valid_receipt();
        receipt.purchase_date = "2023-02-31".into();

        assert!(is_valid_receipt(&receipt));
    }
}
