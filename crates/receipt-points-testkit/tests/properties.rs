//! Property tests over generated receipts.

use proptest::prelude::*;

use receipt_points::core::{breakdown, score, validate_receipt, Receipt};
use receipt_points::{LineItem, Points, PointsStore, ProcessError, Processor, ReceiptId};
use receipt_points_testkit::generators::{amount, invalid_amount, line_item, ReceiptParams};

proptest! {
    #[test]
    fn test_score_is_deterministic(params: ReceiptParams) {
        let valid = validate_receipt(&params.to_receipt()).unwrap();
        prop_assert_eq!(score(&valid), score(&valid));
        prop_assert_eq!(score(&valid), breakdown(&valid).total());
    }

    #[test]
    fn test_identity_is_deterministic(params: ReceiptParams) {
        prop_assert_eq!(
            ReceiptId::derive(&params.to_json()),
            ReceiptId::derive(&params.to_json())
        );
    }

    #[test]
    fn test_process_is_idempotent(params: ReceiptParams) {
        let processor: Processor = Processor::default();
        let raw = params.to_json();

        let first = processor.process(&raw).unwrap();
        let points = processor.points(&first).unwrap();
        let second = processor.process(&raw).unwrap();

        prop_assert_eq!(first, second);
        prop_assert_eq!(first, ReceiptId::derive(&raw));
        prop_assert_eq!(processor.points(&second).unwrap(), points);
        prop_assert_eq!(processor.store().len(), 1);
    }

    #[test]
    fn test_item_pairs_award_five_each(
        params: ReceiptParams,
        items in prop::collection::vec(line_item(), 0..20),
    ) {
        let mut receipt = params.to_receipt();
        receipt.items = items;
        let parts = breakdown(&validate_receipt(&receipt).unwrap());

        prop_assert_eq!(parts.item_pairs, Points::new(5 * (receipt.items.len() / 2) as u64));
    }

    #[test]
    fn test_round_total_implies_quarter(params: ReceiptParams, whole in 0u64..1_000_000) {
        let mut receipt = params.to_receipt();
        receipt.total = format!("{whole}.00");
        let parts = breakdown(&validate_receipt(&receipt).unwrap());

        prop_assert_eq!(parts.round_total, Points::new(50));
        prop_assert_eq!(parts.quarter_total, Points::new(25));
    }

    #[test]
    fn test_invalid_total_rejected(params: ReceiptParams, total in invalid_amount()) {
        let processor: Processor = Processor::default();
        let mut receipt = params.to_receipt();
        receipt.total = total;

        let err = processor.process(&receipt.to_json()).unwrap_err();
        prop_assert!(matches!(err, ProcessError::ValidationFailed(_)));
        prop_assert!(processor.store().is_empty());
    }

    #[test]
    fn test_invalid_price_rejected(
        params: ReceiptParams,
        price in invalid_amount(),
        total in amount(),
    ) {
        let mut receipt = Receipt {
            total,
            ..params.to_receipt()
        };
        receipt.items.push(LineItem::new("Gatorade", price));

        prop_assert!(validate_receipt(&receipt).is_err());
    }

    #[test]
    fn test_arbitrary_bytes_never_panic(raw in prop::collection::vec(any::<u8>(), 0..256)) {
        let processor: Processor = Processor::default();
        if let Ok(id) = processor.process(&raw) {
            prop_assert_eq!(id, ReceiptId::derive(&raw));
            prop_assert!(processor.points(&id).is_ok());
        }
    }
}
