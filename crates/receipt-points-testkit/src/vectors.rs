//! Golden test vectors for deterministic verification.
//!
//! Each vector is an exact request body. The id is the name-based UUID of
//! those bytes, so any client that sends the same bytes gets the same id.

use receipt_points::{Processor, ReceiptId};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Exact request body.
    pub body: &'static str,
    /// Expected id (hyphenated lowercase).
    pub expected_id: &'static str,
    /// Expected points.
    pub expected_points: u64,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "Target with trimmed description",
            body: r#"{"retailer":"Target","purchaseDate":"2022-01-01","purchaseTime":"13:01","items":[{"shortDescription":"Mountain Dew 12PK","price":"6.49"},{"shortDescription":"Emils Cheese Pizza","price":"12.25"},{"shortDescription":"Knorr Creamy Chicken","price":"1.26"},{"shortDescription":"Doritos Nacho Cheese","price":"3.35"},{"shortDescription":"   Klarbrunn 12-PK 12 FL OZ  ","price":"12.00"}],"total":"35.35"}"#,
            expected_id: "5669254b-ce2c-5fc0-8532-63ca7c0fba4c",
            expected_points: 28,
        },
        GoldenVector {
            name: "M&M Corner Market round total",
            body: r#"{"retailer":"M&M Corner Market","purchaseDate":"2022-03-20","purchaseTime":"14:33","items":[{"shortDescription":"Gatorade","price":"2.25"},{"shortDescription":"Gatorade","price":"2.25"},{"shortDescription":"Gatorade","price":"2.25"},{"shortDescription":"Gatorade","price":"2.25"}],"total":"9.00"}"#,
            expected_id: "261746c2-93af-54a2-b952-9daa2940346a",
            expected_points: 109,
        },
        GoldenVector {
            name: "Empty items on an impossible date",
            body: r#"{"retailer":"Corner-Shop 7","purchaseDate":"2023-02-31","purchaseTime":"15:59","items":[],"total":"0.00"}"#,
            expected_id: "5ffc499a-f971-5abe-b1d8-744aa006dea1",
            expected_points: 102,
        },
        GoldenVector {
            name: "Padded description",
            body: r#"{"retailer":"A","purchaseDate":"2024-06-10","purchaseTime":"09:15","items":[{"shortDescription":"  Banana  ","price":"10.00"}],"total":"10.00"}"#,
            expected_id: "dfdfce51-e39c-5da9-84f6-1e16cdee5750",
            expected_points: 78,
        },
    ]
}

/// Verify all golden vectors against a fresh processor.
///
/// Returns `(name, matches, id)` per vector; `id` is what was produced, or
/// the error text if the body was rejected.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    let processor: Processor = Processor::default();

    all_vectors()
        .iter()
        .map(|v| match processor.process(v.body.as_bytes()) {
            Ok(id) => {
                let points = processor.points(&id).map(|p| p.get()).ok();
                let matches = id.to_string() == v.expected_id
                    && points == Some(v.expected_points);
                (v.name.to_string(), matches, id.to_string())
            }
            Err(e) => (v.name.to_string(), false, e.to_string()),
        })
        .collect()
}

/// The id each vector's body derives to, without scoring.
pub fn derived_ids() -> Vec<(&'static str, ReceiptId)> {
    all_vectors()
        .iter()
        .map(|v| (v.name, ReceiptId::derive(v.body.as_bytes())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vectors_match() {
        for (name, matches, id) in verify_all_vectors() {
            assert!(matches, "Vector '{}' produced {}", name, id);
        }
    }

    #[test]
    fn test_vectors_have_distinct_ids() {
        let ids = derived_ids();
        for (i, (name_a, a)) in ids.iter().enumerate() {
            for (name_b, b) in &ids[i + 1..] {
                assert_ne!(a, b, "'{}' and '{}' collide", name_a, name_b);
            }
        }
    }

    #[test]
    fn test_raw_bytes_id() {
        assert_eq!(
            ReceiptId::derive(b"abc").to_string(),
            "7697a46f-b283-5da3-8e7c-62c11c03dd9e"
        );
    }
}
