use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Store-assigned identity. Zero means "not yet assigned" and never appears
/// on a stored product.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ProductId(pub u32);

impl ProductId {
    pub fn is_unassigned(&self) -> bool {
        self.0 == 0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: ProductId,
    pub sku: Option<String>,
    pub description: Option<String>,
    pub price: Decimal,
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{Product, ProductId};

    #[test]
    fn payloads_without_an_id_deserialize_as_unassigned() {
        let product: Product =
            serde_json::from_str(r#"{"sku": "WIDGET", "price": 10}"#).expect("deserialize");

        assert!(product.id.is_unassigned());
        assert_eq!(product.sku.as_deref(), Some("WIDGET"));
        assert_eq!(product.description, None);
        assert_eq!(product.price, Decimal::new(10, 0));
    }

    #[test]
    fn products_round_trip_through_json() {
        let product = Product {
            id: ProductId(3),
            sku: Some("WIDGET".to_string()),
            description: Some("a widget".to_string()),
            price: Decimal::new(999, 2),
        };

        let raw = serde_json::to_string(&product).expect("serialize");
        let decoded: Product = serde_json::from_str(&raw).expect("deserialize");

        assert_eq!(decoded, product);
    }
}
