use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub id: i32,
    #[serde(rename = "userId", default)]
    pub user_id: Option<i32>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub products: Vec<LineItem>,
}

/// One `{productId, quantity}` entry; any other keys ride along in `extra`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(rename = "productId")]
    pub product_id: i32,
    pub quantity: i32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LineItem {
    #[must_use]
    pub fn new(product_id: i32, quantity: i32) -> Self {
        Self {
            product_id,
            quantity,
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_reads_camel_case_fields() {
        let json = r#"{"id": 2, "userId": 7, "date": "2020-03-01T00:00:00.000Z",
            "products": [{"productId": 3, "quantity": 1}], "__v": 0}"#;

        let cart: Cart = serde_json::from_str(json).unwrap();
        assert_eq!(cart.user_id, Some(7));
        assert_eq!(cart.products, vec![LineItem::new(3, 1)]);
    }

    #[test]
    fn line_item_keeps_unknown_keys() {
        let raw = serde_json::json!({"productId": 1, "quantity": 2, "_id": "x"});

        let item: LineItem = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(item.extra.get("_id"), Some(&Value::from("x")));
        assert_eq!(serde_json::to_value(&item).unwrap(), raw);
    }

    #[test]
    fn missing_line_items_default_to_empty() {
        let cart: Cart = serde_json::from_str(r#"{"id": 9}"#).unwrap();
        assert!(cart.products.is_empty());
        assert_eq!(cart.user_id, None);
        assert_eq!(cart.date, None);
    }
}
