use serde::Deserialize;
use serde_json::{Map, Value};

/// Output columns, in order.
pub const FIELDS: [&str; 6] = ["id", "title", "description", "price", "category", "image"];

/// One product from the input array. Members keep the raw JSON value so
/// numbers and strings reach the CSV without coercion.
///
/// Decoding goes through a JSON object only, so array elements are rejected
/// and a repeated key keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Product {
    pub id: Option<Value>,
    pub title: Option<Value>,
    pub description: Option<Value>,
    pub price: Option<Value>,
    pub category: Option<Value>,
    pub image: Option<Value>,
}

impl From<Map<String, Value>> for Product {
    fn from(mut map: Map<String, Value>) -> Self {
        let mut take = |key: &str| map.remove(key).filter(|v| !v.is_null());
        Self {
            id: take("id"),
            title: take("title"),
            description: take("description"),
            price: take("price"),
            category: take("category"),
            image: take("image"),
        }
    }
}

impl Product {
    /// Cells in `FIELDS` order. Missing fields become empty strings.
    pub fn to_row(&self) -> [String; 6] {
        [
            &self.id,
            &self.title,
            &self.description,
            &self.price,
            &self.category,
            &self.image,
        ]
        .map(|v| v.as_ref().map(json_to_string).unwrap_or_default())
    }
}

pub fn json_to_string(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        // Nested values are written as compact JSON
        other => other.to_string(),
    }
}
