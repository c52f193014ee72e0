//! 商品实体

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 商品 ID
///
/// 由存储在插入时分配（BIGSERIAL），分配后不可变更
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub i64);

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// 商品实体
///
/// 除 id 外所有字段均可为空：没有任何字段校验，
/// 请求体中缺失的字段反序列化为 None 并原样写入存储
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: Option<ProductId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub quantity: Option<i32>,
}

impl Product {
    /// 用载荷覆盖除 id 外的所有字段
    ///
    /// 整行覆盖语义：载荷中缺失的字段会把已有值覆盖为 None
    pub fn overwrite_with(&mut self, payload: Product) {
        self.name = payload.name;
        self.description = payload.description;
        self.price = payload.price;
        self.quantity = payload.quantity;
        // id 保持不变
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_deserializes_to_all_none() {
        let product: Product = serde_json::from_str("{}").unwrap();
        assert_eq!(product, Product::default());
    }

    #[test]
    fn test_overwrite_keeps_id() {
        let mut existing = Product {
            id: Some(ProductId(1)),
            name: Some("Pen".to_string()),
            description: Some("Blue pen".to_string()),
            price: Some(Decimal::new(15, 1)),
            quantity: Some(100),
        };
        let payload: Product =
            serde_json::from_str(r#"{"id": 99, "name": "Pencil", "quantity": 50}"#).unwrap();

        existing.overwrite_with(payload);

        assert_eq!(existing.id, Some(ProductId(1)));
        assert_eq!(existing.name.as_deref(), Some("Pencil"));
        assert_eq!(existing.description, None);
        assert_eq!(existing.price, None);
        assert_eq!(existing.quantity, Some(50));
    }

    #[test]
    fn test_product_id_parses_from_path_segment() {
        let id: ProductId = "42".parse().unwrap();
        assert_eq!(id, ProductId(42));
        assert_eq!(id.to_string(), "42");
    }
}
