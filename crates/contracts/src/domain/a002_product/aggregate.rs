use crate::shared::number::deserialize_lenient_f64;
use serde::{Deserialize, Serialize};

/// Товар (справочник, только чтение)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub name: String,

    /// Закупочная цена; источник цены строки
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub price: f64,
}

/// Поиск товара по `product_id`
pub fn find_product<'a>(products: &'a [Product], product_id: &str) -> Option<&'a Product> {
    products.iter().find(|p| p.product_id == product_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_products_envelope() {
        let json = r#"{"data":[
            {"product_id":"p1","name":"Widget","price":1000},
            {"product_id":"p3","name":"Gadget","price":"15000.00"}
        ]}"#;
        let resp: crate::shared::api_response::DataResponse<Product> =
            serde_json::from_str(json).unwrap();

        assert_eq!(resp.data.len(), 2);
        assert_eq!(resp.data[1].price, 15000.0);
        assert_eq!(find_product(&resp.data, "p1").map(|p| p.name.as_str()), Some("Widget"));
        assert!(find_product(&resp.data, "p9").is_none());
    }
}
