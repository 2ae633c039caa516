use crate::shared::api_utils::fetch_data;
use contracts::domain::a002_product::aggregate::Product;

/// Product reference list with purchase prices
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    fetch_data::<Product>("/api/products").await
}
