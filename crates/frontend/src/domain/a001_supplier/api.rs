use crate::shared::api_utils::fetch_data;
use contracts::domain::a001_supplier::aggregate::Supplier;

/// Supplier reference list
pub async fn fetch_suppliers() -> Result<Vec<Supplier>, String> {
    fetch_data::<Supplier>("/api/suppliers").await
}
