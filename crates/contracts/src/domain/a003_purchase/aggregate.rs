use crate::shared::number::serialize_whole_as_int;
use serde::{Deserialize, Serialize};

/// Статус документа закупки. Переходы между статусами на этом уровне не
/// ограничиваются.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PurchaseStatus {
    Draft,
    Received,
    Cancel,
}

impl PurchaseStatus {
    /// Порядок вариантов в выпадающем списке
    pub const ALL: [PurchaseStatus; 3] = [
        PurchaseStatus::Draft,
        PurchaseStatus::Received,
        PurchaseStatus::Cancel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PurchaseStatus::Draft => "Draft",
            PurchaseStatus::Received => "Received",
            PurchaseStatus::Cancel => "Cancel",
        }
    }

    /// Разбор значения `<select>`; пустая строка и неизвестные значения дают `None`
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Строка документа в том виде, в каком она уходит на бэкенд
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseItemDto {
    pub product_id: String,
    #[serde(serialize_with = "serialize_whole_as_int")]
    pub quantity: f64,
    #[serde(serialize_with = "serialize_whole_as_int")]
    pub unit_price: f64,
    #[serde(serialize_with = "serialize_whole_as_int")]
    pub total_price: f64,
}

/// Тело запроса `POST /api/purchases`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePurchaseRequest {
    pub supplier_id: i64,
    pub status: PurchaseStatus,
    pub created_by: String,
    pub items: Vec<PurchaseItemDto>,
}

impl CreatePurchaseRequest {
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(|i| i.total_price).sum()
    }
}
