use serde::{Deserialize, Serialize};

/// Поставщик (справочник, только чтение)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
}

impl Supplier {
    /// Значение для `<option value=...>` в выборе поставщика
    pub fn option_value(&self) -> String {
        self.id.to_string()
    }
}
