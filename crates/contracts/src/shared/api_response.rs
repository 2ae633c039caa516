use serde::{Deserialize, Serialize};

/// Конверт ответа справочных эндпоинтов: `{ "data": [...] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: Vec<T>,
}

/// Тело ошибки бэкенда. Поле `message` показывается пользователю, если есть.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
