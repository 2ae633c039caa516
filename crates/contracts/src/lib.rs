//! Общие контракты фронтенда и бэкенда формы закупок.
//!
//! Здесь живут DTO справочников (поставщики, товары), документ закупки,
//! редактор строк табличной части и состояние формы. Крейт не зависит от
//! браузера и полностью тестируется нативно.

pub mod domain;
pub mod shared;
