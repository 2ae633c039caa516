//! Состояние формы «Закупка».
//!
//! Форма всегда содержит хотя бы одну редактируемую строку: удаление
//! последней строки подставляет пустой шаблон.
//!
//! Сохранение идёт в два шага: `begin_save` проверяет форму и помечает её
//! как отправляемую, `finish_save` снимает пометку и очищает форму только
//! при успехе.

use super::aggregate::{CreatePurchaseRequest, PurchaseItemDto, PurchaseStatus};
use super::line_items::{self, LineItem, LineItemField};
use super::validation::{validate_items, PurchaseValidationError};
use crate::domain::a002_product::aggregate::Product;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseForm {
    /// Значение выбора поставщика; пустая строка, пока ничего не выбрано
    pub selected_supplier_id: String,
    pub status: Option<PurchaseStatus>,
    /// `id_user` текущего пользователя
    pub created_by: String,
    pub items: Vec<LineItem>,
    /// Запрос на создание уже отправлен и ответа ещё нет
    #[serde(skip)]
    pub saving: bool,
}

impl PurchaseForm {
    pub fn new(created_by: impl Into<String>) -> Self {
        Self {
            selected_supplier_id: String::new(),
            status: None,
            created_by: created_by.into(),
            items: vec![LineItem::blank()],
            saving: false,
        }
    }

    pub fn select_supplier(&mut self, supplier_id: impl Into<String>) {
        self.selected_supplier_id = supplier_id.into();
    }

    /// Принимает значение `<select>` статуса; пустое значение сбрасывает выбор
    pub fn select_status(&mut self, value: &str) {
        self.status = PurchaseStatus::parse(value);
    }

    pub fn status_value(&self) -> &'static str {
        self.status.map(|s| s.as_str()).unwrap_or("")
    }

    pub fn add_item(&mut self) {
        self.items = line_items::add_item(&self.items);
    }

    pub fn remove_item(&mut self, index: usize) {
        self.items = line_items::remove_item(index, &self.items);
        if self.items.is_empty() {
            self.items.push(LineItem::blank());
        }
    }

    pub fn update_item(
        &mut self,
        index: usize,
        field: LineItemField,
        value: &str,
        products: &[Product],
    ) {
        self.items = line_items::update_item(index, field, value, &self.items, products);
    }

    /// Итог документа; вычисляется при каждом обращении
    pub fn total_price(&self) -> f64 {
        line_items::total_price(&self.items)
    }

    /// Очистка после успешного сохранения. Автор документа сохраняется.
    pub fn reset(&mut self) {
        self.selected_supplier_id.clear();
        self.status = None;
        self.items = vec![LineItem::blank()];
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Начало сохранения: проверка формы и сборка запроса. Пока предыдущий
    /// запрос не завершён, возвращает `SaveInProgress` и ничего не меняет.
    pub fn begin_save(&mut self) -> Result<CreatePurchaseRequest, PurchaseValidationError> {
        if self.saving {
            return Err(PurchaseValidationError::SaveInProgress);
        }
        let request = self.to_request()?;
        self.saving = true;
        Ok(request)
    }

    /// Завершение сохранения. При ошибке состояние формы не трогается.
    pub fn finish_save<E>(&mut self, outcome: &Result<(), E>) {
        self.saving = false;
        if outcome.is_ok() {
            self.reset();
        }
    }

    /// Проверяет форму и собирает тело запроса на создание закупки
    pub fn to_request(&self) -> Result<CreatePurchaseRequest, PurchaseValidationError> {
        let supplier_raw = self.selected_supplier_id.trim();
        if supplier_raw.is_empty() {
            return Err(PurchaseValidationError::MissingSupplier);
        }
        let supplier_id = supplier_raw
            .parse::<i64>()
            .map_err(|_| PurchaseValidationError::InvalidSupplier(supplier_raw.to_string()))?;

        let status = self.status.ok_or(PurchaseValidationError::MissingStatus)?;

        if self.created_by.trim().is_empty() {
            return Err(PurchaseValidationError::MissingCreator);
        }

        validate_items(&self.items)?;

        let items = self
            .items
            .iter()
            .map(|item| PurchaseItemDto {
                product_id: item.product_id.clone(),
                quantity: item.quantity_value(),
                unit_price: item.unit_price_value(),
                total_price: item.total_price_value(),
            })
            .collect();

        Ok(CreatePurchaseRequest {
            supplier_id,
            status,
            created_by: self.created_by.clone(),
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Vec<Product> {
        vec![Product {
            product_id: "p1".to_string(),
            name: "Widget".to_string(),
            price: 1000.0,
        }]
    }

    fn filled_form() -> PurchaseForm {
        let products = widget();
        let mut form = PurchaseForm::new("7");
        form.select_supplier("1");
        form.select_status("Draft");
        form.update_item(0, LineItemField::ProductId, "p1", &products);
        form.update_item(0, LineItemField::Quantity, "5", &products);
        form
    }

    #[test]
    fn test_new_form_has_one_blank_row() {
        let form = PurchaseForm::new("7");
        assert_eq!(form.items, vec![LineItem::blank()]);
        assert_eq!(form.status, None);
        assert_eq!(form.status_value(), "");
        assert_eq!(form.total_price(), 0.0);
    }

    #[test]
    fn test_end_to_end_request() {
        let form = filled_form();
        assert_eq!(form.total_price(), 5000.0);

        let request = form.to_request().unwrap();
        assert_eq!(
            request,
            CreatePurchaseRequest {
                supplier_id: 1,
                status: PurchaseStatus::Draft,
                created_by: "7".to_string(),
                items: vec![PurchaseItemDto {
                    product_id: "p1".to_string(),
                    quantity: 5.0,
                    unit_price: 1000.0,
                    total_price: 5000.0,
                }],
            }
        );
    }

    #[test]
    fn test_reset_after_save() {
        let mut form = filled_form();
        form.add_item();
        form.reset();

        assert_eq!(form.selected_supplier_id, "");
        assert_eq!(form.status, None);
        assert_eq!(form.items, vec![LineItem::blank()]);
        assert_eq!(form.created_by, "7");
    }

    #[test]
    fn test_removing_last_row_keeps_blank_row() {
        let mut form = filled_form();
        form.remove_item(0);
        assert_eq!(form.items, vec![LineItem::blank()]);

        form.remove_item(5);
        assert_eq!(form.items.len(), 1);
    }

    #[test]
    fn test_remove_middle_row() {
        let products = widget();
        let mut form = filled_form();
        form.add_item();
        form.add_item();
        form.update_item(2, LineItemField::ProductId, "p1", &products);
        form.update_item(2, LineItemField::Quantity, "2", &products);
        assert_eq!(form.total_price(), 7000.0);

        form.remove_item(1);
        assert_eq!(form.items.len(), 2);
        assert_eq!(form.items[1].total_price, "2000");
        assert_eq!(form.total_price(), 7000.0);
    }

    #[test]
    fn test_empty_product_rejected() {
        let mut form = filled_form();
        form.add_item();
        assert_eq!(
            form.to_request(),
            Err(PurchaseValidationError::MissingProduct { row: 2 })
        );
    }

    #[test]
    fn test_header_validation() {
        let mut form = filled_form();
        form.select_supplier("");
        assert_eq!(form.to_request(), Err(PurchaseValidationError::MissingSupplier));

        form.select_supplier("acme");
        assert_eq!(
            form.to_request(),
            Err(PurchaseValidationError::InvalidSupplier("acme".to_string()))
        );

        let mut form = filled_form();
        form.select_status("");
        assert_eq!(form.to_request(), Err(PurchaseValidationError::MissingStatus));

        let mut form = filled_form();
        form.created_by = String::new();
        assert_eq!(form.to_request(), Err(PurchaseValidationError::MissingCreator));
    }

    #[test]
    fn test_removing_first_row_shifts_values_up() {
        let products = widget();
        let mut form = PurchaseForm::new("7");
        form.update_item(0, LineItemField::Quantity, "2", &products);
        form.add_item();
        form.update_item(1, LineItemField::ProductId, "p1", &products);
        form.update_item(1, LineItemField::Quantity, "5", &products);

        form.remove_item(0);

        assert_eq!(form.items.len(), 1);
        assert_eq!(form.items[0].product_id, "p1");
        assert_eq!(form.items[0].quantity, "5");
        assert_eq!(form.items[0].unit_price, "1000");
        assert_eq!(form.items[0].total_price, "5000");
    }

    #[test]
    fn test_failed_save_keeps_form() {
        let mut form = filled_form();
        let before = form.clone();

        assert!(form.begin_save().is_ok());
        assert!(form.is_saving());

        form.finish_save(&Err::<(), _>("HTTP 500".to_string()));
        assert!(!form.is_saving());
        assert_eq!(form, before);
    }

    #[test]
    fn test_successful_save_resets_form() {
        let mut form = filled_form();
        let request = form.begin_save().unwrap();
        assert_eq!(request.items.len(), 1);

        form.finish_save(&Ok::<(), String>(()));
        assert!(!form.is_saving());
        assert_eq!(form.items, vec![LineItem::blank()]);
        assert_eq!(form.selected_supplier_id, "");
        assert_eq!(form.status, None);
    }

    #[test]
    fn test_second_submit_while_pending_is_ignored() {
        let mut form = filled_form();
        assert!(form.begin_save().is_ok());

        assert_eq!(form.begin_save(), Err(PurchaseValidationError::SaveInProgress));
        assert!(form.is_saving());

        form.finish_save(&Ok::<(), String>(()));
        form.select_supplier("1");
        form.select_status("Draft");
        form.update_item(0, LineItemField::ProductId, "p1", &widget());
        form.update_item(0, LineItemField::Quantity, "1", &widget());
        assert!(form.begin_save().is_ok());
    }

    #[test]
    fn test_invalid_form_never_starts_saving() {
        let mut form = filled_form();
        form.add_item();

        assert_eq!(
            form.begin_save(),
            Err(PurchaseValidationError::MissingProduct { row: 2 })
        );
        assert!(!form.is_saving());
        assert_eq!(form.items.len(), 2);
    }

    #[test]
    fn test_status_can_change_freely() {
        let mut form = filled_form();
        form.select_status("Cancel");
        form.select_status("Received");
        form.select_status("Draft");
        assert_eq!(form.status, Some(PurchaseStatus::Draft));
    }
}
