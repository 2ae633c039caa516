//! Редактор табличной части закупки.
//!
//! Все функции чистые: принимают срез строк и возвращают новый вектор,
//! исходные данные не меняются. Некорректный индекс ничего не делает.

use crate::domain::a002_product::aggregate::{find_product, Product};
use crate::shared::number::{format_number, parse_number};
use serde::{Deserialize, Serialize};

/// Строка формы. Поля хранятся строками, как их вводит пользователь;
/// `total_price` всегда пересчитывается из `quantity` и `unit_price`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: String,
    pub quantity: String,
    pub unit_price: String,
    pub total_price: String,
}

impl LineItem {
    /// Пустая строка-шаблон
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn quantity_value(&self) -> f64 {
        parse_number(&self.quantity)
    }

    pub fn unit_price_value(&self) -> f64 {
        parse_number(&self.unit_price)
    }

    pub fn total_price_value(&self) -> f64 {
        parse_number(&self.total_price)
    }

    fn recompute_total(&mut self) {
        self.total_price = format_number(self.quantity_value() * self.unit_price_value());
    }
}

/// Редактируемое поле строки. Цена не редактируется: она всегда берётся
/// из справочника товаров.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineItemField {
    ProductId,
    Quantity,
}

/// Добавляет пустую строку в конец
pub fn add_item(items: &[LineItem]) -> Vec<LineItem> {
    let mut next = items.to_vec();
    next.push(LineItem::blank());
    next
}

/// Удаляет строку по индексу (с нуля), сохраняя порядок остальных
pub fn remove_item(index: usize, items: &[LineItem]) -> Vec<LineItem> {
    let mut next = items.to_vec();
    if index < next.len() {
        next.remove(index);
    }
    next
}

/// Записывает значение поля и пересчитывает сумму строки.
///
/// При смене товара цена берётся из справочника; если товар не найден,
/// цена очищается.
pub fn update_item(
    index: usize,
    field: LineItemField,
    value: &str,
    items: &[LineItem],
    products: &[Product],
) -> Vec<LineItem> {
    let mut next = items.to_vec();
    let Some(item) = next.get_mut(index) else {
        return next;
    };

    match field {
        LineItemField::ProductId => {
            item.product_id = value.to_string();
            item.unit_price = find_product(products, value)
                .map(|p| format_number(p.price))
                .unwrap_or_default();
        }
        LineItemField::Quantity => item.quantity = value.to_string(),
    }
    item.recompute_total();

    next
}

/// Итог по документу: сумма `total_price` строк, нечисловые значения считаются нулём
pub fn total_price(items: &[LineItem]) -> f64 {
    items.iter().map(LineItem::total_price_value).sum()
}
