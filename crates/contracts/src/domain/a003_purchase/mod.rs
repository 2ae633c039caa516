pub mod aggregate;
pub mod form;
pub mod line_items;
pub mod validation;
