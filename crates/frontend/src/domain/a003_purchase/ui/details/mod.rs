//! Purchase form UI module
//!
//! Simplified MVVM pattern implementation:
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)
//!
//! API calls live in `domain::a00x_*/api.rs`; form rules live in `contracts`.

mod view;
mod view_model;

pub use view::PurchaseDetails;
pub use view_model::PurchaseDetailsViewModel;
