use crate::domain::a001_supplier::api::fetch_suppliers;
use crate::domain::a002_product::api::fetch_products;
use crate::domain::a003_purchase::api::create_purchase;
use crate::shared::notice::Notice;
use crate::system::session::context::SessionIdentity;
use contracts::domain::a001_supplier::aggregate::Supplier;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a003_purchase::form::PurchaseForm;
use contracts::domain::a003_purchase::line_items::{LineItem, LineItemField};
use contracts::domain::a003_purchase::validation::PurchaseValidationError;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const NOTICE_TIMEOUT_MS: u32 = 5_000;

/// ViewModel for the purchase form
#[derive(Clone, Copy)]
pub struct PurchaseDetailsViewModel {
    pub form: RwSignal<PurchaseForm>,
    pub suppliers: RwSignal<Vec<Supplier>>,
    pub products: RwSignal<Vec<Product>>,
    pub error: RwSignal<Option<String>>,
    pub notice: RwSignal<Notice>,
    pub created_by_name: StoredValue<String>,
}

impl PurchaseDetailsViewModel {
    pub fn new(identity: SessionIdentity) -> Self {
        Self {
            form: RwSignal::new(PurchaseForm::new(identity.id_user)),
            suppliers: RwSignal::new(Vec::new()),
            products: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            notice: RwSignal::new(Notice::default()),
            created_by_name: StoredValue::new(identity.username),
        }
    }

    /// Fetch suppliers and products. The two requests are independent; a
    /// failed one is logged and its list stays empty.
    pub fn load_reference_data(&self) {
        let suppliers = self.suppliers;
        spawn_local(async move {
            match fetch_suppliers().await {
                Ok(list) => {
                    log::debug!("Loaded {} suppliers", list.len());
                    suppliers.set(list);
                }
                Err(e) => log::error!("Failed to fetch supplier data: {}", e),
            }
        });

        let products = self.products;
        spawn_local(async move {
            match fetch_products().await {
                Ok(list) => {
                    log::debug!("Loaded {} products", list.len());
                    products.set(list);
                }
                Err(e) => log::error!("Failed to fetch product data: {}", e),
            }
        });
    }

    /// Reactive document total
    pub fn total_price(&self) -> f64 {
        self.form.with(|f| f.total_price())
    }

    /// A create request is in flight
    pub fn is_saving(&self) -> bool {
        self.form.with(|f| f.is_saving())
    }

    pub fn row_count(&self) -> usize {
        self.form.with(|f| f.items.len())
    }

    /// Reactive read of one row; a missing row reads as blank
    pub fn item_field<R>(&self, index: usize, read: impl Fn(&LineItem) -> R) -> R
    where
        R: Default,
    {
        self.form
            .with(|f| f.items.get(index).map(&read).unwrap_or_default())
    }

    pub fn select_supplier(&self, value: String) {
        self.edit(|f| f.select_supplier(value));
    }

    pub fn select_status(&self, value: String) {
        self.edit(|f| f.select_status(&value));
    }

    pub fn add_item(&self) {
        self.edit(|f| f.add_item());
    }

    pub fn remove_item(&self, index: usize) {
        self.edit(|f| f.remove_item(index));
    }

    pub fn change_item(&self, index: usize, field: LineItemField, value: String) {
        let products = self.products;
        self.edit(|f| products.with_untracked(|p| f.update_item(index, field, &value, p)));
    }

    fn edit(&self, apply: impl FnOnce(&mut PurchaseForm)) {
        if self.notice.with_untracked(|n| n.text().is_some()) {
            self.notice.update(|n| n.clear());
        }
        self.form.update(apply);
    }

    /// Validate and submit. Ignored while a previous save is in flight.
    /// The form is reset only after the backend accepted the document; a
    /// failed save leaves every field as the user left it.
    pub fn save_command(&self) {
        let started = self.form.try_update(|f| f.begin_save());
        let request = match started {
            Some(Ok(request)) => request,
            Some(Err(PurchaseValidationError::SaveInProgress)) | None => return,
            Some(Err(e)) => {
                self.error.set(Some(e.to_string()));
                return;
            }
        };

        let form = self.form;
        let error = self.error;
        let notice = self.notice;

        error.set(None);
        spawn_local(async move {
            let outcome = create_purchase(&request).await;
            form.try_update(|f| f.finish_save(&outcome));

            match outcome {
                Ok(()) => {
                    log::info!(
                        "Purchase saved: supplier {}, {} items",
                        request.supplier_id,
                        request.items.len()
                    );
                    let token = notice
                        .try_update(|n| n.show("Purchase saved"))
                        .unwrap_or_default();

                    TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
                    notice.try_update(|n| n.expire(token));
                }
                Err(e) => {
                    log::error!("Failed to save purchase: {}", e);
                    error.set(Some(format!("Failed to save purchase: {}", e)));
                }
            }
        });
    }
}
