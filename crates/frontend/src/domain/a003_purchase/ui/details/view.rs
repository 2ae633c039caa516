use super::view_model::PurchaseDetailsViewModel;
use crate::shared::components::Button;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_rupiah, format_rupiah_field};
use crate::system::session::context::use_session;
use contracts::domain::a003_purchase::aggregate::PurchaseStatus;
use contracts::domain::a003_purchase::line_items::LineItemField;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn PurchaseDetails() -> impl IntoView {
    let vm = PurchaseDetailsViewModel::new(use_session());
    vm.load_reference_data();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command();
    };

    view! {
        <div id="a003_purchase--detail" class="page page--detail">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("purchases")}
                    <h1 class="page__title">"Purchase Form"</h1>
                </div>
                <div class="page__header-right">
                    <Button size="sm".to_string() on_click=Callback::new(move |_| vm.add_item())>
                        {icon("plus")}
                        " Add Item"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || vm.error.get().is_some()>
                    <MessageBar intent=MessageBarIntent::Error>
                        {move || vm.error.get().unwrap_or_default()}
                    </MessageBar>
                </Show>
                <Show when=move || vm.notice.with(|n| n.text().is_some())>
                    <MessageBar intent=MessageBarIntent::Success>
                        {move || vm.notice.with(|n| n.text().map(str::to_string).unwrap_or_default())}
                    </MessageBar>
                </Show>

                <form class="purchase-form" on:submit=on_submit>
                    <Card>
                        <div class="purchase-form__header">
                            <div class="form__group">
                                <label class="form__label" for="supplier_id">"Supplier"</label>
                                <select
                                    id="supplier_id"
                                    name="supplier_id"
                                    class="form__select"
                                    required
                                    prop:value=move || {
                                        vm.suppliers.track();
                                        vm.form.with(|f| f.selected_supplier_id.clone())
                                    }
                                    on:change=move |ev| vm.select_supplier(event_target_value(&ev))
                                >
                                    <option
                                        value=""
                                        selected=move || vm.form.with(|f| f.selected_supplier_id.is_empty())
                                    >
                                        "Select Supplier"
                                    </option>
                                    <For
                                        each=move || vm.suppliers.get()
                                        key=|supplier| supplier.id
                                        children=move |supplier| {
                                            let value = supplier.option_value();
                                            let is_selected = {
                                                let value = value.clone();
                                                move || vm.form.with(|f| f.selected_supplier_id == value)
                                            };
                                            view! {
                                                <option value=value selected=is_selected>
                                                    {supplier.name}
                                                </option>
                                            }
                                        }
                                    />
                                </select>
                            </div>

                            <div class="form__group">
                                <label class="form__label" for="status">"Status"</label>
                                <select
                                    id="status"
                                    name="status"
                                    class="form__select"
                                    required
                                    prop:value=move || vm.form.with(|f| f.status_value().to_string())
                                    on:change=move |ev| vm.select_status(event_target_value(&ev))
                                >
                                    <option value="" selected=move || vm.form.with(|f| f.status.is_none())>
                                        "Select Status"
                                    </option>
                                    {PurchaseStatus::ALL
                                        .into_iter()
                                        .map(|status| {
                                            view! {
                                                <option
                                                    value=status.as_str()
                                                    selected=move || vm.form.with(|f| f.status == Some(status))
                                                >
                                                    {status.as_str()}
                                                </option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                            </div>

                            <div class="form__group">
                                <label class="form__label" for="created_by_name">"Created By"</label>
                                <input
                                    id="created_by_name"
                                    type="text"
                                    class="form__input"
                                    value=vm.created_by_name.get_value()
                                    readonly
                                />
                                <input
                                    type="hidden"
                                    name="created_by"
                                    value=move || vm.form.with(|f| f.created_by.clone())
                                />
                            </div>
                        </div>
                    </Card>

                    <div class="purchase-items">
                        <div class="purchase-items__row purchase-items__row--head">
                            <div>"Product"</div>
                            <div>"Quantity"</div>
                            <div>"Unit Price"</div>
                            <div>"Total Price"</div>
                            <div class="purchase-items__action">"Action"</div>
                        </div>

                        // Rows are keyed by position and read their values from the
                        // form, so removing a row shifts the values below it up.
                        <For
                            each=move || 0..vm.row_count()
                            key=|index| *index
                            children=move |index| {
                                view! {
                                    <div class="purchase-items__row">
                                        <div>
                                            <select
                                                class="form__select"
                                                required
                                                prop:value=move || {
                                                    vm.products.track();
                                                    vm.item_field(index, |i| i.product_id.clone())
                                                }
                                                on:change=move |ev| {
                                                    vm.change_item(index, LineItemField::ProductId, event_target_value(&ev))
                                                }
                                            >
                                                <option
                                                    value=""
                                                    selected=move || vm.item_field(index, |i| i.product_id.is_empty())
                                                >
                                                    "Select Product"
                                                </option>
                                                <For
                                                    each=move || vm.products.get()
                                                    key=|product| product.product_id.clone()
                                                    children=move |product| {
                                                        let product_id = product.product_id.clone();
                                                        let is_selected = move || {
                                                            vm.item_field(index, |i| i.product_id == product_id)
                                                        };
                                                        view! {
                                                            <option value=product.product_id selected=is_selected>
                                                                {product.name}
                                                            </option>
                                                        }
                                                    }
                                                />
                                            </select>
                                        </div>

                                        <div>
                                            <input
                                                type="number"
                                                class="form__input"
                                                min="0"
                                                step="any"
                                                required
                                                prop:value=move || vm.item_field(index, |i| i.quantity.clone())
                                                on:input=move |ev| {
                                                    vm.change_item(index, LineItemField::Quantity, event_target_value(&ev))
                                                }
                                            />
                                        </div>

                                        <div>
                                            <input
                                                type="text"
                                                class="form__input form__input--plain"
                                                prop:value=move || vm.item_field(index, |i| format_rupiah_field(&i.unit_price))
                                                readonly
                                            />
                                        </div>

                                        <div>
                                            <input
                                                type="text"
                                                class="form__input form__input--plain"
                                                prop:value=move || vm.item_field(index, |i| format_rupiah_field(&i.total_price))
                                                readonly
                                            />
                                        </div>

                                        <div class="purchase-items__action">
                                            <Button
                                                variant="danger".to_string()
                                                size="sm".to_string()
                                                title="Remove item".to_string()
                                                on_click=Callback::new(move |_| vm.remove_item(index))
                                            >
                                                {icon("trash")}
                                            </Button>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>

                    <div class="purchase-form__footer">
                        <p class="purchase-form__total">
                            "Total: " {move || format_rupiah(vm.total_price())}
                        </p>
                        <Button
                            variant="success".to_string()
                            button_type="submit".to_string()
                            disabled=Signal::derive(move || vm.is_saving())
                        >
                            {icon("save")}
                            {move || if vm.is_saving() { " Saving..." } else { " Save Purchase" }}
                        </Button>
                    </div>
                </form>
            </div>
        </div>
    }
}
