use crate::components::field_error::{FieldError, FormBanner};
use crate::hooks::use_form_session::use_form_session;
use crate::services::api::ApiClient;
use domain::forms::inventory::fields;
use domain::forms::StockAdjustmentForm;
use domain::FormSession;
use shared::{InventoryItem, InventoryTransaction, TransactionType};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StockAdjustmentFormViewProps {
    pub client: ApiClient,
    pub item: InventoryItem,
    pub on_saved: Callback<InventoryTransaction>,
}

#[function_component(StockAdjustmentFormView)]
pub fn stock_adjustment_form_view(props: &StockAdjustmentFormViewProps) -> Html {
    let item = props.item.clone();
    let handle = use_form_session(move || FormSession::create(StockAdjustmentForm::for_item(&item)));

    // Keep the on-hand bound in step with the reloaded item.
    {
        let handle = handle.clone();
        use_effect_with(props.item.clone(), move |item| {
            if handle.form().on_hand != Some(item.quantity_on_hand) {
                handle.reset(StockAdjustmentForm {
                    on_hand: Some(item.quantity_on_hand),
                    ..handle.form().clone()
                });
            }
            || ()
        });
    }

    let form = handle.form().clone();
    let disabled = *handle.submitting;

    let onsubmit = {
        let handle = handle.clone();
        let client = props.client.clone();
        let on_saved = props.on_saved.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let client = client.clone();
            let on_saved = on_saved.clone();
            handle.submit(move |mut session| async move {
                if let Ok(transaction) = session.save(&client).await {
                    let form = session.form();
                    session = FormSession::create(StockAdjustmentForm::new(form.item_id, form.on_hand));
                    on_saved.emit(transaction);
                }
                session
            });
        })
    };

    let quantity_hint = match form.transaction_type {
        TransactionType::Adjustment => "Positive to add, negative to remove",
        TransactionType::In | TransactionType::Out => "Amount to move",
    };
    let projected = form
        .projected_on_hand()
        .map(|level| format!("On hand after this change: {} {}", level.normalize(), props.item.unit_of_measure));

    html! {
        <section class="stock-adjustment-section">
            <h3>{"Adjust Stock"}</h3>
            <FormBanner error={handle.general_error()} />

            <form class="stock-adjustment-form" {onsubmit}>
                <div class="form-group">
                    <label for="transaction_type">{"Transaction Type"}</label>
                    <select
                        id="transaction_type"
                        onchange={handle.on_text(fields::TRANSACTION_TYPE, |form, code| {
                            if let Some(transaction_type) = TransactionType::from_code(&code) {
                                form.transaction_type = transaction_type;
                            }
                        })}
                        {disabled}
                    >
                        {for TransactionType::ALL.iter().map(|choice| html! {
                            <option value={choice.code()} selected={*choice == form.transaction_type}>
                                {choice.label()}
                            </option>
                        })}
                    </select>
                </div>

                <div class="form-group">
                    <label for="quantity">{"Quantity"}</label>
                    <input
                        type="number"
                        id="quantity"
                        step="any"
                        placeholder={quantity_hint}
                        value={form.quantity.clone()}
                        onchange={handle.on_text(fields::QUANTITY, |form, value| form.quantity = value)}
                        {disabled}
                    />
                    <FieldError error={handle.error(fields::QUANTITY)} />
                    {if let Some(projected) = projected {
                        html! { <div class="field-hint">{projected}</div> }
                    } else { html! {} }}
                </div>

                <div class="form-group">
                    <label for="notes">{"Notes"}</label>
                    <textarea
                        id="notes"
                        value={form.notes.clone()}
                        onchange={handle.on_text(fields::NOTES, |form, value| form.notes = value)}
                        {disabled}
                    />
                </div>

                <button type="submit" class="btn btn-primary" {disabled}>
                    {if disabled { "Saving..." } else { "Record Transaction" }}
                </button>
            </form>
        </section>
    }
}
