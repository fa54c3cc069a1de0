use crate::components::field_error::{FieldError, FormBanner};
use crate::hooks::use_form_session::use_form_session;
use crate::hooks::use_record_list::use_record_list;
use crate::services::api::ApiClient;
use domain::forms::inventory::fields;
use domain::forms::{InventoryItemForm, RecordForm};
use domain::resources::InventoryCategories;
use domain::{FormMode, FormSession, ListFilter};
use shared::InventoryItem;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InventoryItemFormViewProps {
    pub client: ApiClient,
    #[prop_or_default]
    pub initial: Option<InventoryItem>,
    pub on_saved: Callback<InventoryItem>,
    pub on_cancel: Callback<()>,
}

#[function_component(InventoryItemFormView)]
pub fn inventory_item_form_view(props: &InventoryItemFormViewProps) -> Html {
    let initial = props.initial.clone();
    let handle = use_form_session(move || match initial {
        Some(item) => FormSession::edit_record(item.id, InventoryItemForm::from_record(&item)),
        None => FormSession::create(InventoryItemForm::default()),
    });
    let categories = use_record_list::<InventoryCategories>(&props.client, ListFilter::new());
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
                if let Ok(item) = session.save(&client).await {
                    on_saved.emit(item);
                }
                session
            });
        })
    };
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let title = match handle.session.mode() {
        FormMode::Create => "New Inventory Item",
        FormMode::Edit(_) => "Edit Inventory Item",
    };
    let category_options = categories.ready().cloned().unwrap_or_default();

    html! {
        <section class="inventory-item-form-section">
            <h2>{title}</h2>
            <FormBanner error={handle.general_error()} />

            <form class="inventory-item-form" {onsubmit}>
                <div class="form-group">
                    <label for="name">{"Item Name"}</label>
                    <input
                        type="text"
                        id="name"
                        value={form.name.clone()}
                        onchange={handle.on_text(fields::NAME, |form, value| form.name = value)}
                        {disabled}
                    />
                    <FieldError error={handle.error(fields::NAME)} />
                </div>
                <div class="form-group">
                    <label for="description">{"Description"}</label>
                    <textarea
                        id="description"
                        value={form.description.clone()}
                        onchange={handle.on_text(fields::DESCRIPTION, |form, value| form.description = value)}
                        {disabled}
                    />
                </div>
                <div class="form-group">
                    <label for="category">{"Category"}</label>
                    <select
                        id="category"
                        onchange={handle.on_text(fields::CATEGORY, |form, value| form.category = value)}
                        {disabled}
                    >
                        <option value="" selected={form.category.is_empty()}>{"Select a category"}</option>
                        {for category_options.iter().map(|category| {
                            let id = category.id.to_string();
                            html! {
                                <option value={id.clone()} selected={id == form.category}>{category.name.clone()}</option>
                            }
                        })}
                    </select>
                    <FieldError error={handle.error(fields::CATEGORY)} />
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="unit_of_measure">{"Unit of Measure"}</label>
                        <input
                            type="text"
                            id="unit_of_measure"
                            value={form.unit_of_measure.clone()}
                            onchange={handle.on_text(fields::UNIT_OF_MEASURE, |form, value| form.unit_of_measure = value)}
                            {disabled}
                        />
                        <FieldError error={handle.error(fields::UNIT_OF_MEASURE)} />
                    </div>
                    <div class="form-group">
                        <label for="reorder_level">{"Reorder Level"}</label>
                        <input
                            type="number"
                            id="reorder_level"
                            step="0.01"
                            min="0"
                            value={form.reorder_level.clone()}
                            onchange={handle.on_text(fields::REORDER_LEVEL, |form, value| form.reorder_level = value)}
                            {disabled}
                        />
                        <FieldError error={handle.error(fields::REORDER_LEVEL)} />
                    </div>
                </div>

                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" {disabled}>
                        {if disabled { "Saving..." } else { "Save Item" }}
                    </button>
                    <button type="button" class="btn btn-secondary" onclick={on_cancel} {disabled}>{"Cancel"}</button>
                </div>
            </form>
        </section>
    }
}
