use crate::components::forms::stock_adjustment_form::StockAdjustmentFormView;
use crate::hooks::use_detail::use_detail;
use crate::services::api::ApiClient;
use crate::services::date_utils;
use domain::detail::load_with_children;
use domain::resources::ItemTransactions;
use domain::{RecordId, ViewState};
use shared::InventoryTransaction;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InventoryItemDetailProps {
    pub client: ApiClient,
    pub item_id: RecordId,
    pub on_edit: Callback<RecordId>,
}

#[function_component(InventoryItemDetail)]
pub fn inventory_item_detail(props: &InventoryItemDetailProps) -> Html {
    let reload = use_state(|| 0u32);
    let client = props.client.clone();
    let state = use_detail(props.item_id, *reload, move |id| async move {
        load_with_children::<ItemTransactions, _>(&client, id).await
    });

    let loaded = match &*state {
        ViewState::Loading => return html! { <div class="loading">{"Loading item..."}</div> },
        ViewState::NotFound => return html! { <div class="not-found">{"Inventory item not found."}</div> },
        ViewState::Failed(message) => {
            return html! { <div class="form-message error">{format!("Could not load item: {}", message)}</div> }
        }
        ViewState::Ready(loaded) => loaded.clone(),
    };
    let item = loaded.record;

    let on_saved = {
        let reload = reload.clone();
        Callback::from(move |_: InventoryTransaction| reload.set(*reload + 1))
    };
    let on_edit = {
        let on_edit = props.on_edit.clone();
        let id = item.id;
        Callback::from(move |_: MouseEvent| on_edit.emit(id))
    };
    let low_stock = item.quantity_on_hand <= item.reorder_level;

    html! {
        <section class="inventory-item-detail">
            <div class="detail-header">
                <h2>{item.name.clone()}</h2>
                {if low_stock {
                    html! { <span class="status-badge warning">{"Reorder"}</span> }
                } else { html! {} }}
                <button class="btn btn-secondary" onclick={on_edit}>{"Edit"}</button>
            </div>

            <dl class="detail-fields">
                <dt>{"Description"}</dt>
                <dd>{if item.description.is_empty() { "-".to_string() } else { item.description.clone() }}</dd>
                <dt>{"Category"}</dt>
                <dd>{item.category_name.clone().unwrap_or_else(|| "-".to_string())}</dd>
                <dt>{"On Hand"}</dt>
                <dd>{format!("{} {}", item.quantity_on_hand.normalize(), item.unit_of_measure)}</dd>
                <dt>{"Reorder Level"}</dt>
                <dd>{item.reorder_level.normalize().to_string()}</dd>
            </dl>

            <StockAdjustmentFormView client={props.client.clone()} item={item.clone()} {on_saved} />

            <h3>{"Transactions"}</h3>
            {if loaded.children.is_empty() {
                html! { <p class="empty">{"No stock movements yet."}</p> }
            } else {
                html! {
                    <table class="transaction-table">
                        <thead>
                            <tr>
                                <th>{"Date"}</th>
                                <th>{"Type"}</th>
                                <th>{"Quantity"}</th>
                                <th>{"By"}</th>
                                <th>{"Notes"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for loaded.children.iter().map(|transaction| html! {
                                <tr key={transaction.id}>
                                    <td>{transaction.transaction_date.as_deref().map(date_utils::format_timestamp).unwrap_or_default()}</td>
                                    <td>{transaction.transaction_type.label()}</td>
                                    <td>{transaction.quantity.normalize().to_string()}</td>
                                    <td>{transaction.user.as_ref().map(|user| user.username.clone()).unwrap_or_default()}</td>
                                    <td>{transaction.notes.clone()}</td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                }
            }}
        </section>
    }
}
