use crate::hooks::use_record_list::use_record_list;
use crate::services::api::ApiClient;
use domain::resources::InventoryItems;
use domain::{ListFilter, RecordId, ViewState};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InventoryListProps {
    pub client: ApiClient,
    pub on_select: Callback<RecordId>,
    pub on_new: Callback<()>,
}

#[function_component(InventoryList)]
pub fn inventory_list(props: &InventoryListProps) -> Html {
    let rows = use_record_list::<InventoryItems>(&props.client, ListFilter::new());

    let on_new = {
        let on_new = props.on_new.clone();
        Callback::from(move |_: MouseEvent| on_new.emit(()))
    };

    let body = match &*rows {
        ViewState::Loading => html! { <p class="loading">{"Loading inventory..."}</p> },
        ViewState::NotFound => html! { <p class="empty">{"No inventory items yet."}</p> },
        ViewState::Failed(message) => html! { <p class="form-message error">{message.clone()}</p> },
        ViewState::Ready(items) if items.is_empty() => html! { <p class="empty">{"No inventory items yet."}</p> },
        ViewState::Ready(items) => html! {
            <table class="record-table">
                <thead>
                    <tr>
                        <th>{"Item"}</th>
                        <th>{"Category"}</th>
                        <th>{"On Hand"}</th>
                        <th>{"Reorder At"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for items.iter().map(|item| {
                        let on_select = props.on_select.clone();
                        let id = item.id;
                        let row_class = if item.quantity_on_hand <= item.reorder_level {
                            "clickable low-stock"
                        } else {
                            "clickable"
                        };
                        html! {
                            <tr key={id} class={row_class} onclick={Callback::from(move |_: MouseEvent| on_select.emit(id))}>
                                <td>{item.name.clone()}</td>
                                <td>{item.category_name.clone().unwrap_or_default()}</td>
                                <td>{format!("{} {}", item.quantity_on_hand.normalize(), item.unit_of_measure)}</td>
                                <td>{item.reorder_level.normalize().to_string()}</td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        },
    };

    html! {
        <section class="inventory-list">
            <div class="list-header">
                <h2>{"Inventory"}</h2>
                <button class="btn btn-primary" onclick={on_new}>{"New Item"}</button>
            </div>
            {body}
        </section>
    }
}
