use crate::hooks::use_form_session::event_value;
use crate::hooks::use_record_list::use_record_list;
use crate::services::api::ApiClient;
use domain::resources::Contacts;
use domain::{ListFilter, RecordId, ViewState};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContactListProps {
    pub client: ApiClient,
    pub on_select: Callback<RecordId>,
    pub on_new: Callback<()>,
}

#[function_component(ContactList)]
pub fn contact_list(props: &ContactListProps) -> Html {
    let search = use_state(String::new);
    let rows = use_record_list::<Contacts>(&props.client, ListFilter::new().search(&search));

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: Event| search.set(event_value(&e)))
    };
    let on_new = {
        let on_new = props.on_new.clone();
        Callback::from(move |_: MouseEvent| on_new.emit(()))
    };

    let body = match &*rows {
        ViewState::Loading => html! { <p class="loading">{"Loading contacts..."}</p> },
        ViewState::NotFound => html! { <p class="empty">{"No contacts found."}</p> },
        ViewState::Failed(message) => html! { <p class="form-message error">{message.clone()}</p> },
        ViewState::Ready(contacts) if contacts.is_empty() => {
            html! { <p class="empty">{"No contacts match your search."}</p> }
        }
        ViewState::Ready(contacts) => html! {
            <table class="record-table">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Type"}</th>
                        <th>{"Email"}</th>
                        <th>{"Phone"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for contacts.iter().map(|contact| {
                        let on_select = props.on_select.clone();
                        let id = contact.id;
                        html! {
                            <tr key={id} class="clickable" onclick={Callback::from(move |_: MouseEvent| on_select.emit(id))}>
                                <td>{contact.display_name()}</td>
                                <td>{contact.contact_type.label()}</td>
                                <td>{contact.email.clone().unwrap_or_default()}</td>
                                <td>{contact.phone.clone()}</td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        },
    };

    html! {
        <section class="contact-list">
            <div class="list-header">
                <h2>{"Contacts"}</h2>
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search contacts..."
                    value={(*search).clone()}
                    onchange={on_search}
                />
                <button class="btn btn-primary" onclick={on_new}>{"New Contact"}</button>
            </div>
            {body}
        </section>
    }
}
