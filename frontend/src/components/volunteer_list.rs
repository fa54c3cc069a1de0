use crate::hooks::use_form_session::event_value;
use crate::hooks::use_record_list::use_record_list;
use crate::services::api::ApiClient;
use domain::resources::Volunteers;
use domain::{ListFilter, RecordId, ViewState};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VolunteerListProps {
    pub client: ApiClient,
    pub on_select: Callback<RecordId>,
    pub on_new: Callback<()>,
}

#[function_component(VolunteerList)]
pub fn volunteer_list(props: &VolunteerListProps) -> Html {
    let search = use_state(String::new);
    let rows = use_record_list::<Volunteers>(&props.client, ListFilter::new().search(&search));

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: Event| search.set(event_value(&e)))
    };
    let on_new = {
        let on_new = props.on_new.clone();
        Callback::from(move |_: MouseEvent| on_new.emit(()))
    };

    let body = match &*rows {
        ViewState::Loading => html! { <p class="loading">{"Loading volunteers..."}</p> },
        ViewState::NotFound => html! { <p class="empty">{"No volunteers found."}</p> },
        ViewState::Failed(message) => html! { <p class="form-message error">{message.clone()}</p> },
        ViewState::Ready(volunteers) if volunteers.is_empty() => {
            html! { <p class="empty">{"No volunteers match your search."}</p> }
        }
        ViewState::Ready(volunteers) => html! {
            <table class="record-table">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Email"}</th>
                        <th>{"Skills"}</th>
                        <th>{"Status"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for volunteers.iter().map(|volunteer| {
                        let on_select = props.on_select.clone();
                        let id = volunteer.contact;
                        html! {
                            <tr key={id} class="clickable" onclick={Callback::from(move |_: MouseEvent| on_select.emit(id))}>
                                <td>{volunteer.full_name()}</td>
                                <td>{volunteer.contact_email.clone().unwrap_or_default()}</td>
                                <td>{volunteer.skills.clone()}</td>
                                <td>{volunteer.status.label()}</td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        },
    };

    html! {
        <section class="volunteer-list">
            <div class="list-header">
                <h2>{"Volunteers"}</h2>
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search volunteers..."
                    value={(*search).clone()}
                    onchange={on_search}
                />
                <button class="btn btn-primary" onclick={on_new}>{"New Volunteer"}</button>
            </div>
            {body}
        </section>
    }
}
