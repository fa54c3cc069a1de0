use crate::hooks::use_detail::use_detail;
use crate::services::api::ApiClient;
use crate::services::date_utils;
use domain::resources::Volunteers;
use domain::{RecordId, Repository, ViewState};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VolunteerDetailProps {
    pub client: ApiClient,
    pub volunteer_id: RecordId,
    pub on_edit: Callback<RecordId>,
    pub on_back: Callback<()>,
}

fn or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

#[function_component(VolunteerDetail)]
pub fn volunteer_detail(props: &VolunteerDetailProps) -> Html {
    let client = props.client.clone();
    let state = use_detail(props.volunteer_id, 0, move |id| async move {
        Repository::<Volunteers>::get(&client, id).await
    });

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    let volunteer = match &*state {
        ViewState::Loading => return html! { <div class="loading">{"Loading volunteer..."}</div> },
        ViewState::NotFound => {
            return html! {
                <div class="not-found">
                    <p>{"Volunteer not found."}</p>
                    <button class="btn btn-secondary" onclick={on_back}>{"Back to volunteers"}</button>
                </div>
            }
        }
        ViewState::Failed(message) => {
            return html! { <div class="form-message error">{format!("Could not load volunteer: {}", message)}</div> }
        }
        ViewState::Ready(volunteer) => volunteer.clone(),
    };

    let on_edit = {
        let on_edit = props.on_edit.clone();
        let id = volunteer.contact;
        Callback::from(move |_: MouseEvent| on_edit.emit(id))
    };
    let emergency = match (volunteer.emergency_contact_name.trim(), volunteer.emergency_contact_phone.trim()) {
        ("", "") => "-".to_string(),
        (name, "") => name.to_string(),
        ("", phone) => phone.to_string(),
        (name, phone) => format!("{} ({})", name, phone),
    };

    html! {
        <section class="volunteer-detail">
            <div class="detail-header">
                <button class="btn btn-link" onclick={on_back}>{"← Volunteers"}</button>
                <h2>{volunteer.full_name()}</h2>
                <span class="status-badge">
                    {volunteer.status_display.clone().unwrap_or_else(|| volunteer.status.label().to_string())}
                </span>
                <button class="btn btn-secondary" onclick={on_edit}>{"Edit"}</button>
            </div>

            <dl class="detail-fields">
                <dt>{"Email"}</dt>
                <dd>{or_dash(volunteer.contact_email.as_deref().unwrap_or_default())}</dd>
                <dt>{"Phone"}</dt>
                <dd>{or_dash(volunteer.contact_phone.as_deref().unwrap_or_default())}</dd>
                <dt>{"Skills"}</dt>
                <dd>{or_dash(&volunteer.skills)}</dd>
                <dt>{"Availability"}</dt>
                <dd>{or_dash(&volunteer.availability)}</dd>
                <dt>{"Emergency Contact"}</dt>
                <dd>{emergency}</dd>
                <dt>{"Joined"}</dt>
                <dd>{volunteer.joined_date.as_deref().map(date_utils::format_date).unwrap_or_else(|| "-".to_string())}</dd>
            </dl>
        </section>
    }
}
