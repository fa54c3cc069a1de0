//! Edit screens: fetch the record, then hand it to its form in edit mode.
//!
//! The form is keyed by the record id so a different record gets a fresh
//! form session.

use crate::components::forms::campaign_form::CampaignFormView;
use crate::components::forms::contact_form::ContactFormView;
use crate::components::forms::donation_form::DonationFormView;
use crate::components::forms::inventory_item_form::InventoryItemFormView;
use crate::components::forms::project_form::ProjectFormView;
use crate::components::forms::volunteer_form::VolunteerFormView;
use crate::hooks::use_detail::use_detail;
use crate::services::api::ApiClient;
use domain::resources::{Campaigns, Contacts, Donations, InventoryItems, Projects, Volunteers};
use domain::{RecordId, Repository, Resource, ViewState};
use shared::{Campaign, Contact, Donation, InventoryItem, Project, Volunteer};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EditorProps<T: PartialEq> {
    pub client: ApiClient,
    pub id: RecordId,
    pub on_saved: Callback<T>,
    pub on_cancel: Callback<()>,
}

/// Placeholder for every state but `Ready`
fn pending<R: Resource, T>(state: &ViewState<T>) -> Html {
    match state {
        ViewState::Loading => html! { <div class="loading">{format!("Loading {}...", R::LABEL)}</div> },
        ViewState::NotFound => html! { <div class="not-found">{format!("No such {}.", R::LABEL)}</div> },
        ViewState::Failed(message) => html! { <div class="form-message error">{message.clone()}</div> },
        ViewState::Ready(_) => html! {},
    }
}

#[function_component(ContactEditor)]
pub fn contact_editor(props: &EditorProps<Contact>) -> Html {
    let client = props.client.clone();
    let state = use_detail(props.id, 0, move |id| async move {
        Repository::<Contacts>::get(&client, id).await
    });
    match state.ready() {
        Some(contact) => html! {
            <ContactFormView
                key={contact.id}
                client={props.client.clone()}
                initial={Some(contact.clone())}
                on_saved={props.on_saved.clone()}
                on_cancel={props.on_cancel.clone()}
            />
        },
        None => pending::<Contacts, _>(&*state),
    }
}

#[function_component(VolunteerEditor)]
pub fn volunteer_editor(props: &EditorProps<Volunteer>) -> Html {
    let client = props.client.clone();
    let state = use_detail(props.id, 0, move |id| async move {
        Repository::<Volunteers>::get(&client, id).await
    });
    match state.ready() {
        Some(volunteer) => html! {
            <VolunteerFormView
                key={volunteer.contact}
                client={props.client.clone()}
                initial={Some(volunteer.clone())}
                on_saved={props.on_saved.clone()}
                on_cancel={props.on_cancel.clone()}
            />
        },
        None => pending::<Volunteers, _>(&*state),
    }
}

#[function_component(ProjectEditor)]
pub fn project_editor(props: &EditorProps<Project>) -> Html {
    let client = props.client.clone();
    let state = use_detail(props.id, 0, move |id| async move {
        Repository::<Projects>::get(&client, id).await
    });
    match state.ready() {
        Some(project) => html! {
            <ProjectFormView
                key={project.id}
                client={props.client.clone()}
                initial={Some(project.clone())}
                on_saved={props.on_saved.clone()}
                on_cancel={props.on_cancel.clone()}
            />
        },
        None => pending::<Projects, _>(&*state),
    }
}

#[function_component(CampaignEditor)]
pub fn campaign_editor(props: &EditorProps<Campaign>) -> Html {
    let client = props.client.clone();
    let state = use_detail(props.id, 0, move |id| async move {
        Repository::<Campaigns>::get(&client, id).await
    });
    match state.ready() {
        Some(campaign) => html! {
            <CampaignFormView
                key={campaign.id}
                client={props.client.clone()}
                initial={Some(campaign.clone())}
                on_saved={props.on_saved.clone()}
                on_cancel={props.on_cancel.clone()}
            />
        },
        None => pending::<Campaigns, _>(&*state),
    }
}

#[function_component(InventoryItemEditor)]
pub fn inventory_item_editor(props: &EditorProps<InventoryItem>) -> Html {
    let client = props.client.clone();
    let state = use_detail(props.id, 0, move |id| async move {
        Repository::<InventoryItems>::get(&client, id).await
    });
    match state.ready() {
        Some(item) => html! {
            <InventoryItemFormView
                key={item.id}
                client={props.client.clone()}
                initial={Some(item.clone())}
                on_saved={props.on_saved.clone()}
                on_cancel={props.on_cancel.clone()}
            />
        },
        None => pending::<InventoryItems, _>(&*state),
    }
}

/// Donations have no cancel button on their form; cancelling is a link above it
#[function_component(DonationEditor)]
pub fn donation_editor(props: &EditorProps<Donation>) -> Html {
    let client = props.client.clone();
    let state = use_detail(props.id, 0, move |id| async move {
        Repository::<Donations>::get(&client, id).await
    });
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };
    match state.ready() {
        Some(donation) => html! {
            <>
                <button class="btn btn-link" onclick={on_cancel}>{"← Back to donation"}</button>
                <DonationFormView
                    key={donation.id}
                    client={props.client.clone()}
                    initial={Some(donation.clone())}
                    on_saved={props.on_saved.clone()}
                />
            </>
        },
        None => pending::<Donations, _>(&*state),
    }
}
