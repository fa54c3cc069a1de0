use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::campaign_detail::CampaignDetailView;
use components::campaign_list::CampaignList;
use components::contact_detail::ContactDetail;
use components::contact_list::ContactList;
use components::donation_detail::DonationDetail;
use components::donation_list::DonationList;
use components::editors::{
    CampaignEditor, ContactEditor, DonationEditor, InventoryItemEditor, ProjectEditor, VolunteerEditor,
};
use components::forms::campaign_form::CampaignFormView;
use components::forms::contact_form::ContactFormView;
use components::forms::donation_form::DonationFormView;
use components::forms::inventory_item_form::InventoryItemFormView;
use components::forms::project_form::ProjectFormView;
use components::forms::volunteer_form::VolunteerFormView;
use components::header::{Header, Section};
use components::inventory_item_detail::InventoryItemDetail;
use components::inventory_list::InventoryList;
use components::project_detail::ProjectDetailView;
use components::project_list::ProjectList;
use components::volunteer_detail::VolunteerDetail;
use components::volunteer_list::VolunteerList;
use domain::RecordId;
use services::api::ApiClient;
use services::config::ClientConfig;
use shared::{Campaign, Contact, Donation, InventoryItem, Project, Volunteer};

/// What the main panel is showing
#[derive(Debug, Clone, PartialEq)]
enum View {
    Contacts,
    ContactDetail(RecordId),
    NewContact,
    EditContact(RecordId),
    Volunteers,
    VolunteerDetail(RecordId),
    NewVolunteer,
    EditVolunteer(RecordId),
    Projects,
    ProjectDetail(RecordId),
    NewProject,
    EditProject(RecordId),
    Donations,
    DonationDetail(RecordId),
    NewDonation,
    EditDonation(RecordId),
    Campaigns,
    CampaignDetail(RecordId),
    NewCampaign,
    EditCampaign(RecordId),
    Inventory,
    InventoryItem(RecordId),
    NewInventoryItem,
    EditInventoryItem(RecordId),
}

impl View {
    fn section(&self) -> Section {
        match self {
            View::Contacts | View::ContactDetail(_) | View::NewContact | View::EditContact(_) => Section::Contacts,
            View::Volunteers | View::VolunteerDetail(_) | View::NewVolunteer | View::EditVolunteer(_) => {
                Section::Volunteers
            }
            View::Projects | View::ProjectDetail(_) | View::NewProject | View::EditProject(_) => Section::Projects,
            View::Donations | View::DonationDetail(_) | View::NewDonation | View::EditDonation(_) => {
                Section::Donations
            }
            View::Campaigns | View::CampaignDetail(_) | View::NewCampaign | View::EditCampaign(_) => {
                Section::Campaigns
            }
            View::Inventory | View::InventoryItem(_) | View::NewInventoryItem | View::EditInventoryItem(_) => {
                Section::Inventory
            }
        }
    }
}

impl From<Section> for View {
    fn from(section: Section) -> Self {
        match section {
            Section::Contacts => View::Contacts,
            Section::Volunteers => View::Volunteers,
            Section::Projects => View::Projects,
            Section::Donations => View::Donations,
            Section::Campaigns => View::Campaigns,
            Section::Inventory => View::Inventory,
        }
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: ClientConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let client = use_memo(props.config.clone(), |config| ApiClient::new(config));
    let client = (*client).clone();
    let display = props.config.display.clone();
    let view = use_state(|| View::Contacts);

    let navigate = {
        let view = view.clone();
        Callback::from(move |next: View| {
            tracing::debug!(?next, "navigate");
            view.set(next);
        })
    };
    let on_section = navigate.reform(View::from);
    let to = |target: View| navigate.reform(move |_: ()| target.clone());

    let main = match &*view {
        View::Contacts => html! {
            <ContactList
                client={client.clone()}
                on_select={navigate.reform(View::ContactDetail)}
                on_new={to(View::NewContact)}
            />
        },
        View::ContactDetail(id) => html! {
            <ContactDetail
                key={*id}
                client={client.clone()}
                contact_id={*id}
                on_edit={navigate.reform(View::EditContact)}
                on_back={to(View::Contacts)}
            />
        },
        View::NewContact => html! {
            <ContactFormView
                client={client.clone()}
                on_saved={navigate.reform(|contact: Contact| View::ContactDetail(contact.id))}
                on_cancel={to(View::Contacts)}
            />
        },
        View::EditContact(id) => html! {
            <ContactEditor
                key={*id}
                client={client.clone()}
                id={*id}
                on_saved={navigate.reform(|contact: Contact| View::ContactDetail(contact.id))}
                on_cancel={to(View::ContactDetail(*id))}
            />
        },
        View::Volunteers => html! {
            <VolunteerList
                client={client.clone()}
                on_select={navigate.reform(View::VolunteerDetail)}
                on_new={to(View::NewVolunteer)}
            />
        },
        View::VolunteerDetail(id) => html! {
            <VolunteerDetail
                key={*id}
                client={client.clone()}
                volunteer_id={*id}
                on_edit={navigate.reform(View::EditVolunteer)}
                on_back={to(View::Volunteers)}
            />
        },
        View::NewVolunteer => html! {
            <VolunteerFormView
                client={client.clone()}
                on_saved={navigate.reform(|volunteer: Volunteer| View::VolunteerDetail(volunteer.contact))}
                on_cancel={to(View::Volunteers)}
            />
        },
        View::EditVolunteer(id) => html! {
            <VolunteerEditor
                key={*id}
                client={client.clone()}
                id={*id}
                on_saved={navigate.reform(|volunteer: Volunteer| View::VolunteerDetail(volunteer.contact))}
                on_cancel={to(View::VolunteerDetail(*id))}
            />
        },
        View::Projects => html! {
            <ProjectList
                client={client.clone()}
                display={display.clone()}
                on_select={navigate.reform(View::ProjectDetail)}
                on_new={to(View::NewProject)}
            />
        },
        View::ProjectDetail(id) => html! {
            <ProjectDetailView
                key={*id}
                client={client.clone()}
                display={display.clone()}
                project_id={*id}
                on_edit={navigate.reform(View::EditProject)}
                on_back={to(View::Projects)}
            />
        },
        View::NewProject => html! {
            <ProjectFormView
                client={client.clone()}
                on_saved={navigate.reform(|project: Project| View::ProjectDetail(project.id))}
                on_cancel={to(View::Projects)}
            />
        },
        View::EditProject(id) => html! {
            <ProjectEditor
                key={*id}
                client={client.clone()}
                id={*id}
                on_saved={navigate.reform(|project: Project| View::ProjectDetail(project.id))}
                on_cancel={to(View::ProjectDetail(*id))}
            />
        },
        View::Donations => html! {
            <DonationList
                client={client.clone()}
                display={display.clone()}
                on_select={navigate.reform(View::DonationDetail)}
                on_new={to(View::NewDonation)}
            />
        },
        View::DonationDetail(id) => html! {
            <DonationDetail
                key={*id}
                client={client.clone()}
                display={display.clone()}
                donation_id={*id}
                on_edit={navigate.reform(View::EditDonation)}
                on_back={to(View::Donations)}
            />
        },
        View::NewDonation => html! {
            <DonationFormView
                client={client.clone()}
                on_saved={navigate.reform(|donation: Donation| View::DonationDetail(donation.id))}
            />
        },
        View::EditDonation(id) => html! {
            <DonationEditor
                key={*id}
                client={client.clone()}
                id={*id}
                on_saved={navigate.reform(|donation: Donation| View::DonationDetail(donation.id))}
                on_cancel={to(View::DonationDetail(*id))}
            />
        },
        View::Campaigns => html! {
            <CampaignList
                client={client.clone()}
                display={display.clone()}
                on_select={navigate.reform(View::CampaignDetail)}
                on_new={to(View::NewCampaign)}
            />
        },
        View::CampaignDetail(id) => html! {
            <CampaignDetailView
                key={*id}
                client={client.clone()}
                display={display.clone()}
                campaign_id={*id}
                on_edit={navigate.reform(View::EditCampaign)}
            />
        },
        View::NewCampaign => html! {
            <CampaignFormView
                client={client.clone()}
                on_saved={navigate.reform(|campaign: Campaign| View::CampaignDetail(campaign.id))}
                on_cancel={to(View::Campaigns)}
            />
        },
        View::EditCampaign(id) => html! {
            <CampaignEditor
                key={*id}
                client={client.clone()}
                id={*id}
                on_saved={navigate.reform(|campaign: Campaign| View::CampaignDetail(campaign.id))}
                on_cancel={to(View::CampaignDetail(*id))}
            />
        },
        View::Inventory => html! {
            <InventoryList
                client={client.clone()}
                on_select={navigate.reform(View::InventoryItem)}
                on_new={to(View::NewInventoryItem)}
            />
        },
        View::InventoryItem(id) => html! {
            <InventoryItemDetail
                key={*id}
                client={client.clone()}
                item_id={*id}
                on_edit={navigate.reform(View::EditInventoryItem)}
            />
        },
        View::NewInventoryItem => html! {
            <InventoryItemFormView
                client={client.clone()}
                on_saved={navigate.reform(|item: InventoryItem| View::InventoryItem(item.id))}
                on_cancel={to(View::Inventory)}
            />
        },
        View::EditInventoryItem(id) => html! {
            <InventoryItemEditor
                key={*id}
                client={client.clone()}
                id={*id}
                on_saved={navigate.reform(|item: InventoryItem| View::InventoryItem(item.id))}
                on_cancel={to(View::InventoryItem(*id))}
            />
        },
    };

    html! {
        <>
            <Header
                active={view.section()}
                authenticated={client.is_authenticated()}
                on_navigate={on_section}
            />
            <main class="main">
                <div class="container">
                    {main}
                </div>
            </main>
        </>
    }
}

fn main() {
    let config = ClientConfig::load();
    services::logging::init(&config.log_filter);
    tracing::info!(api = %config.api_base_url, "starting CRM frontend");
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_section_opens_on_its_own_list() {
        for section in Section::ALL {
            assert_eq!(View::from(section).section(), section);
        }
    }

    #[test]
    fn test_sub_views_stay_in_their_section() {
        assert_eq!(View::EditVolunteer(3).section(), Section::Volunteers);
        assert_eq!(View::ProjectDetail(1).section(), Section::Projects);
        assert_eq!(View::NewDonation.section(), Section::Donations);
        assert_eq!(View::EditCampaign(2).section(), Section::Campaigns);
        assert_eq!(View::NewInventoryItem.section(), Section::Inventory);
    }
}
