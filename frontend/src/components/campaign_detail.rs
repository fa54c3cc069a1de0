use crate::components::campaign_progress_bar::CampaignProgressBar;
use crate::components::donation_list::{donor_label, value_label};
use crate::components::forms::donation_form::DonationFormView;
use crate::hooks::use_detail::use_detail;
use crate::services::api::ApiClient;
use crate::services::date_utils;
use domain::detail::load_campaign_detail;
use domain::{RecordId, ViewState};
use shared::{DisplayConfig, Donation};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CampaignDetailViewProps {
    pub client: ApiClient,
    pub display: DisplayConfig,
    pub campaign_id: RecordId,
    pub on_edit: Callback<RecordId>,
}

#[function_component(CampaignDetailView)]
pub fn campaign_detail_view(props: &CampaignDetailViewProps) -> Html {
    let reload = use_state(|| 0u32);
    let client = props.client.clone();
    let state = use_detail(props.campaign_id, *reload, move |id| async move {
        load_campaign_detail(&client, id).await
    });

    let detail = match &*state {
        ViewState::Loading => return html! { <div class="loading">{"Loading campaign..."}</div> },
        ViewState::NotFound => return html! { <div class="not-found">{"Campaign not found."}</div> },
        ViewState::Failed(message) => {
            return html! { <div class="form-message error">{format!("Could not load campaign: {}", message)}</div> }
        }
        ViewState::Ready(detail) => detail.clone(),
    };
    let campaign = &detail.campaign;

    let on_donation_saved = {
        let reload = reload.clone();
        Callback::from(move |_: Donation| reload.set(*reload + 1))
    };

    let on_edit = {
        let on_edit = props.on_edit.clone();
        let id = campaign.id;
        Callback::from(move |_: MouseEvent| on_edit.emit(id))
    };

    let dates = match (&campaign.start_date, &campaign.end_date) {
        (Some(start), Some(end)) => format!("{} – {}", date_utils::format_date(start), date_utils::format_date(end)),
        (Some(start), None) => format!("From {}", date_utils::format_date(start)),
        _ => String::new(),
    };

    html! {
        <section class="campaign-detail">
            <div class="detail-header">
                <h2>{campaign.name.clone()}</h2>
                <span class="status-badge">
                    {campaign.status_display.clone().unwrap_or_else(|| campaign.status.label().to_string())}
                </span>
                <button class="btn btn-secondary" onclick={on_edit}>{"Edit"}</button>
            </div>
            <p class="campaign-dates">{dates}</p>
            <p class="campaign-description">{campaign.description.clone()}</p>

            <CampaignProgressBar progress={detail.progress.clone()} display={props.display.clone()} />

            <h3>{"Donations"}</h3>
            {if detail.donations.is_empty() {
                html! { <p class="empty">{"No donations recorded for this campaign yet."}</p> }
            } else {
                html! {
                    <table class="donation-table">
                        <thead>
                            <tr>
                                <th>{"Date"}</th>
                                <th>{"Donor"}</th>
                                <th>{"Type"}</th>
                                <th>{"Amount / Item"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for detail.donations.iter().map(|donation| donation_row(donation, &props.display))}
                        </tbody>
                    </table>
                }
            }}

            <DonationFormView
                client={props.client.clone()}
                campaign_id={Some(campaign.id)}
                on_saved={on_donation_saved}
            />
        </section>
    }
}

fn donation_row(donation: &Donation, display: &DisplayConfig) -> Html {
    html! {
        <tr key={donation.id}>
            <td>{donation.donation_date.as_deref().map(date_utils::format_date).unwrap_or_default()}</td>
            <td>{donor_label(donation)}</td>
            <td>{donation.donation_type.label()}</td>
            <td>{value_label(donation, display)}</td>
        </tr>
    }
}
