use crate::components::donation_list::{donor_label, value_label};
use crate::hooks::use_detail::use_detail;
use crate::services::api::ApiClient;
use crate::services::date_utils;
use domain::input::format_currency;
use domain::resources::Donations;
use domain::{RecordId, Repository, ViewState};
use shared::DisplayConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DonationDetailProps {
    pub client: ApiClient,
    pub display: DisplayConfig,
    pub donation_id: RecordId,
    pub on_edit: Callback<RecordId>,
    pub on_back: Callback<()>,
}

#[function_component(DonationDetail)]
pub fn donation_detail(props: &DonationDetailProps) -> Html {
    let client = props.client.clone();
    let state = use_detail(props.donation_id, 0, move |id| async move {
        Repository::<Donations>::get(&client, id).await
    });

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    let donation = match &*state {
        ViewState::Loading => return html! { <div class="loading">{"Loading donation..."}</div> },
        ViewState::NotFound => {
            return html! {
                <div class="not-found">
                    <p>{"Donation not found."}</p>
                    <button class="btn btn-secondary" onclick={on_back}>{"Back to donations"}</button>
                </div>
            }
        }
        ViewState::Failed(message) => {
            return html! { <div class="form-message error">{format!("Could not load donation: {}", message)}</div> }
        }
        ViewState::Ready(donation) => donation.clone(),
    };

    let on_edit = {
        let on_edit = props.on_edit.clone();
        let id = donation.id;
        Callback::from(move |_: MouseEvent| on_edit.emit(id))
    };

    html! {
        <section class="donation-detail">
            <div class="detail-header">
                <button class="btn btn-link" onclick={on_back}>{"← Donations"}</button>
                <h2>{format!("Donation #{}", donation.id)}</h2>
                <button class="btn btn-secondary" onclick={on_edit}>{"Edit"}</button>
            </div>

            <dl class="detail-fields">
                <dt>{"Donor"}</dt>
                <dd>{donor_label(&donation)}</dd>
                <dt>{"Date"}</dt>
                <dd>{donation.donation_date.as_deref().map(date_utils::format_date).unwrap_or_else(|| "-".to_string())}</dd>
                <dt>{"Type"}</dt>
                <dd>{donation.donation_type_display.clone().unwrap_or_else(|| donation.donation_type.label().to_string())}</dd>
                <dt>{"Value"}</dt>
                <dd>{value_label(&donation, &props.display)}</dd>
                <dt>{"Campaign"}</dt>
                <dd>{donation.campaign.as_ref().map(|campaign| campaign.name.clone()).unwrap_or_else(|| "-".to_string())}</dd>
                {if let Some(method) = donation.payment_method {
                    html! {
                        <>
                            <dt>{"Payment Method"}</dt>
                            <dd>{donation.payment_method_display.clone().unwrap_or_else(|| method.label().to_string())}</dd>
                        </>
                    }
                } else { html! {} }}
                {if let Some(details) = &donation.in_kind_details {
                    html! {
                        <>
                            <dt>{"Condition"}</dt>
                            <dd>{details.condition_display.clone().unwrap_or_else(|| details.condition.label().to_string())}</dd>
                            <dt>{"Estimated Value"}</dt>
                            <dd>{details.estimated_value.map(|value| format_currency(value, &props.display)).unwrap_or_else(|| "-".to_string())}</dd>
                            <dt>{"Description"}</dt>
                            <dd>{if details.description.is_empty() { "-".to_string() } else { details.description.clone() }}</dd>
                        </>
                    }
                } else { html! {} }}
                <dt>{"Notes"}</dt>
                <dd>{if donation.notes.is_empty() { "-".to_string() } else { donation.notes.clone() }}</dd>
            </dl>
        </section>
    }
}
