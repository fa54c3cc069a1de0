use crate::hooks::use_record_list::use_record_list;
use crate::services::api::ApiClient;
use crate::services::date_utils;
use domain::input::format_currency;
use domain::resources::Donations;
use domain::{ListFilter, RecordId, ViewState};
use shared::{DisplayConfig, Donation, DonationType};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DonationListProps {
    pub client: ApiClient,
    pub display: DisplayConfig,
    pub on_select: Callback<RecordId>,
    pub on_new: Callback<()>,
}

#[function_component(DonationList)]
pub fn donation_list(props: &DonationListProps) -> Html {
    let rows = use_record_list::<Donations>(&props.client, ListFilter::new());
    let on_new = {
        let on_new = props.on_new.clone();
        Callback::from(move |_: MouseEvent| on_new.emit(()))
    };

    let body = match &*rows {
        ViewState::Loading => html! { <p class="loading">{"Loading donations..."}</p> },
        ViewState::NotFound => html! { <p class="empty">{"No donations recorded yet."}</p> },
        ViewState::Failed(message) => html! { <p class="form-message error">{message.clone()}</p> },
        ViewState::Ready(donations) if donations.is_empty() => {
            html! { <p class="empty">{"No donations recorded yet."}</p> }
        }
        ViewState::Ready(donations) => html! {
            <table class="record-table">
                <thead>
                    <tr>
                        <th>{"Date"}</th>
                        <th>{"Donor"}</th>
                        <th>{"Type"}</th>
                        <th>{"Amount / Item"}</th>
                        <th>{"Campaign"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for donations.iter().map(|donation| {
                        let on_select = props.on_select.clone();
                        let id = donation.id;
                        html! {
                            <tr key={id} class="clickable" onclick={Callback::from(move |_: MouseEvent| on_select.emit(id))}>
                                <td>{donation.donation_date.as_deref().map(date_utils::format_date).unwrap_or_default()}</td>
                                <td>{donor_label(donation)}</td>
                                <td>{donation.donation_type.label()}</td>
                                <td>{value_label(donation, &props.display)}</td>
                                <td>{donation.campaign.as_ref().map(|campaign| campaign.name.clone()).unwrap_or_default()}</td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        },
    };

    html! {
        <section class="donation-list">
            <div class="list-header">
                <h2>{"Donations"}</h2>
                <button class="btn btn-primary" onclick={on_new}>{"Record Donation"}</button>
            </div>
            {body}
        </section>
    }
}

/// Donor name, hidden for anonymous gifts
pub fn donor_label(donation: &Donation) -> String {
    if donation.is_anonymous {
        return "Anonymous".to_string();
    }
    donation
        .donor_contact
        .as_ref()
        .map(|contact| contact.display_name())
        .unwrap_or_else(|| "-".to_string())
}

/// Amount for money, quantity and item for goods
pub fn value_label(donation: &Donation, display: &DisplayConfig) -> String {
    match donation.donation_type {
        DonationType::Monetary => donation
            .amount
            .map(|amount| format_currency(amount, display))
            .unwrap_or_else(|| "-".to_string()),
        DonationType::InKind => donation
            .in_kind_details
            .as_ref()
            .map(|details| format!("{} × {}", details.quantity, details.item_name))
            .unwrap_or_else(|| "-".to_string()),
    }
}
