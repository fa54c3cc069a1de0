use crate::hooks::use_record_list::use_record_list;
use crate::services::api::ApiClient;
use crate::services::date_utils;
use domain::input::format_currency;
use domain::resources::Campaigns;
use domain::{ListFilter, RecordId, ViewState};
use shared::DisplayConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CampaignListProps {
    pub client: ApiClient,
    pub display: DisplayConfig,
    pub on_select: Callback<RecordId>,
    pub on_new: Callback<()>,
}

#[function_component(CampaignList)]
pub fn campaign_list(props: &CampaignListProps) -> Html {
    let rows = use_record_list::<Campaigns>(&props.client, ListFilter::new());

    let on_new = {
        let on_new = props.on_new.clone();
        Callback::from(move |_: MouseEvent| on_new.emit(()))
    };

    let body = match &*rows {
        ViewState::Loading => html! { <p class="loading">{"Loading campaigns..."}</p> },
        ViewState::NotFound => html! { <p class="empty">{"No campaigns yet."}</p> },
        ViewState::Failed(message) => html! { <p class="form-message error">{message.clone()}</p> },
        ViewState::Ready(campaigns) if campaigns.is_empty() => html! { <p class="empty">{"No campaigns yet."}</p> },
        ViewState::Ready(campaigns) => html! {
            <table class="record-table">
                <thead>
                    <tr>
                        <th>{"Campaign"}</th>
                        <th>{"Status"}</th>
                        <th>{"Goal"}</th>
                        <th>{"Starts"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for campaigns.iter().map(|campaign| {
                        let on_select = props.on_select.clone();
                        let id = campaign.id;
                        html! {
                            <tr key={id} class="clickable" onclick={Callback::from(move |_: MouseEvent| on_select.emit(id))}>
                                <td>{campaign.name.clone()}</td>
                                <td>{campaign.status.label()}</td>
                                <td>{format_currency(campaign.goal_amount, &props.display)}</td>
                                <td>{campaign.start_date.as_deref().map(date_utils::format_date).unwrap_or_default()}</td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        },
    };

    html! {
        <section class="campaign-list">
            <div class="list-header">
                <h2>{"Campaigns"}</h2>
                <button class="btn btn-primary" onclick={on_new}>{"New Campaign"}</button>
            </div>
            {body}
        </section>
    }
}
