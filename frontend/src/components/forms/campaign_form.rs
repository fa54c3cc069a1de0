use crate::components::field_error::{FieldError, FormBanner};
use crate::hooks::use_form_session::use_form_session;
use crate::services::api::ApiClient;
use crate::services::date_utils;
use domain::forms::campaign::fields;
use domain::forms::{CampaignForm, RecordForm};
use domain::{FormMode, FormSession};
use shared::{Campaign, CampaignStatus};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CampaignFormViewProps {
    pub client: ApiClient,
    #[prop_or_default]
    pub initial: Option<Campaign>,
    pub on_saved: Callback<Campaign>,
    pub on_cancel: Callback<()>,
}

#[function_component(CampaignFormView)]
pub fn campaign_form_view(props: &CampaignFormViewProps) -> Html {
    let initial = props.initial.clone();
    let handle = use_form_session(move || match initial {
        Some(campaign) => FormSession::edit_record(campaign.id, CampaignForm::from_record(&campaign)),
        None => FormSession::create(CampaignForm::new(date_utils::today())),
    });
    let form = handle.form().clone();
    let disabled = *handle.submitting;

    let onsubmit = {
        let handle = handle.clone();
        let client = props.client.clone();
        let on_saved = props.on_saved.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let client = client.clone();
            let on_saved = on_saved.clone();
            handle.submit(move |mut session| async move {
                if let Ok(campaign) = session.save(&client).await {
                    on_saved.emit(campaign);
                }
                session
            });
        })
    };
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let title = match handle.session.mode() {
        FormMode::Create => "New Campaign",
        FormMode::Edit(_) => "Edit Campaign",
    };

    html! {
        <section class="campaign-form-section">
            <h2>{title}</h2>
            <FormBanner error={handle.general_error()} />

            <form class="campaign-form" {onsubmit}>
                <div class="form-group">
                    <label for="name">{"Campaign Name"}</label>
                    <input
                        type="text"
                        id="name"
                        value={form.name.clone()}
                        onchange={handle.on_text(fields::NAME, |form, value| form.name = value)}
                        {disabled}
                    />
                    <FieldError error={handle.error(fields::NAME)} />
                </div>
                <div class="form-group">
                    <label for="description">{"Description"}</label>
                    <textarea
                        id="description"
                        value={form.description.clone()}
                        onchange={handle.on_text(fields::DESCRIPTION, |form, value| form.description = value)}
                        {disabled}
                    />
                </div>
                <div class="form-group">
                    <label for="goal_amount">{"Goal Amount"}</label>
                    <input
                        type="number"
                        id="goal_amount"
                        step="0.01"
                        min="0.01"
                        value={form.goal_amount.clone()}
                        onchange={handle.on_text(fields::GOAL_AMOUNT, |form, value| form.goal_amount = value)}
                        {disabled}
                    />
                    <FieldError error={handle.error(fields::GOAL_AMOUNT)} />
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="start_date">{"Start Date"}</label>
                        <input
                            type="date"
                            id="start_date"
                            value={form.start_date.clone()}
                            onchange={handle.on_text(fields::START_DATE, |form, value| form.start_date = value)}
                            {disabled}
                        />
                        <FieldError error={handle.error(fields::START_DATE)} />
                    </div>
                    <div class="form-group">
                        <label for="end_date">{"End Date"}</label>
                        <input
                            type="date"
                            id="end_date"
                            value={form.end_date.clone()}
                            onchange={handle.on_text(fields::END_DATE, |form, value| form.end_date = value)}
                            {disabled}
                        />
                        <FieldError error={handle.error(fields::END_DATE)} />
                    </div>
                </div>
                <div class="form-group">
                    <label for="status">{"Status"}</label>
                    <select
                        id="status"
                        onchange={handle.on_text(fields::STATUS, |form, code| {
                            if let Some(status) = CampaignStatus::from_code(&code) {
                                form.status = status;
                            }
                        })}
                        {disabled}
                    >
                        {for CampaignStatus::ALL.iter().map(|choice| html! {
                            <option value={choice.code()} selected={*choice == form.status}>{choice.label()}</option>
                        })}
                    </select>
                </div>

                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" {disabled}>
                        {if disabled { "Saving..." } else { "Save Campaign" }}
                    </button>
                    <button type="button" class="btn btn-secondary" onclick={on_cancel} {disabled}>{"Cancel"}</button>
                </div>
            </form>
        </section>
    }
}
