use crate::components::field_error::{FieldError, FormBanner};
use crate::hooks::use_form_session::use_form_session;
use crate::services::api::ApiClient;
use crate::services::date_utils;
use domain::forms::donation::fields;
use domain::forms::{DonationDetails, DonationForm, RecordForm};
use domain::resources::{Campaigns, Contacts};
use domain::{FormMode, FormSession, ListFilter, Repository};
use shared::{Campaign, Contact, Donation, DonationType, ItemCondition, PaymentMethod};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DonationFormViewProps {
    pub client: ApiClient,
    /// Pre-selected campaign when recording from a campaign page
    #[prop_or_default]
    pub campaign_id: Option<i64>,
    /// Donation being corrected; the form stays on it after saving
    #[prop_or_default]
    pub initial: Option<Donation>,
    pub on_saved: Callback<Donation>,
}

#[function_component(DonationFormView)]
pub fn donation_form_view(props: &DonationFormViewProps) -> Html {
    let campaign_id = props.campaign_id;
    let initial = props.initial.clone();
    let handle = use_form_session(move || {
        if let Some(donation) = initial {
            return FormSession::edit_record(donation.id, DonationForm::from_record(&donation));
        }
        let today = date_utils::today();
        FormSession::create(match campaign_id {
            Some(id) => DonationForm::for_campaign(today, id),
            None => DonationForm::new(today),
        })
    });
    let editing = matches!(handle.session.mode(), FormMode::Edit(_));
    let contacts = use_state(Vec::<Contact>::new);
    let campaigns = use_state(Vec::<Campaign>::new);
    let success = use_state(|| false);

    {
        let client = props.client.clone();
        let contacts = contacts.clone();
        let campaigns = campaigns.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let filter = ListFilter::new();
                match Repository::<Contacts>::list(&client, &filter).await {
                    Ok(list) => contacts.set(list),
                    Err(e) => tracing::warn!(error = %e, "could not load donor contacts"),
                }
                match Repository::<Campaigns>::list(&client, &filter).await {
                    Ok(list) => campaigns.set(list),
                    Err(e) => tracing::warn!(error = %e, "could not load campaigns"),
                }
            });
            || ()
        });
    }

    let form = handle.form().clone();
    let disabled = *handle.submitting;

    let onsubmit = {
        let handle = handle.clone();
        let client = props.client.clone();
        let on_saved = props.on_saved.clone();
        let success = success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let client = client.clone();
            let on_saved = on_saved.clone();
            let success = success.clone();
            success.set(false);
            handle.submit(move |mut session| async move {
                if let Ok(donation) = session.save(&client).await {
                    if matches!(session.mode(), FormMode::Edit(_)) {
                        on_saved.emit(donation);
                        return session;
                    }
                    // Start over for the next gift, keeping the campaign.
                    let form = session.form();
                    let mut next = DonationForm::new(date_utils::today());
                    next.campaign_id = form.campaign_id.clone();
                    session = FormSession::create(next);
                    success.set(true);
                    on_saved.emit(donation);

                    let success = success.clone();
                    spawn_local(async move {
                        gloo::timers::future::TimeoutFuture::new(3000).await;
                        success.set(false);
                    });
                }
                session
            });
        })
    };

    let details = match &form.details {
        DonationDetails::Monetary(monetary) => html! {
            <>
                <div class="form-group">
                    <label for="amount">{"Amount"}</label>
                    <input
                        type="number"
                        id="amount"
                        step="0.01"
                        min="0.01"
                        placeholder="25.00"
                        value={monetary.amount.clone()}
                        onchange={handle.on_text(fields::AMOUNT, |form, value| {
                            if let Some(monetary) = form.monetary_mut() {
                                monetary.amount = value;
                            }
                        })}
                        {disabled}
                    />
                    <FieldError error={handle.error(fields::AMOUNT)} />
                </div>
                <div class="form-group">
                    <label for="payment_method">{"Payment Method"}</label>
                    <select
                        id="payment_method"
                        onchange={handle.on_text(fields::PAYMENT_METHOD, |form, code| {
                            if let Some(monetary) = form.monetary_mut() {
                                monetary.payment_method = PaymentMethod::from_code(&code);
                            }
                        })}
                        {disabled}
                    >
                        <option value="" selected={monetary.payment_method.is_none()}>{"Select a method"}</option>
                        {for PaymentMethod::ALL.iter().map(|choice| html! {
                            <option value={choice.code()} selected={monetary.payment_method == Some(*choice)}>
                                {choice.label()}
                            </option>
                        })}
                    </select>
                    <FieldError error={handle.error(fields::PAYMENT_METHOD)} />
                </div>
            </>
        },
        DonationDetails::InKind(in_kind) => html! {
            <fieldset class="in-kind-details">
                <legend>{"In-Kind Details"}</legend>
                <div class="form-group">
                    <label for="item_name">{"Item Name"}</label>
                    <input
                        type="text"
                        id="item_name"
                        value={in_kind.item_name.clone()}
                        onchange={handle.on_text(fields::ITEM_NAME, |form, value| {
                            if let Some(in_kind) = form.in_kind_mut() {
                                in_kind.item_name = value;
                            }
                        })}
                        {disabled}
                    />
                    <FieldError error={handle.error(fields::ITEM_NAME)} />
                </div>
                <div class="form-group">
                    <label for="item_description">{"Description"}</label>
                    <textarea
                        id="item_description"
                        value={in_kind.description.clone()}
                        onchange={handle.on_text(fields::ITEM_DESCRIPTION, |form, value| {
                            if let Some(in_kind) = form.in_kind_mut() {
                                in_kind.description = value;
                            }
                        })}
                        {disabled}
                    />
                </div>
                <div class="form-group">
                    <label for="quantity">{"Quantity"}</label>
                    <input
                        type="number"
                        id="quantity"
                        step="1"
                        min="1"
                        value={in_kind.quantity.clone()}
                        onchange={handle.on_text(fields::QUANTITY, |form, value| {
                            if let Some(in_kind) = form.in_kind_mut() {
                                in_kind.quantity = value;
                            }
                        })}
                        {disabled}
                    />
                    <FieldError error={handle.error(fields::QUANTITY)} />
                </div>
                <div class="form-group">
                    <label for="estimated_value">{"Estimated Value"}</label>
                    <input
                        type="number"
                        id="estimated_value"
                        step="0.01"
                        min="0"
                        value={in_kind.estimated_value.clone()}
                        onchange={handle.on_text(fields::ESTIMATED_VALUE, |form, value| {
                            if let Some(in_kind) = form.in_kind_mut() {
                                in_kind.estimated_value = value;
                            }
                        })}
                        {disabled}
                    />
                    <FieldError error={handle.error(fields::ESTIMATED_VALUE)} />
                </div>
                <div class="form-group">
                    <label for="condition">{"Condition"}</label>
                    <select
                        id="condition"
                        onchange={handle.on_text(fields::CONDITION, |form, code| {
                            if let (Some(in_kind), Some(condition)) = (form.in_kind_mut(), ItemCondition::from_code(&code)) {
                                in_kind.condition = condition;
                            }
                        })}
                        {disabled}
                    >
                        {for ItemCondition::ALL.iter().map(|choice| html! {
                            <option value={choice.code()} selected={*choice == in_kind.condition}>
                                {choice.label()}
                            </option>
                        })}
                    </select>
                </div>
            </fieldset>
        },
    };

    html! {
        <section class="donation-form-section">
            <h2>{if editing { "Edit Donation" } else { "Record Donation" }}</h2>
            <FormBanner
                error={handle.general_error()}
                success={(*success).then(|| "Donation recorded.".to_string())}
            />

            <form class="donation-form" {onsubmit}>
                <div class="form-group">
                    <label for="donor_contact_id">{"Donor"}</label>
                    <select
                        id="donor_contact_id"
                        onchange={handle.on_text(fields::DONOR_CONTACT_ID, |form, value| form.donor_contact_id = value)}
                        {disabled}
                    >
                        <option value="" selected={form.donor_contact_id.is_empty()}>{"Select a contact"}</option>
                        {for contacts.iter().map(|contact| {
                            let id = contact.id.to_string();
                            html! {
                                <option value={id.clone()} selected={form.donor_contact_id == id}>
                                    {contact.display_name()}
                                </option>
                            }
                        })}
                    </select>
                    <FieldError error={handle.error(fields::DONOR_CONTACT_ID)} />
                </div>

                <div class="form-group">
                    <label for="campaign_id">{"Campaign (optional)"}</label>
                    <select
                        id="campaign_id"
                        onchange={handle.on_text(fields::CAMPAIGN_ID, |form, value| form.campaign_id = value)}
                        {disabled}
                    >
                        <option value="" selected={form.campaign_id.is_empty()}>{"No campaign"}</option>
                        {for campaigns.iter().map(|campaign| {
                            let id = campaign.id.to_string();
                            html! {
                                <option value={id.clone()} selected={form.campaign_id == id}>
                                    {campaign.name.clone()}
                                </option>
                            }
                        })}
                    </select>
                    <FieldError error={handle.error(fields::CAMPAIGN_ID)} />
                </div>

                <div class="form-group">
                    <label for="donation_date">{"Date"}</label>
                    <input
                        type="date"
                        id="donation_date"
                        value={form.donation_date.clone()}
                        onchange={handle.on_text(fields::DONATION_DATE, |form, value| form.donation_date = value)}
                        {disabled}
                    />
                    <FieldError error={handle.error(fields::DONATION_DATE)} />
                </div>

                <div class="form-group">
                    <label for="donation_type">{"Type"}</label>
                    <select
                        id="donation_type"
                        onchange={handle.on_text(fields::DONATION_TYPE, |form, code| {
                            if let Some(donation_type) = DonationType::from_code(&code) {
                                form.set_donation_type(donation_type);
                            }
                        })}
                        {disabled}
                    >
                        {for DonationType::ALL.iter().map(|choice| html! {
                            <option value={choice.code()} selected={*choice == form.donation_type()}>
                                {choice.label()}
                            </option>
                        })}
                    </select>
                </div>

                {details}

                <div class="form-group">
                    <label for="notes">{"Notes"}</label>
                    <textarea
                        id="notes"
                        value={form.notes.clone()}
                        onchange={handle.on_text(fields::NOTES, |form, value| form.notes = value)}
                        {disabled}
                    />
                </div>

                <div class="form-group checkbox">
                    <label>
                        <input
                            type="checkbox"
                            checked={form.is_anonymous}
                            onchange={handle.on_checked(fields::IS_ANONYMOUS, |form, checked| form.is_anonymous = checked)}
                            {disabled}
                        />
                        {" Anonymous donation"}
                    </label>
                </div>

                <button type="submit" class="btn btn-primary" {disabled}>
                    {if disabled { "Saving..." } else if editing { "Save Donation" } else { "Record Donation" }}
                </button>
            </form>
        </section>
    }
}
