use crate::components::field_error::{FieldError, FormBanner};
use crate::hooks::use_form_session::use_form_session;
use crate::services::api::ApiClient;
use domain::forms::volunteer::fields;
use domain::forms::{RecordForm, VolunteerForm};
use domain::{FormMode, FormSession};
use shared::{Volunteer, VolunteerStatus};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VolunteerFormViewProps {
    pub client: ApiClient,
    /// Volunteer being edited; `None` registers a new one
    #[prop_or_default]
    pub initial: Option<Volunteer>,
    pub on_saved: Callback<Volunteer>,
    pub on_cancel: Callback<()>,
}

#[function_component(VolunteerFormView)]
pub fn volunteer_form_view(props: &VolunteerFormViewProps) -> Html {
    let initial = props.initial.clone();
    let handle = use_form_session(move || match initial {
        Some(volunteer) => FormSession::edit_record(volunteer.contact, VolunteerForm::from_record(&volunteer)),
        None => FormSession::create(VolunteerForm::new()),
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
                if let Ok(volunteer) = session.save(&client).await {
                    on_saved.emit(volunteer);
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
        FormMode::Create => "New Volunteer",
        FormMode::Edit(_) => "Edit Volunteer",
    };

    html! {
        <section class="volunteer-form-section">
            <h2>{title}</h2>
            <FormBanner error={handle.general_error()} />

            <form class="volunteer-form" {onsubmit}>
                <fieldset>
                    <legend>{"Contact"}</legend>
                    <div class="form-group">
                        <label for="first_name">{"First Name"}</label>
                        <input
                            type="text"
                            id="first_name"
                            value={form.contact.first_name.clone()}
                            onchange={handle.on_text(fields::CONTACT_FIRST_NAME, |form, value| form.contact.first_name = value)}
                            {disabled}
                        />
                        <FieldError error={handle.error(fields::CONTACT_FIRST_NAME)} />
                    </div>
                    <div class="form-group">
                        <label for="last_name">{"Last Name"}</label>
                        <input
                            type="text"
                            id="last_name"
                            value={form.contact.last_name.clone()}
                            onchange={handle.on_text(fields::CONTACT_LAST_NAME, |form, value| form.contact.last_name = value)}
                            {disabled}
                        />
                        <FieldError error={handle.error(fields::CONTACT_LAST_NAME)} />
                    </div>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            value={form.contact.email.clone()}
                            onchange={handle.on_text(fields::CONTACT_EMAIL, |form, value| form.contact.email = value)}
                            {disabled}
                        />
                        <FieldError error={handle.error(fields::CONTACT_EMAIL)} />
                    </div>
                    <div class="form-group">
                        <label for="phone">{"Phone"}</label>
                        <input
                            type="tel"
                            id="phone"
                            value={form.contact.phone.clone()}
                            onchange={handle.on_text(fields::CONTACT_PHONE, |form, value| form.contact.phone = value)}
                            {disabled}
                        />
                        <FieldError error={handle.error(fields::CONTACT_PHONE)} />
                    </div>
                    <div class="form-group">
                        <label for="address">{"Address"}</label>
                        <textarea
                            id="address"
                            value={form.contact.address.clone()}
                            onchange={handle.on_text(fields::CONTACT_ADDRESS, |form, value| form.contact.address = value)}
                            {disabled}
                        />
                    </div>
                </fieldset>

                <div class="form-group">
                    <label for="skills">{"Skills"}</label>
                    <input
                        type="text"
                        id="skills"
                        placeholder="First aid, driving, cooking"
                        value={form.skills.clone()}
                        onchange={handle.on_text(fields::SKILLS, |form, value| form.skills = value)}
                        {disabled}
                    />
                    <FieldError error={handle.error(fields::SKILLS)} />
                </div>
                <div class="form-group">
                    <label for="availability">{"Availability"}</label>
                    <textarea
                        id="availability"
                        value={form.availability.clone()}
                        onchange={handle.on_text(fields::AVAILABILITY, |form, value| form.availability = value)}
                        {disabled}
                    />
                </div>
                <div class="form-group">
                    <label for="emergency_contact_name">{"Emergency Contact"}</label>
                    <input
                        type="text"
                        id="emergency_contact_name"
                        value={form.emergency_contact_name.clone()}
                        onchange={handle.on_text(fields::EMERGENCY_CONTACT_NAME, |form, value| form.emergency_contact_name = value)}
                        {disabled}
                    />
                </div>
                <div class="form-group">
                    <label for="emergency_contact_phone">{"Emergency Phone"}</label>
                    <input
                        type="tel"
                        id="emergency_contact_phone"
                        value={form.emergency_contact_phone.clone()}
                        onchange={handle.on_text(fields::EMERGENCY_CONTACT_PHONE, |form, value| form.emergency_contact_phone = value)}
                        {disabled}
                    />
                </div>
                <div class="form-group">
                    <label for="status">{"Status"}</label>
                    <select
                        id="status"
                        onchange={handle.on_text(fields::STATUS, |form, code| {
                            if let Some(status) = VolunteerStatus::from_code(&code) {
                                form.status = status;
                            }
                        })}
                        {disabled}
                    >
                        {for VolunteerStatus::ALL.iter().map(|choice| html! {
                            <option value={choice.code()} selected={*choice == form.status}>{choice.label()}</option>
                        })}
                    </select>
                    <FieldError error={handle.error(fields::STATUS)} />
                </div>

                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" {disabled}>
                        {if disabled { "Saving..." } else { "Save Volunteer" }}
                    </button>
                    <button type="button" class="btn btn-secondary" onclick={on_cancel} {disabled}>{"Cancel"}</button>
                </div>
            </form>
        </section>
    }
}
