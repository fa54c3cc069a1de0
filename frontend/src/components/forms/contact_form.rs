use crate::components::field_error::{FieldError, FormBanner};
use crate::hooks::use_form_session::use_form_session;
use crate::services::api::ApiClient;
use domain::forms::contact::fields;
use domain::forms::{ContactForm, RecordForm};
use domain::{FormMode, FormSession};
use shared::{Contact, ContactType};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContactFormViewProps {
    pub client: ApiClient,
    /// Contact being edited; `None` creates a new one
    #[prop_or_default]
    pub initial: Option<Contact>,
    pub on_saved: Callback<Contact>,
    pub on_cancel: Callback<()>,
}

#[function_component(ContactFormView)]
pub fn contact_form_view(props: &ContactFormViewProps) -> Html {
    let initial = props.initial.clone();
    let handle = use_form_session(move || match initial {
        Some(contact) => FormSession::edit_record(contact.id, ContactForm::from_record(&contact)),
        None => FormSession::create(ContactForm::new()),
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
                if let Ok(contact) = session.save(&client).await {
                    on_saved.emit(contact);
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
        FormMode::Create => "New Contact",
        FormMode::Edit(_) => "Edit Contact",
    };

    html! {
        <section class="contact-form-section">
            <h2>{title}</h2>
            <FormBanner error={handle.general_error()} />

            <form class="contact-form" {onsubmit}>
                <div class="form-group">
                    <label for="contact_type">{"Contact Type"}</label>
                    <select
                        id="contact_type"
                        onchange={handle.on_text(fields::CONTACT_TYPE, |form, code| {
                            if let Some(contact_type) = ContactType::from_code(&code) {
                                form.set_contact_type(contact_type);
                            }
                        })}
                        {disabled}
                    >
                        {for ContactType::ALL.iter().map(|choice| html! {
                            <option value={choice.code()} selected={*choice == form.contact_type}>
                                {choice.label()}
                            </option>
                        })}
                    </select>
                </div>

                <div class="form-group">
                    <label for="first_name">{form.first_name_label()}</label>
                    <input
                        type="text"
                        id="first_name"
                        value={form.first_name.clone()}
                        onchange={handle.on_text(fields::FIRST_NAME, |form, value| form.first_name = value)}
                        {disabled}
                    />
                    <FieldError error={handle.error(fields::FIRST_NAME)} />
                </div>

                {if form.shows_last_name() {
                    html! {
                        <div class="form-group">
                            <label for="last_name">{"Last Name"}</label>
                            <input
                                type="text"
                                id="last_name"
                                value={form.last_name.clone()}
                                onchange={handle.on_text(fields::LAST_NAME, |form, value| form.last_name = value)}
                                {disabled}
                            />
                            <FieldError error={handle.error(fields::LAST_NAME)} />
                        </div>
                    }
                } else { html! {} }}

                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input
                        type="email"
                        id="email"
                        value={form.email.clone()}
                        onchange={handle.on_text(fields::EMAIL, |form, value| form.email = value)}
                        {disabled}
                    />
                    <FieldError error={handle.error(fields::EMAIL)} />
                </div>

                <div class="form-group">
                    <label for="phone">{"Phone"}</label>
                    <input
                        type="tel"
                        id="phone"
                        value={form.phone.clone()}
                        onchange={handle.on_text(fields::PHONE, |form, value| form.phone = value)}
                        {disabled}
                    />
                    <FieldError error={handle.error(fields::PHONE)} />
                </div>

                <div class="form-group">
                    <label for="address">{"Address"}</label>
                    <textarea
                        id="address"
                        value={form.address.clone()}
                        onchange={handle.on_text(fields::ADDRESS, |form, value| form.address = value)}
                        {disabled}
                    />
                    <FieldError error={handle.error(fields::ADDRESS)} />
                </div>

                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" {disabled}>
                        {if disabled { "Saving..." } else { "Save Contact" }}
                    </button>
                    <button type="button" class="btn btn-secondary" onclick={on_cancel} {disabled}>
                        {"Cancel"}
                    </button>
                </div>
            </form>
        </section>
    }
}
