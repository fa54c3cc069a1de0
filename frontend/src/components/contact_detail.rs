use crate::components::field_error::{FieldError, FormBanner};
use crate::hooks::use_detail::use_detail;
use crate::hooks::use_form_session::use_form_session;
use crate::services::api::ApiClient;
use crate::services::date_utils;
use domain::detail::load_then_children;
use domain::forms::contact::fields;
use domain::forms::ContactNoteForm;
use domain::resources::ContactNotes;
use domain::{FormSession, RecordId, ViewState};
use shared::{ContactNote, ContactType};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContactDetailProps {
    pub client: ApiClient,
    pub contact_id: RecordId,
    pub on_edit: Callback<RecordId>,
    pub on_back: Callback<()>,
}

#[function_component(ContactDetail)]
pub fn contact_detail(props: &ContactDetailProps) -> Html {
    let reload = use_state(|| 0u32);
    let client = props.client.clone();
    let state = use_detail(props.contact_id, *reload, move |id| async move {
        load_then_children::<ContactNotes, _>(&client, id).await
    });

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    let loaded = match &*state {
        ViewState::Loading => return html! { <div class="loading">{"Loading contact..."}</div> },
        ViewState::NotFound => {
            return html! {
                <div class="not-found">
                    <p>{"Contact not found."}</p>
                    <button class="btn btn-secondary" onclick={on_back}>{"Back to contacts"}</button>
                </div>
            }
        }
        ViewState::Failed(message) => {
            return html! { <div class="form-message error">{format!("Could not load contact: {}", message)}</div> }
        }
        ViewState::Ready(loaded) => loaded.clone(),
    };
    let contact = loaded.record;

    let on_edit = {
        let on_edit = props.on_edit.clone();
        let id = contact.id;
        Callback::from(move |_: MouseEvent| on_edit.emit(id))
    };
    let on_note_added = {
        let reload = reload.clone();
        Callback::from(move |_: ContactNote| reload.set(*reload + 1))
    };

    html! {
        <section class="contact-detail">
            <div class="detail-header">
                <button class="btn btn-link" onclick={on_back}>{"← Contacts"}</button>
                <h2>{contact.display_name()}</h2>
                <button class="btn btn-secondary" onclick={on_edit}>{"Edit"}</button>
            </div>

            <dl class="detail-fields">
                <dt>{"Type"}</dt>
                <dd>{contact.contact_type_display.clone().unwrap_or_else(|| contact.contact_type.label().to_string())}</dd>
                {if contact.contact_type == ContactType::Individual && !contact.last_name.is_empty() {
                    html! { <><dt>{"Last Name"}</dt><dd>{contact.last_name.clone()}</dd></> }
                } else { html! {} }}
                <dt>{"Email"}</dt>
                <dd>{contact.email.clone().unwrap_or_else(|| "-".to_string())}</dd>
                <dt>{"Phone"}</dt>
                <dd>{if contact.phone.is_empty() { "-".to_string() } else { contact.phone.clone() }}</dd>
                <dt>{"Address"}</dt>
                <dd>{if contact.address.is_empty() { "-".to_string() } else { contact.address.clone() }}</dd>
            </dl>

            <div class="contact-notes">
                <h3>{"Notes"}</h3>
                {if loaded.children.is_empty() {
                    html! { <p class="empty">{"No notes yet."}</p> }
                } else {
                    html! {
                        <ul class="note-list">
                            {for loaded.children.iter().map(|note| html! {
                                <li key={note.id}>
                                    <p>{note.note_text.clone()}</p>
                                    <small>
                                        {note.created_by.as_ref().map(|user| user.username.clone()).unwrap_or_default()}
                                        {" "}
                                        {note.created_at.as_deref().map(date_utils::format_timestamp).unwrap_or_default()}
                                    </small>
                                </li>
                            })}
                        </ul>
                    }
                }}
                <AddNoteForm client={props.client.clone()} contact_id={contact.id} on_added={on_note_added} />
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct AddNoteFormProps {
    client: ApiClient,
    contact_id: RecordId,
    on_added: Callback<ContactNote>,
}

#[function_component(AddNoteForm)]
fn add_note_form(props: &AddNoteFormProps) -> Html {
    let handle = use_form_session(|| FormSession::create(ContactNoteForm::default()));
    let disabled = *handle.submitting;

    let onsubmit = {
        let handle = handle.clone();
        let client = props.client.clone();
        let contact_id = props.contact_id;
        let on_added = props.on_added.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let client = client.clone();
            let on_added = on_added.clone();
            handle.submit(move |mut session| async move {
                if let Ok(note) = session.add_to(&client, contact_id).await {
                    session = FormSession::create(ContactNoteForm::default());
                    on_added.emit(note);
                }
                session
            });
        })
    };

    html! {
        <form class="add-note-form" {onsubmit}>
            <FormBanner error={handle.general_error()} />
            <textarea
                placeholder="Add a note..."
                value={handle.form().note_text.clone()}
                onchange={handle.on_text(fields::NOTE_TEXT, |form, value| form.note_text = value)}
                {disabled}
            />
            <FieldError error={handle.error(fields::NOTE_TEXT)} />
            <button type="submit" class="btn btn-primary" {disabled}>
                {if disabled { "Adding..." } else { "Add Note" }}
            </button>
        </form>
    }
}
