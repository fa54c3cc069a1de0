use crate::components::field_error::{FieldError, FormBanner};
use crate::hooks::use_form_session::use_form_session;
use crate::services::api::ApiClient;
use domain::forms::project::fields;
use domain::forms::{ProjectForm, RecordForm};
use domain::{FormMode, FormSession};
use shared::{Project, ProjectStatus};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProjectFormViewProps {
    pub client: ApiClient,
    #[prop_or_default]
    pub initial: Option<Project>,
    pub on_saved: Callback<Project>,
    pub on_cancel: Callback<()>,
}

#[function_component(ProjectFormView)]
pub fn project_form_view(props: &ProjectFormViewProps) -> Html {
    let initial = props.initial.clone();
    let handle = use_form_session(move || match initial {
        Some(project) => FormSession::edit_record(project.id, ProjectForm::from_record(&project)),
        None => FormSession::create(ProjectForm::default()),
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
                if let Ok(project) = session.save(&client).await {
                    on_saved.emit(project);
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
        FormMode::Create => "New Project",
        FormMode::Edit(_) => "Edit Project",
    };

    html! {
        <section class="project-form-section">
            <h2>{title}</h2>
            <FormBanner error={handle.general_error()} />

            <form class="project-form" {onsubmit}>
                <div class="form-group">
                    <label for="name">{"Project Name"}</label>
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
                            if let Some(status) = ProjectStatus::from_code(&code) {
                                form.status = status;
                            }
                        })}
                        {disabled}
                    >
                        {for ProjectStatus::ALL.iter().map(|choice| html! {
                            <option value={choice.code()} selected={*choice == form.status}>{choice.label()}</option>
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label for="budget">{"Budget"}</label>
                    <input
                        type="number"
                        id="budget"
                        step="0.01"
                        min="0"
                        value={form.budget.clone()}
                        onchange={handle.on_text(fields::BUDGET, |form, value| form.budget = value)}
                        {disabled}
                    />
                    <FieldError error={handle.error(fields::BUDGET)} />
                </div>
                <div class="form-group">
                    <label for="location">{"Location"}</label>
                    <input
                        type="text"
                        id="location"
                        value={form.location.clone()}
                        onchange={handle.on_text(fields::LOCATION, |form, value| form.location = value)}
                        {disabled}
                    />
                </div>

                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" {disabled}>
                        {if disabled { "Saving..." } else { "Save Project" }}
                    </button>
                    <button type="button" class="btn btn-secondary" onclick={on_cancel} {disabled}>{"Cancel"}</button>
                </div>
            </form>
        </section>
    }
}
