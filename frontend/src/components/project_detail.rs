use crate::components::field_error::{FieldError, FormBanner};
use crate::hooks::use_detail::use_detail;
use crate::hooks::use_form_session::use_form_session;
use crate::hooks::use_record_list::use_record_list;
use crate::services::api::ApiClient;
use crate::services::date_utils;
use domain::detail::load_project_detail;
use domain::forms::project::fields;
use domain::forms::{HoursLogForm, TaskForm, VolunteerAssignmentForm};
use domain::input::format_currency;
use domain::resources::Volunteers;
use domain::{FormSession, ListFilter, RecordId, ViewState};
use shared::{DisplayConfig, ProjectTask, TaskPriority, TaskStatus, Volunteer, VolunteerAssignment, VolunteerHoursLog};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProjectDetailViewProps {
    pub client: ApiClient,
    pub display: DisplayConfig,
    pub project_id: RecordId,
    pub on_edit: Callback<RecordId>,
    pub on_back: Callback<()>,
}

#[function_component(ProjectDetailView)]
pub fn project_detail_view(props: &ProjectDetailViewProps) -> Html {
    let reload = use_state(|| 0u32);
    let client = props.client.clone();
    let state = use_detail(props.project_id, *reload, move |id| async move {
        load_project_detail(&client, id).await
    });
    let volunteers = use_record_list::<Volunteers>(&props.client, ListFilter::new());

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    let detail = match &*state {
        ViewState::Loading => return html! { <div class="loading">{"Loading project..."}</div> },
        ViewState::NotFound => {
            return html! {
                <div class="not-found">
                    <p>{"Project not found."}</p>
                    <button class="btn btn-secondary" onclick={on_back}>{"Back to projects"}</button>
                </div>
            }
        }
        ViewState::Failed(message) => {
            return html! { <div class="form-message error">{format!("Could not load project: {}", message)}</div> }
        }
        ViewState::Ready(detail) => detail.clone(),
    };
    let project = &detail.project;
    let volunteers = volunteers.ready().cloned().unwrap_or_default();

    let on_edit = {
        let on_edit = props.on_edit.clone();
        let id = project.id;
        Callback::from(move |_: MouseEvent| on_edit.emit(id))
    };
    let refresh = {
        let reload = reload.clone();
        Callback::from(move |_: ()| reload.set(*reload + 1))
    };

    let dates = match (&project.start_date, &project.end_date) {
        (Some(start), Some(end)) => format!("{} – {}", date_utils::format_date(start), date_utils::format_date(end)),
        (Some(start), None) => format!("From {}", date_utils::format_date(start)),
        _ => "-".to_string(),
    };

    html! {
        <section class="project-detail">
            <div class="detail-header">
                <button class="btn btn-link" onclick={on_back}>{"← Projects"}</button>
                <h2>{project.name.clone()}</h2>
                <span class="status-badge">
                    {project.status_display.clone().unwrap_or_else(|| project.status.label().to_string())}
                </span>
                <button class="btn btn-secondary" onclick={on_edit}>{"Edit"}</button>
            </div>
            <p class="project-description">{project.description.clone()}</p>

            <dl class="detail-fields">
                <dt>{"Dates"}</dt>
                <dd>{dates}</dd>
                <dt>{"Budget"}</dt>
                <dd>{project.budget.map(|budget| format_currency(budget, &props.display)).unwrap_or_else(|| "-".to_string())}</dd>
                <dt>{"Location"}</dt>
                <dd>{if project.location.is_empty() { "-".to_string() } else { project.location.clone() }}</dd>
            </dl>

            <div class="project-tasks">
                <h3>{"Tasks"}</h3>
                {task_table(&detail.tasks)}
                <AddTaskForm
                    client={props.client.clone()}
                    project_id={project.id}
                    volunteers={volunteers.clone()}
                    on_added={refresh.reform(|_: ProjectTask| ())}
                />
            </div>

            <div class="project-assignments">
                <h3>{"Volunteers"}</h3>
                {assignment_table(&detail.assignments)}
                <AssignVolunteerForm
                    client={props.client.clone()}
                    project_id={project.id}
                    volunteers={volunteers.clone()}
                    on_added={refresh.reform(|_: VolunteerAssignment| ())}
                />
            </div>

            <div class="project-hours">
                <h3>{"Hours Logged"}</h3>
                {hours_table(&detail.hours_logs)}
                <LogHoursForm
                    client={props.client.clone()}
                    project_id={project.id}
                    {volunteers}
                    on_added={refresh.reform(|_: VolunteerHoursLog| ())}
                />
            </div>
        </section>
    }
}

fn task_table(tasks: &[ProjectTask]) -> Html {
    if tasks.is_empty() {
        return html! { <p class="empty">{"No tasks yet."}</p> };
    }
    html! {
        <table class="record-table">
            <thead>
                <tr>
                    <th>{"Task"}</th>
                    <th>{"Status"}</th>
                    <th>{"Priority"}</th>
                    <th>{"Due"}</th>
                    <th>{"Assigned To"}</th>
                </tr>
            </thead>
            <tbody>
                {for tasks.iter().map(|task| html! {
                    <tr key={task.id}>
                        <td>{task.title.clone()}</td>
                        <td>{task.status_display.clone().unwrap_or_else(|| task.status.label().to_string())}</td>
                        <td>{task.priority_display.clone().unwrap_or_else(|| task.priority.label().to_string())}</td>
                        <td>{task.due_date.as_deref().map(date_utils::format_date).unwrap_or_default()}</td>
                        <td>{task.assigned_to_volunteer.as_ref().map(|v| v.full_name.clone()).unwrap_or_else(|| "Unassigned".to_string())}</td>
                    </tr>
                })}
            </tbody>
        </table>
    }
}

fn assignment_table(assignments: &[VolunteerAssignment]) -> Html {
    if assignments.is_empty() {
        return html! { <p class="empty">{"No volunteers assigned yet."}</p> };
    }
    html! {
        <table class="record-table">
            <thead>
                <tr>
                    <th>{"Volunteer"}</th>
                    <th>{"Role"}</th>
                    <th>{"Assigned"}</th>
                </tr>
            </thead>
            <tbody>
                {for assignments.iter().map(|assignment| html! {
                    <tr key={assignment.id}>
                        <td>{assignment.volunteer.as_ref().map(|v| v.full_name.clone()).unwrap_or_default()}</td>
                        <td>{assignment.role.clone()}</td>
                        <td>{assignment.date_assigned.as_deref().map(date_utils::format_date).unwrap_or_default()}</td>
                    </tr>
                })}
            </tbody>
        </table>
    }
}

fn hours_table(logs: &[VolunteerHoursLog]) -> Html {
    if logs.is_empty() {
        return html! { <p class="empty">{"No hours logged yet."}</p> };
    }
    html! {
        <table class="record-table">
            <thead>
                <tr>
                    <th>{"Date"}</th>
                    <th>{"Volunteer"}</th>
                    <th>{"Hours"}</th>
                    <th>{"Description"}</th>
                </tr>
            </thead>
            <tbody>
                {for logs.iter().map(|log| html! {
                    <tr key={log.id}>
                        <td>{log.date.as_deref().map(date_utils::format_date).unwrap_or_default()}</td>
                        <td>{log.volunteer.as_ref().map(|v| v.full_name.clone()).unwrap_or_default()}</td>
                        <td>{log.hours_worked.normalize().to_string()}</td>
                        <td>{log.description.clone()}</td>
                    </tr>
                })}
            </tbody>
        </table>
    }
}

fn volunteer_options(volunteers: &[Volunteer], selected: &str) -> Html {
    html! {
        <>
            <option value="" selected={selected.is_empty()}>{"Select a volunteer"}</option>
            {for volunteers.iter().map(|volunteer| {
                let id = volunteer.contact.to_string();
                html! {
                    <option value={id.clone()} selected={id == selected}>{volunteer.full_name()}</option>
                }
            })}
        </>
    }
}

#[derive(Properties, PartialEq)]
struct ChildFormProps<T: PartialEq> {
    client: ApiClient,
    project_id: RecordId,
    volunteers: Vec<Volunteer>,
    on_added: Callback<T>,
}

#[function_component(AddTaskForm)]
fn add_task_form(props: &ChildFormProps<ProjectTask>) -> Html {
    let handle = use_form_session(|| FormSession::create(TaskForm::default()));
    let form = handle.form().clone();
    let disabled = *handle.submitting;

    let onsubmit = {
        let handle = handle.clone();
        let client = props.client.clone();
        let project_id = props.project_id;
        let on_added = props.on_added.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let client = client.clone();
            let on_added = on_added.clone();
            handle.submit(move |mut session| async move {
                if let Ok(task) = session.add_to(&client, project_id).await {
                    session = FormSession::create(TaskForm::default());
                    on_added.emit(task);
                }
                session
            });
        })
    };

    html! {
        <form class="child-form add-task-form" {onsubmit}>
            <FormBanner error={handle.general_error()} />
            <div class="form-row">
                <div class="form-group">
                    <label for="task_title">{"Title"}</label>
                    <input
                        type="text"
                        id="task_title"
                        value={form.title.clone()}
                        onchange={handle.on_text(fields::TITLE, |form, value| form.title = value)}
                        {disabled}
                    />
                    <FieldError error={handle.error(fields::TITLE)} />
                </div>
                <div class="form-group">
                    <label for="task_due_date">{"Due"}</label>
                    <input
                        type="date"
                        id="task_due_date"
                        value={form.due_date.clone()}
                        onchange={handle.on_text(fields::DUE_DATE, |form, value| form.due_date = value)}
                        {disabled}
                    />
                    <FieldError error={handle.error(fields::DUE_DATE)} />
                </div>
            </div>
            <div class="form-group">
                <label for="task_description">{"Description"}</label>
                <textarea
                    id="task_description"
                    value={form.description.clone()}
                    onchange={handle.on_text(fields::DESCRIPTION, |form, value| form.description = value)}
                    {disabled}
                />
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="task_volunteer">{"Assign To"}</label>
                    <select
                        id="task_volunteer"
                        onchange={handle.on_text(fields::ASSIGNED_TO_VOLUNTEER_ID, |form, value| form.assigned_to_volunteer_id = value)}
                        {disabled}
                    >
                        {volunteer_options(&props.volunteers, &form.assigned_to_volunteer_id)}
                    </select>
                    <FieldError error={handle.error(fields::ASSIGNED_TO_VOLUNTEER_ID)} />
                </div>
                <div class="form-group">
                    <label for="task_status">{"Status"}</label>
                    <select
                        id="task_status"
                        onchange={handle.on_text(fields::STATUS, |form, code| {
                            if let Some(status) = TaskStatus::from_code(&code) {
                                form.status = status;
                            }
                        })}
                        {disabled}
                    >
                        {for TaskStatus::ALL.iter().map(|choice| html! {
                            <option value={choice.code()} selected={*choice == form.status}>{choice.label()}</option>
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label for="task_priority">{"Priority"}</label>
                    <select
                        id="task_priority"
                        onchange={handle.on_text(fields::PRIORITY, |form, code| {
                            if let Some(priority) = TaskPriority::from_code(&code) {
                                form.priority = priority;
                            }
                        })}
                        {disabled}
                    >
                        {for TaskPriority::ALL.iter().map(|choice| html! {
                            <option value={choice.code()} selected={*choice == form.priority}>{choice.label()}</option>
                        })}
                    </select>
                </div>
            </div>
            <button type="submit" class="btn btn-primary" {disabled}>
                {if disabled { "Adding..." } else { "Add Task" }}
            </button>
        </form>
    }
}

#[function_component(AssignVolunteerForm)]
fn assign_volunteer_form(props: &ChildFormProps<VolunteerAssignment>) -> Html {
    let handle = use_form_session(|| FormSession::create(VolunteerAssignmentForm::default()));
    let form = handle.form().clone();
    let disabled = *handle.submitting;

    let onsubmit = {
        let handle = handle.clone();
        let client = props.client.clone();
        let project_id = props.project_id;
        let on_added = props.on_added.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let client = client.clone();
            let on_added = on_added.clone();
            handle.submit(move |mut session| async move {
                if let Ok(assignment) = session.add_to(&client, project_id).await {
                    session = FormSession::create(VolunteerAssignmentForm::default());
                    on_added.emit(assignment);
                }
                session
            });
        })
    };

    html! {
        <form class="child-form assign-volunteer-form" {onsubmit}>
            <FormBanner error={handle.general_error()} />
            <div class="form-row">
                <div class="form-group">
                    <label for="assignment_volunteer">{"Volunteer"}</label>
                    <select
                        id="assignment_volunteer"
                        onchange={handle.on_text(fields::VOLUNTEER_ID, |form, value| form.volunteer_id = value)}
                        {disabled}
                    >
                        {volunteer_options(&props.volunteers, &form.volunteer_id)}
                    </select>
                    <FieldError error={handle.error(fields::VOLUNTEER_ID)} />
                </div>
                <div class="form-group">
                    <label for="assignment_role">{"Role"}</label>
                    <input
                        type="text"
                        id="assignment_role"
                        value={form.role.clone()}
                        onchange={handle.on_text(fields::ROLE, |form, value| form.role = value)}
                        {disabled}
                    />
                    <FieldError error={handle.error(fields::ROLE)} />
                </div>
            </div>
            <button type="submit" class="btn btn-primary" {disabled}>
                {if disabled { "Assigning..." } else { "Assign Volunteer" }}
            </button>
        </form>
    }
}

#[function_component(LogHoursForm)]
fn log_hours_form(props: &ChildFormProps<VolunteerHoursLog>) -> Html {
    let handle = use_form_session(|| FormSession::create(HoursLogForm::new(date_utils::today())));
    let form = handle.form().clone();
    let disabled = *handle.submitting;

    let onsubmit = {
        let handle = handle.clone();
        let client = props.client.clone();
        let project_id = props.project_id;
        let on_added = props.on_added.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let client = client.clone();
            let on_added = on_added.clone();
            handle.submit(move |mut session| async move {
                if let Ok(log) = session.add_to(&client, project_id).await {
                    session = FormSession::create(HoursLogForm::new(date_utils::today()));
                    on_added.emit(log);
                }
                session
            });
        })
    };

    html! {
        <form class="child-form log-hours-form" {onsubmit}>
            <FormBanner error={handle.general_error()} />
            <div class="form-row">
                <div class="form-group">
                    <label for="hours_volunteer">{"Volunteer"}</label>
                    <select
                        id="hours_volunteer"
                        onchange={handle.on_text(fields::VOLUNTEER_ID, |form, value| form.volunteer_id = value)}
                        {disabled}
                    >
                        {volunteer_options(&props.volunteers, &form.volunteer_id)}
                    </select>
                    <FieldError error={handle.error(fields::VOLUNTEER_ID)} />
                </div>
                <div class="form-group">
                    <label for="hours_date">{"Date"}</label>
                    <input
                        type="date"
                        id="hours_date"
                        value={form.date.clone()}
                        onchange={handle.on_text(fields::DATE, |form, value| form.date = value)}
                        {disabled}
                    />
                    <FieldError error={handle.error(fields::DATE)} />
                </div>
                <div class="form-group">
                    <label for="hours_worked">{"Hours"}</label>
                    <input
                        type="number"
                        id="hours_worked"
                        step="0.25"
                        min="0.01"
                        max="999.99"
                        value={form.hours_worked.clone()}
                        onchange={handle.on_text(fields::HOURS_WORKED, |form, value| form.hours_worked = value)}
                        {disabled}
                    />
                    <FieldError error={handle.error(fields::HOURS_WORKED)} />
                </div>
            </div>
            <div class="form-group">
                <label for="hours_description">{"Description"}</label>
                <textarea
                    id="hours_description"
                    value={form.description.clone()}
                    onchange={handle.on_text(fields::DESCRIPTION, |form, value| form.description = value)}
                    {disabled}
                />
            </div>
            <button type="submit" class="btn btn-primary" {disabled}>
                {if disabled { "Logging..." } else { "Log Hours" }}
            </button>
        </form>
    }
}
