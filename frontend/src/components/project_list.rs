use crate::hooks::use_record_list::use_record_list;
use crate::services::api::ApiClient;
use crate::services::date_utils;
use domain::input::format_currency;
use domain::resources::Projects;
use domain::{ListFilter, RecordId, ViewState};
use shared::DisplayConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProjectListProps {
    pub client: ApiClient,
    pub display: DisplayConfig,
    pub on_select: Callback<RecordId>,
    pub on_new: Callback<()>,
}

#[function_component(ProjectList)]
pub fn project_list(props: &ProjectListProps) -> Html {
    let rows = use_record_list::<Projects>(&props.client, ListFilter::new());
    let on_new = {
        let on_new = props.on_new.clone();
        Callback::from(move |_: MouseEvent| on_new.emit(()))
    };

    let body = match &*rows {
        ViewState::Loading => html! { <p class="loading">{"Loading projects..."}</p> },
        ViewState::NotFound => html! { <p class="empty">{"No projects yet."}</p> },
        ViewState::Failed(message) => html! { <p class="form-message error">{message.clone()}</p> },
        ViewState::Ready(projects) if projects.is_empty() => html! { <p class="empty">{"No projects yet."}</p> },
        ViewState::Ready(projects) => html! {
            <table class="record-table">
                <thead>
                    <tr>
                        <th>{"Project"}</th>
                        <th>{"Status"}</th>
                        <th>{"Starts"}</th>
                        <th>{"Budget"}</th>
                        <th>{"Location"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for projects.iter().map(|project| {
                        let on_select = props.on_select.clone();
                        let id = project.id;
                        html! {
                            <tr key={id} class="clickable" onclick={Callback::from(move |_: MouseEvent| on_select.emit(id))}>
                                <td>{project.name.clone()}</td>
                                <td>{project.status.label()}</td>
                                <td>{project.start_date.as_deref().map(date_utils::format_date).unwrap_or_default()}</td>
                                <td>{project.budget.map(|budget| format_currency(budget, &props.display)).unwrap_or_default()}</td>
                                <td>{project.location.clone()}</td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        },
    };

    html! {
        <section class="project-list">
            <div class="list-header">
                <h2>{"Projects"}</h2>
                <button class="btn btn-primary" onclick={on_new}>{"New Project"}</button>
            </div>
            {body}
        </section>
    }
}
