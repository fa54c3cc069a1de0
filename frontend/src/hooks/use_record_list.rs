use crate::services::api::ApiClient;
use domain::{ListFilter, Repository, Resource, ViewState};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Rows of `R` matching `filter`, fetched again whenever the filter changes
#[hook]
pub fn use_record_list<R>(client: &ApiClient, filter: ListFilter) -> UseStateHandle<ViewState<Vec<R::Record>>>
where
    R: Resource,
{
    let state = use_state(|| ViewState::Loading);
    {
        let state = state.clone();
        let client = client.clone();
        use_effect_with(filter, move |filter| {
            let filter = filter.clone();
            spawn_local(async move {
                let result = Repository::<R>::list(&client, &filter).await;
                match &result {
                    Ok(rows) => tracing::debug!(resource = R::LABEL, count = rows.len(), "list loaded"),
                    Err(error) => tracing::warn!(resource = R::LABEL, %error, "list load failed"),
                }
                state.set(ViewState::from_result(result));
            });
            || ()
        });
    }
    state
}
