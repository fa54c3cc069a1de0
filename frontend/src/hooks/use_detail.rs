use domain::{RecordId, RepositoryError, ViewState};
use std::future::Future;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Load something for `id`, again whenever `id` or `reload` changes
#[hook]
pub fn use_detail<T, L, Fut>(id: RecordId, reload: u32, load: L) -> UseStateHandle<ViewState<T>>
where
    T: 'static,
    L: FnOnce(RecordId) -> Fut + 'static,
    Fut: Future<Output = Result<T, RepositoryError>> + 'static,
{
    let state = use_state(|| ViewState::Loading);
    {
        let state = state.clone();
        use_effect_with((id, reload), move |(id, _)| {
            let id = *id;
            // Keep showing the current record while a reload is in flight.
            if state.ready().is_none() {
                state.set(ViewState::Loading);
            }
            spawn_local(async move {
                let result = load(id).await;
                if let Err(error) = &result {
                    tracing::warn!(id, %error, "detail load failed");
                }
                state.set(ViewState::from_result(result));
            });
            || ()
        });
    }
    state
}
