use domain::forms::ResourceForm;
use domain::FormSession;
use std::future::Future;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Component-side handle on a [`FormSession`]
#[derive(Clone, PartialEq)]
pub struct FormHandle<F: ResourceForm + PartialEq + 'static> {
    pub session: UseStateHandle<FormSession<F>>,
    pub submitting: UseStateHandle<bool>,
}

impl<F: ResourceForm + PartialEq + 'static> FormHandle<F> {
    pub fn form(&self) -> &F {
        self.session.form()
    }

    pub fn error(&self, field: &str) -> Option<String> {
        self.session.error(field).map(str::to_string)
    }

    pub fn general_error(&self) -> Option<String> {
        self.session.general_error().map(str::to_string)
    }

    /// Apply `change` to the form and clear the error of `field`
    pub fn update(&self, field: &'static str, change: impl FnOnce(&mut F)) {
        let mut next = (*self.session).clone();
        next.edit(field, change);
        self.session.set(next);
    }

    /// `onchange`/`oninput` callback for a text input, select or textarea
    pub fn on_text(&self, field: &'static str, apply: fn(&mut F, String)) -> Callback<Event> {
        let handle = self.clone();
        Callback::from(move |e: Event| {
            let value = event_value(&e);
            handle.update(field, |form| apply(form, value));
        })
    }

    pub fn on_checked(&self, field: &'static str, apply: fn(&mut F, bool)) -> Callback<Event> {
        let handle = self.clone();
        Callback::from(move |e: Event| {
            let checked = e
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
                .map(|input| input.checked())
                .unwrap_or(false);
            handle.update(field, |form| apply(form, checked));
        })
    }

    pub fn reset(&self, form: F) {
        let mut next = (*self.session).clone();
        next.reset(form);
        self.session.set(next);
    }

    /// Run one submission in the background.
    ///
    /// `run` receives a copy of the session and returns it once the request
    /// has finished; ignored while another submission is in flight.
    pub fn submit<Fut>(&self, run: impl FnOnce(FormSession<F>) -> Fut + 'static)
    where
        Fut: Future<Output = FormSession<F>> + 'static,
    {
        if *self.submitting {
            return;
        }
        let session = self.session.clone();
        let submitting = self.submitting.clone();
        submitting.set(true);
        spawn_local(async move {
            let finished = run((*session).clone()).await;
            session.set(finished);
            submitting.set(false);
        });
    }
}

/// Current value of whichever form control fired the event
pub fn event_value(e: &Event) -> String {
    let Some(target) = e.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(textarea) = target.dyn_ref::<HtmlTextAreaElement>() {
        textarea.value()
    } else {
        String::new()
    }
}

#[hook]
pub fn use_form_session<F, I>(init: I) -> FormHandle<F>
where
    F: ResourceForm + PartialEq + 'static,
    I: FnOnce() -> FormSession<F>,
{
    let session = use_state(init);
    let submitting = use_state(|| false);
    FormHandle { session, submitting }
}
