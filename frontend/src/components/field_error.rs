use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FieldErrorProps {
    pub error: Option<String>,
}

#[function_component(FieldError)]
pub fn field_error(props: &FieldErrorProps) -> Html {
    match &props.error {
        Some(message) => html! { <div class="field-error">{message}</div> },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct FormBannerProps {
    pub error: Option<String>,
    #[prop_or_default]
    pub success: Option<String>,
}

/// Form-level error or success message shown above the fields
#[function_component(FormBanner)]
pub fn form_banner(props: &FormBannerProps) -> Html {
    html! {
        <>
            {if let Some(error) = props.error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}
            {if let Some(success) = props.success.as_ref() {
                html! { <div class="form-message success">{success}</div> }
            } else { html! {} }}
        </>
    }
}
