use yew::prelude::*;

/// Top-level areas reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Contacts,
    Volunteers,
    Projects,
    Donations,
    Campaigns,
    Inventory,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Contacts,
        Section::Volunteers,
        Section::Projects,
        Section::Donations,
        Section::Campaigns,
        Section::Inventory,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Contacts => "Contacts",
            Section::Volunteers => "Volunteers",
            Section::Projects => "Projects",
            Section::Donations => "Donations",
            Section::Campaigns => "Campaigns",
            Section::Inventory => "Inventory",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub active: Section,
    pub authenticated: bool,
    pub on_navigate: Callback<Section>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{"NGO CRM"}</h1>
                <nav class="header-nav">
                    {for Section::ALL.iter().map(|section| {
                        let section = *section;
                        let on_navigate = props.on_navigate.clone();
                        let class = if section == props.active { "nav-link active" } else { "nav-link" };
                        html! {
                            <button {class} onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(section))}>
                                {section.label()}
                            </button>
                        }
                    })}
                </nav>
                {if props.authenticated {
                    html! {}
                } else {
                    html! { <span class="auth-warning">{"Not signed in"}</span> }
                }}
            </div>
        </header>
    }
}
