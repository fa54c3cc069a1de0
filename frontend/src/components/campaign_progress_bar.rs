use domain::CampaignProgress;
use shared::DisplayConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CampaignProgressBarProps {
    pub progress: CampaignProgress,
    pub display: DisplayConfig,
}

#[function_component(CampaignProgressBar)]
pub fn campaign_progress_bar(props: &CampaignProgressBarProps) -> Html {
    let progress = &props.progress;
    let width = format!("width: {:.2}%", progress.bar_percent());
    let bar_class = if progress.goal_reached() {
        "progress-fill goal-reached"
    } else {
        "progress-fill"
    };

    html! {
        <div class="campaign-progress">
            <div class="progress-track">
                <div class={bar_class} style={width}></div>
            </div>
            <div class="progress-labels">
                <span class="progress-amounts">{progress.summary_label(&props.display)}</span>
                <span class="progress-percent">{progress.percent_label(&props.display)}</span>
            </div>
        </div>
    }
}
