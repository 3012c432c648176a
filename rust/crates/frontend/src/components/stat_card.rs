//! Statistics card component.

use yew::prelude::*;

/// Properties for StatCard component.
#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub value: String,
    pub label: String,
    /// Extra class for the value colour ("positive", "negative").
    #[prop_or_default]
    pub tone: Option<&'static str>,
}

/// Statistics card component.
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="card stat-card">
            <div class={classes!("stat-value", props.tone)}>{ &props.value }</div>
            <div class="stat-label">{ &props.label }</div>
        </div>
    }
}
