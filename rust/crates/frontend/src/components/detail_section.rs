//! Labelled detail card components.

use yew::prelude::*;

/// Properties for DetailSection component.
#[derive(Properties, PartialEq)]
pub struct DetailSectionProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

/// Card grouping related student fields.
#[function_component(DetailSection)]
pub fn detail_section(props: &DetailSectionProps) -> Html {
    html! {
        <div class="card detail-section">
            <div class="card-header">
                <h2 class="card-title">{ &props.title }</h2>
            </div>
            { props.children.clone() }
        </div>
    }
}

/// Properties for LabelValue component.
#[derive(Properties, PartialEq)]
pub struct LabelValueProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub value: Option<String>,
}

/// One field; shows `-` when the value is missing.
#[function_component(LabelValue)]
pub fn label_value(props: &LabelValueProps) -> Html {
    html! {
        <div class="label-value">
            <div class="label">{ &props.label }</div>
            <div class="value">{ props.value.as_deref().unwrap_or("-") }</div>
        </div>
    }
}
