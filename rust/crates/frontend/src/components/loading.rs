//! Loading spinner component.

use yew::prelude::*;

/// Properties for Loading component.
#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub message: Option<AttrValue>,
}

/// Loading spinner component.
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="loading">
            <div class="spinner"></div>
            if let Some(message) = &props.message {
                <p class="loading-message">{ message }</p>
            }
        </div>
    }
}
