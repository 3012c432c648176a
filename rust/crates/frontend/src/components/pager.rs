//! Page selector component.

use std::num::NonZeroUsize;

use yew::prelude::*;

/// Properties for Pager component.
#[derive(Properties, PartialEq)]
pub struct PagerProps {
    pub page: NonZeroUsize,
    pub page_count: usize,
    pub on_select: Callback<NonZeroUsize>,
}

/// Numbered page buttons with previous/next.
#[function_component(Pager)]
pub fn pager(props: &PagerProps) -> Html {
    if props.page_count == 0 {
        return html! {};
    }

    let current = props.page.get();
    let select = |target: usize| {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(page) = NonZeroUsize::new(target) {
                on_select.emit(page);
            }
        })
    };

    html! {
        <div class="pager">
            <button
                class="btn btn-secondary"
                disabled={current <= 1}
                onclick={select(current.saturating_sub(1))}
            >
                {"‹"}
            </button>
            { for (1..=props.page_count).map(|n| {
                let class = if n == current { "btn btn-primary" } else { "btn btn-secondary" };
                html! {
                    <button class={class} onclick={select(n)}>{ n.to_string() }</button>
                }
            })}
            <button
                class="btn btn-secondary"
                disabled={current >= props.page_count}
                onclick={select(current + 1)}
            >
                {"›"}
            </button>
        </div>
    }
}
