//! "Talk to students" help-desk chat page.

use core_types::chat::{Conversation, Speaker};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Chat page component.
#[function_component(TalkPage)]
pub fn talk_page() -> Html {
    let chat = use_state(Conversation::new);
    let question = use_state(String::new);

    let send = {
        let chat = chat.clone();
        let question = question.clone();
        Callback::from(move |()| {
            let mut next = (*chat).clone();
            if next.ask(&question).is_some() {
                chat.set(next);
                question.set(String::new());
            }
        })
    };

    let on_input = {
        let question = question.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            question.set(input.value());
        })
    };

    let on_keydown = {
        let send = send.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                send.emit(());
            }
        })
    };

    html! {
        <div class="chat">
            <h1>{"Talk To Students"}</h1>

            <div class="card chat-log">
                { for chat.messages().iter().map(|msg| {
                    let class = match msg.speaker {
                        Speaker::User => "chat-bubble user",
                        Speaker::Bot => "chat-bubble bot",
                    };
                    html! { <div class={class}>{ &msg.text }</div> }
                })}
            </div>

            <div class="chat-input">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Ask a question..."
                    value={(*question).clone()}
                    oninput={on_input}
                    onkeydown={on_keydown}
                />
                <button class="btn btn-primary" onclick={send.reform(|_: MouseEvent| ())}>
                    {"Send"}
                </button>
            </div>
        </div>
    }
}
