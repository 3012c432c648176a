//! Student registration and edit wizard.

use core_types::registration::{Field, RegistrationForm, Step};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{Api, log_error};
use crate::app::Route;
use crate::components::Loading;

/// Whether the wizard creates a new student or edits an existing one.
#[derive(Clone, Copy, PartialEq)]
pub enum FormMode {
    Register,
    Edit(i64),
}

/// Properties for StudentFormPage.
#[derive(Properties, PartialEq)]
pub struct StudentFormPageProps {
    pub mode: FormMode,
}

/// Outcome banner after submitting.
#[derive(Clone, PartialEq)]
enum Notice {
    Saved(String),
    Failed(String),
}

/// Student registration / edit wizard page.
#[function_component(StudentFormPage)]
pub fn student_form_page(props: &StudentFormPageProps) -> Html {
    let mode = props.mode;
    let form = use_state(RegistrationForm::new);
    let loading = use_state(|| matches!(mode, FormMode::Edit(_)));
    let submitting = use_state(|| false);
    let notice = use_state(|| None::<Notice>);

    // Pre-fill from the existing student when editing
    {
        let form = form.clone();
        let loading = loading.clone();
        let notice = notice.clone();

        use_effect_with(mode, move |mode| {
            match *mode {
                FormMode::Register => {
                    form.set(RegistrationForm::new());
                    loading.set(false);
                }
                FormMode::Edit(student_id) => {
                    loading.set(true);
                    wasm_bindgen_futures::spawn_local(async move {
                        match Api::default().get_student(student_id).await {
                            Ok(full) => form.set(RegistrationForm::from_full(&full)),
                            Err(e) => {
                                log_error(format!("Failed to fetch student {student_id}: {e}"));
                                notice.set(Some(Notice::Failed(e.to_string())));
                            }
                        }
                        loading.set(false);
                    });
                }
            }
        });
    }

    let on_input = {
        let form = form.clone();
        Callback::from(move |(field, value): (Field, String)| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
        })
    };

    let on_next = {
        let form = form.clone();
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            match next.next() {
                Ok(_) => {
                    notice.set(None);
                    form.set(next);
                }
                Err(e) => notice.set(Some(Notice::Failed(e.to_string()))),
            }
        })
    };

    let on_back = {
        let form = form.clone();
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| {
            let mut prev = (*form).clone();
            prev.back();
            notice.set(None);
            form.set(prev);
        })
    };

    let on_submit = {
        let form = form.clone();
        let notice = notice.clone();
        let submitting = submitting.clone();
        Callback::from(move |_: MouseEvent| {
            let payload = match form.payload() {
                Ok(payload) => payload,
                Err(e) => {
                    notice.set(Some(Notice::Failed(e.to_string())));
                    return;
                }
            };

            let notice = notice.clone();
            let submitting = submitting.clone();
            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let api = Api::default();
                let result = match mode {
                    FormMode::Register => api
                        .create_student(&payload)
                        .await
                        .map(|ack| format!("{} (student_id: {})", ack.message, ack.student_id)),
                    FormMode::Edit(id) => api
                        .update_student(id, &payload)
                        .await
                        .map(|full| format!("Student {} updated", full.student.student_id)),
                };
                match result {
                    Ok(message) => notice.set(Some(Notice::Saved(message))),
                    Err(e) => {
                        log_error(format!("Failed to save student: {e}"));
                        notice.set(Some(Notice::Failed(format!(
                            "Error submitting student data: {e}"
                        ))));
                    }
                }
                submitting.set(false);
            });
        })
    };

    if *loading {
        return html! { <Loading /> };
    }

    let title = match mode {
        FormMode::Register => "Student Registration".to_string(),
        FormMode::Edit(id) => format!("Edit Student {id}"),
    };
    let step = form.step();

    html! {
        <div>
            <h1>{ title }</h1>

            <ol class="wizard-steps">
                { for Step::ALL.iter().map(|s| {
                    let class = if *s == step {
                        "wizard-step active"
                    } else if s.index() < step.index() {
                        "wizard-step done"
                    } else {
                        "wizard-step"
                    };
                    html! { <li class={class}>{ s.title() }</li> }
                })}
            </ol>

            if let Some(n) = notice.as_ref() {
                { render_notice(n, mode) }
            }

            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">{ step.title() }</h2>
                </div>

                if form.is_review() {
                    { render_review(&form) }
                } else {
                    <div class="form-grid">
                        { for step.fields().iter().map(|&field| render_input(&form, field, &on_input)) }
                    </div>
                }

                <div class="wizard-actions">
                    <button class="btn btn-secondary" disabled={step == Step::Student} onclick={on_back}>
                        {"Back"}
                    </button>
                    if form.is_review() {
                        <button class="btn btn-primary" disabled={*submitting} onclick={on_submit}>
                            { if *submitting { "Submitting..." } else { "Submit" } }
                        </button>
                    } else {
                        <button class="btn btn-primary" onclick={on_next}>{"Next"}</button>
                    }
                </div>
            </div>
        </div>
    }
}

fn render_notice(notice: &Notice, mode: FormMode) -> Html {
    match notice {
        Notice::Saved(message) => {
            let back = match mode {
                FormMode::Register => Route::Students,
                FormMode::Edit(id) => Route::StudentView { id },
            };
            html! {
                <div class="card notice success">
                    <p>{ message }</p>
                    <Link<Route> to={back} classes="btn btn-secondary">{"Done"}</Link<Route>>
                </div>
            }
        }
        Notice::Failed(message) => html! {
            <div class="card notice error">{ message }</div>
        },
    }
}

fn render_input(form: &RegistrationForm, field: Field, on_input: &Callback<(Field, String)>) -> Html {
    let oninput = on_input.reform(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        (field, input.value())
    });
    let label = if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    };

    html! {
        <label class="form-field">
            <span>{ label }</span>
            <input
                type={field.kind().input_type()}
                step="any"
                value={form.value(field).to_string()}
                required={field.is_required()}
                {oninput}
            />
        </label>
    }
}

fn render_review(form: &RegistrationForm) -> Html {
    html! {
        <div class="review">
            { for Step::ALL.iter().filter(|s| !s.fields().is_empty()).map(|s| html! {
                <section>
                    <h3>{ s.title() }</h3>
                    { for s.fields().iter().map(|&field| {
                        let value = form.value(field).trim();
                        html! {
                            <div class="label-value">
                                <div class="label">{ field.label() }</div>
                                <div class="value">{ if value.is_empty() { "-" } else { value } }</div>
                            </div>
                        }
                    })}
                </section>
            })}
        </div>
    }
}
