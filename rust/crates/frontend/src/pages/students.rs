//! Student list page component.

use std::cell::RefCell;
use std::convert::Infallible;
use std::num::NonZeroUsize;
use std::rc::Rc;

use core_types::StudentBrowser;
use record_browser::{Confirm, LoadState, Navigator as RowNavigator, RecordSource};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{Api, ApiError, log_error};
use crate::app::Route;
use crate::components::{Loading, Pager, StudentRow};

/// Routes row navigation through the app router.
struct RouterNavigator(Navigator);

impl RowNavigator for RouterNavigator {
    fn navigate(&mut self, path: &str) {
        match Route::recognize(path) {
            Some(route) => self.0.push(&route),
            None => log_error(format!("No route for {path}")),
        }
    }
}

/// `window.confirm` prompt.
struct WindowConfirm;

impl Confirm for WindowConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
}

/// Student list page component.
///
/// The browser lives in a shared cell so row actions always see the
/// current collection and in-flight deletes; `redraw` re-renders after
/// each change.
#[function_component(StudentsPage)]
pub fn students_page() -> Html {
    let browser: Rc<RefCell<StudentBrowser>> = use_mut_ref(core_types::student_browser);
    let redraw = use_force_update();
    let navigator = use_navigator();
    let delete_error = use_state(|| None::<String>);

    // Fetch students once per mount
    {
        let browser = browser.clone();
        let redraw = redraw.clone();

        use_effect_with((), move |_| {
            if browser.borrow_mut().begin_fetch() {
                wasm_bindgen_futures::spawn_local(async move {
                    let result = Api::default().fetch_all().await;
                    if let Err(e) = &result {
                        log_error(format!("Failed to fetch students: {e}"));
                    }
                    browser.borrow_mut().finish_fetch(result);
                    redraw.force_update();
                });
            }
        });
    }

    let on_page = {
        let browser = browser.clone();
        let redraw = redraw.clone();
        Callback::from(move |page: NonZeroUsize| {
            browser.borrow_mut().select_page(page);
            redraw.force_update();
        })
    };

    let on_view = {
        let browser = browser.clone();
        let navigator = navigator.clone();
        Callback::from(move |id: i64| {
            if let Some(nav) = navigator.clone() {
                browser.borrow().view_row(&mut RouterNavigator(nav), &id);
            }
        })
    };

    let on_edit = {
        let browser = browser.clone();
        let navigator = navigator.clone();
        Callback::from(move |id: i64| {
            if let Some(nav) = navigator.clone() {
                browser.borrow().edit_row(&mut RouterNavigator(nav), &id);
            }
        })
    };

    let on_delete = {
        let browser = browser.clone();
        let redraw = redraw.clone();
        let delete_error = delete_error.clone();
        Callback::from(move |id: i64| {
            let claimed = browser
                .borrow_mut()
                .begin_delete::<Infallible>(&mut WindowConfirm, &id);
            let id = match claimed {
                Ok(Some(id)) => id,
                Ok(None) => return,
                Err(e) => {
                    log_error(format!("Delete of student {id} refused: {e}"));
                    return;
                }
            };
            redraw.force_update();

            let browser = browser.clone();
            let redraw = redraw.clone();
            let delete_error = delete_error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result: Result<(), ApiError> = Api::default().delete(&id).await;
                browser.borrow_mut().finish_delete(&id, result.is_ok());
                match result {
                    Ok(()) => delete_error.set(None),
                    Err(e) => {
                        log_error(format!("Failed to delete student {id}: {e}"));
                        delete_error.set(Some(format!("Could not delete student {id}: {e}")));
                    }
                }
                redraw.force_update();
            });
        })
    };

    let model = browser.borrow();

    let body = match model.state() {
        LoadState::Loading => html! { <Loading message={"Loading students..."} /> },
        LoadState::Failed => html! {
            <div class="card">
                <p>{"Failed to load students."}</p>
            </div>
        },
        LoadState::Ready => html! {
            <>
                <div class="card table-card">
                    <table class="student-table">
                        <thead>
                            <tr>
                                <th>{"Name"}</th>
                                <th>{"DOB"}</th>
                                <th>{"Department"}</th>
                                <th>{"Register Number"}</th>
                                <th>{"University Number"}</th>
                                <th class="row-actions">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for model.window().iter().map(|student| html! {
                                <StudentRow
                                    key={student.student_id}
                                    student={student.clone()}
                                    deleting={model.is_deleting(&student.student_id)}
                                    on_view={on_view.clone()}
                                    on_edit={on_edit.clone()}
                                    on_delete={on_delete.clone()}
                                />
                            })}
                        </tbody>
                    </table>
                    if model.records().is_empty() {
                        <p class="empty">{"No students registered yet."}</p>
                    }
                </div>
                <Pager page={model.page()} page_count={model.page_count()} on_select={on_page} />
            </>
        },
    };

    html! {
        <div>
            <h1>{"Student List"}</h1>
            if let Some(message) = delete_error.as_ref() {
                <div class="card error">{ message }</div>
            }
            { body }
        </div>
    }
}
