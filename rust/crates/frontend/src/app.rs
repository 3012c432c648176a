//! Main application component with routing.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{
    DashboardPage, FormMode, StudentFormPage, StudentViewPage, StudentsPage, TalkPage,
};

/// Application routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/students")]
    Students,
    #[at("/student-register")]
    Register,
    #[at("/student-view/:id")]
    StudentView { id: i64 },
    #[at("/student-edit/:id")]
    StudentEdit { id: i64 },
    #[at("/talk-to-students")]
    Talk,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Students => html! { <StudentsPage /> },
        Route::Register => html! { <StudentFormPage mode={FormMode::Register} /> },
        Route::StudentView { id } => html! { <StudentViewPage student_id={id} /> },
        Route::StudentEdit { id } => html! { <StudentFormPage mode={FormMode::Edit(id)} /> },
        Route::Talk => html! { <TalkPage /> },
        Route::NotFound => html! {
            <div class="card">
                <h1>{"404 - Page Not Found"}</h1>
                <p>{"The page you're looking for doesn't exist."}</p>
            </div>
        },
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <header class="app-bar">{"Student Management System"}</header>
            <div class="app-container">
                <Sidebar />
                <main class="main-content">
                    <Switch<Route> render={switch} />
                </main>
            </div>
        </BrowserRouter>
    }
}

/// Sidebar navigation component.
#[function_component(Sidebar)]
fn sidebar() -> Html {
    let current = use_route::<Route>();
    let link_class = |route: &Route| {
        if current.as_ref() == Some(route) {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    html! {
        <aside class="sidebar">
            <nav>
                <ul class="nav-links">
                    <li>
                        <Link<Route> to={Route::Dashboard} classes={link_class(&Route::Dashboard)}>
                            {"Dashboard"}
                        </Link<Route>>
                    </li>
                    <li>
                        <Link<Route> to={Route::Students} classes={link_class(&Route::Students)}>
                            {"Students"}
                        </Link<Route>>
                    </li>
                    <li>
                        <Link<Route> to={Route::Register} classes={link_class(&Route::Register)}>
                            {"Register Student"}
                        </Link<Route>>
                    </li>
                    <li>
                        <Link<Route> to={Route::Talk} classes={link_class(&Route::Talk)}>
                            {"Talk To Students"}
                        </Link<Route>>
                    </li>
                </ul>
            </nav>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_talk_route_path() {
        assert_eq!(Route::Talk.to_path(), "/talk-to-students");
        assert!(matches!(Route::recognize("/talk-to-students"), Some(Route::Talk)));
    }

    #[test]
    fn test_row_paths_resolve_to_student_routes() {
        assert!(matches!(
            Route::recognize("/student-view/7"),
            Some(Route::StudentView { id: 7 })
        ));
        assert!(matches!(
            Route::recognize("/student-edit/7"),
            Some(Route::StudentEdit { id: 7 })
        ));
    }
}
