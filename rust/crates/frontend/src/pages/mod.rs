//! Page components.

mod dashboard;
mod student_form;
mod student_view;
mod students;
mod talk;

pub use dashboard::DashboardPage;
pub use student_form::{FormMode, StudentFormPage};
pub use student_view::StudentViewPage;
pub use students::StudentsPage;
pub use talk::TalkPage;
