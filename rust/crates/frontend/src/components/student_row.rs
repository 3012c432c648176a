//! Student table row component.

use core_types::StudentData;
use yew::prelude::*;

/// Properties for StudentRow component.
#[derive(Properties, PartialEq)]
pub struct StudentRowProps {
    pub student: StudentData,
    /// A delete for this row is awaiting the server.
    #[prop_or_default]
    pub deleting: bool,
    pub on_view: Callback<i64>,
    pub on_edit: Callback<i64>,
    pub on_delete: Callback<i64>,
}

/// One student in the list table, with view/edit/delete actions.
#[function_component(StudentRow)]
pub fn student_row(props: &StudentRowProps) -> Html {
    let student = &props.student;
    let id = student.student_id;

    html! {
        <tr class="student-row">
            <td>{ &student.student_name }</td>
            <td>{ student.dob.to_string() }</td>
            <td>{ student.department.as_deref().unwrap_or("-") }</td>
            <td>{ &student.register_num }</td>
            <td>{ student.university_num.to_string() }</td>
            <td class="row-actions">
                <button class="btn btn-icon" title="View" onclick={props.on_view.reform(move |_| id)}>
                    {"View"}
                </button>
                <button class="btn btn-icon" title="Edit" onclick={props.on_edit.reform(move |_| id)}>
                    {"Edit"}
                </button>
                <button
                    class="btn btn-icon btn-danger"
                    title="Delete"
                    disabled={props.deleting}
                    onclick={props.on_delete.reform(move |_| id)}
                >
                    { if props.deleting { "Deleting..." } else { "Delete" } }
                </button>
            </td>
        </tr>
    }
}
