//! Student detail page component.

use core_types::FullStudent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{Api, ApiError, log_error};
use crate::app::Route;
use crate::components::{DetailSection, LabelValue, Loading};

/// Properties for StudentViewPage.
#[derive(Properties, PartialEq)]
pub struct StudentViewPageProps {
    pub student_id: i64,
}

fn text<T: ToString>(value: Option<&T>) -> Option<String> {
    value.map(ToString::to_string)
}

/// Student detail page component.
#[function_component(StudentViewPage)]
pub fn student_view_page(props: &StudentViewPageProps) -> Html {
    let student = use_state(|| None::<FullStudent>);
    let loading = use_state(|| true);
    let student_id = props.student_id;

    {
        let student = student.clone();
        let loading = loading.clone();

        use_effect_with(student_id, move |_| {
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match Api::default().get_student(student_id).await {
                    Ok(data) => student.set(Some(data)),
                    Err(ApiError::NotFound(_)) => student.set(None),
                    Err(e) => {
                        log_error(format!("Failed to fetch student {student_id}: {e}"));
                        student.set(None);
                    }
                }
                loading.set(false);
            });
        });
    }

    if *loading {
        return html! { <Loading /> };
    }

    let Some(full) = student.as_ref() else {
        return html! {
            <div class="card">
                <h1>{"Student not found"}</h1>
                <p>{"The requested student could not be found."}</p>
            </div>
        };
    };

    let basic = &full.student;
    let info = full.info.clone().unwrap_or_default();
    let sem = full.sem_info.clone().unwrap_or_default();
    let record = full.record.clone().unwrap_or_default();

    html! {
        <div class="student-details">
            <div class="card-header">
                <h1 class="card-title">{"Student Details"}</h1>
                <Link<Route> to={Route::StudentEdit { id: student_id }} classes="btn btn-primary">
                    {"Edit"}
                </Link<Route>>
            </div>

            <div class="detail-grid">
                <DetailSection title="Basic Information">
                    <LabelValue label="Name" value={Some(basic.student_name.clone())} />
                    <LabelValue label="DOB" value={Some(basic.dob.to_string())} />
                    <LabelValue label="Department" value={basic.department.clone()} />
                    <LabelValue label="Register Number" value={Some(basic.register_num.clone())} />
                    <LabelValue label="University Number" value={Some(basic.university_num.to_string())} />
                </DetailSection>

                <DetailSection title="Additional Info">
                    <LabelValue label="Address" value={info.address.clone()} />
                    <LabelValue label="Blood Group" value={info.blood_grp.clone()} />
                    <LabelValue label="Email" value={info.mail_id.clone()} />
                    <LabelValue label="Phone Number" value={text(info.phone_no.as_ref())} />
                    <LabelValue label="Year" value={text(info.year.as_ref())} />
                </DetailSection>

                <DetailSection title="Academic Info">
                    <LabelValue label="Subject" value={sem.subject.clone()} />
                    <LabelValue label="Semester" value={text(sem.semester.as_ref())} />
                    <LabelValue label="CGPA" value={text(sem.cgpa.as_ref())} />
                    <LabelValue label="Mark" value={text(sem.mark.as_ref())} />
                    <LabelValue label="Grade" value={sem.grade.clone()} />
                    <LabelValue label="Status" value={sem.pass_fail.clone()} />
                </DetailSection>

                <DetailSection title="Family & Record Info">
                    <LabelValue label="Father's Name" value={record.father_name.clone()} />
                    <LabelValue label="Mother's Name" value={record.mother_name.clone()} />
                    <LabelValue label="Father's Occupation" value={record.father_occupation.clone()} />
                    <LabelValue label="Aadhar Number" value={text(record.aadhar_num.as_ref())} />
                    <LabelValue label="10th Mark" value={text(record.tenth_mark.as_ref())} />
                    <LabelValue label="12th Mark" value={text(record.twelfth_mark.as_ref())} />
                    <LabelValue label="Account Number" value={text(record.account_num.as_ref())} />
                    <LabelValue label="Community" value={record.community.clone()} />
                    <LabelValue label="Religion" value={record.religion.clone()} />
                    <LabelValue label="Nationality" value={record.nationality.clone()} />
                </DetailSection>
            </div>
        </div>
    }
}
