//! Core types for the student management console.
//!
//! This crate defines the records exchanged with the Remote Student API
//! and the client-side logic shared by the web frontend and the CLI:
//! - Student schemas (flat list rows and the four-part composite)
//! - `ApiConfig`: the single base URL every remote call goes through
//! - `chat`: the canned "talk to students" replies
//! - `registration`: the multi-step registration form

pub mod chat;
mod config;
pub mod registration;

pub use config::{ApiConfig, BASE_URL_ENV, DEFAULT_BASE_URL};

use chrono::NaiveDate;
use record_browser::{Record, RecordBrowser, RowRoutes};
use serde::{Deserialize, Serialize};

pub use record_browser::PAGE_SIZE;

/// Path prefix of the single-student detail page.
pub const STUDENT_VIEW_PATH: &str = "/student-view";
/// Path prefix of the student edit page.
pub const STUDENT_EDIT_PATH: &str = "/student-edit";
/// Confirmation shown before a student is deleted.
pub const DELETE_STUDENT_PROMPT: &str = "Are you sure you want to delete this student?";

/// Row navigation targets for student listings.
pub fn student_routes() -> RowRoutes {
    RowRoutes::new(STUDENT_VIEW_PATH, STUDENT_EDIT_PATH)
}

/// A record browser over student rows.
pub type StudentBrowser = RecordBrowser<StudentData>;

/// Create a student browser with the student routes and delete prompt.
pub fn student_browser() -> StudentBrowser {
    RecordBrowser::new(student_routes()).with_delete_prompt(DELETE_STUDENT_PROMPT)
}

/// A flat student row as returned by `GET /student_data/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentData {
    /// Server-assigned identifier
    pub student_id: i64,
    pub student_name: String,
    /// Date of birth
    pub dob: NaiveDate,
    #[serde(default)]
    pub department: Option<String>,
    /// College register number (unique)
    pub register_num: String,
    /// University number (unique)
    pub university_num: i64,
}

impl StudentData {
    /// The writable fields of this row, without the server identifier.
    pub fn to_new(&self) -> NewStudent {
        NewStudent {
            student_name: self.student_name.clone(),
            dob: self.dob,
            department: self.department.clone(),
            register_num: self.register_num.clone(),
            university_num: self.university_num,
        }
    }
}

impl Record for StudentData {
    type Id = i64;

    fn record_id(&self) -> i64 {
        self.student_id
    }
}

/// Student fields sent when creating or updating a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub student_name: String,
    pub dob: NaiveDate,
    pub department: Option<String>,
    pub register_num: String,
    pub university_num: i64,
}

/// Contact details ("Additional Info").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_info_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<i64>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub blood_grp: Option<String>,
    #[serde(default)]
    pub mail_id: Option<String>,
    #[serde(default)]
    pub phone_no: Option<i64>,
    #[serde(default)]
    pub year: Option<i32>,
}

/// Semester results ("Academic Info").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemesterInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sem_info_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_info_id: Option<i64>,
    #[serde(default)]
    pub cgpa: Option<f64>,
    #[serde(default)]
    pub semester: Option<i32>,
    /// "Pass" / "Fail" as entered by staff
    #[serde(default)]
    pub pass_fail: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub mark: Option<i32>,
    #[serde(default)]
    pub subject: Option<String>,
}

/// Family and identity details ("Family & Record Info").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_record_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<i64>,
    #[serde(default)]
    pub father_name: Option<String>,
    #[serde(default)]
    pub mother_name: Option<String>,
    #[serde(default)]
    pub father_occupation: Option<String>,
    #[serde(default)]
    pub aadhar_num: Option<i64>,
    #[serde(default)]
    pub tenth_mark: Option<i32>,
    #[serde(default)]
    pub twelfth_mark: Option<i32>,
    #[serde(default)]
    pub account_num: Option<i64>,
    #[serde(default)]
    pub community: Option<String>,
    #[serde(default)]
    pub religion: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
}

/// A student with every related group, as returned by `GET /student_full/{id}`.
///
/// The related groups are optional: a student created with only the basic
/// fields has no contact, semester or family rows yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullStudent {
    pub student: StudentData,
    #[serde(default)]
    pub info: Option<StudentInfo>,
    #[serde(default)]
    pub sem_info: Option<SemesterInfo>,
    #[serde(default)]
    pub record: Option<FamilyRecord>,
}

/// Request body for `POST /student_full/` and `PUT /students/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentPayload {
    pub student: NewStudent,
    pub info: StudentInfo,
    pub sem_info: SemesterInfo,
    pub record: FamilyRecord,
}

/// Acknowledgment returned by `POST /student_full/`.
///
/// When a student with the same register or university number already
/// exists the server returns that student's id and no `student_info_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAck {
    pub student_id: i64,
    #[serde(default)]
    pub student_info_id: Option<i64>,
    pub message: String,
}

/// Plain `{ "message": ... }` acknowledgment (e.g. after a delete).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageAck {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_student() -> StudentData {
        StudentData {
            student_id: 7,
            student_name: "Asha Kumar".to_string(),
            dob: NaiveDate::from_ymd_opt(2003, 4, 12).unwrap(),
            department: Some("CSE".to_string()),
            register_num: "REG-0007".to_string(),
            university_num: 910_007,
        }
    }

    #[test]
    fn test_student_data_parses_list_row() {
        let json = r#"{
            "student_id": 7,
            "student_name": "Asha Kumar",
            "dob": "2003-04-12",
            "department": "CSE",
            "register_num": "REG-0007",
            "university_num": 910007
        }"#;

        let parsed: StudentData = serde_json::from_str(json).unwrap();

        assert_eq!(parsed, sample_student());
    }

    #[test]
    fn test_student_data_department_may_be_null_or_missing() {
        let json = r#"{"student_id":1,"student_name":"A","dob":"2000-01-01","register_num":"R1","university_num":1}"#;
        let parsed: StudentData = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.department, None);

        let json = r#"{"student_id":1,"student_name":"A","dob":"2000-01-01","department":null,"register_num":"R1","university_num":1}"#;
        let parsed: StudentData = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.department, None);
    }

    #[test]
    fn test_full_student_with_null_groups() {
        let json = r#"{
            "student": {"student_id":3,"student_name":"B","dob":"2001-02-03","department":null,"register_num":"R3","university_num":3},
            "info": null,
            "sem_info": null,
            "record": null
        }"#;

        let parsed: FullStudent = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.student.student_id, 3);
        assert!(parsed.info.is_none());
        assert!(parsed.sem_info.is_none());
        assert!(parsed.record.is_none());
    }

    #[test]
    fn test_full_student_with_groups() {
        let json = r#"{
            "student": {"student_id":3,"student_name":"B","dob":"2001-02-03","department":"ECE","register_num":"R3","university_num":3},
            "info": {"student_info_id":11,"student_id":3,"address":"12 Lake Rd","blood_grp":"O+","mail_id":"b@example.com","phone_no":9876543210,"year":2},
            "sem_info": {"sem_info_id":21,"student_id":3,"student_info_id":11,"cgpa":8.4,"semester":3,"pass_fail":"Pass","grade":"A","mark":84,"subject":"Signals"},
            "record": {"student_record_id":31,"student_id":3,"father_name":"C","mother_name":"D","father_occupation":"Farmer","aadhar_num":123412341234,"tenth_mark":480,"twelfth_mark":550,"account_num":5500112233,"community":"BC","religion":"Hindu","nationality":"Indian"}
        }"#;

        let parsed: FullStudent = serde_json::from_str(json).unwrap();

        let info = parsed.info.unwrap();
        assert_eq!(info.phone_no, Some(9_876_543_210));
        let sem = parsed.sem_info.unwrap();
        assert_eq!(sem.subject.as_deref(), Some("Signals"));
        assert!((sem.cgpa.unwrap() - 8.4).abs() < f64::EPSILON);
        assert_eq!(parsed.record.unwrap().aadhar_num, Some(123_412_341_234));
    }

    #[test]
    fn test_payload_omits_server_ids_but_keeps_null_fields() {
        let payload = StudentPayload {
            student: sample_student().to_new(),
            info: StudentInfo::default(),
            sem_info: SemesterInfo::default(),
            record: FamilyRecord::default(),
        };

        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["student"]["dob"], "2003-04-12");
        assert!(value["student"].get("student_id").is_none());
        assert!(value["info"].get("student_info_id").is_none());
        assert!(value["info"]["address"].is_null());
        assert!(value["record"]["nationality"].is_null());
    }

    #[test]
    fn test_create_ack_for_existing_student() {
        let json = r#"{"student_id":4,"message":"Student already exists, using existing student_id"}"#;

        let ack: CreateAck = serde_json::from_str(json).unwrap();

        assert_eq!(ack.student_id, 4);
        assert_eq!(ack.student_info_id, None);
    }

    #[test]
    fn test_student_browser_routes_and_prompt() {
        let browser = student_browser();
        let mut paths = Vec::new();

        struct Collect<'a>(&'a mut Vec<String>);
        impl record_browser::Navigator for Collect<'_> {
            fn navigate(&mut self, path: &str) {
                self.0.push(path.to_string());
            }
        }

        browser.view_row(&mut Collect(&mut paths), &7);
        browser.edit_row(&mut Collect(&mut paths), &7);

        assert_eq!(paths, vec!["/student-view/7", "/student-edit/7"]);
        assert_eq!(browser.delete_prompt(), DELETE_STUDENT_PROMPT);
        assert_eq!(sample_student().record_id(), 7);
        assert_eq!(PAGE_SIZE, 10);
    }
}
