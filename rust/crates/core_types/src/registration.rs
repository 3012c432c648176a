//! Multi-step student registration form.
//!
//! The form walks through four input steps followed by a review step.
//! Values are kept as the raw strings typed by the user and only parsed
//! when a step is validated or the final payload is built.

use std::collections::HashMap;

use chrono::NaiveDate;
use thiserror::Error;

use crate::{FamilyRecord, FullStudent, NewStudent, SemesterInfo, StudentInfo, StudentPayload};

/// Date format used by `<input type="date">` and the API.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors from form validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{} is required", .0.label())]
    Missing(Field),

    #[error("{} has an invalid value: {value}", .field.label())]
    Invalid { field: Field, value: String },
}

impl FormError {
    /// The field the error refers to.
    pub fn field(&self) -> Field {
        match self {
            Self::Missing(field) | Self::Invalid { field, .. } => *field,
        }
    }
}

/// Result type for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

/// Wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Student,
    Contact,
    Academic,
    Family,
    Review,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::Student,
        Step::Contact,
        Step::Academic,
        Step::Family,
        Step::Review,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Step::Student => "Basic Information",
            Step::Contact => "Additional Info",
            Step::Academic => "Academic Info",
            Step::Family => "Family & Record Info",
            Step::Review => "Review",
        }
    }

    /// Zero-based position in the wizard.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Input fields collected on this step (empty for review).
    pub fn fields(self) -> &'static [Field] {
        use Field::*;
        match self {
            Step::Student => &[StudentName, Dob, Department, RegisterNum, UniversityNum],
            Step::Contact => &[Address, BloodGroup, MailId, PhoneNo, Year],
            Step::Academic => &[Subject, Semester, Cgpa, Mark, Grade, PassFail],
            Step::Family => &[
                FatherName,
                MotherName,
                FatherOccupation,
                AadharNum,
                TenthMark,
                TwelfthMark,
                AccountNum,
                Community,
                Religion,
                Nationality,
            ],
            Step::Review => &[],
        }
    }

    fn next(self) -> Option<Step> {
        Self::ALL.get(self.index() + 1).copied()
    }

    fn prev(self) -> Option<Step> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }
}

/// How a field's text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    Email,
    /// 32-bit whole number (years, semesters, marks).
    Integer,
    /// 64-bit whole number (registration, phone and account numbers).
    Long,
    Decimal,
}

impl FieldKind {
    /// HTML input type for this kind.
    pub fn input_type(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Date => "date",
            FieldKind::Email => "email",
            FieldKind::Integer | FieldKind::Long | FieldKind::Decimal => "number",
        }
    }
}

/// Every input field in the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    StudentName,
    Dob,
    Department,
    RegisterNum,
    UniversityNum,
    Address,
    BloodGroup,
    MailId,
    PhoneNo,
    Year,
    Cgpa,
    Semester,
    PassFail,
    Grade,
    Mark,
    Subject,
    FatherName,
    MotherName,
    FatherOccupation,
    AadharNum,
    TenthMark,
    TwelfthMark,
    AccountNum,
    Community,
    Religion,
    Nationality,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::StudentName => "Name",
            Field::Dob => "DOB",
            Field::Department => "Department",
            Field::RegisterNum => "Register Number",
            Field::UniversityNum => "University Number",
            Field::Address => "Address",
            Field::BloodGroup => "Blood Group",
            Field::MailId => "Email",
            Field::PhoneNo => "Phone Number",
            Field::Year => "Year",
            Field::Cgpa => "CGPA",
            Field::Semester => "Semester",
            Field::PassFail => "Status",
            Field::Grade => "Grade",
            Field::Mark => "Mark",
            Field::Subject => "Subject",
            Field::FatherName => "Father's Name",
            Field::MotherName => "Mother's Name",
            Field::FatherOccupation => "Father's Occupation",
            Field::AadharNum => "Aadhar Number",
            Field::TenthMark => "10th Mark",
            Field::TwelfthMark => "12th Mark",
            Field::AccountNum => "Account Number",
            Field::Community => "Community",
            Field::Religion => "Religion",
            Field::Nationality => "Nationality",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::Dob => FieldKind::Date,
            Field::MailId => FieldKind::Email,
            Field::Cgpa => FieldKind::Decimal,
            Field::Year
            | Field::Semester
            | Field::Mark
            | Field::TenthMark
            | Field::TwelfthMark => FieldKind::Integer,
            Field::UniversityNum | Field::PhoneNo | Field::AadharNum | Field::AccountNum => {
                FieldKind::Long
            }
            _ => FieldKind::Text,
        }
    }

    /// Required fields block the step they belong to.
    pub fn is_required(self) -> bool {
        matches!(
            self,
            Field::StudentName
                | Field::Dob
                | Field::Department
                | Field::RegisterNum
                | Field::UniversityNum
        )
    }

    /// Step on which the field is collected.
    pub fn step(self) -> Step {
        Step::ALL
            .into_iter()
            .find(|step| step.fields().contains(&self))
            .unwrap_or(Step::Review)
    }

    fn is_well_formed(self, value: &str) -> bool {
        match self.kind() {
            FieldKind::Text => true,
            FieldKind::Date => NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok(),
            FieldKind::Email => value
                .split_once('@')
                .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.')),
            FieldKind::Integer => value.parse::<i32>().is_ok(),
            FieldKind::Long => value.parse::<i64>().is_ok(),
            FieldKind::Decimal => value.parse::<f64>().is_ok_and(f64::is_finite),
        }
    }
}

/// State of the registration wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    step: Step,
    values: HashMap<Field, String>,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationForm {
    /// Create an empty form on the first step.
    pub fn new() -> Self {
        Self {
            step: Step::Student,
            values: HashMap::new(),
        }
    }

    /// Create a form pre-filled from an existing student, for editing.
    pub fn from_full(full: &FullStudent) -> Self {
        let mut form = Self::new();
        let student = &full.student;

        form.set(Field::StudentName, &student.student_name);
        form.set(Field::Dob, student.dob.format(DATE_FORMAT).to_string());
        form.set_opt(Field::Department, student.department.as_ref());
        form.set(Field::RegisterNum, &student.register_num);
        form.set(Field::UniversityNum, student.university_num.to_string());

        if let Some(info) = &full.info {
            form.set_opt(Field::Address, info.address.as_ref());
            form.set_opt(Field::BloodGroup, info.blood_grp.as_ref());
            form.set_opt(Field::MailId, info.mail_id.as_ref());
            form.set_opt(Field::PhoneNo, info.phone_no.as_ref());
            form.set_opt(Field::Year, info.year.as_ref());
        }

        if let Some(sem) = &full.sem_info {
            form.set_opt(Field::Cgpa, sem.cgpa.as_ref());
            form.set_opt(Field::Semester, sem.semester.as_ref());
            form.set_opt(Field::PassFail, sem.pass_fail.as_ref());
            form.set_opt(Field::Grade, sem.grade.as_ref());
            form.set_opt(Field::Mark, sem.mark.as_ref());
            form.set_opt(Field::Subject, sem.subject.as_ref());
        }

        if let Some(record) = &full.record {
            form.set_opt(Field::FatherName, record.father_name.as_ref());
            form.set_opt(Field::MotherName, record.mother_name.as_ref());
            form.set_opt(Field::FatherOccupation, record.father_occupation.as_ref());
            form.set_opt(Field::AadharNum, record.aadhar_num.as_ref());
            form.set_opt(Field::TenthMark, record.tenth_mark.as_ref());
            form.set_opt(Field::TwelfthMark, record.twelfth_mark.as_ref());
            form.set_opt(Field::AccountNum, record.account_num.as_ref());
            form.set_opt(Field::Community, record.community.as_ref());
            form.set_opt(Field::Religion, record.religion.as_ref());
            form.set_opt(Field::Nationality, record.nationality.as_ref());
        }

        form
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn is_review(&self) -> bool {
        self.step == Step::Review
    }

    /// Raw text entered for a field ("" when untouched).
    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    fn set_opt<T: ToString>(&mut self, field: Field, value: Option<&T>) {
        if let Some(value) = value {
            self.set(field, value.to_string());
        }
    }

    /// Check every field on one step.
    pub fn validate_step(&self, step: Step) -> Result<()> {
        for &field in step.fields() {
            let value = self.value(field).trim();
            if value.is_empty() {
                if field.is_required() {
                    return Err(FormError::Missing(field));
                }
                continue;
            }
            if !field.is_well_formed(value) {
                return Err(FormError::Invalid {
                    field,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Advance to the next step if the current one validates.
    pub fn next(&mut self) -> Result<Step> {
        self.validate_step(self.step)?;
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    /// Go back one step; stays put on the first step.
    pub fn back(&mut self) -> Step {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
        self.step
    }

    /// Build the request body from every step.
    pub fn payload(&self) -> Result<StudentPayload> {
        for step in Step::ALL {
            self.validate_step(step)?;
        }

        let student = NewStudent {
            student_name: self.required_text(Field::StudentName)?,
            dob: self.required(Field::Dob, |v| {
                NaiveDate::parse_from_str(v, DATE_FORMAT).ok()
            })?,
            department: self.text(Field::Department),
            register_num: self.required_text(Field::RegisterNum)?,
            university_num: self.required(Field::UniversityNum, |v| v.parse().ok())?,
        };

        let info = StudentInfo {
            address: self.text(Field::Address),
            blood_grp: self.text(Field::BloodGroup),
            mail_id: self.text(Field::MailId),
            phone_no: self.parsed(Field::PhoneNo)?,
            year: self.parsed(Field::Year)?,
            ..Default::default()
        };

        let sem_info = SemesterInfo {
            cgpa: self.parsed(Field::Cgpa)?,
            semester: self.parsed(Field::Semester)?,
            pass_fail: self.text(Field::PassFail),
            grade: self.text(Field::Grade),
            mark: self.parsed(Field::Mark)?,
            subject: self.text(Field::Subject),
            ..Default::default()
        };

        let record = FamilyRecord {
            father_name: self.text(Field::FatherName),
            mother_name: self.text(Field::MotherName),
            father_occupation: self.text(Field::FatherOccupation),
            aadhar_num: self.parsed(Field::AadharNum)?,
            tenth_mark: self.parsed(Field::TenthMark)?,
            twelfth_mark: self.parsed(Field::TwelfthMark)?,
            account_num: self.parsed(Field::AccountNum)?,
            community: self.text(Field::Community),
            religion: self.text(Field::Religion),
            nationality: self.text(Field::Nationality),
            ..Default::default()
        };

        Ok(StudentPayload {
            student,
            info,
            sem_info,
            record,
        })
    }

    fn text(&self, field: Field) -> Option<String> {
        let value = self.value(field).trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    fn required_text(&self, field: Field) -> Result<String> {
        self.text(field).ok_or(FormError::Missing(field))
    }

    fn required<T>(&self, field: Field, parse: impl FnOnce(&str) -> Option<T>) -> Result<T> {
        let value = self.required_text(field)?;
        parse(&value).ok_or(FormError::Invalid { field, value })
    }

    fn parsed<T: std::str::FromStr>(&self, field: Field) -> Result<Option<T>> {
        match self.text(field) {
            None => Ok(None),
            Some(value) => match value.parse() {
                Ok(parsed) => Ok(Some(parsed)),
                Err(_) => Err(FormError::Invalid { field, value }),
            },
        }
    }
}
