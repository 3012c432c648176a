//! CLI entry point for the student console.
//!
//! A terminal client for the Remote Student API, built on the same record
//! browser and registration types as the web console.

use std::io::{BufRead, Write};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use core_types::{ApiConfig, BASE_URL_ENV, FullStudent, StudentData, StudentPayload};
use record_browser::{Confirm, DeleteOutcome, LoadState};
use student_api::StudentApiClient;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

/// student-console: manage student records from the terminal
#[derive(Parser)]
#[command(name = "student-console")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Base URL of the student API
    #[arg(long, global = true, env = BASE_URL_ENV)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List students, ten per page
    List {
        /// Page to show (1-based)
        #[arg(short, long, default_value = "1")]
        page: NonZeroUsize,
    },

    /// Show every detail of one student
    Show {
        /// Student ID
        id: i64,
    },

    /// Register a student from a JSON file ({ student, info, sem_info, record })
    Register {
        /// Path to the JSON payload
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Replace a student's details from a JSON file
    Update {
        /// Student ID
        id: i64,

        /// Path to the JSON payload
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Delete a student
    Delete {
        /// Student ID
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Ask the student help desk a question
    Chat {
        /// Question text
        #[arg(required = true)]
        question: Vec<String>,
    },
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = ApiConfig::from_override(cli.base_url.as_deref());
    let client = StudentApiClient::new(config);

    match cli.command {
        Commands::List { page } => {
            list_students(&client, page).await?;
        }
        Commands::Show { id } => {
            show_student(&client, id).await?;
        }
        Commands::Register { file } => {
            register_student(&client, &file).await?;
        }
        Commands::Update { id, file } => {
            update_student(&client, id, &file).await?;
        }
        Commands::Delete { id, yes } => {
            delete_student(&client, id, yes).await?;
        }
        Commands::Chat { question } => {
            println!("{}", core_types::chat::reply(&question.join(" ")));
        }
    }

    Ok(())
}

async fn list_students(client: &StudentApiClient, page: NonZeroUsize) -> Result<()> {
    let mut browser = core_types::student_browser();
    browser.initialize(client).await;

    if browser.state() == LoadState::Failed {
        bail!(
            "Failed to fetch students from {}",
            client.config().base_url()
        );
    }

    browser.select_page(page);
    let rows = browser.window();

    println!(
        "Students ({} total), page {} of {}:",
        browser.records().len(),
        page,
        browser.page_count()
    );
    println!();

    if rows.is_empty() {
        println!("  No students on this page.");
        return Ok(());
    }

    print_header();
    for student in rows {
        print_row(student);
    }

    Ok(())
}

fn print_header() {
    println!(
        "  {:>5} | {:<24} | {:<10} | {:<12} | {:<14} | {:>12}",
        "ID", "Name", "DOB", "Department", "Register No.", "University No."
    );
    println!("  {}", "-".repeat(96));
}

fn print_row(student: &StudentData) {
    println!(
        "  {:>5} | {:<24} | {:<10} | {:<12} | {:<14} | {:>12}",
        student.student_id,
        student.student_name,
        student.dob,
        student.department.as_deref().unwrap_or("-"),
        student.register_num,
        student.university_num
    );
}

async fn show_student(client: &StudentApiClient, id: i64) -> Result<()> {
    let full = client
        .get_student(id)
        .await
        .with_context(|| format!("Failed to fetch student {id}"))?;

    print!("{}", render_details(&full));
    Ok(())
}

/// Format an optional value, `-` when missing.
fn or_dash<T: ToString>(value: Option<&T>) -> String {
    value.map_or_else(|| "-".to_string(), ToString::to_string)
}

fn render_details(full: &FullStudent) -> String {
    let student = &full.student;
    let info = full.info.clone().unwrap_or_default();
    let sem = full.sem_info.clone().unwrap_or_default();
    let record = full.record.clone().unwrap_or_default();

    let sections: [(&str, Vec<(&str, String)>); 4] = [
        (
            "Basic Information",
            vec![
                ("Name", student.student_name.clone()),
                ("DOB", student.dob.to_string()),
                ("Department", or_dash(student.department.as_ref())),
                ("Register Number", student.register_num.clone()),
                ("University Number", student.university_num.to_string()),
            ],
        ),
        (
            "Additional Info",
            vec![
                ("Address", or_dash(info.address.as_ref())),
                ("Blood Group", or_dash(info.blood_grp.as_ref())),
                ("Email", or_dash(info.mail_id.as_ref())),
                ("Phone Number", or_dash(info.phone_no.as_ref())),
                ("Year", or_dash(info.year.as_ref())),
            ],
        ),
        (
            "Academic Info",
            vec![
                ("Subject", or_dash(sem.subject.as_ref())),
                ("Semester", or_dash(sem.semester.as_ref())),
                ("CGPA", or_dash(sem.cgpa.as_ref())),
                ("Mark", or_dash(sem.mark.as_ref())),
                ("Grade", or_dash(sem.grade.as_ref())),
                ("Status", or_dash(sem.pass_fail.as_ref())),
            ],
        ),
        (
            "Family & Record Info",
            vec![
                ("Father's Name", or_dash(record.father_name.as_ref())),
                ("Mother's Name", or_dash(record.mother_name.as_ref())),
                ("Father's Occupation", or_dash(record.father_occupation.as_ref())),
                ("Aadhar Number", or_dash(record.aadhar_num.as_ref())),
                ("10th Mark", or_dash(record.tenth_mark.as_ref())),
                ("12th Mark", or_dash(record.twelfth_mark.as_ref())),
                ("Account Number", or_dash(record.account_num.as_ref())),
                ("Community", or_dash(record.community.as_ref())),
                ("Religion", or_dash(record.religion.as_ref())),
                ("Nationality", or_dash(record.nationality.as_ref())),
            ],
        ),
    ];

    let mut out = format!("=== Student {} ===\n", student.student_id);
    for (title, rows) in sections {
        out.push_str(&format!("\n--- {title} ---\n"));
        for (label, value) in rows {
            out.push_str(&format!("{label:<20} {value}\n"));
        }
    }
    out
}

fn read_payload(path: &Path) -> Result<StudentPayload> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid student payload in {}", path.display()))
}

async fn register_student(client: &StudentApiClient, file: &Path) -> Result<()> {
    let payload = read_payload(file)?;
    let ack = client
        .create_student(&payload)
        .await
        .context("Failed to create student")?;

    println!("{} (student_id: {})", ack.message, ack.student_id);
    Ok(())
}

async fn update_student(client: &StudentApiClient, id: i64, file: &Path) -> Result<()> {
    let payload = read_payload(file)?;
    let updated = client
        .update_student(id, &payload)
        .await
        .with_context(|| format!("Failed to update student {id}"))?;

    println!("Updated student {}", updated.student.student_id);
    print!("{}", render_details(&updated));
    Ok(())
}

/// Confirmation read from a line of input.
///
/// Any I/O failure counts as a "no".
struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Confirm for LinePrompt<R, W> {
    fn confirm(&mut self, prompt: &str) -> bool {
        if write!(self.output, "{prompt} [y/N] ")
            .and_then(|()| self.output.flush())
            .is_err()
        {
            return false;
        }

        let mut answer = String::new();
        if self.input.read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

/// Confirmation already given on the command line.
struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

async fn delete_student(client: &StudentApiClient, id: i64, yes: bool) -> Result<()> {
    let mut browser = core_types::student_browser();
    browser.initialize(client).await;

    if browser.state() == LoadState::Failed {
        bail!(
            "Failed to fetch students from {}",
            client.config().base_url()
        );
    }

    let outcome = if yes {
        browser.delete_row(&mut AssumeYes, client, &id).await
    } else {
        let mut prompt = LinePrompt {
            input: std::io::stdin().lock(),
            output: std::io::stdout(),
        };
        browser.delete_row(&mut prompt, client, &id).await
    }
    .with_context(|| format!("Failed to delete student {id}"))?;

    match outcome {
        DeleteOutcome::Cancelled => println!("Cancelled."),
        DeleteOutcome::Deleted => println!(
            "Deleted student {id}. {} students remain.",
            browser.records().len()
        ),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_types::StudentInfo;

    #[test]
    fn test_cli_parses_list_page() {
        let cli = Cli::try_parse_from(["student-console", "list", "--page", "3"]).unwrap();

        match cli.command {
            Commands::List { page } => assert_eq!(page.get(), 3),
            _ => panic!("Wrong command"),
        }
    }

    #[test]
    fn test_cli_rejects_page_zero() {
        assert!(Cli::try_parse_from(["student-console", "list", "--page", "0"]).is_err());
    }

    #[test]
    fn test_cli_base_url_flag() {
        let cli = Cli::try_parse_from([
            "student-console",
            "--base-url",
            "http://api.local:9000",
            "show",
            "4",
        ])
        .unwrap();

        assert_eq!(cli.base_url.as_deref(), Some("http://api.local:9000"));
        assert!(matches!(cli.command, Commands::Show { id: 4 }));
    }

    #[test]
    fn test_line_prompt_accepts_yes_only() {
        for (input, expected) in [("y\n", true), ("YES\n", true), ("n\n", false), ("\n", false)] {
            let mut prompt = LinePrompt {
                input: input.as_bytes(),
                output: Vec::new(),
            };
            assert_eq!(prompt.confirm("Delete?"), expected, "input {input:?}");
            assert_eq!(prompt.output, b"Delete? [y/N] ");
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn test_line_prompt_declines_when_flush_fails() {
        let mut prompt = LinePrompt {
            input: "yes\n".as_bytes(),
            output: BrokenPipe,
        };

        assert!(!prompt.confirm("Delete?"));
    }

    #[test]
    fn test_render_details_uses_dash_for_missing() {
        let full = FullStudent {
            student: StudentData {
                student_id: 9,
                student_name: "Kavya".to_string(),
                dob: NaiveDate::from_ymd_opt(2003, 3, 3).unwrap(),
                department: None,
                register_num: "REG-9".to_string(),
                university_num: 909,
            },
            info: Some(StudentInfo {
                blood_grp: Some("B+".to_string()),
                ..Default::default()
            }),
            sem_info: None,
            record: None,
        };

        let text = render_details(&full);

        assert!(text.starts_with("=== Student 9 ==="));
        assert!(text.contains("Department           -"));
        assert!(text.contains("Blood Group          B+"));
        assert!(text.contains("--- Family & Record Info ---"));
        assert!(text.contains("Nationality          -"));
    }
}
