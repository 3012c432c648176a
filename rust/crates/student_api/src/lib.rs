//! HTTP client for the Remote Student API.
//!
//! This crate provides:
//! - StudentApiClient: typed access to the list/read/create/update/delete
//!   endpoints, all resolved against one `ApiConfig`
//! - A `RecordSource` implementation so the record browser can drive it

use core_types::{
    ApiConfig, CreateAck, FullStudent, MessageAck, StudentData, StudentPayload,
};
use record_browser::RecordSource;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

/// Errors from API operations.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{method} {url} returned {status}")]
    Status {
        method: &'static str,
        url: String,
        status: StatusCode,
    },

    #[error("Student not found: {0}")]
    NotFound(i64),
}

impl ApiError {
    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http(e) => e.status(),
            Self::Status { status, .. } => Some(*status),
            Self::NotFound(_) => Some(StatusCode::NOT_FOUND),
        }
    }
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Client for the Remote Student API.
#[derive(Debug, Clone)]
pub struct StudentApiClient {
    config: ApiConfig,
    client: reqwest::Client,
}

impl StudentApiClient {
    /// Create a new client with the given config.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET /student_data/` - every student as a flat row.
    pub async fn list_students(&self) -> Result<Vec<StudentData>> {
        let url = self.config.student_data_url();
        debug!(%url, "listing students");
        let response = self.client.get(&url).send().await?;
        decode("GET", url, response).await
    }

    /// `GET /student_full/{id}` - one student with every related group.
    pub async fn get_student(&self, student_id: i64) -> Result<FullStudent> {
        let url = self.config.student_full_url(student_id);
        debug!(%url, "fetching student");
        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(student_id));
        }
        decode("GET", url, response).await
    }

    /// `POST /student_full/` - register a student.
    pub async fn create_student(&self, payload: &StudentPayload) -> Result<CreateAck> {
        let url = self.config.student_full_collection_url();
        debug!(%url, "creating student");
        let response = self.client.post(&url).json(payload).send().await?;
        decode("POST", url, response).await
    }

    /// `PUT /students/{id}` - replace a student's details.
    pub async fn update_student(
        &self,
        student_id: i64,
        payload: &StudentPayload,
    ) -> Result<FullStudent> {
        let url = self.config.student_url(student_id);
        debug!(%url, "updating student");
        let response = self.client.put(&url).json(payload).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(student_id));
        }
        decode("PUT", url, response).await
    }

    /// `DELETE /students/{id}` - remove a student and its related rows.
    pub async fn delete_student(&self, student_id: i64) -> Result<MessageAck> {
        let url = self.config.student_url(student_id);
        debug!(%url, "deleting student");
        let response = self.client.delete(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(student_id));
        }
        decode("DELETE", url, response).await
    }
}

/// Reject non-2xx responses, then parse the JSON body.
async fn decode<T: DeserializeOwned>(
    method: &'static str,
    url: String,
    response: Response,
) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            method,
            url,
            status,
        });
    }
    Ok(response.json::<T>().await?)
}

impl RecordSource for StudentApiClient {
    type Record = StudentData;
    type Error = ApiError;

    async fn fetch_all(&self) -> Result<Vec<StudentData>> {
        self.list_students().await
    }

    async fn delete(&self, id: &i64) -> Result<()> {
        self.delete_student(*id).await.map(|_| ())
    }
}
