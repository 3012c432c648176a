//! Remote Student API calls from the browser.

use core_types::{ApiConfig, CreateAck, FullStudent, MessageAck, StudentData, StudentPayload};
use gloo_net::http::{Request, Response};
use record_browser::RecordSource;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors from API calls.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(#[from] gloo_net::Error),

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Student not found: {0}")]
    NotFound(i64),
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// API base URL, fixed when the bundle is built.
pub fn api_config() -> ApiConfig {
    ApiConfig::from_override(option_env!("STUDENT_API_BASE_URL"))
}

/// Browser-side client; every URL comes from one `ApiConfig`.
#[derive(Debug, Clone, PartialEq)]
pub struct Api {
    config: ApiConfig,
}

impl Default for Api {
    fn default() -> Self {
        Self::new(api_config())
    }
}

impl Api {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub async fn list_students(&self) -> Result<Vec<StudentData>> {
        let url = self.config.student_data_url();
        let resp = Request::get(&url).send().await?;
        decode(url, resp).await
    }

    pub async fn get_student(&self, student_id: i64) -> Result<FullStudent> {
        let url = self.config.student_full_url(student_id);
        let resp = Request::get(&url).send().await?;
        if resp.status() == 404 {
            return Err(ApiError::NotFound(student_id));
        }
        decode(url, resp).await
    }

    pub async fn create_student(&self, payload: &StudentPayload) -> Result<CreateAck> {
        let url = self.config.student_full_collection_url();
        let resp = Request::post(&url).json(payload)?.send().await?;
        decode(url, resp).await
    }

    pub async fn update_student(
        &self,
        student_id: i64,
        payload: &StudentPayload,
    ) -> Result<FullStudent> {
        let url = self.config.student_url(student_id);
        let resp = Request::put(&url).json(payload)?.send().await?;
        if resp.status() == 404 {
            return Err(ApiError::NotFound(student_id));
        }
        decode(url, resp).await
    }

    pub async fn delete_student(&self, student_id: i64) -> Result<MessageAck> {
        let url = self.config.student_url(student_id);
        let resp = Request::delete(&url).send().await?;
        if resp.status() == 404 {
            return Err(ApiError::NotFound(student_id));
        }
        decode(url, resp).await
    }
}

async fn decode<T: DeserializeOwned>(url: String, resp: Response) -> Result<T> {
    if !resp.ok() {
        return Err(ApiError::Status {
            url,
            status: resp.status(),
        });
    }
    Ok(resp.json::<T>().await?)
}

impl RecordSource for Api {
    type Record = StudentData;
    type Error = ApiError;

    async fn fetch_all(&self) -> Result<Vec<StudentData>> {
        self.list_students().await
    }

    async fn delete(&self, id: &i64) -> Result<()> {
        self.delete_student(*id).await.map(|_| ())
    }
}

/// Report an error on the browser console.
pub fn log_error(message: String) {
    gloo_timers::callback::Timeout::new(0, move || {
        web_sys::console::error_1(&message.into());
    })
    .forget();
}
