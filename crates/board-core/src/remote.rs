//! Remote Document Store
//!
//! The board lives in a generic JSON-document service keyed by an opaque id.
//! `create` seeds a document and returns its id, `read` fetches it and
//! `replace` overwrites it with a full snapshot.

use async_trait::async_trait;
use log::debug;
use reqwest::header::{ACCEPT, LOCATION};
use reqwest::{Client, StatusCode};

use crate::error::{BoardError, BoardResult};
use crate::note::Note;

/// Create/read/replace access to board documents.
///
/// `?Send` because browser fetch futures are not `Send`.
#[async_trait(?Send)]
pub trait DocumentStore {
    /// Create a document holding `initial`; returns the new document id
    async fn create(&self, initial: &[Note]) -> BoardResult<String>;

    /// Read the note list stored under `id`
    async fn read(&self, id: &str) -> BoardResult<Vec<Note>>;

    /// Overwrite the document under `id` with `notes`
    async fn replace(&self, id: &str, notes: &[Note]) -> BoardResult<()>;
}

/// Final non-empty path segment of a `Location` value
pub fn id_from_location(location: &str) -> Option<String> {
    let path = location.split(['?', '#']).next().unwrap_or_default();
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}

/// HTTP client for jsonBlob-style APIs:
/// `POST <base>`, `GET <base>/<id>`, `PUT <base>/<id>`
#[derive(Debug, Clone)]
pub struct JsonBlobClient {
    http: Client,
    base: String,
}

impl JsonBlobClient {
    pub fn new(base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            http: Client::new(),
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn document_url(&self, id: &str) -> String {
        format!("{}/{}", self.base, id)
    }
}

#[async_trait(?Send)]
impl DocumentStore for JsonBlobClient {
    async fn create(&self, initial: &[Note]) -> BoardResult<String> {
        debug!("[REMOTE] POST {}", self.base);
        let response = self
            .http
            .post(&self.base)
            .header(ACCEPT, "application/json")
            .json(initial)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BoardError::Status(status.as_u16()));
        }

        response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .and_then(id_from_location)
            .ok_or(BoardError::MissingLocation)
    }

    async fn read(&self, id: &str) -> BoardResult<Vec<Note>> {
        let url = self.document_url(id);
        debug!("[REMOTE] GET {}", url);
        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                let body = response.text().await?;
                Ok(serde_json::from_str(&body)?)
            }
            StatusCode::NOT_FOUND => Err(BoardError::NotFound(id.to_string())),
            status => Err(BoardError::Status(status.as_u16())),
        }
    }

    async fn replace(&self, id: &str, notes: &[Note]) -> BoardResult<()> {
        let url = self.document_url(id);
        debug!("[REMOTE] PUT {} ({} notes)", url, notes.len());
        let response = self
            .http
            .put(&url)
            .header(ACCEPT, "application/json")
            .json(notes)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(BoardError::Status(status.as_u16()))
        }
    }
}
