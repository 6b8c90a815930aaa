//! In-memory fakes for the remote store, browser storage and text generation.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use crate::error::{BoardError, BoardResult};
use crate::identity::{AddressBar, LocalStore};
use crate::note::{Note, NoteColor};
use crate::polish::TextGenerator;
use crate::remote::DocumentStore;
use crate::sync::{StatusSink, SyncStatus};

/// Notes whose id and title are both the given label
pub fn sample_notes(labels: &[&str]) -> Vec<Note> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| Note {
            id: label.to_string(),
            title: label.to_string(),
            content: format!("content of {}", label),
            color: NoteColor::Yellow,
            author: "tester".to_string(),
            created_at: 1_700_000_000_000 + i as i64,
        })
        .collect()
}

#[derive(Default)]
pub struct MemoryDocumentStore {
    documents: RefCell<HashMap<String, Vec<Note>>>,
    next_id: RefCell<Option<String>>,
    fail_create: Cell<bool>,
    fail_replace: Cell<bool>,
    /// Yields to the runtime before each replace lands, popped per call
    replace_delays: RefCell<VecDeque<usize>>,
    create_calls: Cell<usize>,
    read_calls: Cell<usize>,
    replace_calls: Cell<usize>,
    counter: Cell<usize>,
}

impl MemoryDocumentStore {
    pub fn with_document(id: &str, notes: Vec<Note>) -> Self {
        let store = Self::default();
        store.documents.borrow_mut().insert(id.to_string(), notes);
        store
    }

    pub fn with_next_id(id: &str) -> Self {
        let store = Self::default();
        *store.next_id.borrow_mut() = Some(id.to_string());
        store
    }

    pub fn fail_create(&self, fail: bool) {
        self.fail_create.set(fail);
    }

    pub fn fail_replace(&self, fail: bool) {
        self.fail_replace.set(fail);
    }

    pub fn delay_replaces(&self, yields: &[usize]) {
        self.replace_delays.borrow_mut().extend(yields.iter().copied());
    }

    pub fn document(&self, id: &str) -> Option<Vec<Note>> {
        self.documents.borrow().get(id).cloned()
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.get()
    }

    pub fn read_calls(&self) -> usize {
        self.read_calls.get()
    }

    pub fn replace_calls(&self) -> usize {
        self.replace_calls.get()
    }
}

#[async_trait(?Send)]
impl DocumentStore for MemoryDocumentStore {
    async fn create(&self, initial: &[Note]) -> BoardResult<String> {
        self.create_calls.set(self.create_calls.get() + 1);
        if self.fail_create.get() {
            return Err(BoardError::Status(500));
        }
        let id = self.next_id.borrow_mut().take().unwrap_or_else(|| {
            self.counter.set(self.counter.get() + 1);
            format!("doc-{}", self.counter.get())
        });
        self.documents.borrow_mut().insert(id.clone(), initial.to_vec());
        Ok(id)
    }

    async fn read(&self, id: &str) -> BoardResult<Vec<Note>> {
        self.read_calls.set(self.read_calls.get() + 1);
        self.document(id).ok_or_else(|| BoardError::NotFound(id.to_string()))
    }

    async fn replace(&self, id: &str, notes: &[Note]) -> BoardResult<()> {
        self.replace_calls.set(self.replace_calls.get() + 1);
        let delay = self.replace_delays.borrow_mut().pop_front().unwrap_or(0);
        for _ in 0..delay {
            tokio::task::yield_now().await;
        }
        if self.fail_replace.get() {
            return Err(BoardError::Status(503));
        }
        self.documents.borrow_mut().insert(id.to_string(), notes.to_vec());
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryAddressBar {
    param: RefCell<Option<String>>,
    writes: Cell<usize>,
}

impl MemoryAddressBar {
    pub fn with_param(id: &str) -> Self {
        let bar = Self::default();
        *bar.param.borrow_mut() = Some(id.to_string());
        bar
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl AddressBar for MemoryAddressBar {
    fn board_param(&self) -> Option<String> {
        self.param.borrow().clone()
    }

    fn set_board_param(&self, board_id: &str) {
        self.writes.set(self.writes.get() + 1);
        *self.param.borrow_mut() = Some(board_id.to_string());
    }
}

#[derive(Default)]
pub struct MemoryLocalStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryLocalStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.set(key, value);
        store
    }
}

impl LocalStore for MemoryLocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

#[derive(Default)]
pub struct StatusRecorder {
    history: RefCell<Vec<SyncStatus>>,
}

impl StatusRecorder {
    pub fn history(&self) -> Vec<SyncStatus> {
        self.history.borrow().clone()
    }

    pub fn last(&self) -> Option<SyncStatus> {
        self.history.borrow().last().copied()
    }
}

impl StatusSink for StatusRecorder {
    fn set_status(&self, status: SyncStatus) {
        self.history.borrow_mut().push(status);
    }
}

pub struct FailingGenerator;

#[async_trait(?Send)]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _prompt: &str) -> BoardResult<String> {
        Err(BoardError::Polish("service unavailable".to_string()))
    }
}

/// Answers every prompt with a fixed string and remembers the last prompt
#[derive(Clone)]
pub struct EchoGenerator {
    answer: String,
    last_prompt: Rc<RefCell<Option<String>>>,
}

impl EchoGenerator {
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            last_prompt: Rc::new(RefCell::new(None)),
        }
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.borrow().clone()
    }
}

#[async_trait(?Send)]
impl TextGenerator for EchoGenerator {
    async fn generate(&self, prompt: &str) -> BoardResult<String> {
        *self.last_prompt.borrow_mut() = Some(prompt.to_string());
        Ok(self.answer.clone())
    }
}

/// Raw HTTP/1.1 response with a `Content-Length` and `Connection: close`
pub fn http_response(status: &str, headers: &[(&str, &str)], body: &str) -> String {
    let mut response = format!("HTTP/1.1 {}\r\n", status);
    for (name, value) in headers {
        response.push_str(&format!("{}: {}\r\n", name, value));
    }
    response.push_str(&format!("Content-Length: {}\r\nConnection: close\r\n\r\n{}", body.len(), body));
    response
}

/// Serve `response` to exactly one connection on 127.0.0.1.
/// Returns the `http://` base for a jsonBlob-style API and a handle
/// resolving to the raw request that was received.
pub async fn serve_once(response: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let request = read_request(&mut stream).await;
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.unwrap();
        request
    });
    (format!("http://{}/api/jsonBlob", addr), handle)
}

async fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        let text = String::from_utf8_lossy(&buf);
        if let Some(end) = text.find("\r\n\r\n") {
            let body_len = text[..end]
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + body_len {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Body of a raw request (after the blank line)
pub fn request_body(request: &str) -> &str {
    request.split_once("\r\n\r\n").map(|(_, body)| body).unwrap_or_default()
}
