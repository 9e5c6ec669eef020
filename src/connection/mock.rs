use crate::connection::error::ApiError;
use crate::connection::ApiTransport;
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::HashMap;

type Canned = Result<Value, (u16, String)>;

/// In-memory transport answering with canned responses and recording every
/// request it receives.
#[derive(Default)]
pub struct MockTransport {
    gets: HashMap<String, Canned>,
    posts: HashMap<String, Canned>,
    requests: RefCell<Vec<Request>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Get(String),
    Post(String, Value),
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_get(mut self, uri: &str, response: Value) -> Self {
        self.gets.insert(uri.to_owned(), Ok(response));
        self
    }

    pub fn fail_get(mut self, uri: &str, status: u16, message: &str) -> Self {
        self.gets
            .insert(uri.to_owned(), Err((status, message.to_owned())));
        self
    }

    pub fn fail_post(mut self, uri: &str, status: u16, message: &str) -> Self {
        self.posts
            .insert(uri.to_owned(), Err((status, message.to_owned())));
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    pub fn posts(&self) -> Vec<(String, Value)> {
        self.requests
            .borrow()
            .iter()
            .filter_map(|request| match request {
                Request::Post(uri, data) => Some((uri.clone(), data.clone())),
                Request::Get(_) => None,
            })
            .collect()
    }

    pub fn post_uris(&self) -> Vec<String> {
        self.posts().into_iter().map(|(uri, _)| uri).collect()
    }

    fn answer(canned: Option<&Canned>, default: Canned) -> Result<Value, ApiError> {
        match canned.cloned().unwrap_or(default) {
            Ok(value) => Ok(value),
            Err((status, message)) => Err(ApiError::Http { status, message }),
        }
    }
}

impl ApiTransport for MockTransport {
    fn send_get(&self, uri: &str) -> Result<Value, ApiError> {
        self.requests.borrow_mut().push(Request::Get(uri.to_owned()));
        Self::answer(
            self.gets.get(uri),
            Err((400, format!("No canned response for {}", uri))),
        )
    }

    fn send_post(&self, uri: &str, data: &Value) -> Result<Value, ApiError> {
        self.requests
            .borrow_mut()
            .push(Request::Post(uri.to_owned(), data.clone()));
        Self::answer(self.posts.get(uri), Ok(json!({})))
    }
}
