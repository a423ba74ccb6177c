use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::types::{LoginPayload, RegistrationPayload};

/// Server-side handler selected by a request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    RegisterUser,
    LoginUser,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::RegisterUser => "registerUser",
            Operation::LoginUser => "loginUser",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a POST to the server, tagged by its `operation` field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "camelCase")]
pub enum Request {
    RegisterUser(RegistrationPayload),
    LoginUser(LoginPayload),
}

impl Request {
    pub fn operation(&self) -> Operation {
        match self {
            Request::RegisterUser(_) => Operation::RegisterUser,
            Request::LoginUser(_) => Operation::LoginUser,
        }
    }
}

impl From<RegistrationPayload> for Request {
    fn from(payload: RegistrationPayload) -> Self {
        Request::RegisterUser(payload)
    }
}

impl From<LoginPayload> for Request {
    fn from(payload: LoginPayload) -> Self {
        Request::LoginUser(payload)
    }
}

/// Response returned by the server for any operation
///
/// Only `result` and `operation` are guaranteed. `result` is a string for
/// some operations and a boolean for others, so it is kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerResponse {
    pub result: Value,
    pub operation: String,
    /// Any other fields the server sent, e.g. `user` after a login
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    /// Body text exactly as received, empty unless built with `from_body`
    #[serde(skip)]
    body: String,
}

impl ServerResponse {
    /// Decode a response body, keeping the original text
    pub fn from_body(body: &str) -> serde_json::Result<Self> {
        let mut response: ServerResponse = serde_json::from_str(body)?;
        response.body = body.to_string();
        Ok(response)
    }

    /// `result` as display text; strings are shown without quotes.
    pub fn result_text(&self) -> String {
        match &self.result {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// The response body as the server sent it
    pub fn body(&self) -> &str {
        &self.body
    }
}
