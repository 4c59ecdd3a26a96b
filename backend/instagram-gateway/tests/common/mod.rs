//! Shared test fixtures: a scripted Graph transport double that replays a
//! queue of responses and records every call it receives.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

use instagram_gateway::clients::graph::{GraphTransport, UpstreamError};
use instagram_gateway::config::Config;

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: &'static str,
    pub url: String,
    pub query: Vec<(String, String)>,
}

impl RecordedCall {
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<Value, UpstreamError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedTransport {
    pub fn new(responses: Vec<Result<Value, UpstreamError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A transport that must never be reached.
    pub fn unreachable() -> Self {
        Self::new(Vec::new())
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn next(
        &self,
        method: &'static str,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, UpstreamError> {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            url: url.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(UpstreamError {
                    status: None,
                    body: "scripted transport exhausted".to_string(),
                })
            })
    }
}

#[async_trait]
impl GraphTransport for ScriptedTransport {
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, UpstreamError> {
        self.next("GET", url, query)
    }

    async fn post(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, UpstreamError> {
        self.next("POST", url, query)
    }
}

pub fn test_config() -> Config {
    Config::from_env().expect("default config")
}
