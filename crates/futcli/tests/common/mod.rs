//! Shared test helpers: a scripted, request-recording transport.

#![allow(dead_code)]

use async_trait::async_trait;
use futcli::transport::Transport;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Answers requests from a script and records every URL it was asked for.
pub struct FakeTransport {
    script: Mutex<VecDeque<Option<String>>>,
    fallback: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeTransport {
    /// Replies in order; once the script runs out every request fails.
    pub fn sequence<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            script: Mutex::new(replies.into_iter().map(|r| r.map(Into::into)).collect()),
            fallback: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Same body for every request.
    pub fn always(body: impl Into<String>) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: Some(body.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every request fails.
    pub fn failing() -> Self {
        Self::sequence(Vec::<Option<String>>::new())
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn fetch_text(&self, url: &str) -> Option<String> {
        self.calls.lock().unwrap().push(url.to_string());
        match self.script.lock().unwrap().pop_front() {
            Some(reply) => reply,
            None => self.fallback.clone(),
        }
    }
}
