//! The boundary between the recipe pipeline and whatever model produces the text.
//!
//! [`Provider`](crate::api_connection::Provider) is the network implementation;
//! [`ScriptedCompletion`] answers from a fixed script so the pipeline can run
//! without network access.

use async_trait::async_trait;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::api_connection::endpoints::JsonSchemaDefinition;
use crate::api_connection::ApiConnectionError;

#[async_trait]
pub trait CompletionPort: Send + Sync + fmt::Debug {
    /// Send `prompt` to `model`, asking for output that conforms to `schema`,
    /// and return the raw completion text.
    async fn complete(
        &self,
        model: &str,
        prompt: &str,
        schema: &JsonSchemaDefinition,
    ) -> Result<String, ApiConnectionError>;

    fn provider_name(&self) -> &'static str;
}

#[derive(Debug, Clone)]
enum Script {
    Respond(String),
    Fail(String),
}

/// A completion port that always gives the same answer.
#[derive(Debug)]
pub struct ScriptedCompletion {
    script: Script,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl ScriptedCompletion {
    pub fn responding(text: impl Into<String>) -> Self {
        Self::with_script(Script::Respond(text.into()))
    }

    /// Every call fails with [`ApiConnectionError::Unavailable`].
    pub fn failing(reason: impl Into<String>) -> Self {
        Self::with_script(Script::Fail(reason.into()))
    }

    fn with_script(script: Script) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl CompletionPort for ScriptedCompletion {
    async fn complete(
        &self,
        _model: &str,
        prompt: &str,
        _schema: &JsonSchemaDefinition,
    ) -> Result<String, ApiConnectionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self
            .last_prompt
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(prompt.to_string());

        match &self.script {
            Script::Respond(text) => Ok(text.clone()),
            Script::Fail(reason) => Err(ApiConnectionError::Unavailable(reason.clone())),
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }
}
