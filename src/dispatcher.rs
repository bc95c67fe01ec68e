use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::event_bus::{Event, EventBus, EventEmitter};
use crate::fallback;
use crate::impl_event_emitter;
use crate::llm::LlmBackend;
use crate::tasks::TaskRequest;

/// Where a response body came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseSource {
    Backend,
    Fallback,
}

/// A render-ready response. `diagnostic` is set only when a backend attempt
/// failed and the demo responder substituted for it; a run with no backend
/// configured is a normal operating mode, not a failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedText {
    pub body: String,
    pub source: ResponseSource,
    pub diagnostic: Option<String>,
}

/// Routes a request either to the injected backend or to the demo responder.
/// One attempt per dispatch; no retries, no dispatcher-owned timeout.
pub struct Dispatcher {
    backend: Option<Arc<dyn LlmBackend>>,
    event_bus: Option<Arc<EventBus>>,
}

impl Dispatcher {
    /// Create a dispatcher. `None` means every request runs in demo mode.
    pub fn new(backend: Option<Arc<dyn LlmBackend>>) -> Self {
        Self {
            backend,
            event_bus: None,
        }
    }

    /// Whether a real backend is attached.
    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    pub async fn dispatch(&self, request: &TaskRequest) -> GeneratedText {
        let task_id = uuid::Uuid::new_v4().to_string();
        self.emit(Event::TaskStarted {
            task_id: task_id.clone(),
            mode: request.kind.label().to_string(),
        })
        .await;

        let generated = match &self.backend {
            None => {
                self.emit(Event::FallbackUsed {
                    reason: "no backend configured".to_string(),
                })
                .await;
                GeneratedText {
                    body: fallback::respond(request.system_prompt(), &request.user_input),
                    source: ResponseSource::Fallback,
                    diagnostic: None,
                }
            }
            Some(backend) => self.call_backend(backend.as_ref(), request).await,
        };

        self.emit(Event::TaskCompleted {
            task_id,
            response_chars: generated.body.len(),
        })
        .await;
        generated
    }

    async fn call_backend(&self, backend: &dyn LlmBackend, request: &TaskRequest) -> GeneratedText {
        self.emit(Event::ApiCallStarted {
            provider: backend.name().to_string(),
            model: backend.model_name().to_string(),
        })
        .await;

        match backend
            .generate(request.system_prompt(), &request.user_input)
            .await
        {
            Ok(body) => {
                // Rough estimate, 1 token is about 4 characters.
                let tokens =
                    (request.system_prompt().len() + request.user_input.len() + body.len()) / 4;
                self.emit(Event::ApiCallCompleted {
                    provider: backend.name().to_string(),
                    tokens,
                })
                .await;
                GeneratedText {
                    body,
                    source: ResponseSource::Backend,
                    diagnostic: None,
                }
            }
            Err(e) => {
                let message = e.to_string();
                self.emit(Event::ApiCallFailed {
                    provider: backend.name().to_string(),
                    error: message.clone(),
                })
                .await;
                self.emit(Event::FallbackUsed {
                    reason: "backend call failed".to_string(),
                })
                .await;
                let demo = fallback::respond(request.system_prompt(), &request.user_input);
                GeneratedText {
                    body: format!("{}\n\n[Note: LLM call failed: {}]", demo, message),
                    source: ResponseSource::Fallback,
                    diagnostic: Some(message),
                }
            }
        }
    }

    async fn emit(&self, event: Event) {
        if let Some(bus) = &self.event_bus {
            let _ = bus.emit(event).await;
        }
    }
}

impl_event_emitter!(Dispatcher);
