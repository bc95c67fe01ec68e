use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

/// Events emitted while handling a request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    // Task lifecycle
    TaskStarted {
        task_id: String,
        mode: String,
    },
    TaskCompleted {
        task_id: String,
        response_chars: usize,
    },

    // Backend calls
    ApiCallStarted {
        provider: String,
        model: String,
    },
    ApiCallCompleted {
        provider: String,
        tokens: usize,
    },
    ApiCallFailed {
        provider: String,
        error: String,
    },

    // Demo-mode substitution
    FallbackUsed {
        reason: String,
    },

    // Document handling
    DocumentExtracted {
        path: String,
        chars: usize,
    },

    // Exports
    ExportWritten {
        path: String,
    },
}

/// Event bus for component communication
pub struct EventBus {
    sender: broadcast::Sender<Event>,
    metrics: Arc<RwLock<Metrics>>,
}

/// Accumulated metrics from events
#[derive(Debug, Default, Clone)]
pub struct Metrics {
    pub api_calls: usize,
    pub api_failures: usize,
    pub estimated_tokens: usize,
    pub fallback_responses: usize,
    pub tasks_completed: usize,
    pub documents_processed: usize,
    pub exports_written: usize,
}

impl EventBus {
    /// Create a new event bus with specified channel capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            metrics: Arc::new(RwLock::new(Metrics::default())),
        }
    }

    /// Subscribe to events
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    /// Emit an event to all subscribers
    pub async fn emit(&self, event: Event) -> Result<()> {
        self.update_metrics(&event).await;

        // A send with no receivers is fine; metrics were still recorded.
        let _ = self.sender.send(event);
        Ok(())
    }

    /// Get current metrics
    pub async fn get_metrics(&self) -> Metrics {
        self.metrics.read().await.clone()
    }

    async fn update_metrics(&self, event: &Event) {
        let mut metrics = self.metrics.write().await;

        match event {
            Event::ApiCallCompleted { tokens, .. } => {
                metrics.api_calls += 1;
                metrics.estimated_tokens += tokens;
            }
            Event::ApiCallFailed { .. } => {
                metrics.api_calls += 1;
                metrics.api_failures += 1;
            }
            Event::FallbackUsed { .. } => {
                metrics.fallback_responses += 1;
            }
            Event::TaskCompleted { .. } => {
                metrics.tasks_completed += 1;
            }
            Event::DocumentExtracted { .. } => {
                metrics.documents_processed += 1;
            }
            Event::ExportWritten { .. } => {
                metrics.exports_written += 1;
            }
            _ => {}
        }
    }
}

/// Forward every event to the logger until the bus is dropped. Used in
/// verbose runs to trace a request end to end.
pub fn spawn_log_forwarder(bus: &EventBus) -> tokio::task::JoinHandle<()> {
    let mut receiver = bus.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = receiver.recv().await {
            log::info!("event: {:?}", event);
        }
    })
}

/// Trait for components that can emit events
#[async_trait::async_trait]
pub trait EventEmitter {
    fn set_event_bus(&mut self, bus: Arc<EventBus>);

    #[allow(dead_code)]
    async fn emit_event(&self, event: Event) -> Result<()>;
}

/// Helper macro to implement EventEmitter trait
#[macro_export]
macro_rules! impl_event_emitter {
    ($type:ty) => {
        #[async_trait::async_trait]
        impl EventEmitter for $type {
            fn set_event_bus(&mut self, bus: Arc<EventBus>) {
                self.event_bus = Some(bus);
            }

            async fn emit_event(&self, event: Event) -> anyhow::Result<()> {
                if let Some(bus) = &self.event_bus {
                    bus.emit(event).await
                } else {
                    Ok(())
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_event_emission() {
        let bus = EventBus::new(100);
        let mut receiver = bus.subscribe();

        let event = Event::TaskStarted {
            task_id: "test-1".to_string(),
            mode: "chat".to_string(),
        };

        bus.emit(event.clone()).await.unwrap();

        let received = receiver.recv().await.unwrap();
        match received {
            Event::TaskStarted { task_id, .. } => {
                assert_eq!(task_id, "test-1");
            }
            _ => panic!("Wrong event type"),
        }
    }

    #[tokio::test]
    async fn test_metrics_update() {
        let bus = EventBus::new(100);

        bus.emit(Event::ApiCallCompleted {
            provider: "groq".to_string(),
            tokens: 100,
        })
        .await
        .unwrap();
        bus.emit(Event::ApiCallFailed {
            provider: "groq".to_string(),
            error: "timeout".to_string(),
        })
        .await
        .unwrap();
        bus.emit(Event::FallbackUsed {
            reason: "backend call failed".to_string(),
        })
        .await
        .unwrap();

        let metrics = bus.get_metrics().await;
        assert_eq!(metrics.api_calls, 2);
        assert_eq!(metrics.api_failures, 1);
        assert_eq!(metrics.estimated_tokens, 100);
        assert_eq!(metrics.fallback_responses, 1);
    }

    #[tokio::test]
    async fn test_emit_without_receivers_is_ok() {
        let bus = EventBus::new(4);
        bus.emit(Event::ExportWritten {
            path: "exports/chat.md".to_string(),
        })
        .await
        .unwrap();
        assert_eq!(bus.get_metrics().await.exports_written, 1);
    }
}
