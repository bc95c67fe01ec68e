use std::fmt;

/// The five study modes the assistant can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Chat,
    Summary,
    Flashcards,
    FileAnalysis,
    ExamGenerator,
}

impl TaskKind {
    /// System prompt sent to the backend. The demo responder keys its branch
    /// off this same string, so backend and demo output stay interchangeable.
    pub fn system_prompt(&self) -> &'static str {
        match self {
            TaskKind::Chat => "You're a helpful tutor.",
            TaskKind::Summary => "Summarize the text into clear bullet points.",
            TaskKind::Flashcards => {
                "Create 5 Quizizz-style flashcards in this format:\nQ: [question]\nA: [answer]\nOnly include educational content."
            }
            TaskKind::FileAnalysis => "Summarize this document for easier revision.",
            TaskKind::ExamGenerator => {
                "Make 5 neat multiple-choice questions (A–D) with the correct answer marked clearly. Use clean formatting."
            }
        }
    }

    /// Short label used in events and export filenames.
    pub fn label(&self) -> &'static str {
        match self {
            TaskKind::Chat => "chat",
            TaskKind::Summary => "summary",
            TaskKind::Flashcards => "flashcards",
            TaskKind::FileAnalysis => "file",
            TaskKind::ExamGenerator => "exam",
        }
    }

    /// Spinner message shown while a request is in flight.
    pub fn progress_message(&self) -> &'static str {
        match self {
            TaskKind::Chat => "Thinking...",
            TaskKind::Summary => "Summarizing...",
            TaskKind::Flashcards => "Generating flashcards...",
            TaskKind::FileAnalysis => "Processing file...",
            TaskKind::ExamGenerator => "Generating MCQs...",
        }
    }

    /// Warning shown when the user submits nothing for this mode. Dispatch is
    /// never invoked on empty input.
    pub fn empty_input_warning(&self) -> &'static str {
        match self {
            TaskKind::Chat => "Please enter a question.",
            TaskKind::Summary => "Please paste some text to summarize.",
            TaskKind::Flashcards => "Please enter topic/content.",
            TaskKind::FileAnalysis => "Please provide a file to process.",
            TaskKind::ExamGenerator => "Please paste the material you want MCQs for.",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single dispatchable request: one mode, one blob of user input.
#[derive(Debug, Clone)]
pub struct TaskRequest {
    pub kind: TaskKind,
    pub user_input: String,
}

impl TaskRequest {
    pub fn new(kind: TaskKind, user_input: impl Into<String>) -> Self {
        Self {
            kind,
            user_input: user_input.into(),
        }
    }

    pub fn system_prompt(&self) -> &'static str {
        self.kind.system_prompt()
    }
}
