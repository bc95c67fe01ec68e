use serde::{Deserialize, Serialize};

/// A single question/answer pair pulled out of a response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

/// Line scanner state: either looking for the next `Q:`, or holding a
/// question and waiting for its `A:`.
enum ScanState {
    AwaitingQuestion,
    AwaitingAnswer { question: String },
}

/// Collect ordered Q/A pairs from generated text.
///
/// A second `Q:` before any `A:` overwrites the pending question without
/// producing a record; an `A:` with no pending question is dropped. Neither
/// is an error: an empty result is the only signal the caller gets.
pub fn extract(body: &str) -> Vec<Flashcard> {
    let mut cards = Vec::new();
    let mut state = ScanState::AwaitingQuestion;
    for line in body.lines() {
        if let Some(rest) = line.strip_prefix("Q:") {
            state = ScanState::AwaitingAnswer {
                question: rest.trim().to_string(),
            };
        } else if let Some(rest) = line.strip_prefix("A:") {
            let previous = std::mem::replace(&mut state, ScanState::AwaitingQuestion);
            if let ScanState::AwaitingAnswer { question } = previous {
                cards.push(Flashcard {
                    question,
                    answer: rest.trim().to_string(),
                });
            }
        }
    }
    cards
}
