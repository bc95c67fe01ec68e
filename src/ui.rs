use std::io;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use colored::*;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::UiConfig;
use crate::dispatcher::{GeneratedText, ResponseSource};
use crate::event_bus::Metrics;
use crate::flashcards::Flashcard;

/// Line-oriented terminal presentation.
pub struct ConsoleUi {
    plain: bool,
    spinner: bool,
    preview_chars: usize,
}

impl ConsoleUi {
    pub fn new(plain: bool, config: &UiConfig) -> Self {
        if plain || !config.colorful {
            colored::control::set_override(false);
        }
        Self {
            plain,
            spinner: config.spinner && !plain,
            preview_chars: config.preview_chars,
        }
    }

    /// Clear the screen and print the header.
    pub fn banner(&self) -> Result<()> {
        if self.plain {
            return Ok(());
        }
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
        let rule = "=".repeat(64);
        println!("{}", rule.as_str().bright_blue());
        println!(
            "{}",
            "Studybuddy - Student AI Assistant".bright_white().bold()
        );
        println!("{}", rule.as_str().bright_blue());
        println!();
        Ok(())
    }

    pub fn demo_warning(&self) {
        println!(
            "{}",
            "DEMO MODE: LLM backend not available. Responses are safe, local demo output. For full AI, set GROQ_API_KEY in .env or the environment."
                .yellow()
        );
        println!();
    }

    pub fn warn(&self, message: &str) {
        println!("{}", message.yellow());
    }

    pub fn info(&self, message: &str) {
        println!("{}", message.cyan());
    }

    pub fn section(&self, title: &str) {
        println!("{}", title.bold().underline());
    }

    /// Spinner shown while a request is in flight. Callers clear it before
    /// rendering output.
    pub fn spinner(&self, message: &'static str) -> Option<ProgressBar> {
        if !self.spinner {
            return None;
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    }

    pub fn response(&self, generated: &GeneratedText) {
        println!("{}", generated.body);
        if generated.source == ResponseSource::Fallback && generated.diagnostic.is_none() {
            println!();
            println!("{}", "(generated locally in demo mode)".dimmed());
        }
        println!();
    }

    /// Exam output with the markdown bolding softened for the terminal.
    pub fn exam_response(&self, generated: &GeneratedText) {
        let softened = GeneratedText {
            body: generated.body.replace("**", "*"),
            source: generated.source,
            diagnostic: generated.diagnostic.clone(),
        };
        self.response(&softened);
    }

    pub fn flashcards(&self, cards: &[Flashcard]) {
        if cards.is_empty() {
            self.info("Demo produced no structured flashcards; try rephrasing.");
            return;
        }
        for (i, card) in cards.iter().enumerate() {
            println!(
                "{}",
                format!("Flashcard {}: {}", i + 1, card.question).bold()
            );
            println!("  Answer: {}", card.answer);
            println!();
        }
    }

    pub fn preview(&self, content: &str) {
        self.section("File content (preview)");
        println!("{}", truncate_chars(content, self.preview_chars));
        println!();
    }

    pub fn saved(&self, path: &Path) {
        println!("{}", format!("Saved to {}", path.display()).green());
    }

    pub fn metrics_footer(&self, metrics: &Metrics) {
        println!();
        println!(
            "{}",
            format!(
                "{} API call(s), ~{} tokens, {} fallback response(s)",
                metrics.api_calls, metrics.estimated_tokens, metrics.fallback_responses
            )
            .dimmed()
        );
    }
}

fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncation_respects_char_boundaries() {
        let text = "héllo wörld";
        assert_eq!(truncate_chars(text, 4), "héll");
        assert_eq!(truncate_chars(text, 100), text);
    }
}
