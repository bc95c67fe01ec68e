use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::warn;

mod config;
mod dispatcher;
mod document;
mod event_bus;
mod export;
mod fallback;
mod flashcards;
mod llm;
mod logger;
mod providers;
mod sentences;
mod tasks;
mod ui;

use config::Config;
use dispatcher::Dispatcher;
use event_bus::{Event, EventBus, EventEmitter};
use tasks::{TaskKind, TaskRequest};
use ui::ConsoleUi;

#[derive(Parser)]
#[command(
    name = "studybuddy",
    version,
    about = "Study assistant with chat, summaries, flashcards, document analysis and MCQ exams"
)]
struct Args {
    /// Plain output: no banner, colors or spinner
    #[arg(short, long)]
    plain: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to a config file
    #[arg(short, long)]
    config: Option<String>,

    /// Save the response under the exports directory
    #[arg(short, long)]
    save: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ask the tutor a question
    Chat { question: Vec<String> },
    /// Summarize pasted text into bullet points (reads stdin when omitted)
    Summarize { text: Vec<String> },
    /// Generate five flashcards for a topic
    Flashcards { topic: Vec<String> },
    /// Extract a PDF, DOCX, TXT or MD file and summarize it for revision
    File { path: PathBuf },
    /// Generate five multiple-choice questions from study material
    Exam { material: Vec<String> },
    /// Write a default studybuddy.toml in the current directory
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    logger::init(args.verbose);

    if let Command::Init = args.command {
        return init_config();
    }

    let config = Config::load(&args.config)?;
    let ui = ConsoleUi::new(args.plain, &config.ui);

    let event_bus = Arc::new(EventBus::new(64));
    if args.verbose {
        let _ = event_bus::spawn_log_forwarder(&event_bus);
    }

    let backend = providers::from_config(&config);
    let mut dispatcher = Dispatcher::new(backend);
    dispatcher.set_event_bus(event_bus.clone());

    ui.banner()?;
    if !dispatcher.has_backend() {
        ui.demo_warning();
    }

    let (kind, input) = match &args.command {
        Command::Chat { question } => (TaskKind::Chat, gather_input(question)?),
        Command::Summarize { text } => (TaskKind::Summary, gather_input(text)?),
        Command::Flashcards { topic } => (TaskKind::Flashcards, gather_input(topic)?),
        Command::Exam { material } => (TaskKind::ExamGenerator, gather_input(material)?),
        Command::File { path } => {
            let content = document::read_to_text_or_note(path);
            let _ = event_bus
                .emit(Event::DocumentExtracted {
                    path: path.display().to_string(),
                    chars: content.chars().count(),
                })
                .await;
            ui.preview(&content);
            (TaskKind::FileAnalysis, content)
        }
        Command::Init => unreachable!("handled before config load"),
    };

    // Empty text never reaches dispatch; the file mode is exempt because a
    // degenerate extraction should still flow through summarization.
    if kind != TaskKind::FileAnalysis && input.trim().is_empty() {
        ui.warn(kind.empty_input_warning());
        return Ok(());
    }

    let request = TaskRequest::new(kind, input);
    let spinner = ui.spinner(kind.progress_message());
    let generated = dispatcher.dispatch(&request).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    if generated.diagnostic.is_some() {
        warn!("LLM call failed; a demo response was substituted");
    }

    match kind {
        TaskKind::Chat => {
            ui.section("Chat (Ask anything)");
            ui.response(&generated);
        }
        TaskKind::Summary => {
            ui.section("Summary");
            ui.response(&generated);
        }
        TaskKind::Flashcards => {
            ui.section("Flashcards");
            let cards = flashcards::extract(&generated.body);
            ui.flashcards(&cards);
        }
        TaskKind::FileAnalysis => {
            ui.section("Document Summary");
            ui.response(&generated);
        }
        TaskKind::ExamGenerator => {
            ui.section("Exam Generator (MCQs)");
            ui.exam_response(&generated);
        }
    }

    if args.save {
        let path = export::save(&config.export, kind.label(), &generated.body)?;
        let _ = event_bus
            .emit(Event::ExportWritten {
                path: path.display().to_string(),
            })
            .await;
        ui.saved(&path);
    }

    if args.verbose {
        ui.metrics_footer(&event_bus.get_metrics().await);
    }

    Ok(())
}

/// Joined CLI words, or stdin when none were given.
fn gather_input(words: &[String]) -> Result<String> {
    if words.is_empty() {
        io::read_to_string(io::stdin()).context("Failed to read from stdin")
    } else {
        Ok(words.join(" "))
    }
}

fn init_config() -> Result<()> {
    let path = Path::new("studybuddy.toml");
    if path.exists() {
        println!("studybuddy.toml already exists; leaving it untouched.");
        return Ok(());
    }
    Config::default().save(path)?;
    println!("Wrote default config to studybuddy.toml");
    Ok(())
}
