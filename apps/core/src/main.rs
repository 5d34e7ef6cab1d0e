// Course Assistant terminal front-end
// Plays the floating chat widget: open it, type, watch the bot "type" back.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use course_assistant::actors::SessionEvent;
use course_assistant::{
    telemetry, AssistantConfig, ChannelSink, ConversationContext, CourseAssistant, MatchMode,
    MessageKind, SessionHandle,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{sleep, Duration};
use tracing::info;

#[derive(Parser)]
#[command(name = "course-assistant")]
#[command(about = "AI Course Assistant chatbot: chat, classify", long_about = None)]
#[command(version)]
struct Cli {
    /// Keyword matching: substring (default) or whole-word. Overrides ASSISTANT_MATCH_MODE.
    #[arg(long, global = true)]
    match_mode: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive chat session (default). `/toggle` opens or closes the widget, `/quit` exits.
    Chat,
    /// Classify one message and print the reply it would get on a first turn.
    Classify {
        text: String,
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AssistantConfig::from_env().context("Invalid configuration")?;
    if let Some(mode) = cli.match_mode {
        config.match_mode = mode.parse::<MatchMode>()?;
    }
    telemetry::init(&config)?;

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => run_chat(&config).await,
        Commands::Classify { text, json } => classify(&config, &text, json),
    }
}

fn classify(config: &AssistantConfig, text: &str, json: bool) -> Result<()> {
    let assistant = CourseAssistant::for_mode(config.match_mode)?;
    let reply = assistant.reply(text, &mut ConversationContext::default());

    if json {
        println!("{}", serde_json::to_string_pretty(&reply)?);
    } else {
        match &reply.matched_trigger {
            Some(trigger) => println!("intent: {} (matched \"{}\")", reply.intent, trigger),
            None => println!("intent: {}", reply.intent),
        }
        println!();
        println!("{}", reply.text);
    }
    Ok(())
}

async fn run_chat(config: &AssistantConfig) -> Result<()> {
    let (sink, mut events) = ChannelSink::new();
    let session = SessionHandle::from_config(config, Arc::new(sink))?;
    info!(session = %session.id(), match_mode = %config.match_mode, "Chat started");

    let printer = tokio::spawn(async move {
        while let Some((_, event)) = events.recv().await {
            render(&event);
        }
    });

    session.toggle().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut quit = false;
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "/quit" | "/exit" => {
                quit = true;
                break;
            }
            "/toggle" => {
                session.toggle().await?;
            }
            _ => {
                if session.submit(line.as_str()).await?.is_none() && !line.trim().is_empty() {
                    println!("(chat is closed, type /toggle to open it)");
                }
            }
        }
    }

    // End of piped input: let the queued replies land first.
    if !quit {
        while session.status().await?.pending_replies > 0 {
            sleep(Duration::from_millis(100)).await;
        }
    }

    session.shutdown().await?;
    drop(session);
    printer.await?;
    Ok(())
}

fn render(event: &SessionEvent) {
    match event {
        SessionEvent::MessageAppended(message) if message.kind == MessageKind::Bot => {
            println!("assistant> {}\n", message.content);
        }
        SessionEvent::MessageAppended(_) => {}
        SessionEvent::TypingChanged(true) => println!("assistant is typing..."),
        SessionEvent::TypingChanged(false) => {}
        SessionEvent::WidgetToggled(true) => println!("[chat opened]"),
        SessionEvent::WidgetToggled(false) => println!("[chat closed]"),
    }
}
