use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use aarogya_agents::{
    dispatch_test_alert, ChatAgent, ChatSession, CollectingNotifier, DelayPolicy, FieldDesk,
    TokioScheduler, TracingNotifier,
};
use aarogya_core::{
    builtin_quiz, classify, score_quiz, AlertPreferences, CoreError, HealthReport, IntentCategory,
    Language, ResponseBank, SensorId, UserProgress,
};
use aarogya_observability::{init_tracing, AppMetrics};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Parser)]
#[command(name = "aarogya")]
#[command(about = "AarogyaJal health and water-safety assistant")]
struct Cli {
    /// Seed for reply selection, confidence and delay jitter.
    #[arg(long, env = "AAROGYA_SEED", global = true)]
    seed: Option<u64>,

    #[arg(long, env = "AAROGYA_REPLY_DELAY_MS", default_value_t = 1500, global = true)]
    reply_delay_ms: u64,

    #[arg(long, env = "AAROGYA_REPLY_JITTER_MS", default_value_t = 1000, global = true)]
    reply_jitter_ms: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive chat. `/lang` toggles the UI language, `/voice` sends the
    /// simulated voice transcript.
    Chat {
        #[arg(long)]
        no_delay: bool,
    },
    Classify {
        text: String,
    },
    Respond {
        #[arg(long)]
        language: String,
        #[arg(long)]
        intent: String,
    },
    Quiz {
        /// Chosen option index per question, comma separated.
        #[arg(long, value_delimiter = ',')]
        answers: Vec<usize>,
    },
    TestAlert,
    /// File a health report for the given symptoms.
    Report {
        #[arg(long, value_delimiter = ',')]
        symptoms: Vec<String>,
        #[arg(long, default_value = "en")]
        language: String,
        /// Fill the location from the simulated GPS fix.
        #[arg(long)]
        gps: bool,
        /// Attach the simulated voice note.
        #[arg(long)]
        voice_note: bool,
    },
    /// Refresh readings from a field sensor.
    Sensors {
        #[arg(long, default_value = "WQ-RAMPUR-01")]
        sensor_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("aarogya_cli");
    let cli = Cli::parse();

    match cli.command {
        Command::Chat { no_delay } => {
            let delay = if no_delay {
                DelayPolicy::none()
            } else {
                DelayPolicy {
                    base: Duration::from_millis(cli.reply_delay_ms),
                    jitter: Duration::from_millis(cli.reply_jitter_ms),
                }
            };
            run_chat(build_session(cli.seed, delay)?).await?;
        }
        Command::Classify { text } => {
            println!("{}", serde_json::to_string_pretty(&classify(&text))?);
        }
        Command::Respond { language, intent } => {
            let language =
                Language::parse(&language).ok_or(CoreError::UnknownLanguage(language))?;
            let intent =
                IntentCategory::parse(&intent).ok_or(CoreError::UnknownIntent(intent))?;

            let mut rng = rng_from(cli.seed);
            let reply = ResponseBank::builtin().respond(language, intent, &mut rng)?;
            println!("{}", serde_json::to_string_pretty(&reply)?);
        }
        Command::Quiz { answers } => {
            let questions = builtin_quiz();
            let answers = questions
                .iter()
                .zip(answers)
                .map(|(question, answer)| (question.id, answer))
                .collect::<HashMap<_, _>>();

            let outcome = score_quiz(&questions, &answers);
            let mut progress = UserProgress::default();
            progress.apply_quiz(&outcome);

            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "outcome": outcome,
                    "progress": progress,
                }))?
            );
        }
        Command::TestAlert => {
            let collector = CollectingNotifier::default();
            dispatch_test_alert(&AlertPreferences::default(), &collector);
            println!("{}", serde_json::to_string_pretty(&collector.snapshot())?);
        }
        Command::Report {
            symptoms,
            language,
            gps,
            voice_note,
        } => {
            let language =
                Language::parse(&language).ok_or(CoreError::UnknownLanguage(language))?;
            let desk = FieldDesk::new(TokioScheduler, TracingNotifier, AppMetrics::shared());

            let mut report = HealthReport {
                language,
                ..HealthReport::default()
            };
            for symptom in &symptoms {
                report.toggle_symptom(symptom.trim());
            }
            if gps {
                desk.capture_location(&mut report).await;
            }
            if voice_note {
                desk.record_voice_note(&mut report).await;
            }

            let submitted = desk.submit_report(&mut report);
            println!("{}", serde_json::to_string_pretty(&submitted)?);
        }
        Command::Sensors { sensor_id } => {
            let desk = FieldDesk::new(TokioScheduler, TracingNotifier, AppMetrics::shared());
            let readings = desk.refresh_sensors(&SensorId(sensor_id)).await;
            println!("{}", serde_json::to_string_pretty(&readings)?);
        }
    }

    Ok(())
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn build_session(seed: Option<u64>, delay: DelayPolicy) -> Result<ChatSession> {
    let session = ChatSession::new(Arc::new(ResponseBank::builtin()))
        .context("response bank failed validation")?
        .with_rng(rng_from(seed))
        .with_delay(delay);
    Ok(session)
}

async fn run_chat(session: ChatSession) -> Result<()> {
    let agent = ChatAgent::new(session, TokioScheduler, TracingNotifier, AppMetrics::shared());

    for message in agent.messages() {
        println!("{}\n", message.text());
    }
    println!("type 'exit' to quit, '/lang' to switch language, '/voice' for voice input.");

    loop {
        print!("{} > ", agent.placeholder());
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let message = line.trim();
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }

        if message.is_empty() {
            continue;
        }

        let text = match message {
            "/lang" => {
                let language = agent.toggle_ui_language();
                println!("Language switched to {}", language.display_name());
                let labels = agent
                    .quick_actions()
                    .iter()
                    .map(|action| action.label)
                    .collect::<Vec<_>>();
                println!("Quick actions: {}", labels.join(" | "));
                continue;
            }
            "/voice" => {
                let transcript = agent.simulate_voice_input().await;
                println!("(voice) {transcript}");
                transcript
            }
            other => other.to_string(),
        };

        let reply = agent.send(&text).await?;

        match reply.confidence() {
            Some(confidence) => println!(
                "\n{}\n[{}% confident]\n",
                reply.text(),
                (confidence * 100.0).round()
            ),
            None => println!("\n{}\n", reply.text()),
        }
    }

    Ok(())
}
