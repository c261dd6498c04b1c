//! Handlers behind each CLI command.

use std::io::Write;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use crate::app::{AppState, TopicForm};
use crate::config::{default_config_path, GeneratorConfig};
use crate::generation::{GenerationPhase, PostGenerator, ProgressSink};
use crate::health::HealthStatus;
use crate::models::GoogleModel;
use crate::present;

use super::GenerateArgs;

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

pub fn handle_health() -> CliResult {
    println!("{}", serde_json::to_string_pretty(&HealthStatus::ok())?);
    Ok(())
}

pub async fn handle_generate(args: GenerateArgs, config_path: Option<&std::path::Path>) -> CliResult {
    let mut form = TopicForm::new();
    form.set_topic(args.topic.clone().unwrap_or_default());
    form.set_tone(args.tone);
    form.set_audience(args.audience);
    form.set_length(args.length);
    form.set_post_count(usize::from(args.count))?;

    let Some(request) = form.submit() else {
        return Err("a topic is required, e.g. postcraft generate \"Remote work tips\"".into());
    };

    let path = config_path.map_or_else(default_config_path, |p| p.to_path_buf());
    let mut config = GeneratorConfig::load_from(&path)?;
    if let Some(model) = args.model.as_deref() {
        config.model = GoogleModel::from_str(model)?;
    }
    if !config.has_api_key() {
        tracing::warn!("No Gemini API key configured; requests will be rejected");
    }

    let generator = PostGenerator::from_config(&config)?;

    let state = Arc::new(Mutex::new(AppState::default()));
    lock(&state).start();

    let sink_state = state.clone();
    let sink = move |phase: GenerationPhase| {
        lock(&sink_state).on_phase(phase);
        eprintln!("… {}", phase.description());
    };

    let progress: &ProgressSink = &sink;

    let result = generator.generate(&request, Some(progress)).await;
    if let Err(e) = &result {
        tracing::debug!(cause = %e.cause(), "Run failed");
        eprintln!("{}", e.cause().recovery_suggestion().hint());
    }
    lock(&state).complete(result);

    let final_state = lock(&state).clone();
    match final_state {
        AppState::Results { output } => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                print!("{}", present::render_results(&output));
                std::io::stdout().flush()?;
            }

            if let Some(position) = args.copy {
                let post = position
                    .checked_sub(1)
                    .and_then(|i| output.posts.get(i))
                    .ok_or_else(|| format!("no post #{position} to copy"))?;
                present::copy_to_clipboard(&present::clipboard_text(post))?;
                eprintln!("Copied post #{position} to the clipboard.");
            }
            Ok(())
        }
        AppState::Error { message } => Err(message.into()),
        other => Err(format!("generation ended in unexpected state: {other:?}").into()),
    }
}

fn lock(state: &Mutex<AppState>) -> std::sync::MutexGuard<'_, AppState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
