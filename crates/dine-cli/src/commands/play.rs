use std::fs;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use dine_config::DineConfig;
use dine_session::{Intent, Session, SessionRuntime, SessionSettings};
use tracing::{info, warn};

/// Feed a YAML intent script through a live session runtime, optionally let
/// the countdown run, then print the final view as JSON.
///
/// Rejected intents are logged and skipped; the script keeps going.
pub async fn play_script(cfg: &DineConfig, script_path: &str, wait_secs: u64) -> Result<()> {
    let raw = fs::read_to_string(script_path)
        .with_context(|| format!("read script failed: {script_path}"))?;
    let intents: Vec<Intent> =
        serde_yaml::from_str(&raw).context("script must be a YAML list of intents")?;

    let catalog = Arc::new(dine_session::open_catalog(cfg)?);
    let settings = SessionSettings::from(cfg);
    let session = Session::new(catalog, &settings);
    let (handle, task) =
        SessionRuntime::spawn(session, Duration::from_millis(settings.tick_millis));

    let mut rejected = 0usize;
    for (i, intent) in intents.into_iter().enumerate() {
        let name = intent.name();
        if let Err(e) = handle.apply(intent).await {
            rejected += 1;
            warn!(step = i + 1, intent = name, error = %e, "script step rejected");
        }
    }
    info!(rejected, "script finished");

    if wait_secs > 0 {
        tokio::time::sleep(Duration::from_secs(wait_secs)).await;
    }

    let view = handle.shutdown().await?;
    task.await.context("session runtime task failed")?;

    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
