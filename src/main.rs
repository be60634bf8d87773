//! webkeys -- replays recorded browser key events through the web decoder.
//!
//! Usage: `webkeys <recording.toml>`
//!
//! Prints one line per event with the resolved physical and logical keys.
//! Log level: `RUST_LOG`, else the recording's `log_level`, else `info`.

use std::env;
use std::path::PathBuf;
use std::process;

use webkeys::config::Recording;
use webkeys::{RawKeyEventData, WebKeyEventData};

fn main() {
    let Some(path) = env::args_os().nth(1).map(PathBuf::from) else {
        println!("webkeys v{}", env!("CARGO_PKG_VERSION"));
        println!("usage: webkeys <recording.toml>");
        return;
    };

    // Load before the logger exists so the file can choose the default level.
    let recording = Recording::load(&path);
    let default_level = recording
        .as_ref()
        .ok()
        .and_then(|r| r.log_level.clone())
        .unwrap_or_else(|| "info".to_owned());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let recording = match recording {
        Ok(recording) => recording,
        Err(e) => {
            log::error!("{e}");
            process::exit(1);
        }
    };

    log::info!(
        "replaying {} event(s) from {}",
        recording.events.len(),
        path.display()
    );
    for event in &recording.events {
        println!("{}", describe(event));
    }
}

/// Formats the decoded view of one event.
fn describe(event: &WebKeyEventData) -> String {
    let modifiers: Vec<String> = event
        .modifiers_pressed()
        .into_iter()
        .map(|(key, _)| format!("{key:?}"))
        .collect();
    format!(
        "{:<16} label={:?} physical={} logical={} modifiers=[{}]",
        event.code(),
        event.key_label(),
        event.physical_key(),
        event.logical_key(),
        modifiers.join(", ")
    )
}
