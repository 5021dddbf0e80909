pub mod ffmpeg;
pub mod model;
pub mod transcribe;

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::Config;
pub use ffmpeg::Ffmpeg;
pub use model::{HttpSource, ModelSource, ModelStore};
pub use transcribe::{TranscriptionEngine, WhisperCli};

/// The post-processing operations offered after file selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ExtractAudio,
    Reencode,
    Transcribe,
}

impl Action {
    /// Menu order.
    pub const ALL: [Action; 3] = [Action::ExtractAudio, Action::Reencode, Action::Transcribe];

    pub fn label(self) -> &'static str {
        match self {
            Action::ExtractAudio => "Extract audio with MP3 format",
            Action::Reencode => "Re-encode media files to MP4 format",
            Action::Transcribe => "Transcribe audio with OpenAI's Whisper model",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(match self {
            Action::ExtractAudio => "extract-audio",
            Action::Reencode => "re-encode",
            Action::Transcribe => "transcribe",
        })
    }
}

/// External collaborators the jobs run against.
pub struct Toolchain {
    pub ffmpeg: Ffmpeg,
    pub models: ModelStore,
    pub engine: Box<dyn TranscriptionEngine>,
}

impl Toolchain {
    pub fn from_config(config: &Config) -> Self {
        let ffmpeg = Ffmpeg::new(&config.ffmpeg, config.overwrite);
        let engine = WhisperCli::new(
            &config.whisper,
            ffmpeg.clone(),
            config.language.clone(),
            config.overwrite,
        );
        Toolchain {
            ffmpeg,
            models: ModelStore::new(
                &config.model_path,
                Box::new(HttpSource::new(config.model_url.clone())),
            ),
            engine: Box::new(engine),
        }
    }
}

/// Runs `action` for a single file, returning the path it produced.
pub fn run_job(
    action: Action,
    tools: &Toolchain,
    input: &Path,
) -> Result<PathBuf> {
    match action {
        Action::ExtractAudio => tools.ffmpeg.extract_audio(input),
        Action::Reencode => tools.ffmpeg.reencode(input),
        Action::Transcribe => {
            let model = tools
                .models
                .ensure()
                .context("transcription model unavailable")?;
            tools.engine.transcribe(&model, input)
        }
    }
}

struct Job {
    input: PathBuf,
    handle: JoinHandle<Result<PathBuf>>,
}

/// Jobs started by [`dispatch`], one per file, still running.
pub struct Batch {
    action: Action,
    jobs: Vec<Job>,
}

/// Per-file results of a finished batch, in selection order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub completed: Vec<(PathBuf, PathBuf)>,
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Starts one job per file, in order, and returns without waiting for them.
pub fn dispatch(
    action: Action,
    files: Vec<PathBuf>,
    tools: Arc<Toolchain>,
) -> Batch {
    let jobs = files
        .into_iter()
        .map(|input| {
            let tools = Arc::clone(&tools);
            let job_input = input.clone();
            let handle = thread::spawn(move || run_job(action, &tools, &job_input));
            Job { input, handle }
        })
        .collect();
    Batch { action, jobs }
}

impl Batch {
    /// Waits for every job. A failure only affects its own file.
    pub fn wait(self) -> BatchReport {
        let mut report = BatchReport::default();
        for Job { input, handle } in self.jobs {
            let result = handle
                .join()
                .unwrap_or_else(|_| Err(anyhow::anyhow!("worker panicked")));
            match result {
                Ok(output) => {
                    info!(action = %self.action, "{} -> {}", input.display(), output.display());
                    report.completed.push((input, output));
                }
                Err(e) => {
                    warn!(action = %self.action, "{}: {e:#}", input.display());
                    report.failed.push((input, format!("{e:#}")));
                }
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_order_is_fixed() {
        assert_eq!(
            Action::ALL,
            [Action::ExtractAudio, Action::Reencode, Action::Transcribe]
        );
        assert_eq!(Action::ALL[0].label(), "Extract audio with MP3 format");
    }

    #[test]
    fn display_is_kebab_case() {
        assert_eq!(Action::Reencode.to_string(), "re-encode");
    }
}
