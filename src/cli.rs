use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::constants::{DEFAULT_FFMPEG, DEFAULT_MODEL_URL, DEFAULT_WHISPER};

#[derive(Parser, Debug)]
#[command(name = "media-post-process")]
#[command(
    about = "Pick media files in a directory, then extract audio, re-encode to MP4 \
                   or transcribe them in bulk."
)]
pub struct Cli {
    /// Directory to scan for media files.
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Also list media files in subdirectories (honours .gitignore).
    #[arg(short = 'r', long = "recursive")]
    pub recursive: bool,

    /// Glob patterns (relative to DIR) to hide from the list.
    #[arg(short = 'x', long = "exclude")]
    pub exclude: Vec<String>,

    /// ffmpeg executable used for extraction and re-encoding.
    #[arg(long = "ffmpeg", default_value = DEFAULT_FFMPEG)]
    pub ffmpeg: PathBuf,

    /// whisper.cpp command-line executable used for transcription.
    #[arg(long = "whisper", default_value = DEFAULT_WHISPER)]
    pub whisper: PathBuf,

    /// Local Whisper model file; downloaded on first transcription if missing.
    #[arg(long = "model", env = "MEDIA_POST_PROCESS_MODEL")]
    pub model: Option<PathBuf>,

    /// Where to download the Whisper model from.
    #[arg(long = "model-url", default_value = DEFAULT_MODEL_URL)]
    pub model_url: String,

    /// Spoken language hint passed to the transcriber (e.g. "en").
    #[arg(short = 'l', long = "language")]
    pub language: Option<String>,

    /// Overwrite output files that already exist.
    #[arg(short = 'y', long = "overwrite")]
    pub overwrite: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}
