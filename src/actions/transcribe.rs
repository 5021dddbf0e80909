use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::actions::ffmpeg::{Ffmpeg, run_tool};
use crate::constants::TRANSCRIPT_EXTENSION;

/// Turns a media file into a transcript using an already available model.
pub trait TranscriptionEngine: Send + Sync {
    /// Returns the path of the written transcript.
    fn transcribe(
        &self,
        model: &Path,
        media: &Path,
    ) -> Result<PathBuf>;
}

/// `talk.mkv` -> `talk.txt`
pub fn transcript_path(media: &Path) -> PathBuf {
    media.with_extension(TRANSCRIPT_EXTENSION)
}

pub fn whisper_args(
    model: &Path,
    wav: &Path,
    output_stem: &Path,
    language: Option<&str>,
) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "-m".into(),
        model.into(),
        "-f".into(),
        wav.into(),
        "-otxt".into(),
        "-of".into(),
        output_stem.into(),
        "-np".into(),
    ];
    if let Some(lang) = language {
        args.push("-l".into());
        args.push(lang.into());
    }
    args
}

/// whisper.cpp's command-line front end, fed a WAV that ffmpeg decodes
/// into a scratch directory first. An existing transcript is only replaced
/// when `overwrite` is set.
#[derive(Debug, Clone)]
pub struct WhisperCli {
    binary: PathBuf,
    ffmpeg: Ffmpeg,
    language: Option<String>,
    overwrite: bool,
}

impl WhisperCli {
    pub fn new(
        binary: impl Into<PathBuf>,
        ffmpeg: Ffmpeg,
        language: Option<String>,
        overwrite: bool,
    ) -> Self {
        WhisperCli {
            binary: binary.into(),
            ffmpeg,
            language,
            overwrite,
        }
    }
}

impl TranscriptionEngine for WhisperCli {
    fn transcribe(
        &self,
        model: &Path,
        media: &Path,
    ) -> Result<PathBuf> {
        let transcript = transcript_path(media);
        if !self.overwrite && transcript.exists() {
            bail!("{} already exists", transcript.display());
        }

        let scratch = tempfile::tempdir()?;
        let wav = scratch.path().join("audio.wav");
        self.ffmpeg
            .to_wav(media, &wav)
            .context("decoding audio for transcription")?;

        // whisper-cli appends ".txt" to the -of stem itself
        let stem = media.with_extension("");
        run_tool(
            &self.binary,
            &whisper_args(model, &wav, &stem, self.language.as_deref()),
        )?;
        Ok(transcript)
    }
}
