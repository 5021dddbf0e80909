use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};

use crate::constants::{AUDIO_EXTENSION, CONTAINER_EXTENSION};

/// `clip.mkv` -> `clip.mp3`
pub fn audio_output_path(input: &Path) -> PathBuf {
    input.with_extension(AUDIO_EXTENSION)
}

/// `clip.mkv` -> `clip.mp4`. Inputs that already are MP4 get a
/// `.reencoded.mp4` suffix so the source is never the target.
pub fn reencode_output_path(input: &Path) -> PathBuf {
    let already_mp4 = input
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case(CONTAINER_EXTENSION));
    if already_mp4 {
        input.with_extension(format!("reencoded.{CONTAINER_EXTENSION}"))
    } else {
        input.with_extension(CONTAINER_EXTENSION)
    }
}

fn base_args(
    input: &Path,
    overwrite: bool,
) -> Vec<OsString> {
    let mut args: Vec<OsString> = ["-hide_banner", "-loglevel", "error"]
        .into_iter()
        .map(OsString::from)
        .collect();
    args.push(if overwrite { "-y" } else { "-n" }.into());
    args.push("-i".into());
    args.push(input.into());
    args
}

pub fn extract_audio_args(
    input: &Path,
    output: &Path,
    overwrite: bool,
) -> Vec<OsString> {
    let mut args = base_args(input, overwrite);
    args.extend(
        ["-vn", "-c:a", "libmp3lame", "-q:a", "2"]
            .into_iter()
            .map(OsString::from),
    );
    args.push(output.into());
    args
}

pub fn reencode_args(
    input: &Path,
    output: &Path,
    overwrite: bool,
) -> Vec<OsString> {
    let mut args = base_args(input, overwrite);
    args.extend(
        [
            "-c:v", "libx264", "-preset", "medium", "-crf", "23", "-c:a", "aac", "-b:a", "192k",
        ]
        .into_iter()
        .map(OsString::from),
    );
    args.push(output.into());
    args
}

/// 16 kHz mono PCM, the input format whisper.cpp expects.
pub fn wav_args(
    input: &Path,
    output: &Path,
) -> Vec<OsString> {
    let mut args = base_args(input, true);
    args.extend(
        ["-vn", "-ar", "16000", "-ac", "1", "-c:a", "pcm_s16le"]
            .into_iter()
            .map(OsString::from),
    );
    args.push(output.into());
    args
}

/// Runs an external tool to completion with stdin detached, turning a
/// non-zero exit into an error carrying the last line of stderr.
pub(crate) fn run_tool(
    binary: &Path,
    args: &[OsString],
) -> Result<()> {
    let output = Command::new(binary)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .with_context(|| format!("failed to launch {}", binary.display()))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let last = stderr
            .lines()
            .rev()
            .find(|l| !l.trim().is_empty())
            .unwrap_or("no output");
        bail!("{} exited with {}: {}", binary.display(), output.status, last.trim());
    }
    Ok(())
}

/// The ffmpeg executable plus the overwrite policy for its outputs.
#[derive(Debug, Clone)]
pub struct Ffmpeg {
    binary: PathBuf,
    overwrite: bool,
}

impl Ffmpeg {
    pub fn new(
        binary: impl Into<PathBuf>,
        overwrite: bool,
    ) -> Self {
        Ffmpeg {
            binary: binary.into(),
            overwrite,
        }
    }

    pub fn extract_audio(
        &self,
        input: &Path,
    ) -> Result<PathBuf> {
        let output = audio_output_path(input);
        run_tool(&self.binary, &extract_audio_args(input, &output, self.overwrite))?;
        Ok(output)
    }

    pub fn reencode(
        &self,
        input: &Path,
    ) -> Result<PathBuf> {
        let output = reencode_output_path(input);
        run_tool(&self.binary, &reencode_args(input, &output, self.overwrite))?;
        Ok(output)
    }

    pub fn to_wav(
        &self,
        input: &Path,
        output: &Path,
    ) -> Result<()> {
        run_tool(&self.binary, &wav_args(input, output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[OsString]) -> Vec<String> {
        args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
    }

    #[test]
    fn output_names_swap_the_extension() {
        assert_eq!(audio_output_path(Path::new("a.mp4")), PathBuf::from("a.mp3"));
        assert_eq!(reencode_output_path(Path::new("b.mkv")), PathBuf::from("b.mp4"));
        assert_eq!(
            reencode_output_path(Path::new("dir/clip.avi")),
            PathBuf::from("dir/clip.mp4")
        );
    }

    #[test]
    fn reencoding_an_mp4_never_targets_the_input() {
        assert_eq!(
            reencode_output_path(Path::new("a.mp4")),
            PathBuf::from("a.reencoded.mp4")
        );
    }

    #[test]
    fn extract_args_drop_video_and_respect_overwrite() {
        let args = strings(&extract_audio_args(Path::new("a.mp4"), Path::new("a.mp3"), false));
        assert_eq!(
            args,
            [
                "-hide_banner", "-loglevel", "error", "-n", "-i", "a.mp4", "-vn", "-c:a",
                "libmp3lame", "-q:a", "2", "a.mp3"
            ]
        );
        let args = strings(&extract_audio_args(Path::new("a.mp4"), Path::new("a.mp3"), true));
        assert!(args.contains(&"-y".to_string()));
    }

    #[test]
    fn reencode_args_use_fixed_preset() {
        let args = strings(&reencode_args(Path::new("b.mkv"), Path::new("b.mp4"), false));
        let joined = args.join(" ");
        assert!(joined.contains("-c:v libx264 -preset medium -crf 23"), "{joined}");
        assert!(joined.contains("-c:a aac -b:a 192k"), "{joined}");
        assert_eq!(args.last().map(String::as_str), Some("b.mp4"));
    }

    #[test]
    fn missing_binary_is_reported_with_its_name() {
        let ffmpeg = Ffmpeg::new("/nonexistent/ffmpeg", false);
        let err = ffmpeg.extract_audio(Path::new("a.mp4")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/ffmpeg"), "{err:#}");
    }

    #[cfg(unix)]
    #[test]
    fn failing_tool_reports_last_stderr_line() {
        let err = run_tool(
            Path::new("sh"),
            &["-c".into(), "echo first >&2; echo 'bad input' >&2; exit 3".into()],
        )
        .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("bad input"), "{msg}");
        assert!(!msg.contains("first"), "{msg}");
    }
}
