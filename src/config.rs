use crate::cli::Cli;
use crate::constants::MODEL_FILE_NAME;
use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Application configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    pub dir: PathBuf,
    pub recursive: bool,
    pub exclude: Vec<String>,
    pub ffmpeg: PathBuf,
    pub whisper: PathBuf,
    pub model_path: PathBuf,
    pub model_url: String,
    pub language: Option<String>,
    pub overwrite: bool,
    pub verbose: u8,
}

impl Config {
    /// Parse CLI arguments into a Config
    pub fn from_cli() -> Result<Self> {
        Self::from_args(Cli::parse())
    }

    pub fn from_args(cli: Cli) -> Result<Self> {
        if !cli.dir.is_dir() {
            bail!("{} is not a directory", cli.dir.display());
        }
        let dir = dunce::canonicalize(&cli.dir)?;
        let model_path = cli.model.unwrap_or_else(default_model_path);
        Ok(Config {
            dir,
            recursive: cli.recursive,
            exclude: cli.exclude,
            ffmpeg: cli.ffmpeg,
            whisper: cli.whisper,
            model_path,
            model_url: cli.model_url,
            language: cli.language,
            overwrite: cli.overwrite,
            verbose: cli.verbose,
        })
    }

    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// `<cache>/media-post-process/ggml-base.bin`, or `models/ggml-base.bin` when
/// the platform has no cache directory.
pub fn default_model_path() -> PathBuf {
    match dirs::cache_dir() {
        Some(cache) => cache.join(env!("CARGO_PKG_NAME")).join(MODEL_FILE_NAME),
        None => PathBuf::from("models").join(MODEL_FILE_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("media-post-process").chain(args.iter().copied()))
    }

    #[test]
    fn rejects_missing_directory() {
        let err = Config::from_args(parse(&["/definitely/not/here"])).unwrap_err();
        assert!(err.to_string().contains("is not a directory"), "{err}");
    }

    #[test]
    fn explicit_model_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        let dir_arg = dir.path().to_string_lossy().into_owned();
        let config = Config::from_args(parse(&[dir_arg.as_str(), "--model", "m.bin", "-vv"])).unwrap();
        assert_eq!(config.model_path, PathBuf::from("m.bin"));
        assert_eq!(config.log_level(), "debug");
        assert!(!config.overwrite);
    }

    #[test]
    fn default_model_lives_under_package_dir() {
        let path = default_model_path();
        assert!(path.ends_with(MODEL_FILE_NAME));
    }
}
