use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Somewhere the transcription model can be fetched from.
pub trait ModelSource: Send + Sync {
    /// Writes the model into `dest`, returning the number of bytes written.
    fn fetch(
        &self,
        dest: &mut File,
    ) -> Result<u64>;

    fn describe(&self) -> String;
}

/// Plain HTTP(S) download.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        HttpSource { url: url.into() }
    }
}

impl ModelSource for HttpSource {
    fn fetch(
        &self,
        dest: &mut File,
    ) -> Result<u64> {
        let mut response = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()?
            .get(&self.url)
            .send()
            .with_context(|| format!("GET {}", self.url))?
            .error_for_status()?;
        let bytes = response.copy_to(dest)?;
        Ok(bytes)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// The local model file, downloaded on first use.
///
/// Downloads are serialized: concurrent callers wait on the same lock and
/// find the file in place once the first download finishes. A failed
/// download leaves nothing behind, so the next caller tries again.
pub struct ModelStore {
    path: PathBuf,
    source: Box<dyn ModelSource>,
    lock: Mutex<()>,
}

impl ModelStore {
    pub fn new(
        path: impl Into<PathBuf>,
        source: Box<dyn ModelSource>,
    ) -> Self {
        ModelStore {
            path: path.into(),
            source,
            lock: Mutex::new(()),
        }
    }

    /// Returns the model path, downloading the model first if it is missing.
    pub fn ensure(&self) -> Result<PathBuf> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| anyhow!("model download lock poisoned"))?;
        if self.path.is_file() {
            debug!("model present at {}", self.path.display());
            return Ok(self.path.clone());
        }

        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        fs::create_dir_all(dir)
            .with_context(|| format!("creating model directory {}", dir.display()))?;

        info!(
            "downloading model from {} to {}",
            self.source.describe(),
            self.path.display()
        );
        // Stage next to the target so the final rename stays on one filesystem
        let mut staged = NamedTempFile::new_in(dir)?;
        let bytes = self
            .source
            .fetch(staged.as_file_mut())
            .with_context(|| format!("downloading model from {}", self.source.describe()))?;
        staged.as_file().sync_all()?;
        staged
            .persist(&self.path)
            .map_err(|e| e.error)
            .with_context(|| format!("saving model to {}", self.path.display()))?;
        info!(bytes, "model saved to {}", self.path.display());
        Ok(self.path.clone())
    }
}
