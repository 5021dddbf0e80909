#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Result, anyhow};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use media_post_process::{
    actions::{Ffmpeg, ModelSource, ModelStore, Toolchain, TranscriptionEngine},
    media::MediaFile,
    ui::{Console, tui_render::Screen},
};

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub const UP: KeyCode = KeyCode::Up;
pub const DOWN: KeyCode = KeyCode::Down;
pub const SPACE: KeyCode = KeyCode::Char(' ');
pub const ENTER: KeyCode = KeyCode::Enter;
pub const QUIT: KeyCode = KeyCode::Char('q');

#[derive(Default)]
struct Script {
    keys: VecDeque<KeyEvent>,
    frames: Vec<Screen>,
    opened: usize,
}

/// Console fed from a fixed key script; every clone shares the same script
/// so one script can span both menu stages.
#[derive(Clone, Default)]
pub struct ScriptedConsole {
    script: Rc<RefCell<Script>>,
}

impl ScriptedConsole {
    pub fn new(keys: &[KeyCode]) -> Self {
        let console = ScriptedConsole::default();
        console.script.borrow_mut().keys = keys.iter().copied().map(key).collect();
        console
    }

    /// Hands out a console for one stage, counting how many were opened.
    pub fn open(&self) -> Result<ScriptedConsole> {
        self.script.borrow_mut().opened += 1;
        Ok(self.clone())
    }

    pub fn opened(&self) -> usize {
        self.script.borrow().opened
    }

    pub fn frames(&self) -> Vec<Screen> {
        self.script.borrow().frames.clone()
    }

    pub fn last_frame(&self) -> Screen {
        self.script
            .borrow()
            .frames
            .last()
            .cloned()
            .expect("nothing was drawn")
    }

    pub fn remaining_keys(&self) -> usize {
        self.script.borrow().keys.len()
    }
}

impl Console for ScriptedConsole {
    fn next_key(&mut self) -> Result<KeyEvent> {
        self.script
            .borrow_mut()
            .keys
            .pop_front()
            .ok_or_else(|| anyhow!("key script exhausted"))
    }

    fn draw(
        &mut self,
        screen: &Screen,
    ) -> Result<()> {
        self.script.borrow_mut().frames.push(screen.clone());
        Ok(())
    }
}

pub fn media_files(names: &[&str]) -> Vec<MediaFile> {
    names
        .iter()
        .map(|n| MediaFile {
            path: PathBuf::from(n),
            label: n.to_string(),
        })
        .collect()
}

/// Model source that must never be reached.
pub struct Unreachable;

impl ModelSource for Unreachable {
    fn fetch(
        &self,
        _dest: &mut std::fs::File,
    ) -> Result<u64> {
        Err(anyhow!("model fetch attempted"))
    }

    fn describe(&self) -> String {
        "unreachable://".into()
    }
}

/// Engine that only records which files it was asked to transcribe.
#[derive(Clone, Default)]
pub struct RecordingEngine {
    pub seen: std::sync::Arc<std::sync::Mutex<Vec<PathBuf>>>,
}

impl TranscriptionEngine for RecordingEngine {
    fn transcribe(
        &self,
        _model: &std::path::Path,
        media: &std::path::Path,
    ) -> Result<PathBuf> {
        self.seen.lock().unwrap().push(media.to_path_buf());
        Ok(media.with_extension("txt"))
    }
}

/// Toolchain whose executables do not exist, so every job fails fast.
pub fn missing_tools() -> Toolchain {
    Toolchain {
        ffmpeg: Ffmpeg::new("/nonexistent/ffmpeg", false),
        models: ModelStore::new("/nonexistent/model.bin", Box::new(Unreachable)),
        engine: Box::new(RecordingEngine::default()),
    }
}
