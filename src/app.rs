use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use crate::actions::{self, Action, Batch, Toolchain};
use crate::media::MediaFile;
use crate::ui::{self, ActionMenu, Console, FileSelector, Status};

/// How an interactive run ended.
pub enum Outcome {
    /// The directory had no media files; no menu was shown.
    NoMediaFiles,
    /// `q` at either stage; nothing was dispatched.
    Quit,
    /// The file selector was confirmed with nothing checked.
    NothingSelected,
    /// Jobs were started and may still be running.
    Dispatched { action: Action, batch: Batch },
}

/// Runs the file selector, then the action menu, then starts the chosen
/// action on the selected files.
///
/// `open_console` is called once per stage; the console is dropped (and the
/// terminal released) as soon as that stage closes. `announce` sees the
/// chosen action before any job starts.
pub fn run<C, F, A>(
    files: Vec<MediaFile>,
    tools: Arc<Toolchain>,
    mut open_console: F,
    announce: A,
) -> Result<Outcome>
where
    C: Console,
    F: FnMut() -> Result<C>,
    A: FnOnce(Action),
{
    if files.is_empty() {
        return Ok(Outcome::NoMediaFiles);
    }

    let selector = {
        let mut console = open_console()?;
        ui::drive(FileSelector::new(files), &mut console)?
    };
    if selector.status() == Status::Quit {
        debug!("quit at file selection");
        return Ok(Outcome::Quit);
    }
    let selected = selector.into_selection();
    if selected.is_empty() {
        return Ok(Outcome::NothingSelected);
    }

    let menu = {
        let mut console = open_console()?;
        ui::drive(ActionMenu::new(), &mut console)?
    };
    if menu.status() == Status::Quit {
        debug!("quit at action menu");
        return Ok(Outcome::Quit);
    }

    let action = menu.choice();
    announce(action);
    info!(%action, files = selected.len(), "dispatching");
    let paths = selected.into_iter().map(|f| f.path).collect();
    let batch = actions::dispatch(action, paths, tools);
    Ok(Outcome::Dispatched { action, batch })
}
