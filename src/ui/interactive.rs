use std::io::{self, Stdout};
use std::panic;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::ui::{tui_events, tui_render, tui_state};
use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// Where a menu stage reads keys from and draws to.
pub trait Console {
    /// Blocks until the next key event.
    fn next_key(&mut self) -> Result<KeyEvent>;

    fn draw(
        &mut self,
        screen: &tui_render::Screen,
    ) -> Result<()>;
}

/// A menu that can be driven by [`drive`].
pub trait Stage: Sized {
    const MULTI_SELECT: bool;

    fn screen(&self) -> tui_render::Screen;

    fn update(
        self,
        event: tui_events::MenuEvent,
    ) -> Self;

    fn status(&self) -> tui_state::Status;
}

impl Stage for tui_state::FileSelector {
    const MULTI_SELECT: bool = true;

    fn screen(&self) -> tui_render::Screen {
        tui_state::FileSelector::screen(self)
    }

    fn update(
        self,
        event: tui_events::MenuEvent,
    ) -> Self {
        tui_state::FileSelector::update(self, event)
    }

    fn status(&self) -> tui_state::Status {
        tui_state::FileSelector::status(self)
    }
}

impl Stage for tui_state::ActionMenu {
    const MULTI_SELECT: bool = false;

    fn screen(&self) -> tui_render::Screen {
        tui_state::ActionMenu::screen(self)
    }

    fn update(
        self,
        event: tui_events::MenuEvent,
    ) -> Self {
        tui_state::ActionMenu::update(self, event)
    }

    fn status(&self) -> tui_state::Status {
        tui_state::ActionMenu::status(self)
    }
}

/// Draws the stage, then processes one key at a time until it confirms or
/// quits. Returns the closed stage.
pub fn drive<S: Stage, C: Console>(
    mut stage: S,
    console: &mut C,
) -> Result<S> {
    console.draw(&stage.screen())?;
    while !stage.status().is_closing() {
        let key = console.next_key()?;
        let Some(event) = tui_events::interpret(&key, S::MULTI_SELECT) else {
            continue;
        };
        tracing::trace!(?event, "menu event");
        stage = stage.update(event);
        if !stage.status().is_closing() {
            console.draw(&stage.screen())?;
        }
    }
    Ok(stage)
}

/// Set while a [`TerminalSession`] holds raw mode.
static SESSION_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Leaves raw mode and the alternate screen if a session still holds them.
/// Returns whether anything was restored.
fn restore_if_active() -> io::Result<bool> {
    if !SESSION_ACTIVE.swap(false, Ordering::SeqCst) {
        return Ok(false);
    }
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;
    Ok(true)
}

static PANIC_HOOK: Once = Once::new();

// Restore the terminal before the previous hook prints the panic message.
// Panics outside a session leave the terminal alone.
fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let default_hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = restore_if_active();
            default_hook(info);
        }));
    });
}

/// Raw-mode, alternate-screen terminal held for the lifetime of one stage.
/// The terminal is restored exactly once, on [`TerminalSession::close`] or drop.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    released: bool,
}

impl TerminalSession {
    pub fn enter() -> Result<Self> {
        install_panic_hook();

        enable_raw_mode()?;
        SESSION_ACTIVE.store(true, Ordering::SeqCst);
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, Hide) {
            let _ = restore_if_active();
            return Err(e.into());
        }
        let terminal = match Terminal::new(CrosstermBackend::new(io::stdout())) {
            Ok(t) => t,
            Err(e) => {
                let _ = restore_if_active();
                return Err(e.into());
            }
        };
        Ok(TerminalSession {
            terminal,
            released: false,
        })
    }

    pub fn close(mut self) -> Result<()> {
        self.release()
    }

    fn release(&mut self) -> Result<()> {
        if self.released {
            return Ok(());
        }
        self.released = true;
        restore_if_active()?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.release();
    }
}

impl Console for TerminalSession {
    fn next_key(&mut self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()? {
                return Ok(key);
            }
        }
    }

    fn draw(
        &mut self,
        screen: &tui_render::Screen,
    ) -> Result<()> {
        self.terminal.draw(|f| tui_render::render(f, screen))?;
        Ok(())
    }
}
