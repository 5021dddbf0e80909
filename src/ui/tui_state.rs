use crate::actions::Action;
use crate::constants::{MENU_FOOTER, MENU_TITLE, SELECT_ALL_LABEL, SELECTOR_FOOTER, SELECTOR_TITLE};
use crate::media::MediaFile;
use crate::ui::tui_events::{MenuEvent, Move};
use crate::ui::tui_render::Screen;

/// Whether a stage still accepts keys, and how it closed if not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Listening,
    Confirmed,
    Quit,
}

impl Status {
    pub fn is_closing(self) -> bool {
        self != Status::Listening
    }
}

/// Highlighted row index, always in `[0, len)`; moves wrap at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    len: usize,
}

impl Cursor {
    pub fn new(len: usize) -> Self {
        Cursor {
            index: 0,
            len: len.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn step(
        &mut self,
        direction: Move,
    ) {
        self.index = match direction {
            Move::Up => (self.index + self.len - 1) % self.len,
            Move::Down => (self.index + 1) % self.len,
        };
    }
}

fn marker(on: bool) -> &'static str {
    if on { "> " } else { "  " }
}

fn check(on: bool) -> &'static str {
    if on { "+ " } else { "  " }
}

/// Multi-select list of media files followed by a synthetic "select all" row.
#[derive(Debug, Clone)]
pub struct FileSelector {
    files: Vec<MediaFile>,
    selected: Vec<bool>,
    cursor: Cursor,
    status: Status,
}

impl FileSelector {
    pub fn new(files: Vec<MediaFile>) -> Self {
        let selected = vec![false; files.len()];
        let cursor = Cursor::new(files.len() + 1);
        FileSelector {
            files,
            selected,
            cursor,
            status: Status::Listening,
        }
    }

    pub fn selection(&self) -> &[bool] {
        &self.selected
    }

    pub fn cursor(&self) -> usize {
        self.cursor.index()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    fn select_all_row(&self) -> usize {
        self.files.len()
    }

    /// Vacuously true for an empty list.
    pub fn all_selected(&self) -> bool {
        self.selected.iter().all(|s| *s)
    }

    pub fn move_cursor(
        &mut self,
        direction: Move,
    ) {
        self.cursor.step(direction);
    }

    /// On the "select all" row this is all-or-nothing: everything is cleared
    /// when everything is selected, otherwise everything is selected.
    pub fn toggle_at_cursor(&mut self) {
        let idx = self.cursor.index();
        if idx == self.select_all_row() {
            let value = !self.all_selected();
            self.selected.iter_mut().for_each(|s| *s = value);
        } else if let Some(s) = self.selected.get_mut(idx) {
            *s = !*s;
        }
    }

    /// Selected files in list order.
    pub fn selected_files(&self) -> Vec<MediaFile> {
        self.files
            .iter()
            .zip(&self.selected)
            .filter(|(_, checked)| **checked)
            .map(|(f, _)| f.clone())
            .collect()
    }

    pub fn into_selection(self) -> Vec<MediaFile> {
        self.selected_files()
    }

    pub fn update(
        mut self,
        event: MenuEvent,
    ) -> Self {
        if self.status.is_closing() {
            return self;
        }
        match event {
            MenuEvent::Navigate(direction) => self.move_cursor(direction),
            MenuEvent::Toggle => self.toggle_at_cursor(),
            MenuEvent::Confirm => self.status = Status::Confirmed,
            MenuEvent::Quit => self.status = Status::Quit,
        }
        self
    }

    pub fn rows(&self) -> Vec<String> {
        let cursor = self.cursor.index();
        let mut rows: Vec<String> = self
            .files
            .iter()
            .zip(&self.selected)
            .enumerate()
            .map(|(i, (file, checked))| {
                format!("{}{}{}", marker(i == cursor), check(*checked), file.label)
            })
            .collect();
        rows.push(format!(
            "{}{}{}",
            marker(cursor == self.select_all_row()),
            check(self.all_selected()),
            SELECT_ALL_LABEL
        ));
        rows
    }

    pub fn screen(&self) -> Screen {
        Screen {
            title: SELECTOR_TITLE,
            rows: self.rows(),
            cursor: self.cursor.index(),
            footer: SELECTOR_FOOTER,
        }
    }
}

/// Single-select list over the fixed set of actions.
#[derive(Debug, Clone)]
pub struct ActionMenu {
    cursor: Cursor,
    status: Status,
}

impl Default for ActionMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionMenu {
    pub fn new() -> Self {
        ActionMenu {
            cursor: Cursor::new(Action::ALL.len()),
            status: Status::Listening,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor.index()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// The action under the cursor.
    pub fn choice(&self) -> Action {
        Action::ALL[self.cursor.index()]
    }

    pub fn update(
        mut self,
        event: MenuEvent,
    ) -> Self {
        if self.status.is_closing() {
            return self;
        }
        match event {
            MenuEvent::Navigate(direction) => self.cursor.step(direction),
            MenuEvent::Toggle => {}
            MenuEvent::Confirm => self.status = Status::Confirmed,
            MenuEvent::Quit => self.status = Status::Quit,
        }
        self
    }

    pub fn rows(&self) -> Vec<String> {
        Action::ALL
            .iter()
            .enumerate()
            .map(|(i, action)| format!("{}{}", marker(i == self.cursor.index()), action.label()))
            .collect()
    }

    pub fn screen(&self) -> Screen {
        Screen {
            title: MENU_TITLE,
            rows: self.rows(),
            cursor: self.cursor.index(),
            footer: MENU_FOOTER,
        }
    }
}
