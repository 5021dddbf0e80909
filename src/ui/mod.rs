pub mod interactive;
pub mod tui_events;
pub mod tui_render;
pub mod tui_state;

// Re-export the pieces the app flow is built from
pub use interactive::{Console, Stage, TerminalSession, drive};
pub use tui_state::{ActionMenu, FileSelector, Status};
