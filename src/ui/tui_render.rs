use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

/// Everything needed to draw one frame of a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub title: &'static str,
    pub rows: Vec<String>,
    pub cursor: usize,
    pub footer: &'static str,
}

/// Renders the rows (cursor row highlighted) above the instructions footer.
pub fn render(
    frame: &mut Frame,
    screen: &Screen,
) {
    // Layout: list area, then a boxed help footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(4)])
        .split(frame.area());

    let items: Vec<ListItem> = screen
        .rows
        .iter()
        .map(|row| ListItem::new(Line::from(row.as_str())))
        .collect();

    // ListState keeps the cursor row in view on long lists
    let mut list_state = ListState::default();
    list_state.select(Some(screen.cursor));
    let widget = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(screen.title))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_stateful_widget(widget, chunks[0], &mut list_state);

    let help = Paragraph::new(Line::from(Span::styled(
        screen.footer,
        Style::default().fg(Color::Yellow),
    )))
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[1]);
}
