//! Status line, sort toggle and move list.

use super::super::app::Focus;
use super::board::panel_style;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use timewarp_tictactoe::GameView;

/// Renders the info panel next to the board.
pub fn render_info(f: &mut Frame, area: Rect, view: &GameView, selected: usize, focus: Focus) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let status = Paragraph::new(view.status().as_str())
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[0]);

    let toggle = Paragraph::new(Line::from(vec![
        Span::styled("[S] ", Style::default().fg(Color::Cyan)),
        Span::raw(view.toggle_label().as_str()),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(toggle, chunks[1]);

    let items: Vec<ListItem> = view
        .moves()
        .iter()
        .enumerate()
        .map(|(row, entry)| {
            let mut style = Style::default();
            if *entry.is_current() {
                style = style.add_modifier(Modifier::BOLD);
            }
            if focus == Focus::History && row == selected {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::from(Span::styled(
                format!("{}. {}", row + 1, entry.label()),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Moves")
            .border_style(panel_style(focus == Focus::History)),
    );
    // `selected` tracks the current entry outside history focus, so the
    // list always scrolls to the row that matters.
    let mut state = ListState::default().with_selected(Some(selected));
    f.render_stateful_widget(list, chunks[2], &mut state);
}
