//! Main layout rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::model::App;

use super::components;
use super::theme::colors;

/// Render the whole frame.
pub fn render(app: &mut App, frame: &mut Frame) {
    let size = frame.area();

    // Five rows: title bar, address line, search box, detail area,
    // status bar.
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    render_title_bar(frame, main_layout[0]);
    components::address::render(app, frame, main_layout[1]);
    components::search::render(app, frame, main_layout[2]);
    render_detail_block(app, frame, main_layout[3]);
    components::statusbar::render(app, frame, main_layout[4]);
}

/// Render the title bar.
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(" Orderscope v0.1.0")
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// Render the bordered detail block and its content.
fn render_detail_block(app: &mut App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let border_style = if app.focus.is_detail() {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let block = Block::default()
        .title(" Order Detail ")
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    components::detail::render(app, frame, inner_area);
}
