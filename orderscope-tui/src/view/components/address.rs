//! Address line component: history arrows, current path, entry counter.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::App;
use crate::view::theme::colors;

/// Render the address line.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let controller = &app.controller;

    let history = controller.history();
    let counter = format!("{}/{} ", history.position() + 1, history.len());
    let counter_width = u16::try_from(counter.len()).unwrap_or(8);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(counter_width)])
        .split(area);

    let arrow = |lit: bool| {
        if lit {
            Style::default().fg(c.fg)
        } else {
            Style::default().fg(c.muted)
        }
    };

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled("◀", arrow(controller.can_navigate_back())),
        Span::raw(" "),
        Span::styled("▶", arrow(controller.can_navigate_forward())),
        Span::raw("  "),
        Span::styled(
            controller.current_path().to_string(),
            Style::default().fg(c.highlight),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), columns[0]);

    let counter = Paragraph::new(counter)
        .style(Style::default().fg(c.muted))
        .alignment(Alignment::Right);
    frame.render_widget(counter, columns[1]);
}
