//! Search box component: identifier input plus the search trigger.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::model::App;
use crate::view::theme::colors;

/// Render the search row.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let border_style = if app.focus.is_search() {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let block = Block::default()
        .title(" Order ID ")
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(12)])
        .split(inner);

    let input_area = columns[0];
    let button_area = columns[1];

    // Scroll the input horizontally so the cursor column stays visible.
    let offset = app.input.cursor_display_offset();
    let visible = input_area.width.saturating_sub(1);
    let scroll_x = offset.saturating_sub(visible);

    let input = Paragraph::new(app.input.value())
        .style(Style::default().fg(c.fg))
        .scroll((0, scroll_x));
    frame.render_widget(input, input_area);

    if app.focus.is_search() {
        frame.set_cursor_position((input_area.x + (offset - scroll_x), input_area.y));
    }

    // The trigger only signals whether activation is accepted; Enter is
    // handled either way and the token guard sorts out overlap.
    let enabled = app.controller.presenter().search_enabled();
    let button_style = if enabled {
        Style::default()
            .bg(c.highlight)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };
    let button = Paragraph::new("[ Search ]")
        .style(button_style)
        .alignment(Alignment::Center);
    frame.render_widget(button, button_area);
}
