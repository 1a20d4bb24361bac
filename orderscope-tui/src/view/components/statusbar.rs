//! Bottom status bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::{App, FocusPanel};
use crate::view::theme::Styles;

/// Render the status bar: shortcut hints, then any transient notice.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// Shortcut hints for the current focus.
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![("Tab", "Switch Panel")];

    match app.focus {
        FocusPanel::Search => {
            hints.push(("Enter", "Search"));
        }
        FocusPanel::Detail => {
            hints.push(("←→", "Tabs"));
            hints.push(("↑↓", "Scroll"));
        }
    }

    hints.push(("Alt+←/→", "History"));
    hints.push(("Alt+r", "Reload"));
    hints.push(("Alt+q", "Quit"));

    hints
}
