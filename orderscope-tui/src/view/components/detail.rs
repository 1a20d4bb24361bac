//! Order detail component: tab header plus the panel the display state
//! selects.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use orderscope_core::{DisplayState, NO_ITEMS_PLACEHOLDER, OrderViewModel, Slot};

use crate::model::{App, DetailTab};
use crate::view::theme::colors;

/// Render the detail area.
///
/// Takes the model mutably to clamp the scroll offset against the height
/// of the content actually rendered this frame.
pub fn render(app: &mut App, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    let header_area = rows[0];
    let content_area = rows[1];

    render_tab_header(app, frame, header_area);

    let lines = content_lines(app);
    let content_height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let max_scroll = content_height.saturating_sub(content_area.height);
    app.detail_scroll = app.detail_scroll.min(max_scroll);

    let paragraph = Paragraph::new(lines).scroll((app.detail_scroll, 0));
    frame.render_widget(paragraph, content_area);
}

fn render_tab_header(app: &App, frame: &mut Frame, area: Rect) {
    let mut tab_spans = vec![Span::raw("  ")];
    for (i, tab) in DetailTab::all().iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" | "));
        }
        let style = if app.tabs.is_active(*tab) {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        tab_spans.push(Span::styled(tab.name(), style));
    }

    let lines = vec![
        Line::from(tab_spans),
        Line::styled(
            "  ────────────────────────────────────────",
            Style::default().fg(Color::DarkGray),
        ),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Lines for the panel below the tab header.
fn content_lines(app: &App) -> Vec<Line<'static>> {
    let c = colors();

    match app.controller.display_state() {
        DisplayState::Idle => vec![
            Line::from(""),
            Line::styled(
                "  Enter an order ID to look it up.",
                Style::default().fg(c.muted),
            ),
        ],
        DisplayState::Loading => vec![
            Line::from(""),
            Line::styled("  Loading order data...", Style::default().fg(c.warning)),
        ],
        DisplayState::Error => {
            let message = app
                .controller
                .presenter()
                .error_message()
                .unwrap_or_default()
                .to_string();
            vec![
                Line::from(""),
                Line::styled(format!("  Error: {message}"), Style::default().fg(c.error)),
            ]
        }
        DisplayState::Result => result_lines(app),
    }
}

fn result_lines(app: &App) -> Vec<Line<'static>> {
    let c = colors();
    let view = app.controller.view_model();
    let mut lines = vec![Line::from("")];

    match app.tabs.active() {
        DetailTab::Overview => lines.extend(slot_lines(view, &Slot::OVERVIEW)),
        DetailTab::Delivery => {
            if group_is_empty(view, &Slot::DELIVERY) {
                lines.push(Line::styled(
                    "  No delivery information.",
                    Style::default().fg(c.muted),
                ));
            } else {
                lines.extend(slot_lines(view, &Slot::DELIVERY));
            }
        }
        DetailTab::Payment => {
            if group_is_empty(view, &Slot::PAYMENT) {
                lines.push(Line::styled(
                    "  No payment information.",
                    Style::default().fg(c.muted),
                ));
            } else {
                lines.extend(slot_lines(view, &Slot::PAYMENT));
            }
        }
        DetailTab::Items => lines.extend(item_lines(view)),
    }

    lines.push(Line::from(""));
    lines.push(meta_line(view));
    lines
}

/// "label: value" lines for a slot group.
fn slot_lines(view: &OrderViewModel, slots: &[Slot]) -> Vec<Line<'static>> {
    let c = colors();
    slots
        .iter()
        .map(|slot| {
            Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{}: ", slot.label()),
                    Style::default().fg(c.muted),
                ),
                Span::styled(
                    view.slot_text(*slot).to_string(),
                    Style::default().fg(c.fg),
                ),
            ])
        })
        .collect()
}

fn item_lines(view: &OrderViewModel) -> Vec<Line<'static>> {
    let c = colors();

    if view.shows_items_placeholder() {
        return vec![Line::styled(
            format!("  {NO_ITEMS_PLACEHOLDER}"),
            Style::default().fg(c.muted),
        )];
    }

    let mut lines = Vec::new();
    for (i, card) in view.items().iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::styled(
            format!("  {}", card.heading),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
        for (label, value) in &card.fields {
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(format!("{label}: "), Style::default().fg(c.muted)),
                Span::styled(value.clone(), Style::default().fg(c.fg)),
            ]));
        }
    }
    lines
}

fn meta_line(view: &OrderViewModel) -> Line<'static> {
    let c = colors();
    Line::from(vec![
        Span::raw("  "),
        Span::styled("Response Time: ", Style::default().fg(c.muted)),
        Span::styled(
            view.slot_text(Slot::ResponseTime).to_string(),
            Style::default().fg(c.success),
        ),
        Span::styled(" | ", Style::default().fg(c.muted)),
        Span::styled("Data Source: ", Style::default().fg(c.muted)),
        Span::styled(
            view.slot_text(Slot::DataSource).to_string(),
            Style::default().fg(c.success),
        ),
    ])
}

fn group_is_empty(view: &OrderViewModel, slots: &[Slot]) -> bool {
    slots.iter().all(|slot| view.slot(*slot).is_none())
}
