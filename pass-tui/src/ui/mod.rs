use crate::app::{App, StatusKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

mod fields_view;
mod timer_view;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // AOS
            Constraint::Length(3), // LOS
            Constraint::Min(3),    // Label + countdown
            Constraint::Length(3), // Status
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    fields_view::render_field(frame, chunks[0], app, pass_window::FieldKind::Aos);
    fields_view::render_field(frame, chunks[1], app, pass_window::FieldKind::Los);
    timer_view::render_countdown(frame, chunks[2], app);
    render_status(frame, chunks[3], app);
    render_controls(frame, chunks[4], app);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let contextual_status = app.get_contextual_status();
    let (status_text, kind) = match &app.status_message {
        Some((message, kind)) => (message.as_str(), *kind),
        None => (contextual_status.as_str(), StatusKind::Info),
    };

    let color = match kind {
        StatusKind::Error => Color::Red,
        StatusKind::Success => Color::Green,
        StatusKind::Info => Color::White,
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Status ")
                .border_style(Style::default().fg(color))
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(status, area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));

    let line = if app.focused_is_editing() {
        vec![
            key("Enter"),
            Span::raw(": Lock  "),
            key("Tab / ↑↓"),
            Span::raw(": Switch field  "),
            key("Ctrl+N"),
            Span::raw(": Now  "),
            key("Ctrl+U"),
            Span::raw(": Clear  "),
            key("Ctrl+C"),
            Span::raw(": Quit"),
        ]
    } else {
        vec![
            key("Enter"),
            Span::raw(": Edit  "),
            key("Tab / ↑↓"),
            Span::raw(": Switch field  "),
            key("T"),
            Span::raw(": Toggle timer size  "),
            key("Q"),
            Span::raw(": Quit"),
        ]
    };

    let controls = Paragraph::new(Line::from(line))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Line::from(vec![Span::styled(
                    " Controls ",
                    Style::default().fg(Color::DarkGray),
                )]))
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(controls, area);
}
