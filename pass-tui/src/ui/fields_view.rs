use super::*;
use pass_window::FieldKind;

/// Input hint shown in an empty field.
const PLACEHOLDER: &str = "yyyy/MM/dd hh:mm:ssZ";

pub fn render_field(frame: &mut Frame, area: Rect, app: &App, kind: FieldKind) {
    let view = app.field_view(kind);
    let is_focused = app.focused == kind;

    // Invalid text takes priority so a bad value is never hidden by focus
    let border_style = if view.is_invalid {
        Style::default().fg(Color::Red)
    } else if is_focused {
        Style::default().fg(Color::Magenta)
    } else if !view.is_editing {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let marker = if view.is_editing { "◎" } else { "✎" };
    let title = Line::from(vec![
        Span::raw(" "),
        Span::styled(kind.label(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!(" {} ", marker)),
    ]);

    let text = if view.display_text.is_empty() && view.is_editing {
        Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else if view.is_editing {
        Span::styled(view.display_text.clone(), Style::default().fg(Color::White))
    } else {
        Span::styled(
            view.display_text.clone(),
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        )
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style)
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);

    frame.render_widget(Paragraph::new(Line::from(text)).block(block), area);

    if is_focused && view.is_editing && inner.width > 0 && inner.height > 0 {
        let (before, _) = app.input(kind).split_at_cursor();
        let offset = (before.chars().count() as u16).min(inner.width - 1);
        frame.set_cursor_position((inner.x + offset, inner.y));
    }
}
