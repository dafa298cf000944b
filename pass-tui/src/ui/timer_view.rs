use super::*;
use crate::app::TimerSize;
use pass_window::DisplayLabel;

pub fn render_countdown(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label_style = Style::default()
        .fg(label_color(app.display.label))
        .add_modifier(Modifier::BOLD);
    let duration = app.display.duration.as_str();

    let use_large = app.timer_size == TimerSize::Large
        && large_time_width(duration) <= inner.width
        && inner.height >= DIGIT_SIZE as u16 + 2;

    let mut lines = vec![Line::from(Span::styled(app.display.label.to_string(), label_style))];
    if use_large {
        lines.push(Line::from(""));
        lines.extend(render_large_time(duration));
    } else {
        lines.push(Line::from(Span::styled(
            duration,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
    }

    // Vertically centre the content block
    let content_height = lines.len() as u16;
    let top_pad = inner.height.saturating_sub(content_height) / 2;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(top_pad),
            Constraint::Length(content_height),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        rows[1],
    );
}

fn label_color(label: DisplayLabel) -> Color {
    match label {
        DisplayLabel::Editing => Color::White,
        DisplayLabel::InvalidAos | DisplayLabel::InvalidLos => Color::Red,
        DisplayLabel::Aos => Color::Yellow,
        DisplayLabel::Los => Color::Green,
        DisplayLabel::Over => Color::DarkGray,
    }
}

/// Digit patterns (5x5 grid, 1 = filled, 0 = empty)
const DIGIT_SIZE: usize = 5;

type Glyph = [u8; DIGIT_SIZE * DIGIT_SIZE];

#[rustfmt::skip]
const DIGIT_0: Glyph = [
    1, 1, 1, 1, 1,
    1, 1, 0, 1, 1,
    1, 1, 0, 1, 1,
    1, 1, 0, 1, 1,
    1, 1, 1, 1, 1,
];

#[rustfmt::skip]
const DIGIT_1: Glyph = [
    0, 0, 0, 1, 1,
    0, 0, 0, 1, 1,
    0, 0, 0, 1, 1,
    0, 0, 0, 1, 1,
    0, 0, 0, 1, 1,
];

#[rustfmt::skip]
const DIGIT_2: Glyph = [
    1, 1, 1, 1, 1,
    0, 0, 0, 1, 1,
    1, 1, 1, 1, 1,
    1, 1, 0, 0, 0,
    1, 1, 1, 1, 1,
];

#[rustfmt::skip]
const DIGIT_3: Glyph = [
    1, 1, 1, 1, 1,
    0, 0, 0, 1, 1,
    1, 1, 1, 1, 1,
    0, 0, 0, 1, 1,
    1, 1, 1, 1, 1,
];

#[rustfmt::skip]
const DIGIT_4: Glyph = [
    1, 1, 0, 1, 1,
    1, 1, 0, 1, 1,
    1, 1, 1, 1, 1,
    0, 0, 0, 1, 1,
    0, 0, 0, 1, 1,
];

#[rustfmt::skip]
const DIGIT_5: Glyph = [
    1, 1, 1, 1, 1,
    1, 1, 0, 0, 0,
    1, 1, 1, 1, 1,
    0, 0, 0, 1, 1,
    1, 1, 1, 1, 1,
];

#[rustfmt::skip]
const DIGIT_6: Glyph = [
    1, 1, 1, 1, 1,
    1, 1, 0, 0, 0,
    1, 1, 1, 1, 1,
    1, 1, 0, 1, 1,
    1, 1, 1, 1, 1,
];

#[rustfmt::skip]
const DIGIT_7: Glyph = [
    1, 1, 1, 1, 1,
    0, 0, 0, 1, 1,
    0, 0, 0, 1, 1,
    0, 0, 0, 1, 1,
    0, 0, 0, 1, 1,
];

#[rustfmt::skip]
const DIGIT_8: Glyph = [
    1, 1, 1, 1, 1,
    1, 1, 0, 1, 1,
    1, 1, 1, 1, 1,
    1, 1, 0, 1, 1,
    1, 1, 1, 1, 1,
];

#[rustfmt::skip]
const DIGIT_9: Glyph = [
    1, 1, 1, 1, 1,
    1, 1, 0, 1, 1,
    1, 1, 1, 1, 1,
    0, 0, 0, 1, 1,
    1, 1, 1, 1, 1,
];

#[rustfmt::skip]
const DASH: Glyph = [
    0, 0, 0, 0, 0,
    0, 0, 0, 0, 0,
    1, 1, 1, 1, 1,
    0, 0, 0, 0, 0,
    0, 0, 0, 0, 0,
];

/// Columns taken by a glyph plus its trailing space.
const GLYPH_WIDTH: u16 = DIGIT_SIZE as u16 + 1;
/// Columns taken by a colon and the spacing after it.
const COLON_WIDTH: u16 = 5;

fn glyph_for(ch: char) -> Option<&'static Glyph> {
    match ch {
        '0' => Some(&DIGIT_0),
        '1' => Some(&DIGIT_1),
        '2' => Some(&DIGIT_2),
        '3' => Some(&DIGIT_3),
        '4' => Some(&DIGIT_4),
        '5' => Some(&DIGIT_5),
        '6' => Some(&DIGIT_6),
        '7' => Some(&DIGIT_7),
        '8' => Some(&DIGIT_8),
        '9' => Some(&DIGIT_9),
        '-' => Some(&DASH),
        _ => None,
    }
}

fn large_time_width(time_str: &str) -> u16 {
    time_str
        .chars()
        .map(|ch| match ch {
            ':' => COLON_WIDTH,
            _ if glyph_for(ch).is_some() => GLYPH_WIDTH,
            _ => 0,
        })
        .sum()
}

/// Render a duration string (`MM:SS`, `HH:MM:SS` or `--:--`) as block digits.
fn render_large_time(time_str: &str) -> Vec<Line<'static>> {
    let symbol = "█";
    let mut lines = vec![String::new(); DIGIT_SIZE];

    for ch in time_str.chars() {
        if ch == ':' {
            // Two blocks vertically centred, then spacing
            for (row, line) in lines.iter_mut().enumerate() {
                line.push_str(if row == 1 || row == 3 { " ██" } else { "   " });
                line.push_str("  ");
            }
        } else if let Some(pattern) = glyph_for(ch) {
            for (row, line) in lines.iter_mut().enumerate() {
                for col in 0..DIGIT_SIZE {
                    if pattern[row * DIGIT_SIZE + col] == 1 {
                        line.push_str(symbol);
                    } else {
                        line.push(' ');
                    }
                }
                line.push(' '); // spacing between digits
            }
        }
    }

    lines
        .into_iter()
        .map(|line| {
            Line::from(Span::styled(
                line,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_width(line: &Line<'_>) -> usize {
        line.spans.iter().map(|s| s.content.chars().count()).sum()
    }

    #[test]
    fn large_time_has_five_rows_of_expected_width() {
        let lines = render_large_time("12:34");
        assert_eq!(lines.len(), DIGIT_SIZE);
        for line in &lines {
            assert_eq!(line_width(line), large_time_width("12:34") as usize);
        }
    }

    #[test]
    fn sentinel_renders_as_dashes() {
        let lines = render_large_time("--:--");
        let middle: String = lines[2].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(middle.starts_with("█████"));
        let top: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(!top.contains('█'));
    }

    #[test]
    fn width_grows_with_hour_digits() {
        assert_eq!(large_time_width("00:00"), 4 * GLYPH_WIDTH + COLON_WIDTH);
        assert_eq!(large_time_width("123:00:00"), 7 * GLYPH_WIDTH + 2 * COLON_WIDTH);
    }
}
