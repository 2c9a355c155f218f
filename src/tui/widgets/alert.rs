//! Modal alert popup.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::navigation::Alert;

/// Renders `alert` centered over `area`, clearing whatever is beneath it.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_alert(alert: &Alert, frame: &mut Frame, area: Rect) {
    let popup = centered_rect(area, 50, 7);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(format!(" {} ", alert.title))
        .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let lines = vec![
        Line::from(alert.message.as_str()),
        Line::from(""),
        Line::from("Press any key to continue").style(Style::default().fg(Color::DarkGray)),
    ];
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, popup);
}

/// Returns a `width` x `height` rect centered in `area`, clamped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    popup
}
