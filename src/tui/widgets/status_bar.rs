//! Status bar widget: one-line summary of the stored expenses.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Data passed to the status bar widget.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatusBarContext {
    /// Number of stored expenses.
    pub count: usize,
    /// Sum of all stored amounts.
    pub total: f64,
    /// Transient message from the last operation, if any.
    pub message: Option<String>,
}

/// Renders a one-line status bar.
///
/// Display format: `3 expenses  Total: 925.50`, followed by the message in
/// red when one is set.
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let cyan = Style::default().fg(Color::Cyan);
    let noun = if ctx.count == 1 { "expense" } else { "expenses" };

    let mut spans = vec![
        Span::styled(format!("{} {noun}", ctx.count), cyan),
        Span::styled("  ", cyan),
        Span::styled(format!("Total: {:.2}", ctx.total), cyan),
    ];
    if let Some(msg) = &ctx.message {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Red)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
