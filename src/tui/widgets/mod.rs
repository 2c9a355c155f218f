//! Reusable TUI widgets.

pub mod alert;
pub mod form;
pub mod status_bar;

pub use alert::draw_alert;
pub use form::{Form, FormField, draw_form};
pub use status_bar::{StatusBarContext, draw_status_bar};

/// Flattens a rendered buffer into one line of text per row.
#[cfg(test)]
pub(crate) fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
    let mut s = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
        }
        s.push('\n');
    }
    s
}
