/// Navigation commands the form issues to its host.
pub trait Router {
    /// Sets the display title of the current screen.
    fn set_title(&mut self, title: &str);

    /// Dismisses the current screen and returns to the previous one.
    fn go_back(&mut self);
}

/// A modal notification surface.
///
/// The user must acknowledge a report before interacting with the screen
/// again. Implementations need not block the calling thread.
pub trait Alerting {
    /// Shows a notification with the given title and message.
    fn report(&mut self, title: &str, message: &str);
}
