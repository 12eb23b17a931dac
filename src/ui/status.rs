use crate::app::{App, Focus};
use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use std::borrow::Cow;

/// Render the status bar.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    // Cow avoids allocations for the static keybinding hints.
    let text: Cow<'_, str> = if let Some((msg, _)) = &app.status_message {
        Cow::Borrowed(msg.as_ref())
    } else {
        match app.focus {
            Focus::Search => {
                Cow::Borrowed("ENTER search | Tab switch panel | Ctrl+T theme | ESC quit")
            }
            Focus::Filter => {
                Cow::Borrowed("←/→ choose category | Tab switch panel | Ctrl+T theme | ESC quit")
            }
            Focus::Results => Cow::Borrowed(
                "[j/k] select card | [o]pen notes | Tab switch panel | Ctrl+T theme | ESC quit",
            ),
        }
    };

    let paragraph = Paragraph::new(text).style(app.style("status_bar"));
    f.render_widget(paragraph, area);
}
