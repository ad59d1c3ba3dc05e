use crate::ui::playback::PlaybackState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints valid in the given playback state.
pub fn hints(playback: PlaybackState) -> &'static str {
    match playback {
        PlaybackState::Playing { .. } => " Space: Pause │ +/-: Speed │ Q: Quit",
        PlaybackState::Paused { .. } => " Space: Resume │ N/→: Step │ +/-: Speed │ Q: Quit",
        PlaybackState::Finished { .. } => " Q: Quit",
    }
}

/// Hints on the left, version on the right, inside a bordered box `width` wide.
pub fn footer_widget(playback: PlaybackState, width: u16) -> Paragraph<'static> {
    let hints = hints(playback);
    let version = format!("v{} ", VERSION);

    // Char count, not bytes: the separators are multi-byte.
    let content_width = width.saturating_sub(2) as usize;
    let padding = content_width
        .saturating_sub(hints.chars().count())
        .saturating_sub(version.chars().count());

    let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let line = Line::from(vec![
        Span::styled(hints, text_style),
        Span::styled(" ".repeat(padding), text_style),
        Span::styled(version, text_style),
    ]);

    Paragraph::new(line).style(text_style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
