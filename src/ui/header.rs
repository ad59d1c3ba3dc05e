use crate::ui::app::App;
use crate::ui::playback::PlaybackState;
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_DONE, STATUS_PAUSED, STATUS_PLAYING,
};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use std::time::Instant;

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App, now: Instant) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let playback = app.playback();
        let (status_icon, status_color) = match playback {
            PlaybackState::Playing { .. } => ("▶", STATUS_PLAYING),
            PlaybackState::Paused { .. } => ("⏸", STATUS_PAUSED),
            PlaybackState::Finished { .. } => ("■", STATUS_DONE),
        };
        let steps = match app.total_steps() {
            Some(total) => format!("steps: {}/{}", playback.steps(), total),
            None => format!("steps: {}", playback.steps()),
        };
        let runtime = format!("runtime: {:.2} s", app.runtime(now).as_secs_f64());

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(status_icon, Style::default().fg(status_color)),
            Span::styled("  ", text_style),
            Span::styled(app.algorithm().title(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(steps, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(runtime, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("{} ms/frame", app.frame_interval().as_millis()),
                text_style,
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(playback.label(), Style::default().fg(status_color)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
