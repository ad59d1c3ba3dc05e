use crate::ui::app::App;
use crate::ui::bars::Bars;
use crate::ui::footer::footer_widget;
use crate::ui::header::Header;
use crate::ui::layout::Regions;
use ratatui::widgets::Clear;
use ratatui::Frame;
use std::time::Instant;

pub fn draw(frame: &mut Frame<'_>, app: &App, now: Instant) {
    let regions = Regions::split(frame.area());

    frame.render_widget(Header::new().widget(app, now), regions.header);

    frame.render_widget(Clear, regions.chart);
    let highlighted = app.highlighted();
    frame.render_widget(
        Bars::new(app.values(), app.max_value(), &highlighted),
        regions.chart,
    );

    frame.render_widget(
        footer_widget(app.playback(), regions.footer.width),
        regions.footer,
    );
}
