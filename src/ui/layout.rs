use ratatui::layout::Rect;

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;

/// Screen split into header, bar chart and footer, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub chart: Rect,
    pub footer: Rect,
}

impl Regions {
    /// The header is served first and the chart gets what is left over.
    pub fn split(area: Rect) -> Self {
        let header_height = area.height.min(HEADER_HEIGHT);
        let footer_height = area.height.saturating_sub(header_height).min(FOOTER_HEIGHT);
        let chart_height = area.height - header_height - footer_height;

        let header = Rect {
            height: header_height,
            ..area
        };
        let chart = Rect {
            y: area.y + header_height,
            height: chart_height,
            ..area
        };
        let footer = Rect {
            y: chart.y + chart_height,
            height: footer_height,
            ..area
        };
        Self {
            header,
            chart,
            footer,
        }
    }
}
