use crate::ui::theme::{BAR, BAR_ACTIVE};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

const EIGHTHS: [&str; 9] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

/// One vertical bar per element, scaled so `max` fills the area.
///
/// With more elements than columns, each column shows the element its
/// left edge falls on. With at least two columns per element, the last
/// column of each bar is left blank as a gap.
pub struct Bars<'a> {
    values: &'a [u32],
    max: u32,
    highlighted: &'a [usize],
}

impl<'a> Bars<'a> {
    pub fn new(values: &'a [u32], max: u32, highlighted: &'a [usize]) -> Self {
        Self {
            values,
            max,
            highlighted,
        }
    }

    /// Element shown in column `x` of a `width`-wide area, or `None` for a gap.
    fn element_at(&self, x: u16, width: u16) -> Option<usize> {
        let len = self.values.len();
        let (x, width) = (usize::from(x), usize::from(width));
        let index = x * len / width;
        let next = (x + 1) * len / width;
        if len * 2 <= width && next != index {
            return None;
        }
        Some(index)
    }

    /// Bar height in eighths of a cell.
    fn eighths(&self, value: u32, height: u16) -> u64 {
        if self.max == 0 {
            return 0;
        }
        u64::from(value.min(self.max)) * u64::from(height) * 8 / u64::from(self.max)
    }
}

impl Widget for Bars<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.values.is_empty() || area.width == 0 || area.height == 0 {
            return;
        }

        for col in 0..area.width {
            let Some(index) = self.element_at(col, area.width) else {
                continue;
            };
            let total = self.eighths(self.values[index], area.height);
            let color = if self.highlighted.contains(&index) {
                BAR_ACTIVE
            } else {
                BAR
            };

            for row in 0..area.height {
                let filled = total.saturating_sub(u64::from(row) * 8).min(8);
                if filled == 0 {
                    break;
                }
                let y = area.y + area.height - 1 - row;
                if let Some(cell) = buf.cell_mut((area.x + col, y)) {
                    cell.set_symbol(EIGHTHS[filled as usize]).set_fg(color);
                }
            }
        }
    }
}
