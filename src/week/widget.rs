use super::row::WeekRow;
use super::DayStyler;
use crate::theme::{KEYBOARD_SELECTED_STYLE, SELECTED_STYLE, WEEK_NUMBER_STYLE};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use time::Date;

/// Number of columns per rendered cell
const CELL_WIDTH: u16 = 4;

const DAY_CELLS: u16 = 7;

/// Renders one computed [`WeekRow`]: an optional week-number cell followed by
/// the seven day cells in chronological order, on a single terminal line.
#[derive(Debug)]
pub struct WeekRowWidget<'a, S> {
    row: &'a WeekRow<'a>,
    styler: S,
    today: Option<Date>,
}

impl<'a, S: DayStyler> WeekRowWidget<'a, S> {
    pub fn new(row: &'a WeekRow<'a>, styler: S) -> WeekRowWidget<'a, S> {
        WeekRowWidget {
            row,
            styler,
            today: None,
        }
    }

    /// Brackets the given date's cell when it falls inside the row.
    pub fn today(mut self, today: Date) -> Self {
        self.today = Some(today);
        self
    }

    fn cell_count(&self) -> u16 {
        DAY_CELLS + u16::from(self.row.show_week_number())
    }
}

impl<S: DayStyler> Widget for WeekRowWidget<'_, S> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let width = (self.cell_count() * CELL_WIDTH).min(area.width);
        let row_area = Rect {
            x: area.x,
            y: area.y,
            width,
            height: 1,
        };
        let flags = self.row.flags();
        if flags.selected {
            buf.set_style(row_area, SELECTED_STYLE);
        } else if flags.keyboard_selected {
            buf.set_style(row_area, KEYBOARD_SELECTED_STYLE);
        }
        let mut spans = Vec::with_capacity(usize::from(self.cell_count()));
        if self.row.show_week_number() {
            spans.push(Span::styled(
                format!(" {:2} ", self.row.week_number()),
                WEEK_NUMBER_STYLE,
            ));
        }
        for &day in self.row.days() {
            let text = if self.today == Some(day) {
                format!("[{:2}]", day.day())
            } else {
                format!(" {:2} ", day.day())
            };
            spans.push(Span::styled(text, self.styler.day_style(day)));
        }
        Line::from(spans).render(row_area, buf);
    }
}
