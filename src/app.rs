use crossterm::event::{read, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
    DefaultTerminal,
};
use std::io::{self, Write};
use time::{Date, Weekday};
use weekrow::{
    start_of_week,
    theme::{BASE_STYLE, WEEKDAY_STYLE},
    DayStyler, EnUsLocale, InteractionDispatcher, Iso8601Locale, WeekLocale, WeekRow,
    WeekRowProps, WeekRowWidget,
};

const WEEKEND_STYLE: Style = Style::new().fg(Color::DarkGray);

const FOCUS_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);

/// Lines taken up by the weekday header and its rule
const HEADER_LINES: u16 = 2;

const FOOTER_LINES: u16 = 1;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App {
    today: Date,
    pre_selection: Date,
    selected: Option<Date>,
    monday: bool,
    week_numbers: bool,
    week_picker: bool,
    open: bool,
    state: AppState,
}

impl App {
    pub(crate) fn new(today: Date, start: Option<Date>, monday: bool) -> App {
        App {
            today,
            pre_selection: start.unwrap_or(today),
            selected: None,
            monday,
            week_numbers: false,
            week_picker: false,
            open: true,
            state: AppState::Picking,
        }
    }

    pub(crate) fn run(mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        while !self.quitting() {
            terminal.draw(|frame| frame.render_widget(&mut self, frame.area()))?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('h') | KeyCode::Left => self.move_days(-1),
            KeyCode::Char('l') | KeyCode::Right => self.move_days(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_days(-7),
            KeyCode::Char('j') | KeyCode::Down => self.move_days(7),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            KeyCode::Char('p') => {
                self.week_picker = !self.week_picker;
                self.pre_selection = self.snapped(self.pre_selection);
                true
            }
            KeyCode::Char('n') => {
                self.week_numbers = !self.week_numbers;
                true
            }
            KeyCode::Char('o') => {
                self.open = true;
                true
            }
            KeyCode::Char('0') | KeyCode::Home => {
                self.pre_selection = self.snapped(self.today);
                true
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.state = AppState::Quitting;
                true
            }
            _ => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }

    fn locale(&self) -> &'static dyn WeekLocale {
        if self.monday {
            &Iso8601Locale
        } else {
            &EnUsLocale
        }
    }

    // In week-picker mode the focus unit is the whole row, so the focus date
    // stays pinned to its week anchor.
    fn snapped(&self, day: Date) -> Date {
        if self.week_picker {
            start_of_week(day, Some(self.locale()), None).unwrap_or(day)
        } else {
            day
        }
    }

    fn move_days(&mut self, days: i32) -> bool {
        let days = if self.week_picker {
            if days < 0 {
                -7
            } else {
                7
            }
        } else {
            days
        };
        match shift_days(self.pre_selection, days) {
            Some(day) => {
                self.pre_selection = self.snapped(day);
                true
            }
            None => false,
        }
    }

    fn props_for(&self, day: Date) -> WeekRowProps<'static> {
        let mut props = WeekRowProps::new(day)
            .locale(self.locale())
            .pre_selection(self.pre_selection)
            .show_week_number(self.week_numbers)
            .show_week_picker(self.week_picker);
        if let Some(selected) = self.selected {
            props = props.selected(selected);
        }
        props
    }

    fn row_for(&self, day: Date) -> Option<WeekRow<'static>> {
        WeekRow::compute(&self.props_for(day)).ok()
    }

    // Routes Enter through the dispatcher the way a click on the focused cell
    // would go: the week path when the week cell is interactive, the day path
    // otherwise.
    fn activate(&mut self) -> bool {
        if !self.open {
            return false;
        }
        let props = self.props_for(self.pre_selection);
        let Ok(row) = WeekRow::compute(&props) else {
            return false;
        };
        let mut picked = None;
        let mut open = self.open;
        let event = crossterm::event::Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        let mut dispatcher = InteractionDispatcher::new(&props)
            .on_day_click(|day, _event| picked = Some(day))
            .set_open(|value| open = value);
        if dispatcher.week_cell_interactive() {
            dispatcher.week_clicked(row.anchor(), row.week_number(), &event);
        } else {
            dispatcher.day_clicked(self.pre_selection, &event);
        }
        drop(dispatcher);
        if let Some(day) = picked {
            self.selected = Some(day);
        }
        self.open = open;
        true
    }

    fn status_line(&self, label: &str) -> String {
        let mut status = match self.selected {
            Some(day) => format!("{label} (selected: {day})"),
            None => format!("{label} (selected: none)"),
        };
        if self.week_picker {
            status.push_str(" [week]");
        }
        if !self.open {
            status.push_str(" [closed]");
        }
        status
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        if area.width == 0 || area.height < HEADER_LINES + FOOTER_LINES + 1 {
            return;
        }
        let Some(center_row) = self.row_for(self.pre_selection) else {
            return;
        };
        let mut header = String::new();
        if self.week_numbers {
            header.push_str("    ");
        }
        for &day in center_row.days() {
            header.push(' ');
            header.push_str(weekday_abbrev(day.weekday()));
            header.push(' ');
        }
        let width = u16::try_from(header.len()).unwrap_or(u16::MAX).min(area.width);
        Line::from(Span::styled(header, WEEKDAY_STYLE)).render(
            Rect {
                x: area.x,
                y: area.y,
                width,
                height: 1,
            },
            buf,
        );
        Line::raw("─".repeat(usize::from(width))).render(
            Rect {
                x: area.x,
                y: area.y + 1,
                width,
                height: 1,
            },
            buf,
        );
        let week_lines = area.height - HEADER_LINES - FOOTER_LINES;
        let center = i32::from(week_lines / 2);
        let styler = DemoStyler {
            selected: self.selected,
            pre_selection: self.pre_selection,
        };
        for i in 0..week_lines {
            let offset = (i32::from(i) - center) * 7;
            let Some(reference) = shift_days(self.pre_selection, offset) else {
                continue;
            };
            let Some(row) = self.row_for(reference) else {
                continue;
            };
            let row_area = Rect {
                x: area.x,
                y: area.y + HEADER_LINES + i,
                width: area.width,
                height: 1,
            };
            WeekRowWidget::new(&row, styler)
                .today(self.today)
                .render(row_area, buf);
        }
        let label = center_row.day_label(self.pre_selection, false);
        Line::raw(self.status_line(&label)).render(
            Rect {
                x: area.x,
                y: area.y + area.height - FOOTER_LINES,
                width: area.width,
                height: 1,
            },
            buf,
        );
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Picking,
    Quitting,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct DemoStyler {
    selected: Option<Date>,
    pre_selection: Date,
}

impl DayStyler for DemoStyler {
    fn day_style(&self, date: Date) -> Style {
        if self.selected == Some(date) {
            weekrow::theme::SELECTED_STYLE
        } else if date == self.pre_selection {
            FOCUS_STYLE
        } else if matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday) {
            WEEKEND_STYLE
        } else {
            Style::new()
        }
    }
}

fn weekday_abbrev(wd: Weekday) -> &'static str {
    match wd {
        Weekday::Monday => "Mo",
        Weekday::Tuesday => "Tu",
        Weekday::Wednesday => "We",
        Weekday::Thursday => "Th",
        Weekday::Friday => "Fr",
        Weekday::Saturday => "Sa",
        Weekday::Sunday => "Su",
    }
}

fn shift_days(date: Date, n: i32) -> Option<Date> {
    let mut day = date;
    if n >= 0 {
        for _ in 0..n {
            day = day.next_day()?;
        }
    } else {
        for _ in n..0 {
            day = day.previous_day()?;
        }
    }
    Some(day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn render_week_stack() {
        let today = date!(2023 - 11 - 15);
        let mut app = App::new(today, None, false);
        let area = Rect::new(0, 0, 36, 7);
        let mut buffer = Buffer::empty(area);
        app.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            " Su  Mo  Tu  We  Th  Fr  Sa         ",
            "────────────────────────────        ",
            " 29  30  31   1   2   3   4         ",
            "  5   6   7   8   9  10  11         ",
            " 12  13  14 [15] 16  17  18         ",
            " 19  20  21  22  23  24  25         ",
            "Choose 2023-11-15 (selected: none)  ",
        ]);
        expected.set_style(*expected.area(), BASE_STYLE);
        expected.set_style(Rect::new(0, 0, 28, 1), WEEKDAY_STYLE);
        for y in 2..6 {
            expected.set_style(Rect::new(0, y, 4, 1), WEEKEND_STYLE);
            expected.set_style(Rect::new(24, y, 4, 1), WEEKEND_STYLE);
        }
        expected.set_style(Rect::new(12, 4, 4, 1), FOCUS_STYLE);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn arrows_move_focus_and_enter_selects() {
        let mut app = App::new(date!(2023 - 11 - 15), None, false);
        assert!(app.handle_key(KeyCode::Right));
        assert_eq!(app.pre_selection, date!(2023 - 11 - 16));
        assert!(app.handle_key(KeyCode::Down));
        assert_eq!(app.pre_selection, date!(2023 - 11 - 23));
        assert!(app.handle_key(KeyCode::Enter));
        assert_eq!(app.selected, Some(date!(2023 - 11 - 23)));
        // Plain day activation leaves the picker open.
        assert!(app.open);
    }

    #[test]
    fn week_picker_selects_anchor_and_closes() {
        let mut app = App::new(date!(2023 - 11 - 15), None, false);
        assert!(app.handle_key(KeyCode::Char('p')));
        assert_eq!(app.pre_selection, date!(2023 - 11 - 12));
        assert!(app.handle_key(KeyCode::Enter));
        assert_eq!(app.selected, Some(date!(2023 - 11 - 12)));
        assert!(!app.open);
        // Closed picker ignores further activation until reopened.
        assert!(!app.handle_key(KeyCode::Enter));
        assert!(app.handle_key(KeyCode::Char('o')));
        assert!(app.open);
    }

    #[test]
    fn week_picker_moves_by_whole_weeks() {
        let mut app = App::new(date!(2023 - 11 - 15), None, true);
        assert!(app.handle_key(KeyCode::Char('p')));
        assert_eq!(app.pre_selection, date!(2023 - 11 - 13));
        assert!(app.handle_key(KeyCode::Right));
        assert_eq!(app.pre_selection, date!(2023 - 11 - 20));
        assert!(app.handle_key(KeyCode::Up));
        assert_eq!(app.pre_selection, date!(2023 - 11 - 13));
    }

    #[test]
    fn home_returns_to_today() {
        let start = date!(2024 - 06 - 01);
        let mut app = App::new(date!(2023 - 11 - 15), Some(start), false);
        assert_eq!(app.pre_selection, start);
        assert!(app.handle_key(KeyCode::Home));
        assert_eq!(app.pre_selection, date!(2023 - 11 - 15));
    }
}
