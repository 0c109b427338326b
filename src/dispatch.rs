use crate::props::WeekRowProps;
use crossterm::event::Event;
use std::fmt;
use time::Date;

type DayClickHandler<'a> = Box<dyn FnMut(Date, &Event) + 'a>;
type DayHoverHandler<'a> = Box<dyn FnMut(Date) + 'a>;
type WeekSelectHandler<'a> = Box<dyn FnMut(Date, u8, &Event) + 'a>;
type OpenSetter<'a> = Box<dyn FnMut(bool) + 'a>;

/// Routes cell activations to the caller's callbacks.  Every callback is
/// optional; a missing one turns the corresponding forward into a no-op.
/// The dispatcher decides nothing about what a selection means — that stays
/// with the caller.
pub struct InteractionDispatcher<'a> {
    week_picker: bool,
    close_on_select: bool,
    on_day_click: Option<DayClickHandler<'a>>,
    on_day_mouse_enter: Option<DayHoverHandler<'a>>,
    on_week_select: Option<WeekSelectHandler<'a>>,
    set_open: Option<OpenSetter<'a>>,
}

impl<'a> InteractionDispatcher<'a> {
    /// Creates a dispatcher with no callbacks registered, taking the
    /// week-picker and close-on-select policy flags from `props`.
    pub fn new(props: &WeekRowProps<'_>) -> InteractionDispatcher<'a> {
        InteractionDispatcher {
            week_picker: props.show_week_picker,
            close_on_select: props.should_close_on_select,
            on_day_click: None,
            on_day_mouse_enter: None,
            on_week_select: None,
            set_open: None,
        }
    }

    pub fn on_day_click<F: FnMut(Date, &Event) + 'a>(mut self, handler: F) -> Self {
        self.on_day_click = Some(Box::new(handler));
        self
    }

    pub fn on_day_mouse_enter<F: FnMut(Date) + 'a>(mut self, handler: F) -> Self {
        self.on_day_mouse_enter = Some(Box::new(handler));
        self
    }

    pub fn on_week_select<F: FnMut(Date, u8, &Event) + 'a>(mut self, handler: F) -> Self {
        self.on_week_select = Some(Box::new(handler));
        self
    }

    pub fn set_open<F: FnMut(bool) + 'a>(mut self, setter: F) -> Self {
        self.set_open = Some(Box::new(setter));
        self
    }

    /// Whether the week-number cell responds to activation at all.
    pub fn week_cell_interactive(&self) -> bool {
        self.on_week_select.is_some() || self.week_picker
    }

    pub fn day_clicked(&mut self, day: Date, event: &Event) {
        if let Some(handler) = self.on_day_click.as_mut() {
            handler(day, event);
        }
    }

    pub fn day_hovered(&mut self, day: Date) {
        if let Some(handler) = self.on_day_mouse_enter.as_mut() {
            handler(day);
        }
    }

    /// Activation of a whole week.  The three sub-steps run in fixed order,
    /// each only if its precondition holds: the explicit week-select
    /// callback, then the day-click path with the anchor in week-picker mode,
    /// then the close request under the close-on-select policy.
    pub fn week_clicked(&mut self, anchor: Date, week_number: u8, event: &Event) {
        if let Some(handler) = self.on_week_select.as_mut() {
            handler(anchor, week_number, event);
        }
        if self.week_picker {
            self.day_clicked(anchor, event);
        }
        if self.close_on_select {
            if let Some(setter) = self.set_open.as_mut() {
                setter(false);
            }
        }
    }
}

impl fmt::Debug for InteractionDispatcher<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionDispatcher")
            .field("week_picker", &self.week_picker)
            .field("close_on_select", &self.close_on_select)
            .field("on_day_click", &self.on_day_click.is_some())
            .field("on_day_mouse_enter", &self.on_day_mouse_enter.is_some())
            .field("on_week_select", &self.on_week_select.is_some())
            .field("set_open", &self.set_open.is_some())
            .finish()
    }
}
