use chrono::{Local, NaiveDate};

use crate::grid::{self, Cell, WeekDay};
use crate::schedule::Event;

/// Where "today" comes from. Injected so that default reference dates and
/// today-highlighting are deterministic under test.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The real clock: the local calendar date, no time-of-day involved.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Supplies the event list on activation.
#[allow(async_fn_in_trait)]
pub trait EventSource {
    async fn fetch_events(&self) -> anyhow::Result<Vec<Event>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Month,
    Week,
}

/// Events are fetched once per activation; until then the view renders
/// with an empty set rather than blocking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
}

/// The rendered shape of the agenda, handed to the page shell.
#[derive(Debug)]
pub enum GridView<'a> {
    Month(Vec<Cell<'a>>),
    Week(Vec<WeekDay<'a>>),
}

/// Owns the reference date and the locally fetched event list, and renders
/// by delegating to the grid module.
pub struct AgendaView<C: Clock> {
    mode: ViewMode,
    phase: Phase,
    reference: NaiveDate,
    events: Vec<Event>,
    clock: C,
}

impl<C: Clock> AgendaView<C> {
    pub fn new(mode: ViewMode, clock: C) -> Self {
        let reference = clock.today();
        Self {
            mode,
            phase: Phase::Loading,
            reference,
            events: Vec::new(),
            clock,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Fetches the event list once. A failed fetch is logged and degrades
    /// to an empty list; either way the view ends up `Ready` and stays
    /// renderable.
    pub async fn activate(&mut self, source: &impl EventSource) {
        match source.fetch_events().await {
            Ok(events) => self.events = events,
            Err(err) => {
                log::warn!("failed to fetch schedule events: {err}");
                self.events = Vec::new();
            }
        }
        self.phase = Phase::Ready;
    }

    /// Steps back one month or one week depending on the mode. Navigation
    /// re-filters the in-memory events and never re-fetches.
    pub fn prev(&mut self) {
        self.reference = match self.mode {
            ViewMode::Month => grid::prev_month(self.reference),
            ViewMode::Week => grid::prev_week(self.reference),
        };
    }

    pub fn next(&mut self) {
        self.reference = match self.mode {
            ViewMode::Month => grid::next_month(self.reference),
            ViewMode::Week => grid::next_week(self.reference),
        };
    }

    /// Resets the reference date to the clock's current date.
    pub fn today(&mut self) {
        self.reference = self.clock.today();
    }

    pub fn view(&self) -> GridView<'_> {
        match self.mode {
            ViewMode::Month => GridView::Month(grid::month_grid(self.reference, &self.events)),
            ViewMode::Week => GridView::Week(grid::week_grid(
                self.reference,
                self.clock.today(),
                &self.events,
            )),
        }
    }
}
