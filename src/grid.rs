use chrono::{Datelike, Days, Months, NaiveDate};

use crate::schedule::Event;

/// One slot of a month grid. Padding slots sit before day 1 so that every
/// day lands in its weekday column; they carry no date and no events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell<'a> {
    Padding,
    Day(DayCell<'a>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell<'a> {
    pub date: NaiveDate,
    pub events: Vec<&'a Event>,
}

/// One of the seven slots of a week strip, Sunday through Saturday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekDay<'a> {
    pub date: NaiveDate,
    pub is_today: bool,
    pub events: Vec<&'a Event>,
}

/// Events whose date equals `date` exactly. Matching is a (year, month,
/// day) comparison; multi-day ranges are not a thing here.
pub fn events_on(date: NaiveDate, events: &[Event]) -> Vec<&Event> {
    events.iter().filter(|event| event.date == date).collect()
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// The Sunday of the week containing `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday();
    date.checked_sub_days(Days::new(offset.into())).unwrap_or(date)
}

/// Month steps always land on the 1st of the target month, so stepping can
/// never overflow a shorter month (Jan 31 -> Feb 31) or skip one.
pub fn prev_month(reference: NaiveDate) -> NaiveDate {
    let first = start_of_month(reference);
    first.checked_sub_months(Months::new(1)).unwrap_or(first)
}

pub fn next_month(reference: NaiveDate) -> NaiveDate {
    let first = start_of_month(reference);
    first.checked_add_months(Months::new(1)).unwrap_or(first)
}

/// Week steps move by exactly seven days, preserving the weekday.
pub fn prev_week(reference: NaiveDate) -> NaiveDate {
    reference.checked_sub_days(Days::new(7)).unwrap_or(reference)
}

pub fn next_week(reference: NaiveDate) -> NaiveDate {
    reference.checked_add_days(Days::new(7)).unwrap_or(reference)
}

/// Builds the month grid for the month containing `reference`: one padding
/// cell per weekday before the 1st (Sunday = column 0), then one cell per
/// day of the month in order, each holding its matching events.
pub fn month_grid(reference: NaiveDate, events: &[Event]) -> Vec<Cell<'_>> {
    let first = start_of_month(reference);
    let padding = first.weekday().num_days_from_sunday();

    let mut cells = Vec::with_capacity(padding as usize + 31);
    cells.extend((0..padding).map(|_| Cell::Padding));

    let mut date = first;
    loop {
        cells.push(Cell::Day(DayCell {
            date,
            events: events_on(date, events),
        }));

        match date.succ_opt() {
            Some(next) if next.month() == first.month() => date = next,
            _ => break,
        }
    }

    cells
}

/// Builds the seven-day strip for the week containing `reference`, from
/// Sunday through Saturday, flagging the cell that matches `today`.
pub fn week_grid<'a>(
    reference: NaiveDate,
    today: NaiveDate,
    events: &'a [Event],
) -> Vec<WeekDay<'a>> {
    let sunday = start_of_week(reference);

    (0..7)
        .filter_map(|offset| sunday.checked_add_days(Days::new(offset)))
        .map(|date| WeekDay {
            date,
            is_today: date == today,
            events: events_on(date, events),
        })
        .collect()
}
