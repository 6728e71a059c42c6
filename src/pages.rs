use std::fmt::Write;

use chrono::Datelike;

use crate::agenda::GridView;
use crate::grid::{Cell, WeekDay};
use crate::routes::PageId;

const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Wraps page content in the shared shell: banner, nav links, footer.
pub fn shell(page: PageId, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\">\
         <title>Kenny Sports</title></head>\n<body>\n\
         <header><h1>Kenny Sports</h1>\n<nav>\
         <a href=\"/\">Home</a> \
         <a href=\"/schedule\">Schedule</a> \
         <a href=\"/team\">Team</a> \
         <a href=\"/about\">About</a>\
         </nav></header>\n\
         <main>\n<h2>{title}</h2>\n{body}</main>\n\
         <footer>Kenny Sports</footer>\n</body>\n</html>\n",
        title = page.title(),
    )
}

fn month_section(cells: &[Cell]) -> String {
    let mut out = String::from("<section class=\"calendar\">\n<div class=\"calendar-grid\">\n");

    for label in WEEKDAY_LABELS {
        let _ = writeln!(out, "<div class=\"weekday\">{label}</div>");
    }

    for cell in cells {
        match cell {
            Cell::Padding => out.push_str("<div class=\"empty-day\"></div>\n"),
            Cell::Day(day) => {
                let _ = write!(
                    out,
                    "<div class=\"calendar-day\"><span class=\"day-number\">{}</span>",
                    day.date.day()
                );
                for event in &day.events {
                    let _ = write!(
                        out,
                        "<div class=\"event-item\">{}</div>",
                        escape(&event.title)
                    );
                }
                out.push_str("</div>\n");
            }
        }
    }

    out.push_str("</div>\n</section>\n");
    out
}

fn week_section(days: &[WeekDay]) -> String {
    let mut out = String::from("<section class=\"week\">\n");

    for day in days {
        let class = if day.is_today { "week-day today" } else { "week-day" };
        let _ = write!(
            out,
            "<div class=\"{class}\"><span class=\"day-label\">{} {}</span>",
            WEEKDAY_LABELS[day.date.weekday().num_days_from_sunday() as usize],
            day.date.day()
        );
        for event in &day.events {
            let _ = write!(out, "<div class=\"event-item\">{}</div>", escape(&event.title));
        }
        out.push_str("</div>\n");
    }

    out.push_str("</section>\n");
    out
}

/// Renders a grid view into an HTML section.
pub fn agenda_section(view: &GridView) -> String {
    match view {
        GridView::Month(cells) => month_section(cells),
        GridView::Week(days) => week_section(days),
    }
}

/// Selects the page body for a resolved page id. Exhaustive on purpose: a
/// new page has to show up here or it does not compile.
pub fn body(page: PageId, month: Option<&GridView>, week: Option<&GridView>) -> String {
    let mut out = String::new();

    match page {
        PageId::Home => {
            out.push_str("<p>Check out our upcoming events:</p>\n");
            if let Some(view) = week {
                out.push_str(&agenda_section(view));
            }
        }
        PageId::Schedule => {
            if let Some(view) = month {
                out.push_str(&agenda_section(view));
            }
            out.push_str("<p>Events coming up!</p>\n");
            if let Some(view) = week {
                out.push_str(&agenda_section(view));
            }
        }
        PageId::Team => {
            out.push_str(
                "<p>Our amazing players and staff who make everything possible.</p>\n\
                 <p><a href=\"/api/kenny-images.json\">Team photos</a></p>\n",
            );
        }
        PageId::About => {
            out.push_str(
                "<p>Kenny Sports is dedicated to promoting sportsmanship, teamwork, and \
                 excellence in athletics. Our mission is to provide a supportive environment \
                 for athletes of all levels to grow and succeed.</p>\n",
            );
        }
    }

    out
}
