//! Plain-text rendering of a [`Report`], built on the records' `Display`.

use super::Report;
use std::fmt::Write;

pub fn render(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Scraped {} {}", report.local_date, report.local_time);

    if let Some(events) = &report.events {
        let _ = writeln!(out, "\n== Events ({}) ==", events.len());
        for event in events {
            out.push_str(&event.to_string());
        }
    }

    if let Some(ffw) = &report.flora_fauna {
        let _ = writeln!(out, "\n== Plant of the Month ==");
        out.push_str(&ffw.plant_of_the_month.to_string());
        let _ = writeln!(out, "\n== Animal of the Month ==");
        out.push_str(&ffw.animal_of_the_month.to_string());
        let _ = writeln!(out, "\n== Did You Know ({}) ==", ffw.did_you_know.len());
        for fact in &ffw.did_you_know {
            out.push_str(&fact.to_string());
        }
    }

    for failure in &report.failures {
        let _ = writeln!(out, "\n!! {} unavailable: {}", failure.source, failure.error);
    }
    out
}
