//! Drives the pure input layer through scripted key sequences, the way a
//! user would fill the admin form, without a real terminal.
use chrono::Datelike;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use podium::schedule::{ScheduleWindow, Timetable};
use podium::ui::input::{InputOutcome, handle_key, handle_tick};
use podium::ui::model::{AdminField, Screen, UiData};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(data: &mut UiData, code: KeyCode) -> InputOutcome {
    handle_key(data, key(code))
}

fn type_text(data: &mut UiData, text: &str) {
    for ch in text.chars() {
        let _ = press(data, KeyCode::Char(ch));
    }
}

fn fresh_session() -> UiData {
    UiData::new(Timetable::seed(), ScheduleWindow::default(), true)
}

#[test]
fn add_performance_through_the_form() -> Result<(), String> {
    let mut data = fresh_session();

    let _ = press(&mut data, KeyCode::Tab);
    if data.screen != Screen::Admin {
        return Err("Tab did not open the admin screen".to_owned());
    }

    // VenueName -> PerformanceName
    let _ = press(&mut data, KeyCode::Down);
    type_text(&mut data, "Nacht van Leiden");

    // -> Venue, pick the first one
    let _ = press(&mut data, KeyCode::Down);
    let _ = press(&mut data, KeyCode::Right);

    // -> Date, move to the second festival day
    let _ = press(&mut data, KeyCode::Down);
    let _ = press(&mut data, KeyCode::Right);

    // -> StartTime / EndTime, ending past midnight
    let _ = press(&mut data, KeyCode::Down);
    type_text(&mut data, "23:45");
    let _ = press(&mut data, KeyCode::Down);
    type_text(&mut data, "00:45");

    let before = data
        .timetable
        .days()
        .get(1)
        .map(|day| day.performances.len())
        .ok_or("second festival day missing")?;

    let _ = press(&mut data, KeyCode::Enter);

    let feedback = data.feedback.clone().ok_or("no feedback after submit")?;
    if feedback.is_error {
        return Err(format!("submit failed: {}", feedback.text));
    }

    let day = data
        .timetable
        .days()
        .get(1)
        .ok_or("second festival day missing after submit")?;
    if day.performances.len() != before + 1 {
        return Err("performance was not appended to the selected day".to_owned());
    }
    let added = day
        .performances
        .last()
        .ok_or("day program empty after submit")?;
    if added.name != "Nacht van Leiden" {
        return Err(format!("wrong name stored: {}", added.name));
    }
    if added.start.date() != day.date {
        return Err("performance grouped under the wrong day".to_owned());
    }
    if added.end.date().day() != day.date.day() + 1 {
        return Err("overnight end time did not roll over".to_owned());
    }

    // Successful submit clears the performance fields but keeps the day.
    if !data.form.performance_name.is_empty() || data.form.venue_index.is_some() {
        return Err("form fields not cleared after submit".to_owned());
    }
    if data.form.day_index != 1 {
        return Err("selected day was reset".to_owned());
    }
    Ok(())
}

#[test]
fn add_venue_through_the_form() -> Result<(), String> {
    let mut data = fresh_session();
    let _ = press(&mut data, KeyCode::Tab);
    if data.form.focus != AdminField::VenueName {
        return Err("focus does not start on the venue form".to_owned());
    }

    let before = data.timetable.venues().len();
    type_text(&mut data, "Burchtplein");
    let _ = press(&mut data, KeyCode::Enter);

    if data.timetable.venues().len() != before + 1 {
        return Err("venue was not appended".to_owned());
    }
    let feedback = data.feedback.clone().ok_or("no feedback after submit")?;
    if feedback.is_error {
        return Err(format!("venue submit failed: {}", feedback.text));
    }
    if !data.form.venue_name.is_empty() {
        return Err("venue field not cleared".to_owned());
    }

    // The new venue is selectable: cycle backwards to reach the last entry.
    let _ = press(&mut data, KeyCode::Down);
    let _ = press(&mut data, KeyCode::Down);
    let _ = press(&mut data, KeyCode::Left);
    let selected = data
        .form
        .venue_index
        .and_then(|index| data.timetable.venues().get(index))
        .ok_or("no venue selected after cycling")?;
    if selected.name != "Burchtplein" {
        return Err(format!("expected the new venue, got {}", selected.name));
    }
    Ok(())
}

#[test]
fn incomplete_form_is_rejected_with_feedback() -> Result<(), String> {
    let mut data = fresh_session();
    let _ = press(&mut data, KeyCode::Tab);
    let _ = press(&mut data, KeyCode::Down);

    let _ = press(&mut data, KeyCode::Enter);
    let feedback = data.feedback.clone().ok_or("no feedback for empty form")?;
    if !feedback.is_error {
        return Err("empty form was accepted".to_owned());
    }

    // Filling only the name still fails on the missing venue.
    type_text(&mut data, "Half ingevuld");
    let _ = press(&mut data, KeyCode::Enter);
    let feedback = data.feedback.clone().ok_or("no feedback after retry")?;
    if !feedback.is_error {
        return Err("form without venue was accepted".to_owned());
    }

    // A malformed time also surfaces in the feedback line.
    let _ = press(&mut data, KeyCode::Down);
    let _ = press(&mut data, KeyCode::Right);
    let _ = press(&mut data, KeyCode::Down);
    let _ = press(&mut data, KeyCode::Down);
    type_text(&mut data, "half negen");
    let _ = press(&mut data, KeyCode::Down);
    type_text(&mut data, "22:00");
    let _ = press(&mut data, KeyCode::Enter);
    let feedback = data.feedback.clone().ok_or("no feedback for bad time")?;
    if !feedback.is_error {
        return Err("malformed start time was accepted".to_owned());
    }

    let total: usize = data
        .timetable
        .days()
        .iter()
        .map(|day| day.performances.len())
        .sum();
    let seeded: usize = Timetable::seed()
        .days()
        .iter()
        .map(|day| day.performances.len())
        .sum();
    if total != seeded {
        return Err("a rejected submit still modified the timetable".to_owned());
    }
    Ok(())
}

#[test]
fn quit_and_navigation_keys() -> Result<(), String> {
    let mut data = fresh_session();

    if press(&mut data, KeyCode::Right) != InputOutcome::Redraw {
        return Err("day cycling did not request a redraw".to_owned());
    }
    if data.selected_day != 1 {
        return Err("Right did not select the next day".to_owned());
    }
    handle_tick(&mut data);
    let date = data.selected_date().ok_or("no selected date")?;
    if data.now.date() != date {
        return Err("tick did not pin the clock to the selected day".to_owned());
    }

    let _ = press(&mut data, KeyCode::Tab);
    if press(&mut data, KeyCode::Esc) != InputOutcome::Redraw || data.screen != Screen::Timetable {
        return Err("Esc did not leave the admin screen".to_owned());
    }
    if press(&mut data, KeyCode::Char('q')) != InputOutcome::Quit {
        return Err("q did not quit from the timetable".to_owned());
    }
    let ctrl_c = handle_key(
        &mut data,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    );
    if ctrl_c != InputOutcome::Quit {
        return Err("ctrl-c did not quit".to_owned());
    }
    Ok(())
}
