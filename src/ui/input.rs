//! Pure key handling: maps key events onto the session state. No terminal
//! access here, so the whole layer is drivable from tests.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::error::ValidationError;
use crate::schedule::{NewPerformance, parse_hhmm};

use super::model::{AdminField, Feedback, Screen, UiData};

/// Upper bound for text fields; the grid truncates long names anyway.
const MAX_FIELD_LEN: usize = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Ignored,
    Redraw,
    Quit,
}

/// Applies one key event to the session state.
#[must_use]
pub fn handle_key(data: &mut UiData, key: KeyEvent) -> InputOutcome {
    if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c')) {
        return InputOutcome::Quit;
    }
    match data.screen {
        Screen::Timetable => handle_timetable_key(data, key),
        Screen::Admin => handle_admin_key(data, key),
    }
}

/// Recomputes the simulated current time; called once per tick interval.
pub fn handle_tick(data: &mut UiData) {
    data.refresh_clock();
}

fn handle_timetable_key(data: &mut UiData, key: KeyEvent) -> InputOutcome {
    match key.code {
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => InputOutcome::Quit,
        KeyCode::Tab | KeyCode::BackTab => {
            data.screen = Screen::Admin;
            data.feedback = None;
            InputOutcome::Redraw
        }
        KeyCode::Left => {
            data.cycle_day(false);
            InputOutcome::Redraw
        }
        KeyCode::Right => {
            data.cycle_day(true);
            InputOutcome::Redraw
        }
        KeyCode::Backspace
        | KeyCode::Enter
        | KeyCode::Up
        | KeyCode::Down
        | KeyCode::Home
        | KeyCode::End
        | KeyCode::PageUp
        | KeyCode::PageDown
        | KeyCode::Delete
        | KeyCode::Insert
        | KeyCode::F(_)
        | KeyCode::Char(_)
        | KeyCode::Null
        | KeyCode::CapsLock
        | KeyCode::ScrollLock
        | KeyCode::NumLock
        | KeyCode::PrintScreen
        | KeyCode::Pause
        | KeyCode::Menu
        | KeyCode::KeypadBegin
        | KeyCode::Media(_)
        | KeyCode::Modifier(_) => InputOutcome::Ignored,
    }
}

fn handle_admin_key(data: &mut UiData, key: KeyEvent) -> InputOutcome {
    match key.code {
        KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => {
            data.screen = Screen::Timetable;
            InputOutcome::Redraw
        }
        KeyCode::Up => {
            data.form.focus = data.form.focus.prev();
            InputOutcome::Redraw
        }
        KeyCode::Down => {
            data.form.focus = data.form.focus.next();
            InputOutcome::Redraw
        }
        KeyCode::Left => cycle_selection(data, false),
        KeyCode::Right => cycle_selection(data, true),
        KeyCode::Enter => {
            if data.form.focus == AdminField::VenueName {
                submit_venue(data)
            } else {
                submit_performance(data)
            }
        }
        KeyCode::Backspace => {
            if let Some(text) = data.form.focused_text_mut() {
                text.pop();
                return InputOutcome::Redraw;
            }
            InputOutcome::Ignored
        }
        KeyCode::Delete => {
            if let Some(text) = data.form.focused_text_mut() {
                text.clear();
                return InputOutcome::Redraw;
            }
            InputOutcome::Ignored
        }
        KeyCode::Char(ch) => {
            if ch.is_control() {
                return InputOutcome::Ignored;
            }
            if let Some(text) = data.form.focused_text_mut() {
                if text.chars().count() < MAX_FIELD_LEN {
                    text.push(ch);
                }
                return InputOutcome::Redraw;
            }
            InputOutcome::Ignored
        }
        KeyCode::Home
        | KeyCode::End
        | KeyCode::PageUp
        | KeyCode::PageDown
        | KeyCode::Insert
        | KeyCode::F(_)
        | KeyCode::Null
        | KeyCode::CapsLock
        | KeyCode::ScrollLock
        | KeyCode::NumLock
        | KeyCode::PrintScreen
        | KeyCode::Pause
        | KeyCode::Menu
        | KeyCode::KeypadBegin
        | KeyCode::Media(_)
        | KeyCode::Modifier(_) => InputOutcome::Ignored,
    }
}

fn cycle_selection(data: &mut UiData, forward: bool) -> InputOutcome {
    match data.form.focus {
        AdminField::Venue => {
            let count = data.timetable.venues().len();
            if count == 0 {
                return InputOutcome::Ignored;
            }
            data.form.venue_index = Some(match data.form.venue_index {
                None => {
                    if forward {
                        0
                    } else {
                        count.saturating_sub(1)
                    }
                }
                Some(index) if forward => {
                    index.saturating_add(1).checked_rem(count).unwrap_or(0)
                }
                Some(index) => index
                    .checked_add(count.saturating_sub(1))
                    .and_then(|value| value.checked_rem(count))
                    .unwrap_or(0),
            });
            InputOutcome::Redraw
        }
        AdminField::Date => {
            let count = data.timetable.days().len();
            if count == 0 {
                return InputOutcome::Ignored;
            }
            data.form.day_index = if forward {
                data.form
                    .day_index
                    .saturating_add(1)
                    .checked_rem(count)
                    .unwrap_or(0)
            } else {
                data.form
                    .day_index
                    .checked_add(count.saturating_sub(1))
                    .and_then(|value| value.checked_rem(count))
                    .unwrap_or(0)
            };
            InputOutcome::Redraw
        }
        AdminField::VenueName
        | AdminField::PerformanceName
        | AdminField::StartTime
        | AdminField::EndTime => InputOutcome::Ignored,
    }
}

fn submit_venue(data: &mut UiData) -> InputOutcome {
    let name = data.form.venue_name.clone();
    match data.timetable.add_venue(&name) {
        Ok(id) => {
            tracing::debug!(%id, "venue added");
            data.form.venue_name.clear();
            data.feedback = Some(Feedback::ok("Locatie toegevoegd."));
        }
        Err(err) => {
            data.feedback = Some(Feedback::error(err.to_string()));
        }
    }
    InputOutcome::Redraw
}

fn submit_performance(data: &mut UiData) -> InputOutcome {
    match build_new_performance(data) {
        Ok(new) => match data.timetable.add_performance(new) {
            Ok(id) => {
                tracing::debug!(?id, "performance added");
                data.form.clear_performance_fields();
                data.feedback = Some(Feedback::ok("Optreden toegevoegd."));
            }
            Err(err) => {
                data.feedback = Some(Feedback::error(err.to_string()));
            }
        },
        Err(err) => {
            data.feedback = Some(Feedback::error(err.to_string()));
        }
    }
    InputOutcome::Redraw
}

fn build_new_performance(data: &UiData) -> Result<NewPerformance, ValidationError> {
    let form = &data.form;
    if form.performance_name.trim().is_empty() {
        return Err(ValidationError::MissingField { field: "name" });
    }
    let venue = form
        .venue_index
        .and_then(|index| data.timetable.venues().get(index))
        .map(|venue| venue.id)
        .ok_or(ValidationError::MissingField { field: "venue" })?;
    let date = data
        .timetable
        .days()
        .get(form.day_index)
        .map(|day| day.date)
        .ok_or(ValidationError::MissingField { field: "date" })?;
    let start = required_time(&form.start_time, "start time")?;
    let end = required_time(&form.end_time, "end time")?;
    Ok(NewPerformance {
        name: form.performance_name.clone(),
        venue: Some(venue),
        date,
        start,
        end,
    })
}

fn required_time(value: &str, field: &'static str) -> Result<chrono::NaiveTime, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    parse_hhmm(value)
}
