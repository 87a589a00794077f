use chrono::{NaiveDate, NaiveTime};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::error::{AppError, AppResult};
use crate::schedule::{ScheduleWindow, Timetable};

use super::model::{AdminField, Screen, UiData, UiRenderData};
use super::render::formatting::{day_label, format_span, format_time_of_day};
use super::render::timetable::{bar_span, cursor_cell};
use super::render::{Ui, UiActions};

fn terminal(width: u16, height: u16) -> AppResult<Terminal<TestBackend>> {
    match Terminal::new(TestBackend::new(width, height)) {
        Ok(term) => Ok(term),
        Err(err) => Err(AppError::validation(format!(
            "Failed to create TestBackend terminal: {}",
            err
        ))),
    }
}

fn seeded() -> UiData {
    UiData::new(Timetable::seed(), ScheduleWindow::default(), false)
}

#[test]
fn timetable_render_does_not_panic() -> AppResult<()> {
    let mut term = terminal(120, 30)?;
    let data = UiRenderData::from(&seeded());
    Ui::render(&mut term, &data);
    Ok(())
}

#[test]
fn admin_render_does_not_panic() -> AppResult<()> {
    let mut term = terminal(80, 24)?;
    let mut state = seeded();
    state.screen = Screen::Admin;
    state.form.focus = AdminField::StartTime;
    state.form.performance_name = "Testband".to_owned();
    let data = UiRenderData::from(&state);
    Ui::render(&mut term, &data);
    Ok(())
}

#[test]
fn tiny_terminal_render_does_not_panic() -> AppResult<()> {
    let mut term = terminal(5, 3)?;
    let mut state = seeded();
    let data = UiRenderData::from(&state);
    Ui::render(&mut term, &data);
    state.screen = Screen::Admin;
    let admin = UiRenderData::from(&state);
    Ui::render(&mut term, &admin);
    Ok(())
}

#[test]
fn render_data_resolves_selected_day() -> AppResult<()> {
    let mut state = seeded();
    let first = UiRenderData::from(&state);
    state.cycle_day(true);
    let second = UiRenderData::from(&state);
    if first.selected_day == second.selected_day {
        return Err(AppError::validation("day selection did not move"));
    }
    let expected = state
        .timetable
        .days()
        .get(second.selected_day)
        .map(|day| day.performances.len())
        .ok_or_else(|| AppError::validation("selected day missing"))?;
    if second.performances.len() != expected {
        return Err(AppError::validation(
            "snapshot does not carry the selected day's performances",
        ));
    }
    if second.venues.len() != state.timetable.venues().len() {
        return Err(AppError::validation("snapshot venue list wrong"));
    }
    Ok(())
}

#[test]
fn cycle_day_wraps_around() -> AppResult<()> {
    let mut state = seeded();
    let days = state.timetable.days().len();
    for _ in 0..days {
        state.cycle_day(true);
    }
    if state.selected_day != 0 {
        return Err(AppError::validation("forward cycle did not wrap"));
    }
    state.cycle_day(false);
    if state.selected_day != days.saturating_sub(1) {
        return Err(AppError::validation("backward cycle did not wrap"));
    }
    Ok(())
}

#[test]
fn bar_span_clamps_to_row() -> AppResult<()> {
    // Fully inside: 25%..50% of 100 cells.
    if bar_span(100, 25.0, 50.0) != Some((25, 25)) {
        return Err(AppError::validation("inside bar mapped wrong"));
    }
    // Starts before the window: clamped to the left edge.
    match bar_span(100, -10.0, 10.0) {
        Some((0, width)) if width == 10 => {}
        other => {
            return Err(AppError::validation(format!(
                "left-clamped bar mapped wrong: {other:?}"
            )));
        }
    }
    // Ends past the window: clamped to the right edge.
    match bar_span(100, 90.0, 120.0) {
        Some((90, 10)) => {}
        other => {
            return Err(AppError::validation(format!(
                "right-clamped bar mapped wrong: {other:?}"
            )));
        }
    }
    // Fully outside on either side disappears.
    if bar_span(100, -20.0, -5.0).is_some() || bar_span(100, 110.0, 130.0).is_some() {
        return Err(AppError::validation("outside bar not dropped"));
    }
    // Sliver bars keep at least one cell.
    match bar_span(100, 10.0, 10.2) {
        Some((10, width)) if width >= 1 => {}
        other => {
            return Err(AppError::validation(format!(
                "sliver bar mapped wrong: {other:?}"
            )));
        }
    }
    Ok(())
}

#[test]
fn cursor_cell_requires_window_position() -> AppResult<()> {
    if cursor_cell(100, -0.1).is_some() || cursor_cell(100, 100.1).is_some() {
        return Err(AppError::validation("out-of-window cursor drawn"));
    }
    if cursor_cell(100, 0.0) != Some(0) {
        return Err(AppError::validation("window start cursor wrong"));
    }
    if cursor_cell(100, 100.0) != Some(99) {
        return Err(AppError::validation("window end cursor wrong"));
    }
    if cursor_cell(0, 50.0).is_some() {
        return Err(AppError::validation("zero-width grid produced a cursor"));
    }
    Ok(())
}

#[test]
fn dutch_labels_and_time_formats() -> AppResult<()> {
    let date = NaiveDate::from_ymd_opt(2025, 10, 3)
        .ok_or_else(|| AppError::validation("bad date"))?;
    if day_label(date) != "vrijdag 3 oktober" {
        return Err(AppError::validation(format!(
            "day label wrong: {}",
            day_label(date)
        )));
    }
    let start = date
        .and_hms_opt(21, 30, 0)
        .ok_or_else(|| AppError::validation("bad start"))?;
    let end = date
        .and_hms_opt(23, 0, 0)
        .ok_or_else(|| AppError::validation("bad end"))?;
    if format_span(start, end) != "21:30 - 23:00" {
        return Err(AppError::validation("span format wrong"));
    }
    let half_past_two = NaiveTime::from_hms_opt(2, 30, 0)
        .ok_or_else(|| AppError::validation("bad time"))?;
    if format_time_of_day(half_past_two) != "02:30" {
        return Err(AppError::validation("time-of-day format wrong"));
    }
    Ok(())
}
