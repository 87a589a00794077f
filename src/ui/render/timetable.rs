use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::{Backend, Frame},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::ui::model::UiRenderData;

use super::formatting::{format_span, format_time_of_day};
use super::theme::{
    BAR_HEIGHT, SLOT_LABEL_WIDTH, VENUE_COL_WIDTH, VENUE_ROW_HEIGHT, bar_style, cursor_style,
    muted_style, row_style, text_style,
};

pub(super) fn render_timetable<B: Backend>(f: &mut Frame<'_, B>, data: &UiRenderData, area: Rect) {
    if area.height < VENUE_ROW_HEIGHT || area.width <= VENUE_COL_WIDTH {
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(VENUE_COL_WIDTH), Constraint::Min(10)])
        .split(area);
    let (label_col, grid_col) = match columns.as_ref() {
        [a, b] => (*a, *b),
        _ => return,
    };

    render_axis(f, data, label_col, grid_col);

    let mut grid_bottom = grid_col.y.saturating_add(1);
    for (index, venue) in data.venues.iter().enumerate() {
        let offset = u16::try_from(index)
            .unwrap_or(u16::MAX)
            .saturating_mul(VENUE_ROW_HEIGHT)
            .saturating_add(1);
        let y = grid_col.y.saturating_add(offset);
        if y.saturating_add(BAR_HEIGHT) > area.bottom() {
            break;
        }

        let label_area = Rect {
            x: label_col.x,
            y,
            width: label_col.width,
            height: BAR_HEIGHT.min(area.bottom().saturating_sub(y)),
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                venue.name.clone(),
                text_style(data.no_color).add_modifier(Modifier::BOLD),
            ))),
            label_area,
        );

        let row_area = Rect {
            x: grid_col.x,
            y,
            width: grid_col.width,
            height: BAR_HEIGHT.min(area.bottom().saturating_sub(y)),
        };
        f.render_widget(Block::default().style(row_style(data.no_color)), row_area);

        for performance in &data.performances {
            if performance.venue != venue.id {
                continue;
            }
            let start_pct = data.window.position_pct(performance.start.time());
            let end_pct = data.window.position_pct(performance.end.time());
            let Some((x, width)) = bar_span(row_area.width, start_pct, end_pct) else {
                continue;
            };
            let bar_area = Rect {
                x: row_area.x.saturating_add(x),
                y,
                width,
                height: row_area.height,
            };
            let lines = vec![
                Line::from(Span::styled(
                    performance.name.clone(),
                    bar_style(data.no_color).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format_span(performance.start, performance.end),
                    bar_style(data.no_color),
                )),
            ];
            f.render_widget(
                Paragraph::new(lines).style(bar_style(data.no_color)),
                bar_area,
            );
        }

        grid_bottom = y.saturating_add(row_area.height);
    }

    // The time cursor paints over the grid, like the original's red line.
    if let Some(x) = cursor_cell(grid_col.width, data.window.position_pct(data.now.time())) {
        let cursor_area = Rect {
            x: grid_col.x.saturating_add(x),
            y: grid_col.y.saturating_add(1),
            width: 1,
            height: grid_bottom.saturating_sub(grid_col.y.saturating_add(1)),
        };
        if cursor_area.height > 0 {
            f.render_widget(
                Block::default().style(cursor_style(data.no_color)),
                cursor_area,
            );
        }
    }
}

fn render_axis<B: Backend>(f: &mut Frame<'_, B>, data: &UiRenderData, label_col: Rect, grid_col: Rect) {
    let header_area = Rect {
        x: label_col.x,
        y: label_col.y,
        width: label_col.width,
        height: 1,
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Locaties",
            text_style(data.no_color).add_modifier(Modifier::BOLD),
        ))),
        header_area,
    );

    let slots = data.window.slots();
    // Half-hour labels collide on narrow grids; fall back to hourly ones.
    let needed = slots.len().saturating_mul(usize::from(SLOT_LABEL_WIDTH).saturating_add(1));
    let stride = if usize::from(grid_col.width) >= needed {
        1
    } else {
        2
    };
    for (index, slot) in slots.iter().enumerate() {
        if index.checked_rem(stride).unwrap_or(0) != 0 {
            continue;
        }
        let pct = data.window.position_pct(*slot);
        let Some(x) = cursor_cell(grid_col.width, pct) else {
            continue;
        };
        let width = SLOT_LABEL_WIDTH.min(grid_col.width.saturating_sub(x));
        if width < SLOT_LABEL_WIDTH {
            continue;
        }
        let slot_area = Rect {
            x: grid_col.x.saturating_add(x),
            y: grid_col.y,
            width,
            height: 1,
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format_time_of_day(*slot),
                muted_style(data.no_color),
            ))),
            slot_area,
        );
    }
}

/// Maps a performance's start/end percentages onto grid cells, clamped to the
/// visible row. Returns `None` when the bar lies fully outside the window.
pub(crate) fn bar_span(width: u16, start_pct: f64, end_pct: f64) -> Option<(u16, u16)> {
    if width == 0 || end_pct <= start_pct {
        return None;
    }
    let cells = f64::from(width);
    let from = start_pct / 100.0 * cells;
    let to = end_pct / 100.0 * cells;
    if to <= 0.0 || from >= cells {
        return None;
    }
    let from = from.max(0.0);
    let to = to.min(cells);
    let x = from.floor() as u16;
    let end = (to.ceil() as u16).min(width);
    let span = end.saturating_sub(x).max(1);
    Some((x, span.min(width.saturating_sub(x))))
}

/// Cell index of a percentage position, or `None` outside `[0, 100]`.
pub(crate) fn cursor_cell(width: u16, pct: f64) -> Option<u16> {
    if width == 0 || pct < 0.0 || pct > 100.0 {
        return None;
    }
    let x = (pct / 100.0 * f64::from(width)).floor() as u16;
    Some(x.min(width.saturating_sub(1)))
}
