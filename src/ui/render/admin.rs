use ratatui::{
    layout::Rect,
    prelude::{Backend, Frame},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::model::{AdminField, UiRenderData};

use super::formatting::day_label;
use super::theme::{
    FORM_WIDTH, feedback_style, focus_style, muted_style, panel_border_style, text_style,
};

const VENUE_BLOCK_HEIGHT: u16 = 4;
const PERFORMANCE_BLOCK_HEIGHT: u16 = 8;

pub(super) fn render_admin<B: Backend>(f: &mut Frame<'_, B>, data: &UiRenderData, area: Rect) {
    if area.height < VENUE_BLOCK_HEIGHT || area.width < 20 {
        return;
    }
    let width = area.width.min(FORM_WIDTH);
    let x = area
        .x
        .saturating_add(area.width.saturating_sub(width) / 2);

    let venue_area = Rect {
        x,
        y: area.y,
        width,
        height: VENUE_BLOCK_HEIGHT.min(area.height),
    };
    let venue_lines = vec![
        field_line(
            data,
            AdminField::VenueName,
            "Locatie naam",
            &data.form.venue_name,
        ),
        Line::from(Span::styled(
            "Enter: locatie toevoegen".to_owned(),
            muted_style(data.no_color),
        )),
    ];
    f.render_widget(
        Paragraph::new(venue_lines).block(titled_block(data, "Voeg locatie toe")),
        venue_area,
    );

    let performance_y = area.y.saturating_add(VENUE_BLOCK_HEIGHT);
    if performance_y.saturating_add(PERFORMANCE_BLOCK_HEIGHT) > area.bottom() {
        return;
    }
    let performance_area = Rect {
        x,
        y: performance_y,
        width,
        height: PERFORMANCE_BLOCK_HEIGHT,
    };

    let venue_value = data
        .form
        .venue_index
        .and_then(|index| data.venues.get(index))
        .map_or_else(|| "selecteer locatie".to_owned(), |venue| venue.name.clone());
    let date_value = data
        .dates
        .get(data.form.day_index)
        .copied()
        .map(day_label)
        .unwrap_or_default();

    let performance_lines = vec![
        field_line(
            data,
            AdminField::PerformanceName,
            "Optreden naam",
            &data.form.performance_name,
        ),
        select_line(data, AdminField::Venue, "Locatie", &venue_value),
        select_line(data, AdminField::Date, "Dag", &date_value),
        field_line(
            data,
            AdminField::StartTime,
            "Begintijd (HH:MM)",
            &data.form.start_time,
        ),
        field_line(
            data,
            AdminField::EndTime,
            "Eindtijd (HH:MM)",
            &data.form.end_time,
        ),
        Line::from(Span::styled(
            "Enter: optreden toevoegen".to_owned(),
            muted_style(data.no_color),
        )),
    ];
    f.render_widget(
        Paragraph::new(performance_lines).block(titled_block(data, "Voeg optreden toe")),
        performance_area,
    );

    if let Some(feedback) = data.feedback.as_ref() {
        let feedback_y = performance_y.saturating_add(PERFORMANCE_BLOCK_HEIGHT);
        if feedback_y < area.bottom() {
            let feedback_area = Rect {
                x,
                y: feedback_y,
                width,
                height: 1,
            };
            f.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    feedback.text.clone(),
                    feedback_style(data.no_color, feedback.is_error),
                ))),
                feedback_area,
            );
        }
    }
}

fn titled_block(data: &UiRenderData, title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(title.to_owned())
        .border_style(panel_border_style(data.no_color))
        .style(text_style(data.no_color))
}

fn field_line(
    data: &UiRenderData,
    field: AdminField,
    label: &str,
    value: &str,
) -> Line<'static> {
    let focused = data.form.focus == field;
    let marker = if focused { "\u{203a} " } else { "  " };
    let shown = if focused {
        format!("{value}_")
    } else {
        value.to_owned()
    };
    Line::from(vec![
        Span::styled(
            format!("{marker}{label}: "),
            muted_style(data.no_color),
        ),
        Span::styled(
            shown,
            if focused {
                focus_style(data.no_color)
            } else {
                text_style(data.no_color)
            },
        ),
    ])
}

fn select_line(
    data: &UiRenderData,
    field: AdminField,
    label: &str,
    value: &str,
) -> Line<'static> {
    let focused = data.form.focus == field;
    let marker = if focused { "\u{203a} " } else { "  " };
    Line::from(vec![
        Span::styled(
            format!("{marker}{label}: "),
            muted_style(data.no_color),
        ),
        Span::styled(
            format!("< {value} >"),
            if focused {
                focus_style(data.no_color)
            } else {
                text_style(data.no_color)
            },
        ),
    ])
}
