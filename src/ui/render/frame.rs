use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::{Backend, Frame},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::ui::model::{Screen, UiRenderData};

use super::admin::render_admin;
use super::formatting::{day_label, format_time};
use super::theme::{
    BODY_MIN_HEIGHT, FOOTER_HEIGHT, HEADER_HEIGHT, UI_MARGIN, app_background_style, header_style,
    muted_style, text_style,
};
use super::timetable::render_timetable;

pub fn draw_frame<B: Backend>(f: &mut Frame<'_, B>, data: &UiRenderData) {
    let size = f.size();
    f.render_widget(
        Block::default().style(app_background_style(data.no_color)),
        size,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(UI_MARGIN)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(BODY_MIN_HEIGHT),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(size);

    let (header, body, footer) = match chunks.as_ref() {
        [a, b, c] => (*a, *b, *c),
        _ => return,
    };

    render_header(f, data, header);
    match data.screen {
        Screen::Timetable => render_timetable(f, data, body),
        Screen::Admin => render_admin(f, data, body),
    }
    render_footer(f, data, footer);
}

fn render_header<B: Backend>(f: &mut Frame<'_, B>, data: &UiRenderData, area: Rect) {
    let screen = match data.screen {
        Screen::Timetable => "Timetable",
        Screen::Admin => "Beheer",
    };
    let day = data
        .dates
        .get(data.selected_day)
        .copied()
        .map(day_label)
        .unwrap_or_default();
    let day_line = match data.screen {
        Screen::Timetable => format!(
            "  < {} >  ({}/{})",
            day,
            data.selected_day.saturating_add(1),
            data.dates.len()
        ),
        Screen::Admin => "  Voeg locaties en optredens toe".to_owned(),
    };

    let lines = vec![
        Line::from(Span::raw(format!(
            " Optredens Leidens Ontzet - {screen}"
        ))),
        Line::from(Span::raw(day_line)),
    ];
    f.render_widget(
        Paragraph::new(lines).style(header_style(data.no_color)),
        area,
    );
}

fn render_footer<B: Backend>(f: &mut Frame<'_, B>, data: &UiRenderData, area: Rect) {
    let hints = match data.screen {
        Screen::Timetable => "Tab beheer   \u{2190}/\u{2192} dag   q afsluiten",
        Screen::Admin => {
            "Tab rooster   \u{2191}/\u{2193} veld   \u{2190}/\u{2192} keuze   Enter toevoegen   Esc terug"
        }
    };
    let lines = vec![
        Line::from(Span::styled(
            format!(
                "Huidige tijd (gesimuleerd): {}",
                format_time(data.now)
            ),
            text_style(data.no_color),
        )),
        Line::from(Span::styled(hints.to_owned(), muted_style(data.no_color))),
    ];
    f.render_widget(Paragraph::new(lines), area);
}
