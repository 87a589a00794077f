use ratatui::style::{Color, Modifier, Style};

pub(crate) const BANNER_LINES: [&str; 7] = [
    "██████╗  ██████╗ ██████╗ ██╗██╗   ██╗███╗   ███╗",
    "██╔══██╗██╔═══██╗██╔══██╗██║██║   ██║████╗ ████║",
    "██████╔╝██║   ██║██║  ██║██║██║   ██║██╔████╔██║",
    "██╔═══╝ ██║   ██║██║  ██║██║██║   ██║██║╚██╔╝██║",
    "██║     ╚██████╔╝██████╔╝██║╚██████╔╝██║ ╚═╝ ██║",
    "╚═╝      ╚═════╝ ╚═════╝ ╚═╝ ╚═════╝ ╚═╝     ╚═╝",
    "                                                ",
];
pub(crate) const UI_MARGIN: u16 = 1;
pub(crate) const HEADER_HEIGHT: u16 = 2;
pub(crate) const FOOTER_HEIGHT: u16 = 2;
pub(crate) const BODY_MIN_HEIGHT: u16 = 6;
pub(crate) const VENUE_COL_WIDTH: u16 = 22;
pub(crate) const VENUE_ROW_HEIGHT: u16 = 3;
pub(crate) const BAR_HEIGHT: u16 = 2;
pub(crate) const SLOT_LABEL_WIDTH: u16 = 5;
pub(crate) const FORM_WIDTH: u16 = 46;

// The festival palette: the original page leaned on one red ramp, dark
// variants carry the terminal background, light ones carry the bars.
pub(crate) const APP_BG_RGB: (u8, u8, u8) = (0x45, 0x0a, 0x0a);
pub(crate) const HEADER_BG_RGB: (u8, u8, u8) = (0xdc, 0x26, 0x26);
pub(crate) const ROW_BG_RGB: (u8, u8, u8) = (0x7f, 0x1d, 0x1d);
pub(crate) const BAR_BG_RGB: (u8, u8, u8) = (0xfc, 0xa5, 0xa5);
pub(crate) const BAR_TEXT_RGB: (u8, u8, u8) = (0x45, 0x0a, 0x0a);
pub(crate) const CURSOR_RGB: (u8, u8, u8) = (0xf8, 0x71, 0x71);
pub(crate) const TEXT_RGB: (u8, u8, u8) = (0xfe, 0xf2, 0xf2);
pub(crate) const MUTED_RGB: (u8, u8, u8) = (0xfe, 0xca, 0xca);
pub(crate) const FEEDBACK_OK_RGB: (u8, u8, u8) = (0x22, 0xc5, 0x5e);
pub(crate) const FEEDBACK_ERR_RGB: (u8, u8, u8) = (0xfb, 0x92, 0x3c);

pub(crate) const SPLASH_DURATION_SECS: u64 = 3;
pub(crate) const BANNER_PADDING_LINES: usize = 1;
pub(crate) const COLOR_START: (u8, u8, u8) = (0xf8, 0x71, 0x71);
pub(crate) const COLOR_MID: (u8, u8, u8) = (0xef, 0x44, 0x44);
pub(crate) const COLOR_END: (u8, u8, u8) = (0xb9, 0x1c, 0x1c);
pub(crate) const SPLASH_SUBTITLE_RGB: (u8, u8, u8) = (0xfc, 0xa5, 0xa5);

pub(crate) fn style_color(no_color: bool, color: Color) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().fg(color)
    }
}

pub(crate) const fn rgb(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub(crate) fn app_background_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().bg(rgb(APP_BG_RGB))
    }
}

pub(crate) fn header_style(no_color: bool) -> Style {
    if no_color {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .bg(rgb(HEADER_BG_RGB))
            .fg(rgb(TEXT_RGB))
            .add_modifier(Modifier::BOLD)
    }
}

pub(crate) fn row_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().bg(rgb(ROW_BG_RGB))
    }
}

pub(crate) fn bar_style(no_color: bool) -> Style {
    if no_color {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default().bg(rgb(BAR_BG_RGB)).fg(rgb(BAR_TEXT_RGB))
    }
}

pub(crate) fn cursor_style(no_color: bool) -> Style {
    if no_color {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default().bg(rgb(CURSOR_RGB))
    }
}

pub(crate) fn text_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().fg(rgb(TEXT_RGB))
    }
}

pub(crate) fn muted_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().fg(rgb(MUTED_RGB))
    }
}

pub(crate) fn focus_style(no_color: bool) -> Style {
    text_style(no_color).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

pub(crate) fn feedback_style(no_color: bool, is_error: bool) -> Style {
    if no_color {
        Style::default().add_modifier(Modifier::BOLD)
    } else if is_error {
        Style::default().fg(rgb(FEEDBACK_ERR_RGB))
    } else {
        Style::default().fg(rgb(FEEDBACK_OK_RGB))
    }
}

pub(crate) fn panel_border_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().fg(rgb(MUTED_RGB))
    }
}

fn gradient_color(start: (u8, u8, u8), end: (u8, u8, u8), idx: usize, denom: usize) -> Color {
    let denom = denom.max(1) as i32;
    let idx = idx.min(usize::try_from(denom).unwrap_or(0)) as i32;
    let lerp = |a: u8, b: u8| -> u8 {
        let a = i32::from(a);
        let b = i32::from(b);
        let value = b
            .checked_sub(a)
            .and_then(|delta| delta.checked_mul(idx))
            .and_then(|scaled| scaled.checked_div(denom))
            .and_then(|step| a.checked_add(step))
            .unwrap_or(a);
        u8::try_from(value.clamp(0, 255)).unwrap_or(0)
    };
    Color::Rgb(
        lerp(start.0, end.0),
        lerp(start.1, end.1),
        lerp(start.2, end.2),
    )
}

pub(crate) fn tri_gradient_color(
    start: (u8, u8, u8),
    mid: (u8, u8, u8),
    end: (u8, u8, u8),
    idx: usize,
    denom: usize,
) -> Color {
    let denom = denom.max(1);
    let half = denom / 2;
    if idx <= half {
        gradient_color(start, mid, idx, half)
    } else {
        gradient_color(
            mid,
            end,
            idx.saturating_sub(half),
            denom.saturating_sub(half),
        )
    }
}
