//! The static festival dataset: Leidens Ontzet, 2-3 October 2025.
use chrono::{Days, NaiveDate};
use once_cell::sync::Lazy;

use super::model::{DayProgram, Performance, PerformanceId, Timetable, Venue, VenueId};

static SEED: Lazy<Timetable> = Lazy::new(build_seed);

pub(super) fn seed() -> Timetable {
    SEED.clone()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn venue(id: u32, name: &str) -> Venue {
    Venue {
        id: VenueId::new(id),
        name: name.to_owned(),
    }
}

fn performance(
    id: u32,
    name: &str,
    venue: u32,
    day: NaiveDate,
    start: (u32, u32),
    end: (u32, u32),
) -> Performance {
    let start = day.and_hms_opt(start.0, start.1, 0).unwrap_or_default();
    let mut end = day.and_hms_opt(end.0, end.1, 0).unwrap_or_default();
    if end < start {
        end = end.checked_add_days(Days::new(1)).unwrap_or(start);
    }
    Performance {
        id: PerformanceId::new(id),
        name: name.to_owned(),
        venue: VenueId::new(venue),
        start,
        end,
    }
}

fn build_seed() -> Timetable {
    let venues = vec![
        venue(1, "Stadhuisplein"),
        venue(2, "Nieuwe Rijn"),
        venue(3, "Koornbrug"),
        venue(4, "Garenmarkt"),
        venue(5, "Beestenmarkt"),
        venue(6, "Hooglandse Kerkgracht"),
    ];

    let eve = date(2025, 10, 2);
    let feast = date(2025, 10, 3);

    let mut eve_program = DayProgram::new(eve);
    eve_program.performances = vec![
        performance(1, "Jazz aan de Gracht", 3, eve, (17, 0), (19, 0)),
        performance(2, "Shantykoor De Rijnzangers", 2, eve, (19, 0), (20, 30)),
        performance(3, "DJ Ontzet", 1, eve, (20, 0), (22, 0)),
        performance(4, "Coverband Vuurwerk", 5, eve, (21, 0), (0, 30)),
        performance(5, "Taptoe Finale", 1, eve, (22, 30), (23, 30)),
        performance(6, "Silent Disco", 4, eve, (23, 0), (2, 0)),
    ];

    let mut feast_program = DayProgram::new(feast);
    feast_program.performances = vec![
        performance(7, "Koraalmuziek", 1, feast, (13, 0), (14, 0)),
        performance(8, "Kamerkoor Pieterskerk", 6, feast, (13, 30), (15, 0)),
        performance(9, "Fanfare 3 October", 5, feast, (14, 0), (15, 30)),
        performance(10, "De Sleuteltjes", 2, feast, (15, 0), (16, 30)),
        performance(11, "Hutspotrock", 1, feast, (16, 0), (17, 30)),
        performance(12, "Blues op de Brug", 3, feast, (19, 45), (21, 15)),
        performance(13, "Polonaise Express", 2, feast, (21, 30), (23, 0)),
        performance(14, "DJ Lampion", 4, feast, (22, 0), (1, 0)),
    ];

    Timetable::from_parts(venues, vec![eve_program, feast_program])
}
