//! Festival schedule domain: venues, performances, day programs, and the
//! display-window arithmetic used to lay them out on a timeline.
mod clock;
mod data;
mod model;
mod window;


pub use clock::{pinned_to_date, simulated_now};
pub use model::{
    DayProgram, NewPerformance, Performance, PerformanceId, Timetable, Venue, VenueId,
};
pub use window::{
    DEFAULT_WINDOW_MINUTES, DEFAULT_WINDOW_START, ScheduleWindow, SLOT_MINUTES, parse_hhmm,
};
