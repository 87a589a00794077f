mod cli;
mod parsers;


pub use cli::PodiumArgs;
pub(crate) use parsers::{parse_date_arg, parse_positive_u32, parse_positive_u64, parse_time_arg};
