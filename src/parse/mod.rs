mod command;
mod expander;

pub use command::{is_ignorable, parse_line, Command, MAX_ARGS, NULL_DEVICE};
pub use expander::PidExpander;
