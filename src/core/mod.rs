pub mod commands;
pub mod jobs;
pub mod state;
pub mod status;

pub use jobs::{Pid, ProcessRecord, ProcessTable};
pub use state::{ModeFlags, ShellState};
pub use status::ExitStatus;
