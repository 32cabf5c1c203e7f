mod log;

pub use log::{
    EventLog,
    EventLoggable,
    LogEvent,
};
