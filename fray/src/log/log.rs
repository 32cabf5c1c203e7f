use std::{
    fmt,
    fmt::Display,
    mem,
};

use itertools::Itertools;

/// A single event in the [`EventLog`].
///
/// An event has a title and an ordered list of attributes. An attribute is either a lone value or
/// a `key:value` pair. Events render to a pipe-separated string, such as
/// `move|mon:Cradily,1,0|name:Rock Slide`.
///
/// This object should not be constructed directly. Instead, use the
/// [`log_event`][`crate::log_event`] macro.
pub struct LogEvent {
    title: String,
    attributes: Vec<String>,
}

impl LogEvent {
    pub fn new<T>(title: T) -> Self
    where
        T: Display,
    {
        Self {
            title: title.to_string(),
            attributes: Vec::new(),
        }
    }

    /// Adds a lone value to the event.
    pub fn push_value<T>(&mut self, value: T)
    where
        T: Display,
    {
        self.attributes.push(value.to_string());
    }

    /// Adds a `key:value` attribute to the event.
    pub fn push_attribute<K, V>(&mut self, key: K, value: V)
    where
        K: Display,
        V: Display,
    {
        self.attributes.push(format!("{key}:{value}"));
    }

    /// Extends the event with another loggable entry.
    pub fn extend<T>(&mut self, entry: &T)
    where
        T: EventLoggable,
    {
        entry.log(self);
    }
}

impl Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.attributes.is_empty() {
            write!(f, "{}", self.title)
        } else {
            write!(f, "{}|{}", self.title, self.attributes.iter().join("|"))
        }
    }
}

/// Trait for objects that can be added to a [`LogEvent`].
pub trait EventLoggable {
    fn log(&self, event: &mut LogEvent);
}

impl EventLoggable for &str {
    fn log(&self, event: &mut LogEvent) {
        event.push_value(self);
    }
}

impl EventLoggable for String {
    fn log(&self, event: &mut LogEvent) {
        event.push_value(self);
    }
}

impl<K, V> EventLoggable for (K, V)
where
    K: Display,
    V: Display,
{
    fn log(&self, event: &mut LogEvent) {
        event.push_attribute(&self.0, &self.1);
    }
}

/// Constructs a [`LogEvent`] to be added to the [`EventLog`].
///
/// This macro enforces a common format for all messages in the event log.
#[macro_export]
macro_rules! log_event {
    ($title:expr $(, $entry:expr)* $(,)?) => {{
        #[allow(unused_mut)]
        let mut event = $crate::log::LogEvent::new($title);
        $($crate::log::EventLoggable::log(&$entry, &mut event);)*
        event
    }};
}

/// A log of battle events that can be exported.
///
/// The log doubles as the diagnostic channel: degraded operations record `debug` events here
/// rather than failing.
pub struct EventLog {
    logs: Vec<String>,
    last_read: usize,
}

impl EventLog {
    /// Creates a new event log.
    pub fn new() -> Self {
        Self {
            logs: Vec::new(),
            last_read: 0,
        }
    }

    /// Does the log contain new messages since the last call to [`Self::read_out`]?
    pub fn has_new_messages(&self) -> bool {
        self.last_read < self.logs.len()
    }

    /// Pushes a new event to the log.
    pub fn push(&mut self, event: LogEvent) {
        self.logs.push(event.to_string())
    }

    /// Returns an iterator over all logs.
    pub fn logs(&self) -> impl Iterator<Item = &str> {
        self.logs.iter().map(|s| s.as_ref())
    }

    /// Reads out any new logs that have been added since the last call to [`Self::read_out`].
    pub fn read_out(&mut self) -> impl Iterator<Item = &str> {
        let i = mem::replace(&mut self.last_read, self.logs.len());
        self.logs[i..].iter().map(|s| s.as_ref())
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}
