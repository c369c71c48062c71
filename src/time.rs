//! A module for working with edge timestamps.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A normalized point in time.
///
/// Raw ticks are stored as-is, calendar instants as whole seconds since the Unix epoch. Once a
/// graph is built every edge carries a `Time` of the same origin, so they can be compared
/// directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Time(pub i64);

impl Time {
    /// Returns the raw value.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronos_graph::time::Time;
    ///
    /// assert_eq!(Time(3).value(), 3);
    /// ```
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Time {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// An edge timestamp as handed in by the caller, before normalization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeTime {
    /// A raw numeric tick (round number, sequence number, ...).
    Tick(i64),
    /// An absolute calendar timestamp.
    Instant(DateTime<Utc>),
}

impl EdgeTime {
    /// Returns the representation of this timestamp, used to reject graphs mixing both kinds.
    pub fn kind(&self) -> TimeKind {
        match self {
            EdgeTime::Tick(_) => TimeKind::Tick,
            EdgeTime::Instant(_) => TimeKind::Instant,
        }
    }

    /// Normalizes the timestamp to a comparable [`Time`].
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use chronos_graph::time::{EdgeTime, Time};
    ///
    /// assert_eq!(EdgeTime::Tick(7).normalize(), Time(7));
    ///
    /// let instant = Utc.with_ymd_and_hms(1970, 1, 1, 0, 1, 0).unwrap();
    /// assert_eq!(EdgeTime::Instant(instant).normalize(), Time(60));
    /// ```
    pub fn normalize(&self) -> Time {
        match self {
            EdgeTime::Tick(tick) => Time(*tick),
            // Sub-second precision is dropped.
            EdgeTime::Instant(instant) => Time(instant.timestamp()),
        }
    }
}

impl From<i64> for EdgeTime {
    fn from(tick: i64) -> Self {
        EdgeTime::Tick(tick)
    }
}

impl From<i32> for EdgeTime {
    fn from(tick: i32) -> Self {
        EdgeTime::Tick(i64::from(tick))
    }
}

impl From<u32> for EdgeTime {
    fn from(tick: u32) -> Self {
        EdgeTime::Tick(i64::from(tick))
    }
}

impl From<DateTime<Utc>> for EdgeTime {
    fn from(instant: DateTime<Utc>) -> Self {
        EdgeTime::Instant(instant)
    }
}

/// The representation of an [`EdgeTime`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeKind {
    Tick,
    Instant,
}

impl fmt::Display for TimeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeKind::Tick => write!(f, "tick"),
            TimeKind::Instant => write!(f, "instant"),
        }
    }
}

/// An inclusive time interval, either bound may be open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: Option<Time>,
    pub end: Option<Time>,
}

impl TimeWindow {
    /// Creates a window covering `[start, end]`.
    pub fn new(start: Time, end: Time) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Creates a window covering everything from `start` onwards.
    pub fn since(start: Time) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// Creates a window covering everything up to and including `end`.
    pub fn until(end: Time) -> Self {
        Self {
            start: None,
            end: Some(end),
        }
    }

    /// Returns whether the window contains the given time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronos_graph::time::{Time, TimeWindow};
    ///
    /// let window = TimeWindow::new(Time(2), Time(4));
    ///
    /// assert!(window.contains(Time(2)));
    /// assert!(window.contains(Time(4)));
    /// assert!(!window.contains(Time(5)));
    /// ```
    pub fn contains(&self, time: Time) -> bool {
        self.start.map_or(true, |start| time >= start) && self.end.map_or(true, |end| time <= end)
    }
}

/// The earliest moment a node becomes reachable from a source.
///
/// Variants are ordered: the origin comes before any real arrival, which in turn comes before
/// [`Arrival::Unreachable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Arrival {
    /// The source of the search itself.
    Origin,
    /// Reached by an edge at the given time.
    At(Time),
    /// No time-respecting walk reaches the node.
    Unreachable,
}

impl Arrival {
    /// Returns the arrival time, if the node was reached by an edge.
    pub fn time(&self) -> Option<Time> {
        match self {
            Arrival::At(time) => Some(*time),
            _ => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        !matches!(self, Arrival::Unreachable)
    }
}
