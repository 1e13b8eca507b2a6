//! Timestamp generators.

use crate::generators::numeric::between;
use chrono::{DateTime, TimeDelta, Utc};
use conjure_core::numeric::ordered;
use conjure_core::Generator;

/// Resolution used to count a time span as an `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickUnit {
    Nanos,
    Millis,
}

impl TickUnit {
    /// The finest unit in which every delta fits an `i64`.
    pub(crate) fn covering(deltas: &[TimeDelta]) -> Self {
        if deltas.iter().all(|delta| delta.num_nanoseconds().is_some()) {
            TickUnit::Nanos
        } else {
            TickUnit::Millis
        }
    }

    pub(crate) fn ticks(self, delta: TimeDelta) -> i64 {
        match self {
            TickUnit::Nanos => match delta.num_nanoseconds() {
                Some(nanos) => nanos,
                None => delta.num_milliseconds().saturating_mul(1_000_000),
            },
            TickUnit::Millis => delta.num_milliseconds(),
        }
    }

    pub(crate) fn delta(self, ticks: i64) -> TimeDelta {
        match self {
            TickUnit::Nanos => TimeDelta::nanoseconds(ticks),
            TickUnit::Millis => TimeDelta::milliseconds(ticks),
        }
    }
}

/// Uniform timestamp between `start` and `end` (inclusive, either order).
///
/// A derived generator: a numeric range over the tick offset
/// `[0, end - start]`, added to the earlier bound at generation time. Equal
/// bounds make the offset range a constant zero, so every call returns
/// `start` without drawing.
pub fn time_between(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> impl Generator<Output = DateTime<Utc>> + Clone {
    let (start, end) = ordered(start, end);
    let span = end.signed_duration_since(start);
    let unit = TickUnit::covering(&[span]);

    between(0i64, unit.ticks(span)).map(move |ticks| start + unit.delta(ticks))
}
