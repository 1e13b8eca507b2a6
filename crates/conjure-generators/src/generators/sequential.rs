//! Deterministic cyclic sequences.

use crate::generators::constant::{constant, Constant};
use crate::generators::timestamp::TickUnit;
use chrono::{DateTime, TimeDelta, Utc};
use conjure_core::{Generator, Numeric, Source};
use tracing::debug;

/// Mutable position of a cyclic sequence.
///
/// Owned by exactly one [`Sequential`]; only its `generate_one` moves it.
#[derive(Debug, Clone)]
pub struct Cursor<T> {
    from: T,
    to: T,
    step: T,
    current: T,
}

impl<T: Numeric> Cursor<T> {
    /// The value the next call will return.
    pub fn current(&self) -> T {
        self.current
    }

    fn advance(&mut self) -> T {
        let current = self.current;
        self.current = T::cycle(current, self.step, self.from, self.to);
        current
    }
}

/// Walks from `from` towards `to` by `step`, wrapping around at the end.
///
/// When a step would overshoot `to`, the cursor re-enters the range at
/// `from` carrying the overshoot, so `1..=10` by 3 yields
/// `1, 4, 7, 10, 3, 6, 9, 2, ...`.
///
/// Stateful: calls on the same instance must not race.
#[derive(Debug, Clone)]
pub enum Sequential<T> {
    /// The step was zero or pointed away from `to`.
    Constant(Constant<T>),
    /// A live cursor.
    Cycle(Cursor<T>),
}

impl<T> Sequential<T> {
    /// The only value, if construction degraded to a constant.
    pub fn as_constant(&self) -> Option<&T> {
        match self {
            Sequential::Constant(only) => Some(only.value()),
            Sequential::Cycle(_) => None,
        }
    }
}

impl<T: Numeric> Generator for Sequential<T> {
    type Output = T;

    fn generate_one(&mut self, src: &mut Source) -> T {
        match self {
            Sequential::Constant(only) => only.generate_one(src),
            Sequential::Cycle(cursor) => cursor.advance(),
        }
    }
}

/// Cyclic generator over `[from, to]` (or `[to, from]` when descending).
///
/// Degrades to `constant(from)` when `step` is zero, when `from == to`, or
/// when `step` points away from `to`.
pub fn sequential<T: Numeric>(from: T, to: T, step: T) -> Sequential<T> {
    let ascending = from < to && step > T::ZERO;
    let descending = from > to && step < T::ZERO;

    if ascending || descending {
        Sequential::Cycle(Cursor {
            from,
            to,
            step,
            current: from,
        })
    } else {
        debug!(from = ?from, to = ?to, step = ?step, "sequential degraded to constant");
        Sequential::Constant(constant(from))
    }
}

/// Mutable position of a cyclic timestamp sequence, counted in ticks from
/// `from`. Descending sequences count negative ticks.
#[derive(Debug, Clone)]
pub struct TimeCursor {
    from: DateTime<Utc>,
    unit: TickUnit,
    span: i64,
    step: i64,
    current: i64,
}

impl TimeCursor {
    /// The timestamp the next call will return.
    pub fn current(&self) -> DateTime<Utc> {
        self.from + self.unit.delta(self.current)
    }

    /// Time is continuous, so a step past `to` re-enters at `from` plus the
    /// full overshoot, with no one-tick correction. Overshoots longer than
    /// the range are folded into `(from, to]`.
    fn advance(&mut self) -> DateTime<Utc> {
        let value = self.current();
        let next = i128::from(self.current) + i128::from(self.step);
        let span = i128::from(self.span);
        let overshoot = if self.step > 0 { next - span } else { span - next };

        self.current = if overshoot > 0 {
            let folded = (overshoot - 1).rem_euclid(span.abs()) + 1;
            (folded * i128::from(self.step.signum())) as i64
        } else {
            next as i64
        };
        value
    }
}

/// Cyclic timestamp sequence; see [`time_sequential`].
#[derive(Debug, Clone)]
pub enum TimeSequential {
    /// The step was zero or pointed away from `to`.
    Constant(Constant<DateTime<Utc>>),
    /// A live cursor.
    Cycle(TimeCursor),
}

impl TimeSequential {
    /// The only value, if construction degraded to a constant.
    pub fn as_constant(&self) -> Option<&DateTime<Utc>> {
        match self {
            TimeSequential::Constant(only) => Some(only.value()),
            TimeSequential::Cycle(_) => None,
        }
    }
}

impl Generator for TimeSequential {
    type Output = DateTime<Utc>;

    fn generate_one(&mut self, src: &mut Source) -> DateTime<Utc> {
        match self {
            TimeSequential::Constant(only) => only.generate_one(src),
            TimeSequential::Cycle(cursor) => cursor.advance(),
        }
    }
}

/// Cyclic timestamp generator stepping from `from` towards `to`.
///
/// A step that would pass `to` wraps to `from` plus the overshoot, so
/// 09:00..=10:00 by 30 minutes yields `09:00, 09:30, 10:00, 09:30, ...`.
/// Degrades to `constant(from)` under the same rules as [`sequential`].
///
/// Offsets are counted in nanoseconds, or in milliseconds when the range or
/// the step is too long for `i64` nanoseconds. In millisecond mode a
/// non-zero step shorter than a millisecond is rounded up to one
/// millisecond rather than collapsing to a constant.
pub fn time_sequential(from: DateTime<Utc>, to: DateTime<Utc>, step: TimeDelta) -> TimeSequential {
    let zero = TimeDelta::zero();
    let cycles = (from < to && step > zero) || (from > to && step < zero);
    if !cycles {
        debug!(from = %from, to = %to, step = %step, "time_sequential degraded to constant");
        return TimeSequential::Constant(constant(from));
    }

    let span = to.signed_duration_since(from);
    let unit = TickUnit::covering(&[span, step]);
    let mut step_ticks = unit.ticks(step);
    if step_ticks == 0 {
        debug!(step = %step, "time_sequential step rounded up to one tick");
        step_ticks = if step > zero { 1 } else { -1 };
    }

    TimeSequential::Cycle(TimeCursor {
        from,
        unit,
        span: unit.ticks(span),
        step: step_ticks,
        current: 0,
    })
}
