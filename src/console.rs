//! Terminal visualization of blink state.
//!
//! Lets the controller be watched without hardware: [`ConsoleLed`] is a
//! [`LedPin`] that renders every state change as a timestamped, ANSI-colored
//! line. Formatting is split out as plain functions so it can be asserted on
//! in tests without any console I/O, and output goes into fixed-capacity
//! [`heapless`] strings so the module stays usable in no_std builds.
//!
//! [`StdClock`] (behind the `std` feature) supplies real wall-clock
//! timestamps for desktop demos.

use core::fmt::Write as _;

use heapless::String;

use crate::controller::LedPin;
use crate::time::MillisClock;

/// Capacity of a formatted output line.
pub const OUTPUT_CAPACITY: usize = 64;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Formats a blink state line with timestamp and ANSI colors.
///
/// Produces `[<timestamp>ms] LED: ` followed by a green `███ ON ███` or a
/// red `▓▓▓ OFF ▓▓▓` block.
pub fn format_output(timestamp_ms: u32, on: bool) -> String<OUTPUT_CAPACITY> {
    let mut out = String::new();

    // Cannot overflow: OUTPUT_CAPACITY covers the widest possible line
    // (10-digit timestamp, OFF marker, both escape codes).
    let _ = if on {
        write!(out, "[{}ms] LED: {}███ ON ███{}", timestamp_ms, GREEN, RESET)
    } else {
        write!(out, "[{}ms] LED: {}▓▓▓ OFF ▓▓▓{}", timestamp_ms, RED, RESET)
    };

    out
}

/// Removes ANSI escape sequences, leaving only the visible text.
///
/// Characters past `OUTPUT_CAPACITY` are dropped; stripping never grows the
/// input, so output produced by [`format_output`] always fits.
pub fn strip_ansi(input: &str) -> String<OUTPUT_CAPACITY> {
    let mut out = String::new();
    let mut in_escape = false;

    for c in input.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            let _ = out.push(c);
        }
    }

    out
}

/// An LED that prints to a terminal instead of driving hardware.
///
/// Each [`set`](LedPin::set) records the new state and renders an output line
/// timestamped from the borrowed clock. The line is retained rather than
/// printed, so the caller decides where it goes and tests can assert on it
/// directly.
///
/// # Type Parameters
/// * `'c` - Lifetime of the clock reference
/// * `C` - Clock implementation type
pub struct ConsoleLed<'c, C: MillisClock> {
    clock: &'c C,
    on: bool,
    last_output: String<OUTPUT_CAPACITY>,
}

impl<'c, C: MillisClock> ConsoleLed<'c, C> {
    /// Creates a new visualizer in the off state with no output yet.
    pub fn new(clock: &'c C) -> Self {
        Self {
            clock,
            on: false,
            last_output: String::new(),
        }
    }

    /// Returns the current LED state.
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Returns the most recently rendered output line.
    ///
    /// Empty until the first [`set`](LedPin::set).
    pub fn last_output(&self) -> &str {
        &self.last_output
    }
}

impl<C: MillisClock> LedPin for ConsoleLed<'_, C> {
    fn set(&mut self, on: bool) {
        self.on = on;
        self.last_output = format_output(self.clock.now_ms(), on);
    }
}

/// Wall-clock millisecond counter for desktop targets.
///
/// Reports milliseconds since construction (or the last [`reset`]), truncated
/// to `u32` - so like a hardware counter it wraps after ~49.7 days, which the
/// controller's elapsed arithmetic already handles.
///
/// [`reset`]: StdClock::reset
#[cfg(feature = "std")]
pub struct StdClock {
    start: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    /// Creates a clock with its epoch at the current instant.
    pub fn new() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }

    /// Restarts the epoch, so subsequent readings count from zero again.
    pub fn reset(&mut self) {
        self.start = std::time::Instant::now();
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl MillisClock for StdClock {
    fn now_ms(&self) -> u32 {
        self.start.elapsed().as_millis() as u32
    }
}
