//! LED blink timing controller with state management.
//!
//! Provides [`BlinkController`] which drives a single LED through a free-running
//! on/off cycle, handling toggle timing and pin updates. Also defines the
//! [`LedPin`] trait for hardware abstraction.

use crate::time::elapsed_ms;

/// Trait for abstracting a single LED output.
///
/// Implement this for your LED hardware (GPIO, open-drain driver, relay, a
/// terminal visualizer, a test double) to allow the controller to drive it.
pub trait LedPin {
    /// Drives the LED to the given state, `true` meaning lit.
    ///
    /// Handle any hardware errors internally - this method cannot fail as far
    /// as the controller is concerned.
    fn set(&mut self, on: bool);
}

/// Allows lending a pin to a controller instead of moving it in.
impl<P: LedPin + ?Sized> LedPin for &mut P {
    fn set(&mut self, on: bool) {
        (**self).set(on);
    }
}

/// The logical state of a blink controller.
///
/// The machine free-runs between the two states indefinitely; `Off` is the
/// initial state after construction and after [`BlinkController::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkState {
    /// LED is dark. Leaves after `off_duration_ms` of elapsed time.
    Off,
    /// LED is lit. Leaves after `on_duration_ms` of elapsed time.
    On,
}

impl BlinkState {
    /// Returns true if this is the lit state.
    #[inline]
    pub fn is_on(self) -> bool {
        matches!(self, BlinkState::On)
    }

    fn toggled(self) -> Self {
        match self {
            BlinkState::Off => BlinkState::On,
            BlinkState::On => BlinkState::Off,
        }
    }
}

/// Controls a single LED through a timed on/off blink cycle.
///
/// The controller owns the injected pin and decides, on each [`update`] call,
/// whether the output should be on or off for the timestamp the caller
/// supplies. It holds no clock of its own, which keeps the logic fully
/// deterministic under test: feed it timestamps, observe the pin.
///
/// Timestamps are `u32` milliseconds from a free-running counter that is
/// expected to overflow and wrap to zero (after ~49.7 days); elapsed time is
/// computed wraparound-safe across that boundary.
///
/// Pin substitution is compile-time (generic over [`LedPin`]) rather than
/// through a trait object, so driving the pin costs no dynamic dispatch. Use
/// `BlinkController<&mut P>` or a `dyn LedPin` reference if a single
/// controller type across pin implementations matters more than that.
///
/// [`update`]: BlinkController::update
///
/// # Type Parameters
/// * `P` - LED pin implementation type
pub struct BlinkController<P: LedPin> {
    pin: P,
    on_duration_ms: u32,
    off_duration_ms: u32,
    last_toggle_ms: u32,
    state: BlinkState,
}

impl<P: LedPin> BlinkController<P> {
    /// Creates a new controller in the `Off` state with the pin driven low.
    ///
    /// `on_duration_ms` and `off_duration_ms` set how long the LED holds each
    /// state. A zero duration is accepted and makes the controller leave that
    /// state on the very next [`update`](Self::update) call, whatever the
    /// timestamp - a deliberate once-per-call oscillation, not an error.
    pub fn new(mut pin: P, on_duration_ms: u32, off_duration_ms: u32) -> Self {
        pin.set(false);

        Self {
            pin,
            on_duration_ms,
            off_duration_ms,
            last_toggle_ms: 0,
            state: BlinkState::Off,
        }
    }

    /// Advances the blink cycle to the given timestamp and drives the pin.
    ///
    /// Call this from your main loop with the current counter value. The
    /// state toggles at most once per call, when the time elapsed since the
    /// last toggle reaches the current state's duration. The pin is then
    /// re-applied unconditionally - exactly one write per call - so the pin
    /// can never drift from the controller's state, and repeated calls with
    /// the same timestamp are idempotent.
    ///
    /// Cannot fail: every `u32` timestamp produces a defined next state and a
    /// pin write, including readings taken after the counter has wrapped.
    pub fn update(&mut self, now_ms: u32) {
        let elapsed = elapsed_ms(now_ms, self.last_toggle_ms);

        let target_ms = match self.state {
            BlinkState::On => self.on_duration_ms,
            BlinkState::Off => self.off_duration_ms,
        };

        if elapsed >= target_ms {
            self.state = self.state.toggled();
            self.last_toggle_ms = now_ms;
        }

        self.pin.set(self.state.is_on());
    }

    /// Returns the controller to its initial state and drives the pin low.
    ///
    /// The pin write happens synchronously, not deferred to the next
    /// [`update`](Self::update). Afterwards the controller is observationally
    /// identical to a freshly constructed one with the same durations.
    pub fn reset(&mut self) {
        self.state = BlinkState::Off;
        self.last_toggle_ms = 0;

        self.pin.set(false);
    }

    /// Returns the current state of the controller.
    pub fn state(&self) -> BlinkState {
        self.state
    }

    /// Returns true if the LED is currently in the lit state.
    pub fn is_on(&self) -> bool {
        self.state.is_on()
    }

    /// Returns how long the LED holds the lit state, in milliseconds.
    pub fn on_duration_ms(&self) -> u32 {
        self.on_duration_ms
    }

    /// Returns how long the LED holds the dark state, in milliseconds.
    pub fn off_duration_ms(&self) -> u32 {
        self.off_duration_ms
    }

    /// Returns the timestamp at which the state last changed.
    ///
    /// This is always a value previously passed to [`update`](Self::update),
    /// or 0 after construction or [`reset`](Self::reset).
    pub fn last_toggle_ms(&self) -> u32 {
        self.last_toggle_ms
    }

    /// Returns a reference to the owned pin, e.g. for inspecting a test
    /// double or reading back a visualizer's output.
    pub fn pin(&self) -> &P {
        &self.pin
    }
}
