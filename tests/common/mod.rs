//! Shared test infrastructure for blink-controller integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;

use blink_controller::{LedPin, MillisClock};

// ============================================================================
// Mock Pin
// ============================================================================

/// Mock LED pin that records every write for testing
pub struct MockPin {
    on: bool,
    writes: usize,
    history: heapless::Vec<bool, 32>,
}

impl MockPin {
    pub fn new() -> Self {
        Self {
            on: false,
            writes: 0,
            history: heapless::Vec::new(),
        }
    }

    /// State from the most recent write (false before any write)
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Total number of writes, including ones past the history capacity
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// The first 32 written states, in order
    pub fn history(&self) -> &[bool] {
        &self.history
    }
}

impl LedPin for MockPin {
    fn set(&mut self, on: bool) {
        self.on = on;
        self.writes += 1;
        let _ = self.history.push(on);
    }
}

// ============================================================================
// Mock Clock
// ============================================================================

/// Mock millisecond counter with controllable advancement
pub struct MockClock {
    now_ms: Cell<u32>,
}

impl MockClock {
    pub fn new() -> Self {
        Self {
            now_ms: Cell::new(0),
        }
    }

    /// Advance the counter, wrapping past `u32::MAX` like real hardware
    pub fn advance(&self, ms: u32) {
        self.now_ms.set(self.now_ms.get().wrapping_add(ms));
    }

    /// Jump the counter to an absolute value (useful near the wrap boundary)
    pub fn set_time(&self, ms: u32) {
        self.now_ms.set(ms);
    }
}

impl MillisClock for MockClock {
    fn now_ms(&self) -> u32 {
        self.now_ms.get()
    }
}
