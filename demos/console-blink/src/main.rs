//! Terminal demo: a BlinkController driving a ConsoleLed for ten seconds.
//!
//! The same controller logic that runs on hardware pins runs here against a
//! terminal visualizer, timestamped by the wall clock.

use std::thread;
use std::time::Duration;

use blink_controller::{BlinkController, ConsoleLed, MillisClock, StdClock};

const ON_DURATION_MS: u32 = 1000;
const OFF_DURATION_MS: u32 = 500;
const DEMO_DURATION_MS: u32 = 10_000;
const UPDATE_INTERVAL_MS: u64 = 50;

fn main() {
    println!("\n=== blink-controller demo ===");
    println!("Configuration:");
    println!("  ON duration:  {ON_DURATION_MS}ms");
    println!("  OFF duration: {OFF_DURATION_MS}ms");
    println!("  Total cycle:  {}ms", ON_DURATION_MS + OFF_DURATION_MS);
    println!("\nRunning for {} seconds...\n", DEMO_DURATION_MS / 1000);

    let clock = StdClock::new();
    let led = ConsoleLed::new(&clock);
    let mut controller = BlinkController::new(led, ON_DURATION_MS, OFF_DURATION_MS);

    while clock.now_ms() < DEMO_DURATION_MS {
        controller.update(clock.now_ms());
        println!("{}", controller.pin().last_output());
        thread::sleep(Duration::from_millis(UPDATE_INTERVAL_MS));
    }

    println!("\n=== demo complete ===");
}
