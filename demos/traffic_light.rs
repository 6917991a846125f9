//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic machine with one guarded edge.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Default origin guards from `RuleSetBuilder::transition`
//! - An extra guard reading an external sensor
//! - Denied transitions leave the light untouched
//!
//! Run with: RUST_LOG=debug cargo run --example traffic_light

use fsm_rules::builder::{MachineBuilder, RuleSetBuilder};
use fsm_rules::core::{StateCell, Subject};
use fsm_rules::state_enum;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

state_enum! {
    enum TrafficLight {
        Red,
        Yellow,
        Green,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Traffic Light State Machine ===\n");

    // Pedestrians on the crossing keep the light from turning green.
    let crossing_occupied = Arc::new(AtomicBool::new(true));
    let sensor = Arc::clone(&crossing_occupied);

    let light = Arc::new(StateCell::new(TrafficLight::Red));
    let machine = MachineBuilder::new()
        .rules(
            RuleSetBuilder::new()
                .when(
                    TrafficLight::Red,
                    TrafficLight::Green,
                    move |_: &dyn Subject<TrafficLight>, _: &TrafficLight| {
                        !sensor.load(Ordering::SeqCst)
                    },
                )
                .transition(TrafficLight::Green, TrafficLight::Yellow)
                .transition(TrafficLight::Yellow, TrafficLight::Red)
                .build(),
        )
        .subject(light.clone())
        .build()
        .expect("rules and subject are both set");

    println!("Initial state: {}", light.current_state());

    match machine.transition(TrafficLight::Green) {
        Ok(()) => println!("Red -> Green"),
        Err(err) => println!("Blocked: {err} (crossing occupied)"),
    }

    crossing_occupied.store(false, Ordering::SeqCst);

    for goal in [
        TrafficLight::Green,
        TrafficLight::Yellow,
        TrafficLight::Red,
        TrafficLight::Yellow,
    ] {
        let from = light.current_state();
        match machine.transition(goal) {
            Ok(()) => println!("{from} -> {goal}"),
            Err(err) => println!("Rejected: {err}"),
        }
    }

    println!("\nFinal state: {}", light.current_state());
    println!("\n=== Example Complete ===");
}
