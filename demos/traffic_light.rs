//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Simple state enumeration
//! - Registered rules as the only permitted moves
//!
//! Run with: cargo run --example traffic_light

use serde::{Deserialize, Serialize};
use switchyard::{Fsm, FsmError, Metadata};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
enum TrafficLight {
    Red,
    Yellow,
    Green,
}

fn main() -> Result<(), FsmError<TrafficLight>> {
    println!("=== Traffic Light State Machine ===\n");

    let mut fsm: Fsm<TrafficLight> = Fsm::new();

    fsm.register_state(TrafficLight::Red);
    fsm.register_state(TrafficLight::Yellow);
    fsm.register_state(TrafficLight::Green);

    // Cyclic rule set: Red -> Green -> Yellow -> Red -> ...
    fsm.register_transition(TrafficLight::Red, TrafficLight::Green);
    fsm.register_transition(TrafficLight::Green, TrafficLight::Yellow);
    fsm.register_transition(TrafficLight::Yellow, TrafficLight::Red);

    fsm.initialize(TrafficLight::Red)?;
    println!("Initial state: {:?}\n", fsm.current().unwrap());

    let metadata = Metadata::new();
    for _ in 0..6 {
        let next = match fsm.current().unwrap() {
            TrafficLight::Red => TrafficLight::Green,
            TrafficLight::Green => TrafficLight::Yellow,
            TrafficLight::Yellow => TrafficLight::Red,
        };
        fsm.transition(next, &metadata)?;
        println!("  -> {:?}", fsm.current().unwrap());
    }

    // Jumping Red -> Yellow is not a registered rule.
    let err = fsm
        .transition(TrafficLight::Yellow, &metadata)
        .expect_err("no Red -> Yellow rule");
    println!("\nRejected move: {err}");

    println!("\nAudit log recorded {} transitions", fsm.log().len());
    println!("\n=== Example Complete ===");
    Ok(())
}
