//! Moore-Style Traffic Light
//!
//! This example places all behavior in enter/exit hooks; the action is a
//! no-op. Transitions without an action skip the handler entirely.
//!
//! Key concepts:
//! - Moore-style processors (output depends on the state only)
//! - Cyclic transitions shared by many lights
//! - Pure relabeling rules with an empty action
//!
//! Run with: cargo run --example moore_light

use stateless_fsm::builder::StateMachineBuilder;
use stateless_fsm::engine::{EventProcessor, PhasedHandler};
use stateless_fsm::label_enum;
use std::convert::Infallible;

label_enum! {
    enum Light {
        Red,
        Green,
        Yellow,
        Off,
    }
}

label_enum! {
    enum Signal {
        Tick,
        PowerCut,
    }
}

struct Lamp {
    light: Light,
    lit: Vec<Light>,
}

struct MooreProcessor;

impl EventProcessor<Light, &'static str, Lamp> for MooreProcessor {
    type Error = Infallible;

    fn action(
        &self,
        _action: &&'static str,
        _from: &Light,
        _to: &Light,
        _lamp: &mut Lamp,
    ) -> Result<(), Infallible> {
        Ok(())
    }

    fn on_exit(&self, from: &Light, _lamp: &mut Lamp) {
        println!("  {} off", from);
    }

    fn on_enter(&self, to: &Light, lamp: &mut Lamp) {
        println!("  {} on", to);
        lamp.light = *to;
        lamp.lit.push(*to);
    }
}

fn main() {
    println!("=== Moore-Style Traffic Light ===\n");

    let machine = StateMachineBuilder::new()
        .handler(PhasedHandler::new(MooreProcessor))
        .rule(Light::Red, Signal::Tick, Light::Green, "cycle")
        .rule(Light::Green, Signal::Tick, Light::Yellow, "cycle")
        .rule(Light::Yellow, Signal::Tick, Light::Red, "cycle")
        .rule(Light::Red, Signal::PowerCut, Light::Off, "")
        .build()
        .unwrap();

    let mut lamp = Lamp {
        light: Light::Red,
        lit: vec![Light::Red],
    };

    for _ in 0..3 {
        let current = lamp.light;
        machine.trigger(&current, &Signal::Tick, &mut lamp).unwrap();
    }

    // Relabeling rule: succeeds without touching the lamp.
    let current = lamp.light;
    machine
        .trigger(&current, &Signal::PowerCut, &mut lamp)
        .unwrap();

    println!("\nLights shown: {:?}", lamp.lit);
    println!("Lamp still records: {}", lamp.light);

    println!("\n=== Example Complete ===");
}
