//! Turnstile State Machine
//!
//! This example drives several turnstiles with one shared machine.
//!
//! Key concepts:
//! - The machine stores no entity state; each turnstile records its own
//! - Mealy-style actions with enter/exit bookkeeping
//! - A failing action leaves the entity in its previous state
//! - Exporting the rule set as a Graphviz diagram
//!
//! Run with: cargo run --example turnstile

use stateless_fsm::builder::StateMachineBuilder;
use stateless_fsm::engine::{EventProcessor, PhasedHandler};
use stateless_fsm::export::to_dot;
use stateless_fsm::label_enum;

label_enum! {
    enum State {
        Locked,
        Unlocked,
    }
}

label_enum! {
    enum Event {
        Coin,
        Push,
    }
}

#[derive(Debug, thiserror::Error)]
#[error("coin rejected: turnstile already paid")]
struct CoinRejected;

#[derive(Debug)]
struct Turnstile {
    id: u32,
    state: State,
    coins: u32,
    passes: u32,
}

struct TurnstileProcessor;

impl EventProcessor<State, String, Turnstile> for TurnstileProcessor {
    type Error = CoinRejected;

    fn on_exit(&self, from: &State, turnstile: &mut Turnstile) {
        println!("  turnstile {} leaves {}", turnstile.id, from);
    }

    fn action(
        &self,
        action: &String,
        _from: &State,
        _to: &State,
        turnstile: &mut Turnstile,
    ) -> Result<(), CoinRejected> {
        match action.as_str() {
            "pass" => turnstile.passes += 1,
            "check" | "repeat-check" => {
                if turnstile.coins > 0 {
                    return Err(CoinRejected);
                }
                turnstile.coins += 1;
            }
            _ => println!("  turnstile {} ignores {}", turnstile.id, action),
        }
        Ok(())
    }

    fn on_action_failure(
        &self,
        action: &String,
        from: &State,
        to: &State,
        turnstile: &mut Turnstile,
        error: &CoinRejected,
    ) {
        println!(
            "  turnstile {} failed {} ({} -> {}): {}",
            turnstile.id, action, from, to, error
        );
    }

    fn on_enter(&self, to: &State, turnstile: &mut Turnstile) {
        turnstile.state = *to;
        println!("  turnstile {} enters {}", turnstile.id, to);
    }
}

fn main() {
    println!("=== Turnstile State Machine ===\n");

    let machine = StateMachineBuilder::new()
        .handler(PhasedHandler::new(TurnstileProcessor))
        .rule(State::Locked, Event::Coin, State::Unlocked, "check".to_string())
        .rule(State::Locked, Event::Push, State::Locked, "invalid-push".to_string())
        .rule(State::Unlocked, Event::Push, State::Locked, "pass".to_string())
        .rule(State::Unlocked, Event::Coin, State::Unlocked, "repeat-check".to_string())
        .build()
        .unwrap();

    let mut turnstiles: Vec<Turnstile> = (1..=2)
        .map(|id| Turnstile {
            id,
            state: State::Locked,
            coins: 0,
            passes: 0,
        })
        .collect();

    let script = [Event::Push, Event::Coin, Event::Coin, Event::Push];

    for turnstile in &mut turnstiles {
        println!("Turnstile {}:", turnstile.id);
        for event in script {
            let current = turnstile.state;
            if let Err(err) = machine.trigger(&current, &event, turnstile) {
                println!("  {} rejected: {}", event, err);
            }
        }
        println!("  final: {:?}\n", turnstile);
    }

    println!("State diagram (pipe into `dot -Tpng`):\n");
    println!("{}", to_dot(machine.table()));

    println!("=== Example Complete ===");
}
