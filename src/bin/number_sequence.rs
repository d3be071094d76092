// Two workers print 1..=limit in strict order: one thread owns the odd
// values, the other the even values. A shared gate (mutex + condvar) decides
// whose turn it is.
//
// Run with: cargo run --bin number_sequence -- [limit]

use std::env;
use std::process;
use std::sync::{Condvar, Mutex};
use std::thread;

const DEFAULT_LIMIT: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Odd,
    Even,
}

impl Parity {
    fn first(self) -> u32 {
        match self {
            Parity::Odd => 1,
            Parity::Even => 2,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Parity::Odd => "odd  worker",
            Parity::Even => "even worker",
        }
    }
}

// ============================================================================
// The gate
// ============================================================================

struct GateState {
    next: u32,
    emitted: Vec<(Parity, u32)>,
}

/// Hands out turns in counter order. Both workers borrow the same gate;
/// no statics, no Arc.
pub struct SequenceGate {
    state: Mutex<GateState>,
    advanced: Condvar,
}

impl SequenceGate {
    pub fn new() -> Self {
        SequenceGate {
            state: Mutex::new(GateState {
                next: 1,
                emitted: Vec::new(),
            }),
            advanced: Condvar::new(),
        }
    }

    /// Blocks until the shared counter reaches `value`, prints it, then
    /// advances the counter and wakes the other worker. The print happens
    /// under the lock, so wall-clock output order equals counter order.
    pub fn emit(&self, parity: Parity, value: u32) {
        let mut state = self.state.lock().unwrap();
        while state.next != value {
            state = self.advanced.wait(state).unwrap();
        }

        println!("{}: {}", parity.label(), value);
        state.emitted.push((parity, value));
        state.next += 1;

        // The other worker may already be done; a dropped wakeup is fine.
        self.advanced.notify_one();
    }

    pub fn into_emitted(self) -> Vec<(Parity, u32)> {
        self.state.into_inner().unwrap().emitted
    }
}

// ============================================================================
// Workers
// ============================================================================

fn run_worker(gate: &SequenceGate, parity: Parity, limit: u32) {
    let mut value = parity.first();
    while value <= limit {
        gate.emit(parity, value);
        value += 2;
    }
}

/// Runs both workers to completion and returns the emission log in print
/// order. Both workers must agree on `limit`; with an odd limit the odd
/// worker simply takes one more turn and the final wakeup goes unheard.
pub fn print_alternating(limit: u32) -> Vec<(Parity, u32)> {
    let gate = SequenceGate::new();

    thread::scope(|s| {
        s.spawn(|| run_worker(&gate, Parity::Odd, limit));
        s.spawn(|| run_worker(&gate, Parity::Even, limit));
    });

    gate.into_emitted()
}

fn main() {
    let limit = match env::args().nth(1) {
        None => DEFAULT_LIMIT,
        Some(raw) => match raw.parse() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("Usage: number_sequence [limit]");
                process::exit(2);
            }
        },
    };

    println!("=== Alternating sequence up to {} ===\n", limit);
    let emitted = print_alternating(limit);
    println!("\n{} values printed, in order.", emitted.len());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_limit_interleaves_in_order() {
        let emitted = print_alternating(20);

        let values: Vec<u32> = emitted.iter().map(|&(_, v)| v).collect();
        assert_eq!(values, (1..=20).collect::<Vec<_>>());

        for &(parity, value) in &emitted {
            let expected = if value % 2 == 1 {
                Parity::Odd
            } else {
                Parity::Even
            };
            assert_eq!(parity, expected, "value {} came from the wrong worker", value);
        }
    }

    #[test]
    fn odd_limit_terminates_without_deadlock() {
        let values: Vec<u32> = print_alternating(7).into_iter().map(|(_, v)| v).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn zero_limit_emits_nothing() {
        assert!(print_alternating(0).is_empty());
    }
}
