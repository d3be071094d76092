// Callables as values: closures, fn pointers, boxed callables, and a
// transform pipeline that accepts any of them.
//
// Run with: cargo run --bin closures

use std::collections::BTreeMap;

use rayon::prelude::*;

// ============================================================================
// Transforms
// ============================================================================

pub fn double(x: i32) -> i32 {
    x * 2
}

/// Applies `op` to every element, leaving the input alone.
pub fn transform<F>(values: &[i32], op: F) -> Vec<i32>
where
    F: Fn(i32) -> i32,
{
    values.iter().copied().map(op).collect()
}

/// Same pipeline, split across the rayon thread pool.
pub fn transform_parallel<F>(values: &[i32], op: F) -> Vec<i32>
where
    F: Fn(i32) -> i32 + Send + Sync,
{
    values.par_iter().copied().map(op).collect()
}

/// Rewrites every value of the map in place.
pub fn update_values<F>(map: &mut BTreeMap<i32, i32>, op: F)
where
    F: Fn(i32) -> i32,
{
    for value in map.values_mut() {
        *value = op(*value);
    }
}

// ============================================================================
// Demo driver
// ============================================================================

fn main() {
    // A closure, used directly.
    let add = |a: i32, b: i32| a + b;
    println!("sum: {}", add(5, 6));

    // The same callable held as a plain function value.
    let add_fn: fn(i32, i32) -> i32 = add;
    println!("sum (through fn value): {}", add_fn(10, 15));

    // A boxed callable, stored now and invoked later.
    let stored: Box<dyn Fn(i32, i32) -> i32> = Box::new(add);
    println!("sum (through Box<dyn Fn>): {}", stored(7, 8));

    // The transform pipeline takes a named function...
    println!("doubled: {:?}", transform(&[1, 2, 3, 4, 5], double));

    // ...or a capturing closure.
    let factor = 3;
    println!("tripled: {:?}", transform(&[1, 2, 3, 4, 5], |x| x * factor));

    // Map values are updated in place through the same kind of parameter.
    let mut map: BTreeMap<i32, i32> = [(1, 10), (2, 20), (3, 30)].into_iter().collect();
    update_values(&mut map, |v| v + 1);
    println!("incremented map: {:?}", map);

    // The parallel variant is a drop-in replacement for large inputs.
    let big: Vec<i32> = (0..10_000).collect();
    println!(
        "parallel transform kept {} elements",
        transform_parallel(&big, double).len()
    );
}

// ============================================================================
// Tests
// ============================================================================
