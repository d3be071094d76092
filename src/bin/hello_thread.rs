// Spawn a thread, let it do its one job, join it.
//
// Run with: cargo run --bin hello_thread

use std::thread;

fn greet() -> String {
    println!("Hello from thread!");
    String::from("hello")
}

fn main() {
    let handle = thread::Builder::new()
        .name("greeter".to_string())
        .spawn(greet)
        .expect("failed to spawn thread");

    let greeting = handle.join().expect("greeter thread panicked");
    println!("Main got back: {:?}", greeting);

    println!("\n=== Key Points ===");
    println!("1. join() blocks until the thread finishes");
    println!("2. join() hands back the thread's return value");
    println!("3. Err from join() means the thread panicked");
}
