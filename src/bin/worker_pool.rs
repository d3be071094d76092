// A fixed-size worker pool fed by a channel. Shutdown is explicit: every
// worker receives a shutdown message and is joined before the pool goes
// away, so no thread outlives main.
//
// Run with: cargo run --bin worker_pool -- [workers]

use std::env;
use std::process;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use colored::Colorize;
use crossbeam::channel::{self, Sender};
use rand::Rng;

type Job = Box<dyn FnOnce() + Send + 'static>;

enum PoolMessage {
    Run(Job),
    Shutdown,
}

// ============================================================================
// The pool
// ============================================================================

pub struct WorkerPool {
    workers: Vec<JoinHandle<()>>,
    sender: Sender<PoolMessage>,
}

impl WorkerPool {
    /// Spawns `size` workers, all consuming from one shared channel.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "a pool needs at least one worker");

        let (sender, receiver) = channel::unbounded::<PoolMessage>();
        let mut workers = Vec::with_capacity(size);

        for id in 0..size {
            let receiver = receiver.clone();
            let handle = thread::Builder::new()
                .name(format!("worker-{}", id))
                .spawn(move || {
                    while let Ok(message) = receiver.recv() {
                        match message {
                            PoolMessage::Run(job) => job(),
                            PoolMessage::Shutdown => break,
                        }
                    }
                })
                .expect("failed to spawn worker thread");
            workers.push(handle);
        }

        WorkerPool { workers, sender }
    }

    pub fn size(&self) -> usize {
        self.workers.len()
    }

    pub fn execute<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.sender
            .send(PoolMessage::Run(Box::new(job)))
            .expect("worker channel closed before shutdown");
    }

    /// Queues one shutdown message per worker and joins them all. The
    /// messages land behind any pending jobs, so queued work still drains.
    pub fn shutdown(self) {
        for _ in &self.workers {
            self.sender
                .send(PoolMessage::Shutdown)
                .expect("worker channel closed before shutdown");
        }
        for handle in self.workers {
            handle.join().expect("worker thread panicked");
        }
    }
}

// ============================================================================
// Demo driver
// ============================================================================

fn main() {
    let size = match env::args().nth(1) {
        None => num_cpus::get(),
        Some(raw) => match raw.parse() {
            Ok(n) if n > 0 => n,
            _ => {
                eprintln!("{}", "Usage: worker_pool [workers]".yellow());
                process::exit(2);
            }
        },
    };

    println!("=== Worker pool with {} workers ===\n", size);

    let pool = WorkerPool::new(size);
    let mut rng = rand::thread_rng();

    for task in 0..12 {
        let pause = Duration::from_millis(rng.gen_range(10..60));
        pool.execute(move || {
            thread::sleep(pause);
            let worker = thread::current();
            println!("task {:2} ran on {}", task, worker.name().unwrap_or("?"));
        });
    }

    pool.shutdown();
    println!("\n{}", "All workers joined; nothing left running.".green());
}

// ============================================================================
// Tests
// ============================================================================
