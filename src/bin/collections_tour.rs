// A tour of the standard containers: keyed lookup, sets, FIFO queues, and
// word counting.
//
// Run with: cargo run --bin collections_tour

use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

use itertools::Itertools;

// ============================================================================
// Keyed lookup: a page cache
// ============================================================================

pub fn build_page_cache() -> HashMap<String, String> {
    let mut cache = HashMap::new();
    cache.insert(
        "http://example.com".to_string(),
        "<html>hello</html>".to_string(),
    );
    cache
}

fn cache_demo() {
    let cache = build_page_cache();
    for url in ["http://example.com", "http://example.org"] {
        match cache.get(url) {
            Some(body) => println!("cache for {}: {}", url, body),
            None => println!("cache miss for {}", url),
        }
    }
}

// ============================================================================
// Sets: membership and deduplication
// ============================================================================

/// Collapses duplicates and returns the distinct values in ascending order.
pub fn unique_sorted(values: &[i32]) -> Vec<i32> {
    let unique: BTreeSet<i32> = values.iter().copied().collect();
    unique.into_iter().collect()
}

fn set_demo() {
    let numbers: BTreeSet<i32> = [10, 20, 30, 40, 50].into_iter().collect();
    for candidate in [30, 60] {
        if numbers.contains(&candidate) {
            println!("{} is in the set", candidate);
        } else {
            println!("{} is not in the set", candidate);
        }
    }

    let raw = [10, 20, 10, 30, 40, 20, 50];
    println!("unique elements of {:?}: {:?}", raw, unique_sorted(&raw));
}

// ============================================================================
// FIFO queue
// ============================================================================

fn print_queue(queue: &VecDeque<i32>) {
    if queue.is_empty() {
        println!("queue is empty");
        return;
    }
    println!("front to back: {}", queue.iter().join(" => "));
}

fn queue_demo() {
    let mut queue: VecDeque<i32> = VecDeque::new();
    queue.push_back(10);
    queue.push_back(20);
    queue.push_back(30);

    let popped = queue.pop_front();
    println!("popped {:?}", popped);
    print_queue(&queue);
}

// ============================================================================
// Word frequency
// ============================================================================

pub fn word_frequencies(text: &str) -> BTreeMap<&str, usize> {
    // counts() gives a HashMap; reordering into a BTreeMap sorts the output.
    text.split_whitespace().counts().into_iter().collect()
}

fn frequency_demo() {
    let text = "hello world hello you are a man.";
    for (word, count) in word_frequencies(text) {
        println!("{}: {}", word, count);
    }
}

fn main() {
    println!("=== Page cache lookup ===");
    cache_demo();

    println!("\n=== Set membership and unique elements ===");
    set_demo();

    println!("\n=== FIFO queue ===");
    queue_demo();

    println!("\n=== Word frequency ===");
    frequency_demo();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse_into_sorted_values() {
        assert_eq!(
            unique_sorted(&[10, 20, 10, 30, 40, 20, 50]),
            vec![10, 20, 30, 40, 50]
        );
    }

    #[test]
    fn cache_hits_and_misses() {
        let cache = build_page_cache();
        assert_eq!(
            cache.get("http://example.com").map(String::as_str),
            Some("<html>hello</html>")
        );
        assert!(cache.get("http://example.org").is_none());
    }

    #[test]
    fn frequency_counts_repeated_words() {
        let counts = word_frequencies("hello world hello you are a man.");
        assert_eq!(counts.get("hello"), Some(&2));
        assert_eq!(counts.get("world"), Some(&1));
        assert_eq!(counts.get("man."), Some(&1));
        assert_eq!(counts.len(), 6);
    }

    #[test]
    fn queue_pops_in_insertion_order() {
        let mut queue: VecDeque<i32> = [10, 20, 30].into_iter().collect();
        assert_eq!(queue.pop_front(), Some(10));
        assert_eq!(queue.pop_front(), Some(20));
        assert_eq!(queue.pop_front(), Some(30));
        assert_eq!(queue.pop_front(), None);
    }
}
