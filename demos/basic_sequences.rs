//! Basic Sequences
//!
//! This example walks through every combinator on small inputs.
//!
//! Key concepts:
//! - Adapters are lazy and produce nothing until pulled
//! - Stopping early stops production
//! - Drivers consume a sequence for its side effects or a folded value
//!
//! Run with: cargo run --example basic_sequences

use seqtools::{concat, concat_iter, drive, filter, for_each, map, reduce, reverse};

fn main() {
    println!("=== Basic Sequences Example ===\n");

    let numbers = [vec![1, 2, 3], vec![7, 8, 9]];

    let joined: Vec<i32> = concat(&numbers).copied().collect();
    println!("concat:   {joined:?}");

    let backwards: Vec<i32> = reverse(&numbers).copied().collect();
    println!("reverse:  {backwards:?}");

    let evens: Vec<i32> = filter(&joined, |v| v % 2 == 0).copied().collect();
    println!("filter:   {evens:?}");

    let doubled: Vec<(usize, i32)> = map(&[1, 2, 3], |_, v| v * 2).collect();
    println!("map:      {doubled:?}");

    let squares = (1..).map(|n: u64| n * n);
    let first: Vec<u64> = concat_iter([squares]).take(5).collect();
    println!("concat_iter over an endless source: {first:?}");

    print!("for_each: ");
    for_each(["hello", "world", "gophers"], |i, v| print!("{i}:{v} "));
    println!();

    let total = reduce(concat(&numbers), |acc, cur| acc + *cur, 0);
    println!("reduce:   {total}");

    let done = drive(concat(&numbers), |v| *v < 7);
    println!("drive stopping at 7: {done:?}");

    println!("\n=== Example Complete ===");
}
