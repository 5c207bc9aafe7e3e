//! Deduplicating store for translated hands.
mod accumulator;

pub use accumulator::{HandAccumulator, StoreError};
