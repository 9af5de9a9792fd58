mod accumulator;

pub use accumulator::{PageFetcher, SearchAccumulator, TerminationPolicy};
