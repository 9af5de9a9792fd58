mod listing;

pub use listing::ListingSummary;
