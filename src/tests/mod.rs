mod listing_tests;
mod utils;
