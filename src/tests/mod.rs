mod filter_tests;
mod tick_tests;
