mod helpers;
mod tally_tests;
