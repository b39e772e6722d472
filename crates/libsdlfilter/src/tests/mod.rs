mod config_tests;
mod description_tests;
mod filter_gen_tests;
mod utils;
