mod common;
mod config_test;
mod execute_test;
mod interactive_test;
