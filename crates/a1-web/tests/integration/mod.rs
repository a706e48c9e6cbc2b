pub mod common;
mod site_tests;
