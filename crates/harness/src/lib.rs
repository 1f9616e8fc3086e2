pub mod cases;
pub mod config;
pub mod printer;
pub mod runner;
