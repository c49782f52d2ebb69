pub mod check;
pub mod runner;
pub mod suite;
