pub mod app;
pub mod braid;
pub mod cli;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod solvers;
