pub mod days;
pub mod geometry;
pub mod input;
pub mod search;
pub mod timing;

pub use days::{solver, Solver};
