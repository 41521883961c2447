#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod metrics;
pub mod policy;
pub mod schedulers;
pub mod track;
pub mod trace;

#[cfg(test)]
mod tests;
