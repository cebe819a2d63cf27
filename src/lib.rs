//! modreg
//!
//! Terminal client for a module registry: search and browse registered
//! modules, submit new ones, and moderate pending submissions.
//!
//! Follows a Pure Core / Impure Shell split: [`model`] and [`state`] are pure
//! and testable without a terminal or network; [`api`], [`view`] and
//! [`logging`] perform the I/O.

pub mod api;
pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
