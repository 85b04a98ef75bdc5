//! reqwest-backed `GameControl` implementation.

mod api;
mod client;


pub use client::HttpGameControl;
