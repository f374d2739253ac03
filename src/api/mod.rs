//! REST client and typed calls to the facility backend

mod client;
mod endpoints;
pub mod notify;

pub use client::*;
pub use endpoints::*;
