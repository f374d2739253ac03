//! Session auth: context provider plus server functions

mod context;
mod server_fns;

pub use context::*;
pub use server_fns::*;
