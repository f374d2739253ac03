//! Facility management web frontend
//!
//! A fullstack SSR web application built with Dioxus. It talks to the
//! facility REST API for data.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod auth;
mod components;
mod export;
mod listing;
mod pages;
mod projection;
mod routes;
mod types;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
