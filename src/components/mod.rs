//! Reusable UI components

mod export_menu;
mod facility_card;
mod filter_badges;
mod filter_panel;
mod loading;
mod pagination;
mod shell;

pub use export_menu::*;
pub use facility_card::*;
pub use filter_badges::*;
pub use filter_panel::*;
pub use loading::*;
pub use pagination::*;
pub use shell::*;
