//! Terminal user interface for the mock exchange.
//!
//! Home, Markets, Trade, Wallet and Earn screens share one [`App`] state,
//! driven by key events through [`event::update`].

pub mod app;
pub mod components;
pub mod event;
pub mod input;
pub mod tabs;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use event::{Event, Message};
pub use terminal::{Tui, restore_terminal, setup_terminal};
pub use ui::render;
