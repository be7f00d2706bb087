//! Widgets shared by every tab.

pub mod dialog;
pub mod status_bar;
pub mod tab_bar;
