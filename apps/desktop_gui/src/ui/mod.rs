//! UI layer for desktop GUI: app shell, panels, widgets, themes, and copy.

pub mod app;
pub mod panels;
pub mod rendered;
pub mod strings;
pub mod theme;
pub mod widgets;

pub use app::{DesktopGuiApp, StartupConfig};
