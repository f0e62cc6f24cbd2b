//! UI layer for the desktop app: screen shell and panels.

pub mod app;

pub use app::DesktopGuiApp;
