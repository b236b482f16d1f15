//! UI layer for the desktop client: the window shell and the form view model it draws.

pub mod app;
pub mod view;

pub use app::ResumeAnalyzerApp;
