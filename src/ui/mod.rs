//! UI layer: the App orchestrator (result screen) and the color editor.

pub mod app;
pub mod editor;
