pub mod components;
pub mod repository;
pub mod transcript;
pub mod view_model;

mod panel;

pub use panel::ChatPanel;
