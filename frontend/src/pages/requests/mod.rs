pub mod components;
pub mod repository;
pub mod types;
pub mod utils;
pub mod view_model;

pub use components::list::RequestList;
pub use view_model::RequestListViewModel;
