pub mod app;
pub mod components;
pub mod pages;
pub mod routes;

pub use app::App;
