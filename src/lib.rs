pub mod api;
pub mod config;
pub mod controller;
pub mod domain;
pub mod utils;
pub mod view;

pub use controller::{FormController, Submission};
