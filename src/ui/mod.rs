pub mod event_form;
pub mod main_window;
pub mod subscribe_form;
