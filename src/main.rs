mod app;
mod ui;

use adw::prelude::*;
use adw::Application;
use tracing_subscriber::EnvFilter;

fn main() -> glib::ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let app = Application::builder()
        .application_id("moe.mercurio.Eventboard")
        .build();
    app.connect_activate(|app| {
        crate::app::build_ui(app);
    });
    app.run()
}
