use adw::prelude::*;
use adw::Application;
use eventboard::api::ApiClient;
use eventboard::config::{Settings, DEFAULT_API_BASE};
use eventboard::utils::RUNTIME;
use eventboard::FormController;

pub fn build_ui(app: &Application) {
    let settings = Settings::load();
    let api = ApiClient::new(&settings.base_url).or_else(|e| {
        log::warn!("{}; falling back to {}", e, DEFAULT_API_BASE);
        ApiClient::new(DEFAULT_API_BASE)
    });
    match api {
        Ok(api) => {
            log::info!("Using API at {}", api.base_url());
            let controller = FormController::new(api).with_runtime(RUNTIME.handle().clone());
            crate::ui::main_window::show_main_window(app, controller);
        }
        Err(e) => {
            log::error!("No usable API base URL: {}", e);
            app.quit();
        }
    }
}
