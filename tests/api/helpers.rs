use std::cell::{Cell, RefCell};

use chrono::{Duration, Local};
use eventboard::api::ApiClient;
use eventboard::domain::EventSummary;
use eventboard::view::{EventFields, EventView, Loading, SubscribeView};
use eventboard::FormController;
use wiremock::MockServer;

pub struct TestApp {
    pub server: MockServer,
    pub controller: FormController,
}

pub async fn spawn_app() -> TestApp {
    let server = MockServer::start().await;
    let api = ApiClient::new(&server.uri()).expect("Failed to build API client");
    TestApp {
        controller: FormController::new(api),
        server,
    }
}

/// Controller pointed at a port nobody listens on.
pub fn unreachable_controller() -> FormController {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
        listener.local_addr().expect("No local address").port()
    };
    let api = ApiClient::new(&format!("http://127.0.0.1:{}", port)).expect("Failed to build API client");
    FormController::new(api)
}

/// Resolves once the mock server has seen a request, so callers can inspect
/// the view while the (delayed) response is still pending.
pub async fn request_arrived(server: &MockServer) {
    for _ in 0..500 {
        let seen = server.received_requests().await.map(|r| !r.is_empty()).unwrap_or(false);
        if seen {
            return;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    panic!("No request reached the mock server");
}

pub fn datetime_field(offset: Duration) -> String {
    (Local::now() + offset).format("%Y-%m-%dT%H:%M").to_string()
}

#[derive(Default)]
pub struct FakeSubscribeForm {
    pub email: RefCell<String>,
    pub loading: Cell<bool>,
    pub loading_history: RefCell<Vec<bool>>,
    pub success: RefCell<Option<String>>,
    pub error: RefCell<Option<String>>,
    pub resets: Cell<usize>,
}

impl FakeSubscribeForm {
    pub fn with_email(email: &str) -> Self {
        let form = Self::default();
        *form.email.borrow_mut() = email.to_string();
        form
    }
}

impl Loading for FakeSubscribeForm {
    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
        self.loading_history.borrow_mut().push(loading);
    }
}

impl SubscribeView for FakeSubscribeForm {
    fn email(&self) -> String {
        self.email.borrow().clone()
    }

    fn clear_feedback(&self) {
        *self.success.borrow_mut() = None;
        *self.error.borrow_mut() = None;
    }

    fn show_success(&self, message: &str) {
        *self.success.borrow_mut() = Some(message.to_string());
    }

    fn show_error(&self, message: &str) {
        *self.error.borrow_mut() = Some(message.to_string());
    }

    fn reset(&self) {
        self.email.borrow_mut().clear();
        self.resets.set(self.resets.get() + 1);
    }
}

#[derive(Default)]
pub struct FakeEventForm {
    pub fields: RefCell<EventFields>,
    pub loading: Cell<bool>,
    pub loading_history: RefCell<Vec<bool>>,
    pub title_error: RefCell<Option<String>>,
    pub confirmation: RefCell<Option<EventSummary>>,
    pub confirmation_visible: Cell<bool>,
    pub other_category_visible: Cell<bool>,
    pub alerts: RefCell<Vec<String>>,
    pub resets: Cell<usize>,
}

impl FakeEventForm {
    pub fn with_fields(fields: EventFields) -> Self {
        let form = Self::default();
        *form.fields.borrow_mut() = fields;
        form
    }
}

impl Loading for FakeEventForm {
    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
        self.loading_history.borrow_mut().push(loading);
    }
}

impl EventView for FakeEventForm {
    fn fields(&self) -> EventFields {
        self.fields.borrow().clone()
    }

    fn clear_title_error(&self) {
        *self.title_error.borrow_mut() = None;
    }

    fn show_title_error(&self, message: &str) {
        *self.title_error.borrow_mut() = Some(message.to_string());
    }

    fn show_confirmation(&self, summary: &EventSummary) {
        *self.confirmation.borrow_mut() = Some(summary.clone());
        self.confirmation_visible.set(true);
    }

    fn hide_confirmation(&self) {
        self.confirmation_visible.set(false);
    }

    fn set_other_category_visible(&self, visible: bool) {
        self.other_category_visible.set(visible);
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn reset(&self) {
        *self.fields.borrow_mut() = EventFields::default();
        self.resets.set(self.resets.get() + 1);
    }
}
