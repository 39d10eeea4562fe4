use chrono::Duration;
use claims::assert_matches;
use eventboard::api::{ApiClient, ApiError, EventOutcome, SubscribeOutcome};
use eventboard::controller::NETWORK_ERROR_MESSAGE;
use eventboard::view::EventFields;
use eventboard::{FormController, Submission};
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::helpers::{datetime_field, FakeEventForm, FakeSubscribeForm};

fn ui_executor() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to build current-thread runtime")
}

fn background_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("Failed to build multi-thread runtime")
}

#[test]
fn requests_run_on_the_attached_runtime() {
    let background = background_runtime();
    let ui = ui_executor();

    let (submission, loading_history) = ui.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/event"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({ "event_id": "7" })))
            .expect(1)
            .mount(&server)
            .await;

        let api = ApiClient::new(&server.uri()).expect("Failed to build API client");
        let controller = FormController::new(api).with_runtime(background.handle().clone());
        let form = FakeEventForm::with_fields(EventFields {
            title: "Release party".into(),
            datetime: datetime_field(Duration::days(3)),
            category: "social".into(),
            ..EventFields::default()
        });

        let submission = controller.handle_create_event(&form).await;
        let history = form.loading_history.borrow().clone();
        (submission, history)
    });

    assert_matches!(
        submission,
        Submission::Completed(EventOutcome::Created { event_id: Some(_) })
    );
    assert_eq!(loading_history, vec![true, false]);
}

#[test]
fn subscribe_through_the_attached_runtime_updates_the_view() {
    let background = background_runtime();
    let ui = ui_executor();

    let (submission, success) = ui.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/subscribe"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "message": "ok" })))
            .expect(1)
            .mount(&server)
            .await;

        let api = ApiClient::new(&server.uri()).expect("Failed to build API client");
        let controller = FormController::new(api).with_runtime(background.handle().clone());
        let form = FakeSubscribeForm::with_email("ada@example.com");

        let submission = controller.handle_subscribe(&form).await;
        let success = form.success.borrow().clone();
        (submission, success)
    });

    assert_matches!(submission, Submission::Completed(SubscribeOutcome::Subscribed(_)));
    assert_eq!(success.as_deref(), Some("ok"));
}

#[test]
fn stopped_runtime_surfaces_as_a_network_error() {
    let background = background_runtime();
    let handle = background.handle().clone();
    background.shutdown_background();
    let ui = ui_executor();

    let (submission, error, loading_history) = ui.block_on(async {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let api = ApiClient::new(&server.uri()).expect("Failed to build API client");
        let controller = FormController::new(api).with_runtime(handle);
        let form = FakeSubscribeForm::with_email("ada@example.com");

        let submission = controller.handle_subscribe(&form).await;
        let error = form.error.borrow().clone();
        let history = form.loading_history.borrow().clone();
        (submission, error, history)
    });

    assert_matches!(submission, Submission::Unreachable(ApiError::Dispatch(_)));
    assert_eq!(error.as_deref(), Some(NETWORK_ERROR_MESSAGE));
    assert_eq!(loading_history, vec![true, false]);
}
