use std::future::Future;

use chrono::Local;
use tokio::runtime::Handle;

use crate::api::{ApiClient, ApiError, EventOutcome, EventRequest, Reply, SubscribeOutcome, SubscriptionRequest};
use crate::domain::{parse_event_datetime, resolve_category, EventSummary, ValidationError, OTHER_CATEGORY};
use crate::view::{EventView, LoadingGuard, SubscribeView};

pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";
pub const EVENT_FAILURE_PREFIX: &str = "Failed to create event: ";

/// How a submission ended, reported back to whoever triggered it.
#[derive(Debug)]
pub enum Submission<T> {
    /// The server answered; `T` is the decoded outcome.
    Completed(T),
    /// Input was rejected locally and nothing was sent.
    Invalid(ValidationError),
    /// The request never produced a reply.
    Unreachable(ApiError),
}

impl<T> Submission<T> {
    pub fn completed(&self) -> Option<&T> {
        match self {
            Submission::Completed(outcome) => Some(outcome),
            _ => None,
        }
    }
}

/// Drives the subscription form and the event form.
///
/// Handlers are independent and keep no state between calls. Nothing stops a
/// second submission while one is in flight; both requests run to completion.
#[derive(Debug, Clone)]
pub struct FormController {
    api: ApiClient,
    runtime: Option<Handle>,
}

impl FormController {
    pub fn new(api: ApiClient) -> Self {
        Self { api, runtime: None }
    }

    /// Run requests on `handle` instead of the caller's executor. Used by the
    /// GTK front end, whose main loop cannot drive reqwest itself.
    pub fn with_runtime(mut self, handle: Handle) -> Self {
        self.runtime = Some(handle);
        self
    }

    async fn dispatch<F>(&self, fut: F) -> Result<Reply, ApiError>
    where
        F: Future<Output = Result<Reply, ApiError>> + Send + 'static,
    {
        match &self.runtime {
            Some(handle) => handle
                .spawn(fut)
                .await
                .map_err(|e| ApiError::Dispatch(e.to_string()))?,
            None => fut.await,
        }
    }

    pub async fn handle_subscribe<V>(&self, view: &V) -> Submission<SubscribeOutcome>
    where
        V: SubscribeView + ?Sized,
    {
        let _loading = LoadingGuard::engage(view);
        view.clear_feedback();

        let request = SubscriptionRequest { email: view.email() };
        log::info!("Submitting subscription for {}", request.email);

        let api = self.api.clone();
        let reply = self
            .dispatch(async move { api.subscribe(&request).await })
            .await;

        match reply {
            Ok(reply) => {
                let outcome = SubscribeOutcome::from_reply(&reply);
                match &outcome {
                    SubscribeOutcome::Subscribed(message) => {
                        view.show_success(message);
                        view.reset();
                    }
                    SubscribeOutcome::RateLimited | SubscribeOutcome::Failed(_) => {
                        log::warn!("Subscription rejected with HTTP {}", reply.status);
                        view.show_error(outcome.text());
                    }
                }
                Submission::Completed(outcome)
            }
            Err(e) => {
                log::warn!("Subscription request failed: {}", e);
                view.show_error(NETWORK_ERROR_MESSAGE);
                Submission::Unreachable(e)
            }
        }
    }

    pub async fn handle_create_event<V>(&self, view: &V) -> Submission<EventOutcome>
    where
        V: EventView + ?Sized,
    {
        let fields = view.fields();
        let event_datetime = match parse_event_datetime(&fields.datetime, &Local::now()) {
            Ok(ts) => ts,
            Err(e) => {
                // Shown to the user like a failed request; the caller still sees `Invalid`.
                log::warn!("Event not submitted: {}", e);
                view.alert(NETWORK_ERROR_MESSAGE);
                return Submission::Invalid(e);
            }
        };
        let request = EventRequest {
            event_title: fields.title,
            event_description: fields.description,
            event_datetime,
            location: fields.location,
            category: resolve_category(&fields.category, &fields.other_category),
        };

        let _loading = LoadingGuard::engage(view);
        view.clear_title_error();
        log::info!("Submitting event {:?}", request.event_title);

        let api = self.api.clone();
        let payload = request.clone();
        let reply = self
            .dispatch(async move { api.create_event(&payload).await })
            .await;

        match reply {
            Ok(reply) => {
                let outcome = EventOutcome::from_reply(&reply);
                match &outcome {
                    EventOutcome::Created { event_id } => {
                        log::info!("Event created (id {:?})", event_id);
                        let summary =
                            EventSummary::new(request.event_title, request.event_datetime, request.location);
                        view.show_confirmation(&summary);
                        view.reset();
                    }
                    EventOutcome::Failed(reason) => {
                        log::warn!("Event rejected with HTTP {}", reply.status);
                        view.show_title_error(&format!("{}{}", EVENT_FAILURE_PREFIX, reason));
                    }
                }
                Submission::Completed(outcome)
            }
            Err(e) => {
                log::warn!("Event request failed: {}", e);
                view.alert(NETWORK_ERROR_MESSAGE);
                Submission::Unreachable(e)
            }
        }
    }

    pub fn handle_category_change<V>(&self, view: &V, selected: &str)
    where
        V: EventView + ?Sized,
    {
        view.set_other_category_visible(selected == OTHER_CATEGORY);
    }

    pub fn handle_close_confirmation<V>(&self, view: &V)
    where
        V: EventView + ?Sized,
    {
        view.hide_confirmation();
    }
}
