//! Contact form state machine and the relay it posts to.
//!
//! The flow cycles Idle -> Sending -> Sent | Error -> Idle. Only one
//! submission can be in flight; the transport is behind [`Relay`] so the
//! whole cycle can be driven without a browser.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

pub const MIN_MESSAGE_CHARS: usize = 10;
pub const SENT_RESET_MS: u32 = 7000;
pub const ERROR_RESET_MS: u32 = 6000;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

pub type ValidationErrors = BTreeMap<FormField, &'static str>;

pub fn validate(form: &ContactForm) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if form.name.trim().is_empty() {
        errors.insert(FormField::Name, "Name is required");
    }
    if form.email.trim().is_empty() || !EMAIL_PATTERN.is_match(&form.email) {
        errors.insert(FormField::Email, "Valid email required");
    }
    if form.message.trim().chars().count() < MIN_MESSAGE_CHARS {
        errors.insert(FormField::Message, "Message must be at least 10 characters");
    }
    errors
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Sent,
    Error,
}

impl SubmissionState {
    /// How long a finished state stays on screen before the form returns.
    pub fn reset_delay_ms(&self) -> Option<u32> {
        match self {
            SubmissionState::Sent => Some(SENT_RESET_MS),
            SubmissionState::Error => Some(ERROR_RESET_MS),
            SubmissionState::Idle | SubmissionState::Sending => None,
        }
    }
}

/// JSON body the relay expects. Underscore fields configure the relay itself.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RelayPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(rename = "_subject")]
    pub subject: String,
    #[serde(rename = "_captcha")]
    pub captcha: &'static str,
    #[serde(rename = "_template")]
    pub template: &'static str,
}

impl From<&ContactForm> for RelayPayload {
    fn from(form: &ContactForm) -> Self {
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            message: form.message.clone(),
            subject: format!("Portfolio Contact from {}", form.name),
            captcha: "false",
            template: "table",
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum SuccessFlag {
    Bool(bool),
    Text(String),
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct RelayResponse {
    #[serde(default)]
    pub success: Option<SuccessFlag>,
    #[serde(default)]
    pub message: Option<String>,
}

impl RelayResponse {
    pub fn is_success(&self) -> bool {
        match &self.success {
            Some(SuccessFlag::Bool(flag)) => *flag,
            Some(SuccessFlag::Text(text)) => text == "true",
            None => false,
        }
    }

    pub fn confirm(self) -> Result<(), ContactError> {
        if self.is_success() {
            Ok(())
        } else {
            Err(ContactError::Rejected(self.message.unwrap_or_default()))
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ContactError {
    #[error("could not build relay request: {0}")]
    Request(String),
    #[error("relay unreachable: {0}")]
    Transport(String),
    #[error("relay replied with an unreadable body: {0}")]
    Decode(String),
    #[error("relay did not confirm delivery: {0}")]
    Rejected(String),
}

pub trait Relay {
    fn send(&self, payload: RelayPayload) -> LocalBoxFuture<'static, Result<RelayResponse, ContactError>>;
}

/// FormSubmit's AJAX endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct FormSubmitRelay {
    endpoint: String,
}

impl FormSubmitRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

impl Default for FormSubmitRelay {
    fn default() -> Self {
        Self::new(config::relay_endpoint())
    }
}

impl Relay for FormSubmitRelay {
    fn send(&self, payload: RelayPayload) -> LocalBoxFuture<'static, Result<RelayResponse, ContactError>> {
        let endpoint = self.endpoint.clone();
        Box::pin(async move {
            let request = Request::post(&endpoint)
                .header("Content-Type", "application/json")
                .header("Accept", "application/json")
                .json(&payload)
                .map_err(|e| ContactError::Request(e.to_string()))?;

            let response = request
                .send()
                .await
                .map_err(|e| ContactError::Transport(e.to_string()))?;

            response
                .json::<RelayResponse>()
                .await
                .map_err(|e| ContactError::Decode(e.to_string()))
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFlow {
    form: ContactForm,
    state: SubmissionState,
    errors: ValidationErrors,
}

impl ContactFlow {
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn error(&self, field: FormField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Inputs are locked while a submission is in flight.
    pub fn edit(&mut self, field: FormField, value: String) {
        if self.state != SubmissionState::Sending {
            self.form.set(field, value);
        }
    }

    /// Validate and, if the form is good, move to Sending and hand back the
    /// payload to post. `None` means nothing should be sent.
    pub fn submit(&mut self) -> Option<RelayPayload> {
        if self.state != SubmissionState::Idle {
            log::debug!("submit ignored while {:?}", self.state);
            return None;
        }
        self.errors = validate(&self.form);
        if !self.errors.is_empty() {
            return None;
        }
        self.state = SubmissionState::Sending;
        Some(RelayPayload::from(&self.form))
    }

    /// Apply the relay's verdict on the in-flight submission.
    pub fn complete(&mut self, outcome: Result<(), ContactError>) -> SubmissionState {
        if self.state != SubmissionState::Sending {
            return self.state;
        }
        match outcome {
            Ok(()) => {
                log::info!("contact message delivered");
                self.state = SubmissionState::Sent;
                self.form = ContactForm::default();
            }
            Err(e) => {
                log::warn!("contact submission failed: {}", e);
                self.state = SubmissionState::Error;
            }
        }
        self.state
    }

    /// Back to Idle once a finished state has been shown.
    pub fn reset(&mut self) {
        if self.state.reset_delay_ms().is_some() {
            self.state = SubmissionState::Idle;
        }
    }
}

/// Post `payload` and fold the answer into `flow`. The result is dropped if
/// `still_mounted` says the form has gone away in the meantime.
pub async fn deliver<R: Relay>(
    flow: &RefCell<ContactFlow>,
    relay: &R,
    payload: RelayPayload,
    still_mounted: impl Fn() -> bool,
) -> Option<SubmissionState> {
    let outcome = relay.send(payload).await.and_then(RelayResponse::confirm);
    if !still_mounted() {
        log::debug!("contact form unmounted before the relay answered");
        return None;
    }
    Some(flow.borrow_mut().complete(outcome))
}

/// Reset `flow` after `delay_ms`, then run `on_reset`. Dropping the handle
/// cancels the reset.
pub fn reset_after(
    delay_ms: u32,
    flow: Rc<RefCell<ContactFlow>>,
    on_reset: impl FnOnce() + 'static,
) -> Timeout {
    Timeout::new(delay_ms, move || {
        flow.borrow_mut().reset();
        on_reset();
    })
}

/// Arm the reset for a finished submission. `None` when the flow is not in
/// a state that times out.
pub fn schedule_reset(
    flow: Rc<RefCell<ContactFlow>>,
    on_reset: impl FnOnce() + 'static,
) -> Option<Timeout> {
    let delay = flow.borrow().state().reset_delay_ms()?;
    Some(reset_after(delay, flow, on_reset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    fn good_form() -> ContactForm {
        form("Ravi Kumar", "ravi@company.com", "Hello, I have a role for you.")
    }

    /// Replies with a fixed body, or a transport failure when `body` is None.
    struct MockRelay {
        body: Option<&'static str>,
        calls: Cell<usize>,
    }

    impl MockRelay {
        fn replying(body: &'static str) -> Self {
            Self { body: Some(body), calls: Cell::new(0) }
        }

        fn unreachable() -> Self {
            Self { body: None, calls: Cell::new(0) }
        }
    }

    impl Relay for MockRelay {
        fn send(&self, _payload: RelayPayload) -> LocalBoxFuture<'static, Result<RelayResponse, ContactError>> {
            self.calls.set(self.calls.get() + 1);
            let body = self.body;
            Box::pin(async move {
                match body {
                    Some(body) => serde_json::from_str(body).map_err(|e| ContactError::Decode(e.to_string())),
                    None => Err(ContactError::Transport("connection refused".into())),
                }
            })
        }
    }

    fn flow_with(form: ContactForm) -> RefCell<ContactFlow> {
        let mut flow = ContactFlow::default();
        flow.edit(FormField::Name, form.name);
        flow.edit(FormField::Email, form.email);
        flow.edit(FormField::Message, form.message);
        RefCell::new(flow)
    }

    fn submit_and_deliver(flow: &RefCell<ContactFlow>, relay: &MockRelay) -> Option<SubmissionState> {
        let payload = flow.borrow_mut().submit()?;
        block_on(deliver(flow, relay, payload, || true))
    }

    #[test]
    fn well_formed_form_has_no_errors() {
        assert!(validate(&good_form()).is_empty());
        assert!(validate(&form("A", "a@b.co", "0123456789")).is_empty());
    }

    #[test]
    fn each_bad_field_is_reported() {
        let errors = validate(&form("  ", "ravi@company.com", "Hello there, long enough"));
        assert_eq!(errors.keys().collect::<Vec<_>>(), [&FormField::Name]);

        for email in ["", "ravi", "ravi@company", "ravi.company.com", "@company.com", "ravi@ .com"] {
            let errors = validate(&form("Ravi", email, "Hello there, long enough"));
            assert!(errors.contains_key(&FormField::Email), "{email:?} accepted");
        }

        let errors = validate(&form("Ravi", "ravi@company.com", "too short"));
        assert_eq!(errors.get(&FormField::Message), Some(&"Message must be at least 10 characters"));
    }

    #[test]
    fn message_length_ignores_surrounding_whitespace() {
        let errors = validate(&form("Ravi", "ravi@company.com", "   short      "));
        assert!(errors.contains_key(&FormField::Message));
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = validate(&ContactForm::default());
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn payload_carries_relay_fields() {
        let payload = RelayPayload::from(&good_form());
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ravi Kumar",
                "email": "ravi@company.com",
                "message": "Hello, I have a role for you.",
                "_subject": "Portfolio Contact from Ravi Kumar",
                "_captcha": "false",
                "_template": "table",
            })
        );
    }

    #[test]
    fn success_flag_accepts_bool_and_string() {
        let parse = |s: &str| serde_json::from_str::<RelayResponse>(s).unwrap();
        assert!(parse(r#"{"success": true}"#).is_success());
        assert!(parse(r#"{"success": "true", "message": "sent"}"#).is_success());
        assert!(!parse(r#"{"success": false}"#).is_success());
        assert!(!parse(r#"{"success": "false"}"#).is_success());
        assert!(!parse(r#"{}"#).is_success());
    }

    #[test]
    fn invalid_form_never_reaches_the_relay() {
        let flow = flow_with(form("", "nope", "hi"));
        let relay = MockRelay::replying(r#"{"success": "true"}"#);
        assert_eq!(submit_and_deliver(&flow, &relay), None);
        assert_eq!(relay.calls.get(), 0);
        assert_eq!(flow.borrow().state(), SubmissionState::Idle);
        assert_eq!(flow.borrow().errors().len(), 3);
    }

    #[test]
    fn successful_submission_clears_form_then_resets() {
        let flow = flow_with(good_form());
        let relay = MockRelay::replying(r#"{"success": "true"}"#);

        assert_eq!(submit_and_deliver(&flow, &relay), Some(SubmissionState::Sent));
        assert_eq!(relay.calls.get(), 1);
        {
            let flow = flow.borrow();
            assert_eq!(flow.form(), &ContactForm::default());
            assert!(flow.form().is_empty());
            assert_eq!(flow.state().reset_delay_ms(), Some(SENT_RESET_MS));
        }

        flow.borrow_mut().reset();
        assert_eq!(flow.borrow().state(), SubmissionState::Idle);
    }

    #[test]
    fn rejected_submission_keeps_form() {
        let flow = flow_with(good_form());
        let relay = MockRelay::replying(r#"{"success": false, "message": "bad"}"#);

        assert_eq!(submit_and_deliver(&flow, &relay), Some(SubmissionState::Error));
        assert_eq!(flow.borrow().form(), &good_form());
        assert_eq!(flow.borrow().state().reset_delay_ms(), Some(ERROR_RESET_MS));

        flow.borrow_mut().reset();
        assert_eq!(flow.borrow().state(), SubmissionState::Idle);
        assert_eq!(flow.borrow().form(), &good_form());
    }

    #[test]
    fn transport_failure_keeps_form() {
        let flow = flow_with(good_form());
        let relay = MockRelay::unreachable();
        assert_eq!(submit_and_deliver(&flow, &relay), Some(SubmissionState::Error));
        assert_eq!(flow.borrow().form(), &good_form());
    }

    #[test]
    fn unreadable_body_is_an_error() {
        let flow = flow_with(good_form());
        let relay = MockRelay::replying("<html>oops</html>");
        assert_eq!(submit_and_deliver(&flow, &relay), Some(SubmissionState::Error));
    }

    #[test]
    fn second_submit_while_sending_sends_nothing() {
        let flow = flow_with(good_form());
        let relay = MockRelay::replying(r#"{"success": true}"#);

        let first = flow.borrow_mut().submit().expect("first submit goes out");
        assert_eq!(flow.borrow().state(), SubmissionState::Sending);
        assert_eq!(flow.borrow_mut().submit(), None);
        assert_eq!(submit_and_deliver(&flow, &relay), None);
        assert_eq!(relay.calls.get(), 0);

        block_on(deliver(&flow, &relay, first, || true));
        assert_eq!(relay.calls.get(), 1);
        assert_eq!(flow.borrow().state(), SubmissionState::Sent);
    }

    #[test]
    fn edits_are_ignored_while_sending() {
        let flow = flow_with(good_form());
        flow.borrow_mut().submit();
        flow.borrow_mut().edit(FormField::Name, "Someone else".into());
        assert_eq!(flow.borrow().form().name, "Ravi Kumar");
    }

    #[test]
    fn result_is_dropped_after_unmount() {
        let flow = flow_with(good_form());
        let relay = MockRelay::replying(r#"{"success": true}"#);
        let payload = flow.borrow_mut().submit().unwrap();
        assert_eq!(block_on(deliver(&flow, &relay, payload, || false)), None);
        assert_eq!(flow.borrow().state(), SubmissionState::Sending);
    }

    #[test]
    fn states_never_skip() {
        let mut flow = ContactFlow::default();
        flow.reset();
        assert_eq!(flow.state(), SubmissionState::Idle);
        assert_eq!(flow.complete(Ok(())), SubmissionState::Idle);
    }

    #[test]
    fn no_reset_is_armed_while_idle() {
        let flow = Rc::new(RefCell::new(ContactFlow::default()));
        assert!(schedule_reset(flow, || {}).is_none());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use std::cell::Cell;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn sent_flow() -> Rc<RefCell<ContactFlow>> {
        let mut flow = ContactFlow::default();
        flow.edit(FormField::Name, "Ravi Kumar".into());
        flow.edit(FormField::Email, "ravi@company.com".into());
        flow.edit(FormField::Message, "Hello, I have a role for you.".into());
        flow.submit().unwrap();
        assert_eq!(flow.complete(Ok(())), SubmissionState::Sent);
        Rc::new(RefCell::new(flow))
    }

    #[wasm_bindgen_test]
    async fn sent_returns_to_idle_after_the_delay() {
        let flow = sent_flow();
        let redrawn = Rc::new(Cell::new(false));
        let _timer = {
            let redrawn = redrawn.clone();
            reset_after(20, flow.clone(), move || redrawn.set(true))
        };

        TimeoutFuture::new(60).await;
        assert_eq!(flow.borrow().state(), SubmissionState::Idle);
        assert!(redrawn.get());
    }

    #[wasm_bindgen_test]
    async fn dropped_timer_leaves_sent_in_place() {
        let flow = sent_flow();
        drop(reset_after(20, flow.clone(), || {}));

        TimeoutFuture::new(60).await;
        assert_eq!(flow.borrow().state(), SubmissionState::Sent);
    }

    #[wasm_bindgen_test]
    fn finished_states_arm_a_reset() {
        assert!(schedule_reset(sent_flow(), || {}).is_some());
    }
}
