//! Contact form state and the send flow.
//!
//! The form holds four required fields. A submission is guarded locally,
//! handed to the [`EmailRelay`], and ends in a success or error banner that
//! reverts to idle after [`BANNER_DURATION`].

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;

use crate::error::{ContactError, RelayError};
use crate::relay::{EmailRelay, RelayResponse, TemplateParams};
use crate::timer;

/// How long the success or error banner stays up.
pub const BANNER_DURATION: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// Returns the form control name.
    pub fn key(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        };
        f.write_str(label)
    }
}

/// The four values typed by the visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Loose `local@domain.tld` shape check, in the spirit of `type=email`.
pub fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|l| !l.is_empty())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Identifies one banner, so a timer armed for an older banner cannot
/// dismiss a newer one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BannerTicket(u64);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub draft: ContactDraft,
    status: SubmitStatus,
    banner: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        *self.draft.slot(field) = value;
    }

    /// Required fields that are blank, in form order.
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|f| self.draft.get(*f).trim().is_empty())
            .collect()
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if let Some(field) = self.missing_fields().into_iter().next() {
            return Err(ContactError::MissingField(field));
        }
        if !looks_like_email(&self.draft.email) {
            return Err(ContactError::InvalidEmail(self.draft.email.clone()));
        }
        Ok(())
    }

    /// The submit control is disabled while a request is outstanding.
    pub fn can_submit(&self) -> bool {
        self.status != SubmitStatus::Submitting
    }

    /// Validates the draft and moves to `Submitting`, returning the values
    /// to send. On error the state is left untouched.
    pub fn begin_submit(&mut self, to_name: &str) -> Result<TemplateParams, ContactError> {
        if !self.can_submit() {
            return Err(ContactError::AlreadySubmitting);
        }
        self.validate()?;

        self.status = SubmitStatus::Submitting;
        Ok(TemplateParams {
            from_name: self.draft.name.clone(),
            from_email: self.draft.email.clone(),
            subject: self.draft.subject.clone(),
            message: self.draft.message.clone(),
            to_name: to_name.to_string(),
        })
    }

    /// Records the relay outcome and returns the ticket of the new banner.
    pub fn finish(&mut self, outcome: Result<RelayResponse, RelayError>) -> BannerTicket {
        match outcome {
            Ok(response) if response.is_success() => {
                tracing::info!("Contact message sent");
                self.status = SubmitStatus::Success;
                self.draft = ContactDraft::default();
            }
            Ok(response) => {
                tracing::warn!(
                    status = response.status,
                    "Email relay rejected message: {}",
                    response.text
                );
                self.status = SubmitStatus::Error;
            }
            Err(e) => {
                tracing::warn!("Email relay failed: {}", e);
                self.status = SubmitStatus::Error;
            }
        }
        self.banner = self.banner.wrapping_add(1);
        BannerTicket(self.banner)
    }

    /// Returns to idle if `ticket` is still the current banner.
    pub fn dismiss_banner(&mut self, ticket: BannerTicket) {
        let showing = matches!(self.status, SubmitStatus::Success | SubmitStatus::Error);
        if showing && ticket.0 == self.banner {
            self.status = SubmitStatus::Idle;
        }
    }
}

/// Somewhere a [`ContactForm`] lives that can be updated in place.
pub trait FormHandle {
    fn update<T>(&self, f: impl FnOnce(&mut ContactForm) -> T) -> T;
}

impl FormHandle for Signal<ContactForm> {
    fn update<T>(&self, f: impl FnOnce(&mut ContactForm) -> T) -> T {
        let mut signal = *self;
        let mut form = signal.write();
        f(&mut form)
    }
}

impl FormHandle for Rc<RefCell<ContactForm>> {
    fn update<T>(&self, f: impl FnOnce(&mut ContactForm) -> T) -> T {
        f(&mut self.borrow_mut())
    }
}

/// Runs one submission: guard, send, show the banner, then clear it.
///
/// Returns the local guard error when nothing was sent.
pub async fn submit<H, R>(handle: &H, relay: &R, to_name: &str) -> Result<(), ContactError>
where
    H: FormHandle,
    R: EmailRelay + ?Sized,
{
    let params = handle.update(|form| form.begin_submit(to_name))?;
    tracing::debug!(subject = %params.subject, "Sending contact message");

    let outcome = relay.send(&params).await;
    let ticket = handle.update(|form| form.finish(outcome));

    timer::sleep(BANNER_DURATION).await;
    handle.update(|form| form.dismiss_banner(ticket));
    Ok(())
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;

    struct MockRelay {
        status: Option<u16>,
        sent: RefCell<Vec<TemplateParams>>,
    }

    impl MockRelay {
        fn responding(status: u16) -> Self {
            Self { status: Some(status), sent: RefCell::new(Vec::new()) }
        }

        fn failing() -> Self {
            Self { status: None, sent: RefCell::new(Vec::new()) }
        }
    }

    #[async_trait(?Send)]
    impl EmailRelay for MockRelay {
        async fn send(&self, params: &TemplateParams) -> Result<RelayResponse, RelayError> {
            self.sent.borrow_mut().push(params.clone());
            match self.status {
                Some(status) => Ok(RelayResponse { status, text: "OK".to_string() }),
                None => Err(RelayError::Transport("connection refused".to_string())),
            }
        }
    }

    fn filled() -> Rc<RefCell<ContactForm>> {
        let mut form = ContactForm::new();
        form.set_field(ContactField::Name, "Jane Doe".to_string());
        form.set_field(ContactField::Email, "jane@example.com".to_string());
        form.set_field(ContactField::Subject, "Internship".to_string());
        form.set_field(ContactField::Message, "Would love to chat.".to_string());
        Rc::new(RefCell::new(form))
    }

    /// Drives `submit` to completion, sampling the form every 100ms, and
    /// returns what the form held while the banner was up.
    async fn run_and_observe(
        form: &Rc<RefCell<ContactForm>>,
        relay: &MockRelay,
    ) -> (SubmitStatus, ContactDraft) {
        let mut seen = None;
        let fut = submit(form, relay, "Aashutosh Agrawal");
        tokio::pin!(fut);

        loop {
            tokio::select! {
                result = &mut fut => {
                    result.unwrap();
                    break;
                }
                _ = tokio::time::sleep(Duration::from_millis(100)) => {
                    let state = form.borrow();
                    if seen.is_none() && state.status() != SubmitStatus::Submitting {
                        seen = Some((state.status(), state.draft.clone()));
                    }
                }
            }
        }

        seen.expect("banner was never shown")
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_clears_fields_and_banner_expires() {
        let form = filled();
        let relay = MockRelay::responding(200);
        let start = tokio::time::Instant::now();

        let (status, draft) = run_and_observe(&form, &relay).await;

        assert_eq!(status, SubmitStatus::Success);
        assert!(draft.is_empty());
        assert_eq!(form.borrow().status(), SubmitStatus::Idle);
        assert!(start.elapsed() >= BANNER_DURATION);

        let sent = relay.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].from_name, "Jane Doe");
        assert_eq!(sent[0].to_name, "Aashutosh Agrawal");
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejection_keeps_fields_and_banner_expires() {
        let form = filled();
        let relay = MockRelay::responding(400);

        let (status, draft) = run_and_observe(&form, &relay).await;

        assert_eq!(status, SubmitStatus::Error);
        assert_eq!(draft.name, "Jane Doe");
        assert_eq!(draft.message, "Would love to chat.");
        assert_eq!(form.borrow().status(), SubmitStatus::Idle);
        assert_eq!(form.borrow().draft.email, "jane@example.com");
    }

    #[tokio::test(start_paused = true)]
    async fn test_transport_failure_shows_error() {
        let form = filled();
        let relay = MockRelay::failing();

        let (status, draft) = run_and_observe(&form, &relay).await;

        assert_eq!(status, SubmitStatus::Error);
        assert_eq!(draft.subject, "Internship");
        assert_eq!(form.borrow().status(), SubmitStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_200_success_status_is_an_error() {
        let form = filled();
        let relay = MockRelay::responding(201);

        let (status, _) = run_and_observe(&form, &relay).await;
        assert_eq!(status, SubmitStatus::Error);
    }

    #[tokio::test]
    async fn test_missing_field_sends_nothing() {
        let form = filled();
        form.borrow_mut().set_field(ContactField::Subject, "   ".to_string());
        let relay = MockRelay::responding(200);

        let result = submit(&form, &relay, "Aashutosh Agrawal").await;

        assert_eq!(result, Err(ContactError::MissingField(ContactField::Subject)));
        assert!(relay.sent.borrow().is_empty());
        assert_eq!(form.borrow().status(), SubmitStatus::Idle);
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let mut form = filled().borrow().clone();
        form.set_field(ContactField::Email, "jane.example.com".to_string());
        assert_eq!(
            form.begin_submit("x"),
            Err(ContactError::InvalidEmail("jane.example.com".to_string()))
        );
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn test_double_submit_is_blocked() {
        let mut form = filled().borrow().clone();
        assert!(form.begin_submit("x").is_ok());
        assert!(!form.can_submit());
        assert_eq!(form.begin_submit("x"), Err(ContactError::AlreadySubmitting));
    }

    #[test]
    fn test_stale_ticket_does_not_dismiss_newer_banner() {
        let mut form = filled().borrow().clone();
        form.begin_submit("x").unwrap();
        let first = form.finish(Ok(RelayResponse { status: 500, text: String::new() }));

        form.begin_submit("x").unwrap();
        let second = form.finish(Ok(RelayResponse { status: 200, text: String::new() }));

        form.dismiss_banner(first);
        assert_eq!(form.status(), SubmitStatus::Success);
        form.dismiss_banner(second);
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn test_missing_fields_in_form_order() {
        let form = ContactForm::new();
        assert_eq!(form.missing_fields(), ContactField::ALL.to_vec());
        assert_eq!(
            form.validate(),
            Err(ContactError::MissingField(ContactField::Name))
        );
    }

    #[test]
    fn test_email_shape() {
        assert!(looks_like_email("a@b.co"));
        assert!(looks_like_email(" jane.doe+work@mail.example.org "));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("a@@b.co"));
        assert!(!looks_like_email("a b@c.co"));
        assert!(!looks_like_email("a@b..co"));
    }

    #[test]
    fn test_field_keys() {
        for field in ContactField::ALL {
            assert_eq!(ContactField::from_key(field.key()), Some(field));
        }
        assert_eq!(ContactField::Email.to_string(), "Email");
    }
}
