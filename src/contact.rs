//! Contact Form
//!
//! Local form state and the submit routine that posts it to the content API.

use serde::{Deserialize, Serialize};

use crate::endpoints::{EndpointError, Endpoints};
use crate::transport::{post, ContentTransport, FetchError};

/// The five required contact fields, serialized as the POST body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A named form field, for input change handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Subject,
    Message,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::FirstName => self.first_name = value,
            ContactField::LastName => self.last_name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Names of required fields left blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn clear(&mut self) {
        *self = ContactForm::default();
    }
}

/// Where the last submission stands. Not cleared by later edits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmitStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitStatus::Submitting)
    }

    /// Apply a finished submission to the live form: clear it on success,
    /// leave it alone otherwise
    pub fn apply_to(self, form: &mut ContactForm) {
        if self == SubmitStatus::Success {
            form.clear();
        }
    }
}

/// Posts contact forms to the registered `contact` endpoint
#[derive(Debug, Clone)]
pub struct ContactSubmitter {
    url: String,
}

impl ContactSubmitter {
    pub fn new(endpoints: &Endpoints) -> Result<Self, EndpointError> {
        Ok(Self {
            url: endpoints.resolve("contact", None)?,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// POST the payload, reporting any transport or status failure
    pub async fn send<C>(&self, transport: &C, form: &ContactForm) -> Result<(), FetchError>
    where
        C: ContentTransport + ?Sized,
    {
        post(transport, &self.url, form).await.map(|_| ())
    }

    /// Submit a copy of the form and report the outcome, logging failures
    pub async fn attempt<C>(&self, transport: &C, form: &ContactForm) -> SubmitStatus
    where
        C: ContentTransport + ?Sized,
    {
        match self.send(transport, form).await {
            Ok(()) => SubmitStatus::Success,
            Err(e) => {
                tracing::error!(error = %e, "Error submitting contact form");
                SubmitStatus::Error
            }
        }
    }

    /// Run one submission against local form state.
    ///
    /// Fields are cleared only on success; on failure they are kept so the
    /// visitor can retry. No validation beyond required-field presence
    /// happens here, and nothing is retried.
    pub async fn submit<C>(
        &self,
        transport: &C,
        form: &mut ContactForm,
        status: &mut SubmitStatus,
    ) -> SubmitStatus
    where
        C: ContentTransport + ?Sized,
    {
        *status = SubmitStatus::Submitting;

        let outcome = self.attempt(transport, form).await;
        outcome.apply_to(form);
        *status = outcome;

        *status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::fakes::{FixedTransport, OfflineTransport};

    fn filled_form() -> ContactForm {
        ContactForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Engine".to_string(),
            message: "Let's talk".to_string(),
        }
    }

    fn submitter() -> ContactSubmitter {
        ContactSubmitter::new(&Endpoints::new("http://test/api")).unwrap()
    }

    #[tokio::test]
    async fn test_success_clears_fields() {
        let transport = FixedTransport::new(200, r#"{"success": true}"#);
        let mut form = filled_form();
        let mut status = SubmitStatus::Idle;

        let result = submitter().submit(&transport, &mut form, &mut status).await;

        assert_eq!(result, SubmitStatus::Success);
        assert_eq!(status, SubmitStatus::Success);
        assert_eq!(form, ContactForm::default());

        let posted = transport.posted.borrow();
        assert_eq!(posted.len(), 1);
        assert_eq!(posted[0].0, "http://test/api/contact");
        assert_eq!(posted[0].1["firstName"], "Ada");
        assert_eq!(posted[0].1["message"], "Let's talk");
    }

    #[tokio::test]
    async fn test_server_error_keeps_fields() {
        let transport = FixedTransport::new(500, r#"{"success": false}"#);
        let mut form = filled_form();
        let mut status = SubmitStatus::Idle;

        submitter().submit(&transport, &mut form, &mut status).await;

        assert_eq!(status, SubmitStatus::Error);
        assert_eq!(form, filled_form());
    }

    #[tokio::test]
    async fn test_network_failure_keeps_fields() {
        let mut form = filled_form();
        let mut status = SubmitStatus::Idle;

        submitter().submit(&OfflineTransport, &mut form, &mut status).await;

        assert_eq!(status, SubmitStatus::Error);
        assert_eq!(form.email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_failed_attempt_keeps_edits_made_in_flight() {
        let transport = FixedTransport::new(500, "");
        let sent = filled_form();

        let outcome = submitter().attempt(&transport, &sent).await;

        let mut live = sent.clone();
        live.set(ContactField::Message, "Let's talk, edited");
        outcome.apply_to(&mut live);

        assert_eq!(outcome, SubmitStatus::Error);
        assert_eq!(live.message, "Let's talk, edited");
        assert_eq!(transport.posted.borrow()[0].1["message"], "Let's talk");
    }

    #[tokio::test]
    async fn test_successful_attempt_clears_live_form() {
        let transport = FixedTransport::new(201, r#"{"success": true}"#);
        let outcome = submitter().attempt(&transport, &filled_form()).await;

        let mut live = filled_form();
        outcome.apply_to(&mut live);

        assert_eq!(outcome, SubmitStatus::Success);
        assert_eq!(live, ContactForm::default());
    }

    #[test]
    fn test_field_access() {
        let mut form = ContactForm::default();
        form.set(ContactField::Subject, "Hi");
        assert_eq!(form.get(ContactField::Subject), "Hi");
        assert_eq!(
            form.missing_fields(),
            vec!["firstName", "lastName", "email", "message"]
        );
        assert!(filled_form().missing_fields().is_empty());
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(filled_form()).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 5);
        assert!(json.get("lastName").is_some());
    }
}
