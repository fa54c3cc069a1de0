//! One form's lifecycle: edit, validate, submit, absorb server errors.

use crate::error_map::ErrorMap;
use crate::forms::{ChildForm, CollectionForm, ResourceForm};
use crate::repository::{
    RecordId, Repository, RepositoryError, Resource, Subresource, WritableSubresourceRepository,
};
use std::future::Future;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    /// Message for the form-level banner
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    /// Client-side validation failed; nothing was sent
    #[error("Please correct the errors in the form.")]
    Invalid(ErrorMap),
    /// The server refused the payload; carries its field errors
    #[error("Submission failed: {}", .0.summary())]
    Rejected(ErrorMap),
    #[error("The record no longer exists.")]
    NotFound,
    #[error("Submission failed: {0}")]
    Transport(String),
}

/// Form state plus the errors and status shown next to it.
///
/// Values are plain data so a UI can keep one in component state and swap in
/// the updated copy after each change.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSession<F> {
    form: F,
    errors: ErrorMap,
    mode: FormMode,
    status: SubmitStatus,
}

impl<F: ResourceForm> FormSession<F> {
    pub fn create(form: F) -> Self {
        Self::with_mode(form, FormMode::Create)
    }

    pub fn edit_record(id: RecordId, form: F) -> Self {
        Self::with_mode(form, FormMode::Edit(id))
    }

    fn with_mode(form: F, mode: FormMode) -> Self {
        Self {
            form,
            errors: ErrorMap::new(),
            mode,
            status: SubmitStatus::Idle,
        }
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Banner text: the last failure, or a server error tied to no field
    pub fn general_error(&self) -> Option<&str> {
        match &self.status {
            SubmitStatus::Failed(message) => Some(message.as_str()),
            _ => self.errors.general(),
        }
    }

    /// Apply a change to one field and clear that field's error only
    pub fn edit(&mut self, field: &str, change: impl FnOnce(&mut F)) {
        change(&mut self.form);
        self.errors.clear_field(field);
    }

    /// Replace the whole form, e.g. once the record being edited has loaded
    pub fn reset(&mut self, form: F) {
        self.form = form;
        self.errors = ErrorMap::new();
        self.status = SubmitStatus::Idle;
    }

    /// Validate, then hand the payload to `send` and record the outcome.
    ///
    /// On a validation failure `send` is never called. Field errors from a
    /// rejected request are merged into [`FormSession::errors`].
    pub async fn submit_with<T, Fut>(&mut self, send: impl FnOnce(F::Payload) -> Fut) -> Result<T, SubmitError>
    where
        Fut: Future<Output = Result<T, RepositoryError>>,
    {
        let errors = self.form.validate();
        if !errors.is_empty() {
            debug!(fields = %errors.summary(), "form has validation errors, not submitting");
            self.errors = errors.clone();
            return Err(self.fail(SubmitError::Invalid(errors)));
        }

        self.errors = ErrorMap::new();
        self.status = SubmitStatus::Submitting;
        match send(self.form.to_payload()).await {
            Ok(record) => {
                self.status = SubmitStatus::Succeeded;
                Ok(record)
            }
            Err(RepositoryError::Rejected { status, body }) => {
                let server_errors = ErrorMap::from_server_payload(&body);
                warn!(status, fields = %server_errors.summary(), "server rejected submission");
                self.errors.merge(server_errors.clone());
                Err(self.fail(SubmitError::Rejected(server_errors)))
            }
            Err(RepositoryError::NotFound) => Err(self.fail(SubmitError::NotFound)),
            Err(RepositoryError::Transport(message)) | Err(RepositoryError::Decode(message)) => {
                warn!(error = %message, "submission failed");
                Err(self.fail(SubmitError::Transport(message)))
            }
            Err(error @ RepositoryError::Server { .. }) => {
                warn!(%error, "submission failed");
                Err(self.fail(SubmitError::Transport(error.to_string())))
            }
        }
    }

    fn fail(&mut self, error: SubmitError) -> SubmitError {
        self.status = SubmitStatus::Failed(error.to_string());
        error
    }
}

impl<F: CollectionForm> FormSession<F> {
    /// Create or update, depending on the session's mode
    pub async fn save<Repo>(&mut self, repo: &Repo) -> Result<<F::Resource as Resource>::Record, SubmitError>
    where
        Repo: Repository<F::Resource> + ?Sized,
    {
        let mode = self.mode;
        let record = self
            .submit_with(|payload| async move {
                match mode {
                    FormMode::Create => repo.create(&payload).await,
                    FormMode::Edit(id) => repo.update(id, &payload).await,
                }
            })
            .await?;
        let resource = <F::Resource as Resource>::LABEL;
        info!(resource, ?mode, "saved");
        Ok(record)
    }
}

impl<F: ChildForm> FormSession<F> {
    /// Add a child record under `parent`
    pub async fn add_to<Repo>(
        &mut self,
        repo: &Repo,
        parent: RecordId,
    ) -> Result<<F::Subresource as Subresource>::Record, SubmitError>
    where
        Repo: WritableSubresourceRepository<F::Subresource> + ?Sized,
    {
        let record = self
            .submit_with(|payload| async move { repo.add_child(parent, &payload).await })
            .await?;
        let segment = <F::Subresource as Subresource>::LIST_SEGMENT;
        info!(parent, segment, "child record added");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::donation::fields;
    use crate::forms::{ContactNoteForm, DonationDetails, DonationForm, MonetaryFields};
    use crate::resources::{Contacts, Donations};
    use crate::test_utils::FakeRepository;
    use chrono::NaiveDate;
    use serde_json::json;
    use shared::{ContactNote, Donation, DonationType, PaymentMethod};

    fn donation_form(amount: &str) -> DonationForm {
        let mut form = DonationForm::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        form.donor_contact_id = "4".to_string();
        form.details = DonationDetails::Monetary(MonetaryFields {
            amount: amount.to_string(),
            payment_method: Some(PaymentMethod::Cash),
        });
        form
    }

    #[tokio::test]
    async fn test_invalid_form_is_never_sent() {
        let repo = FakeRepository::<Donations>::new();
        let mut session = FormSession::create(donation_form("0"));

        let result = session.save(&repo).await;

        assert!(matches!(result, Err(SubmitError::Invalid(_))));
        assert!(repo.calls().is_empty());
        assert!(session.errors().contains(fields::AMOUNT));
        assert_eq!(session.general_error(), Some("Please correct the errors in the form."));
    }

    #[tokio::test]
    async fn test_in_kind_with_zero_quantity_is_never_sent() {
        let repo = FakeRepository::<Donations>::new();
        let mut form = donation_form("");
        form.set_donation_type(DonationType::InKind);
        if let Some(details) = form.in_kind_mut() {
            details.item_name = "Blankets".to_string();
            details.quantity = "0".to_string();
        }
        let mut session = FormSession::create(form);

        let result = session.save(&repo).await;

        assert!(matches!(result, Err(SubmitError::Invalid(_))));
        assert!(repo.calls().is_empty());
        assert!(session.errors().contains(fields::QUANTITY));
    }

    #[tokio::test]
    async fn test_edit_clears_only_the_touched_field() {
        let repo = FakeRepository::<Donations>::new();
        let mut session = FormSession::create(donation_form("0"));
        session.edit(fields::DONOR_CONTACT_ID, |form| form.donor_contact_id.clear());
        let _ = session.save(&repo).await;
        assert_eq!(session.errors().len(), 2);

        session.edit(fields::AMOUNT, |form| {
            if let Some(monetary) = form.monetary_mut() {
                monetary.amount = "25".to_string();
            }
        });

        assert!(!session.errors().contains(fields::AMOUNT));
        assert!(session.errors().contains(fields::DONOR_CONTACT_ID));
    }

    #[tokio::test]
    async fn test_create_then_update_follow_mode() {
        let repo = FakeRepository::<Donations>::new().returning(Donation { id: 31, ..Donation::default() });

        let mut session = FormSession::create(donation_form("300"));
        let created = session.save(&repo).await.unwrap();
        assert_eq!(created.id, 31);
        assert_eq!(session.status(), &SubmitStatus::Succeeded);

        let mut session = FormSession::edit_record(31, donation_form("310"));
        session.save(&repo).await.unwrap();

        assert_eq!(repo.calls(), vec!["create".to_string(), "update 31".to_string()]);
        let sent = repo.sent_payloads();
        assert_eq!(serde_json::to_value(&sent[0]).unwrap()["amount"], json!("300.00"));
        assert_eq!(serde_json::to_value(&sent[1]).unwrap()["amount"], json!("310.00"));
    }

    #[tokio::test]
    async fn test_server_field_errors_are_merged() {
        let repo = FakeRepository::<Donations>::new().failing_with(RepositoryError::Rejected {
            status: 400,
            body: json!({
                "donor_contact_id": ["Invalid pk \"4\" - object does not exist."],
                "non_field_errors": ["Duplicate donation."]
            }),
        });
        let mut session = FormSession::create(donation_form("300"));

        let result = session.save(&repo).await;

        match result {
            Err(SubmitError::Rejected(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected a rejection, got {:?}", other),
        }
        assert_eq!(
            session.error(fields::DONOR_CONTACT_ID),
            Some("Invalid pk \"4\" - object does not exist.")
        );
        assert_eq!(session.errors().general(), Some("Duplicate donation."));
        assert!(!session.is_submitting());
    }

    #[tokio::test]
    async fn test_transport_failure_sets_banner() {
        let repo = FakeRepository::<Donations>::new()
            .failing_with(RepositoryError::Transport("connection refused".to_string()));
        let mut session = FormSession::create(donation_form("300"));

        let result = session.save(&repo).await;

        assert_eq!(result, Err(SubmitError::Transport("connection refused".to_string())));
        assert_eq!(session.general_error(), Some("Submission failed: connection refused"));
        assert!(session.errors().is_empty());
    }

    #[tokio::test]
    async fn test_server_fault_is_a_general_error_not_field_errors() {
        let repo = FakeRepository::<Donations>::new().failing_with(RepositoryError::from_status(
            500,
            "<html><body>Internal Server Error</body></html>",
        ));
        let mut session = FormSession::create(donation_form("300"));

        let result = session.save(&repo).await;

        assert!(matches!(result, Err(SubmitError::Transport(_))));
        assert_eq!(session.general_error(), Some("Submission failed: server responded with status 500"));
        assert!(session.errors().is_empty());
    }

    #[tokio::test]
    async fn test_child_form_posts_under_parent() {
        let repo = FakeRepository::<Contacts>::new().returning_child(&ContactNote {
            id: 2,
            note_text: "Called back.".to_string(),
            ..ContactNote::default()
        });
        let mut session = FormSession::create(ContactNoteForm { note_text: "Called back.".to_string() });

        let note = session.add_to(&repo, 7).await.unwrap();

        assert_eq!(note.id, 2);
        assert_eq!(repo.calls(), vec!["add notes 7".to_string()]);
    }
}
