//! Application form model and submit flow
//!
//! The form holds eleven free-text fields. Submitting inserts a single row through
//! a [`RegistrationStore`]; success clears the form and shows a confirmation,
//! failure keeps the values and shows an error with a retry.

use serde::{Deserialize, Serialize};

/// Endpoint the browser posts applications to.
pub const REGISTRATIONS_PATH: &str = "/api/registrations";

/// One application row. Field names match the table columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub registration_number: String,
    pub srm_email: String,
    pub personal_email: String,
    pub contact_number: String,
    pub year: String,
    pub department: String,
    pub section: String,
    pub faculty_advisor_name: String,
    pub faculty_advisor_contact: String,
    pub interested_domain: String,
}

/// Form field identifiers, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Field {
    #[display("Full Name")]
    Name,
    #[display("Registration Number")]
    RegistrationNumber,
    #[display("SRM Email ID")]
    SrmEmail,
    #[display("Personal Email ID")]
    PersonalEmail,
    #[display("Contact Number")]
    ContactNumber,
    #[display("Year")]
    Year,
    #[display("Department")]
    Department,
    #[display("Section")]
    Section,
    #[display("Faculty Advisor Name")]
    FacultyAdvisorName,
    #[display("Faculty Advisor Contact")]
    FacultyAdvisorContact,
    #[display("Interested Domain")]
    InterestedDomain,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::Name,
        Field::RegistrationNumber,
        Field::SrmEmail,
        Field::PersonalEmail,
        Field::ContactNumber,
        Field::Year,
        Field::Department,
        Field::Section,
        Field::FacultyAdvisorName,
        Field::FacultyAdvisorContact,
        Field::InterestedDomain,
    ];

    /// Column name, also used as the input id.
    pub fn column(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::RegistrationNumber => "registration_number",
            Field::SrmEmail => "srm_email",
            Field::PersonalEmail => "personal_email",
            Field::ContactNumber => "contact_number",
            Field::Year => "year",
            Field::Department => "department",
            Field::Section => "section",
            Field::FacultyAdvisorName => "faculty_advisor_name",
            Field::FacultyAdvisorContact => "faculty_advisor_contact",
            Field::InterestedDomain => "interested_domain",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            Field::SrmEmail | Field::PersonalEmail => "email",
            Field::ContactNumber | Field::FacultyAdvisorContact => "tel",
            _ => "text",
        }
    }
}

impl Registration {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::RegistrationNumber => &self.registration_number,
            Field::SrmEmail => &self.srm_email,
            Field::PersonalEmail => &self.personal_email,
            Field::ContactNumber => &self.contact_number,
            Field::Year => &self.year,
            Field::Department => &self.department,
            Field::Section => &self.section,
            Field::FacultyAdvisorName => &self.faculty_advisor_name,
            Field::FacultyAdvisorContact => &self.faculty_advisor_contact,
            Field::InterestedDomain => &self.interested_domain,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::RegistrationNumber => &mut self.registration_number,
            Field::SrmEmail => &mut self.srm_email,
            Field::PersonalEmail => &mut self.personal_email,
            Field::ContactNumber => &mut self.contact_number,
            Field::Year => &mut self.year,
            Field::Department => &mut self.department,
            Field::Section => &mut self.section,
            Field::FacultyAdvisorName => &mut self.faculty_advisor_name,
            Field::FacultyAdvisorContact => &mut self.faculty_advisor_contact,
            Field::InterestedDomain => &mut self.interested_domain,
        };
        *slot = value.into();
    }

    /// Fields that are empty or whitespace only, in display order.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }

    /// Every field must be present; nothing else is checked.
    pub fn validate(&self) -> Result<(), ApplyError> {
        match self.missing_fields().first() {
            Some(field) => Err(ApplyError::MissingField(*field)),
            None => Ok(()),
        }
    }

    pub fn is_blank(&self) -> bool {
        Field::ALL.into_iter().all(|f| self.get(f).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Failure to persist a registration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Registration store is not configured")]
    NotConfigured,

    #[error("Insert rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Errors raised by the apply flow itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplyError {
    #[error("{0} is required")]
    MissingField(Field),

    #[error("The application form is not open")]
    NotEditing,

    #[error("Submission failed: {0}")]
    Store(#[from] StoreError),
}

/// Destination for submitted applications.
#[allow(async_fn_in_trait)]
pub trait RegistrationStore {
    async fn insert(&self, registration: &Registration) -> Result<(), StoreError>;
}

/// What the apply section shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApplyView {
    /// Section not rendered.
    #[default]
    Hidden,
    Editing,
    /// Insert in flight; inputs disabled.
    Submitting,
    Confirmation,
    Error,
}

/// State machine of the apply section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyFlow {
    view: ApplyView,
    form: Registration,
}

impl ApplyFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ApplyView {
        self.view
    }

    pub fn form(&self) -> &Registration {
        &self.form
    }

    pub fn is_visible(&self) -> bool {
        self.view != ApplyView::Hidden
    }

    pub fn is_submitting(&self) -> bool {
        self.view == ApplyView::Submitting
    }

    /// Show the section. Returns true if it was hidden before.
    pub fn open(&mut self) -> bool {
        if self.view == ApplyView::Hidden {
            self.view = ApplyView::Editing;
            true
        } else {
            false
        }
    }

    /// Update one field. Ignored while a submission is in flight.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if !self.is_submitting() {
            self.form.set(field, value);
        }
    }

    /// Validate and lock the form for submission.
    pub fn begin_submit(&mut self) -> Result<Registration, ApplyError> {
        if self.view != ApplyView::Editing {
            return Err(ApplyError::NotEditing);
        }
        self.form.validate()?;
        self.view = ApplyView::Submitting;
        Ok(self.form.clone())
    }

    /// Apply the outcome of the insert.
    pub fn finish(&mut self, outcome: Result<(), StoreError>) {
        if self.view != ApplyView::Submitting {
            return;
        }
        match outcome {
            Ok(()) => {
                self.form.clear();
                self.view = ApplyView::Confirmation;
            }
            Err(e) => {
                leptos::logging::error!("Error inserting registration: {}", e);
                self.view = ApplyView::Error;
            }
        }
    }

    /// "Try Again": back to the form with values intact.
    pub fn retry(&mut self) {
        if self.view == ApplyView::Error {
            self.view = ApplyView::Editing;
        }
    }

    /// "Submit Another Application": hide the section.
    pub fn reset(&mut self) {
        if matches!(self.view, ApplyView::Confirmation | ApplyView::Error) {
            self.view = ApplyView::Hidden;
        }
    }

    /// Run a full submission against `store`.
    pub async fn submit<S: RegistrationStore>(&mut self, store: &S) -> Result<(), ApplyError> {
        let registration = self.begin_submit()?;
        let outcome = store.insert(&registration).await;
        self.finish(outcome.clone());
        outcome.map_err(ApplyError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn filled() -> Registration {
        Registration {
            name: "Arthur Morgan".to_string(),
            registration_number: "RA2311003010001".to_string(),
            srm_email: "am1234@srmist.edu.in".to_string(),
            personal_email: "arthur@example.com".to_string(),
            contact_number: "9876543210".to_string(),
            year: "II".to_string(),
            department: "DSBS".to_string(),
            section: "A1".to_string(),
            faculty_advisor_name: "Dr. Dutch".to_string(),
            faculty_advisor_contact: "9123456780".to_string(),
            interested_domain: "Web/App Dev".to_string(),
        }
    }

    fn editing_with(form: Registration) -> ApplyFlow {
        let mut flow = ApplyFlow::new();
        flow.open();
        for field in Field::ALL {
            flow.set_field(field, form.get(field));
        }
        flow
    }

    #[derive(Default)]
    struct RecordingStore {
        rows: RefCell<Vec<Registration>>,
    }

    impl RegistrationStore for RecordingStore {
        async fn insert(&self, registration: &Registration) -> Result<(), StoreError> {
            self.rows.borrow_mut().push(registration.clone());
            Ok(())
        }
    }

    struct FailingStore;

    impl RegistrationStore for FailingStore {
        async fn insert(&self, _registration: &Registration) -> Result<(), StoreError> {
            Err(StoreError::Transport("connection reset".to_string()))
        }
    }

    #[test]
    fn test_serializes_with_column_names() {
        let json = serde_json::to_value(filled()).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 11);
        for field in Field::ALL {
            assert!(object.contains_key(field.column()), "{}", field.column());
        }
    }

    #[test]
    fn test_input_types() {
        assert_eq!(Field::SrmEmail.input_type(), "email");
        assert_eq!(Field::PersonalEmail.input_type(), "email");
        assert_eq!(Field::ContactNumber.input_type(), "tel");
        assert_eq!(Field::FacultyAdvisorContact.input_type(), "tel");
        assert_eq!(Field::Name.input_type(), "text");
    }

    #[test]
    fn test_get_set_every_field() {
        let mut registration = Registration::default();
        for field in Field::ALL {
            registration.set(field, field.column());
        }
        for field in Field::ALL {
            assert_eq!(registration.get(field), field.column());
        }
    }

    #[test]
    fn test_missing_fields() {
        let mut registration = filled();
        registration.section = "   ".to_string();
        registration.year.clear();

        assert_eq!(registration.missing_fields(), vec![Field::Year, Field::Section]);
        assert_eq!(registration.validate(), Err(ApplyError::MissingField(Field::Year)));
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn test_open_only_from_hidden() {
        let mut flow = ApplyFlow::new();
        assert!(!flow.is_visible());
        assert!(flow.open());
        assert!(!flow.open());
        assert_eq!(flow.view(), ApplyView::Editing);
    }

    #[test]
    fn test_begin_submit_requires_open_form() {
        let mut flow = ApplyFlow::new();
        assert_eq!(flow.begin_submit(), Err(ApplyError::NotEditing));
    }

    #[test]
    fn test_begin_submit_rejects_missing_field() {
        let mut form = filled();
        form.faculty_advisor_contact.clear();
        let mut flow = editing_with(form);

        assert_eq!(
            flow.begin_submit(),
            Err(ApplyError::MissingField(Field::FacultyAdvisorContact))
        );
        assert_eq!(flow.view(), ApplyView::Editing);
    }

    #[test]
    fn test_fields_locked_while_submitting() {
        let mut flow = editing_with(filled());
        flow.begin_submit().unwrap();
        assert!(flow.is_submitting());

        flow.set_field(Field::Name, "John Marston");
        assert_eq!(flow.form().name, "Arthur Morgan");
    }

    #[tokio::test]
    async fn test_submit_success_clears_form() {
        let store = RecordingStore::default();
        let mut flow = editing_with(filled());

        flow.submit(&store).await.unwrap();

        assert_eq!(flow.view(), ApplyView::Confirmation);
        assert!(flow.form().is_blank());
        assert_eq!(*store.rows.borrow(), vec![filled()]);
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_values() {
        let mut flow = editing_with(filled());

        let result = flow.submit(&FailingStore).await;

        assert!(matches!(result, Err(ApplyError::Store(StoreError::Transport(_)))));
        assert_eq!(flow.view(), ApplyView::Error);
        assert_eq!(*flow.form(), filled());
    }

    #[tokio::test]
    async fn test_retry_after_failure_then_succeed() {
        let store = RecordingStore::default();
        let mut flow = editing_with(filled());
        flow.submit(&FailingStore).await.unwrap_err();

        flow.retry();
        assert_eq!(flow.view(), ApplyView::Editing);

        flow.submit(&store).await.unwrap();
        assert_eq!(flow.view(), ApplyView::Confirmation);
        assert_eq!(store.rows.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_store() {
        let store = RecordingStore::default();
        let mut flow = ApplyFlow::new();
        flow.open();

        let result = flow.submit(&store).await;

        assert_eq!(result, Err(ApplyError::MissingField(Field::Name)));
        assert!(store.rows.borrow().is_empty());
    }

    #[test]
    fn test_reset_hides_section() {
        let mut flow = editing_with(filled());
        flow.begin_submit().unwrap();
        flow.finish(Ok(()));

        flow.reset();
        assert_eq!(flow.view(), ApplyView::Hidden);
        assert!(flow.open());
        assert!(flow.form().is_blank());
    }

    #[test]
    fn test_finish_ignored_when_not_submitting() {
        let mut flow = editing_with(filled());
        flow.finish(Ok(()));
        assert_eq!(flow.view(), ApplyView::Editing);
        assert_eq!(*flow.form(), filled());
    }

    #[test]
    fn test_field_labels() {
        assert_eq!(Field::SrmEmail.to_string(), "SRM Email ID");
        assert_eq!(Field::SrmEmail.input_type(), "email");
        assert_eq!(Field::Section.input_type(), "text");
    }
}
