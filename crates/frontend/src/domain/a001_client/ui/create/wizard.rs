//! Two-step "new client" wizard: personal details, then contact details.

use contracts::domain::a001_client::{ClientDto, ClientField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    PersonalDetails,
    ContactDetails,
}

impl WizardStep {
    pub const ALL: [WizardStep; 2] = [WizardStep::PersonalDetails, WizardStep::ContactDetails];

    pub fn index(self) -> usize {
        match self {
            WizardStep::PersonalDetails => 0,
            WizardStep::ContactDetails => 1,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::PersonalDetails => "Personal Details",
            WizardStep::ContactDetails => "Contact Details",
        }
    }

    /// Form fields editable on this step.
    pub fn fields(self) -> [ClientField; 2] {
        match self {
            WizardStep::PersonalDetails => [ClientField::FirstName, ClientField::LastName],
            WizardStep::ContactDetails => [ClientField::Email, ClientField::PhoneNumber],
        }
    }

    pub fn primary_label(self) -> &'static str {
        match self {
            WizardStep::PersonalDetails => "Continue",
            WizardStep::ContactDetails => "Create Client",
        }
    }
}

/// What the caller has to do after the primary button was pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimaryOutcome {
    /// Moved to the next step; nothing to send.
    Advanced,
    /// Send this form to the API; `session` identifies the dialog session it came from.
    Submit { form: ClientDto, session: u64 },
    /// A submission is already in flight.
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateClientWizard {
    pub step: WizardStep,
    pub form: ClientDto,
    pub submitting: bool,
    /// Bumped on every open; request completions from older sessions are ignored.
    pub session: u64,
}

impl CreateClientWizard {
    /// Start a new dialog session: step 0, empty form.
    pub fn open(&mut self) {
        *self = Self {
            session: self.session.wrapping_add(1),
            ..Self::default()
        };
    }

    pub fn set_field(&mut self, field: ClientField, value: String) {
        if !self.submitting {
            self.form.set(field, value);
        }
    }

    pub fn primary(&mut self) -> PrimaryOutcome {
        match self.step {
            WizardStep::PersonalDetails => {
                self.step = WizardStep::ContactDetails;
                PrimaryOutcome::Advanced
            }
            WizardStep::ContactDetails if self.submitting => PrimaryOutcome::Ignored,
            WizardStep::ContactDetails => {
                self.submitting = true;
                PrimaryOutcome::Submit {
                    form: self.form.clone(),
                    session: self.session,
                }
            }
        }
    }

    pub fn back(&mut self) {
        if !self.back_disabled() {
            self.step = WizardStep::PersonalDetails;
        }
    }

    pub fn back_disabled(&self) -> bool {
        self.step == WizardStep::PersonalDetails || self.submitting
    }

    /// Reset after a successful request from `session`.
    ///
    /// Returns false, leaving the wizard alone, when the dialog was reopened meanwhile.
    pub fn submit_succeeded(&mut self, session: u64) -> bool {
        if session != self.session {
            return false;
        }
        self.open();
        true
    }

    /// Keep the step and form so the user can retry.
    pub fn submit_failed(&mut self, session: u64) {
        if session == self.session {
            self.submitting = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CreateClientWizard {
        let mut wizard = CreateClientWizard::default();
        wizard.open();
        wizard.set_field(ClientField::FirstName, "Ann".to_string());
        wizard.set_field(ClientField::LastName, "Lee".to_string());
        wizard
    }

    #[test]
    fn test_open_starts_at_personal_details() {
        let mut wizard = CreateClientWizard {
            step: WizardStep::ContactDetails,
            form: ClientDto {
                first_name: "stale".to_string(),
                ..ClientDto::default()
            },
            submitting: false,
            session: 4,
        };
        wizard.open();
        assert_eq!(wizard.step, WizardStep::PersonalDetails);
        assert_eq!(wizard.step.index(), 0);
        assert!(wizard.back_disabled());
        assert_eq!(wizard.form, ClientDto::default());
        assert_eq!(wizard.step.primary_label(), "Continue");
    }

    #[test]
    fn test_continue_advances_without_submitting() {
        let mut wizard = filled();
        assert_eq!(wizard.primary(), PrimaryOutcome::Advanced);
        assert_eq!(wizard.step, WizardStep::ContactDetails);
        assert!(!wizard.submitting);
        assert!(!wizard.back_disabled());
        assert_eq!(wizard.step.primary_label(), "Create Client");
    }

    #[test]
    fn test_back_returns_to_personal_details() {
        let mut wizard = filled();
        wizard.primary();
        wizard.back();
        assert_eq!(wizard.step, WizardStep::PersonalDetails);
        assert_eq!(wizard.form.first_name, "Ann");
        wizard.back();
        assert_eq!(wizard.step, WizardStep::PersonalDetails);
    }

    #[test]
    fn test_primary_on_contact_details_submits_once() {
        let mut wizard = filled();
        wizard.primary();
        wizard.set_field(ClientField::Email, "a@x.com".to_string());
        wizard.set_field(ClientField::PhoneNumber, "555".to_string());

        let expected = ClientDto {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "a@x.com".to_string(),
            phone_number: "555".to_string(),
        };
        assert_eq!(
            wizard.primary(),
            PrimaryOutcome::Submit {
                form: expected,
                session: wizard.session,
            }
        );
        assert!(wizard.submitting);
        assert_eq!(wizard.primary(), PrimaryOutcome::Ignored);
        assert!(wizard.back_disabled());
    }

    #[test]
    fn test_success_resets_form() {
        let mut wizard = filled();
        wizard.primary();
        wizard.primary();
        assert!(wizard.submit_succeeded(wizard.session));
        assert_eq!(wizard.step, WizardStep::PersonalDetails);
        assert_eq!(wizard.form.first_name, "");
        assert_eq!(wizard.form.last_name, "");
        assert_eq!(wizard.form.email, "");
        assert_eq!(wizard.form.phone_number, "");
        assert!(!wizard.submitting);
    }

    #[test]
    fn test_failure_keeps_form_for_retry() {
        let mut wizard = filled();
        wizard.primary();
        wizard.primary();
        wizard.submit_failed(wizard.session);
        assert_eq!(wizard.step, WizardStep::ContactDetails);
        assert_eq!(wizard.form.first_name, "Ann");
        assert!(matches!(wizard.primary(), PrimaryOutcome::Submit { .. }));
    }

    #[test]
    fn test_reopen_during_submission_starts_fresh() {
        let mut wizard = filled();
        wizard.primary();
        let PrimaryOutcome::Submit { session, .. } = wizard.primary() else {
            panic!("expected a submission");
        };

        wizard.open();
        assert_eq!(wizard.step, WizardStep::PersonalDetails);
        assert_eq!(wizard.form, ClientDto::default());
        assert!(!wizard.submitting);

        // The earlier request finishing must not touch the new session.
        wizard.set_field(ClientField::FirstName, "Bob".to_string());
        wizard.primary();
        assert!(!wizard.submit_succeeded(session));
        wizard.submit_failed(session);
        assert_eq!(wizard.step, WizardStep::ContactDetails);
        assert_eq!(wizard.form.first_name, "Bob");
        assert!(matches!(wizard.primary(), PrimaryOutcome::Submit { .. }));
    }

    #[test]
    fn test_step_fields() {
        assert_eq!(
            WizardStep::PersonalDetails.fields(),
            [ClientField::FirstName, ClientField::LastName]
        );
        assert_eq!(
            WizardStep::ContactDetails.fields(),
            [ClientField::Email, ClientField::PhoneNumber]
        );
    }
}
