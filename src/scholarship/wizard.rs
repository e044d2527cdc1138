use crate::scholarship::models::{ApplicationForm, FieldErrors};
use crate::scholarship::validation::{validate_basic_information, validate_documents};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    BasicInformation,
    DocumentUpload,
    Payment,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] =
        [WizardStep::BasicInformation, WizardStep::DocumentUpload, WizardStep::Payment];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::BasicInformation => "Basic Information",
            WizardStep::DocumentUpload => "Document Upload",
            WizardStep::Payment => "Payment",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            WizardStep::BasicInformation => "Personal details",
            WizardStep::DocumentUpload => "Required documents",
            WizardStep::Payment => "Application fee",
        }
    }

    pub fn next(self) -> Option<WizardStep> {
        WizardStep::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<WizardStep> {
        self.index().checked_sub(1).map(|i| WizardStep::ALL[i])
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    /// Step-local validation. The payment step has nothing to validate.
    pub fn validate(self, form: &ApplicationForm) -> Result<(), FieldErrors> {
        match self {
            WizardStep::BasicInformation => validate_basic_information(&form.profile).into_result(),
            WizardStep::DocumentUpload => validate_documents(&form.documents).into_result(),
            WizardStep::Payment => Ok(()),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Advance {
    Moved(WizardStep),
    Blocked(FieldErrors),
    Submit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wizard {
    current: WizardStep,
}

impl Default for Wizard {
    fn default() -> Self {
        Self { current: WizardStep::BasicInformation }
    }
}

impl Wizard {
    pub fn current(&self) -> WizardStep {
        self.current
    }

    pub fn advance(&mut self, form: &ApplicationForm) -> Advance {
        if self.current.is_last() {
            return Advance::Submit;
        }
        if let Err(errors) = self.current.validate(form) {
            return Advance::Blocked(errors);
        }
        if let Some(next) = self.current.next() {
            self.current = next;
        }
        Advance::Moved(self.current)
    }

    pub fn back(&mut self) -> bool {
        match self.current.previous() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    /// Jumps to an already visited step. Forward jumps are refused.
    pub fn jump_to(&mut self, step: WizardStep) -> bool {
        if step <= self.current {
            self.current = step;
            true
        } else {
            false
        }
    }

    pub fn is_accessible(&self, step: WizardStep) -> bool {
        step <= self.current
    }

    pub fn is_completed(step: WizardStep, form: &ApplicationForm) -> bool {
        step != WizardStep::Payment && step.validate(form).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scholarship::models::{
        ApplicantProfile, DocumentKind, DocumentMeta, Documents, Field,
    };

    fn valid_form() -> ApplicationForm {
        let doc = |mime: &str| DocumentMeta {
            name: "doc".into(),
            size: 2048,
            mime: mime.into(),
            preview_url: None,
        };
        ApplicationForm {
            profile: ApplicantProfile {
                full_name: "Emeka Obi".into(),
                email: "emeka@example.com".into(),
                qualification: "HND".into(),
                age: "27".into(),
                university: "University of Tulsa".into(),
                course: "Finance".into(),
                terms_accepted: true,
            },
            documents: Documents {
                qualification: Some(doc("application/pdf")),
                passport: Some(doc("image/jpeg")),
            },
        }
    }

    #[test]
    fn valid_first_step_advances() {
        let mut wizard = Wizard::default();
        assert_eq!(wizard.advance(&valid_form()), Advance::Moved(WizardStep::DocumentUpload));
        assert_eq!(wizard.current(), WizardStep::DocumentUpload);
    }

    #[test]
    fn invalid_step_blocks_with_field_errors() {
        let mut wizard = Wizard::default();
        let mut form = valid_form();
        form.profile.age = "16".into();
        match wizard.advance(&form) {
            Advance::Blocked(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors.contains(Field::Age));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(wizard.current(), WizardStep::BasicInformation);
    }

    #[test]
    fn back_navigation_keeps_progress_reachable() {
        let form = valid_form();
        let mut wizard = Wizard::default();
        wizard.advance(&form);
        assert!(wizard.back());
        assert_eq!(wizard.current(), WizardStep::BasicInformation);
        assert!(!wizard.back());
        // the same data advances again without re-entry
        assert_eq!(wizard.advance(&form), Advance::Moved(WizardStep::DocumentUpload));
        assert_eq!(wizard.advance(&form), Advance::Moved(WizardStep::Payment));
    }

    #[test]
    fn missing_documents_block_second_step() {
        let mut form = valid_form();
        form.documents.set(DocumentKind::Passport, None);
        let mut wizard = Wizard::default();
        wizard.advance(&form);
        match wizard.advance(&form) {
            Advance::Blocked(errors) => {
                assert!(errors.contains(Field::Document(DocumentKind::Passport)))
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn last_step_requests_submission() {
        let form = valid_form();
        let mut wizard = Wizard::default();
        wizard.advance(&form);
        wizard.advance(&form);
        assert_eq!(wizard.advance(&form), Advance::Submit);
        assert_eq!(wizard.current(), WizardStep::Payment);
    }

    #[test]
    fn jumps_only_go_backwards() {
        let form = valid_form();
        let mut wizard = Wizard::default();
        assert!(!wizard.jump_to(WizardStep::Payment));
        assert!(!wizard.is_accessible(WizardStep::DocumentUpload));
        wizard.advance(&form);
        wizard.advance(&form);
        assert!(wizard.jump_to(WizardStep::BasicInformation));
        assert!(wizard.is_accessible(WizardStep::BasicInformation));
        assert!(!wizard.jump_to(WizardStep::DocumentUpload));
    }

    #[test]
    fn payment_step_is_never_completed() {
        let form = valid_form();
        assert!(Wizard::is_completed(WizardStep::BasicInformation, &form));
        assert!(Wizard::is_completed(WizardStep::DocumentUpload, &form));
        assert!(!Wizard::is_completed(WizardStep::Payment, &form));
        assert!(!Wizard::is_completed(WizardStep::BasicInformation, &ApplicationForm::default()));
    }

    #[test]
    fn step_order_and_labels() {
        assert_eq!(WizardStep::BasicInformation.next(), Some(WizardStep::DocumentUpload));
        assert_eq!(WizardStep::Payment.next(), None);
        assert_eq!(WizardStep::BasicInformation.previous(), None);
        assert_eq!(WizardStep::Payment.title(), "Payment");
    }
}
