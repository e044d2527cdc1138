use crate::scholarship::models::{
    is_available_university, is_known_course, is_known_qualification, ApplicantProfile,
    DocumentKind, DocumentMeta, Documents, Field, FieldErrors, MAX_APPLICANT_AGE,
    MAX_DOCUMENT_BYTES, MIN_APPLICANT_AGE,
};
use crate::utils::is_valid_email;

/// Reads the leading digits the way a number input reports them.
fn parse_age(raw: &str) -> Option<u32> {
    let digits: String = raw.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

pub fn validate_basic_information(profile: &ApplicantProfile) -> FieldErrors {
    let mut errors = FieldErrors::default();

    let full_name = profile.full_name.trim();
    if full_name.is_empty() {
        errors.insert(Field::FullName, "Please enter your full name");
    } else if full_name.chars().count() < 2 {
        errors.insert(Field::FullName, "Full name must be at least 2 characters long");
    }

    let email = profile.email.trim();
    if email.is_empty() {
        errors.insert(Field::Email, "Please enter your email address");
    } else if !is_valid_email(email) {
        errors.insert(Field::Email, "Please enter a valid email address");
    }

    if !is_known_qualification(&profile.qualification) {
        errors.insert(Field::Qualification, "Please select your academic qualification");
    }

    if profile.age.trim().is_empty() {
        errors.insert(Field::Age, "Please enter your age");
    } else {
        match parse_age(&profile.age) {
            None => errors.insert(Field::Age, "Please enter a valid age"),
            Some(age) if age < MIN_APPLICANT_AGE => {
                errors.insert(Field::Age, "Applicants must be 18 years or older")
            }
            Some(age) if age > MAX_APPLICANT_AGE => errors.insert(Field::Age, "Please enter a valid age"),
            Some(_) => {}
        }
    }

    if !is_available_university(&profile.university) {
        errors.insert(Field::University, "Please select your preferred university");
    }

    if !is_known_course(&profile.course) {
        errors.insert(Field::Course, "Please select your preferred course of study");
    }

    if !profile.terms_accepted {
        errors.insert(Field::Terms, "You must accept the terms and conditions to proceed");
    }

    errors
}

/// Checks one picked file before it is attached. Size is checked first.
pub fn validate_document(kind: DocumentKind, meta: &DocumentMeta) -> Result<(), String> {
    if meta.size > MAX_DOCUMENT_BYTES {
        return Err("File size must be less than 5MB".to_string());
    }
    if !kind.accepted_types().contains(&meta.mime.as_str()) {
        return Err(format!("File must be {} format", kind.accepted_label()));
    }
    Ok(())
}

pub fn validate_documents(documents: &Documents) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if documents.qualification.is_none() {
        errors.insert(
            Field::Document(DocumentKind::Qualification),
            "Please upload your academic qualification certificate",
        );
    }
    if documents.passport.is_none() {
        errors.insert(
            Field::Document(DocumentKind::Passport),
            "Please upload your passport photograph",
        );
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_profile() -> ApplicantProfile {
        ApplicantProfile {
            full_name: "Ngozi Okafor".into(),
            email: "ngozi@example.com".into(),
            qualification: "BSc".into(),
            age: "24".into(),
            university: "University of Tulsa".into(),
            course: "Computer Science".into(),
            terms_accepted: true,
        }
    }

    fn meta(mime: &str, size: u64) -> DocumentMeta {
        DocumentMeta { name: "file".into(), size, mime: mime.into(), preview_url: None }
    }

    #[test]
    fn valid_profile_has_no_errors() {
        assert!(validate_basic_information(&valid_profile()).is_empty());
    }

    #[test]
    fn empty_profile_reports_every_field() {
        let errors = validate_basic_information(&ApplicantProfile::default());
        assert_eq!(errors.len(), 7);
        assert_eq!(errors.get(Field::FullName), Some("Please enter your full name"));
        assert_eq!(errors.get(Field::Terms), Some("You must accept the terms and conditions to proceed"));
    }

    #[test]
    fn ages_below_eighteen_are_rejected() {
        for age in 0..18 {
            let profile = ApplicantProfile { age: age.to_string(), ..valid_profile() };
            let errors = validate_basic_information(&profile);
            assert_eq!(errors.get(Field::Age), Some("Applicants must be 18 years or older"));
        }
        let adult = ApplicantProfile { age: "18".into(), ..valid_profile() };
        assert!(validate_basic_information(&adult).is_empty());
    }

    #[test]
    fn non_numeric_and_absurd_ages_are_rejected() {
        for age in ["abc", "-3", "101"] {
            let profile = ApplicantProfile { age: age.into(), ..valid_profile() };
            assert_eq!(
                validate_basic_information(&profile).get(Field::Age),
                Some("Please enter a valid age"),
                "age {:?}",
                age
            );
        }
    }

    #[test]
    fn email_without_at_sign_is_rejected() {
        let profile = ApplicantProfile { email: "ngozi.example.com".into(), ..valid_profile() };
        assert_eq!(
            validate_basic_information(&profile).get(Field::Email),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn short_names_and_unavailable_universities_are_rejected() {
        let profile = ApplicantProfile {
            full_name: " N ".into(),
            university: "Harvard University".into(),
            ..valid_profile()
        };
        let errors = validate_basic_information(&profile);
        assert_eq!(errors.get(Field::FullName), Some("Full name must be at least 2 characters long"));
        assert!(errors.contains(Field::University));
    }

    #[test]
    fn values_outside_the_catalogs_count_as_missing() {
        let profile = ApplicantProfile {
            qualification: "PhD".into(),
            course: "Astrology".into(),
            ..valid_profile()
        };
        let errors = validate_basic_information(&profile);
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.get(Field::Qualification),
            Some("Please select your academic qualification")
        );
        assert_eq!(
            errors.get(Field::Course),
            Some("Please select your preferred course of study")
        );

        let catalog = ApplicantProfile {
            qualification: "HND".into(),
            course: "Nursing".into(),
            ..valid_profile()
        };
        assert!(validate_basic_information(&catalog).is_empty());
    }

    #[test]
    fn qualification_must_be_pdf() {
        let kind = DocumentKind::Qualification;
        assert!(validate_document(kind, &meta("application/pdf", 1024)).is_ok());
        for mime in ["image/png", "image/jpeg", "application/msword", ""] {
            assert_eq!(
                validate_document(kind, &meta(mime, 1024)),
                Err("File must be PDF format".to_string())
            );
        }
    }

    #[test]
    fn passport_must_be_jpeg_or_png() {
        let kind = DocumentKind::Passport;
        assert!(validate_document(kind, &meta("image/jpeg", 1024)).is_ok());
        assert!(validate_document(kind, &meta("image/png", 1024)).is_ok());
        assert_eq!(
            validate_document(kind, &meta("image/gif", 1024)),
            Err("File must be JPG or PNG format".to_string())
        );
    }

    #[test]
    fn oversized_files_are_rejected_before_type_check() {
        let limit = MAX_DOCUMENT_BYTES;
        assert!(validate_document(DocumentKind::Passport, &meta("image/png", limit)).is_ok());
        assert_eq!(
            validate_document(DocumentKind::Passport, &meta("image/gif", limit + 1)),
            Err("File size must be less than 5MB".to_string())
        );
    }

    #[test]
    fn both_documents_are_required() {
        let mut docs = Documents::default();
        assert_eq!(validate_documents(&docs).len(), 2);
        docs.set(DocumentKind::Qualification, Some(meta("application/pdf", 10)));
        let errors = validate_documents(&docs);
        assert_eq!(
            errors.get(Field::Document(DocumentKind::Passport)),
            Some("Please upload your passport photograph")
        );
        docs.set(DocumentKind::Passport, Some(meta("image/png", 10)));
        assert!(validate_documents(&docs).is_empty());
    }
}
