use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

pub const APPLICATION_FEE_NAIRA: u32 = 5_500;
pub const MAX_DOCUMENT_BYTES: u64 = 5 * 1024 * 1024;
pub const MIN_APPLICANT_AGE: u32 = 18;
pub const MAX_APPLICANT_AGE: u32 = 100;

pub const QUALIFICATIONS: &[(&str, &str)] = &[
    ("BSc", "BSc (Bachelor of Science)"),
    ("HND", "HND (Higher National Diploma)"),
    ("BA", "BA (Bachelor of Arts)"),
    ("BEng", "BEng (Bachelor of Engineering)"),
    ("Other", "Other Bachelor's Degree"),
];

pub struct University {
    pub value: &'static str,
    pub label: &'static str,
    pub available: bool,
}

pub const UNIVERSITIES: &[University] = &[
    University { value: "University of Tulsa", label: "The University of Tulsa (Oklahoma USA)", available: true },
    University { value: "Harvard University", label: "Harvard University (Not Available)", available: false },
    University { value: "Stanford University", label: "Stanford University (Not Available)", available: false },
    University { value: "MIT", label: "Massachusetts Institute of Technology (Not Available)", available: false },
    University {
        value: "University of California Berkeley",
        label: "University of California, Berkeley (Not Available)",
        available: false,
    },
];

pub struct CourseGroup {
    pub category: &'static str,
    pub courses: &'static [&'static str],
}

pub const COURSE_GROUPS: &[CourseGroup] = &[
    CourseGroup {
        category: "Engineering & Natural Sciences",
        courses: &[
            "Chemical Engineering",
            "Mechanical Engineering",
            "Electrical Engineering",
            "Computer Science",
            "Cyber Security",
            "Engineering Physics",
            "Applied Mathematics",
            "Biochemistry and Molecular Biology",
            "Geosciences",
            "Physics",
        ],
    },
    CourseGroup {
        category: "Business",
        courses: &[
            "Business Administration (MBA)",
            "Business Analytics",
            "Energy Business",
            "Accounting",
            "Finance",
            "International Business",
        ],
    },
    CourseGroup {
        category: "Arts & Sciences",
        courses: &[
            "English Language Studies",
            "Anthropology",
            "Sociology",
            "History",
            "Environmental Science",
            "Geology and Earth Science",
            "Museum Science and Management",
        ],
    },
    CourseGroup {
        category: "Psychology & Behavioral Sciences",
        courses: &["Clinical Psychology", "Industrial-Organizational Psychology"],
    },
    CourseGroup {
        category: "Health Sciences",
        courses: &["Athletic Training", "Speech-Language Pathology", "Nursing"],
    },
    CourseGroup {
        category: "Education & Fine Arts",
        courses: &["Mathematics Teacher Education", "Music Teacher Education", "Fine Arts"],
    },
];

pub fn is_available_university(value: &str) -> bool {
    UNIVERSITIES.iter().any(|u| u.available && u.value == value)
}

pub fn is_known_qualification(value: &str) -> bool {
    QUALIFICATIONS.iter().any(|(v, _)| *v == value)
}

pub fn is_known_course(value: &str) -> bool {
    COURSE_GROUPS.iter().any(|g| g.courses.contains(&value))
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplicantProfile {
    pub full_name: String,
    pub email: String,
    pub qualification: String,
    /// Kept as typed so that partial input survives re-renders.
    pub age: String,
    pub university: String,
    pub course: String,
    pub terms_accepted: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DocumentKind {
    Qualification,
    Passport,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 2] = [DocumentKind::Qualification, DocumentKind::Passport];

    pub fn accepted_types(self) -> &'static [&'static str] {
        match self {
            DocumentKind::Qualification => &["application/pdf"],
            DocumentKind::Passport => &["image/jpeg", "image/png"],
        }
    }

    pub fn accepted_label(self) -> &'static str {
        match self {
            DocumentKind::Qualification => "PDF",
            DocumentKind::Passport => "JPG or PNG",
        }
    }

    /// Value for the `accept` attribute of the file input.
    pub fn accept_attr(self) -> &'static str {
        match self {
            DocumentKind::Qualification => ".pdf,application/pdf",
            DocumentKind::Passport => ".jpg,.jpeg,.png,image/jpeg,image/png",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            DocumentKind::Qualification => "Academic Qualification Certificate",
            DocumentKind::Passport => "Passport Photograph",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DocumentKind::Qualification => "Upload your degree certificate or HND certificate",
            DocumentKind::Passport => "Upload a recent passport-sized photograph",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DocumentMeta {
    pub name: String,
    pub size: u64,
    pub mime: String,
    /// Object URL for image previews, revoked when the document is removed.
    pub preview_url: Option<String>,
}

impl DocumentMeta {
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Documents {
    pub qualification: Option<DocumentMeta>,
    pub passport: Option<DocumentMeta>,
}

impl Documents {
    pub fn get(&self, kind: DocumentKind) -> Option<&DocumentMeta> {
        match kind {
            DocumentKind::Qualification => self.qualification.as_ref(),
            DocumentKind::Passport => self.passport.as_ref(),
        }
    }

    /// Stores `meta` for `kind`, returning whatever it replaced.
    pub fn set(&mut self, kind: DocumentKind, meta: Option<DocumentMeta>) -> Option<DocumentMeta> {
        let slot = match kind {
            DocumentKind::Qualification => &mut self.qualification,
            DocumentKind::Passport => &mut self.passport,
        };
        std::mem::replace(slot, meta)
    }

    pub fn is_complete(&self) -> bool {
        self.qualification.is_some() && self.passport.is_some()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplicationForm {
    pub profile: ApplicantProfile,
    pub documents: Documents,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Email,
    Qualification,
    Age,
    University,
    Course,
    Terms,
    Document(DocumentKind),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct RegisterData {
    pub authorization_url: String,
    #[serde(default)]
    pub reference: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct RegisterResponse {
    pub status: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<RegisterData>,
}

/// The payment backend has returned both numeric and string amounts.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Number(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            Amount::Number(n) => write!(f, "{:.2}", n),
            Amount::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct PaymentStatusData {
    pub status: String,
    #[serde(default)]
    pub amount: Option<Amount>,
    #[serde(default)]
    pub paid_at: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct PaymentStatusResponse {
    pub status: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<PaymentStatusData>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Success,
    Failed,
}

impl PaymentStatus {
    pub fn label(self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Success => "success",
            PaymentStatus::Failed => "failed",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PaymentOutcome {
    pub reference: String,
    pub amount: Option<Amount>,
    pub status: PaymentStatus,
    pub paid_at: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl PaymentOutcome {
    pub fn pending(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            amount: None,
            status: PaymentStatus::Pending,
            paid_at: None,
            email: None,
            message: None,
        }
    }
}

pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    const UNITS: [&str; 3] = ["Bytes", "KB", "MB"];
    let mut exponent = 0;
    let mut value = bytes as f64;
    while value >= 1024.0 && exponent < UNITS.len() - 1 {
        value /= 1024.0;
        exponent += 1;
    }
    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_sizes_are_human_readable() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(MAX_DOCUMENT_BYTES), "5 MB");
        assert_eq!(format_file_size(2_621_440), "2.5 MB");
    }

    #[test]
    fn only_tulsa_is_open_for_applications() {
        assert!(is_available_university("University of Tulsa"));
        assert!(!is_available_university("MIT"));
        assert!(!is_available_university("Unknown College"));
    }

    #[test]
    fn replacing_a_document_returns_the_previous_one() {
        let mut docs = Documents::default();
        let first = DocumentMeta { name: "a.png".into(), size: 10, mime: "image/png".into(), preview_url: Some("blob:1".into()) };
        assert_eq!(docs.set(DocumentKind::Passport, Some(first.clone())), None);
        assert_eq!(docs.set(DocumentKind::Passport, None), Some(first));
        assert!(docs.get(DocumentKind::Passport).is_none());
    }

    #[test]
    fn payment_amount_accepts_numbers_and_strings() {
        let numeric: PaymentStatusData =
            serde_json::from_str(r#"{"status":"completed","amount":5500}"#).unwrap();
        assert_eq!(numeric.amount.unwrap().to_string(), "5500");
        let text: PaymentStatusData =
            serde_json::from_str(r#"{"status":"completed","amount":"5500.00"}"#).unwrap();
        assert_eq!(text.amount.unwrap().to_string(), "5500.00");
    }

    #[test]
    fn register_response_tolerates_missing_data() {
        let resp: RegisterResponse =
            serde_json::from_str(r#"{"status":false,"message":"Email already used"}"#).unwrap();
        assert!(!resp.status);
        assert_eq!(resp.data, None);
        assert_eq!(resp.message.as_deref(), Some("Email already used"));
    }
}
