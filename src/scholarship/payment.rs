use std::cell::Cell;

use chrono::DateTime;

use crate::error::ApiError;
use crate::scholarship::models::{PaymentOutcome, PaymentStatus, PaymentStatusResponse};

pub const VERIFICATION_FAILED: &str = "Payment verification failed";
pub const STATUS_UNREACHABLE: &str = "Failed to verify payment status";

/// Query parameters the checkout provider appends on its way back, in order of preference.
const REFERENCE_PARAMS: [&str; 2] = ["trxref", "reference"];

/// Extracts the transaction reference from a `location.search` string.
pub fn reference_from_query(query: &str) -> Option<String> {
    let query = query.trim_start_matches('?');
    let pairs: Vec<(&str, &str)> = query
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .collect();

    REFERENCE_PARAMS.iter().find_map(|wanted| {
        pairs
            .iter()
            .filter(|(key, _)| key == wanted)
            .find_map(|(_, value)| {
                let decoded = urlencoding::decode(&value.replace('+', " "))
                    .map(|v| v.into_owned())
                    .unwrap_or_else(|_| value.to_string());
                let decoded = decoded.trim().to_string();
                (!decoded.is_empty()).then_some(decoded)
            })
    })
}

/// Lets verification run once per page load even when the mount effect fires twice.
#[derive(Debug, Default)]
pub struct CallbackGuard {
    claimed: Cell<bool>,
}

impl CallbackGuard {
    pub fn claim(&self) -> bool {
        !self.claimed.replace(true)
    }

    #[cfg(test)]
    pub fn is_claimed(&self) -> bool {
        self.claimed.get()
    }
}

pub fn outcome_from_status(
    reference: &str,
    result: Result<PaymentStatusResponse, ApiError>,
) -> PaymentOutcome {
    let mut outcome = PaymentOutcome::pending(reference);
    match result {
        Ok(response) => match response.data {
            Some(data) if response.status && data.status == "completed" => {
                outcome.status = PaymentStatus::Success;
                outcome.amount = data.amount;
                outcome.paid_at = data.paid_at;
                outcome.email = data.email;
            }
            _ => {
                outcome.status = PaymentStatus::Failed;
                outcome.message = Some(
                    response
                        .message
                        .filter(|m| !m.is_empty())
                        .unwrap_or_else(|| VERIFICATION_FAILED.to_string()),
                );
            }
        },
        Err(err) => {
            outcome.status = PaymentStatus::Failed;
            outcome.message = Some(match err {
                ApiError::Rejected { message, .. } if !message.is_empty() => message,
                _ => STATUS_UNREACHABLE.to_string(),
            });
        }
    }
    outcome
}

/// Renders whole naira with thousands separators, e.g. `₦5,500.00`.
pub fn format_naira(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("₦{}.00", grouped)
}

/// Human form of the provider's RFC 3339 timestamp. Unparseable values are shown as sent.
pub fn format_paid_at(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(at) => at.format("%d %b %Y, %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scholarship::models::{Amount, PaymentStatusData};

    fn response(status: bool, data_status: Option<&str>, message: Option<&str>) -> PaymentStatusResponse {
        PaymentStatusResponse {
            status,
            message: message.map(str::to_string),
            data: data_status.map(|s| PaymentStatusData {
                status: s.to_string(),
                amount: Some(Amount::Number(5500.0)),
                paid_at: Some("2025-03-04T10:15:00Z".into()),
                email: Some("ada@example.com".into()),
            }),
        }
    }

    #[test]
    fn trxref_wins_over_reference() {
        assert_eq!(
            reference_from_query("?reference=REF-2&trxref=REF-1"),
            Some("REF-1".to_string())
        );
        assert_eq!(reference_from_query("?reference=REF-2"), Some("REF-2".to_string()));
    }

    #[test]
    fn empty_or_missing_references_are_ignored() {
        assert_eq!(reference_from_query(""), None);
        assert_eq!(reference_from_query("?trxref=&reference=REF-9"), Some("REF-9".to_string()));
        assert_eq!(reference_from_query("?trxref&foo=bar"), None);
    }

    #[test]
    fn references_are_percent_decoded() {
        assert_eq!(reference_from_query("?trxref=AB%2F12"), Some("AB/12".to_string()));
    }

    #[test]
    fn duplicate_callback_is_processed_once() {
        let guard = CallbackGuard::default();
        let query = "?trxref=T1&reference=T1";
        let mut runs = 0;
        for _ in 0..2 {
            if reference_from_query(query).is_some() && guard.claim() {
                runs += 1;
            }
        }
        assert_eq!(runs, 1);
        assert!(guard.is_claimed());
    }

    #[test]
    fn completed_status_is_success() {
        let outcome = outcome_from_status("T1", Ok(response(true, Some("completed"), None)));
        assert_eq!(outcome.status, PaymentStatus::Success);
        assert_eq!(outcome.reference, "T1");
        assert_eq!(outcome.email.as_deref(), Some("ada@example.com"));
        assert_eq!(outcome.message, None);
    }

    #[test]
    fn other_statuses_fail_with_server_message() {
        let outcome =
            outcome_from_status("T1", Ok(response(true, Some("abandoned"), Some("Payment abandoned"))));
        assert_eq!(outcome.status, PaymentStatus::Failed);
        assert_eq!(outcome.message.as_deref(), Some("Payment abandoned"));

        let outcome = outcome_from_status("T1", Ok(response(false, None, None)));
        assert_eq!(outcome.message.as_deref(), Some(VERIFICATION_FAILED));
    }

    #[test]
    fn transport_errors_fail_with_fixed_message() {
        let outcome = outcome_from_status("T1", Err(ApiError::Network("offline".into())));
        assert_eq!(outcome.status, PaymentStatus::Failed);
        assert_eq!(outcome.message.as_deref(), Some(STATUS_UNREACHABLE));

        let outcome = outcome_from_status(
            "T1",
            Err(ApiError::Rejected { status: 404, message: "Transaction not found".into() }),
        );
        assert_eq!(outcome.message.as_deref(), Some("Transaction not found"));
    }

    #[test]
    fn naira_amounts_are_grouped() {
        assert_eq!(format_naira(5_500), "₦5,500.00");
        assert_eq!(format_naira(950), "₦950.00");
        assert_eq!(format_naira(1_250_000), "₦1,250,000.00");
    }

    #[test]
    fn paid_at_is_humanised() {
        assert_eq!(format_paid_at("2025-03-04T10:15:00Z"), "04 Mar 2025, 10:15");
        assert_eq!(format_paid_at("yesterday"), "yesterday");
    }
}
