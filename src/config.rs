use log::error;

pub const COMPANY_NAME: &str = "Automatons mobility and software services (AUTOSAAS)";
pub const SUPPORT_EMAIL: &str = "autosaasinfo@gmail.com";
pub const SUPPORT_PHONE: &str = "+2348159450874";
pub const OFFICE_ADDRESS: &str = "1234 Main Street, Nairobi, Kenya";
pub const OFFICE_PHONE: &str = "+254 712 345678";

#[cfg(debug_assertions)]
pub fn get_backend_url() -> Option<&'static str> {
    Some(option_env!("API_URL").unwrap_or("http://localhost:8000")) // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> Option<&'static str> {
    option_env!("API_URL").filter(|url| !url.is_empty())
}

pub fn get_form_relay_url() -> Option<&'static str> {
    option_env!("FORM_RELAY_URL").filter(|url| !url.is_empty())
}

/// Logs every endpoint the build was compiled without. The app keeps running,
/// requests that need a missing endpoint fail with `ApiError::NotConfigured`.
pub fn report_missing() {
    if get_form_relay_url().is_none() {
        error!("Missing FORM_RELAY_URL environment variable!");
    }
    if get_backend_url().is_none() {
        error!("Missing API_URL environment variable!");
    }
}
