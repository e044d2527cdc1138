use std::collections::HashMap;

use gloo_net::http::{Request, Response};
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use web_sys::{File, FormData};

use crate::chat::lead::Inquiry;
use crate::config;
use crate::error::ApiError;
use crate::scholarship::models::{
    ApplicationForm, DocumentKind, PaymentStatusResponse, RegisterResponse,
};
use crate::utils::{clear_stored_token, stored_token};

fn backend_url(path: &str) -> Result<String, ApiError> {
    let base = config::get_backend_url().ok_or(ApiError::NotConfigured("API_URL"))?;
    Ok(format!("{}{}", base.trim_end_matches('/'), path))
}

fn authorize(request: Request) -> Request {
    match stored_token() {
        Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
        None => request,
    }
}

/// Turns a non-2xx response into `ApiError::Rejected`, pulling `message`
/// out of a JSON body when there is one.
async fn rejected(response: Response) -> ApiError {
    let status = response.status();
    if status == 401 {
        warn!("Session expired. Please log in again.");
        clear_stored_token();
    }
    let message = response
        .text()
        .await
        .ok()
        .and_then(|body| serde_json::from_str::<Value>(&body).ok())
        .and_then(|body| body.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_default();
    ApiError::Rejected { status, message }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(rejected(response).await);
    }
    Ok(response.json::<T>().await?)
}

/// Forwards an inquiry to the form relay. Its response body is not inspected.
pub async fn relay_inquiry(inquiry: &Inquiry) -> Result<(), ApiError> {
    let url = config::get_form_relay_url().ok_or(ApiError::NotConfigured("FORM_RELAY_URL"))?;
    let response = Request::post(url)
        .header("Content-Type", "application/json")
        .header("Accept", "application/json")
        .json(&inquiry.payload())?
        .send()
        .await?;
    if !response.ok() {
        return Err(rejected(response).await);
    }
    info!("Inquiry relayed ({})", inquiry.source.subject());
    Ok(())
}

/// POST /register as multipart form data. Documents go out certificate first.
pub async fn submit_application(
    form: &ApplicationForm,
    files: &HashMap<DocumentKind, File>,
) -> Result<RegisterResponse, ApiError> {
    let url = backend_url("/register")?;
    let profile = &form.profile;

    let body = FormData::new()?;
    body.append_with_str("full_name", profile.full_name.trim())?;
    body.append_with_str("email", profile.email.trim())?;
    body.append_with_str("qualification", &profile.qualification)?;
    body.append_with_str("age", profile.age.trim())?;
    body.append_with_str("university", &profile.university)?;
    body.append_with_str("course", &profile.course)?;
    body.append_with_str("terms", if profile.terms_accepted { "yes" } else { "false" })?;
    for kind in DocumentKind::ALL {
        if let Some(file) = files.get(&kind) {
            body.append_with_blob_and_filename("documents[]", file, &file.name())?;
        }
    }

    // no Content-Type header: the browser adds the multipart boundary itself
    let response = authorize(Request::post(&url)).body(body).send().await?;
    read_json(response).await
}

pub async fn payment_callback(reference: &str) -> Result<Value, ApiError> {
    let url = backend_url("/payment/callback")?;
    let response = authorize(Request::post(&url))
        .header("Content-Type", "application/json")
        .json(&json!({ "reference": reference }))?
        .send()
        .await?;
    read_json(response).await
}

pub async fn payment_status(reference: &str) -> Result<PaymentStatusResponse, ApiError> {
    let url = backend_url(&format!("/payment/status/{}", urlencoding::encode(reference)))?;
    let response = authorize(Request::get(&url))
        .header("Content-Type", "application/json")
        .send()
        .await?;
    read_json(response).await
}
