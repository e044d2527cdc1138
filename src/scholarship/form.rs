use std::collections::HashMap;

use gloo_timers::future::TimeoutFuture;
use log::{error, info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, File};
use yew::prelude::*;

use crate::api;
use crate::scholarship::basic_info::BasicInformation;
use crate::scholarship::documents::{describe_file, release_preview, DocumentUpload};
use crate::scholarship::models::{
    ApplicantProfile, ApplicationForm, DocumentKind, Field, FieldErrors, RegisterResponse,
};
use crate::scholarship::review::ReviewAndPay;
use crate::scholarship::wizard::{Advance, Wizard, WizardStep};

pub const SUBMITTED_MESSAGE: &str = "Application submitted successfully! Redirecting to payment...";
pub const REJECTED_MESSAGE: &str = "Failed to submit application";
pub const SUBMIT_FALLBACK: &str = "Failed to submit application. Please try again or contact support.";

const REDIRECT_DELAY_MS: u32 = 2_000;

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitStatus {
    Success(String),
    Error(String),
}

/// Where to send the applicant after `/register` answered, or why not.
pub fn checkout_url(response: RegisterResponse) -> Result<String, String> {
    match response.data {
        Some(data) if response.status && !data.authorization_url.is_empty() => Ok(data.authorization_url),
        _ => Err(response
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| REJECTED_MESSAGE.to_string())),
    }
}

#[function_component]
pub fn ScholarshipForm() -> Html {
    let wizard = use_state(Wizard::default);
    let form = use_state(ApplicationForm::default);
    let errors = use_state(FieldErrors::default);
    let files = use_mut_ref(HashMap::<DocumentKind, File>::new);
    let submitting = use_state(|| false);
    let status = use_state(|| None::<SubmitStatus>);

    let on_profile_change = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |(field, profile): (Field, ApplicantProfile)| {
            let mut next = (*form).clone();
            next.profile = profile;
            form.set(next);
            if errors.contains(field) {
                let mut cleared = (*errors).clone();
                cleared.remove(field);
                errors.set(cleared);
            }
        })
    };

    let on_pick = {
        let form = form.clone();
        let errors = errors.clone();
        let files = files.clone();
        Callback::from(move |(kind, file): (DocumentKind, File)| {
            let field = Field::Document(kind);
            let mut next_errors = (*errors).clone();
            match describe_file(kind, &file) {
                Err(reason) => {
                    next_errors.insert(field, reason);
                    errors.set(next_errors);
                }
                Ok(meta) => {
                    let mut next = (*form).clone();
                    if let Some(old) = next.documents.set(kind, Some(meta)) {
                        release_preview(&old);
                    }
                    files.borrow_mut().insert(kind, file);
                    form.set(next);
                    next_errors.remove(field);
                    errors.set(next_errors);
                }
            }
        })
    };

    let on_remove = {
        let form = form.clone();
        let files = files.clone();
        Callback::from(move |kind: DocumentKind| {
            let mut next = (*form).clone();
            if let Some(old) = next.documents.set(kind, None) {
                release_preview(&old);
            }
            files.borrow_mut().remove(&kind);
            form.set(next);
        })
    };

    let submit = {
        let form = form.clone();
        let files = files.clone();
        let submitting = submitting.clone();
        let status = status.clone();
        move || {
            let form = (*form).clone();
            let files = files.borrow().clone();
            let submitting = submitting.clone();
            let status = status.clone();
            submitting.set(true);
            status.set(None);
            spawn_local(async move {
                let result = api::submit_application(&form, &files).await;
                submitting.set(false);
                match result {
                    Ok(response) => match checkout_url(response) {
                        Ok(url) => {
                            info!("Application registered, redirecting to checkout");
                            status.set(Some(SubmitStatus::Success(SUBMITTED_MESSAGE.to_string())));
                            TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                            if let Some(window) = window() {
                                if window.location().set_href(&url).is_err() {
                                    error!("Could not redirect to {}", url);
                                }
                            }
                        }
                        Err(message) => {
                            warn!("Application rejected: {}", message);
                            status.set(Some(SubmitStatus::Error(message)));
                        }
                    },
                    Err(e) => {
                        error!("Application submission error: {}", e);
                        status.set(Some(SubmitStatus::Error(e.user_message(SUBMIT_FALLBACK))));
                    }
                }
            });
        }
    };

    let on_next = {
        let wizard = wizard.clone();
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *wizard;
            match next.advance(&form) {
                Advance::Moved(_) => {
                    errors.set(FieldErrors::default());
                    wizard.set(next);
                }
                Advance::Blocked(found) => errors.set(found),
                Advance::Submit => submit(),
            }
        })
    };

    let on_previous = {
        let wizard = wizard.clone();
        let errors = errors.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *wizard;
            if next.back() {
                errors.set(FieldErrors::default());
                wizard.set(next);
            }
        })
    };

    let current = wizard.current();
    let step_indicator = WizardStep::ALL.iter().map(|step| {
        let step = *step;
        let active = step == current;
        let completed = Wizard::is_completed(step, &form);
        let accessible = wizard.is_accessible(step);
        let onclick = {
            let wizard = wizard.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = *wizard;
                if next.jump_to(step) {
                    wizard.set(next);
                }
            })
        };
        let class = classes!(
            "step-button",
            active.then(|| "active"),
            (!active && completed).then(|| "completed"),
            (!accessible).then(|| "locked")
        );
        html! {
            <>
                <button {class} {onclick} disabled={!accessible}>
                    <span class="step-badge">
                        { if completed { "✓".to_string() } else { (step.index() + 1).to_string() } }
                    </span>
                    <span class="step-text">
                        <span class="step-title">{step.title()}</span>
                        <span class="step-description">{step.description()}</span>
                    </span>
                </button>
                if !step.is_last() {
                    <div class={classes!("step-connector", completed.then(|| "done"))}></div>
                }
            </>
        }
    });

    let step_content = match current {
        WizardStep::BasicInformation => html! {
            <BasicInformation
                profile={form.profile.clone()}
                errors={(*errors).clone()}
                on_change={on_profile_change}
            />
        },
        WizardStep::DocumentUpload => html! {
            <DocumentUpload
                documents={form.documents.clone()}
                errors={(*errors).clone()}
                {on_pick}
                {on_remove}
            />
        },
        WizardStep::Payment => html! { <ReviewAndPay form={(*form).clone()} /> },
    };

    let succeeded = matches!(*status, Some(SubmitStatus::Success(_)));

    html! {
        <div class="scholarship-form">
            <div class="form-card">
                <div class="form-title">
                    <h2>{"Scholarship Application"}</h2>
                    <p>{"Complete all steps to submit your application"}</p>
                </div>

                <div class="step-indicator">
                    { for step_indicator }
                </div>

                {
                    match &*status {
                        Some(SubmitStatus::Success(message)) => html! {
                            <div class="submit-status success">
                                <p class="status-title">{"✓ Success!"}</p>
                                <p>{message}</p>
                            </div>
                        },
                        Some(SubmitStatus::Error(message)) => html! {
                            <div class="submit-status error">
                                <p class="status-title">{"⚠ Error"}</p>
                                <p>{message}</p>
                            </div>
                        },
                        None => html! {},
                    }
                }

                <div class="step-content">
                    { step_content }
                </div>

                if !succeeded {
                    <div class="wizard-nav">
                        <button
                            class="nav-previous"
                            onclick={on_previous}
                            disabled={current == WizardStep::BasicInformation || *submitting}
                        >
                            {"← Previous"}
                        </button>
                        <button class="nav-next" onclick={on_next} disabled={*submitting}>
                            {
                                if !current.is_last() {
                                    "Next →"
                                } else if *submitting {
                                    "Submitting..."
                                } else {
                                    "Submit Application"
                                }
                            }
                        </button>
                    </div>
                }

                if *submitting {
                    <div class="submit-overlay">
                        <div class="overlay-card">
                            <div class="spinner"></div>
                            <div>
                                <p class="overlay-title">{"Processing Application..."}</p>
                                <p>{"Please wait while we submit your application"}</p>
                            </div>
                        </div>
                    </div>
                }
            </div>
            <style>
                {r#"
                .scholarship-form { max-width: 56rem; margin: 0 auto; }
                .form-card {
                    position: relative;
                    background: white;
                    border-radius: 1rem;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
                    padding: 2rem;
                }
                .form-title { text-align: center; margin-bottom: 2rem; }
                .form-title h2 { font-size: 1.875rem; margin: 0 0 0.5rem; }
                .form-title p, .step-heading p { color: #6b7280; margin: 0; }
                .step-indicator { display: flex; align-items: center; margin-bottom: 2rem; }
                .step-button {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                    text-align: left;
                    padding: 0;
                }
                .step-button.locked { cursor: not-allowed; opacity: 0.5; }
                .step-badge {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 700;
                    border: 2px solid #d1d5db;
                    color: #6b7280;
                }
                .step-button.active .step-badge { background: #16a34a; border-color: #16a34a; color: white; }
                .step-button.completed .step-badge { background: #dcfce7; border-color: #16a34a; color: #16a34a; }
                .step-text { display: flex; flex-direction: column; }
                .step-title { font-weight: 600; color: #111827; font-size: 0.9rem; }
                .step-description { font-size: 0.75rem; color: #6b7280; }
                .step-connector { flex: 1; height: 2px; background: #e5e7eb; margin: 0 1rem; }
                .step-connector.done { background: #16a34a; }
                .step-heading { margin-bottom: 1.5rem; }
                .step-heading h3 { margin: 0 0 0.25rem; font-size: 1.5rem; }
                .form-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); gap: 1.5rem; }
                .form-group { display: flex; flex-direction: column; margin-bottom: 1.5rem; }
                .form-group label { font-size: 0.875rem; font-weight: 500; color: #374151; margin-bottom: 0.5rem; }
                .form-control {
                    padding: 0.75rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 0.5rem;
                    font: inherit;
                    background: white;
                }
                .form-control.invalid, input.invalid { border-color: #ef4444; background: #fef2f2; }
                option.unavailable { color: #9ca3af; }
                .field-error { color: #dc2626; font-size: 0.8rem; margin: 0.25rem 0 0; }
                .form-hint { color: #6b7280; font-size: 0.8rem; margin: 0.5rem 0 0; }
                .terms-box {
                    display: flex;
                    gap: 0.75rem;
                    align-items: flex-start;
                    background: #f9fafb;
                    border-radius: 0.5rem;
                    padding: 1rem;
                }
                .terms-box p { margin: 0; }
                .link-button {
                    background: none;
                    border: none;
                    padding: 0;
                    color: #16a34a;
                    text-decoration: underline;
                    cursor: pointer;
                    font: inherit;
                }
                .terms-content h5 { font-size: 1rem; margin: 1.25rem 0 0.5rem; }
                .terms-content li { color: #4b5563; font-size: 0.9rem; margin-bottom: 0.35rem; }
                .step-complete {
                    margin-top: 1.5rem;
                    padding: 1rem;
                    background: #f0fdf4;
                    border: 1px solid #bbf7d0;
                    border-radius: 0.5rem;
                    color: #166534;
                }
                .upload-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); gap: 1.5rem; }
                .upload-area {
                    border: 2px dashed #d1d5db;
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                    text-align: center;
                }
                .upload-area.has-file { border-color: #16a34a; background: #f0fdf4; }
                .upload-area.has-error { border-color: #ef4444; background: #fef2f2; }
                .upload-icon { font-size: 2.5rem; }
                .upload-description, .upload-formats { color: #6b7280; font-size: 0.85rem; }
                .hidden-input { display: none; }
                .upload-button {
                    display: inline-block;
                    background: #16a34a;
                    color: white;
                    padding: 0.5rem 1rem;
                    border-radius: 0.5rem;
                    cursor: pointer;
                }
                .uploaded-file { display: flex; flex-direction: column; align-items: center; gap: 0.5rem; }
                .upload-preview { width: 8rem; height: 8rem; object-fit: cover; border-radius: 0.5rem; }
                .file-icon { font-size: 3rem; }
                .file-name { font-weight: 600; margin: 0; word-break: break-all; }
                .file-size { color: #6b7280; font-size: 0.8rem; margin: 0; }
                .file-actions { display: flex; gap: 1rem; }
                .remove-button { background: none; border: none; color: #dc2626; cursor: pointer; }
                .info-box { margin-top: 1.5rem; padding: 1rem 1.25rem; border-radius: 0.5rem; font-size: 0.875rem; }
                .info-box h4 { margin: 0 0 0.5rem; }
                .info-box ul { margin: 0; padding-left: 1.25rem; }
                .info-box.blue { background: #eff6ff; border: 1px solid #bfdbfe; color: #1e40af; }
                .info-box.yellow { background: #fefce8; border: 1px solid #fde68a; color: #854d0e; }
                .summary { background: #f9fafb; border-radius: 0.75rem; padding: 1.5rem; }
                .summary h4 { margin-top: 0; }
                .summary-row { display: flex; justify-content: space-between; padding: 0.35rem 0; font-size: 0.9rem; }
                .summary-label { color: #6b7280; }
                .summary-value { font-weight: 500; }
                .summary-value.ok { color: #16a34a; }
                .summary-value.missing { color: #dc2626; }
                .summary-row.total { font-weight: 700; font-size: 1.1rem; }
                .fee { color: #16a34a; font-weight: 700; }
                .payment-card {
                    margin-top: 1.5rem;
                    text-align: center;
                    border: 1px solid #e5e7eb;
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                }
                .payment-icon { font-size: 2.5rem; }
                .fee-box { background: #f0fdf4; border-radius: 0.5rem; padding: 1rem; margin: 1rem auto; max-width: 16rem; }
                .fee-box .fee { font-size: 1.875rem; }
                .fee-label, .secure-subnote { color: #6b7280; font-size: 0.8rem; }
                .secure-note { color: #16a34a; font-weight: 600; font-size: 0.875rem; }
                .submit-status { border-radius: 0.5rem; padding: 1rem; margin-bottom: 1.5rem; }
                .submit-status p { margin: 0; }
                .submit-status .status-title { font-weight: 700; margin-bottom: 0.25rem; }
                .submit-status.success { background: #f0fdf4; border: 1px solid #bbf7d0; color: #166534; }
                .submit-status.error { background: #fef2f2; border: 1px solid #fecaca; color: #991b1b; }
                .wizard-nav {
                    display: flex;
                    justify-content: space-between;
                    margin-top: 2rem;
                    padding-top: 1.5rem;
                    border-top: 1px solid #e5e7eb;
                }
                .nav-previous, .nav-next {
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.5rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                .nav-previous { background: white; border: 1px solid #d1d5db; color: #374151; }
                .nav-next { background: #16a34a; border: none; color: white; }
                .nav-previous:disabled, .nav-next:disabled { opacity: 0.5; cursor: not-allowed; }
                .submit-overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(255, 255, 255, 0.85);
                    border-radius: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .overlay-card { display: flex; gap: 1rem; align-items: center; }
                .overlay-card p { margin: 0; color: #6b7280; font-size: 0.875rem; }
                .overlay-card .overlay-title { color: #111827; font-weight: 600; font-size: 1rem; }
                .spinner {
                    width: 2rem;
                    height: 2rem;
                    border: 3px solid #dcfce7;
                    border-top-color: #16a34a;
                    border-radius: 50%;
                    animation: spin 1s linear infinite;
                }
                .spinner.large { width: 3rem; height: 3rem; margin: 0 auto 1rem; }
                @keyframes spin { to { transform: rotate(360deg); } }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scholarship::models::RegisterData;

    #[test]
    fn accepted_registration_yields_checkout_url() {
        let response = RegisterResponse {
            status: true,
            message: None,
            data: Some(RegisterData {
                authorization_url: "https://checkout.example.com/abc".into(),
                reference: Some("abc".into()),
            }),
        };
        assert_eq!(checkout_url(response), Ok("https://checkout.example.com/abc".to_string()));
    }

    #[test]
    fn rejected_registration_uses_server_message() {
        let response = RegisterResponse {
            status: false,
            message: Some("Email already registered".into()),
            data: None,
        };
        assert_eq!(checkout_url(response), Err("Email already registered".to_string()));
    }

    #[test]
    fn missing_url_is_a_failure() {
        let response = RegisterResponse {
            status: true,
            message: None,
            data: Some(RegisterData { authorization_url: String::new(), reference: None }),
        };
        assert_eq!(checkout_url(response), Err(REJECTED_MESSAGE.to_string()));
    }
}
