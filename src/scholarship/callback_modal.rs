use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use yew::prelude::*;

use crate::api;
use crate::config::SUPPORT_EMAIL;
use crate::scholarship::models::{PaymentOutcome, PaymentStatus};
use crate::scholarship::payment::{format_paid_at, outcome_from_status, reference_from_query, CallbackGuard};
use crate::utils::clear_query_string;

/// Gives the backend a moment to settle the callback before we ask for the status.
const STATUS_DELAY_MS: u32 = 1_000;

/// Shown when the checkout provider sends the applicant back with a
/// transaction reference in the query string.
#[function_component]
pub fn PaymentCallbackModal() -> Html {
    let guard = use_mut_ref(CallbackGuard::default);
    let outcome = use_state(|| None::<PaymentOutcome>);

    {
        let outcome = outcome.clone();
        use_effect_with_deps(
            move |_| {
                let search = window()
                    .and_then(|w| w.location().search().ok())
                    .unwrap_or_default();
                if let Some(reference) = reference_from_query(&search) {
                    if guard.borrow().claim() {
                        info!("Verifying payment {}", reference);
                        outcome.set(Some(PaymentOutcome::pending(reference.clone())));
                        spawn_local(async move {
                            if let Err(e) = api::payment_callback(&reference).await {
                                warn!("Payment callback failed: {}", e);
                            }
                            TimeoutFuture::new(STATUS_DELAY_MS).await;
                            let result = api::payment_status(&reference).await;
                            let verified = outcome_from_status(&reference, result);
                            info!("Payment {} is {}", reference, verified.status.label());
                            outcome.set(Some(verified));
                        });
                    }
                }
                || ()
            },
            (),
        );
    }

    let Some(current) = (*outcome).clone() else {
        return html! {};
    };

    let on_close = {
        let outcome = outcome.clone();
        Callback::from(move |_: MouseEvent| {
            outcome.set(None);
            clear_query_string();
        })
    };

    let body = match current.status {
        PaymentStatus::Pending => html! {
            <div class="callback-body">
                <div class="spinner large"></div>
                <h3>{"Verifying Payment..."}</h3>
                <p>{"Please wait while we verify your payment status."}</p>
            </div>
        },
        PaymentStatus::Success => html! {
            <div class="callback-body">
                <div class="callback-icon success">{"✓"}</div>
                <h3 class="success-title">{"Payment Successful!"}</h3>
                <p>{"Your scholarship application has been processed successfully."}</p>
                <div class="payment-details">
                    <h4>{"Payment Details"}</h4>
                    <div class="detail-row">
                        <span>{"Reference:"}</span>
                        <span>{&current.reference}</span>
                    </div>
                    if let Some(amount) = &current.amount {
                        <div class="detail-row">
                            <span>{"Amount:"}</span>
                            <span>{format!("₦{}", amount)}</span>
                        </div>
                    }
                    <div class="detail-row">
                        <span>{"Status:"}</span>
                        <span class="capitalize">{current.status.label()}</span>
                    </div>
                    if let Some(paid_at) = &current.paid_at {
                        <div class="detail-row">
                            <span>{"Paid At:"}</span>
                            <span>{format_paid_at(paid_at)}</span>
                        </div>
                    }
                    if let Some(email) = &current.email {
                        <div class="detail-row">
                            <span>{"Email:"}</span>
                            <span>{email}</span>
                        </div>
                    }
                </div>
                <p class="muted">
                    {"You will receive a confirmation email shortly with your application details."}
                </p>
            </div>
        },
        PaymentStatus::Failed => html! {
            <div class="callback-body">
                <div class="callback-icon failed">{"✕"}</div>
                <h3 class="failed-title">{"Payment Failed"}</h3>
                <p>
                    { current.message.clone().unwrap_or_else(|| "There was an issue with your payment.".to_string()) }
                </p>
                <p class="muted">
                    {format!("Please try again or contact support at {} if the issue persists.", SUPPORT_EMAIL)}
                </p>
            </div>
        },
    };

    let pending = current.status == PaymentStatus::Pending;

    html! {
        <div class="callback-backdrop">
            <div class="callback-panel">
                { body }
                <div class="callback-actions">
                    <button class="callback-close" onclick={on_close} disabled={pending}>
                        { if pending { "Please Wait..." } else { "Continue" } }
                    </button>
                </div>
            </div>
            <style>
                {r#"
                .callback-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(4px);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 70;
                }
                .callback-panel {
                    background: white;
                    border-radius: 0.75rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    max-width: 28rem;
                    width: 100%;
                    margin: 0 1rem;
                    padding: 1.5rem;
                }
                .callback-body { text-align: center; }
                .callback-icon {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 50%;
                    margin: 0 auto 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2rem;
                }
                .callback-icon.success { background: #dcfce7; color: #16a34a; }
                .callback-icon.failed { background: #fee2e2; color: #dc2626; }
                .success-title { color: #166534; }
                .failed-title { color: #991b1b; }
                .payment-details {
                    background: #f0fdf4;
                    border: 1px solid #bbf7d0;
                    border-radius: 0.5rem;
                    padding: 1rem;
                    margin-bottom: 1rem;
                    text-align: left;
                }
                .detail-row {
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.875rem;
                    margin-bottom: 0.25rem;
                }
                .detail-row span:last-child { font-weight: 600; color: #15803d; }
                .capitalize { text-transform: capitalize; }
                .muted { font-size: 0.875rem; color: #6b7280; }
                .callback-actions { display: flex; justify-content: center; margin-top: 1.5rem; }
                .callback-close {
                    padding: 0.5rem 1.5rem;
                    background: #16a34a;
                    color: white;
                    border: none;
                    border-radius: 0.5rem;
                    cursor: pointer;
                }
                .callback-close:disabled { opacity: 0.6; cursor: not-allowed; }
                "#}
            </style>
        </div>
    }
}
