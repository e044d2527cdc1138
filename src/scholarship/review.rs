use yew::prelude::*;

use crate::scholarship::models::{ApplicationForm, APPLICATION_FEE_NAIRA};
use crate::scholarship::payment::format_naira;

#[derive(Properties, PartialEq)]
pub struct ReviewProps {
    pub form: ApplicationForm,
}

#[function_component]
pub fn ReviewAndPay(props: &ReviewProps) -> Html {
    let profile = &props.form.profile;
    let fee = format_naira(APPLICATION_FEE_NAIRA);
    let rows = [
        ("Full Name:", profile.full_name.clone()),
        ("Email:", profile.email.clone()),
        ("Qualification:", profile.qualification.clone()),
        ("Age:", format!("{} years", profile.age.trim())),
        ("University:", profile.university.clone()),
        ("Course:", profile.course.clone()),
    ];

    html! {
        <div class="wizard-step">
            <div class="step-heading">
                <h3>{"Review & Submit"}</h3>
                <p>{"Review your application and submit to proceed to payment"}</p>
            </div>

            <div class="summary">
                <h4>{"Application Summary"}</h4>
                { for rows.iter().map(|(label, value)| html! {
                    <div class="summary-row">
                        <span class="summary-label">{*label}</span>
                        <span class="summary-value">{value}</span>
                    </div>
                }) }
                <div class="summary-row">
                    <span class="summary-label">{"Documents:"}</span>
                    if props.form.documents.is_complete() {
                        <span class="summary-value ok">{"✓ Uploaded"}</span>
                    } else {
                        <span class="summary-value missing">{"✗ Missing"}</span>
                    }
                </div>
                <hr />
                <div class="summary-row total">
                    <span>{"Application Fee:"}</span>
                    <span class="fee">{fee.clone()}</span>
                </div>
            </div>

            <div class="payment-card">
                <div class="payment-icon">{"💳"}</div>
                <h4>{"Ready to Submit"}</h4>
                <p>{"Click the submit button below to complete your scholarship application and proceed to payment"}</p>
                <div class="fee-box">
                    <div class="fee">{fee}</div>
                    <div class="fee-label">{"Application Fee"}</div>
                </div>
                <p class="secure-note">{"🛡 Secured Payment Processing"}</p>
                <p class="secure-subnote">{"🔒 Your payment information is encrypted and secure"}</p>
            </div>

            <div class="info-box blue">
                <h4>{"Application Information"}</h4>
                <ul>
                    <li>{"Your application will be processed after successful payment"}</li>
                    <li>{"You will be redirected to a secure payment gateway"}</li>
                    <li>{"The application fee is non-refundable"}</li>
                    <li>{"You will receive a confirmation email after submission"}</li>
                    <li>{"Accepted payment methods: Card, Bank Transfer, USSD"}</li>
                </ul>
            </div>
        </div>
    }
}
