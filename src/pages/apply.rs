use yew::prelude::*;

use crate::scholarship::callback_modal::PaymentCallbackModal;
use crate::scholarship::form::ScholarshipForm;

/// Bare application page. Checkout returns here when the callback URL points at `/apply`.
#[function_component]
pub fn Apply() -> Html {
    html! {
        <div class="apply-page">
            <section id="apply">
                <ScholarshipForm />
            </section>
            <PaymentCallbackModal />
            <style>
                {r#"
                .apply-page { min-height: 100vh; background: #f9fafb; padding: 6rem 1rem 3rem; }
                "#}
            </style>
        </div>
    }
}
