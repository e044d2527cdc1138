use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct PromoModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

/// Scholarship teaser shown on the home page.
#[function_component]
pub fn ScholarshipPromoModal(props: &PromoModalProps) -> Html {
    let navigator = use_navigator();

    if !props.is_open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let learn_more = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Scholarship);
            }
        })
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="promo-backdrop" onclick={close.clone()}>
            <div class="promo-card" onclick={keep_open}>
                <button class="promo-close" onclick={close}>{"✕"}</button>
                <div class="promo-banner">
                    <img src="/scholar-01.png" alt="Students celebrating graduation" />
                    <div class="promo-banner-text">
                        <h3>{"AUTOSAAS Initiative"}</h3>
                        <p>{"Scholarship Opportunity"}</p>
                    </div>
                </div>
                <div class="promo-body">
                    <p>
                        {"Transform your future with our scholarship program. Pursue your master's degree in Europe or America with full funding support."}
                    </p>
                    <button class="promo-cta" onclick={learn_more}>{"Learn More & Apply"}</button>
                </div>
            </div>
            <style>
                {r#"
                .promo-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                    z-index: 55;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                }
                .promo-card {
                    position: relative;
                    background: white;
                    border-radius: 1rem;
                    max-width: 28rem;
                    width: 100%;
                    overflow: hidden;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .promo-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    z-index: 1;
                    border: none;
                    border-radius: 50%;
                    width: 2.25rem;
                    height: 2.25rem;
                    background: rgba(255, 255, 255, 0.9);
                    cursor: pointer;
                }
                .promo-banner { position: relative; }
                .promo-banner img { width: 100%; height: 12rem; object-fit: cover; display: block; }
                .promo-banner-text { position: absolute; bottom: 1rem; left: 1rem; color: white; }
                .promo-banner-text h3 { margin: 0 0 0.25rem; }
                .promo-banner-text p { margin: 0; opacity: 0.9; font-size: 0.875rem; }
                .promo-body { padding: 1.5rem; color: #374151; }
                .promo-cta {
                    width: 100%;
                    background: #16a34a;
                    color: white;
                    border: none;
                    padding: 0.75rem;
                    border-radius: 0.5rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                "#}
            </style>
        </div>
    }
}
