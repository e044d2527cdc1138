use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn NotFound() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p class="not-found-title">{"Oops! Page not found"}</p>
            <p>{"The page you're looking for doesn't exist or has been moved."}</p>
            <Link<Route> to={Route::Home} classes="btn primary">{"Go Home"}</Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    background: #f9fafb;
                    padding: 1.5rem;
                }
                .not-found h1 { font-size: 6rem; color: #16a34a; margin: 0; }
                .not-found-title { font-size: 1.5rem; font-weight: 600; color: #111827; }
                .not-found p { color: #4b5563; }
                "#}
            </style>
        </div>
    }
}
