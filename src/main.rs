use gloo_timers::callback::Timeout;
use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

mod api;
mod config;
mod error;
mod utils;
mod chat {
    pub mod lead;
    pub mod replies;
    pub mod session;
    pub mod widget;
}
mod scholarship {
    pub mod basic_info;
    pub mod callback_modal;
    pub mod documents;
    pub mod form;
    pub mod models;
    pub mod payment;
    pub mod promo_modal;
    pub mod review;
    pub mod terms;
    pub mod validation;
    pub mod wizard;
}
mod components {
    pub mod about;
    pub mod contact_footer;
    pub mod hero;
    pub mod modal;
    pub mod services;
    pub mod vision_mission;
    pub mod why_choose_us;
}
mod pages {
    pub mod apply;
    pub mod home;
    pub mod not_found;
    pub mod scholarship;
}

use pages::{apply::Apply, home::Home, not_found::NotFound, scholarship::Scholarship};
use utils::scroll_to_section;

/// Time the home page gets to mount before a section link scrolls to its anchor.
const SECTION_SCROLL_DELAY_MS: u32 = 100;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/scholarship")]
    Scholarship,
    #[at("/apply")]
    Apply,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Scholarship => {
            info!("Rendering Scholarship page");
            html! { <Scholarship /> }
        },
        Route::Apply => {
            info!("Rendering Apply page");
            html! { <Apply /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuItem {
    /// Anchor on the home page.
    Section { id: &'static str, label: &'static str },
    Page { route: PageRoute, label: &'static str },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageRoute {
    Scholarship,
}

impl MenuItem {
    pub fn label(&self) -> &'static str {
        match *self {
            MenuItem::Section { label, .. } | MenuItem::Page { label, .. } => label,
        }
    }
}

/// Links shown in the top bar. The scholarship page keeps only Home and itself.
pub fn menu_items(on_scholarship: bool) -> Vec<MenuItem> {
    let home = MenuItem::Section { id: "home", label: "Home" };
    let scholarship = MenuItem::Page { route: PageRoute::Scholarship, label: "Scholarship" };
    if on_scholarship {
        return vec![home, scholarship];
    }
    vec![
        home,
        MenuItem::Section { id: "about", label: "About" },
        MenuItem::Section { id: "services", label: "Services" },
        MenuItem::Section { id: "contact", label: "Contact" },
        scholarship,
    ]
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let navigator = use_navigator();
    let route = use_route::<Route>();
    let on_home = matches!(route, Some(Route::Home));
    let on_scholarship = matches!(route, Some(Route::Scholarship));

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = window().map(|window| {
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = window_scroll_top();
                    is_scrolled.set(scroll_top > 20.0);
                }) as Box<dyn FnMut()>);
                let _ = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                );
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let open_section = {
        let menu_open = menu_open.clone();
        let navigator = navigator.clone();
        Callback::from(move |id: &'static str| {
            menu_open.set(false);
            if on_home {
                scroll_to_section(id);
                return;
            }
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
            Timeout::new(SECTION_SCROLL_DELAY_MS, move || scroll_to_section(id)).forget();
        })
    };

    let open_page = {
        let menu_open = menu_open.clone();
        Callback::from(move |route: PageRoute| {
            menu_open.set(false);
            if let Some(navigator) = &navigator {
                match route {
                    PageRoute::Scholarship => navigator.push(&Route::Scholarship),
                }
            }
        })
    };

    let go_home = {
        let open_section = open_section.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            open_section.emit("home");
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="/" class="nav-logo" onclick={go_home}>
                    {"AUTOSAAS"}
                </a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for menu_items(on_scholarship).into_iter().map(|item| {
                        let onclick = match item {
                            MenuItem::Section { id, .. } => {
                                let open_section = open_section.clone();
                                Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    open_section.emit(id);
                                })
                            }
                            MenuItem::Page { route, .. } => {
                                let open_page = open_page.clone();
                                Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    open_page.emit(route);
                                })
                            }
                        };
                        let active = matches!(item, MenuItem::Page { route: PageRoute::Scholarship, .. }) && on_scholarship;
                        let href = match item {
                            MenuItem::Section { id, .. } => format!("/#{}", id),
                            MenuItem::Page { route: PageRoute::Scholarship, .. } => "/scholarship".to_string(),
                        };
                        html! {
                            <a {href} {onclick} class={classes!("nav-link", active.then(|| "active"))}>
                                {item.label()}
                            </a>
                        }
                    }) }
                </div>
            </div>
        </nav>
    }
}

fn window_scroll_top() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or_default()
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <style>
                {r#"
                * { box-sizing: border-box; }
                body {
                    margin: 0;
                    font-family: Inter, system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
                    color: #111827;
                    scroll-behavior: smooth;
                }
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 40;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(8px);
                    transition: box-shadow 0.3s, background 0.3s;
                }
                .top-nav.scrolled { background: rgba(255, 255, 255, 0.95); box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08); }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo { font-size: 1.5rem; font-weight: 800; color: #16a34a; text-decoration: none; }
                .nav-right { display: flex; gap: 2rem; align-items: center; }
                .nav-link { color: #374151; text-decoration: none; font-weight: 500; }
                .nav-link:hover, .nav-link.active { color: #16a34a; }
                .burger-menu { display: none; background: none; border: none; cursor: pointer; padding: 0.5rem; }
                .burger-menu span { display: block; width: 1.5rem; height: 2px; background: #111827; margin: 5px 0; }
                @media (max-width: 768px) {
                    .burger-menu { display: block; }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1rem 1.5rem;
                        background: white;
                        box-shadow: 0 8px 16px rgba(0, 0, 0, 0.08);
                    }
                    .nav-right.mobile-menu-open { display: flex; }
                }
                .section-inner { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }
                .section-header { text-align: center; margin-bottom: 4rem; }
                .section-header h2 { font-size: 3rem; color: #111827; margin-bottom: 1.5rem; }
                .section-header p { font-size: 1.25rem; color: #4b5563; max-width: 48rem; margin: 0 auto; }
                .card-grid { display: grid; gap: 2rem; }
                .card-grid.two { grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr)); }
                .card-grid.three { grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); }
                .card-grid.four { grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); }
                .btn {
                    display: inline-block;
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.5rem;
                    font-weight: 600;
                    font-size: 1rem;
                    cursor: pointer;
                    text-decoration: none;
                    border: 2px solid transparent;
                    transition: background 0.2s, color 0.2s;
                }
                .btn.primary { background: #16a34a; color: white; }
                .btn.primary:hover { background: #15803d; }
                .btn.primary:disabled { opacity: 0.6; cursor: not-allowed; }
                .btn.outline { background: transparent; color: #16a34a; border-color: #16a34a; }
                .btn.outline:hover { background: #16a34a; color: white; }
                .btn.light { background: white; color: #16a34a; }
                .btn.large { padding: 1rem 2rem; font-size: 1.125rem; }
                .btn.full { width: 100%; }
                .dot-list { list-style: none; padding: 0; margin: 0 0 2rem; }
                .dot-list li { display: flex; align-items: center; gap: 0.75rem; font-size: 0.9rem; color: #4b5563; margin-bottom: 0.5rem; }
                .dot-list li::before { content: ""; width: 0.5rem; height: 0.5rem; border-radius: 50%; background: #16a34a; flex-shrink: 0; }
                .dot-list.blue li::before { background: #3b82f6; }
                "#}
            </style>
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    config::report_missing();
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[MenuItem]) -> Vec<&'static str> {
        items.iter().map(MenuItem::label).collect()
    }

    #[test]
    fn home_menu_lists_every_section_then_scholarship() {
        assert_eq!(
            labels(&menu_items(false)),
            vec!["Home", "About", "Services", "Contact", "Scholarship"]
        );
    }

    #[test]
    fn scholarship_menu_keeps_home_and_itself() {
        let items = menu_items(true);
        assert_eq!(labels(&items), vec!["Home", "Scholarship"]);
        assert_eq!(items[0], MenuItem::Section { id: "home", label: "Home" });
    }

    #[test]
    fn routes_resolve_and_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/scholarship"), Some(Route::Scholarship));
        assert_eq!(Route::recognize("/apply"), Some(Route::Apply));
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }
}
