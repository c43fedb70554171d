use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::language_toggle::LanguageToggle;
use crate::config::company;
use crate::content::site::NAV_LINKS;
use crate::dom;
use crate::prefs::context::use_language;
use crate::Route;

/// Scroll distance after which the bar switches to its solid style.
const SCROLLED_THRESHOLD: f64 = 80.0;
/// Height of the fixed bar; sections count as active once they pass below it.
const NAV_OFFSET: f64 = 120.0;

/// Scrolls to an in-page section, going back to the home page first when needed.
pub fn anchor_callback(
    anchor: &'static str,
    on_home: bool,
    navigator: Option<Navigator>,
    after: Option<Callback<()>>,
) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(after) = &after {
            after.emit(());
        }
        if on_home {
            dom::scroll_to_anchor(anchor);
        } else if let Some(navigator) = &navigator {
            info!("Navigating home to #{}", anchor);
            navigator.push(&Route::Home);
            Timeout::new(150, move || {
                dom::scroll_to_anchor(anchor);
            })
            .forget();
        }
    })
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let lang = use_language();
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let active = use_state(|| None::<&'static str>);
    let route = use_route::<Route>();
    let navigator = use_navigator();
    let on_home = matches!(route, Some(Route::Home) | None);

    {
        let is_scrolled = is_scrolled.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let anchors: Vec<&'static str> = NAV_LINKS.iter().map(|link| link.anchor).collect();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    is_scrolled.set(dom::scroll_y() > SCROLLED_THRESHOLD);
                    active.set(dom::active_section(&anchors, NAV_OFFSET));
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    let _ = window
                        .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }

                move || {
                    if let Some(window) = &window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    let menu_class = classes!("nav-right", (*menu_open).then_some("mobile-menu-open"));

    html! {
        <nav class={classes!("top-nav", (*is_scrolled || !on_home).then_some("scrolled"))}>
            <style>{NAV_STYLE}</style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="logo-mark">{"B"}</span>
                    { company::SHORT_NAME }
                </Link<Route>>

                <button
                    class="burger-menu"
                    aria-label="Menu"
                    aria-expanded={(*menu_open).to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|link| {
                        let is_active = on_home && *active == Some(link.anchor);
                        let is_cta = link.anchor == "quote";
                        html! {
                            <a
                                href={format!("/#{}", link.anchor)}
                                class={classes!(
                                    if is_cta { "nav-cta" } else { "nav-link" },
                                    is_active.then_some("active")
                                )}
                                onclick={anchor_callback(link.anchor, on_home, navigator.clone(), Some(close_menu.clone()))}
                            >
                                { link.label.get(lang) }
                            </a>
                        }
                    }) }
                    <LanguageToggle />
                </div>
            </div>
        </nav>
    }
}

const NAV_STYLE: &str = r#"
.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    transition: background 0.3s ease, box-shadow 0.3s ease;
    background: transparent;
}
.top-nav.scrolled {
    background: rgba(12, 27, 46, 0.96);
    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.25);
}
.nav-content {
    max-width: 1200px;
    margin: 0 auto;
    padding: 1rem 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.nav-logo {
    display: flex;
    align-items: center;
    gap: 0.6rem;
    color: #fff;
    font-weight: 700;
    font-size: 1.25rem;
    text-decoration: none;
}
.logo-mark {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 2rem;
    height: 2rem;
    border-radius: 6px;
    background: #f28c28;
    color: #0c1b2e;
}
.nav-right {
    display: flex;
    align-items: center;
    gap: 1.5rem;
}
.nav-link {
    color: rgba(255, 255, 255, 0.85);
    text-decoration: none;
    font-weight: 500;
}
.nav-link:hover, .nav-link.active {
    color: #f28c28;
}
.nav-cta {
    padding: 0.55rem 1.1rem;
    border-radius: 6px;
    background: #f28c28;
    color: #0c1b2e;
    font-weight: 600;
    text-decoration: none;
}
.burger-menu {
    display: none;
    flex-direction: column;
    gap: 4px;
    background: none;
    border: none;
    cursor: pointer;
}
.burger-menu span {
    width: 24px;
    height: 2px;
    background: #fff;
}
.language-toggle {
    display: flex;
    border: 1px solid rgba(255, 255, 255, 0.3);
    border-radius: 6px;
    overflow: hidden;
}
.lang-option {
    background: none;
    border: none;
    color: rgba(255, 255, 255, 0.7);
    padding: 0.35rem 0.6rem;
    cursor: pointer;
    font-weight: 600;
}
.lang-option.active {
    background: rgba(255, 255, 255, 0.15);
    color: #fff;
}
@media (max-width: 900px) {
    .burger-menu {
        display: flex;
    }
    .nav-right {
        display: none;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        flex-direction: column;
        padding: 1.5rem;
        background: rgba(12, 27, 46, 0.98);
    }
    .nav-right.mobile-menu-open {
        display: flex;
    }
}
"#;
