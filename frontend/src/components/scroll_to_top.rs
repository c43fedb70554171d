use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::dom;
use crate::i18n::t;
use crate::prefs::context::use_language;

const SHOW_AFTER: f64 = 600.0;

#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let lang = use_language();
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let callback = Closure::wrap(Box::new(move || {
                    visible.set(dom::scroll_y() > SHOW_AFTER);
                }) as Box<dyn FnMut()>);
                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                }
                move || {
                    if let Some(window) = &window {
                        let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    if !*visible {
        return html! {};
    }

    let onclick = Callback::from(|_: MouseEvent| dom::scroll_to_top());
    html! {
        <button class="scroll-to-top" aria-label={t("Nach oben", "Back to top").get(lang)} {onclick}>{"↑"}</button>
    }
}
