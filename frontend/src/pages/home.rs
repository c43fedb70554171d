use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;

use crate::dom;
use crate::pages::faq::Faq;
use crate::pages::quote::Quote;
use crate::pages::sections::{About, Hero, Industries, Partners, Services, Testimonials};

/// Time for the sections to lay out before jumping to a deep-linked anchor.
const HASH_SCROLL_DELAY_MS: u32 = 100;

#[function_component(Home)]
pub fn home() -> Html {
    use_effect_with_deps(
        |_| {
            let timeout = dom::current_hash().map(|hash| {
                Timeout::new(HASH_SCROLL_DELAY_MS, move || {
                    if !dom::scroll_to_anchor(&hash) {
                        info!("No section for #{}", hash);
                    }
                })
            });
            move || drop(timeout)
        },
        (),
    );

    html! {
        <main class="home">
            <Hero />
            <Services />
            <Industries />
            <About />
            <Partners />
            <Testimonials />
            <Faq />
            <Quote />
        </main>
    }
}
