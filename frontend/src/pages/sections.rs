//! Landing page sections that only render static content.

use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::card::Card;
use crate::components::nav::anchor_callback;
use crate::content::industries::INDUSTRIES;
use crate::content::partners::PARTNERS;
use crate::content::services::SERVICES;
use crate::content::site::{
    SectionHeading, ABOUT, HERO, INDUSTRIES_HEADING, PARTNERS_HEADING, SERVICES_HEADING, STATS,
    TESTIMONIALS_HEADING,
};
use crate::content::testimonials::TESTIMONIALS;
use crate::i18n::Language;
use crate::prefs::context::use_language;

pub fn section_heading(heading: &SectionHeading, lang: Language) -> Html {
    html! {
        <div class="section-heading">
            <h2>{ heading.title.get(lang) }</h2>
            <p>{ heading.subtitle.get(lang) }</p>
        </div>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let lang = use_language();
    html! {
        <section class="hero" id="top">
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <span class="hero-eyebrow">{ HERO.eyebrow.get(lang) }</span>
                <h1>{ HERO.title.get(lang) }</h1>
                <p class="hero-subtitle">{ HERO.subtitle.get(lang) }</p>
                <div class="hero-actions">
                    <Button href="/#quote" onclick={anchor_callback("quote", true, None, None)}>
                        { HERO.primary_cta.get(lang) }
                    </Button>
                    <Button
                        variant={ButtonVariant::Secondary}
                        href="/#services"
                        onclick={anchor_callback("services", true, None, None)}
                    >
                        { HERO.secondary_cta.get(lang) }
                    </Button>
                </div>
                <ul class="hero-stats">
                    { for STATS.iter().map(|stat| html! {
                        <li>
                            <strong>{ stat.value }</strong>
                            <span>{ stat.label.get(lang) }</span>
                        </li>
                    }) }
                </ul>
            </div>
        </section>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let lang = use_language();
    html! {
        <section class="section" id="services">
            { section_heading(&SERVICES_HEADING, lang) }
            <div class="card-grid">
                { for SERVICES.iter().map(|service| html! {
                    <Card icon={service.icon} title={service.title.get(lang)}>
                        <p>{ service.description.get(lang) }</p>
                        <ul class="card-highlights">
                            { for service.highlights.iter().map(|h| html! { <li>{ h.get(lang) }</li> }) }
                        </ul>
                    </Card>
                }) }
            </div>
        </section>
    }
}

#[function_component(Industries)]
pub fn industries() -> Html {
    let lang = use_language();
    html! {
        <section class="section section-alt" id="industries">
            { section_heading(&INDUSTRIES_HEADING, lang) }
            <div class="industry-grid">
                { for INDUSTRIES.iter().map(|industry| html! {
                    <div class="industry">
                        <span class="industry-icon" aria-hidden="true">{ industry.icon }</span>
                        <h3>{ industry.name.get(lang) }</h3>
                        <p>{ industry.description.get(lang) }</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let lang = use_language();
    html! {
        <section class="section" id="about">
            <div class="about-layout">
                <div class="about-text">
                    <h2>{ ABOUT.title.get(lang) }</h2>
                    { for ABOUT.paragraphs.iter().map(|p| html! { <p>{ p.get(lang) }</p> }) }
                </div>
                <ul class="about-values">
                    { for ABOUT.values.iter().map(|value| html! { <li>{ "✓ " }{ value.get(lang) }</li> }) }
                </ul>
            </div>
        </section>
    }
}

#[function_component(Partners)]
pub fn partners() -> Html {
    let lang = use_language();
    html! {
        <section class="section section-alt" id="partners">
            { section_heading(&PARTNERS_HEADING, lang) }
            <div class="partner-row">
                { for PARTNERS.iter().map(|partner| html! {
                    <div class="partner">
                        <strong>{ partner.name }</strong>
                        <span>{ partner.description.get(lang) }</span>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let lang = use_language();
    html! {
        <section class="section" id="testimonials">
            { section_heading(&TESTIMONIALS_HEADING, lang) }
            <div class="card-grid">
                { for TESTIMONIALS.iter().map(|testimonial| html! {
                    <figure class="testimonial">
                        <blockquote>{ format!("„{}“", testimonial.quote.get(lang)) }</blockquote>
                        <figcaption>
                            <strong>{ testimonial.author }</strong>
                            <span>{ format!("{}, {}", testimonial.role.get(lang), testimonial.company) }</span>
                        </figcaption>
                    </figure>
                }) }
            </div>
        </section>
    }
}
