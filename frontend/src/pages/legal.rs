use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::company;
use crate::content::legal::{LegalDocument, IMPRINT_DISPUTE, IMPRINT_RESPONSIBLE, IMPRINT_TITLE, PRIVACY, TERMS};
use crate::dom;
use crate::i18n::t;
use crate::prefs::context::use_language;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct LegalPageProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub updated: Option<AttrValue>,
    pub children: Children,
}

/// Shared frame of the legal pages. Starts at the top when the route changes.
#[function_component(LegalPage)]
pub fn legal_page(props: &LegalPageProps) -> Html {
    let lang = use_language();
    use_effect_with_deps(
        |_| {
            dom::scroll_to_top();
            || ()
        },
        props.title.clone(),
    );

    html! {
        <div class="legal-container">
            <style>{LEGAL_STYLE}</style>
            <article class="legal-content">
                <h1>{ props.title.clone() }</h1>
                if let Some(updated) = &props.updated {
                    <p class="legal-updated">
                        { t("Stand: ", "Last updated: ").get(lang) }{ updated.clone() }
                    </p>
                }
                { for props.children.iter() }
                <div class="legal-links">
                    <Link<Route> to={Route::Terms}>{ t("AGB", "Terms").get(lang) }</Link<Route>>
                    {" | "}
                    <Link<Route> to={Route::Privacy}>{ t("Datenschutz", "Privacy").get(lang) }</Link<Route>>
                    {" | "}
                    <Link<Route> to={Route::Imprint}>{ t("Impressum", "Imprint").get(lang) }</Link<Route>>
                    {" | "}
                    <Link<Route> to={Route::Home}>{ t("Zur Startseite", "Back to home").get(lang) }</Link<Route>>
                </div>
            </article>
        </div>
    }
}

fn render_document(document: &LegalDocument, lang: crate::i18n::Language) -> Html {
    html! {
        <LegalPage title={document.title.get(lang)} updated={document.updated}>
            { for document.sections.iter().map(|section| html! {
                <section>
                    <h2>{ section.heading.get(lang) }</h2>
                    { for section.paragraphs.iter().map(|p| html! { <p>{ p.get(lang) }</p> }) }
                </section>
            }) }
        </LegalPage>
    }
}

#[function_component(Terms)]
pub fn terms() -> Html {
    let lang = use_language();
    render_document(&TERMS, lang)
}

#[function_component(Privacy)]
pub fn privacy() -> Html {
    let lang = use_language();
    render_document(&PRIVACY, lang)
}

#[function_component(Imprint)]
pub fn imprint() -> Html {
    let lang = use_language();
    html! {
        <LegalPage title={IMPRINT_TITLE.get(lang)}>
            <section>
                <h2>{ t("Angaben gemäß § 5 DDG", "Information pursuant to Section 5 DDG").get(lang) }</h2>
                <p>
                    { company::NAME }<br/>
                    { company::STREET }<br/>
                    { format!("{} {}", company::POSTAL_CODE, company::CITY) }
                </p>
                <p>
                    { t("Geschäftsführung: ", "Managing director: ").get(lang) }{ company::MANAGING_DIRECTOR }<br/>
                    { format!("{}, {}", company::REGISTER_COURT, company::REGISTER_NUMBER) }<br/>
                    { t("USt-IdNr.: ", "VAT ID: ").get(lang) }{ company::VAT_ID }
                </p>
            </section>
            <section>
                <h2>{ t("Kontakt", "Contact").get(lang) }</h2>
                <p>
                    { t("Telefon: ", "Phone: ").get(lang) }
                    <a href={format!("tel:{}", company::PHONE.replace(' ', ""))}>{ company::PHONE }</a><br/>
                    { t("E-Mail: ", "Email: ").get(lang) }
                    <a href={format!("mailto:{}", company::EMAIL)}>{ company::EMAIL }</a>
                </p>
            </section>
            <section>
                <h2>{ IMPRINT_RESPONSIBLE.get(lang) }</h2>
                <p>{ format!("{}, {}, {} {}", company::MANAGING_DIRECTOR, company::STREET, company::POSTAL_CODE, company::CITY) }</p>
            </section>
            <section>
                <h2>{ t("Verbraucherstreitbeilegung", "Consumer dispute resolution").get(lang) }</h2>
                <p>{ IMPRINT_DISPUTE.get(lang) }</p>
            </section>
        </LegalPage>
    }
}

const LEGAL_STYLE: &str = r#"
.legal-container {
    padding: 7rem 1.5rem 4rem;
    background: #f5f7fa;
    min-height: 100vh;
}
.legal-content {
    max-width: 800px;
    margin: 0 auto;
    background: #fff;
    border-radius: 12px;
    padding: 2.5rem;
    line-height: 1.7;
    color: #3e4c59;
}
.legal-content h1 {
    color: #0c1b2e;
    margin-top: 0;
}
.legal-content h2 {
    color: #0c1b2e;
    font-size: 1.2rem;
    margin-top: 2rem;
}
.legal-updated {
    color: #7b8794;
    font-size: 0.9rem;
}
.legal-links {
    margin-top: 3rem;
    padding-top: 1.5rem;
    border-top: 1px solid #e4e7eb;
    font-size: 0.9rem;
}
.legal-links a {
    color: #0c1b2e;
}
"#;
