use gloo_timers::callback::Timeout;
use log::info;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::form_field::{error_id_for, FormField};
use crate::content::site::QUOTE_HEADING;
use crate::dom;
use crate::i18n::{t, Language};
use crate::pages::sections::section_heading;
use crate::prefs::context::use_language;
use crate::quote::form::{FormStep, QuoteField, Timeframe};
use crate::quote::state::{QuoteAction, QuoteState};
use crate::Route;

type QuoteHandle = UseReducerHandle<QuoteState>;

#[derive(Clone, Copy, PartialEq)]
enum InputKind {
    Text,
    Email,
    Tel,
    Numeric,
    Decimal,
    Date,
}

impl InputKind {
    fn attrs(self) -> (&'static str, Option<&'static str>) {
        match self {
            InputKind::Text => ("text", None),
            InputKind::Email => ("email", Some("email")),
            InputKind::Tel => ("tel", Some("tel")),
            InputKind::Numeric => ("text", Some("numeric")),
            InputKind::Decimal => ("text", Some("decimal")),
            InputKind::Date => ("date", None),
        }
    }
}

fn error_for(state: &QuoteHandle, field: QuoteField, lang: Language) -> Option<String> {
    state.visible_error(field).map(|error| error.message(lang))
}

fn blur_callback(state: &QuoteHandle, field: QuoteField) -> Callback<FocusEvent> {
    let state = state.clone();
    Callback::from(move |_: FocusEvent| state.dispatch(QuoteAction::Blur(field)))
}

fn input_field(state: &QuoteHandle, field: QuoteField, kind: InputKind, lang: Language) -> Html {
    let error = error_for(state, field, lang);
    let described_by = error_id_for(field.input_id(), error.is_some());
    let (input_type, input_mode) = kind.attrs();
    let oninput = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(QuoteAction::Update(field, input.value()));
        })
    };

    html! {
        <FormField id={field.input_id()} label={field.label(lang)} required={field.is_required()} error={error.clone()}>
            <input
                id={field.input_id()}
                type={input_type}
                inputmode={input_mode}
                value={state.data.text_of(field).to_string()}
                aria-invalid={error.is_some().to_string()}
                aria-describedby={described_by}
                {oninput}
                onblur={blur_callback(state, field)}
            />
        </FormField>
    }
}

fn textarea_field(state: &QuoteHandle, field: QuoteField, hint: Option<&'static str>, lang: Language) -> Html {
    let error = error_for(state, field, lang);
    let described_by = error_id_for(field.input_id(), error.is_some());
    let oninput = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            state.dispatch(QuoteAction::Update(field, input.value()));
        })
    };

    html! {
        <FormField
            id={field.input_id()}
            label={field.label(lang)}
            required={field.is_required()}
            error={error.clone()}
            hint={hint.map(AttrValue::Static)}
            class="full-width"
        >
            <textarea
                id={field.input_id()}
                rows="4"
                value={state.data.text_of(field).to_string()}
                aria-invalid={error.is_some().to_string()}
                aria-describedby={described_by}
                {oninput}
                onblur={blur_callback(state, field)}
            />
        </FormField>
    }
}

fn timeframe_field(state: &QuoteHandle, lang: Language) -> Html {
    let field = QuoteField::Timeframe;
    let error = error_for(state, field, lang);
    let selected = state.data.timeframe;
    let onchange = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            state.dispatch(QuoteAction::Update(field, select.value()));
        })
    };

    html! {
        <FormField id={field.input_id()} label={field.label(lang)} required={true} error={error.clone()}>
            <select
                id={field.input_id()}
                aria-invalid={error.is_some().to_string()}
                aria-describedby={error_id_for(field.input_id(), error.is_some())}
                {onchange}
                onblur={blur_callback(state, field)}
            >
                <option value="" selected={selected.is_none()}>{ t("Bitte wählen", "Please choose").get(lang) }</option>
                { for Timeframe::ALL.iter().map(|option| html! {
                    <option value={option.value()} selected={selected == Some(*option)}>{ option.label(lang) }</option>
                }) }
            </select>
        </FormField>
    }
}

fn step_fields(state: &QuoteHandle, lang: Language) -> Html {
    match state.step {
        FormStep::Contact => html! {
            <div class="form-grid">
                { input_field(state, QuoteField::CompanyName, InputKind::Text, lang) }
                { input_field(state, QuoteField::ContactPerson, InputKind::Text, lang) }
                { input_field(state, QuoteField::Email, InputKind::Email, lang) }
                { input_field(state, QuoteField::Phone, InputKind::Tel, lang) }
            </div>
        },
        FormStep::Route => html! {
            <div class="form-grid">
                <h4 class="full-width">{ t("Abholung", "Pickup").get(lang) }</h4>
                { input_field(state, QuoteField::PickupAddress, InputKind::Text, lang) }
                { input_field(state, QuoteField::PickupPostalCode, InputKind::Numeric, lang) }
                { input_field(state, QuoteField::PickupCity, InputKind::Text, lang) }
                <h4 class="full-width">{ t("Lieferung", "Delivery").get(lang) }</h4>
                { input_field(state, QuoteField::DeliveryAddress, InputKind::Text, lang) }
                { input_field(state, QuoteField::DeliveryPostalCode, InputKind::Numeric, lang) }
                { input_field(state, QuoteField::DeliveryCity, InputKind::Text, lang) }
            </div>
        },
        FormStep::Cargo => html! {
            <div class="form-grid">
                { textarea_field(state, QuoteField::GoodsDescription, None, lang) }
                { input_field(state, QuoteField::LengthCm, InputKind::Decimal, lang) }
                { input_field(state, QuoteField::WidthCm, InputKind::Decimal, lang) }
                { input_field(state, QuoteField::HeightCm, InputKind::Decimal, lang) }
                { input_field(state, QuoteField::WeightKg, InputKind::Decimal, lang) }
                { input_field(state, QuoteField::Pallets, InputKind::Numeric, lang) }
            </div>
        },
        FormStep::Schedule => schedule_fields(state, lang),
    }
}

fn schedule_fields(state: &QuoteHandle, lang: Language) -> Html {
    let on_recurring = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(QuoteAction::SetRecurring(input.checked()));
        })
    };
    let on_privacy = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(QuoteAction::SetPrivacyAccepted(input.checked()));
        })
    };
    let privacy = QuoteField::PrivacyAccepted;
    let privacy_error = error_for(state, privacy, lang);

    html! {
        <div class="form-grid">
            { timeframe_field(state, lang) }
            { input_field(state, QuoteField::PickupDate, InputKind::Date, lang) }
            <label class="checkbox full-width">
                <input type="checkbox" checked={state.data.recurring} onchange={on_recurring} />
                { t("Es handelt sich um einen regelmäßigen Transport", "This is a recurring shipment").get(lang) }
            </label>
            { textarea_field(
                state,
                QuoteField::Requirements,
                Some(t("z. B. Hebebühne, Kühlung, Gefahrgut, Zeitfenster", "e.g. tail lift, refrigeration, dangerous goods, time slot").get(lang)),
                lang,
            ) }
            <div class={classes!("full-width", privacy_error.is_some().then_some("has-error"))}>
                <label class="checkbox">
                    <input
                        id={privacy.input_id()}
                        type="checkbox"
                        checked={state.data.privacy_accepted}
                        aria-invalid={privacy_error.is_some().to_string()}
                        aria-describedby={error_id_for(privacy.input_id(), privacy_error.is_some())}
                        onchange={on_privacy}
                    />
                    <span>
                        { privacy.label(lang) }{" "}
                        <Link<Route> to={Route::Privacy}>{ t("Zur Datenschutzerklärung", "Read the privacy policy").get(lang) }</Link<Route>>
                        <span class="required-mark" aria-hidden="true">{" *"}</span>
                    </span>
                </label>
                if let Some(error) = privacy_error {
                    <p id={format!("{}-error", privacy.input_id())} class="form-error" role="alert">{ error }</p>
                }
            </div>
        </div>
    }
}

fn step_indicator(state: &QuoteHandle, lang: Language) -> Html {
    html! {
        <ol class="step-indicator">
            { for FormStep::ALL.iter().map(|step| {
                let step = *step;
                let reachable = state.can_visit(step);
                let onclick = {
                    let state = state.clone();
                    Callback::from(move |_: MouseEvent| state.dispatch(QuoteAction::GoTo(step)))
                };
                html! {
                    <li class={classes!(
                        "step",
                        (step == state.step).then_some("current"),
                        (step < state.step).then_some("done")
                    )}>
                        <button
                            type="button"
                            disabled={!reachable}
                            aria-current={(step == state.step).then_some("step")}
                            {onclick}
                        >
                            <span class="step-number">{ step.number() }</span>
                            <span class="step-title">{ step.title(lang) }</span>
                        </button>
                    </li>
                }
            }) }
        </ol>
    }
}

/// Shown after a failed next/submit attempt. Each entry jumps to its field.
fn error_summary(state: &QuoteHandle, lang: Language) -> Html {
    if state.errors.is_empty() {
        return html! {};
    }
    let heading = match (state.errors.len(), lang) {
        (1, Language::De) => "Bitte prüfen Sie 1 Angabe:".to_string(),
        (1, Language::En) => "Please check 1 field:".to_string(),
        (n, Language::De) => format!("Bitte prüfen Sie {} Angaben:", n),
        (n, Language::En) => format!("Please check {} fields:", n),
    };

    html! {
        <div class="error-summary" role="alert">
            <strong>{ heading }</strong>
            <ul>
                { for state.errors.iter().map(|(field, error)| {
                    let onclick = {
                        let state = state.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            state.dispatch(QuoteAction::GoTo(field.step()));
                            Timeout::new(0, move || dom::focus_element(field.input_id())).forget();
                        })
                    };
                    html! {
                        <li>
                            <a href={format!("#{}", field.input_id())} {onclick}>{ field.label(lang) }</a>
                            { format!(": {}", error.message(lang)) }
                        </li>
                    }
                }) }
            </ul>
        </div>
    }
}

fn success_panel(state: &QuoteHandle, lang: Language) -> Html {
    let Some(link) = &state.submitted else {
        return html! {};
    };
    let reset = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(QuoteAction::Reset))
    };

    html! {
        <div class="quote-success" role="status">
            <h3>{ t("Vielen Dank für Ihre Anfrage!", "Thank you for your request!").get(lang) }</h3>
            <p>{ t(
                "Ihr E-Mail-Programm sollte sich mit der vorbereiteten Anfrage geöffnet haben. Bitte senden Sie die E-Mail ab, wir melden uns umgehend.",
                "Your email program should have opened with the prepared request. Please send the email and we will get back to you shortly.",
            ).get(lang) }</p>
            if !link.is_valid {
                <p class="form-error">{ t(
                    "Einige Angaben fehlen in der Anfrage. Bitte ergänzen Sie diese in der E-Mail.",
                    "Some details are missing from the request. Please add them in the email.",
                ).get(lang) }</p>
            }
            <div class="quote-actions">
                <Button href={AttrValue::from(link.url.clone())}>
                    { t("E-Mail erneut öffnen", "Open email again").get(lang) }
                </Button>
                <Button variant={ButtonVariant::Ghost} onclick={reset}>
                    { t("Neue Anfrage", "New request").get(lang) }
                </Button>
            </div>
        </div>
    }
}

#[function_component(Quote)]
pub fn quote() -> Html {
    let lang = use_language();
    let state = use_reducer(QuoteState::default);
    // bumped on every next/submit attempt so the first invalid field gets focus
    let attempts = use_state(|| 0u32);

    {
        let submitted = state.submitted.clone();
        use_effect_with_deps(
            move |submitted| {
                if let Some(link) = submitted {
                    info!("Opening mail client for quote request");
                    dom::open_url(&link.url);
                }
                || ()
            },
            submitted,
        );
    }

    {
        let state = state.clone();
        use_effect_with_deps(
            move |attempts| {
                if *attempts > 0 {
                    if let Some(field) = state.step.fields().find(|f| state.visible_error(*f).is_some()) {
                        dom::focus_element(field.input_id());
                    }
                }
                || ()
            },
            *attempts,
        );
    }

    let onsubmit = {
        let state = state.clone();
        let attempts = attempts.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if state.step.next().is_some() {
                state.dispatch(QuoteAction::Next);
            } else {
                state.dispatch(QuoteAction::Submit(lang));
            }
            attempts.set(*attempts + 1);
        })
    };
    let back = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(QuoteAction::Back))
    };

    let is_last = state.step.next().is_none();

    html! {
        <section class="section" id="quote">
            <style>{QUOTE_STYLE}</style>
            { section_heading(&QUOTE_HEADING, lang) }
            <div class="quote-card">
                if state.submitted.is_some() {
                    { success_panel(&state, lang) }
                } else {
                    { step_indicator(&state, lang) }
                    <form class="quote-form" novalidate={true} {onsubmit}>
                        <h3>{ format!("{} {}/4: {}", t("Schritt", "Step").get(lang), state.step.number(), state.step.title(lang)) }</h3>
                        if *attempts > 0 {
                            { error_summary(&state, lang) }
                        }
                        { step_fields(&state, lang) }
                        <div class="quote-actions">
                            if state.step.previous().is_some() {
                                <Button variant={ButtonVariant::Ghost} onclick={back}>
                                    { t("Zurück", "Back").get(lang) }
                                </Button>
                            }
                            <Button button_type="submit">
                                { if is_last {
                                    t("Anfrage erstellen", "Create request").get(lang)
                                } else {
                                    t("Weiter", "Next").get(lang)
                                } }
                            </Button>
                        </div>
                        <p class="form-note">{ t("* Pflichtfeld", "* Required field").get(lang) }</p>
                    </form>
                }
            </div>
        </section>
    }
}

const QUOTE_STYLE: &str = r#"
.quote-card {
    max-width: 860px;
    margin: 0 auto;
    background: #fff;
    border-radius: 14px;
    box-shadow: 0 10px 40px rgba(12, 27, 46, 0.12);
    padding: 2rem;
}
.step-indicator {
    list-style: none;
    display: flex;
    gap: 0.5rem;
    padding: 0;
    margin: 0 0 2rem;
}
.step {
    flex: 1;
}
.step button {
    width: 100%;
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.6rem;
    border: none;
    border-bottom: 3px solid #e4e7eb;
    background: none;
    color: #7b8794;
    cursor: pointer;
}
.step button:disabled {
    cursor: default;
}
.step.current button {
    color: #0c1b2e;
    border-bottom-color: #f28c28;
    font-weight: 600;
}
.step.done button {
    color: #0c1b2e;
    border-bottom-color: #0c1b2e;
}
.step-number {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 1.6rem;
    height: 1.6rem;
    border-radius: 50%;
    background: #f5f7fa;
}
.form-grid {
    display: grid;
    grid-template-columns: repeat(2, minmax(0, 1fr));
    gap: 1rem 1.5rem;
}
.form-grid .full-width {
    grid-column: 1 / -1;
}
.form-grid h4 {
    margin: 0.5rem 0 0;
    color: #0c1b2e;
}
.form-field {
    display: flex;
    flex-direction: column;
    gap: 0.35rem;
}
.form-field input, .form-field select, .form-field textarea {
    padding: 0.7rem 0.8rem;
    border: 1px solid #cbd2d9;
    border-radius: 6px;
    font: inherit;
}
.form-field.has-error input, .form-field.has-error select, .form-field.has-error textarea {
    border-color: #d64545;
}
.form-error {
    color: #d64545;
    font-size: 0.85rem;
    margin: 0;
}
.form-hint, .form-note {
    color: #7b8794;
    font-size: 0.85rem;
}
.checkbox {
    display: flex;
    gap: 0.6rem;
    align-items: flex-start;
    line-height: 1.4;
}
.quote-actions {
    display: flex;
    justify-content: flex-end;
    gap: 0.75rem;
    margin-top: 1.5rem;
}
.error-summary {
    margin-bottom: 1.5rem;
    padding: 1rem 1.25rem;
    border-left: 4px solid #d64545;
    background: #fdf2f2;
    color: #7a1f1f;
}
.error-summary ul {
    margin: 0.5rem 0 0;
    padding-left: 1.2rem;
}
.error-summary a {
    color: inherit;
    font-weight: 600;
}
.quote-success {
    text-align: center;
}
.quote-success .quote-actions {
    justify-content: center;
}
@media (max-width: 700px) {
    .form-grid {
        grid-template-columns: 1fr;
    }
    .step-title {
        display: none;
    }
}
"#;
