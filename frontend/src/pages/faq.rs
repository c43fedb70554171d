use yew::prelude::*;

use crate::content::faq::FAQ;
use crate::content::site::FAQ_HEADING;
use crate::pages::sections::section_heading;
use crate::prefs::context::use_language;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    id: AttrValue,
    question: AttrValue,
    open: bool,
    on_toggle: Callback<()>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };
    let answer_id = format!("faq-{}", props.id);

    html! {
        <div class={classes!("faq-item", props.open.then_some("open"))}>
            <button
                class="faq-question"
                aria-expanded={props.open.to_string()}
                aria-controls={answer_id.clone()}
                onclick={toggle}
            >
                <span class="question-text">{ props.question.clone() }</span>
                <span class="toggle-icon">{ if props.open { "−" } else { "+" } }</span>
            </button>
            <div class="faq-answer" id={answer_id} hidden={!props.open}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

/// Accordion with at most one answer expanded.
#[function_component(Faq)]
pub fn faq() -> Html {
    let lang = use_language();
    let open = use_state(|| None::<&'static str>);

    html! {
        <section class="section section-alt" id="faq">
            <style>{FAQ_STYLE}</style>
            { section_heading(&FAQ_HEADING, lang) }
            <div class="faq-list">
                { for FAQ.iter().map(|entry| {
                    let is_open = *open == Some(entry.id);
                    let on_toggle = {
                        let open = open.clone();
                        let id = entry.id;
                        Callback::from(move |_: ()| open.set(if is_open { None } else { Some(id) }))
                    };
                    html! {
                        <FaqItem id={entry.id} question={entry.question.get(lang)} open={is_open} {on_toggle}>
                            <p>{ entry.answer.get(lang) }</p>
                        </FaqItem>
                    }
                }) }
            </div>
        </section>
    }
}

const FAQ_STYLE: &str = r#"
.faq-list {
    max-width: 800px;
    margin: 0 auto;
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
}
.faq-item {
    background: #fff;
    border: 1px solid #e4e7eb;
    border-radius: 10px;
    overflow: hidden;
}
.faq-question {
    width: 100%;
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 1rem;
    padding: 1.1rem 1.25rem;
    background: none;
    border: none;
    text-align: left;
    font-size: 1.05rem;
    font-weight: 600;
    color: #0c1b2e;
    cursor: pointer;
}
.toggle-icon {
    color: #f28c28;
    font-size: 1.4rem;
}
.faq-answer {
    padding: 0 1.25rem 1.1rem;
    color: #3e4c59;
    line-height: 1.6;
}
"#;
