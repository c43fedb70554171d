use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    /// Renders a link styled as a button instead of a `<button>`.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let class = classes!("btn", props.variant.class(), props.class.clone());
    let onclick = props.onclick.clone();

    match &props.href {
        Some(href) => html! {
            <a {class} href={href.clone()} onclick={onclick}>
                { for props.children.iter() }
            </a>
        },
        None => html! {
            <button {class} type={props.button_type.clone()} disabled={props.disabled} onclick={onclick}>
                { for props.children.iter() }
            </button>
        },
    }
}
