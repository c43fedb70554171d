use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub icon: Option<AttrValue>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class={classes!("card", props.class.clone())}>
            if let Some(icon) = &props.icon {
                <div class="card-icon" aria-hidden="true">{ icon.clone() }</div>
            }
            if let Some(title) = &props.title {
                <h3 class="card-title">{ title.clone() }</h3>
            }
            <div class="card-body">
                { for props.children.iter() }
            </div>
        </div>
    }
}
