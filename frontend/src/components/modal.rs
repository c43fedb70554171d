use yew::prelude::*;
use yew_hooks::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub footer: Option<Html>,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    {
        let open = props.open;
        let on_close = props.on_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if open && e.key() == "Escape" {
                on_close.emit(());
            }
        });
    }

    if !props.open {
        return html! {};
    }

    let close_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    // keep clicks inside the dialog from reaching the backdrop
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={close_backdrop}>
            <div class="modal" role="dialog" aria-modal="true" aria-label={props.title.clone()} onclick={stop}>
                <div class="modal-header">
                    <h2>{ props.title.clone() }</h2>
                    <button class="modal-close" aria-label="Close" onclick={close_button}>{"✕"}</button>
                </div>
                <div class="modal-body">
                    { for props.children.iter() }
                </div>
                if let Some(footer) = &props.footer {
                    <div class="modal-footer">{ footer.clone() }</div>
                }
            </div>
        </div>
    }
}
