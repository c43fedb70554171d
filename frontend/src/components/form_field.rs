use yew::prelude::*;

/// Label, control and inline error for one form input. The control is passed as children.
#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub hint: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let error_id = format!("{}-error", props.id);
    html! {
        <div class={classes!("form-field", props.error.is_some().then_some("has-error"), props.class.clone())}>
            <label for={props.id.clone()}>
                { props.label.clone() }
                if props.required {
                    <span class="required-mark" aria-hidden="true">{" *"}</span>
                }
            </label>
            { for props.children.iter() }
            if let Some(hint) = &props.hint {
                <small class="form-hint">{ hint.clone() }</small>
            }
            if let Some(error) = &props.error {
                <p id={error_id} class="form-error" role="alert">{ error }</p>
            }
        </div>
    }
}

/// `aria-describedby` value for an input wrapped in [`FormField`].
pub fn error_id_for(id: &str, has_error: bool) -> Option<String> {
    has_error.then(|| format!("{}-error", id))
}
