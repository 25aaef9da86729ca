use std::rc::Rc;

use log::{debug, warn};
use web_sys::{Element, Event, FocusEvent, InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::dom;
use crate::validation::{ContactFormState, FieldKind, FormField, SubmitOutcome};

pub const CONTACT_FORM_ID: &str = "contactForm";

const SERVICE_OPTIONS: &[(&str, &str)] = &[
    ("revenue-cycle", "Revenue cycle management"),
    ("credentialing", "Provider credentialing"),
    ("staffing", "Operations staffing"),
    ("compliance", "Compliance review"),
    ("other", "Something else"),
];

pub fn contact_fields() -> Vec<FormField> {
    vec![
        FormField::new("name", "Full name", FieldKind::Text, true),
        FormField::new("email", "Work email", FieldKind::Email, true),
        FormField::new("phone", "Phone", FieldKind::Tel, false),
        FormField::new("organization", "Organization", FieldKind::Text, false),
        FormField::new("service", "How can we help?", FieldKind::Select, true),
        FormField::new("message", "Message", FieldKind::TextArea, true),
    ]
}

pub enum FormAction {
    Input(usize, String),
    Blur(usize, String),
    Replace(ContactFormState),
}

impl Reducible for ContactFormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if let FormAction::Replace(state) = action {
            return Rc::new(state);
        }
        let mut next = (*self).clone();
        match action {
            FormAction::Input(index, value) => next.input(index, value),
            FormAction::Blur(index, value) => {
                next.set_value(index, value);
                next.blur(index);
                if let Some(field) = next.fields.get(index) {
                    debug!("Field {} validated on blur: {:?}", field.name, field.error);
                }
            }
            FormAction::Replace(_) => {}
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub endpoint: AttrValue,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let form = use_reducer(|| ContactFormState::new(contact_fields()));
    let node_refs = use_state(|| (0..form.fields.len()).map(|_| NodeRef::default()).collect::<Vec<_>>());

    let onsubmit = {
        let form = form.clone();
        let node_refs = node_refs.clone();
        Callback::from(move |e: SubmitEvent| {
            let mut next = (*form).clone();
            // The DOM holds the freshest values; state may lag a pending render.
            for (index, node) in node_refs.iter().enumerate() {
                if let Some(value) = node.get().and_then(|n| dom::control_value(n.as_ref())) {
                    next.set_value(index, value);
                }
            }

            match next.submit() {
                SubmitOutcome::Blocked { first_invalid } => {
                    e.prevent_default();
                    debug!("Contact form blocked, first invalid field: {}", first_invalid);
                    if let Some(element) = node_refs[first_invalid].cast::<Element>() {
                        if let Err(err) = dom::focus(&element, false) {
                            warn!("Could not focus invalid field: {}", err);
                        }
                    }
                }
                SubmitOutcome::Proceed => debug!("Contact form valid, submitting"),
            }
            form.dispatch(FormAction::Replace(next));
        })
    };

    let on_action = {
        let dispatcher = form.dispatcher();
        Callback::from(move |action: FormAction| dispatcher.dispatch(action))
    };
    let submitting = form.submitting;

    html! {
        <form
            id={CONTACT_FORM_ID}
            class="contact-form"
            action={props.endpoint.clone()}
            method="POST"
            novalidate=true
            {onsubmit}
        >
            { for form.fields.iter().enumerate().map(|(index, field)| html! {
                <FieldControl
                    field={field.clone()}
                    index={index}
                    node_ref={node_refs[index].clone()}
                    on_action={on_action.clone()}
                />
            }) }

            <button type="submit" class="submit-btn" disabled={submitting}>
                { if submitting { "Sending..." } else { "Send message" } }
            </button>

            <style>
                {r#"
                .contact-form {
                    display: grid;
                    gap: 1.25rem;
                    max-width: 640px;
                    margin: 0 auto;
                }

                .form-group {
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                }

                .form-group label {
                    font-weight: 600;
                    color: #ddd;
                }

                .form-group input,
                .form-group select,
                .form-group textarea {
                    padding: 0.8rem 1rem;
                    border-radius: 6px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: rgba(255, 255, 255, 0.05);
                    color: #fff;
                    font-size: 1rem;
                }

                .form-group textarea {
                    min-height: 140px;
                    resize: vertical;
                }

                .form-group .error {
                    border-color: #ff6b6b;
                }

                .form-error {
                    display: none;
                    color: #ff6b6b;
                    font-size: 0.9rem;
                }

                .form-error.show {
                    display: block;
                }

                .submit-btn {
                    padding: 0.9rem 1.5rem;
                    border: none;
                    border-radius: 6px;
                    background: #1E90FF;
                    color: #fff;
                    font-size: 1.05rem;
                    cursor: pointer;
                }

                .submit-btn:disabled {
                    opacity: 0.7;
                    cursor: wait;
                }
                "#}
            </style>
        </form>
    }
}

#[derive(Properties, PartialEq)]
struct FieldControlProps {
    field: FormField,
    index: usize,
    node_ref: NodeRef,
    on_action: Callback<FormAction>,
}

#[function_component(FieldControl)]
fn field_control(props: &FieldControlProps) -> Html {
    let FieldControlProps { field, index, node_ref, on_action } = props;
    let index = *index;

    let onblur = {
        let on_action = on_action.clone();
        Callback::from(move |e: FocusEvent| {
            if let Some(value) = dom::event_value(&e) {
                on_action.emit(FormAction::Blur(index, value));
            }
        })
    };
    let on_value = {
        let on_action = on_action.clone();
        move |e: &Event| {
            if let Some(value) = dom::event_value(e) {
                on_action.emit(FormAction::Input(index, value));
            }
        }
    };
    let oninput = {
        let on_value = on_value.clone();
        Callback::from(move |e: InputEvent| on_value(&e))
    };
    let onchange = Callback::from(move |e: Event| on_value(&e));

    let id = format!("contact-{}", field.name);
    let error_id = field.error_id();
    let invalid = field.error.is_some();
    let class = classes!(invalid.then(|| "error"));
    let aria_invalid = invalid.then(|| "true");

    let control = match field.kind {
        FieldKind::Select => html! {
            <select
                id={id.clone()}
                name={field.name}
                ref={node_ref.clone()}
                {class}
                required={field.required}
                aria-invalid={aria_invalid}
                aria-describedby={error_id.clone()}
                {onblur}
                {onchange}
            >
                <option value="" selected={field.value.is_empty()}>{"Select an option"}</option>
                { for SERVICE_OPTIONS.iter().map(|(value, label)| html! {
                    <option value={*value} selected={field.value == *value}>{*label}</option>
                }) }
            </select>
        },
        FieldKind::TextArea => html! {
            <textarea
                id={id.clone()}
                name={field.name}
                ref={node_ref.clone()}
                {class}
                required={field.required}
                value={field.value.clone()}
                aria-invalid={aria_invalid}
                aria-describedby={error_id.clone()}
                {onblur}
                {oninput}
            />
        },
        kind => {
            let input_type = match kind {
                FieldKind::Email => "email",
                FieldKind::Tel => "tel",
                _ => "text",
            };
            html! {
                <input
                    type={input_type}
                    id={id.clone()}
                    name={field.name}
                    ref={node_ref.clone()}
                    {class}
                    required={field.required}
                    value={field.value.clone()}
                    aria-invalid={aria_invalid}
                    aria-describedby={error_id.clone()}
                    {onblur}
                    {oninput}
                />
            }
        }
    };

    html! {
        <div class="form-group">
            <label for={id}>
                {field.label}
                { if field.required { html! { <span aria-hidden="true">{" *"}</span> } } else { html! {} } }
            </label>
            { control }
            <div
                id={error_id}
                class={classes!("form-error", invalid.then(|| "show"))}
                role="alert"
            >
                { field.error.map(|e| e.to_string()).unwrap_or_default() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldError;

    fn reduce(state: Rc<ContactFormState>, action: FormAction) -> Rc<ContactFormState> {
        Reducible::reduce(state, action)
    }

    #[test]
    fn blur_validates_the_value_it_carries() {
        let state = Rc::new(ContactFormState::new(contact_fields()));
        let state = reduce(state, FormAction::Blur(1, "not-an-email".into()));
        assert_eq!(state.fields[1].value, "not-an-email");
        assert_eq!(state.fields[1].error, Some(FieldError::InvalidEmail));

        let state = reduce(state, FormAction::Blur(1, "dana@clinic.org".into()));
        assert_eq!(state.fields[1].error, None);
    }

    #[test]
    fn input_clears_error_without_revalidating() {
        let state = Rc::new(ContactFormState::new(contact_fields()));
        let state = reduce(state, FormAction::Blur(0, String::new()));
        assert_eq!(state.fields[0].error, Some(FieldError::Required));

        let state = reduce(state, FormAction::Input(0, " ".into()));
        assert_eq!(state.fields[0].error, None);
    }

    #[test]
    fn out_of_range_blur_leaves_state_alone() {
        let state = Rc::new(ContactFormState::new(contact_fields()));
        let next = reduce(Rc::clone(&state), FormAction::Blur(99, "x".into()));
        assert_eq!(*next, *state);
    }
}
