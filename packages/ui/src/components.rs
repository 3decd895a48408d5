//! Small presentational building blocks for the auth pages.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Contained,
    Outlined,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Contained => "btn btn--contained",
            ButtonVariant::Outlined => "btn btn--outlined",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    /// Render as the form's submit button.
    #[props(default)] submit: bool,
    #[props(default)] disabled: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let class = format!("{} w-full mt-5", variant.class());
    let button_type = if submit { "submit" } else { "button" };

    rsx! {
        button {
            class: class,
            r#type: button_type,
            disabled: disabled,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

/// Labelled input with required marker and helper text for errors.
#[component]
pub fn TextField(
    id: String,
    label: String,
    #[props(default = "text".to_string())] input_type: String,
    value: String,
    /// Helper text shown under the input; empty when the value is valid.
    #[props(default)] error: String,
    #[props(default)] required: bool,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let invalid = !error.is_empty();
    let state_class = if invalid {
        "text-field text-field--error"
    } else {
        "text-field"
    };

    rsx! {
        div {
            class: "{state_class} mt-5",
            label {
                r#for: "{id}",
                class: "text-field__label",
                "{label}"
            }
            div {
                class: "text-field__control",
                input {
                    id: "{id}",
                    name: "{id}",
                    class: "text-field__input",
                    r#type: input_type,
                    value: "{value}",
                    "aria-invalid": invalid,
                    oninput: move |evt| oninput.call(evt),
                }
                if required {
                    span { class: "text-field__adornment", "*" }
                }
            }
            p {
                class: "text-field__helper",
                "{error}"
            }
        }
    }
}

#[component]
pub fn Alert(message: String) -> Element {
    rsx! {
        div {
            class: "alert alert--error",
            role: "alert",
            "{message}"
        }
    }
}

#[component]
pub fn Divider(children: Element) -> Element {
    rsx! {
        div {
            class: "divider mt-5",
            span { class: "divider__label", {children} }
        }
    }
}
