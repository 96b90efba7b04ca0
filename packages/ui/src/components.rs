//! Small shared form components.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Danger,
}

impl ButtonVariant {
    fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "px-4 py-2 bg-[#1B3A6A] text-white rounded hover:bg-[#486AA0] disabled:opacity-50 disabled:cursor-not-allowed cursor-pointer transition-colors duration-150"
            }
            ButtonVariant::Outline => {
                "px-4 py-2 border rounded text-gray-700 hover:bg-gray-50 disabled:opacity-50 cursor-pointer transition-colors duration-150"
            }
            ButtonVariant::Danger => {
                "px-4 py-2 bg-red-600 text-white rounded hover:bg-red-700 disabled:opacity-50 cursor-pointer transition-colors duration-150"
            }
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "".to_string())] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let ty = r#type.clone();
    rsx! {
        button {
            class: "{variant.classes()} {class}",
            r#type: "{ty}",
            disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default = "".to_string())] id: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "".to_string())] class: String,
    #[props(default)] disabled: bool,
    value: String,
    #[props(default)] oninput: EventHandler<FormEvent>,
) -> Element {
    let base = if disabled {
        "w-full p-2 border rounded bg-gray-100 text-gray-500"
    } else {
        "w-full p-2 border rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
    };
    let ty = r#type.clone();
    rsx! {
        input {
            id: "{id}",
            r#type: "{ty}",
            placeholder: "{placeholder}",
            class: "{base} {class}",
            disabled,
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Label(#[props(default = "".to_string())] html_for: String, children: Element) -> Element {
    rsx! {
        label {
            r#for: "{html_for}",
            class: "block text-sm font-medium text-gray-700 mb-1",
            {children}
        }
    }
}

/// Centered spinner used while a guarded view or list is loading.
#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            class: "flex items-center justify-center min-h-[8rem]",
            div { class: "animate-spin rounded-full h-12 w-12 border-b-2 border-blue-600" }
        }
    }
}
