use dioxus::prelude::*;

#[derive(Clone, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    fn get_classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn",
            ButtonVariant::Secondary => "btn btn-secondary",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    pub children: Element,
    #[props(into)]
    pub onclick: EventHandler<MouseEvent>,
    #[props(optional, default)]
    pub variant: ButtonVariant,
    #[props(optional, default)]
    pub disabled: bool,
    #[props(optional, into)]
    pub class: String,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let variant_classes = props.variant.get_classes();
    let disabled_classes = if props.disabled { "btn-disabled" } else { "" };
    let additional_classes = props.class;

    rsx! {
        button {
            class: "{variant_classes} {disabled_classes} {additional_classes}",
            onclick: move |evt| {
                if !props.disabled {
                    props.onclick.call(evt)
                }
            },
            disabled: props.disabled,
            {props.children}
        }
    }
}
