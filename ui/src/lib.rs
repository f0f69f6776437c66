//! Stateless presentational primitives shared by every page.

use dioxus::prelude::*;

mod icons;
pub use icons::{IconPencil, IconTrash};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Success,
    Warning,
    Destructive,
    Outline,
}

impl BadgeVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            BadgeVariant::Default => "default",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Outline => "outline",
        }
    }
}

#[component]
pub fn Badge(#[props(default)] variant: BadgeVariant, children: Element) -> Element {
    rsx! {
        span { class: "badge badge-{variant.as_str()}", {children} }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Danger,
}

impl ButtonVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Danger => "danger",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    #[props(default)] submit: bool,
    #[props(default)] title: String,
    #[props(default)] class: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "btn btn-{variant.as_str()} {class}",
            r#type: if submit { "submit" } else { "button" },
            title: "{title}",
            disabled,
            onclick: move |e| {
                if let Some(handler) = onclick {
                    handler.call(e);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn Card(
    #[props(default)] class: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let interactive = onclick.is_some();

    rsx! {
        div {
            class: "card {class}",
            class: if interactive { "card-interactive" },
            onclick: move |e| {
                if let Some(handler) = onclick {
                    handler.call(e);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn CardHeader(title: String, #[props(default)] subtitle: String) -> Element {
    rsx! {
        div { class: "card-header",
            h2 { class: "card-title", "{title}" }
            if !subtitle.is_empty() {
                p { class: "card-subtitle", "{subtitle}" }
            }
        }
    }
}

#[component]
pub fn CardBody(children: Element) -> Element {
    rsx! {
        div { class: "card-body", {children} }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AvatarSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// A round picture, or the initials when there is no picture.
#[component]
pub fn Avatar(
    initials: String,
    #[props(default)] src: String,
    #[props(default)] size: AvatarSize,
) -> Element {
    let size = match size {
        AvatarSize::Small => "avatar-sm",
        AvatarSize::Medium => "avatar-md",
        AvatarSize::Large => "avatar-lg",
    };

    rsx! {
        div { class: "avatar {size}",
            if !src.is_empty() {
                img { class: "avatar-image", src: "{src}", alt: "{initials}" }
            } else {
                span { class: "avatar-fallback", "{initials}" }
            }
        }
    }
}

#[component]
pub fn LoadingSpinner(#[props(default)] label: String) -> Element {
    rsx! {
        div { class: "loading", role: "status",
            div { class: "spinner" }
            if !label.is_empty() {
                span { class: "loading-label", "{label}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn badge_renders_variant_class() {
        fn app() -> Element {
            rsx! { Badge { variant: BadgeVariant::Destructive, "Resigned" } }
        }

        let html = render(app);
        assert!(html.contains("badge badge-destructive"), "{html}");
        assert!(html.contains("Resigned"));
    }

    #[test]
    fn avatar_falls_back_to_initials() {
        fn app() -> Element {
            rsx! {
                Avatar { initials: "JD" }
                Avatar { initials: "AS", src: "/avatars/adam.png" }
            }
        }

        let html = render(app);
        assert!(html.contains("avatar-fallback"));
        assert!(html.contains(">JD<"));
        assert!(html.contains("/avatars/adam.png"));
    }

    #[test]
    fn disabled_button() {
        fn app() -> Element {
            rsx! { Button { variant: ButtonVariant::Danger, disabled: true, "Delete" } }
        }

        let html = render(app);
        assert!(html.contains("btn btn-danger"));
        assert!(html.contains("disabled"));
    }
}
