//! Typography Component
//!
//! Renders text at one of the fixed size tokens. The token picks the
//! default element and utility classes; callers may override the element
//! or skip the wrapper entirely and render their own element with the
//! resolved classes (pass-through).

use dioxus::prelude::*;
use essential_core::typography::{resolve, Rendering, Size, Tag};

/// What a pass-through callback receives.
#[derive(Clone, PartialEq)]
pub struct TypographySlot {
    /// Resolved classes to put on the caller's element
    pub class: String,
    /// The Typography children
    pub children: Element,
}

/// Properties for the Typography component
#[derive(Clone, PartialEq, Props)]
pub struct TypographyProps {
    /// Size token
    pub size: Size,
    /// Element override; ignored when `as_child` is set
    #[props(default)]
    pub tag: Option<Tag>,
    /// Classes merged over the size classes
    #[props(default)]
    pub class: Option<String>,
    /// Render through the caller's own element instead of a wrapper
    #[props(default)]
    pub as_child: Option<Callback<TypographySlot, Element>>,
    pub children: Element,
}

/// Text at a fixed typographic size
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Typography { size: Size::Hero, "Essential UI is a reusable UI library." }
///
///     Typography { size: Size::P2, tag: Tag::Span, "inline caption" }
///
///     // No wrapper: the link itself carries the size classes.
///     Typography {
///         size: Size::S1,
///         as_child: move |slot: TypographySlot| rsx! {
///             a { href: "/auth/login", class: "{slot.class}", {slot.children} }
///         },
///         "Sign in"
///     }
/// }
/// ```
#[component]
pub fn Typography(props: TypographyProps) -> Element {
    let rendering = resolve(
        props.size,
        props.tag,
        props.as_child.is_some(),
        props.class.as_deref(),
    );

    match rendering {
        Rendering::PassThrough { class } => match &props.as_child {
            Some(render) => render.call(TypographySlot {
                class,
                children: props.children.clone(),
            }),
            None => rsx! { {props.children} },
        },
        Rendering::Element { tag, class } => render_tag(tag, class, props.children),
    }
}

fn render_tag(tag: Tag, class: String, children: Element) -> Element {
    match tag {
        Tag::H1 => rsx! { h1 { class, {children} } },
        Tag::H2 => rsx! { h2 { class, {children} } },
        Tag::H3 => rsx! { h3 { class, {children} } },
        Tag::H4 => rsx! { h4 { class, {children} } },
        Tag::H5 => rsx! { h5 { class, {children} } },
        Tag::H6 => rsx! { h6 { class, {children} } },
        Tag::P => rsx! { p { class, {children} } },
        Tag::Span => rsx! { span { class, {children} } },
        Tag::Div => rsx! { div { class, {children} } },
        Tag::Label => rsx! { label { class, {children} } },
        Tag::Strong => rsx! { strong { class, {children} } },
        Tag::Em => rsx! { em { class, {children} } },
        Tag::Small => rsx! { small { class, {children} } },
        Tag::Blockquote => rsx! { blockquote { class, {children} } },
    }
}

/// Sample line rendered at every size by the showcase page.
pub const SHOWCASE_TEXT: &str = "Sixty zippers were quickly picked";

/// Sizes shown on the showcase page, largest first.
pub fn showcase_sizes() -> Vec<Size> {
    vec![
        Size::Hero,
        Size::H1,
        Size::H2,
        Size::H3,
        Size::S1,
        Size::S2,
        Size::P1,
        Size::P2,
        Size::O1,
        Size::C1,
        Size::Q1,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn showcase_covers_every_size() {
        let sizes = showcase_sizes();
        assert_eq!(sizes.len(), Size::ALL.len());
        for size in Size::ALL {
            assert!(sizes.contains(&size), "{size} missing from showcase");
        }
    }
}
