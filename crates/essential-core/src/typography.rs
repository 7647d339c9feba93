//! Typography size resolution.
//!
//! A closed set of size tokens, each mapped to a default structural tag and
//! a fixed list of utility classes. [`resolve`] turns a token plus caller
//! options into a [`Rendering`], which the UI layer turns into markup.

use std::fmt;
use std::str::FromStr;

use crate::class::merge_classes;
use crate::error::FormError;

/// Typography size tokens.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Size {
    Hero,
    H1,
    H2,
    H3,
    S1,
    S2,
    O1,
    C1,
    Q1,
    P1,
    P2,
}

impl Size {
    /// Every size token, in table order.
    pub const ALL: [Size; 11] = [
        Size::Hero,
        Size::H1,
        Size::H2,
        Size::H3,
        Size::S1,
        Size::S2,
        Size::O1,
        Size::C1,
        Size::Q1,
        Size::P1,
        Size::P2,
    ];

    /// Token name as written by callers (`"hero"`, `"h1"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Hero => "hero",
            Size::H1 => "h1",
            Size::H2 => "h2",
            Size::H3 => "h3",
            Size::S1 => "s1",
            Size::S2 => "s2",
            Size::O1 => "o1",
            Size::C1 => "c1",
            Size::Q1 => "q1",
            Size::P1 => "p1",
            Size::P2 => "p2",
        }
    }

    /// Default element tag for this size.
    pub fn tag(&self) -> Tag {
        match self {
            Size::Hero | Size::H1 | Size::H2 => Tag::H2,
            Size::H3 => Tag::H3,
            Size::S1 | Size::S2 => Tag::H4,
            Size::O1 | Size::C1 => Tag::Span,
            Size::Q1 | Size::P1 | Size::P2 => Tag::P,
        }
    }

    /// Utility classes for this size.
    pub fn classes(&self) -> &'static str {
        match self {
            Size::Hero => "text-3xl font-normal tracking-tight lg:text-5xl",
            Size::H1 => "text-xl font-normal tracking-tight lg:text-4xl",
            Size::H2 => "text-lg font-normal tracking-tight lg:text-2xl",
            Size::H3 => "text-md font-normal tracking-tight lg:text-lg",
            Size::S1 => "font-bold text-base",
            Size::S2 => "font-bold text-sm",
            Size::O1 => "block text-sm font-bold tracking-wide",
            Size::C1 => "block text-xs",
            Size::Q1 => "text-md italic tracking-tight lg:text-lg",
            Size::P1 => "text-base",
            Size::P2 => "text-sm",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Size::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| FormError::UnknownSize(s.to_string()))
    }
}

/// Elements the typography component can render as.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Tag {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    P,
    Span,
    Div,
    Label,
    Strong,
    Em,
    Small,
    Blockquote,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::H1 => "h1",
            Tag::H2 => "h2",
            Tag::H3 => "h3",
            Tag::H4 => "h4",
            Tag::H5 => "h5",
            Tag::H6 => "h6",
            Tag::P => "p",
            Tag::Span => "span",
            Tag::Div => "div",
            Tag::Label => "label",
            Tag::Strong => "strong",
            Tag::Em => "em",
            Tag::Small => "small",
            Tag::Blockquote => "blockquote",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = match s {
            "h1" => Tag::H1,
            "h2" => Tag::H2,
            "h3" => Tag::H3,
            "h4" => Tag::H4,
            "h5" => Tag::H5,
            "h6" => Tag::H6,
            "p" => Tag::P,
            "span" => Tag::Span,
            "div" => Tag::Div,
            "label" => Tag::Label,
            "strong" => Tag::Strong,
            "em" => Tag::Em,
            "small" => Tag::Small,
            "blockquote" => Tag::Blockquote,
            other => return Err(FormError::UnknownTag(other.to_string())),
        };
        Ok(tag)
    }
}

/// How a typography node ends up in the markup.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Rendering {
    /// Wrap children in `tag` carrying `class`.
    Element { tag: Tag, class: String },
    /// No wrapper: the caller's own element receives `class`.
    PassThrough { class: String },
}

impl Rendering {
    pub fn class(&self) -> &str {
        match self {
            Rendering::Element { class, .. } | Rendering::PassThrough { class } => class,
        }
    }

    pub fn tag(&self) -> Option<Tag> {
        match self {
            Rendering::Element { tag, .. } => Some(*tag),
            Rendering::PassThrough { .. } => None,
        }
    }
}

/// Resolve a size token and caller options into a rendering.
///
/// `tag` is ignored when `pass_through` is set. Caller classes are merged
/// after the size classes and win on conflicts.
pub fn resolve(size: Size, tag: Option<Tag>, pass_through: bool, class: Option<&str>) -> Rendering {
    let class = merge_classes([size.classes(), class.unwrap_or("")]);

    if pass_through {
        Rendering::PassThrough { class }
    } else {
        Rendering::Element {
            tag: tag.unwrap_or_else(|| size.tag()),
            class,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_size_resolves_to_table_defaults() {
        let expected = [
            (Size::Hero, Tag::H2),
            (Size::H1, Tag::H2),
            (Size::H2, Tag::H2),
            (Size::H3, Tag::H3),
            (Size::S1, Tag::H4),
            (Size::S2, Tag::H4),
            (Size::O1, Tag::Span),
            (Size::C1, Tag::Span),
            (Size::Q1, Tag::P),
            (Size::P1, Tag::P),
            (Size::P2, Tag::P),
        ];
        for (size, tag) in expected {
            let rendering = resolve(size, None, false, None);
            assert_eq!(
                rendering,
                Rendering::Element {
                    tag,
                    class: size.classes().to_string()
                },
                "size {size}"
            );
        }
    }

    #[test]
    fn override_tag_is_used() {
        let rendering = resolve(Size::P1, Some(Tag::Span), false, None);
        assert_eq!(rendering.tag(), Some(Tag::Span));
    }

    #[test]
    fn pass_through_ignores_override() {
        let rendering = resolve(Size::Hero, Some(Tag::H1), true, None);
        assert_eq!(
            rendering,
            Rendering::PassThrough {
                class: Size::Hero.classes().to_string()
            }
        );
    }

    #[test]
    fn caller_classes_win_conflicts() {
        let rendering = resolve(Size::S2, None, false, Some("text-lg text-red-500"));
        assert_eq!(rendering.class(), "font-bold text-lg text-red-500");
    }

    #[test]
    fn size_tokens_parse() {
        for size in Size::ALL {
            assert_eq!(size.as_str().parse::<Size>(), Ok(size));
        }
        assert_eq!(
            "h7".parse::<Size>(),
            Err(FormError::UnknownSize("h7".to_string()))
        );
    }

    #[test]
    fn tags_parse() {
        assert_eq!("blockquote".parse::<Tag>(), Ok(Tag::Blockquote));
        assert!("marquee".parse::<Tag>().is_err());
    }
}
