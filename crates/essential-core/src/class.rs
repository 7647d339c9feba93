//! Utility class merging.
//!
//! Components build their `class` attribute from a fixed base list plus
//! conditional and caller-supplied lists. Merging keeps the first
//! occurrence order of surviving classes and lets a later utility replace
//! an earlier one from the same conflict group, so `"text-sm"` followed by
//! `"text-lg"` yields only `"text-lg"`.

/// Merge whitespace-separated class lists, later lists winning conflicts.
///
/// Empty parts are skipped and exact duplicates collapse to one entry.
///
/// # Example
///
/// ```
/// use essential_core::merge_classes;
///
/// let class = merge_classes(["font-bold text-sm", "text-lg"]);
/// assert_eq!(class, "font-bold text-lg");
/// ```
pub fn merge_classes<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut kept: Vec<&'a str> = Vec::new();

    for token in parts.into_iter().flat_map(str::split_whitespace) {
        let key = conflict_key(token);
        kept.retain(|existing| {
            if *existing == token {
                return false;
            }
            match (&key, conflict_key(existing)) {
                (Some(new), Some(old)) => *new != old,
                _ => true,
            }
        });
        kept.push(token);
    }

    kept.join(" ")
}

/// Shorthand for merging a base list with an optional caller override.
pub fn with_override(base: &str, extra: Option<&str>) -> String {
    merge_classes([base, extra.unwrap_or("")])
}

/// Variant prefix (e.g. `lg:hover:`) plus the utility's conflict group.
fn conflict_key(token: &str) -> Option<(String, &'static str)> {
    let (variant, utility) = match token.rfind(':') {
        Some(idx) => (&token[..=idx], &token[idx + 1..]),
        None => ("", token),
    };
    let utility = utility.trim_start_matches('!');
    group_of(utility).map(|group| (variant.to_string(), group))
}

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "md", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];

const TEXT_OVERFLOW: &[&str] = &["ellipsis", "clip"];
const TEXT_WRAP: &[&str] = &["wrap", "nowrap", "balance", "pretty"];
const NAMED_COLORS: &[&str] = &["inherit", "current", "transparent", "black", "white"];
const THEME_COLORS: &[&str] = &["primary", "muted", "muted-foreground", "foreground", "danger"];

fn text_group(rest: &str) -> Option<&'static str> {
    if FONT_SIZES.contains(&rest) {
        Some("font-size")
    } else if TEXT_ALIGN.contains(&rest) {
        Some("text-align")
    } else if TEXT_OVERFLOW.contains(&rest) {
        Some("text-overflow")
    } else if TEXT_WRAP.contains(&rest) {
        Some("text-wrap")
    } else if is_color(rest) {
        Some("text-color")
    } else {
        None
    }
}

/// `red-500`, `white`, `primary`, `[#112233]`, each with an optional `/opacity`.
fn is_color(token: &str) -> bool {
    if token.starts_with('[') {
        return token.ends_with(']');
    }
    let color = token.split_once('/').map_or(token, |(color, _)| color);
    if NAMED_COLORS.contains(&color) || THEME_COLORS.contains(&color) {
        return true;
    }
    match color.rsplit_once('-') {
        Some((hue, shade)) => {
            !hue.is_empty()
                && hue.chars().all(|c| c.is_ascii_lowercase())
                && !shade.is_empty()
                && shade.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

fn group_of(utility: &str) -> Option<&'static str> {
    let group = match utility {
        "block" | "inline-block" | "inline" | "flex" | "inline-flex" | "grid" | "inline-grid"
        | "contents" | "hidden" => "display",
        "static" | "fixed" | "absolute" | "relative" | "sticky" => "position",
        "italic" | "not-italic" => "font-style",
        "flex-row" | "flex-row-reverse" | "flex-col" | "flex-col-reverse" => "flex-direction",
        "flex-wrap" | "flex-wrap-reverse" | "flex-nowrap" => "flex-wrap",
        _ => return prefixed_group(utility),
    };
    Some(group)
}

fn prefixed_group(utility: &str) -> Option<&'static str> {
    let unsigned = utility.strip_prefix('-').unwrap_or(utility);

    if let Some(rest) = unsigned.strip_prefix("text-") {
        return text_group(rest);
    }
    if let Some(rest) = unsigned.strip_prefix("font-") {
        return Some(if FONT_WEIGHTS.contains(&rest) {
            "font-weight"
        } else {
            "font-family"
        });
    }

    // Longest prefixes first so `gap-x-` is not read as `gap-`.
    const PREFIXES: &[(&str, &str)] = &[
        ("gap-x-", "gap-x"),
        ("gap-y-", "gap-y"),
        ("gap-", "gap"),
        ("space-x-", "space-x"),
        ("space-y-", "space-y"),
        ("translate-x-", "translate-x"),
        ("translate-y-", "translate-y"),
        ("tracking-", "tracking"),
        ("leading-", "leading"),
        ("order-", "order"),
        ("justify-", "justify"),
        ("items-", "items"),
        ("line-clamp-", "line-clamp"),
        ("animate-", "animate"),
        ("opacity-", "opacity"),
        ("rounded-", "rounded"),
        ("min-w-", "min-w"),
        ("max-w-", "max-w"),
        ("min-h-", "min-h"),
        ("max-h-", "max-h"),
        ("w-", "w"),
        ("h-", "h"),
        ("top-", "top"),
        ("right-", "right"),
        ("bottom-", "bottom"),
        ("left-", "left"),
        ("px-", "px"),
        ("py-", "py"),
        ("pt-", "pt"),
        ("pr-", "pr"),
        ("pb-", "pb"),
        ("pl-", "pl"),
        ("p-", "p"),
        ("mx-", "mx"),
        ("my-", "my"),
        ("mt-", "mt"),
        ("mr-", "mr"),
        ("mb-", "mb"),
        ("ml-", "ml"),
        ("m-", "m"),
    ];

    PREFIXES
        .iter()
        .find(|(prefix, _)| unsigned.starts_with(prefix))
        .map(|(_, group)| *group)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_font_size_wins() {
        assert_eq!(merge_classes(["text-sm font-bold", "text-lg"]), "font-bold text-lg");
    }

    #[test]
    fn text_color_does_not_conflict_with_size() {
        assert_eq!(
            merge_classes(["text-sm", "text-red-500"]),
            "text-sm text-red-500"
        );
    }

    #[test]
    fn text_overflow_and_wrap_keep_the_color() {
        assert_eq!(
            merge_classes(["text-red-500", "text-ellipsis"]),
            "text-red-500 text-ellipsis"
        );
        assert_eq!(
            merge_classes(["text-white text-nowrap", "text-clip"]),
            "text-white text-nowrap text-clip"
        );
        assert_eq!(merge_classes(["text-wrap", "text-balance"]), "text-balance");
        assert_eq!(merge_classes(["text-ellipsis", "text-clip"]), "text-clip");
    }

    #[test]
    fn color_tokens_replace_each_other() {
        assert_eq!(merge_classes(["text-muted", "text-red-500"]), "text-red-500");
        assert_eq!(merge_classes(["text-white", "text-[#112233]"]), "text-[#112233]");
        assert_eq!(merge_classes(["text-red-500/50", "text-primary"]), "text-primary");
    }

    #[test]
    fn unrecognized_text_utilities_never_conflict() {
        assert_eq!(
            merge_classes(["text-red-500", "text-shadow"]),
            "text-red-500 text-shadow"
        );
    }

    #[test]
    fn responsive_variants_are_separate_groups() {
        assert_eq!(
            merge_classes(["text-3xl lg:text-5xl", "text-xl"]),
            "lg:text-5xl text-xl"
        );
        assert_eq!(
            merge_classes(["lg:text-5xl", "lg:text-2xl"]),
            "lg:text-2xl"
        );
    }

    #[test]
    fn display_conflicts_resolve() {
        assert_eq!(merge_classes(["block text-xs", "hidden"]), "text-xs hidden");
    }

    #[test]
    fn negative_utilities_share_a_group() {
        assert_eq!(
            merge_classes(["-translate-y-1/2", "translate-y-0"]),
            "translate-y-0"
        );
    }

    #[test]
    fn unknown_classes_never_conflict() {
        assert_eq!(
            merge_classes(["form-field", "input-label form-field"]),
            "input-label form-field"
        );
    }

    #[test]
    fn empty_parts_are_skipped() {
        assert_eq!(merge_classes(["", "  flex ", ""]), "flex");
        assert_eq!(with_override("h-5 w-5 animate-spin", None), "h-5 w-5 animate-spin");
    }

    #[test]
    fn override_replaces_gap_but_not_gap_axis() {
        assert_eq!(merge_classes(["gap-2 gap-x-4", "gap-4"]), "gap-x-4 gap-4");
    }
}
