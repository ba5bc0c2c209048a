//! Inline HTML elements that may appear as literal markup inside text

/// Tag names whose open/close spans are fused into a single token
pub const INLINE_ELEMENTS: &[&str] = &[
    "b", "big", "i", "small", "tt", "abbr", "acronym", "cite", "code", "dfn", "em", "kbd",
    "strong", "samp", "var", "a", "bdo", "br", "img", "map", "object", "q", "script", "span",
    "sub", "sup", "button", "input", "label", "select", "textarea",
];
