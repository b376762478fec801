//! Layout tokens and the component stylesheet.

use once_cell::sync::Lazy;

use super::attributes::ELEMENT_TAG;

/// Default edge length of the component box in pixels.
pub const BOX_SIZE_PX: u16 = 254;

/// Background of the placeholder block.
pub const PLACEHOLDER_COLOR: &str = "#e2e3e5";

/// Root class applied by the Yew component.
pub const ROOT_CLASS: &str = "un-sdg";
/// Class on the color swatch.
pub const SWATCH_CLASS: &str = "color-only";
/// Class on the placeholder block.
pub const PLACEHOLDER_CLASS: &str = "placeholder";

/// Styles for hosted `<un-sdg>` elements and standalone `.un-sdg` roots.
pub static STYLESHEET: Lazy<String> = Lazy::new(|| {
    format!(
        "\
{ELEMENT_TAG}, .{ROOT_CLASS} {{ display: inline-block; width: {BOX_SIZE_PX}px; height: {BOX_SIZE_PX}px; }}
{ELEMENT_TAG} .{ROOT_CLASS} {{ display: block; width: 100%; height: 100%; }}
.{ROOT_CLASS} img {{ width: 100%; height: 100%; object-fit: contain; }}
.{ROOT_CLASS} .{SWATCH_CLASS}, .{ROOT_CLASS} .{PLACEHOLDER_CLASS} {{ width: 100%; height: 100%; }}
.{ROOT_CLASS} .{PLACEHOLDER_CLASS} {{ background-color: {PLACEHOLDER_COLOR}; }}
"
    )
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_uses_tokens() {
        assert!(STYLESHEET.starts_with("un-sdg, .un-sdg { display: inline-block;"));
        assert!(STYLESHEET.contains("width: 254px; height: 254px;"));
        assert!(STYLESHEET.contains(".un-sdg .placeholder { background-color: #e2e3e5; }"));
        assert!(STYLESHEET.contains(&format!("width: {BOX_SIZE_PX}px")));
        assert!(STYLESHEET.contains(PLACEHOLDER_COLOR));
        assert!(STYLESHEET.contains(&format!(".{ROOT_CLASS} .{SWATCH_CLASS}")));
        assert!(STYLESHEET.contains(&format!(".{ROOT_CLASS} .{PLACEHOLDER_CLASS}")));
    }
}
