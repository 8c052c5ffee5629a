#![cfg(test)]
/*!
Theme selector lint for the desktop build.

The upload panel and result components render class names that only the
shared theme (`ui/assets/theme/main.css`) styles. This test fails fast if a
refactor drops or renames one of them. When renaming a selector, update the
component markup and REQUIRED_SELECTORS together.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".visually-hidden",
    // Buttons
    ".button {",
    ".button--primary",
    // Upload panel
    ".upload__card",
    ".upload__dropzone",
    ".upload__file-name",
    ".upload__remove",
    ".upload__error",
    ".upload__submit",
    ".upload__submit--disabled",
    ".upload__spinner",
    ".upload__loading",
    ".upload__dots",
    // Results
    ".results-card",
    ".results-card__header",
    ".results-card__placeholder",
    ".results-highlights",
    ".results-highlight__label",
    ".results-highlight__value",
    ".null-chart__bar",
    ".null-chart__axis",
    ".null-chart__label",
    ".overview__body",
    // Responsive block
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(*sel))
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} required CSS selectors/tokens in unified theme:\n{}",
        missing.len(),
        missing.iter().map(|s| s.to_string()).collect::<Vec<_>>().join("\n")
    );
}

#[test]
fn loading_animations_are_defined() {
    for keyframes in ["@keyframes upload-spin", "@keyframes upload-bounce"] {
        assert!(
            THEME_CSS.contains(keyframes),
            "`{keyframes}` is referenced by the upload panel but not defined"
        );
    }
}

#[test]
fn navbar_sheet_styles_links_and_locale_switcher() {
    for sel in [".navbar__links", ".navbar__link", ".navbar__locale"] {
        assert!(NAVBAR_CSS.contains(sel), "navbar.css is missing `{sel}`");
    }
}
