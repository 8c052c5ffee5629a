#![cfg(test)]
//! Ensures the embedded desktop CSS (shared theme) remains present & non‑trivial.
//!
//! An accidental truncation or path break would only show up as unstyled
//! widgets at runtime. If the theme moves, update both this test and the
//! `include_str!` constant in `desktop/src/main.rs`.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty."
    );
}

#[test]
fn embedded_css_defines_palette_variables() {
    for token in ["--color-bg", "--color-accent", "--color-error", "--radius"] {
        assert!(
            EMBEDDED_CSS.contains(&format!("{token}:")),
            "Palette variable `{token}` is not defined in the embedded theme"
        );
    }
}
