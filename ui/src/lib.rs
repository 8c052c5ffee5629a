//! Shared UI crate for Datasense. Components, the upload state machine and
//! localization live here; the `web` and `desktop` crates only launch them.

pub mod analysis;
pub mod core;
pub mod i18n;
pub mod upload;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}
