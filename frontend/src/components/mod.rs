pub mod language_toggle;
pub mod result_modal;
pub mod site_footer;
pub mod spinning_wheel;
pub mod theme_toggle;

pub use language_toggle::LanguageToggle;
pub use result_modal::ResultModal;
pub use site_footer::SiteFooter;
pub use spinning_wheel::SpinningWheel;
pub use theme_toggle::ThemeToggle;
