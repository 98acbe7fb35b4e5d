//! User preferences persisted between visits.
//!
//! - [`PreferenceStore`]: string key/value storage with session
//!   ([`MemoryPreferenceStore`]) and local ([`JsonFilePreferenceStore`])
//!   scopes
//! - [`ThemePreferences`]: light/dark theme choice
//! - [`BannerDismissals`]: which notice banners the user closed

mod banner;
mod store;
mod theme;

pub use banner::{Banner, BannerDismissals};
pub use store::{JsonFilePreferenceStore, MemoryPreferenceStore, PreferenceError, PreferenceStore};
pub use theme::{THEME_STORAGE_KEY, Theme, ThemePreferences};
