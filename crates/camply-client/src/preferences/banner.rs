//! Dismissible notice banners.

use super::{PreferenceError, PreferenceStore};

/// A notice shown at the top of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    /// Stable identifier used in the storage key.
    pub id: String,
    /// Non-dismissible banners ignore stored dismissals.
    pub dismissible: bool,
    /// Page-level condition for showing the banner at all.
    pub show_condition: bool,
}

impl Banner {
    /// Dismissible banner that is shown by default.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            dismissible: true,
            show_condition: true,
        }
    }

    /// Ignore dismissals.
    #[must_use]
    pub fn pinned(mut self) -> Self {
        self.dismissible = false;
        self
    }

    /// Only show while `condition` holds.
    #[must_use]
    pub fn shown_when(mut self, condition: bool) -> Self {
        self.show_condition = condition;
        self
    }

    /// Storage key recording the dismissal.
    #[must_use]
    pub fn storage_key(&self) -> String {
        format!("banner-dismissed-{}", self.id)
    }
}

/// Dismissal records kept in a [`PreferenceStore`].
///
/// Use a session store for banners that return on the next visit and a
/// file store for ones that stay closed.
pub struct BannerDismissals<S> {
    store: S,
}

impl<S: PreferenceStore> BannerDismissals<S> {
    /// Record dismissals in `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Whether `banner` should render.
    ///
    /// # Errors
    /// Storage failures from the store.
    pub fn is_visible(&self, banner: &Banner) -> Result<bool, PreferenceError> {
        if !banner.show_condition {
            return Ok(false);
        }
        if !banner.dismissible {
            return Ok(true);
        }
        let dismissed = self.store.get(&banner.storage_key())?;
        Ok(dismissed.as_deref() != Some("true"))
    }

    /// Record that the user closed `banner`. Returns `false` for banners
    /// that cannot be dismissed.
    ///
    /// # Errors
    /// Storage failures from the store.
    pub fn dismiss(&self, banner: &Banner) -> Result<bool, PreferenceError> {
        if !banner.dismissible {
            return Ok(false);
        }
        self.store.set(&banner.storage_key(), "true")?;
        Ok(true)
    }
}
