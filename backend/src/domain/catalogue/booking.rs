//! Deep links into the booking platforms behind each provider.

use super::ProviderId;

/// Booking platforms with known public URL layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingPlatform {
    /// Recreation.gov, the federal reservation system.
    RecreationGov,
}

impl BookingPlatform {
    /// Provider id under which Recreation.gov is seeded.
    pub const RECREATION_GOV_PROVIDER_ID: ProviderId = ProviderId::new(1);

    /// Resolve the platform for a provider, if its URL layout is known.
    ///
    /// # Examples
    /// ```
    /// use camply_backend::domain::{BookingPlatform, ProviderId};
    ///
    /// assert_eq!(
    ///     BookingPlatform::for_provider(ProviderId::new(1)),
    ///     Some(BookingPlatform::RecreationGov)
    /// );
    /// assert_eq!(BookingPlatform::for_provider(ProviderId::new(99)), None);
    /// ```
    #[must_use]
    pub fn for_provider(provider_id: ProviderId) -> Option<Self> {
        (provider_id == Self::RECREATION_GOV_PROVIDER_ID).then_some(Self::RecreationGov)
    }

    /// Public page for a recreation area.
    #[must_use]
    pub fn recreation_area_url(self, recreation_area_id: &str) -> String {
        match self {
            Self::RecreationGov => {
                format!("https://www.recreation.gov/camping/gateways/{recreation_area_id}")
            }
        }
    }

    /// Public booking page for a campground.
    #[must_use]
    pub fn campground_url(self, campground_id: &str) -> String {
        match self {
            Self::RecreationGov => {
                format!("https://www.recreation.gov/camping/campgrounds/{campground_id}")
            }
        }
    }
}
