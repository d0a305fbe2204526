/// Full/free banner shown above the arrival box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerState {
    /// Alert styling: nothing left to park in.
    NoFreeSpots,
    /// Positive styling.
    FreeSpotsAvailable,
    /// Banner removed; the side panel uses its non-banner layout.
    Hidden,
}

impl BannerState {
    /// Pick the banner for one snapshot.
    ///
    /// A numeric `free_count` always decides when present, even if `is_full`
    /// disagrees with it; `is_full` is only consulted as a fallback.
    pub fn derive(free_count: Option<i64>, is_full: Option<bool>) -> Self {
        match free_count {
            Some(0) => BannerState::NoFreeSpots,
            Some(_) => BannerState::FreeSpotsAvailable,
            None if is_full == Some(true) => BannerState::NoFreeSpots,
            None => BannerState::Hidden,
        }
    }

    pub fn text(&self) -> Option<&'static str> {
        match self {
            BannerState::NoFreeSpots => Some("THERE ARE NO FREE SPOTS"),
            BannerState::FreeSpotsAvailable => Some("THERE ARE FREE SPOTS"),
            BannerState::Hidden => None,
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, BannerState::Hidden)
    }
}
