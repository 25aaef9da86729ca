use std::fmt;

use log::{debug, warn};

use crate::dom;
use crate::error::SiteError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentChoice {
    Unset,
    Accepted,
    Declined,
}

impl ConsentChoice {
    /// Maps a stored value back to a choice. Anything non-empty that we do
    /// not recognise still counts as answered, so it reads as `Declined`.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            None | Some("") => ConsentChoice::Unset,
            Some("accepted") => ConsentChoice::Accepted,
            Some("declined") => ConsentChoice::Declined,
            Some(other) => {
                debug!("Unrecognised consent value {:?}, treating as declined", other);
                ConsentChoice::Declined
            }
        }
    }

    pub fn as_stored(&self) -> Option<&'static str> {
        match self {
            ConsentChoice::Unset => None,
            ConsentChoice::Accepted => Some("accepted"),
            ConsentChoice::Declined => Some("declined"),
        }
    }

    pub fn should_offer_banner(&self) -> bool {
        *self == ConsentChoice::Unset
    }
}

impl fmt::Display for ConsentChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_stored().unwrap_or("unset"))
    }
}

pub trait ConsentStore {
    fn load(&self) -> ConsentChoice;
    fn save(&self, choice: ConsentChoice) -> Result<(), SiteError>;
    fn clear(&self) -> Result<(), SiteError>;
}

/// `window.localStorage` under one string key.
#[derive(Clone, Debug, PartialEq)]
pub struct BrowserConsentStore {
    key: String,
}

impl BrowserConsentStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl ConsentStore for BrowserConsentStore {
    fn load(&self) -> ConsentChoice {
        let stored = dom::local_storage().and_then(|storage| Ok(storage.get_item(&self.key)?));
        match stored {
            Ok(value) => ConsentChoice::from_stored(value.as_deref()),
            Err(e) => {
                warn!("Could not read consent: {}", e);
                ConsentChoice::Unset
            }
        }
    }

    fn save(&self, choice: ConsentChoice) -> Result<(), SiteError> {
        let storage = dom::local_storage()?;
        match choice.as_stored() {
            Some(value) => storage.set_item(&self.key, value)?,
            None => storage.remove_item(&self.key)?,
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), SiteError> {
        dom::local_storage()?.remove_item(&self.key)?;
        Ok(())
    }
}

/// Banner lifecycle. Each step after `Hidden` is driven by a timer or a
/// user action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerStage {
    Hidden,
    /// In layout, before the entrance transition.
    Displayed,
    Shown,
    Hiding,
    Removed,
}

impl BannerStage {
    /// Stage at page load.
    pub fn initial(choice: ConsentChoice) -> Self {
        if choice.should_offer_banner() {
            BannerStage::Hidden
        } else {
            BannerStage::Removed
        }
    }

    /// Next stage reached by a timer, if any, with its delay.
    pub fn scheduled(&self, reveal_ms: u32, show_ms: u32, transition_ms: u32) -> Option<(BannerStage, u32)> {
        match self {
            BannerStage::Hidden => Some((BannerStage::Displayed, reveal_ms)),
            BannerStage::Displayed => Some((BannerStage::Shown, show_ms)),
            BannerStage::Hiding => Some((BannerStage::Removed, transition_ms)),
            BannerStage::Shown | BannerStage::Removed => None,
        }
    }

    /// Stage after the user accepts or declines.
    pub fn dismiss(&self) -> Self {
        match self {
            BannerStage::Displayed | BannerStage::Shown => BannerStage::Hiding,
            other => *other,
        }
    }

    pub fn in_layout(&self) -> bool {
        matches!(self, BannerStage::Displayed | BannerStage::Shown | BannerStage::Hiding)
    }
}

/// Persists `choice` and returns the banner's next stage.
pub fn record_choice(store: &dyn ConsentStore, stage: BannerStage, choice: ConsentChoice) -> BannerStage {
    if let Err(e) = store.save(choice) {
        warn!("Could not persist consent: {}", e);
    }
    debug!("Cookie consent recorded: {}", choice);
    stage.dismiss()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Debug, Default)]
    struct MemoryConsentStore {
        value: RefCell<Option<String>>,
    }

    impl MemoryConsentStore {
        fn with_value(value: &str) -> Self {
            Self { value: RefCell::new(Some(value.to_string())) }
        }

        fn raw(&self) -> Option<String> {
            self.value.borrow().clone()
        }
    }

    impl ConsentStore for MemoryConsentStore {
        fn load(&self) -> ConsentChoice {
            ConsentChoice::from_stored(self.value.borrow().as_deref())
        }

        fn save(&self, choice: ConsentChoice) -> Result<(), SiteError> {
            self.value.replace(choice.as_stored().map(str::to_string));
            Ok(())
        }

        fn clear(&self) -> Result<(), SiteError> {
            self.value.replace(None);
            Ok(())
        }
    }

    #[test]
    fn stored_values_round_to_choices() {
        assert_eq!(ConsentChoice::from_stored(None), ConsentChoice::Unset);
        assert_eq!(ConsentChoice::from_stored(Some("")), ConsentChoice::Unset);
        assert_eq!(ConsentChoice::from_stored(Some("accepted")), ConsentChoice::Accepted);
        assert_eq!(ConsentChoice::from_stored(Some("declined")), ConsentChoice::Declined);
    }

    #[test]
    fn unknown_stored_value_suppresses_banner() {
        let choice = ConsentChoice::from_stored(Some("yes-please"));
        assert_eq!(choice, ConsentChoice::Declined);
        assert!(!choice.should_offer_banner());
    }

    #[test]
    fn accept_persists_and_banner_stays_away_next_load() {
        let store = MemoryConsentStore::default();
        assert_eq!(BannerStage::initial(store.load()), BannerStage::Hidden);

        let stage = record_choice(&store, BannerStage::Shown, ConsentChoice::Accepted);
        assert_eq!(stage, BannerStage::Hiding);
        assert_eq!(store.raw().as_deref(), Some("accepted"));

        // A later page load reads the same store.
        assert_eq!(BannerStage::initial(store.load()), BannerStage::Removed);
    }

    #[test]
    fn decline_persists_declined() {
        let store = MemoryConsentStore::default();
        record_choice(&store, BannerStage::Shown, ConsentChoice::Declined);
        assert_eq!(store.raw().as_deref(), Some("declined"));
        assert!(!store.load().should_offer_banner());
    }

    #[test]
    fn clear_offers_banner_again() {
        let store = MemoryConsentStore::with_value("accepted");
        store.clear().unwrap();
        assert_eq!(BannerStage::initial(store.load()), BannerStage::Hidden);
    }

    #[test]
    fn reveal_and_hide_follow_timers() {
        let (reveal, show, transition) = (3000, 10, 400);
        assert_eq!(BannerStage::Hidden.scheduled(reveal, show, transition), Some((BannerStage::Displayed, 3000)));
        assert_eq!(BannerStage::Displayed.scheduled(reveal, show, transition), Some((BannerStage::Shown, 10)));
        assert_eq!(BannerStage::Shown.scheduled(reveal, show, transition), None);
        assert_eq!(BannerStage::Hiding.scheduled(reveal, show, transition), Some((BannerStage::Removed, 400)));
        assert_eq!(BannerStage::Removed.scheduled(reveal, show, transition), None);
    }

    #[test]
    fn dismiss_only_applies_while_in_layout() {
        assert_eq!(BannerStage::Displayed.dismiss(), BannerStage::Hiding);
        assert_eq!(BannerStage::Shown.dismiss(), BannerStage::Hiding);
        assert_eq!(BannerStage::Hidden.dismiss(), BannerStage::Hidden);
        assert_eq!(BannerStage::Removed.dismiss(), BannerStage::Removed);
    }

    #[test]
    fn layout_membership() {
        assert!(!BannerStage::Hidden.in_layout());
        assert!(BannerStage::Displayed.in_layout());
        assert!(BannerStage::Hiding.in_layout());
        assert!(!BannerStage::Removed.in_layout());
    }
}
