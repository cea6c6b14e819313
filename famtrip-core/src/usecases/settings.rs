use super::prelude::*;
use crate::gateways::storage::KeyValueStorage;

pub const LANGUAGE_KEY: &str = "language";
pub const CURRENCY_KEY: &str = "currency";

/// Loads the settings once at start up and saves
/// every change immediately.
#[derive(Debug)]
pub struct SettingsService<S> {
    storage: S,
}

impl<S> SettingsService<S>
where
    S: KeyValueStorage,
{
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Never fails, unreadable values fall back to the defaults.
    pub fn load(&self) -> Settings {
        let read = |key: &str| {
            self.storage.get(key).unwrap_or_else(|err| {
                log::warn!("Unable to read setting '{key}': {err}");
                None
            })
        };
        let language = read(LANGUAGE_KEY);
        let currency = read(CURRENCY_KEY);
        Settings::from_codes(language.as_deref(), currency.as_deref())
    }

    pub fn save_language(&self, language: Language) -> Result<()> {
        self.storage.set(LANGUAGE_KEY, language.as_ref())?;
        Ok(())
    }

    pub fn save_currency(&self, currency: Currency) -> Result<()> {
        self.storage.set(CURRENCY_KEY, currency.as_ref())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::tests::MemoryStorage;

    #[test]
    fn load_defaults_from_empty_storage() {
        let service = SettingsService::new(MemoryStorage::default());
        assert_eq!(Settings::default(), service.load());
    }

    #[test]
    fn fall_back_on_unknown_values() {
        let storage = MemoryStorage::default();
        storage.set(LANGUAGE_KEY, "de").unwrap();
        storage.set(CURRENCY_KEY, "CZK").unwrap();
        let service = SettingsService::new(storage);
        let settings = service.load();
        assert_eq!(Language::En, settings.language);
        assert_eq!(Currency::Czk, settings.currency);
    }

    #[test]
    fn save_changes() {
        let service = SettingsService::new(MemoryStorage::default());
        service.save_language(Language::Cs).unwrap();
        service.save_currency(Currency::Gbp).unwrap();
        assert_eq!(Some("cs".to_string()), service.storage().get(LANGUAGE_KEY).unwrap());
        assert_eq!(
            Settings {
                language: Language::Cs,
                currency: Currency::Gbp
            },
            service.load()
        );
    }

    #[test]
    fn ignore_storage_failures_on_load() {
        let storage = MemoryStorage::default();
        storage.set(CURRENCY_KEY, "USD").unwrap();
        storage.fail.set(true);
        let service = SettingsService::new(storage);
        assert_eq!(Settings::default(), service.load());
        assert!(service.save_language(Language::Cs).is_err());
    }
}
