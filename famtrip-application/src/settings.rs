use super::*;

use famtrip_core::{gateways::storage::KeyValueStorage, usecases::SettingsService};

pub fn load_settings<S: KeyValueStorage>(store: &Store, service: &SettingsService<S>) -> Settings {
    let settings = service.load();
    store.dispatch(store::settings::Action::Loaded(settings));
    settings
}

pub fn change_language<S: KeyValueStorage>(
    store: &Store,
    service: &SettingsService<S>,
    language: Language,
) -> Result<()> {
    store.dispatch(store::settings::Action::LanguageChanged(language));
    service.save_language(language).map_err(|err| {
        store.dispatch(store::settings::Action::Rejected(err.to_string()));
        err.into()
    })
}

pub fn change_currency<S: KeyValueStorage>(
    store: &Store,
    service: &SettingsService<S>,
    currency: Currency,
) -> Result<()> {
    store.dispatch(store::settings::Action::CurrencyChanged(currency));
    service.save_currency(currency).map_err(|err| {
        store.dispatch(store::settings::Action::Rejected(err.to_string()));
        err.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;

    #[test]
    fn change_and_reload() {
        let store = Store::default();
        let service = SettingsService::new(MemoryStorage::default());
        assert_eq!(Settings::default(), load_settings(&store, &service));

        change_currency(&store, &service, Currency::Czk).unwrap();
        change_language(&store, &service, Language::Cs).unwrap();
        assert_eq!(Currency::Czk, store.state().settings.settings.currency);

        let reloaded = Store::default();
        let settings = load_settings(&reloaded, &service);
        assert_eq!(Language::Cs, settings.language);
        assert_eq!(Currency::Czk, reloaded.state().settings.settings.currency);
    }

    #[test]
    fn failed_save_keeps_choice_for_this_run() {
        let store = Store::default();
        let service = SettingsService::new(MemoryStorage::default());
        service.storage().fail.set(true);
        assert!(change_currency(&store, &service, Currency::Gbp).is_err());
        let state = store.state();
        assert_eq!(Currency::Gbp, state.settings.settings.currency);
        assert!(state.settings.error.is_some());
    }

    #[test]
    fn unknown_stored_values_fall_back() {
        let store = Store::default();
        let storage = MemoryStorage::default();
        storage.set("language", "tlh").unwrap();
        storage.set("currency", "XYZ").unwrap();
        let settings = load_settings(&store, &SettingsService::new(storage));
        assert_eq!(Settings::default(), settings);
    }
}
