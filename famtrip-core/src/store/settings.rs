use crate::entities::*;

#[derive(Debug, Default, Clone)]
pub struct SettingsState {
    pub settings: Settings,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Action {
    Loaded(Settings),
    LanguageChanged(Language),
    CurrencyChanged(Currency),
    Rejected(String),
}

impl SettingsState {
    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::Loaded(settings) => {
                self.settings = settings;
                self.loading = false;
            }
            Action::LanguageChanged(language) => {
                self.settings.language = language;
                self.error = None;
            }
            Action::CurrencyChanged(currency) => {
                self.settings.currency = currency;
                self.error = None;
            }
            Action::Rejected(err) => {
                self.error = Some(err);
            }
        }
    }
}
