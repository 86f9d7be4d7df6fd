//! Persistence and environment helpers for the app shell.

use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::{document, window};
use schemaform_config::{FormsConfig, load_from_str};

pub(crate) const LOCALE_KEY: &str = "schemaform.locale";
pub(crate) const CONFIG_ELEMENT_ID: &str = "schemaform-config";

pub(crate) fn load_locale() -> LocaleCode {
    if let Ok(value) = LocalStorage::get::<String>(LOCALE_KEY) {
        if let Some(locale) = LocaleCode::from_lang_tag(&value) {
            return locale;
        }
    }
    if let Some(nav) = window().navigator().language() {
        if let Some(locale) = LocaleCode::from_lang_tag(&nav) {
            return locale;
        }
    }
    DEFAULT_LOCALE
}

pub(crate) fn persist_locale(locale: LocaleCode) {
    if let Err(err) = LocalStorage::set(LOCALE_KEY, locale.code()) {
        console::error!(format!("failed to persist locale: {err}"));
    }
}

/// Settings embedded in the host page, or defaults when absent or invalid.
pub(crate) fn load_settings() -> FormsConfig {
    let Some(raw) = document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return FormsConfig::default();
    };
    match load_from_str(&raw) {
        Ok(config) => config,
        Err(err) => {
            console::error!(format!("invalid embedded schemaform config: {err}"));
            FormsConfig::default()
        }
    }
}
