//! Translations
//!
//! Nested JSON catalogs addressed by dot-path keys
//! (`builder.common.list.empty-text`). A missing key renders as the key itself.

use std::sync::Arc;

use leptos::prelude::*;
use serde_json::Value;
use thiserror::Error;

use crate::document::{self, DocPath};

pub const LIST_EMPTY_TEXT: &str = "builder.common.list.empty-text";
pub const ACTION_EDIT: &str = "builder.common.list.actions.edit";
pub const ACTION_DUPLICATE: &str = "builder.common.list.actions.duplicate";
pub const ACTION_DELETE: &str = "builder.common.list.actions.delete";
pub const TOOLTIP_DELETE_ITEM: &str = "builder.common.tooltip.delete-item";
pub const TOOLTIP_MORE_ACTIONS: &str = "builder.common.tooltip.more-actions";

const BUNDLED_EN: &str = include_str!("../locales/en/common.json");

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog root must be an object")]
    NotAnObject,
}

pub type I18nResult<T> = Result<T, I18nError>;

/// Translation lookup for one locale
#[derive(Clone, Debug)]
pub struct I18n {
    locale: Arc<str>,
    catalog: Arc<Value>,
}

impl I18n {
    pub fn from_json(locale: &str, raw: &str) -> I18nResult<Self> {
        let catalog: Value = serde_json::from_str(raw)?;
        if !catalog.is_object() {
            return Err(I18nError::NotAnObject);
        }
        Ok(Self { locale: Arc::from(locale), catalog: Arc::new(catalog) })
    }

    /// Catalog compiled into the binary; unknown locales fall back to English
    pub fn bundled(locale: &str) -> Self {
        if locale != "en" {
            log::warn!("no bundled catalog for `{}`, using en", locale);
        }
        Self::from_json("en", BUNDLED_EN).unwrap_or_else(|err| {
            log::error!("bundled catalog unreadable: {}", err);
            Self { locale: Arc::from("en"), catalog: Arc::new(Value::Object(Default::default())) }
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn t(&self, key: &str) -> String {
        let text = DocPath::parse(key)
            .ok()
            .and_then(|path| document::get(&self.catalog, &path).and_then(Value::as_str).map(str::to_string));
        text.unwrap_or_else(|| {
            log::debug!("missing translation `{}`", key);
            key.to_string()
        })
    }
}

/// Get the translations from context
pub fn use_i18n() -> I18n {
    use_context::<I18n>().unwrap_or_else(|| I18n::bundled("en"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_has_list_keys() {
        let i18n = I18n::bundled("en");
        assert_eq!(i18n.t(LIST_EMPTY_TEXT), "This list is empty.");
        assert_eq!(i18n.t(ACTION_EDIT), "Edit");
        assert_eq!(i18n.t(ACTION_DUPLICATE), "Duplicate");
        assert_eq!(i18n.t(ACTION_DELETE), "Delete");
        assert!(!i18n.t(TOOLTIP_DELETE_ITEM).is_empty());
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        let i18n = I18n::from_json("en", r#"{ "a": { "b": "B", "c": { "d": 1 } } }"#).unwrap();
        assert_eq!(i18n.t("a.b"), "B");
        assert_eq!(i18n.t("a.missing"), "a.missing");
        // non-string leaves are not translations
        assert_eq!(i18n.t("a.c"), "a.c");
        assert_eq!(i18n.t(""), "");
    }

    #[test]
    fn test_catalog_must_be_object() {
        assert!(matches!(I18n::from_json("en", "[]"), Err(I18nError::NotAnObject)));
        assert!(matches!(I18n::from_json("en", "{"), Err(I18nError::Parse(_))));
    }

    #[test]
    fn test_unknown_locale_uses_english() {
        assert_eq!(I18n::bundled("de").locale(), "en");
    }
}
