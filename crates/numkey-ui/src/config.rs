use numkey_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::style::ButtonStyle;

pub const DEFAULT_RETURN_KEY_TITLE: &str = "Done";

/// User facing keypad settings.
///
/// ```rust
/// use numkey_ui::KeypadConfig;
///
/// let cfg: KeypadConfig = serde_json::from_str(r#"{ "allows_decimal_point": true }"#).unwrap();
/// assert!(cfg.allows_decimal_point);
/// assert_eq!(cfg.return_key_title, "Done");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeypadConfig {
    pub allows_decimal_point: bool,
    pub return_key_title: String,
    pub return_key_style: ButtonStyle,
    /// Play an input click on every key press.
    pub input_clicks: bool,
    /// Locale tag for the decimal separator; `None` keeps the current one.
    pub locale: Option<String>,
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self {
            allows_decimal_point: false,
            return_key_title: DEFAULT_RETURN_KEY_TITLE.to_string(),
            return_key_style: ButtonStyle::Done,
            input_clicks: true,
            locale: None,
        }
    }
}

impl KeypadConfig {
    pub fn validate(&self) -> Result<()> {
        if self.return_key_title.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "return key title must not be empty".to_string(),
            ));
        }
        if let Some(tag) = &self.locale
            && tag.trim().is_empty()
        {
            return Err(Error::InvalidConfig("empty locale tag".to_string()));
        }
        Ok(())
    }
}
