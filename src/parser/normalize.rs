//! Source text normalization applied before splitting.

use std::borrow::Cow;

use unicode_normalization::{is_nfc_quick, IsNormalized, UnicodeNormalization};

/// Strip a UTF-8 BOM, unify line endings to `\n`, and optionally apply NFC.
pub fn normalize_source(text: &str, normalize_unicode: bool) -> Cow<'_, str> {
    let mut result = Cow::Borrowed(text.strip_prefix('\u{FEFF}').unwrap_or(text));

    if result.contains('\r') {
        result = Cow::Owned(result.replace("\r\n", "\n").replace('\r', "\n"));
    }

    if normalize_unicode && is_nfc_quick(result.chars()) != IsNormalized::Yes {
        result = Cow::Owned(result.nfc().collect());
    }

    result
}
