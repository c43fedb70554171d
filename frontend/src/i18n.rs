use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    De,
    En,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "de" => Some(Language::De),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Maps a browser language tag such as `en-US` to a supported language.
    pub fn from_browser_tag(tag: &str) -> Self {
        if tag.to_ascii_lowercase().starts_with("en") {
            Language::En
        } else {
            Language::De
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A static string in both site languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Text {
    pub de: &'static str,
    pub en: &'static str,
}

impl Text {
    pub fn get(&self, lang: Language) -> &'static str {
        match lang {
            Language::De => self.de,
            Language::En => self.en,
        }
    }
}

pub const fn t(de: &'static str, en: &'static str) -> Text {
    Text { de, en }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_codes_only() {
        assert_eq!(Language::from_code("de"), Some(Language::De));
        assert_eq!(Language::from_code(" EN "), Some(Language::En));
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn browser_tag_falls_back_to_german() {
        assert_eq!(Language::from_browser_tag("en-GB"), Language::En);
        assert_eq!(Language::from_browser_tag("de-AT"), Language::De);
        assert_eq!(Language::from_browser_tag("pl"), Language::De);
    }

    #[test]
    fn text_picks_language() {
        let hello = t("Hallo", "Hello");
        assert_eq!(hello.get(Language::De), "Hallo");
        assert_eq!(hello.get(Language::En), "Hello");
    }
}
