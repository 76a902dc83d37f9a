use std::fmt;
use std::str::FromStr;

/// Languages offered on the login form, keyed by their short form value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Russian,
    English,
    Turkmen,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown language: {0}. Expected: ru, en, or tk")]
pub struct UnknownLanguage(pub String);

impl Language {
    pub fn key(&self) -> &'static str {
        match self {
            Language::Russian => "ru",
            Language::English => "en",
            Language::Turkmen => "tk",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::Russian => "Russian",
            Language::English => "English",
            Language::Turkmen => "Turkmen",
        }
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "ru" => Ok(Self::Russian),
            "en" => Ok(Self::English),
            "tk" => Ok(Self::Turkmen),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
