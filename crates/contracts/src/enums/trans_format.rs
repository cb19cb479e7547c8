use serde::{Deserialize, Serialize};

/// Translation file formats a package can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranslationFormat {
    Po,
    Ts,
    Ini,
    Json,
}

impl TranslationFormat {
    /// File extension stored in the package table
    pub fn code(&self) -> &'static str {
        match self {
            TranslationFormat::Po => "po",
            TranslationFormat::Ts => "ts",
            TranslationFormat::Ini => "ini",
            TranslationFormat::Json => "json",
        }
    }

    pub fn all() -> Vec<TranslationFormat> {
        vec![
            TranslationFormat::Po,
            TranslationFormat::Ts,
            TranslationFormat::Ini,
            TranslationFormat::Json,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "po" => Some(TranslationFormat::Po),
            "ts" => Some(TranslationFormat::Ts),
            "ini" => Some(TranslationFormat::Ini),
            "json" => Some(TranslationFormat::Json),
            _ => None,
        }
    }
}

impl Default for TranslationFormat {
    fn default() -> Self {
        TranslationFormat::Po
    }
}

impl ToString for TranslationFormat {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for format in TranslationFormat::all() {
            assert_eq!(TranslationFormat::from_code(format.code()), Some(format));
        }
    }

    #[test]
    fn unknown_code_is_none() {
        assert_eq!(TranslationFormat::from_code("xliff2"), None);
    }
}
