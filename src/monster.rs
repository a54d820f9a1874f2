//! Monster records as served by the data source.

use {
    std::fmt,
    serde::{
        Deserialize,
        Serialize
    }
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct MonsterId(pub u32);

impl fmt::Display for MonsterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A language a monster name is available in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    De
}

impl Default for Lang {
    fn default() -> Lang { Lang::En }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lang::En => write!(f, "en"),
            Lang::De => write!(f, "de")
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MonsterName {
    pub en: String,
    #[serde(default)]
    pub de: Option<String>
}

impl MonsterName {
    /// The name in the given language, or the English name if there is no translation.
    pub fn get(&self, lang: Lang) -> &str {
        match (lang, &self.de) {
            (Lang::De, Some(de)) => de,
            (_, _) => &self.en
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MonsterData {
    pub id: MonsterId,
    pub name: MonsterName,
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default)]
    pub rank: Option<String>
}
