use {
    log::debug,
    crate::{
        Error,
        IntoResultExt as _,
        monster::{
            Lang,
            MonsterData,
            MonsterId
        },
        source::MonsterSource
    }
};

/// A monster whose name contains the query, with the language the name matched in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub data: MonsterData,
    pub lang: Lang
}

/// Fetches each monster in `ids` in order and keeps those whose lowercased name contains `query`.
///
/// The English name is checked first; the German name only if the English one doesn't match.
/// `query` is used as given, so it should already be lowercase.
/// A failed fetch aborts the whole search.
pub fn search(source: &impl MonsterSource, ids: &[MonsterId], query: &str) -> Result<Vec<Match>, Error> {
    let mut matches = Vec::default();
    for &id in ids {
        let data = source.monster_data(id).annotate(format!("monster {}", id))?;
        if let Some(lang) = matched_lang(&data, query) {
            debug!("monster {} matches {:?} ({})", id, query, lang);
            matches.push(Match { data, lang });
        }
    }
    Ok(matches)
}

fn matched_lang(data: &MonsterData, query: &str) -> Option<Lang> {
    if data.name.en.to_lowercase().contains(query) {
        Some(Lang::En)
    } else if data.name.de.as_ref().map_or(false, |de| de.to_lowercase().contains(query)) {
        Some(Lang::De)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::monster::MonsterName,
        super::*
    };

    fn monster(en: &str, de: Option<&str>) -> MonsterData {
        MonsterData {
            id: MonsterId(1),
            name: MonsterName { en: en.to_owned(), de: de.map(str::to_owned) },
            level: None,
            rank: None
        }
    }

    #[test]
    fn english_wins_over_german() {
        assert_eq!(matched_lang(&monster("Rathalos", Some("Rathalos")), "rath"), Some(Lang::En));
    }

    #[test]
    fn german_is_a_fallback() {
        assert_eq!(matched_lang(&monster("Great Jagras", Some("Groß-Jagras")), "groß"), Some(Lang::De));
        assert_eq!(matched_lang(&monster("Great Jagras", None), "groß"), None);
    }

    #[test]
    fn empty_query_matches_english() {
        assert_eq!(matched_lang(&monster("Kulu-Ya-Ku", None), ""), Some(Lang::En));
    }

    #[test]
    fn query_is_not_lowercased() {
        assert_eq!(matched_lang(&monster("Tigrex", None), "Tigrex"), None);
        assert_eq!(matched_lang(&monster("Tigrex", None), "tigrex"), Some(Lang::En));
    }
}
