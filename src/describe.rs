//! One-line descriptions of monsters for search results.

use {
    itertools::Itertools as _,
    crate::monster::{
        Lang,
        MonsterData
    }
};

/// Which details `describe` includes. Unset fields count as disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescribeOpts {
    pub show_id: Option<bool>,
    pub show_level: Option<bool>,
    pub show_rank: Option<bool>,
    pub lang: Lang
}

impl Default for DescribeOpts {
    fn default() -> DescribeOpts {
        DescribeOpts {
            show_id: Some(true),
            show_level: None,
            show_rank: None,
            lang: Lang::default()
        }
    }
}

impl DescribeOpts {
    pub fn with_lang(self, lang: Lang) -> DescribeOpts {
        DescribeOpts { lang, ..self }
    }
}

/// Formats a monster as e.g. `#12 Rathalos Lv. 30 [HR]`, depending on `opts`.
pub fn describe(data: &MonsterData, opts: &DescribeOpts) -> String {
    let mut parts = Vec::default();
    if opts.show_id.unwrap_or(false) {
        parts.push(format!("#{}", data.id));
    }
    parts.push(data.name.get(opts.lang).to_owned());
    if opts.lang == Lang::De && data.name.de.is_some() {
        parts.push(format!("({})", Lang::De));
    }
    if opts.show_level.unwrap_or(false) {
        if let Some(level) = data.level {
            parts.push(format!("Lv. {}", level));
        }
    }
    if opts.show_rank.unwrap_or(false) {
        if let Some(ref rank) = data.rank {
            parts.push(format!("[{}]", rank));
        }
    }
    parts.into_iter().join(" ")
}

#[cfg(test)]
mod tests {
    use {
        crate::monster::{
            MonsterId,
            MonsterName
        },
        super::*
    };

    fn rathalos() -> MonsterData {
        MonsterData {
            id: MonsterId(12),
            name: MonsterName { en: "Rathalos".to_owned(), de: Some("Feuerwyvern".to_owned()) },
            level: Some(30),
            rank: Some("HR".to_owned())
        }
    }

    #[test]
    fn default_shows_id_only() {
        assert_eq!(describe(&rathalos(), &DescribeOpts::default()), "#12 Rathalos");
    }

    #[test]
    fn all_details() {
        let opts = DescribeOpts { show_id: Some(true), show_level: Some(true), show_rank: Some(true), lang: Lang::En };
        assert_eq!(describe(&rathalos(), &opts), "#12 Rathalos Lv. 30 [HR]");
    }

    #[test]
    fn german_match_is_marked() {
        let opts = DescribeOpts { show_id: Some(false), ..DescribeOpts::default() }.with_lang(Lang::De);
        assert_eq!(describe(&rathalos(), &opts), "Feuerwyvern (de)");
    }

    #[test]
    fn missing_level_is_skipped() {
        let mut data = rathalos();
        data.level = None;
        let opts = DescribeOpts { show_level: Some(true), ..DescribeOpts::default() };
        assert_eq!(describe(&data, &opts), "#12 Rathalos");
    }
}
