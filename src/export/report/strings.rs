//! Localized labels for the dictionary summary table.

/// Display language of a summary. Unknown languages fall back to English.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    /// Resolves a language tag such as `"ru"` or `"EN"`. Anything unrecognised is English.
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().eq_ignore_ascii_case("ru") {
            Locale::Ru
        } else {
            Locale::En
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringKey {
    FormatVersion,
    DictionaryBase,
    MediaBase,
    CompDate,
    CompiledBy,
    BaseVersion,
    BaseSize,
    BasePartsNumber,
    NumberOfWords,
    NumberOfArticles,
    NumberOfRedirects,
    NumberOfAbbreviations,
    NumberOfResources,
    ArticlesFormatting,
    ArticlesFormattingInjectWords,
    AbbrevFormatting,
    Codepage,
    Languages,
}

/// Returns the label for `key` in `locale`, falling back to English.
pub fn label(key: StringKey, locale: Locale) -> &'static str {
    match locale {
        Locale::Ru => ru_label(key).unwrap_or_else(|| en_label(key)),
        Locale::En => en_label(key),
    }
}

fn en_label(key: StringKey) -> &'static str {
    match key {
        StringKey::FormatVersion => "Ver.",
        StringKey::DictionaryBase => "Dictionary Base",
        StringKey::MediaBase => "Media Base",
        StringKey::CompDate => "Compilation Date",
        StringKey::CompiledBy => "Compiled By",
        StringKey::BaseVersion => "Version",
        StringKey::BaseSize => "Base Size",
        StringKey::BasePartsNumber => "Number of Base Parts",
        StringKey::NumberOfWords => "Number of Words",
        StringKey::NumberOfArticles => "Number of Articles",
        StringKey::NumberOfRedirects => "Number of Redirects",
        StringKey::NumberOfAbbreviations => "Number of Abbreviations",
        StringKey::NumberOfResources => "Number of Resources",
        StringKey::ArticlesFormatting => "Articles Formatting",
        StringKey::ArticlesFormattingInjectWords => "Prefix Articles with Words",
        StringKey::AbbrevFormatting => "Abbrev. Formatting",
        StringKey::Codepage => "Codepage",
        StringKey::Languages => "Languages",
    }
}

fn ru_label(key: StringKey) -> Option<&'static str> {
    let label = match key {
        StringKey::DictionaryBase => "Словарная База",
        StringKey::MediaBase => "Медиа База",
        StringKey::CompDate => "Дата Сборки",
        StringKey::CompiledBy => "Автор Сборки",
        StringKey::BaseVersion => "Версия",
        StringKey::BaseSize => "Размер",
        StringKey::BasePartsNumber => "Количество Частей Базы",
        StringKey::NumberOfWords => "Количество Слов",
        StringKey::NumberOfArticles => "Количество Статей",
        StringKey::NumberOfRedirects => "Количество Редиректов",
        StringKey::NumberOfAbbreviations => "Количество Сокращений",
        StringKey::NumberOfResources => "Количество Ресурсов",
        StringKey::ArticlesFormatting => "Формат Статей",
        StringKey::ArticlesFormattingInjectWords => "Префикс Статей Словами",
        StringKey::AbbrevFormatting => "Формат Сокращений",
        StringKey::Codepage => "Кодовая Страница",
        StringKey::Languages => "Языки",
        StringKey::FormatVersion => return None,
    };
    Some(label)
}
