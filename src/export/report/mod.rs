//! Localized HTML summary of a dictionary base.
//!
//! [`build_info_table`] is a pure function of the metadata a writer stores;
//! it never touches the export itself. The output is a single-column
//! `<table>` with values wrapped in `<dvl>` elements for styling. Rows whose
//! value is missing, blank or uninteresting (zero redirects, a single base
//! part, ...) are left out.

mod strings;

use std::fmt::Display;

use crate::export::types::models::{FormatMetadata, LanguageDirections};
use crate::export::utils::{format_codepage, format_number, format_size, short_date};
pub use strings::{Locale, StringKey, label};

/// Renders the summary table for `metadata` in `locale`.
pub fn build_info_table(
    metadata: &FormatMetadata,
    directions: Option<&LanguageDirections>,
    locale: Locale,
) -> String {
    let t = |key| label(key, locale);
    let mut html = String::from("<table>");

    html.push_str(&section_header(
        t(StringKey::DictionaryBase),
        &metadata.format_name,
        t(StringKey::FormatVersion),
        &metadata.format_version,
    ));
    html.push_str(&value_row(
        t(StringKey::NumberOfWords),
        format_number(metadata.words_number.into()),
    ));

    let actual_articles = metadata.articles_actual_number;
    if actual_articles > 0 && actual_articles != metadata.words_number {
        html.push_str(&value_row(
            t(StringKey::NumberOfArticles),
            format_number(actual_articles.into()),
        ));
    }
    if metadata.words_relations_number > 0 {
        html.push_str(&value_row(
            t(StringKey::NumberOfRedirects),
            format_number(metadata.words_relations_number.into()),
        ));
    }
    if metadata.abbreviations_number > 0 {
        html.push_str(&value_row(
            t(StringKey::NumberOfAbbreviations),
            metadata.abbreviations_number,
        ));
    }
    if !metadata.media_base_separate && metadata.media_resources_number > 0 {
        html.push_str(&value_row(
            t(StringKey::NumberOfResources),
            format_number(metadata.media_resources_number.into()),
        ));
    }

    if let Some(directions) = directions {
        let pairs = directions.to_language_pairs_string();
        if !pairs.is_empty() {
            html.push_str(&value_row(t(StringKey::Languages), pairs));
        }
    }

    html.push_str(&optional_row(
        t(StringKey::ArticlesFormatting),
        metadata.articles_formatting_mode.as_deref(),
        true,
    ));
    html.push_str(&optional_row(
        t(StringKey::ArticlesFormattingInjectWords),
        metadata.articles_formatting_inject_word_mode.as_deref(),
        true,
    ));
    html.push_str(&optional_row(
        t(StringKey::AbbrevFormatting),
        metadata.abbreviations_formatting_mode.as_deref(),
        metadata.abbreviations_number > 0,
    ));
    html.push_str(&optional_row(
        t(StringKey::BaseVersion),
        combined_version(metadata).as_deref(),
        true,
    ));
    if let Some(codepage) = codepage_value(metadata) {
        html.push_str(&value_row(t(StringKey::Codepage), codepage));
    }
    html.push_str(&optional_row(
        t(StringKey::CompiledBy),
        metadata.compilation_creator_name.as_deref(),
        true,
    ));
    html.push_str(&optional_row(
        t(StringKey::CompDate),
        short_date(metadata.compilation_date.as_deref()),
        true,
    ));
    let parts = metadata.base_parts_total_number.to_string();
    html.push_str(&optional_row(
        t(StringKey::BasePartsNumber),
        Some(parts.as_str()),
        metadata.base_parts_total_number > 1,
    ));
    html.push_str(&format!(
        "<tr><td>{}: <dvl>{}</dvl><br/><br/></td></tr>",
        t(StringKey::BaseSize),
        format_size(metadata.base_file_size)
    ));

    if metadata.media_base_separate {
        html.push_str(&media_section(metadata, locale));
    }

    html.push_str("</table>");
    html
}

fn section_header(title: &str, name: &str, version_label: &str, version: &str) -> String {
    format!("<tr><th class=\"subHeader1\">{title}: {name} ({version_label} {version})</th></tr>")
}

fn value_row(title: &str, value: impl Display) -> String {
    format!("<tr><td>{title}: <dvl>{value}</dvl></td></tr>")
}

/// A row that is only rendered when `condition` holds and `value` is present and not blank.
fn optional_row(title: &str, value: Option<&str>, condition: bool) -> String {
    match value {
        Some(value) if condition && !value.trim().is_empty() => value_row(title, value),
        _ => String::new(),
    }
}

/// `2013-06-14 (4.0)`, or whichever of the short base date and base version exists.
fn combined_version(metadata: &FormatMetadata) -> Option<String> {
    let version = metadata.base_version.as_deref().filter(|v| !v.is_empty());
    match (short_date(metadata.base_date.as_deref()), version) {
        (Some(date), Some(version)) => Some(format!("{date} ({version})")),
        (Some(date), None) => Some(date.to_string()),
        (None, version) => version.map(str::to_string),
    }
}

fn codepage_value(metadata: &FormatMetadata) -> Option<String> {
    let words = metadata.words_codepage_name.as_deref()?;
    match metadata.article_codepage_name.as_deref() {
        Some(articles) if !articles.eq_ignore_ascii_case(words) => Some(format!(
            "{} / {}",
            format_codepage(words),
            format_codepage(articles)
        )),
        _ => Some(format_codepage(words)),
    }
}

fn media_section(metadata: &FormatMetadata, locale: Locale) -> String {
    let t = |key| label(key, locale);
    if metadata.media_resources_number == 0 {
        return format!(
            "<tr><th class=\"subHeader1\">{}: N/A</th></tr>",
            t(StringKey::MediaBase)
        );
    }
    let mut html = section_header(
        t(StringKey::MediaBase),
        &metadata.media_format_name,
        t(StringKey::FormatVersion),
        &metadata.media_format_version,
    );
    html.push_str(&value_row(
        t(StringKey::NumberOfResources),
        format_number(metadata.media_resources_number.into()),
    ));
    html.push_str(&value_row(
        t(StringKey::BaseSize),
        format_size(metadata.media_file_size),
    ));
    html
}
