use dict_export::{
    FormatMetadata, LanguageDirection, LanguageDirections, Locale, build_info_table,
};

fn sample_metadata() -> FormatMetadata {
    FormatMetadata {
        articles_number: 1500,
        articles_actual_number: 1500,
        words_number: 1500,
        words_relations_number: 0,
        abbreviations_number: 0,
        media_resources_number: 0,
        base_file_size: 1_572_864,
        base_parts_total_number: 1,
        format_name: "FDB".to_string(),
        format_version: "4".to_string(),
        base_version: Some("2.1".to_string()),
        base_date: Some("2013-06-14T10:00:00".to_string()),
        words_codepage_name: Some("utf-8".to_string()),
        article_codepage_name: Some("UTF-8".to_string()),
        compilation_creator_name: Some("Lexicographer".to_string()),
        compilation_date: Some("2014-02-09T08:30:00".to_string()),
        articles_formatting_mode: Some("HTML".to_string()),
        ..FormatMetadata::default()
    }
}

/// Strips every label, leaving only the `<dvl>` values in order.
fn values(html: &str) -> Vec<&str> {
    html.split("<dvl>")
        .skip(1)
        .filter_map(|chunk| chunk.split_once("</dvl>").map(|(value, _)| value))
        .collect()
}

#[test]
fn renders_the_base_summary_in_order() {
    let html = build_info_table(&sample_metadata(), None, Locale::En);

    let expected = concat!(
        "<table>",
        "<tr><th class=\"subHeader1\">Dictionary Base: FDB (Ver. 4)</th></tr>",
        "<tr><td>Number of Words: <dvl>1,500</dvl></td></tr>",
        "<tr><td>Articles Formatting: <dvl>HTML</dvl></td></tr>",
        "<tr><td>Version: <dvl>2013-06-14 (2.1)</dvl></td></tr>",
        "<tr><td>Codepage: <dvl>UTF-8</dvl></td></tr>",
        "<tr><td>Compiled By: <dvl>Lexicographer</dvl></td></tr>",
        "<tr><td>Compilation Date: <dvl>2014-02-09</dvl></td></tr>",
        "<tr><td>Base Size: <dvl>1.5 MB (1572864 B)</dvl><br/><br/></td></tr>",
        "</table>",
    );
    assert_eq!(html, expected);
}

#[test]
fn articles_row_only_when_count_differs_from_words() {
    let metadata = sample_metadata();
    let html = build_info_table(&metadata, None, Locale::En);
    assert!(!html.contains("Number of Articles"));

    let metadata = FormatMetadata {
        articles_actual_number: 1200,
        ..sample_metadata()
    };
    let html = build_info_table(&metadata, None, Locale::En);
    assert!(html.contains("<tr><td>Number of Articles: <dvl>1,200</dvl></td></tr>"));
}

#[test]
fn zero_counts_hide_their_rows() {
    let html = build_info_table(&sample_metadata(), None, Locale::En);
    assert!(!html.contains("Number of Abbreviations"));
    assert!(!html.contains("Abbrev. Formatting"));
    assert!(!html.contains("Number of Redirects"));
    assert!(!html.contains("Number of Base Parts"));
    assert!(!html.contains("Media Base"));

    let metadata = FormatMetadata {
        abbreviations_number: 1234,
        words_relations_number: 42,
        base_parts_total_number: 3,
        abbreviations_formatting_mode: Some("PLAIN".to_string()),
        ..sample_metadata()
    };
    let html = build_info_table(&metadata, None, Locale::En);
    assert!(html.contains("<tr><td>Number of Abbreviations: <dvl>1234</dvl></td></tr>"));
    assert!(html.contains("<tr><td>Abbrev. Formatting: <dvl>PLAIN</dvl></td></tr>"));
    assert!(html.contains("<tr><td>Number of Redirects: <dvl>42</dvl></td></tr>"));
    assert!(html.contains("<tr><td>Number of Base Parts: <dvl>3</dvl></td></tr>"));
}

#[test]
fn languages_and_mixed_codepages() {
    let metadata = FormatMetadata {
        words_codepage_name: Some("utf-8".to_string()),
        article_codepage_name: Some("WINDOWS-1251".to_string()),
        ..sample_metadata()
    };
    let directions = LanguageDirections::new(vec![
        LanguageDirection::new("en", "ru"),
        LanguageDirection::new("ru", "en"),
    ]);
    let html = build_info_table(&metadata, Some(&directions), Locale::En);
    assert!(html.contains("<tr><td>Languages: <dvl>EN - RU, RU - EN</dvl></td></tr>"));
    assert!(html.contains("<tr><td>Codepage: <dvl>UTF-8 / Windows-1251</dvl></td></tr>"));

    let empty = LanguageDirections::default();
    let html = build_info_table(&metadata, Some(&empty), Locale::En);
    assert!(!html.contains("Languages"));
}

#[test]
fn codepage_names_keep_their_recorded_identity() {
    let metadata = FormatMetadata {
        words_codepage_name: Some("ISO-8859-1".to_string()),
        article_codepage_name: Some("ISO-8859-1".to_string()),
        ..sample_metadata()
    };
    let html = build_info_table(&metadata, None, Locale::En);
    assert!(html.contains("<tr><td>Codepage: <dvl>Iso-8859-1</dvl></td></tr>"));

    let metadata = FormatMetadata {
        words_codepage_name: Some("GB2312".to_string()),
        article_codepage_name: Some("latin1".to_string()),
        ..sample_metadata()
    };
    let html = build_info_table(&metadata, None, Locale::En);
    assert!(html.contains("<tr><td>Codepage: <dvl>Gb2312 / Latin1</dvl></td></tr>"));
}

#[test]
fn media_rows_depend_on_separate_media_base() {
    let embedded = FormatMetadata {
        media_resources_number: 2500,
        ..sample_metadata()
    };
    let html = build_info_table(&embedded, None, Locale::En);
    assert!(html.contains("<tr><td>Number of Resources: <dvl>2,500</dvl></td></tr>"));
    assert!(!html.contains("Media Base"));

    let separate = FormatMetadata {
        media_base_separate: true,
        media_format_name: "FDB Media".to_string(),
        media_format_version: "2".to_string(),
        media_file_size: 2 * 1_073_741_824,
        ..embedded
    };
    let html = build_info_table(&separate, None, Locale::En);
    assert!(html.ends_with(concat!(
        "<tr><th class=\"subHeader1\">Media Base: FDB Media (Ver. 2)</th></tr>",
        "<tr><td>Number of Resources: <dvl>2,500</dvl></td></tr>",
        "<tr><td>Base Size: <dvl>2 GB (2147483648 B)</dvl></td></tr>",
        "</table>",
    )));
    assert_eq!(html.matches("Number of Resources").count(), 1);

    let empty_media = FormatMetadata {
        media_resources_number: 0,
        ..separate
    };
    let html = build_info_table(&empty_media, None, Locale::En);
    assert!(html.contains("<tr><th class=\"subHeader1\">Media Base: N/A</th></tr>"));
}

#[test]
fn version_falls_back_to_base_version_without_date() {
    let metadata = FormatMetadata {
        base_date: Some("not-a-timestamp".to_string()),
        ..sample_metadata()
    };
    let html = build_info_table(&metadata, None, Locale::En);
    assert!(html.contains("<tr><td>Version: <dvl>2.1</dvl></td></tr>"));

    let metadata = FormatMetadata {
        base_date: Some("2013-06-14T".to_string()),
        compilation_date: Some("2014-02-09T".to_string()),
        ..sample_metadata()
    };
    let html = build_info_table(&metadata, None, Locale::En);
    assert!(html.contains("<tr><td>Version: <dvl>2.1</dvl></td></tr>"));
    assert!(!html.contains("Compilation Date"));

    let metadata = FormatMetadata {
        base_version: None,
        base_date: None,
        ..sample_metadata()
    };
    let html = build_info_table(&metadata, None, Locale::En);
    assert!(!html.contains("Version:"));
}

#[test]
fn switching_locale_changes_labels_only() {
    let metadata = FormatMetadata {
        abbreviations_number: 7,
        words_relations_number: 3,
        media_base_separate: true,
        media_resources_number: 5,
        ..sample_metadata()
    };
    let directions = LanguageDirections::new(vec![LanguageDirection::new("de", "ru")]);

    let en = build_info_table(&metadata, Some(&directions), Locale::En);
    let ru = build_info_table(&metadata, Some(&directions), Locale::Ru);

    assert_ne!(en, ru);
    assert_eq!(values(&en), values(&ru));
    assert!(ru.contains("Количество Слов: <dvl>1,500</dvl>"));
    assert!(ru.contains("Словарная База: FDB (Ver. 4)"));
    assert_eq!(Locale::from_tag("RU"), Locale::Ru);
    assert_eq!(
        build_info_table(&metadata, None, Locale::from_tag("fr")),
        build_info_table(&metadata, None, Locale::En)
    );
}
