//! Report line formatting.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::grouping::TitleGroup;

use super::ReportError;

/// Render `date` with a `chrono` format string.
pub fn format_date(date: NaiveDate, date_format: &str) -> Result<String, ReportError> {
    let mut rendered = String::new();
    write!(rendered, "{}", date.format(date_format))
        .map_err(|_| ReportError::DateFormat(date_format.to_string()))?;
    Ok(rendered)
}

/// The film column: the file itself, or a quoted newline-separated list.
pub fn film_field(film_files: &[String]) -> String {
    match film_files {
        [single] => single.clone(),
        files => format!("\"{}\"", files.join("\n")),
    }
}

/// Format one report line, without the trailing newline.
///
/// `<films>\t<trailer>\t<date>`
pub fn format_line(group: &TitleGroup, date: &str) -> String {
    format!(
        "{}\t{}\t{}",
        film_field(&group.film_files),
        group.trailer_file.as_deref().unwrap_or_default(),
        date
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(films: &[&str], trailer: &str) -> TitleGroup {
        TitleGroup {
            title: "t".to_string(),
            film_files: films.iter().map(|f| f.to_string()).collect(),
            trailer_file: Some(trailer.to_string()),
        }
    }

    #[test]
    fn test_format_date_default_pattern() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(format_date(date, "%d.%m.%Y").unwrap(), "07.03.2024");
    }

    #[test]
    fn test_format_date_rejects_bad_pattern() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert!(matches!(
            format_date(date, "%!"),
            Err(ReportError::DateFormat(_))
        ));
    }

    #[test]
    fn test_format_line_single_film() {
        let line = format_line(
            &group(&["hd_1234_title_a__film.mp4"], "hd_1234_title_a__trailer.mp4"),
            "07.03.2024",
        );
        assert_eq!(
            line,
            "hd_1234_title_a__film.mp4\thd_1234_title_a__trailer.mp4\t07.03.2024"
        );
    }

    #[test]
    fn test_format_line_multiple_films_quoted() {
        let line = format_line(
            &group(&["s_1__film.mp4", "s_2__film.mp4"], "s_1__trailer.mp4"),
            "01.01.2025",
        );
        assert_eq!(line, "\"s_1__film.mp4\ns_2__film.mp4\"\ts_1__trailer.mp4\t01.01.2025");
    }
}
