//! Platebook command-line entry point.
//!
//! # Responsibility
//! - Build a platebook from the bundled course, a lesson sheet file, or a
//!   published sheet URL.
//! - Print it as JSON, a table of contents, or a one-line summary.

use clap::{Parser, ValueEnum};
use log::info;
use platebook_core::{
    table_of_contents, BuiltinLessons, ColumnLayout, CourseMeta, CsvLessonFile, ImportError,
    JsonLessonFile, LessonSource, PlateKind, Platebook, PlatebookService, SheetUrlLessons,
    COURSE_NAME, COURSE_TERM,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Toc,
    Summary,
}

#[derive(Debug, Parser)]
#[command(name = "platebook", version, about = "Build note-taking plates for a course")]
struct Cli {
    /// Published sheet CSV URL (File > Share > Publish to web > CSV).
    #[arg(long, conflicts_with_all = ["csv_file", "json_file"])]
    sheet_url: Option<String>,
    /// Lesson sheet exported as CSV.
    #[arg(long, conflicts_with = "json_file")]
    csv_file: Option<PathBuf>,
    /// Lessons JSON document (`course`, `term`, `lessons`).
    #[arg(long)]
    json_file: Option<PathBuf>,
    /// CSV column order: number-title-date (default) or number-date-title.
    /// Applies to --csv-file and --sheet-url only.
    #[arg(long, conflicts_with = "json_file")]
    layout: Option<ColumnLayout>,
    /// Course name. Defaults to the bundled course, or to the JSON document's own.
    #[arg(long)]
    course: Option<String>,
    /// Term. Defaults to the bundled term, or to the JSON document's own.
    #[arg(long)]
    term: Option<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    format: OutputFormat,
    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long)]
    log_dir: Option<PathBuf>,
    #[arg(long, default_value = platebook_core::default_log_level())]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        if let Err(err) = platebook_core::init_logging(&cli.log_level, &log_dir.to_string_lossy()) {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    }

    match build(&cli) {
        Ok(book) => {
            info!(
                "event=cli_render module=cli status=ok plates={}",
                book.plates.len()
            );
            match render(&book, cli.format) {
                Ok(text) => {
                    println!("{text}");
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    eprintln!("error: {err}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn build(cli: &Cli) -> Result<Platebook, ImportError> {
    if let Some(path) = &cli.json_file {
        let mut source = JsonLessonFile::new(path);
        if let Some(course) = &cli.course {
            source = source.with_course(course.clone());
        }
        if let Some(term) = &cli.term {
            source = source.with_term(term.clone());
        }
        return run(source);
    }

    let layout = cli.layout.unwrap_or_default();
    let meta = CourseMeta::new(
        cli.course.as_deref().unwrap_or(COURSE_NAME),
        cli.term.as_deref().unwrap_or(COURSE_TERM),
    );
    if let Some(url) = &cli.sheet_url {
        return run(SheetUrlLessons::new(url.clone(), layout, meta));
    }
    if let Some(path) = &cli.csv_file {
        return run(CsvLessonFile::new(path, layout, meta));
    }
    run(BuiltinLessons)
}

fn run<S: LessonSource>(source: S) -> Result<Platebook, ImportError> {
    PlatebookService::new(source).build()
}

fn render(book: &Platebook, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(book),
        OutputFormat::Toc => {
            let mut lines = vec![format!("{} ({})", book.course, book.term)];
            lines.extend(table_of_contents(book).into_iter().map(|entry| {
                let marker = match entry.kind {
                    PlateKind::Standard => "",
                    PlateKind::Presentation => " [notes only]",
                };
                format!(
                    "Plate {:>2}  {:<50} {}{}",
                    entry.number, entry.title, entry.date, marker
                )
            }));
            Ok(lines.join("\n"))
        }
        OutputFormat::Summary => Ok(format!(
            "{} | {} | plates={} standard={} presentation={} core={}",
            book.course,
            book.term,
            book.len(),
            book.count_kind(PlateKind::Standard),
            book.count_kind(PlateKind::Presentation),
            platebook_core::core_version()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::{build, render, Cli, OutputFormat};
    use clap::{CommandFactory, Parser};
    use platebook_core::{builtin_platebook, COURSE_NAME, COURSE_TERM};
    use std::fs;

    const OTHER_COURSE_JSON: &str = r#"{"course":"HIST 999 Other","term":"Old","lessons":[{"plate_number":1,"title":"Only","date":"Jan 6"}]}"#;

    fn write_json_sheet(dir: &tempfile::TempDir) -> String {
        let path = dir.path().join("lessons.json");
        fs::write(&path, OTHER_COURSE_JSON).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_select_bundled_course_summary() {
        let cli = Cli::parse_from(["platebook"]);
        assert_eq!(cli.format, OutputFormat::Summary);
        assert!(cli.layout.is_none());
        assert!(cli.csv_file.is_none() && cli.json_file.is_none() && cli.sheet_url.is_none());

        let book = build(&cli).unwrap();
        assert_eq!(book.course, COURSE_NAME);
        assert_eq!(book.term, COURSE_TERM);
    }

    #[test]
    fn json_file_keeps_document_meta_without_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_json_sheet(&dir);

        let book = build(&Cli::parse_from(["platebook", "--json-file", path.as_str()])).unwrap();
        assert_eq!(book.course, "HIST 999 Other");
        assert_eq!(book.term, "Old");
    }

    #[test]
    fn json_file_term_flag_only_replaces_term() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_json_sheet(&dir);

        let cli = Cli::parse_from([
            "platebook",
            "--json-file",
            path.as_str(),
            "--term",
            "Spring 2027",
        ]);
        let book = build(&cli).unwrap();
        assert_eq!(book.course, "HIST 999 Other");
        assert_eq!(book.term, "Spring 2027");

        let cli = Cli::parse_from([
            "platebook",
            "--json-file",
            path.as_str(),
            "--course",
            "HIST 100",
        ]);
        let book = build(&cli).unwrap();
        assert_eq!(book.course, "HIST 100");
        assert_eq!(book.term, "Old");
    }

    #[test]
    fn layout_is_rejected_with_json_file() {
        let result =
            Cli::try_parse_from(["platebook", "--json-file", "l.json", "--layout", "ndt"]);
        assert!(result.is_err());
    }

    #[test]
    fn sheet_url_conflicts_with_file_sources() {
        let result = Cli::try_parse_from([
            "platebook",
            "--sheet-url",
            "https://example.com/pub?output=csv",
            "--csv-file",
            "l.csv",
        ]);
        assert!(result.is_err());

        let cli = Cli::parse_from([
            "platebook",
            "--sheet-url",
            "https://example.com/pub?output=csv",
            "--layout",
            "number-date-title",
        ]);
        assert_eq!(cli.layout, Some(platebook_core::ColumnLayout::NumberDateTitle));
    }

    #[test]
    fn summary_counts_plate_kinds() {
        let text = render(builtin_platebook(), OutputFormat::Summary).unwrap();
        assert!(text.contains("plates=28 standard=25 presentation=3"));
    }

    #[test]
    fn toc_marks_notes_only_plates() {
        let text = render(builtin_platebook(), OutputFormat::Toc).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 29);
        assert!(lines[28].starts_with("Plate 28"));
        assert!(lines[28].ends_with("March 14 [notes only]"));
    }
}
