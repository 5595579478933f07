use platebook_core::{
    parse_lesson_sheet_csv, parse_lessons_csv, ColumnLayout, CourseMeta, ImportError,
    LessonSheet,
};

const LOCAL_SHEET: &str = "\
plate_number,title,date,presentation
1,Introduction to the class,Jan 6

2,\"Rise of Qing, Creation of Manchu Empire\",Jan 15
3,  Joseon   Reform ,Jan 22
incomplete,row
4,Final presentations,March 10,yes
";

#[test]
fn local_layout_reads_title_then_date() {
    let lessons = parse_lessons_csv(LOCAL_SHEET, ColumnLayout::NumberTitleDate).unwrap();

    assert_eq!(lessons.len(), 4);
    assert_eq!(lessons[0].title, "Introduction to the class");
    assert_eq!(lessons[0].date, "Jan 6");
    assert_eq!(lessons[1].title, "Rise of Qing, Creation of Manchu Empire");
    assert_eq!(lessons[2].title, "Joseon Reform");
    assert_eq!(lessons[3].plate_number, 4);
    assert!(lessons[3].presentation);
    assert!(!lessons[0].presentation);
}

#[test]
fn published_sheet_layout_reads_date_then_title() {
    let raw = "Plate,Date,Lesson\n1,Jan 6,Introduction to the class, geography\n";
    let lessons = parse_lessons_csv(raw, ColumnLayout::NumberDateTitle).unwrap();

    assert_eq!(lessons.len(), 1);
    assert_eq!(lessons[0].date, "Jan 6");
    // Unquoted commas split cells; only the first three are read.
    assert_eq!(lessons[0].title, "Introduction to the class");
}

#[test]
fn stray_fourth_cell_without_marker_header_is_not_a_presentation() {
    let raw = "plate_number,title,date\n1,Rise of Qing, x,Jan 15\n2,Joseon Reform,Jan 22,y\n";
    let lessons = parse_lessons_csv(raw, ColumnLayout::NumberTitleDate).unwrap();

    assert_eq!(lessons.len(), 2);
    assert!(lessons.iter().all(|lesson| !lesson.presentation));
    assert_eq!(lessons[0].title, "Rise of Qing");
    assert_eq!(lessons[0].date, "x");
}

#[test]
fn marker_header_enables_presentation_column() {
    let raw = "plate,title,date,notes only\n1,Showcase,March 10,Yes\n2,Lecture,March 12,\n";
    let lessons = parse_lessons_csv(raw, ColumnLayout::NumberTitleDate).unwrap();

    assert!(lessons[0].presentation);
    assert!(!lessons[1].presentation);
}

#[test]
fn invalid_plate_number_reports_line() {
    let raw = "plate_number,title,date\n1,A,Jan 6\nten,B,Jan 8\n";
    let err = parse_lessons_csv(raw, ColumnLayout::default()).unwrap_err();

    match err {
        ImportError::InvalidPlateNumber { line, value } => {
            assert_eq!(line, 3);
            assert_eq!(value, "ten");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn zero_plate_number_is_rejected() {
    let raw = "plate_number,title,date\n0,A,Jan 6\n";
    let err = parse_lessons_csv(raw, ColumnLayout::default()).unwrap_err();
    assert!(err.to_string().contains("invalid plate number `0`"));
}

#[test]
fn header_only_sheet_has_no_lessons() {
    let err = parse_lessons_csv("plate_number,title,date\n", ColumnLayout::default()).unwrap_err();
    assert!(matches!(err, ImportError::NoLessons));
}

#[test]
fn csv_sheet_maps_to_base_plates_in_order() {
    let sheet = parse_lesson_sheet_csv(
        LOCAL_SHEET,
        ColumnLayout::NumberTitleDate,
        CourseMeta::new("HIST 213", "Winter 2026"),
    )
    .unwrap();
    let bases = sheet.to_base_plates();

    assert_eq!(sheet.course, "HIST 213");
    assert_eq!(bases.len(), 4);
    assert_eq!(bases[1].date, "Jan 15");
    assert!(bases[0].full);
    assert!(!bases[3].full);
}

#[test]
fn json_sheet_round_trips_generator_document() {
    let raw = serde_json::json!({
        "course": "HIST 213 East Asia in the Modern World",
        "term": "Winter 2026",
        "lessons": [
            {"plate_number": 1, "title": "Introduction to the class, geography", "date": "Jan 6"},
            {"plate_number": 26, "title": "Final presentations", "date": "March 10", "presentation": true}
        ]
    })
    .to_string();

    let sheet = LessonSheet::from_json_str(&raw).unwrap();
    assert_eq!(sheet.lessons.len(), 2);
    assert!(sheet.lessons[1].presentation);

    let bases = sheet.to_base_plates();
    assert_eq!(bases[0].title, "Introduction to the class, geography");
    assert!(!bases[1].full);
}

#[test]
fn json_sheet_rejects_missing_fields() {
    let err = LessonSheet::from_json_str(r#"{"course":"c","lessons":[]}"#).unwrap_err();
    assert!(matches!(err, ImportError::Json(_)));
}
