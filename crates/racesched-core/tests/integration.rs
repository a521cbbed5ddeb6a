//! Integration tests for the parse_pdf() end-to-end pipeline.
//!
//! Uses a MockExtractor that returns pre-built PageFragments without
//! invoking pdftotext, so these tests run without poppler-utils.

use racesched_core::error::ScheduleError;
use racesched_core::export::calendar::build_calendar;
use racesched_core::export::csv::pivot_csv;
use racesched_core::extraction::fixture::FixtureExtractor;
use racesched_core::extraction::{PageFragments, TextExtractor};
use racesched_core::minimize::builtin::load_preset;
use racesched_core::minimize::Minimizer;
use racesched_core::model::{LicenseGroup, SeriesKind, TextFragment};
use racesched_core::options::ParseOptions;
use racesched_core::parse_pdf;

struct MockExtractor {
    pages: Vec<PageFragments>,
}

impl TextExtractor for MockExtractor {
    fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<PageFragments>, ScheduleError> {
        Ok(self.pages.clone())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

/// One fragment per line, laid out top to bottom 12pt apart.
fn page(number: usize, lines: &[&str]) -> PageFragments {
    PageFragments {
        page_number: number,
        fragments: lines
            .iter()
            .enumerate()
            .map(|(i, text)| TextFragment::new(*text, 700.0 - 12.0 * i as f32))
            .collect(),
    }
}

fn season_document() -> MockExtractor {
    MockExtractor {
        pages: vec![
            page(
                1,
                &[
                    "Season schedule overview",
                    "1. Advanced Series - 2025 Season 2",
                    "Class D (1.5) -->",
                    "Races every 2 hours at :45",
                    "Mazda MX-5 Cup, Toyota GR86",
                    "Min entries: 8",
                    "Week 1 (2025-03-18) Okayama International Circuit - Full Course 72°F, Rain chance 10% 15 laps",
                    "Week 2 (2025-03-25) Daytona International Speedway (Road Course) 20 laps",
                    "2. Ring Meister Series - 2025 Season 2 - Fixed",
                    "Rookie (1.0) -->",
                    "Week 1 (2025-03-18) Nürburgring Nordschleife - Industriefahrten 3 laps",
                ],
            ),
            page(
                2,
                &[
                    "Porsche 911 GT3 Cup (992)   Qualifying 15 min",
                    "Week 2 (2025-03-25) Nürburgring Nordschleife - Industriefahrten 3 laps",
                    "Week 3 (2025-04-01) Nürburgring Nordschleife 3 laps",
                    "Broken Series - 2025 Season 2",
                    "Class B (3.0) -->",
                ],
            ),
        ],
    }
}

// ---------------------------------------------------------------------------
// Test 1: Two series over two pages, one series dropped
// ---------------------------------------------------------------------------
#[test]
fn multi_page_document() {
    let result = parse_pdf(&[], &season_document(), &ParseOptions::default()).unwrap();

    assert_eq!(result.series.len(), 2);
    assert_eq!(result.dropped.len(), 1);
    assert_eq!(result.dropped[0].season_name, "Broken Series");
    assert_eq!(result.dropped[0].week_count, 0);

    let advanced = &result.series[0];
    assert_eq!(advanced.season_name, "Advanced Series");
    assert_eq!(advanced.kind, SeriesKind::Default);
    assert_eq!(advanced.license_group, LicenseGroup::C);
    assert_eq!(advanced.race_frequency, "Races every 2 hours at :45");
    assert_eq!(advanced.car_types.len(), 1);
    assert_eq!(advanced.car_types[0].car_type, "Mazda MX-5 Cup, Toyota GR86");
    assert_eq!(advanced.schedules.len(), 2);

    let week1 = &advanced.schedules[0];
    assert_eq!(week1.race_week_num, 0);
    assert_eq!(week1.track_name, "Okayama International Circuit - Full Course");
    assert_eq!(week1.rain_chance, 10);
    assert_eq!(week1.laps, "15 laps");
    assert!(week1.weekly_cars.is_none());
    assert_eq!(advanced.schedules[1].track_name, "Daytona International Speedway");
}

// ---------------------------------------------------------------------------
// Test 2: Car lookahead carries across the page break
// ---------------------------------------------------------------------------
#[test]
fn lookahead_across_page_boundary() {
    let result = parse_pdf(&[], &season_document(), &ParseOptions::default()).unwrap();
    let ring = &result.series[1];

    assert_eq!(ring.season_name, "Ring Meister Series - Fixed");
    assert_eq!(ring.kind, SeriesKind::RingMeister);
    assert_eq!(ring.license_group, LicenseGroup::Rookie);
    assert_eq!(ring.schedules.len(), 3);
    assert_eq!(
        ring.schedules[0].weekly_cars.as_deref(),
        Some("Porsche 911 GT3 Cup (992)")
    );
    assert_eq!(
        ring.schedules[0].track_name,
        "Nürburgring Nordschleife - Industriefahrten"
    );
    // Followed directly by another week line.
    assert!(ring.schedules[1].weekly_cars.is_none());
    // Followed by a series header.
    assert!(ring.schedules[2].weekly_cars.is_none());
    assert_eq!(ring.schedules[2].race_week_num, 2);
}

// ---------------------------------------------------------------------------
// Test 3: Word fragments with baseline jitter are joined into lines
// ---------------------------------------------------------------------------
#[test]
fn word_fragments_reconstructed() {
    let words = |texts: &[&str], y: f32| -> Vec<TextFragment> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| TextFragment {
                text: t.to_string(),
                x: 50.0 + 40.0 * i as f32,
                baseline_y: y + if i % 2 == 0 { 0.0 } else { 2.5 },
            })
            .collect()
    };

    let mut fragments = Vec::new();
    fragments.extend(words(&["Week ", "1 ", "(2025-03-18) ", "Spa ", "20 ", "laps"], 600.0));
    fragments.extend(words(&["GT ", "Sprint ", "- ", "2025 ", "Season ", "2"], 640.0));

    let extractor = MockExtractor {
        pages: vec![PageFragments {
            page_number: 1,
            fragments,
        }],
    };
    let result = parse_pdf(&[], &extractor, &ParseOptions::default()).unwrap();

    assert_eq!(result.series.len(), 1);
    assert_eq!(result.series[0].season_name, "GT Sprint");
    assert_eq!(result.series[0].schedules[0].track_name, "Spa");
    assert_eq!(result.series[0].schedules[0].laps, "20 laps");
}

// ---------------------------------------------------------------------------
// Test 4: Fragments out of reading order need order_by_x
// ---------------------------------------------------------------------------
#[test]
fn order_by_x_restores_reading_order() {
    let at = |text: &str, x: f32, baseline_y: f32| TextFragment {
        text: text.to_string(),
        x,
        baseline_y,
    };
    let fragments = vec![
        at("2025 Season 2", 120.0, 700.0),
        at("GT Sprint - ", 40.0, 700.0),
        at("Spa 20 laps", 150.0, 680.0),
        at("Week 1 (2025-03-18) ", 40.0, 680.0),
    ];
    let extractor = MockExtractor {
        pages: vec![PageFragments {
            page_number: 1,
            fragments,
        }],
    };

    let unordered = parse_pdf(&[], &extractor, &ParseOptions::default()).unwrap();
    assert!(unordered.series.is_empty());

    let options = ParseOptions {
        order_by_x: true,
        ..Default::default()
    };
    let ordered = parse_pdf(&[], &extractor, &options).unwrap();
    assert_eq!(ordered.series.len(), 1);
    assert_eq!(ordered.series[0].schedules[0].track_name, "Spa");
}

// ---------------------------------------------------------------------------
// Test 5: Validity filter caps the season length
// ---------------------------------------------------------------------------
#[test]
fn implausible_series_dropped() {
    let mut lines = vec!["Endless Series - 2025 Season 2".to_string()];
    for week in 1..=13 {
        lines.push(format!("Week {} (2025-03-18) Spa 20 laps", week));
    }
    lines.push("Short Series - 2025 Season 2".to_string());
    lines.push("Week 1 (2025-03-18) Monza 20 laps".to_string());
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();

    let extractor = MockExtractor {
        pages: vec![page(1, &refs)],
    };
    let result = parse_pdf(&[], &extractor, &ParseOptions::default()).unwrap();
    assert_eq!(result.series.len(), 1);
    assert_eq!(result.series[0].season_name, "Short Series");
    assert_eq!(result.dropped[0].season_name, "Endless Series");
    assert_eq!(result.dropped[0].week_count, 13);

    let relaxed = ParseOptions {
        max_weeks: 13,
        ..Default::default()
    };
    let result = parse_pdf(&[], &extractor, &relaxed).unwrap();
    assert_eq!(result.series.len(), 2);
    assert!(result.dropped.is_empty());
}

// ---------------------------------------------------------------------------
// Test 6: Extraction without any text is an error
// ---------------------------------------------------------------------------
#[test]
fn no_text_is_an_error() {
    let extractor = MockExtractor {
        pages: vec![page(1, &["   ", ""]), page(2, &[])],
    };
    let err = parse_pdf(&[], &extractor, &ParseOptions::default()).unwrap_err();
    assert!(matches!(err, ScheduleError::NoText));

    let nothing = MockExtractor { pages: vec![] };
    let err = parse_pdf(&[], &nothing, &ParseOptions::default()).unwrap_err();
    assert!(matches!(err, ScheduleError::NoText));
}

// ---------------------------------------------------------------------------
// Test 7: Text without series parses to an empty result
// ---------------------------------------------------------------------------
#[test]
fn text_without_series_is_empty_result() {
    let extractor = MockExtractor {
        pages: vec![page(1, &["Welcome to the new season", "Week 1 (2025-03-18) Spa"])],
    };
    let result = parse_pdf(&[], &extractor, &ParseOptions::default()).unwrap();
    assert!(result.series.is_empty());
    assert!(result.dropped.is_empty());
}

// ---------------------------------------------------------------------------
// Test 8: Full license promotion table
// ---------------------------------------------------------------------------
#[test]
fn license_promotion_table() {
    let cases = [
        ("Rookie (1.0) -->", LicenseGroup::Rookie),
        ("Rookie (2.0) -->", LicenseGroup::D),
        ("Class D (1.5) -->", LicenseGroup::C),
        ("Class C (2.0) -->", LicenseGroup::B),
        ("Class B (3.0) -->", LicenseGroup::A),
        ("Class A (4.0) -->", LicenseGroup::A),
        ("Class A (4.0) →", LicenseGroup::A),
    ];

    for (license_line, expected) in cases {
        let extractor = MockExtractor {
            pages: vec![page(
                1,
                &[
                    "License Series - 2025 Season 2",
                    license_line,
                    "Class D (1.0) -->",
                    "Week 1 (2025-03-18) Spa 20 laps",
                ],
            )],
        };
        let result = parse_pdf(&[], &extractor, &ParseOptions::default()).unwrap();
        assert_eq!(result.series[0].license_group, expected, "{}", license_line);
    }
}

// ---------------------------------------------------------------------------
// Test 9: Draft Master weeks carry the car on the line or the next one
// ---------------------------------------------------------------------------
#[test]
fn draft_master_cars() {
    let extractor = MockExtractor {
        pages: vec![page(
            1,
            &[
                "Draft Master Challenge - 2025 Season 2",
                "Week 1 (2025-03-18) Okayama International Circuit - Full Course - Audi RS 3 LMS TCR 10 laps",
                "Week 2 (2025-03-25) Lime Rock Park 10 laps",
                "Honda Civic Type R   Race 20 min",
                "Week 3 (2025-04-01) Summit Point Raceway 10 laps",
            ],
        )],
    };
    let result = parse_pdf(&[], &extractor, &ParseOptions::default()).unwrap();
    let weeks = &result.series[0].schedules;

    assert_eq!(weeks[0].track_name, "Okayama International Circuit - Full Course");
    assert_eq!(weeks[0].weekly_cars.as_deref(), Some("Audi RS 3 LMS TCR"));
    assert_eq!(weeks[1].track_name, "Lime Rock Park");
    assert_eq!(weeks[1].weekly_cars.as_deref(), Some("Honda Civic Type R"));
    assert!(weeks[2].weekly_cars.is_none());
}

// ---------------------------------------------------------------------------
// Test 10: Fixture JSON through the same pipeline
// ---------------------------------------------------------------------------
#[test]
fn fixture_document() {
    let json = r#"[
        {"fragments": [
            {"text": "Advanced Series - 2025 Season 2", "baseline_y": 700},
            {"text": "Week 3 (2025-04-01) Daytona (Oval) 20 laps", "baseline_y": 680}
        ]}
    ]"#;
    let result = parse_pdf(
        json.as_bytes(),
        &FixtureExtractor::new(),
        &ParseOptions::default(),
    )
    .unwrap();
    let entry = &result.series[0].schedules[0];
    assert_eq!(entry.race_week_num, 2);
    assert_eq!(entry.start_date, "2025-04-01");
    assert_eq!(entry.track_name, "Daytona");
    assert_eq!(entry.laps, "20 laps");
    assert_eq!(entry.rain_chance, 0);
}

// ---------------------------------------------------------------------------
// Test 11: Parsed series projected to a minimized CSV and a calendar
// ---------------------------------------------------------------------------
#[test]
fn parsed_series_projections() {
    let result = parse_pdf(&[], &season_document(), &ParseOptions::default()).unwrap();
    let selected: Vec<_> = result.series.iter().collect();
    let minimizer = Minimizer::new(&load_preset("default").unwrap()).unwrap();

    let csv = pivot_csv(&selected, 12, &minimizer);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 16);
    assert_eq!(
        lines[0],
        r#""RowType","Advanced Series","Ring Meister Series - Fixed""#
    );
    assert_eq!(lines[1], r#""Time","Races every 2 hours at :45","N/A""#);
    assert_eq!(lines[2], r#""License","C","Rookie""#);
    assert_eq!(lines[4], r#""Track1","Okayama - Full","Porsche Cup""#);
    assert_eq!(lines[5], r#""Track2","Daytona","""#);

    let calendar = build_calendar(&selected, &minimizer).unwrap();
    assert_eq!(calendar.len(), 3);
    let first = calendar[0].cells[0].as_ref().unwrap();
    assert_eq!(first.title, "Okayama - Full");
    assert_eq!(first.subtext, "15 laps");
    assert_eq!(first.rain_chance, 10);
    assert_eq!(calendar[0].cells[1].as_ref().unwrap().title, "Porsche Cup");
    assert!(calendar[2].cells[0].is_none());
    assert_eq!(calendar[2].cells[1].as_ref().unwrap().title, "N/A");
}
