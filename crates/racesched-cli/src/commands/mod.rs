pub mod calendar;
pub mod csv;
pub mod parse;
pub mod rules;

use racesched_core::error::ScheduleError;
use racesched_core::extraction::fixture::FixtureExtractor;
use racesched_core::extraction::pdftotext::PdftotextExtractor;
use racesched_core::minimize::{self, builtin, Minimizer};
use racesched_core::model::{LicenseGroup, ParsedSchedule, SeriesRecord};
use racesched_core::options::ParseOptions;
use racesched_core::season_series::parse_season_series;

use crate::{InputArgs, MinimizeArgs, SelectArgs};

/// Load series from a schedule PDF, a fragment fixture, pre-parsed JSON or
/// season-series JSON from the iRacing data API.
pub fn load_schedule(input: &InputArgs) -> Result<ParsedSchedule, ScheduleError> {
    let options = match &input.options {
        Some(path) => ParseOptions::load(path)?,
        None => ParseOptions::default(),
    };

    let bytes = std::fs::read(&input.input_file)?;
    let is_json = input
        .input_file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if input.fragments {
        return racesched_core::parse_pdf(&bytes, &FixtureExtractor::new(), &options);
    }
    if is_json {
        return load_parsed_json(&bytes, &options);
    }

    if !PdftotextExtractor::is_available() {
        return Err(ScheduleError::PdftotextNotFound);
    }
    let extractor = PdftotextExtractor::new();
    racesched_core::parse_pdf(&bytes, &extractor, &options)
}

/// JSON input is a bare series array, a full parse result, or a
/// season-series array whose weeks carry a `track` object.
fn load_parsed_json(
    bytes: &[u8],
    options: &ParseOptions,
) -> Result<ParsedSchedule, ScheduleError> {
    if let Ok(series) = serde_json::from_slice::<Vec<SeriesRecord>>(bytes) {
        return Ok(ParsedSchedule {
            series,
            dropped: Vec::new(),
        });
    }
    if let Ok(parsed) = serde_json::from_slice::<ParsedSchedule>(bytes) {
        return Ok(parsed);
    }
    parse_season_series(bytes, options)
}

/// Series matching every given criterion, in document order.
pub fn select<'a>(
    parsed: &'a ParsedSchedule,
    select: &SelectArgs,
) -> Result<Vec<&'a SeriesRecord>, ScheduleError> {
    let licenses = select
        .license
        .iter()
        .map(|l| {
            LicenseGroup::from_str_loose(l).ok_or_else(|| {
                ScheduleError::InvalidSelection(format!(
                    "unknown license level '{}'. Use Rookie, D, C, B, A or Unknown",
                    l
                ))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let search = select.search.as_ref().map(|s| s.to_lowercase());

    Ok(parsed
        .series
        .iter()
        .filter(|s| select.series.is_empty() || select.series.contains(&s.season_name))
        .filter(|s| licenses.is_empty() || licenses.contains(&s.license_group))
        .filter(|s| match &search {
            Some(term) => s.season_name.to_lowercase().contains(term),
            None => true,
        })
        .collect())
}

pub fn build_minimizer(args: &MinimizeArgs) -> Result<Minimizer, ScheduleError> {
    if !args.minimize {
        return Ok(Minimizer::disabled());
    }

    let presets: Vec<String> = if args.preset.is_empty() && args.rules.is_empty() {
        builtin::PRESETS.iter().map(|s| s.to_string()).collect()
    } else {
        args.preset.clone()
    };

    let mut rules = minimize::schema::RuleSet {
        name: "combined".into(),
        ..Default::default()
    };
    for preset in &presets {
        rules.extend(builtin::load_preset(preset)?);
    }
    for path in &args.rules {
        rules.extend(minimize::load_rules(path)?);
    }

    tracing::debug!(rules = rules.rule_count(), "minimizer enabled");
    Minimizer::new(&rules)
}
