use racesched_core::error::ScheduleError;
use racesched_core::minimize::schema::ReplacementRule;
use racesched_core::minimize::{builtin, load_rules};
use std::path::Path;

pub fn list() -> Result<(), ScheduleError> {
    println!("Available predefined rule sets:\n");
    for name in builtin::PRESETS {
        let rules = builtin::load_preset(name)?;
        println!("  {:<10} {} ({} rules)", name, rules.name, rules.rule_count());
        if let Some(ref desc) = rules.description {
            println!("             {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn show(preset: &str) -> Result<(), ScheduleError> {
    let rules = builtin::load_preset(preset)?;

    println!("{}\n", rules.name);
    if let Some(ref desc) = rules.description {
        println!("{}\n", desc);
    }
    println!("Rules are applied in order, case-insensitively, to every occurrence.\n");

    print_group("Track names", &rules.track_names);
    print_group("Track configurations", &rules.track_configs);
    print_group("Cars", &rules.cars);
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), ScheduleError> {
    let rules = load_rules(file)?;
    println!(
        "{} is valid: '{}' with {} track name, {} config and {} car rule(s)",
        file.display(),
        rules.name,
        rules.track_names.len(),
        rules.track_configs.len(),
        rules.cars.len()
    );
    Ok(())
}

fn print_group(title: &str, rules: &[ReplacementRule]) {
    println!("{}:", title);
    if rules.is_empty() {
        println!("  (none)\n");
        return;
    }

    let width = rules
        .iter()
        .map(|r| r.original.chars().count() + 2)
        .max()
        .unwrap_or(20);

    for rule in rules {
        let quoted = format!("\"{}\"", rule.original);
        let replacement = if rule.replacement.is_empty() {
            "(removed)".to_string()
        } else {
            format!("\"{}\"", rule.replacement)
        };
        println!("  {:<width$}  -> {}", quoted, replacement, width = width);
    }
    println!();
}
