use crate::parsing::roles::LineRole;
use regex::Regex;
use std::sync::LazyLock;

/// Where a car name on a continuation line ends: a column gap or the start
/// of the session details.
static CAR_BOUNDARY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s{2,}|\b(?:Qualifying|Race|Practice|Fixed Setup|Open Setup)\b")
        .expect("valid car boundary regex")
});

/// Cross-line state for week entries whose car is printed on the next line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lookahead {
    #[default]
    Idle,
    /// The entry at `entry_index` of the current series still needs its car.
    AwaitingCar { entry_index: usize },
}

/// Outcome of offering a line to a pending week entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Continuation {
    /// The line continues the entry and names its car.
    Car(String),
    /// The line continues the entry but nothing precedes the session details.
    Blank,
    /// The line belongs to something else and must be classified normally.
    Rejected,
}

pub fn continuation(line: &str, role: &LineRole<'_>) -> Continuation {
    if matches!(role, LineRole::Empty) || role.is_structural() {
        return Continuation::Rejected;
    }
    let car = car_name_prefix(line);
    if car.is_empty() {
        Continuation::Blank
    } else {
        Continuation::Car(car.to_string())
    }
}

fn car_name_prefix(line: &str) -> &str {
    let line = line.trim();
    let end = CAR_BOUNDARY_RE
        .find(line)
        .map(|m| m.start())
        .unwrap_or(line.len());
    line[..end].trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::roles::classify_line;

    fn offer(line: &str) -> Continuation {
        continuation(line, &classify_line(line))
    }

    #[test]
    fn test_car_before_column_gap() {
        assert_eq!(
            offer("Mazda MX-5 Cup   Qualifying 15 min"),
            Continuation::Car("Mazda MX-5 Cup".into())
        );
    }

    #[test]
    fn test_car_before_session_keyword() {
        assert_eq!(
            offer("Porsche 911 GT3 Cup (992) Fixed Setup"),
            Continuation::Car("Porsche 911 GT3 Cup (992)".into())
        );
        assert_eq!(
            offer("BMW M2 CS Racing practice 30 min"),
            Continuation::Car("BMW M2 CS Racing".into())
        );
    }

    #[test]
    fn test_whole_line_when_no_boundary() {
        assert_eq!(
            offer("Toyota GR86"),
            Continuation::Car("Toyota GR86".into())
        );
    }

    #[test]
    fn test_keyword_only_line_is_blank() {
        assert_eq!(offer("Race 20 min"), Continuation::Blank);
    }

    #[test]
    fn test_structural_lines_rejected() {
        assert_eq!(offer("Week 4 (2025-04-08) Spa"), Continuation::Rejected);
        assert_eq!(offer("Ring Meister - 2025 Season 3"), Continuation::Rejected);
        assert_eq!(offer("Class B (4.0) -->"), Continuation::Rejected);
        assert_eq!(offer("Races every hour"), Continuation::Rejected);
        assert_eq!(offer("Min entries: 10"), Continuation::Rejected);
        assert_eq!(offer("Penalty: none"), Continuation::Rejected);
        assert_eq!(offer("  "), Continuation::Rejected);
    }
}
