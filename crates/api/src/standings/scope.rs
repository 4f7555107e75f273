use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use super::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventCategory {
    Sports,
    Cultural,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Sports => "sports",
            EventCategory::Cultural => "cultural",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sports" => Ok(EventCategory::Sports),
            "cultural" => Ok(EventCategory::Cultural),
            _ => Err(ValidationError::UnknownCategory(s.to_string())),
        }
    }
}

/// The minimum the engine needs to know about an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventInfo {
    pub id: String,
    pub category: EventCategory,
    pub completed: bool,
}

/// Which events a standings table covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StandingsScope {
    All,
    Category(EventCategory),
    Event(String),
}

impl StandingsScope {
    /// `all`, `sports` and `cultural` are reserved. Anything else names a single event.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingField("scope"));
        }

        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(StandingsScope::All);
        }

        match trimmed.parse::<EventCategory>() {
            Ok(category) => Ok(StandingsScope::Category(category)),
            Err(_) => Ok(StandingsScope::Event(trimmed.to_string())),
        }
    }
}

/// A scope resolved against the event list, ready to hand to [`aggregate`](super::aggregate).
#[derive(Debug, Clone)]
pub enum ScopeFilter {
    All,
    Events(HashSet<String>),
}

impl ScopeFilter {
    pub fn resolve(scope: &StandingsScope, events: &[EventInfo]) -> Result<Self, ValidationError> {
        match scope {
            StandingsScope::All => Ok(ScopeFilter::All),
            StandingsScope::Category(category) => Ok(ScopeFilter::Events(
                events
                    .iter()
                    .filter(|event| event.category == *category)
                    .map(|event| event.id.clone())
                    .collect(),
            )),
            StandingsScope::Event(id) => {
                if events.iter().any(|event| &event.id == id) {
                    Ok(ScopeFilter::Events(HashSet::from([id.clone()])))
                } else {
                    Err(ValidationError::UnknownEvent(id.clone()))
                }
            }
        }
    }

    pub fn contains(&self, event_id: &str) -> bool {
        match self {
            ScopeFilter::All => true,
            ScopeFilter::Events(ids) => ids.contains(event_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events() -> Vec<EventInfo> {
        vec![
            EventInfo {
                id: "football".to_string(),
                category: EventCategory::Sports,
                completed: true,
            },
            EventInfo {
                id: "badminton".to_string(),
                category: EventCategory::Sports,
                completed: false,
            },
            EventInfo {
                id: "group-dance".to_string(),
                category: EventCategory::Cultural,
                completed: true,
            },
        ]
    }

    #[test]
    fn parses_reserved_words_and_event_ids() {
        assert_eq!(StandingsScope::parse("all"), Ok(StandingsScope::All));
        assert_eq!(
            StandingsScope::parse(" Sports "),
            Ok(StandingsScope::Category(EventCategory::Sports))
        );
        assert_eq!(
            StandingsScope::parse("group-dance"),
            Ok(StandingsScope::Event("group-dance".to_string()))
        );
        assert_eq!(
            StandingsScope::parse("  "),
            Err(ValidationError::MissingField("scope"))
        );
    }

    #[test]
    fn category_scope_covers_only_that_category() {
        let filter = ScopeFilter::resolve(&StandingsScope::Category(EventCategory::Sports), &events())
            .expect("categories always resolve");

        assert!(filter.contains("football"));
        assert!(filter.contains("badminton"));
        assert!(!filter.contains("group-dance"));
    }

    #[test]
    fn event_scope_requires_a_known_event() {
        let filter = ScopeFilter::resolve(&StandingsScope::Event("badminton".to_string()), &events())
            .expect("badminton exists");
        assert!(filter.contains("badminton"));
        assert!(!filter.contains("football"));

        assert!(matches!(
            ScopeFilter::resolve(&StandingsScope::Event("curling".to_string()), &events()),
            Err(ValidationError::UnknownEvent(id)) if id == "curling"
        ));
    }

    #[test]
    fn all_scope_admits_anything() {
        let filter = ScopeFilter::resolve(&StandingsScope::All, &[]).expect("all always resolves");
        assert!(filter.contains("anything"));
    }
}
