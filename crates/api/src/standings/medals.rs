use super::aggregate::{aggregate, DivisionStanding, DivisionTotals};
use super::division::DivisionSet;
use super::error::ValidationError;
use super::ranking::rank_league;
use super::record::MatchRecord;
use super::scope::{EventCategory, EventInfo, ScopeFilter};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MedalWeights {
    pub gold: f64,
    pub silver: f64,
    pub bronze: f64,
}

impl MedalWeights {
    pub const fn new(gold: f64, silver: f64, bronze: f64) -> Self {
        Self {
            gold,
            silver,
            bronze,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryWeights {
    pub sports: MedalWeights,
    pub cultural: MedalWeights,
}

impl CategoryWeights {
    pub fn for_category(&self, category: EventCategory) -> MedalWeights {
        match category {
            EventCategory::Sports => self.sports,
            EventCategory::Cultural => self.cultural,
        }
    }
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            sports: MedalWeights::new(3.0, 2.0, 1.0),
            cultural: MedalWeights::new(5.0, 3.0, 2.0),
        }
    }
}

/// Overall medal tally across completed events.
///
/// Each completed event in scope is ranked on its own league table and the top three
/// places take gold, silver and bronze. `points` is the medal count weighted by the
/// event's category. Divisions without a medal in scope get no row.
pub fn medal_table(
    events: &[EventInfo],
    matches: &[MatchRecord],
    divisions: &DivisionSet,
    weights: &CategoryWeights,
    scope: &ScopeFilter,
) -> Result<DivisionTotals, ValidationError> {
    let mut slots: Vec<Option<DivisionStanding>> = vec![None; divisions.len()];

    for event in events.iter().filter(|e| e.completed && scope.contains(&e.id)) {
        let table = aggregate(matches, divisions, |id| id == event.id)?;
        let podium = rank_league(table.into_rows());
        let w = weights.for_category(event.category);

        for placed in podium.iter().take(3) {
            let Some(index) = divisions.position(&placed.standing.division) else {
                continue;
            };
            let row = slots[index].get_or_insert_with(|| DivisionStanding::new(placed.standing.division.clone()));

            match placed.rank {
                1 => {
                    row.gold += 1;
                    row.points += w.gold;
                }
                2 => {
                    row.silver += 1;
                    row.points += w.silver;
                }
                _ => {
                    row.bronze += 1;
                    row.points += w.bronze;
                }
            }
        }
    }

    Ok(DivisionTotals::from_slots(slots))
}
