use super::division::DivisionSet;
use super::error::ValidationError;
use super::record::{MatchRecord, SideOutcome};

/// What one side of one record adds to a division's totals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contribution<'a> {
    pub division: &'a str,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub drawn: u32,
    pub match_points: f64,
    pub game_points: f64,
}

/// Anything that can be folded into division totals.
pub trait Contributes {
    fn event_id(&self) -> &str;

    fn contributions(&self) -> impl Iterator<Item = Contribution<'_>>;
}

impl MatchRecord {
    fn side<'s>(&'s self, division: &'s str, match_points: f64, game_points: f64) -> Contribution<'s> {
        let (won, lost, drawn) = match self.outcome_for(division) {
            SideOutcome::Won => (1, 0, 0),
            SideOutcome::Lost => (0, 1, 0),
            SideOutcome::Drawn => (0, 0, 1),
            SideOutcome::Pending => (0, 0, 0),
        };

        Contribution {
            division,
            played: won + lost + drawn,
            won,
            lost,
            drawn,
            match_points,
            game_points,
        }
    }
}

impl Contributes for MatchRecord {
    fn event_id(&self) -> &str {
        &self.event_id
    }

    /// One contribution per side, each touching only its own division.
    fn contributions(&self) -> impl Iterator<Item = Contribution<'_>> {
        [
            self.side(&self.division_a, self.match_points_a, self.game_points_a),
            self.side(&self.division_b, self.match_points_b, self.game_points_b),
        ]
        .into_iter()
    }
}

/// A row of the pre-aggregated `standings` cache.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedStanding {
    pub event_id: String,
    pub division: String,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub drawn: u32,
    pub match_points: f64,
    pub game_points: f64,
}

impl Contributes for CachedStanding {
    fn event_id(&self) -> &str {
        &self.event_id
    }

    fn contributions(&self) -> impl Iterator<Item = Contribution<'_>> {
        std::iter::once(Contribution {
            division: &self.division,
            played: self.played,
            won: self.won,
            lost: self.lost,
            drawn: self.drawn,
            match_points: self.match_points,
            game_points: self.game_points,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DivisionStanding {
    pub division: String,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub drawn: u32,
    pub match_points: f64,
    pub game_points: f64,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    pub points: f64,
}

impl DivisionStanding {
    pub fn new(division: impl Into<String>) -> Self {
        Self {
            division: division.into(),
            played: 0,
            won: 0,
            lost: 0,
            drawn: 0,
            match_points: 0.0,
            game_points: 0.0,
            gold: 0,
            silver: 0,
            bronze: 0,
            points: 0.0,
        }
    }
}

/// Running totals for one division. Points are summed once every contribution is in,
/// smallest first, so the total is the same bits whatever order the records came in.
#[derive(Debug)]
struct Tally {
    standing: DivisionStanding,
    match_points: Vec<f64>,
    game_points: Vec<f64>,
}

impl Tally {
    fn new(division: &str) -> Self {
        Self {
            standing: DivisionStanding::new(division),
            match_points: Vec::new(),
            game_points: Vec::new(),
        }
    }

    fn absorb(&mut self, contribution: &Contribution<'_>) {
        self.standing.played += contribution.played;
        self.standing.won += contribution.won;
        self.standing.lost += contribution.lost;
        self.standing.drawn += contribution.drawn;
        self.match_points.push(contribution.match_points);
        self.game_points.push(contribution.game_points);
    }

    fn finish(self) -> DivisionStanding {
        DivisionStanding {
            match_points: canonical_sum(self.match_points),
            game_points: canonical_sum(self.game_points),
            ..self.standing
        }
    }
}

fn canonical_sum(mut values: Vec<f64>) -> f64 {
    values.sort_by(f64::total_cmp);
    values.into_iter().fold(0.0, |total, value| total + value)
}

/// Totals keyed by division, held in division-set order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DivisionTotals {
    rows: Vec<DivisionStanding>,
}

impl DivisionTotals {
    pub(crate) fn from_slots(slots: Vec<Option<DivisionStanding>>) -> Self {
        Self {
            rows: slots.into_iter().flatten().collect(),
        }
    }

    pub fn get(&self, division: &str) -> Option<&DivisionStanding> {
        self.rows.iter().find(|row| row.division == division)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DivisionStanding> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_rows(self) -> Vec<DivisionStanding> {
        self.rows
    }
}

/// Fold records into one totals row per division.
///
/// Only records whose event passes `scope` are counted. A division that receives no
/// in-scope contribution gets no row. Rows come out in `divisions` order whatever the
/// order of `records`, so the same record set always yields the same totals.
pub fn aggregate<'a, R>(
    records: impl IntoIterator<Item = &'a R>,
    divisions: &DivisionSet,
    scope: impl Fn(&str) -> bool,
) -> Result<DivisionTotals, ValidationError>
where
    R: Contributes + 'a,
{
    let mut slots: Vec<Option<Tally>> = std::iter::repeat_with(|| None).take(divisions.len()).collect();

    for record in records {
        if !scope(record.event_id()) {
            continue;
        }

        for contribution in record.contributions() {
            let index = divisions
                .position(contribution.division)
                .ok_or_else(|| ValidationError::UnknownDivision(contribution.division.to_string()))?;

            slots[index]
                .get_or_insert_with(|| Tally::new(contribution.division))
                .absorb(&contribution);
        }
    }

    Ok(DivisionTotals::from_slots(
        slots.into_iter().map(|slot| slot.map(Tally::finish)).collect(),
    ))
}
