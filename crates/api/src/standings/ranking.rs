use std::cmp::Ordering;

use super::aggregate::DivisionStanding;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedStanding {
    /// 1-based display position.
    pub rank: u32,
    pub standing: DivisionStanding,
}

/// Match points, then game points, both descending.
pub fn league_order(a: &DivisionStanding, b: &DivisionStanding) -> Ordering {
    b.match_points
        .total_cmp(&a.match_points)
        .then_with(|| b.game_points.total_cmp(&a.game_points))
}

/// Gold, then silver, then bronze, all descending.
pub fn medal_order(a: &DivisionStanding, b: &DivisionStanding) -> Ordering {
    b.gold
        .cmp(&a.gold)
        .then_with(|| b.silver.cmp(&a.silver))
        .then_with(|| b.bronze.cmp(&a.bronze))
}

pub fn rank_league(rows: Vec<DivisionStanding>) -> Vec<RankedStanding> {
    rank_by(rows, league_order)
}

pub fn rank_medals(rows: Vec<DivisionStanding>) -> Vec<RankedStanding> {
    rank_by(rows, medal_order)
}

// sort_by is stable: rows equal on every key keep their incoming order
fn rank_by(
    mut rows: Vec<DivisionStanding>,
    order: fn(&DivisionStanding, &DivisionStanding) -> Ordering,
) -> Vec<RankedStanding> {
    rows.sort_by(order);
    rows.into_iter()
        .enumerate()
        .map(|(index, standing)| RankedStanding {
            rank: index as u32 + 1,
            standing,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standings::aggregate::aggregate;
    use crate::standings::division::DivisionSet;
    use crate::standings::record::MatchRecord;

    fn league(division: &str, match_points: f64, game_points: f64) -> DivisionStanding {
        DivisionStanding {
            match_points,
            game_points,
            ..DivisionStanding::new(division)
        }
    }

    fn medals(division: &str, gold: u32, silver: u32, bronze: u32) -> DivisionStanding {
        DivisionStanding {
            gold,
            silver,
            bronze,
            ..DivisionStanding::new(division)
        }
    }

    fn order(ranked: &[RankedStanding]) -> Vec<(u32, &str)> {
        ranked
            .iter()
            .map(|r| (r.rank, r.standing.division.as_str()))
            .collect()
    }

    fn two_sided(a: &str, b: &str, points_a: f64, points_b: f64) -> MatchRecord {
        MatchRecord {
            id: None,
            event_id: "football".to_string(),
            division_a: a.to_string(),
            division_b: b.to_string(),
            winner: None,
            result: None,
            match_points_a: points_a,
            match_points_b: points_b,
            game_points_a: 0.0,
            game_points_b: 0.0,
            phase: None,
            fixture_id: None,
        }
    }

    #[test]
    fn tied_divisions_keep_encounter_order() {
        let records = vec![two_sided("A", "B", 2.0, 0.0), two_sided("A", "C", 0.0, 2.0)];
        let totals = aggregate(&records, &DivisionSet::from_codes(["A", "B", "C"]), |_| true)
            .expect("known divisions");

        let ranked = rank_league(totals.into_rows());

        assert_eq!(order(&ranked), vec![(1, "A"), (2, "C"), (3, "B")]);
        assert_eq!(ranked[0].standing.match_points, 2.0);
        assert_eq!(ranked[1].standing.match_points, 2.0);
    }

    #[test]
    fn game_points_break_match_point_ties() {
        let ranked = rank_league(vec![
            league("A", 6.0, 3.0),
            league("B", 6.0, 7.5),
            league("C", 9.0, 0.0),
            league("D", 0.0, 10.0),
        ]);

        assert_eq!(order(&ranked), vec![(1, "C"), (2, "B"), (3, "A"), (4, "D")]);
    }

    #[test]
    fn full_ties_are_stable_across_calls() {
        let rows = vec![
            league("E", 4.0, 2.0),
            league("B", 4.0, 2.0),
            league("D", 4.0, 2.0),
            league("A", 1.0, 0.0),
        ];

        let first = rank_league(rows.clone());
        let second = rank_league(rows);

        assert_eq!(order(&first), vec![(1, "E"), (2, "B"), (3, "D"), (4, "A")]);
        assert_eq!(first, second);
    }

    #[test]
    fn medal_ranking_breaks_ties_on_silver_then_bronze() {
        let ranked = rank_medals(vec![
            medals("A", 1, 2, 0),
            medals("B", 2, 0, 0),
            medals("C", 1, 2, 3),
            medals("D", 1, 3, 0),
            medals("E", 0, 0, 9),
        ]);

        assert_eq!(
            order(&ranked),
            vec![(1, "B"), (2, "D"), (3, "C"), (4, "A"), (5, "E")]
        );
    }

    #[test]
    fn ranking_nothing_yields_nothing() {
        assert!(rank_league(Vec::new()).is_empty());
        assert!(rank_medals(Vec::new()).is_empty());
    }
}
