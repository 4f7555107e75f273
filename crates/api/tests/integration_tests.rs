//! End-to-end flows against Postgres. Run with
//! `TEST_DATABASE_URL=... cargo test -- --ignored`.

mod common;

use api::auth::end_session;
use async_graphql::Variables;
use common::*;
use serde_json::json;

const RECORD_MATCH: &str = r#"
    mutation Record($input: RecordMatchInput!) {
        recordMatch(input: $input) { id winner matchPointsA matchPointsB recordedBy }
    }
"#;

fn record_vars(event: &str, a: &str, b: &str, result: &str) -> Variables {
    Variables::from_json(json!({
        "input": {
            "eventId": event,
            "divisionA": a,
            "divisionB": b,
            "result": result
        }
    }))
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn recorded_matches_drive_event_standings() {
    let state = setup_test_db().await;
    let schema = schema_for(&state);
    reset_event(&state, "kabaddi").await;
    let claims = sign_in_scorer(&state).await;

    let response = execute_graphql(&schema, RECORD_MATCH, Some(record_vars("kabaddi", "A", "B", "win")), Some(claims.clone())).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["recordMatch"]["winner"], "A");
    assert_eq!(data["recordMatch"]["matchPointsA"], 2.0);
    assert_eq!(data["recordMatch"]["recordedBy"], SCORER_EMAIL);

    let response = execute_graphql(&schema, RECORD_MATCH, Some(record_vars("kabaddi", "C", "D", "draw")), Some(claims)).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let response = execute_graphql(
        &schema,
        r#"query { standings(scope: "kabaddi") { rank division played won drawn lost matchPoints } }"#,
        None,
        None,
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    let rows = data["standings"].as_array().unwrap();
    let order: Vec<&str> = rows.iter().map(|r| r["division"].as_str().unwrap()).collect();
    // E has not played, so it has no row
    assert_eq!(order, vec!["A", "C", "D", "B"]);
    assert_eq!(rows[0]["rank"], 1);
    assert_eq!(rows[0]["won"], 1);
    assert_eq!(rows[1]["drawn"], 1);
    assert_eq!(rows[1]["matchPoints"], 1.0);
    assert_eq!(rows[3]["lost"], 1);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn unknown_divisions_are_rejected() {
    let state = setup_test_db().await;
    let schema = schema_for(&state);
    let claims = sign_in_scorer(&state).await;

    let response = execute_graphql(&schema, RECORD_MATCH, Some(record_vars("kabaddi", "A", "Z", "win")), Some(claims.clone())).await;
    assert_eq!(first_error(&response), "unknown division: Z");

    let response = execute_graphql(&schema, RECORD_MATCH, Some(record_vars("kabaddi", "B", "B", "loss")), Some(claims)).await;
    assert_eq!(first_error(&response), "division B cannot play against itself");
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn decided_tie_stores_summary_and_games() {
    let state = setup_test_db().await;
    let schema = schema_for(&state);
    reset_event(&state, "badminton").await;
    let claims = sign_in_scorer(&state).await;

    let game = |winner: &str| {
        json!({
            "matchType": "singles",
            "teamAPlayers": "Asha",
            "teamBPlayers": "Ravi",
            "winner": winner
        })
    };
    let variables = Variables::from_json(json!({
        "input": {
            "eventId": "badminton",
            "divisionA": "A",
            "divisionB": "B",
            "phase": "group",
            "games": [game("team_a"), game("team_b"), game("team_a"), game("team_a"), game("")]
        }
    }));

    let response = execute_graphql(
        &schema,
        r#"mutation Submit($input: SubmitTieResultInput!) {
            submitTieResult(input: $input) {
                match { id tieId gamePointsA gamePointsB }
                games { matchNumber winner }
                winner
                pointsA
                inconsistent
            }
        }"#,
        Some(variables),
        Some(claims),
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    let payload = &data["submitTieResult"];
    assert_eq!(payload["winner"], "A");
    assert_eq!(payload["pointsA"], 3.0);
    assert_eq!(payload["inconsistent"], false);
    assert_eq!(payload["match"]["gamePointsA"], 3.0);
    assert_eq!(payload["match"]["gamePointsB"], 1.0);
    // The blank fifth game was never played
    assert_eq!(payload["games"].as_array().unwrap().len(), 4);

    let tie_id = payload["match"]["tieId"].as_str().unwrap();
    assert!(tie_id.starts_with("badminton-A-B-"), "{tie_id}");

    let match_id = payload["match"]["id"].as_str().unwrap().to_string();
    let query = format!(r#"query {{ tieGames(matchId: "{match_id}") {{ tieId matchNumber }} }}"#);
    let response = execute_graphql(&schema, &query, None, None).await;
    let data = response.data.into_json().unwrap();
    let games = data["tieGames"].as_array().unwrap();
    assert_eq!(games.len(), 4);
    assert!(games.iter().all(|g| g["tieId"] == tie_id));
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn undecided_tie_is_not_stored() {
    let state = setup_test_db().await;
    let schema = schema_for(&state);
    reset_event(&state, "squash").await;
    let claims = sign_in_scorer(&state).await;

    let variables = Variables::from_json(json!({
        "input": {
            "eventId": "squash",
            "divisionA": "C",
            "divisionB": "E",
            "phase": "group",
            "games": [
                { "matchType": "singles", "teamAPlayers": "x", "teamBPlayers": "y", "winner": "team_a" },
                { "matchType": "singles", "teamAPlayers": "x", "teamBPlayers": "y", "winner": "team_b" }
            ]
        }
    }));

    let response = execute_graphql(
        &schema,
        r#"mutation Submit($input: SubmitTieResultInput!) { submitTieResult(input: $input) { winner } }"#,
        Some(variables),
        Some(claims),
    )
    .await;
    assert_eq!(
        first_error(&response),
        "Complete at least 3 games to determine a winner (team A 1, team B 1)"
    );

    let response = execute_graphql(&schema, r#"query { eventMatches(eventId: "squash") { id } }"#, None, None).await;
    let data = response.data.into_json().unwrap();
    assert!(data["eventMatches"].as_array().unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn signed_out_sessions_lose_scorer_access() {
    let state = setup_test_db().await;
    let schema = schema_for(&state);
    let claims = sign_in_scorer(&state).await;

    let response = execute_graphql(&schema, "query { session { email } }", None, Some(claims.clone())).await;
    let data = response.data.into_json().unwrap();
    assert_eq!(data["session"]["email"], SCORER_EMAIL);

    assert!(end_session(&state, &claims).await.unwrap());

    let response = execute_graphql(&schema, "query { session { email } }", None, Some(claims.clone())).await;
    let data = response.data.into_json().unwrap();
    assert!(data["session"].is_null());

    let response = execute_graphql(&schema, RECORD_MATCH, Some(record_vars("kabaddi", "A", "B", "win")), Some(claims)).await;
    assert_eq!(
        first_error(&response),
        "Your scorer session has expired or was signed out"
    );
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn refreshed_cache_matches_raw_results() {
    let state = setup_test_db().await;
    let schema = schema_for(&state);
    reset_event(&state, "carrom").await;
    let claims = sign_in_scorer(&state).await;

    for (a, b, result) in [("A", "E", "win"), ("B", "E", "loss"), ("C", "D", "draw")] {
        let response = execute_graphql(&schema, RECORD_MATCH, Some(record_vars("carrom", a, b, result)), Some(claims.clone())).await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
    }

    let drift_query = r#"query { standingsCacheDrift(eventId: "carrom") { division } }"#;
    let response = execute_graphql(&schema, drift_query, None, None).await;
    let data = response.data.into_json().unwrap();
    assert_eq!(data["standingsCacheDrift"].as_array().unwrap().len(), 5);

    let response = execute_graphql(
        &schema,
        r#"mutation { refreshStandingsCache(eventId: "carrom") { division position played } }"#,
        None,
        Some(claims),
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    let cached = data["refreshStandingsCache"].as_array().unwrap();
    assert_eq!(cached.len(), 5);
    // A and E are level on points; A comes first in division order
    assert_eq!(cached[0]["division"], "A");
    assert_eq!(cached[0]["position"], 1);
    assert_eq!(cached[1]["division"], "E");
    assert_eq!(cached[1]["played"], 2);

    let response = execute_graphql(&schema, drift_query, None, None).await;
    let data = response.data.into_json().unwrap();
    assert!(data["standingsCacheDrift"].as_array().unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn recording_a_fixture_result_completes_it() {
    let state = setup_test_db().await;
    let schema = schema_for(&state);
    reset_event(&state, "throwball").await;
    let claims = sign_in_scorer(&state).await;

    let response = execute_graphql(
        &schema,
        r#"mutation Create($input: FixtureInput!) { createFixture(input: $input) { id status } }"#,
        Some(Variables::from_json(json!({
            "input": { "eventId": "throwball", "divisionA": "D", "divisionB": "E", "venue": "Court 2" }
        }))),
        Some(claims.clone()),
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["createFixture"]["status"], "SCHEDULED");
    let fixture_id = data["createFixture"]["id"].as_str().unwrap().to_string();

    let response = execute_graphql(
        &schema,
        RECORD_MATCH,
        Some(Variables::from_json(json!({
            "input": {
                "eventId": "throwball",
                "divisionA": "D",
                "divisionB": "E",
                "result": "loss",
                "fixtureId": fixture_id
            }
        }))),
        Some(claims),
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let response = execute_graphql(
        &schema,
        r#"query { fixtures(eventId: "throwball", status: COMPLETED) { id venue } }"#,
        None,
        None,
    )
    .await;
    let data = response.data.into_json().unwrap();
    let completed = data["fixtures"].as_array().unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0]["id"], fixture_id.as_str());
    assert_eq!(completed[0]["venue"], "Court 2");
}

const SET_EVENT_STATUS: &str = r#"
    mutation SetStatus($eventId: ID!, $status: EventStatus!) {
        setEventStatus(eventId: $eventId, status: $status) { id status }
    }
"#;

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn completing_an_event_awards_its_medals() {
    let state = setup_test_db().await;
    let schema = schema_for(&state);
    reset_event(&state, "quiz").await;
    let claims = sign_in_scorer(&state).await;

    let status_vars = |status: &str| Variables::from_json(json!({ "eventId": "quiz", "status": status }));
    let response = execute_graphql(&schema, SET_EVENT_STATUS, Some(status_vars("ONGOING")), Some(claims.clone())).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    for (a, b) in [("A", "B"), ("C", "D")] {
        let response = execute_graphql(&schema, RECORD_MATCH, Some(record_vars("quiz", a, b, "win")), Some(claims.clone())).await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
    }

    let medal_query = r#"query { medalTable(scope: "quiz") { rank division gold silver bronze points } }"#;
    let response = execute_graphql(&schema, medal_query, None, None).await;
    let data = response.data.into_json().unwrap();
    assert!(data["medalTable"].as_array().unwrap().is_empty());

    let response = execute_graphql(&schema, SET_EVENT_STATUS, Some(status_vars("COMPLETED")), Some(claims)).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["setEventStatus"]["status"], "COMPLETED");

    let response = execute_graphql(&schema, medal_query, None, None).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    let rows = data["medalTable"].as_array().unwrap();

    // A and C are level on points; division order puts A on top. Quiz is cultural: 5/3/2.
    let medals: Vec<(&str, i64, i64, i64, f64)> = rows
        .iter()
        .map(|r| {
            (
                r["division"].as_str().unwrap(),
                r["gold"].as_i64().unwrap(),
                r["silver"].as_i64().unwrap(),
                r["bronze"].as_i64().unwrap(),
                r["points"].as_f64().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        medals,
        vec![("A", 1, 0, 0, 5.0), ("C", 0, 1, 0, 3.0), ("B", 0, 0, 1, 2.0)]
    );
}
