mod common;

use async_graphql::Variables;
use common::*;
use serde_json::json;

#[tokio::test]
async fn anonymous_viewers_cannot_record_results() {
    let state = offline_state();
    let schema = schema_for(&state);

    let query = r#"
        mutation Record($input: RecordMatchInput!) {
            recordMatch(input: $input) { id }
        }
    "#;
    let variables = Variables::from_json(json!({
        "input": {
            "eventId": "football",
            "divisionA": "A",
            "divisionB": "B",
            "result": "win"
        }
    }));

    let response = execute_graphql(&schema, query, Some(variables), None).await;

    assert_eq!(
        first_error(&response),
        "You must be logged in as a scorer to perform this action"
    );
}

#[tokio::test]
async fn anonymous_viewers_cannot_submit_ties() {
    let state = offline_state();
    let schema = schema_for(&state);

    let query = r#"
        mutation Submit($input: SubmitTieResultInput!) {
            submitTieResult(input: $input) { winner }
        }
    "#;
    let variables = Variables::from_json(json!({
        "input": {
            "eventId": "badminton",
            "divisionA": "A",
            "divisionB": "B",
            "phase": "group",
            "games": []
        }
    }));

    let response = execute_graphql(&schema, query, Some(variables), None).await;

    assert_eq!(
        first_error(&response),
        "You must be logged in as a scorer to perform this action"
    );
}

#[tokio::test]
async fn anonymous_viewers_cannot_manage_fixtures_events_or_the_cache() {
    let state = offline_state();
    let schema = schema_for(&state);

    for query in [
        r#"mutation { deleteFixture(id: "00000000-0000-0000-0000-000000000000") }"#,
        r#"mutation { deleteMatch(id: "00000000-0000-0000-0000-000000000000") }"#,
        r#"mutation { refreshStandingsCache(eventId: "football") { division } }"#,
        r#"query { tieConsistencyReport { tieId } }"#,
        r#"mutation { setEventStatus(eventId: "quiz", status: COMPLETED) { id } }"#,
    ] {
        let response = execute_graphql(&schema, query, None, None).await;
        assert_eq!(
            first_error(&response),
            "You must be logged in as a scorer to perform this action",
            "{query}"
        );
    }
}

#[tokio::test]
async fn blank_scope_is_rejected_before_loading_anything() {
    let state = offline_state();
    let schema = schema_for(&state);

    let response = execute_graphql(&schema, r#"query { standings(scope: "  ") { division } }"#, None, None).await;

    assert_eq!(first_error(&response), "scope is required");
}

#[tokio::test]
async fn chess_table_layout_shows_draws() {
    let state = offline_state();
    let schema = schema_for(&state);

    let query = r#"
        query {
            tableLayout(eventId: "chess") {
                layout
                columns { key label kind }
            }
        }
    "#;

    let response = execute_graphql(&schema, query, None, None).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().expect("json data");
    let layout = &data["tableLayout"];
    assert_eq!(layout["layout"], "chess");

    let keys: Vec<&str> = layout["columns"]
        .as_array()
        .expect("columns")
        .iter()
        .filter_map(|c| c["key"].as_str())
        .collect();
    assert_eq!(
        keys,
        vec!["division", "played", "won", "drawn", "lost", "match_points", "game_points"]
    );
    assert_eq!(layout["columns"][0]["kind"], "TEXT");
    assert_eq!(layout["columns"][5]["label"], "Points");
}

#[tokio::test]
async fn racquet_and_unknown_events_share_the_league_columns() {
    let state = offline_state();
    let schema = schema_for(&state);

    let response = execute_graphql(
        &schema,
        r#"query {
            badminton: tableLayout(eventId: "badminton") { layout columns { key } }
            quiz: tableLayout(eventId: "quiz") { layout columns { key } }
        }"#,
        None,
        None,
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().expect("json data");
    assert_eq!(data["badminton"]["layout"], "tie");
    assert_eq!(data["quiz"]["layout"], "default");
    assert_eq!(data["badminton"]["columns"], data["quiz"]["columns"]);
}
