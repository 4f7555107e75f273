use async_graphql::{Enum, InputObject, SimpleObject, ID};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use infra::models::FixtureRow;
use infra::repos::CreateFixture;

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum FixtureStatus {
    Scheduled,
    Completed,
}

impl FixtureStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FixtureStatus::Scheduled => "scheduled",
            FixtureStatus::Completed => "completed",
        }
    }
}

impl From<&str> for FixtureStatus {
    fn from(s: &str) -> Self {
        match s {
            "completed" => FixtureStatus::Completed,
            _ => FixtureStatus::Scheduled,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct Fixture {
    pub id: ID,
    pub event_id: ID,
    pub division_a: String,
    pub division_b: String,
    pub scheduled_date: Option<NaiveDate>,
    pub scheduled_time: Option<NaiveTime>,
    pub venue: Option<String>,
    pub phase: Option<String>,
    pub status: FixtureStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<FixtureRow> for Fixture {
    fn from(row: FixtureRow) -> Self {
        Self {
            id: row.id.into(),
            event_id: row.event_id.into(),
            division_a: row.division_a,
            division_b: row.division_b,
            scheduled_date: row.scheduled_date,
            scheduled_time: row.scheduled_time,
            venue: row.venue,
            phase: row.phase,
            status: FixtureStatus::from(row.status.as_str()),
            notes: row.notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(InputObject)]
pub struct FixtureInput {
    pub event_id: ID,
    pub division_a: String,
    pub division_b: String,
    pub scheduled_date: Option<NaiveDate>,
    pub scheduled_time: Option<NaiveTime>,
    pub venue: Option<String>,
    pub phase: Option<String>,
    pub notes: Option<String>,
}

impl From<FixtureInput> for CreateFixture {
    fn from(input: FixtureInput) -> Self {
        Self {
            event_id: input.event_id.to_string(),
            division_a: input.division_a,
            division_b: input.division_b,
            scheduled_date: input.scheduled_date,
            scheduled_time: input.scheduled_time,
            venue: input.venue,
            phase: input.phase,
            notes: input.notes,
        }
    }
}
