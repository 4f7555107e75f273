use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct DivisionRow {
    pub code: String,
    pub name: String,
    pub color: Option<String>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct EventRow {
    pub id: String,
    pub name: String,
    pub category: String, // 'sports' | 'cultural'
    pub icon: Option<String>,
    pub status: String, // 'upcoming' | 'ongoing' | 'completed'
    pub created_at: DateTime<Utc>,
}

impl EventRow {
    pub fn is_completed(&self) -> bool {
        self.status == "completed"
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct FixtureRow {
    pub id: Uuid,
    pub event_id: String,
    pub division_a: String,
    pub division_b: String,
    pub scheduled_date: Option<NaiveDate>,
    pub scheduled_time: Option<NaiveTime>,
    pub venue: Option<String>,
    pub phase: Option<String>,
    pub status: String, // 'scheduled' | 'completed'
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct MatchRow {
    pub id: Uuid,
    pub event_id: String,
    pub fixture_id: Option<Uuid>,
    pub division_a: String,
    pub division_b: String,
    pub winner: Option<String>,
    pub result: Option<String>, // from division_a's side: 'win' | 'draw' | 'loss'
    pub match_points_a: f64,
    pub match_points_b: f64,
    pub game_points_a: f64,
    pub game_points_b: f64,
    pub phase: Option<String>,
    pub match_date: Option<NaiveDate>,
    pub match_time: Option<NaiveTime>,
    pub match_data: Option<serde_json::Value>, // JSONB field
    pub recorded_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TieGameRow {
    pub id: Uuid,
    pub match_id: Uuid,
    pub tie_id: String,
    pub match_number: i32,
    pub match_type: String,
    pub team_a_players: String,
    pub team_b_players: String,
    pub winner: String, // 'team_a' | 'team_b'
    pub score: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct StandingRow {
    pub id: Uuid,
    pub event_id: String,
    pub division: String,
    pub played: i32,
    pub won: i32,
    pub lost: i32,
    pub drawn: i32,
    pub match_points: f64,
    pub game_points: f64,
    pub position: Option<i32>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ScorerSessionRow {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}
