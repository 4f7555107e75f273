use sqlx::PgPool;
use uuid::Uuid;

use infra::models::FixtureRow;
use infra::repos::{divisions, events, fixtures, CreateFixture};

use super::error::SubmitError;
use super::records;
use crate::standings::{DivisionSet, ValidationError};

pub fn validate_fixture(data: &CreateFixture, divisions: &DivisionSet) -> Result<(), ValidationError> {
    if data.event_id.trim().is_empty() {
        return Err(ValidationError::MissingField("eventId"));
    }
    divisions.require(&data.division_a)?;
    divisions.require(&data.division_b)?;
    if data.division_a == data.division_b {
        return Err(ValidationError::SameDivision(data.division_a.clone()));
    }
    Ok(())
}

async fn check(pool: &PgPool, data: &CreateFixture) -> Result<(), SubmitError> {
    let divisions = records::division_set(&divisions::list(pool).await?);
    validate_fixture(data, &divisions)?;

    if events::get_by_id(pool, &data.event_id).await?.is_none() {
        return Err(ValidationError::UnknownEvent(data.event_id.clone()).into());
    }
    Ok(())
}

pub async fn create_fixture(pool: &PgPool, data: CreateFixture) -> Result<FixtureRow, SubmitError> {
    check(pool, &data).await?;
    let fixture = fixtures::create(pool, data).await?;
    tracing::info!(
        "Scheduled {} {} vs {} ({})",
        fixture.event_id,
        fixture.division_a,
        fixture.division_b,
        fixture.id
    );
    Ok(fixture)
}

pub async fn update_fixture(
    pool: &PgPool,
    id: Uuid,
    data: CreateFixture,
) -> Result<Option<FixtureRow>, SubmitError> {
    check(pool, &data).await?;
    Ok(fixtures::update(pool, id, data).await?)
}

pub async fn delete_fixture(pool: &PgPool, id: Uuid) -> Result<bool, SubmitError> {
    Ok(fixtures::delete(pool, id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(a: &str, b: &str) -> CreateFixture {
        CreateFixture {
            event_id: "football".to_string(),
            division_a: a.to_string(),
            division_b: b.to_string(),
            scheduled_date: None,
            scheduled_time: None,
            venue: None,
            phase: None,
            notes: None,
        }
    }

    #[test]
    fn fixtures_need_two_known_distinct_divisions() {
        let divisions = DivisionSet::from_codes(["A", "B"]);

        assert!(validate_fixture(&fixture("A", "B"), &divisions).is_ok());
        assert_eq!(
            validate_fixture(&fixture("B", "B"), &divisions),
            Err(ValidationError::SameDivision("B".to_string()))
        );
        assert_eq!(
            validate_fixture(&fixture("A", "X"), &divisions),
            Err(ValidationError::UnknownDivision("X".to_string()))
        );
    }
}
