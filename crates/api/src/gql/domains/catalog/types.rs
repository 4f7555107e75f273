use async_graphql::{Enum, SimpleObject, ID};

use infra::models::{DivisionRow, EventRow};

#[derive(SimpleObject, Clone)]
pub struct Division {
    pub code: ID,
    pub name: String,
    pub color: Option<String>,
    pub sort_order: i32,
}

impl From<DivisionRow> for Division {
    fn from(row: DivisionRow) -> Self {
        Self {
            code: row.code.into(),
            name: row.name,
            color: row.color,
            sort_order: row.sort_order,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum EventCategory {
    Sports,
    Cultural,
}

impl From<EventCategory> for crate::standings::EventCategory {
    fn from(category: EventCategory) -> Self {
        match category {
            EventCategory::Sports => crate::standings::EventCategory::Sports,
            EventCategory::Cultural => crate::standings::EventCategory::Cultural,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Ongoing => "ongoing",
            EventStatus::Completed => "completed",
        }
    }
}

impl From<&str> for EventStatus {
    fn from(status: &str) -> Self {
        match status {
            "ongoing" => EventStatus::Ongoing,
            "completed" => EventStatus::Completed,
            _ => EventStatus::Upcoming,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct Event {
    pub id: ID,
    pub name: String,
    pub category: EventCategory,
    pub icon: Option<String>,
    pub status: EventStatus,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        let category = match row.category.as_str() {
            "cultural" => EventCategory::Cultural,
            _ => EventCategory::Sports,
        };
        Self {
            id: row.id.into(),
            name: row.name,
            category,
            icon: row.icon,
            status: EventStatus::from(row.status.as_str()),
        }
    }
}
