//! Event and bout records as the persistence collaborators see them.
//!
//! A bout starts `Scheduled` with empty result fields; simulation fills them
//! and flips the status to `Simulated`. The event flips to `Completed` in the
//! same atomic batch as its bout mutations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::sim::fight::SimulationDetail;
use crate::sim::outcome::{FinishTime, ResultType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Scheduled,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoutStatus {
    Scheduled,
    Simulated,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    pub status: EventStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}

impl Event {
    pub fn scheduled(id: Uuid, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            status: EventStatus::Scheduled,
            created_at: now,
            updated_at: now,
            updated_by: "system".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bout {
    pub id: Uuid,
    pub event_id: Uuid,
    pub fighter1_id: Uuid,
    pub fighter2_id: Uuid,
    /// Card position, ascending simulation order. 1 = card opener.
    pub fight_order: u32,
    pub rounds: u32,
    pub status: BoutStatus,

    // Result fields, populated when the bout is simulated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_type: Option<ResultType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_round: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_time: Option<FinishTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fighter1_probability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fighter2_probability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<SimulationDetail>,

    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}

impl Bout {
    pub fn scheduled(
        event_id: Uuid,
        fighter1_id: Uuid,
        fighter2_id: Uuid,
        fight_order: u32,
        rounds: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_id,
            fighter1_id,
            fighter2_id,
            fight_order,
            rounds,
            status: BoutStatus::Scheduled,
            winner_id: None,
            result_type: None,
            finish_round: None,
            finish_time: None,
            fighter1_probability: None,
            fighter2_probability: None,
            detail: None,
            updated_at: Utc::now(),
            updated_by: "system".to_string(),
        }
    }
}
