use crate::common::DomainEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HaltReason {
    PlanExhausted,
    Stuck,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EnvironmentEvent {
    AgentPlaced {
        scenario_id: String,
        location: String,
        timestamp: DateTime<Utc>,
    },
    GoalsAssigned {
        scenario_id: String,
        goals: Vec<String>,
        timestamp: DateTime<Utc>,
    },
    AgentMoved {
        scenario_id: String,
        from: String,
        to: String,
        distance: f64,
        timestamp: DateTime<Utc>,
    },
    GoalReached {
        scenario_id: String,
        location: String,
        path_cost: f64,
        timestamp: DateTime<Utc>,
    },
    MoveRejected {
        scenario_id: String,
        from: String,
        to: String,
        timestamp: DateTime<Utc>,
    },
    AgentHalted {
        scenario_id: String,
        location: String,
        reason: HaltReason,
        timestamp: DateTime<Utc>,
    },
}

impl DomainEvent for EnvironmentEvent {
    fn event_type(&self) -> &'static str {
        match self {
            EnvironmentEvent::AgentPlaced { .. } => "AgentPlaced",
            EnvironmentEvent::GoalsAssigned { .. } => "GoalsAssigned",
            EnvironmentEvent::AgentMoved { .. } => "AgentMoved",
            EnvironmentEvent::GoalReached { .. } => "GoalReached",
            EnvironmentEvent::MoveRejected { .. } => "MoveRejected",
            EnvironmentEvent::AgentHalted { .. } => "AgentHalted",
        }
    }

    fn aggregate_id(&self) -> &str {
        match self {
            EnvironmentEvent::AgentPlaced { scenario_id, .. } => scenario_id,
            EnvironmentEvent::GoalsAssigned { scenario_id, .. } => scenario_id,
            EnvironmentEvent::AgentMoved { scenario_id, .. } => scenario_id,
            EnvironmentEvent::GoalReached { scenario_id, .. } => scenario_id,
            EnvironmentEvent::MoveRejected { scenario_id, .. } => scenario_id,
            EnvironmentEvent::AgentHalted { scenario_id, .. } => scenario_id,
        }
    }

    fn event_version(&self) -> u64 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            EnvironmentEvent::AgentPlaced { timestamp, .. } => *timestamp,
            EnvironmentEvent::GoalsAssigned { timestamp, .. } => *timestamp,
            EnvironmentEvent::AgentMoved { timestamp, .. } => *timestamp,
            EnvironmentEvent::GoalReached { timestamp, .. } => *timestamp,
            EnvironmentEvent::MoveRejected { timestamp, .. } => *timestamp,
            EnvironmentEvent::AgentHalted { timestamp, .. } => *timestamp,
        }
    }
}
