use super::events::{EnvironmentEvent, HaltReason};
use crate::common::{AggregateRoot, DomainError, DomainResult};
use crate::domains::route_map::{Neighbor, WeightedGraph};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnvironmentStatus {
    Running,
    Done,
}

/// What the agent perceives at its current location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Percept {
    pub location: String,
    pub moves: Vec<Neighbor>,
}

/// Simulated world over a read-only map: where the agent is, what it has
/// paid so far, and which locations count as goals. Every change goes
/// through an `EnvironmentEvent`.
#[derive(Debug, Clone)]
pub struct Environment {
    id: String,
    graph: Arc<WeightedGraph>,
    agent_location: String,
    path_cost: f64,
    goals: Vec<String>,
    status: EnvironmentStatus,
    trail: Vec<String>,
    version: u64,
    uncommitted_events: Vec<EnvironmentEvent>,
}

impl Environment {
    fn blank(id: String, graph: Arc<WeightedGraph>) -> Self {
        Self {
            id,
            graph,
            agent_location: String::new(),
            path_cost: 0.0,
            goals: Vec::new(),
            status: EnvironmentStatus::Running,
            trail: Vec::new(),
            version: 0,
            uncommitted_events: Vec::new(),
        }
    }

    /// Place the agent at `start`.
    pub fn new(graph: Arc<WeightedGraph>, start: &str) -> DomainResult<Self> {
        if !graph.contains(start) {
            return Err(DomainError::UnknownLocation { name: start.to_string() });
        }
        let id = Uuid::new_v4().to_string();
        let mut env = Self::blank(id.clone(), graph);
        env.record(EnvironmentEvent::AgentPlaced {
            scenario_id: id,
            location: start.to_string(),
            timestamp: Utc::now(),
        })?;
        Ok(env)
    }

    /// Rebuild an environment from its event history.
    pub fn from_history(
        graph: Arc<WeightedGraph>,
        events: &[EnvironmentEvent],
    ) -> DomainResult<Self> {
        let id = match events.first() {
            Some(EnvironmentEvent::AgentPlaced { scenario_id, .. }) => scenario_id.clone(),
            _ => {
                return Err(DomainError::InvalidCommand {
                    reason: "history must start with AgentPlaced".to_string(),
                })
            }
        };
        Self::blank(id, graph).replay(events)
    }

    /// Replace the goal list. Reaching any one of them ends the run.
    pub fn assign_goals(&mut self, goals: Vec<String>) -> DomainResult<()> {
        self.ensure_running()?;
        if goals.is_empty() {
            return Err(DomainError::InvalidCommand {
                reason: "at least one goal is required".to_string(),
            });
        }
        if let Some(unknown) = goals.iter().find(|g| !self.graph.contains(g)) {
            return Err(DomainError::UnknownLocation { name: unknown.clone() });
        }
        let already_there = goals.contains(&self.agent_location);
        self.record(EnvironmentEvent::GoalsAssigned {
            scenario_id: self.id.clone(),
            goals,
            timestamp: Utc::now(),
        })?;
        if already_there {
            self.record_goal_reached()?;
        }
        Ok(())
    }

    pub fn percept(&self) -> Percept {
        Percept {
            location: self.agent_location.clone(),
            moves: self.graph.neighbors(&self.agent_location),
        }
    }

    /// Move the agent one edge to `to`, returning the edge distance. A move
    /// that is not an edge from the current location is rejected and ends
    /// the run with `StuckOnStaleEdge`.
    pub fn execute(&mut self, to: &str) -> DomainResult<f64> {
        self.ensure_running()?;
        let from = self.agent_location.clone();
        let Some(distance) = self.graph.distance(&from, to) else {
            self.record(EnvironmentEvent::MoveRejected {
                scenario_id: self.id.clone(),
                from: from.clone(),
                to: to.to_string(),
                timestamp: Utc::now(),
            })?;
            return Err(DomainError::StuckOnStaleEdge { from, to: to.to_string() });
        };

        self.record(EnvironmentEvent::AgentMoved {
            scenario_id: self.id.clone(),
            from,
            to: to.to_string(),
            distance,
            timestamp: Utc::now(),
        })?;
        tracing::debug!(location = to, path_cost = self.path_cost, "agent moved");
        if self.goals.iter().any(|g| g == to) {
            self.record_goal_reached()?;
        }
        Ok(distance)
    }

    /// Stop the run without reaching a goal. No-op once done.
    pub fn halt(&mut self, reason: HaltReason) -> DomainResult<()> {
        if self.is_done() {
            return Ok(());
        }
        self.record(EnvironmentEvent::AgentHalted {
            scenario_id: self.id.clone(),
            location: self.agent_location.clone(),
            reason,
            timestamp: Utc::now(),
        })
    }

    fn record_goal_reached(&mut self) -> DomainResult<()> {
        self.record(EnvironmentEvent::GoalReached {
            scenario_id: self.id.clone(),
            location: self.agent_location.clone(),
            path_cost: self.path_cost,
            timestamp: Utc::now(),
        })
    }

    fn ensure_running(&self) -> DomainResult<()> {
        if self.is_done() {
            return Err(DomainError::InvalidCommand {
                reason: format!("scenario {} has already finished", self.id),
            });
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn graph(&self) -> &WeightedGraph {
        &self.graph
    }

    pub fn agent_location(&self) -> &str {
        &self.agent_location
    }

    pub fn path_cost(&self) -> f64 {
        self.path_cost
    }

    pub fn goals(&self) -> &[String] {
        &self.goals
    }

    pub fn status(&self) -> EnvironmentStatus {
        self.status
    }

    pub fn is_done(&self) -> bool {
        self.status == EnvironmentStatus::Done
    }

    pub fn is_goal_reached(&self) -> bool {
        self.goals.iter().any(|g| *g == self.agent_location)
    }

    /// Locations visited so far, starting with the initial one.
    pub fn trail(&self) -> &[String] {
        &self.trail
    }
}

impl AggregateRoot for Environment {
    type Event = EnvironmentEvent;

    fn aggregate_id(&self) -> &str {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) -> DomainResult<()> {
        match event {
            EnvironmentEvent::AgentPlaced { location, .. } => {
                self.agent_location = location.clone();
                self.trail = vec![location.clone()];
                self.path_cost = 0.0;
                self.status = EnvironmentStatus::Running;
            }
            EnvironmentEvent::GoalsAssigned { goals, .. } => {
                self.goals = goals.clone();
            }
            EnvironmentEvent::AgentMoved { to, distance, .. } => {
                self.agent_location = to.clone();
                self.path_cost += distance;
                self.trail.push(to.clone());
            }
            EnvironmentEvent::GoalReached { .. }
            | EnvironmentEvent::MoveRejected { .. }
            | EnvironmentEvent::AgentHalted { .. } => {
                self.status = EnvironmentStatus::Done;
            }
        }
        self.version += 1;
        Ok(())
    }

    fn uncommitted_events(&self) -> &[Self::Event] {
        &self.uncommitted_events
    }

    fn mark_events_as_committed(&mut self) {
        self.uncommitted_events.clear();
    }

    fn add_event(&mut self, event: Self::Event) {
        self.uncommitted_events.push(event);
    }
}
