use super::environment::Environment;
use super::events::HaltReason;
use crate::common::DomainError;
use crate::domains::search::Plan;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AgentStatus {
    /// No plan adopted yet.
    Planning,
    Executing,
    Succeeded,
    /// The next planned move was not an edge from the current location.
    Stuck { from: String, to: String },
    PlanExhausted,
}

impl AgentStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            AgentStatus::Succeeded | AgentStatus::Stuck { .. } | AgentStatus::PlanExhausted
        )
    }
}

/// Read-only view handed to drivers after every step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub status: AgentStatus,
    pub location: String,
    pub path_cost: f64,
    pub steps_taken: usize,
    pub remaining_moves: usize,
}

/// Executes a precomputed plan, one move per `step`.
#[derive(Debug, Clone)]
pub struct RouteAgent {
    goal: String,
    plan: VecDeque<String>,
    status: AgentStatus,
    steps_taken: usize,
}

impl RouteAgent {
    pub fn new(goal: &str) -> Self {
        Self {
            goal: goal.to_string(),
            plan: VecDeque::new(),
            status: AgentStatus::Planning,
            steps_taken: 0,
        }
    }

    pub fn with_plan(goal: &str, plan: Plan, env: &Environment) -> Self {
        let mut agent = Self::new(goal);
        agent.adopt_plan(plan, env);
        agent
    }

    /// Take over `plan`. An agent already standing on its goal succeeds
    /// immediately; otherwise it starts executing, even with an empty plan.
    pub fn adopt_plan(&mut self, plan: Plan, env: &Environment) {
        self.plan = plan.into_moves().into();
        self.status = if env.agent_location() == self.goal || env.is_goal_reached() {
            AgentStatus::Succeeded
        } else {
            AgentStatus::Executing
        };
    }

    /// One perceive/decide/act tick. Terminal states (and `Planning`) are
    /// returned unchanged without touching the environment.
    pub fn step(&mut self, env: &mut Environment) -> AgentSnapshot {
        if self.status != AgentStatus::Executing {
            return self.snapshot(env);
        }
        // the run may already have ended on another goal or been halted
        if env.is_done() {
            self.status = if env.is_goal_reached() {
                AgentStatus::Succeeded
            } else {
                AgentStatus::PlanExhausted
            };
            return self.snapshot(env);
        }

        let Some(next) = self.plan.pop_front() else {
            self.status = AgentStatus::PlanExhausted;
            if let Err(error) = env.halt(HaltReason::PlanExhausted) {
                tracing::error!(%error, "failed to halt environment");
            }
            return self.snapshot(env);
        };

        self.steps_taken += 1;
        let from = env.percept().location;
        self.status = match env.execute(&next) {
            Ok(_) if env.is_goal_reached() || env.agent_location() == self.goal => {
                AgentStatus::Succeeded
            }
            Ok(_) => AgentStatus::Executing,
            Err(DomainError::StuckOnStaleEdge { from, to }) => AgentStatus::Stuck { from, to },
            Err(error) => {
                tracing::error!(%error, "move failed");
                if let Err(error) = env.halt(HaltReason::Stuck) {
                    tracing::error!(%error, "failed to halt environment");
                }
                AgentStatus::Stuck { from, to: next }
            }
        };
        self.snapshot(env)
    }

    pub fn snapshot(&self, env: &Environment) -> AgentSnapshot {
        AgentSnapshot {
            status: self.status.clone(),
            location: env.agent_location().to_string(),
            path_cost: env.path_cost(),
            steps_taken: self.steps_taken,
            remaining_moves: self.plan.len(),
        }
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }

    pub fn status(&self) -> &AgentStatus {
        &self.status
    }

    pub fn remaining_moves(&self) -> impl Iterator<Item = &str> + '_ {
        self.plan.iter().map(String::as_str)
    }
}
