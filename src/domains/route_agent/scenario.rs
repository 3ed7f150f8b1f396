use super::agent::{AgentSnapshot, RouteAgent};
use super::environment::Environment;
use crate::common::DomainResult;
use crate::domains::route_map::WeightedGraph;
use crate::domains::search::{Heuristic, SearchReport, SearchStrategy};
use std::sync::Arc;

/// One run: a shared read-only map, the agent's start, and the environment
/// this scenario owns exclusively.
#[derive(Debug, Clone)]
pub struct Scenario {
    graph: Arc<WeightedGraph>,
    initial_location: String,
    environment: Environment,
}

impl Scenario {
    pub fn new(graph: Arc<WeightedGraph>, start: &str) -> DomainResult<Self> {
        let environment = Environment::new(graph.clone(), start)?;
        Ok(Self {
            graph,
            initial_location: start.to_string(),
            environment,
        })
    }

    pub fn graph(&self) -> &WeightedGraph {
        &self.graph
    }

    pub fn initial_location(&self) -> &str {
        &self.initial_location
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Search from the agent's current location to `goal` and return an
    /// agent holding the resulting plan. An unreachable goal still yields an
    /// agent (with an empty plan); inspect the report to tell the cases apart.
    pub fn plan(
        &mut self,
        goal: &str,
        strategy: SearchStrategy,
        heuristic: Heuristic,
    ) -> DomainResult<(RouteAgent, SearchReport)> {
        let start = self.environment.agent_location();
        let report = strategy.find_path(&self.graph, start, goal, heuristic)?;
        self.environment.assign_goals(vec![goal.to_string()])?;
        let agent = RouteAgent::with_plan(goal, report.plan(), &self.environment);
        Ok((agent, report))
    }

    /// Advance `agent` by one move against this scenario's environment.
    pub fn step(&mut self, agent: &mut RouteAgent) -> AgentSnapshot {
        agent.step(&mut self.environment)
    }
}
