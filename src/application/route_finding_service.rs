use crate::common::{DomainError, DomainResult};
use crate::domains::logger::DynLogger;
use crate::domains::route_agent::{AgentSnapshot, AgentStatus, RouteAgent, Scenario};
use crate::domains::route_map::{
    builtin_maps, parse_map_with, LoadedMap, LoaderOptions, MapDataSource, WeightedGraph,
};
use crate::domains::search::{straight_line_violations, Heuristic, SearchReport, SearchStrategy};
use std::sync::Arc;

/// A map the service can build scenarios on.
#[derive(Debug, Clone)]
pub struct MapEntry {
    pub title: String,
    pub graph: Arc<WeightedGraph>,
}

/// Synchronous facade for drivers (CLI, UI, tests): keeps the list of known
/// maps, builds scenarios, plans and steps agents, and reports through the
/// injected logger.
pub struct RouteFindingService {
    data_source: Arc<dyn MapDataSource>,
    logger: DynLogger,
    options: LoaderOptions,
    maps: Vec<MapEntry>,
}

impl RouteFindingService {
    pub fn new(data_source: Arc<dyn MapDataSource>, logger: DynLogger) -> Self {
        Self {
            data_source,
            logger,
            options: LoaderOptions::default(),
            maps: Vec::new(),
        }
    }

    pub fn with_options(mut self, options: LoaderOptions) -> Self {
        self.options = options;
        self
    }

    /// Register the bundled maps ahead of anything loaded later.
    pub fn with_builtin_maps(mut self) -> DomainResult<Self> {
        for map in builtin_maps()? {
            self.register(map);
        }
        Ok(self)
    }

    pub fn map_titles(&self) -> Vec<&str> {
        self.maps.iter().map(|m| m.title.as_str()).collect()
    }

    pub fn map(&self, title: &str) -> DomainResult<Arc<WeightedGraph>> {
        self.maps
            .iter()
            .find(|m| m.title == title)
            .map(|m| m.graph.clone())
            .ok_or_else(|| DomainError::InvalidCommand {
                reason: format!("no map titled '{}'", title),
            })
    }

    /// Map files the data source offers.
    pub fn available_map_files(&self) -> DomainResult<Vec<String>> {
        self.data_source.list_maps()
    }

    pub fn strategy_ids(&self) -> Vec<&'static str> {
        SearchStrategy::ALL.iter().map(|s| s.id()).collect()
    }

    pub fn heuristic_ids(&self) -> Vec<&'static str> {
        Heuristic::ALL.iter().map(|h| h.id()).collect()
    }

    /// Load a map through the data source and register it under its own name.
    pub fn load_map_file(&mut self, name: &str) -> DomainResult<&MapEntry> {
        let text = self.data_source.load_map_text(name)?;
        self.load_map_text(&text)
    }

    pub fn load_map_text(&mut self, text: &str) -> DomainResult<&MapEntry> {
        let map = parse_map_with(text, self.options)?;
        self.logger.info(&format!(
            "Loaded map {} ({} locations, {} routes)",
            map.name,
            map.graph.len(),
            map.graph.edge_count()
        ));
        Ok(self.register(map))
    }

    /// Reloading a title replaces the previous graph in place.
    fn register(&mut self, map: LoadedMap) -> &MapEntry {
        let entry = MapEntry {
            title: map.name,
            graph: Arc::new(map.graph),
        };
        let pos = match self.maps.iter().position(|m| m.title == entry.title) {
            Some(pos) => {
                self.maps[pos] = entry;
                pos
            }
            None => {
                self.maps.push(entry);
                self.maps.len() - 1
            }
        };
        &self.maps[pos]
    }

    pub fn create_scenario(&self, title: &str, start: &str) -> DomainResult<Scenario> {
        Scenario::new(self.map(title)?, start)
    }

    /// Plan a route for the scenario's agent using strategy and heuristic ids.
    pub fn plan(
        &self,
        scenario: &mut Scenario,
        goal: &str,
        strategy_id: &str,
        heuristic_id: &str,
    ) -> DomainResult<(RouteAgent, SearchReport)> {
        let strategy: SearchStrategy = strategy_id.parse()?;
        let heuristic: Heuristic = heuristic_id.parse()?;

        if heuristic == Heuristic::StraightLine && strategy.is_informed() {
            let violations = straight_line_violations(scenario.graph());
            if let Some(first) = violations.first() {
                self.logger.warn(&format!(
                    "{} edge(s) shorter than the straight line (e.g. {} - {}: {} < {:.2}); \
                     {} may not find the cheapest route",
                    violations.len(),
                    first.from,
                    first.to,
                    first.distance,
                    first.straight_line,
                    strategy.label()
                ));
            }
        }

        let (agent, report) = scenario.plan(goal, strategy, heuristic)?;
        match report.path_cost() {
            Some(cost) => self.logger.info(&format!(
                "{} found a route from {} to {} with {} move(s), \
                 pathCost={}, nodesExpanded={}, maxFrontierSize={}",
                strategy.label(),
                scenario.environment().agent_location(),
                goal,
                report.plan().len(),
                cost,
                report.metrics.nodes_expanded,
                report.metrics.max_frontier_size
            )),
            None => self.logger.warn(&format!(
                "{} found no route from {} to {} (nodesExpanded={})",
                strategy.label(),
                scenario.environment().agent_location(),
                goal,
                report.metrics.nodes_expanded
            )),
        }
        Ok((agent, report))
    }

    pub fn step(&self, scenario: &mut Scenario, agent: &mut RouteAgent) -> AgentSnapshot {
        let snapshot = scenario.step(agent);
        match &snapshot.status {
            AgentStatus::Stuck { from, to } => self.logger.error(&format!(
                "Agent stuck at {}: no road to {}",
                from, to
            )),
            AgentStatus::PlanExhausted => self.logger.warn(&format!(
                "Agent ran out of moves at {} without reaching {}",
                snapshot.location,
                agent.goal()
            )),
            status => self.logger.info(&format!(
                "{:?} at {} (pathCost={})",
                status, snapshot.location, snapshot.path_cost
            )),
        }
        snapshot
    }

    /// Step until a terminal state or `max_steps`, returning every snapshot.
    pub fn run(
        &self,
        scenario: &mut Scenario,
        agent: &mut RouteAgent,
        max_steps: usize,
    ) -> Vec<AgentSnapshot> {
        let mut snapshots = Vec::new();
        if agent.status().is_terminal() {
            snapshots.push(agent.snapshot(scenario.environment()));
            return snapshots;
        }
        for _ in 0..max_steps {
            let snapshot = self.step(scenario, agent);
            let done = snapshot.status.is_terminal();
            snapshots.push(snapshot);
            if done {
                break;
            }
        }
        snapshots
    }
}
