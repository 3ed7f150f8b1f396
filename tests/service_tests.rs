use route_finder::adapters::outbound::{init_noop_logger, FilesystemMapSource};
use route_finder::application::RouteFindingService;
use route_finder::common::DomainError;
use route_finder::domains::logger::DomainLogger;
use route_finder::domains::route_agent::AgentStatus;
use route_finder::domains::route_map::LoaderOptions;
use route_finder::domains::search::SearchOutcome;
use std::sync::{Arc, Mutex};

const TINY: &str = "Tiny\n3\nA 0 0\nB 10 0\nC 10 10\n2\nA B 10\nB C 10\n";

struct CaptureLogger {
    messages: Arc<Mutex<Vec<String>>>,
}

impl CaptureLogger {
    fn new() -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl DomainLogger for CaptureLogger {
    fn info(&self, msg: &str) {
        self.messages.lock().unwrap().push(format!("INFO:{}", msg));
    }
    fn warn(&self, msg: &str) {
        self.messages.lock().unwrap().push(format!("WARN:{}", msg));
    }
    fn error(&self, msg: &str) {
        self.messages.lock().unwrap().push(format!("ERR:{}", msg));
    }
}

fn service() -> RouteFindingService {
    let source = Arc::new(FilesystemMapSource::new(Some("resources/maps".into())));
    RouteFindingService::new(source, init_noop_logger())
        .with_builtin_maps()
        .unwrap()
}

#[test]
fn test_builtin_maps_and_choices_are_listed() {
    let service = service();

    assert_eq!(service.map_titles(), vec!["Romania"]);
    assert_eq!(service.strategy_ids().len(), 7);
    assert!(service.strategy_ids().contains(&"a-star"));
    assert_eq!(service.heuristic_ids(), vec!["zero", "straight-line"]);
    assert_eq!(service.available_map_files().unwrap(), vec!["islands.txt", "tiny.txt"]);
}

#[test]
fn test_loaded_map_is_registered_under_its_name() {
    let mut service = service();
    let entry = service.load_map_file("tiny.txt").unwrap();
    assert_eq!(entry.title, "Tiny");

    service.load_map_text(TINY).unwrap();
    assert_eq!(service.map_titles(), vec!["Romania", "Tiny"]);
    assert!(matches!(service.map("Mars"), Err(DomainError::InvalidCommand { .. })));
}

#[test]
fn test_unknown_ids_are_rejected() {
    let service = service();
    let mut scenario = service.create_scenario("Romania", "Arad").unwrap();

    let strategy = service.plan(&mut scenario, "Bucharest", "teleport", "zero");
    let heuristic = service.plan(&mut scenario, "Bucharest", "a-star", "psychic");

    assert!(matches!(
        strategy,
        Err(DomainError::UnknownStrategy { ref name }) if name == "teleport"
    ));
    assert!(matches!(
        heuristic,
        Err(DomainError::UnknownHeuristic { ref name }) if name == "psychic"
    ));
}

#[test]
fn test_unknown_start_is_rejected() {
    let service = service();
    assert!(matches!(
        service.create_scenario("Romania", "Paris"),
        Err(DomainError::UnknownLocation { .. })
    ));
}

#[test]
fn test_run_reaches_goal_and_logs_progress() {
    let capture = Arc::new(CaptureLogger::new());
    let source = Arc::new(FilesystemMapSource::new(Some("resources/maps".into())));
    let service = RouteFindingService::new(source, capture.clone())
        .with_builtin_maps()
        .unwrap();

    let mut scenario = service.create_scenario("Romania", "Arad").unwrap();
    let (mut agent, report) = service
        .plan(&mut scenario, "Bucharest", "astar", "sld")
        .unwrap();
    assert_eq!(report.path_cost(), Some(418.0));

    let snapshots = service.run(&mut scenario, &mut agent, 100);

    assert_eq!(snapshots.len(), 4);
    let last = snapshots.last().unwrap();
    assert_eq!(last.status, AgentStatus::Succeeded);
    assert_eq!(last.location, "Bucharest");
    assert_eq!(last.path_cost, 418.0);

    let msgs = capture.messages.lock().unwrap();
    assert!(msgs.iter().any(|m| m.starts_with("INFO:") && m.contains("pathCost=418")));
    assert!(msgs.iter().any(|m| m.contains("Succeeded at Bucharest")));
}

#[test]
fn test_run_stops_at_step_limit() {
    let service = service();
    let mut scenario = service.create_scenario("Romania", "Arad").unwrap();
    let (mut agent, _) = service
        .plan(&mut scenario, "Bucharest", "uniform-cost", "zero")
        .unwrap();

    let snapshots = service.run(&mut scenario, &mut agent, 2);

    assert_eq!(snapshots.len(), 2);
    assert_eq!(snapshots[1].status, AgentStatus::Executing);
    assert_eq!(snapshots[1].location, "RimnicuVilcea");
}

#[test]
fn test_unreachable_goal_is_reported_and_exhausts() {
    let capture = Arc::new(CaptureLogger::new());
    let source = Arc::new(FilesystemMapSource::new(Some("resources/maps".into())));
    let mut service = RouteFindingService::new(source, capture.clone());
    service.load_map_file("islands.txt").unwrap();

    let mut scenario = service.create_scenario("Two Islands", "North").unwrap();
    let (mut agent, report) = service
        .plan(&mut scenario, "Reef", "breadth-first", "zero")
        .unwrap();
    assert_eq!(report.outcome, SearchOutcome::GoalUnreachable);

    let snapshots = service.run(&mut scenario, &mut agent, 10);
    assert_eq!(snapshots.len(), 1);
    assert_eq!(snapshots[0].status, AgentStatus::PlanExhausted);

    let msgs = capture.messages.lock().unwrap();
    assert!(msgs.iter().any(|m| m.starts_with("WARN:") && m.contains("no route")));
}

#[test]
fn test_inconsistent_map_warns_before_informed_search() {
    let capture = Arc::new(CaptureLogger::new());
    let source = Arc::new(FilesystemMapSource::new(Some("resources/maps".into())));
    let mut service = RouteFindingService::new(source, capture.clone());
    service
        .load_map_text("Short\n2\nA 0 0\nB 100 0\n1\nA B 1\n")
        .unwrap();

    let mut scenario = service.create_scenario("Short", "A").unwrap();
    service.plan(&mut scenario, "B", "a-star", "straight-line").unwrap();

    let msgs = capture.messages.lock().unwrap();
    assert!(msgs
        .iter()
        .any(|m| m.starts_with("WARN:") && m.contains("shorter than the straight line")));
}

#[test]
fn test_strict_options_reach_the_loader() {
    let source = Arc::new(FilesystemMapSource::new(Some("resources/maps".into())));
    let mut service = RouteFindingService::new(source, init_noop_logger())
        .with_options(LoaderOptions { strict_routes: true });

    let result = service.load_map_text("Loose\n1\nA 0 0\n1\nA Ghost 4\n");
    assert!(matches!(result, Err(DomainError::MalformedMapFile { line: 5, .. })));
}
