//! End-to-end flows through the public tiling surface.
//!
//! Each test drives a real `AutoTileService` wired to in-memory collaborators
//! and checks the resulting device-pixel arrangements, covering:
//!
//! - independent per-display arrangements and batched debounce settling
//! - the master workflow: promote, minimize, restore, ratio changes
//! - outer gap and zone padding composing down to device pixels
//! - runtime algorithm registration
//! - drag snapping with a `ZoneDetector` over live and manual layouts
//!
//! ## Running these tests
//!
//! ```bash
//! cargo test -p zoner --test tiling_integration
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use uuid::Uuid;

use zoner::{
    ArrangementSink, Assignment, AutoTileService, DetectorConfig, DisplayAreas, GeneratedRects,
    Layout, Point, Rect, StaticSettings, TileOutcome, TilingAlgorithm, TilingParams, WindowId,
    WindowTracker, Zone, ZoneDetector,
};

// ============================================================================
// Test Doubles
// ============================================================================

/// Everything the host observes: tracker queries, zone assignments, and sink
/// emissions, shared between the doubles through one log.
#[derive(Default)]
struct HostLog {
    floating: HashSet<WindowId>,
    assignments: Vec<(WindowId, Uuid, String)>,
    emissions: Vec<(String, Vec<Assignment>)>,
}

struct RecordingTracker(Rc<RefCell<HostLog>>);

impl WindowTracker for RecordingTracker {
    fn is_window_floating(&self, window: WindowId) -> bool {
        self.0.borrow().floating.contains(&window)
    }

    fn assign_window_to_zone(
        &mut self,
        window: WindowId,
        zone: Uuid,
        display: &str,
        _virtual_desktop: Option<&str>,
    ) {
        self.0.borrow_mut().assignments.push((window, zone, display.to_owned()));
    }
}

struct FixedDisplays(HashMap<String, Rect>);

impl DisplayAreas for FixedDisplays {
    fn usable_area(&self, display: &str) -> Option<Rect> { self.0.get(display).copied() }
}

struct RecordingSink(Rc<RefCell<HostLog>>);

impl ArrangementSink for RecordingSink {
    fn geometries_changed(&mut self, display: &str, assignments: &[Assignment]) {
        self.0
            .borrow_mut()
            .emissions
            .push((display.to_owned(), assignments.to_vec()));
    }
}

// ============================================================================
// Fixture
// ============================================================================

/// A 1920x1080 laptop panel and a 2560x1440 external display to its right.
fn displays() -> HashMap<String, Rect> {
    let mut areas = HashMap::new();
    areas.insert("laptop".to_owned(), Rect::new(0.0, 0.0, 1920.0, 1080.0));
    areas.insert("external".to_owned(), Rect::new(1920.0, 0.0, 2560.0, 1440.0));
    areas
}

struct Host {
    service: AutoTileService,
    log: Rc<RefCell<HostLog>>,
}

impl Host {
    fn new() -> Self {
        Self::with_settings(StaticSettings {
            zone_padding_px: 0.0,
            ..StaticSettings::default()
        })
    }

    fn with_settings(settings: StaticSettings) -> Self {
        let log = Rc::new(RefCell::new(HostLog::default()));
        let service = AutoTileService::new(
            Box::new(RecordingTracker(Rc::clone(&log))),
            Box::new(FixedDisplays(displays())),
            Box::new(settings),
            Box::new(RecordingSink(Rc::clone(&log))),
        );
        Self { service, log }
    }

    /// Puts `display` under a fresh dynamic layout driven by `algorithm`.
    fn enable(&mut self, display: &str, algorithm: &str) {
        let outcome = self
            .service
            .layout_changed(display, Some(Layout::dynamic(algorithm, algorithm)));
        assert!(outcome.handled, "auto-tiling should engage on {display}");
    }

    /// Settles the debounce queue at its own deadline.
    fn flush(&mut self) -> Vec<(String, TileOutcome)> {
        let deadline = self
            .service
            .pending_deadline()
            .expect("a debounced regeneration should be pending");
        self.service.flush_debounced(deadline)
    }

    fn emission_count(&self) -> usize { self.log.borrow().emissions.len() }
}

fn frames(outcome: &TileOutcome) -> Vec<(WindowId, i32, i32, i32, i32)> {
    outcome
        .assignments
        .iter()
        .map(|a| (a.window_id, a.x, a.y, a.width, a.height))
        .collect()
}

// ============================================================================
// Auto-Tile Flows
// ============================================================================

#[test]
fn test_displays_tile_independently() {
    let mut host = Host::new();
    host.enable("laptop", "columns");
    host.enable("external", "columns");

    host.service.window_opened(1, "laptop");
    let laptop = host.service.window_opened(2, "laptop");
    let external = host.service.window_opened(3, "external");

    assert_eq!(
        frames(&laptop),
        vec![(1, 0, 0, 960, 1080), (2, 960, 0, 960, 1080)]
    );
    assert_eq!(frames(&external), vec![(3, 1920, 0, 2560, 1440)]);
    assert_eq!(host.service.display_of(2), Some("laptop"));
    assert_eq!(host.service.display_of(3), Some("external"));
    assert_eq!(host.service.master_of("laptop"), Some(1));
    assert_eq!(host.service.master_of("external"), Some(3));

    // A floating window never joins either arrangement.
    host.log.borrow_mut().floating.insert(9);
    let floating = host.service.window_opened(9, "laptop");
    assert!(!floating.handled, "floating windows stay out of the arrangement");
    assert_eq!(host.service.ordered_windows("laptop"), Some(&[1, 2][..]));

    let log = host.log.borrow();
    let external_windows: Vec<WindowId> = log
        .assignments
        .iter()
        .filter(|entry| entry.2 == "external")
        .map(|entry| entry.0)
        .collect();
    assert_eq!(external_windows, vec![3], "assignments must stay on their own display");
}

#[test]
fn test_closes_across_displays_settle_each_display_once() {
    let mut host = Host::new();
    host.enable("laptop", "columns");
    host.enable("external", "columns");
    host.service.window_opened(1, "laptop");
    host.service.window_opened(2, "laptop");
    host.service.window_opened(3, "external");
    host.service.window_opened(4, "external");
    let before = host.emission_count();

    host.service.window_closed(2);
    host.service.window_closed(4);
    assert_eq!(host.emission_count(), before, "closes alone must not emit");

    let flushed = host.flush();
    assert_eq!(flushed.len(), 2, "each affected display settles exactly once");
    assert_eq!(flushed[0].0, "external");
    assert_eq!(frames(&flushed[0].1), vec![(3, 1920, 0, 2560, 1440)]);
    assert_eq!(flushed[1].0, "laptop");
    assert_eq!(frames(&flushed[1].1), vec![(1, 0, 0, 1920, 1080)]);

    assert_eq!(host.emission_count(), before + 2);
    assert!(host.service.pending_deadline().is_none());
}

#[test]
fn test_master_workflow_survives_minimize_and_ratio_changes() {
    let mut host = Host::new();
    host.enable("laptop", "master-stack");
    host.service.window_opened(1, "laptop");
    host.service.window_opened(2, "laptop");
    let opened = host.service.window_opened(3, "laptop");
    assert_eq!(
        frames(&opened),
        vec![
            (1, 0, 0, 960, 1080),
            (2, 960, 0, 960, 540),
            (3, 960, 540, 960, 540),
        ]
    );

    let promoted = host.service.promote_master_window(3, "laptop");
    assert_eq!(host.service.ordered_windows("laptop"), Some(&[3, 2, 1][..]));
    assert_eq!(
        frames(&promoted),
        vec![
            (3, 0, 0, 960, 1080),
            (2, 960, 0, 960, 540),
            (1, 960, 540, 960, 540),
        ]
    );

    host.service.window_minimized(2, true);
    assert_eq!(
        host.service.master_of("laptop"),
        Some(3),
        "master survives a stack window minimizing"
    );
    let flushed = host.flush();
    assert_eq!(
        frames(&flushed[0].1),
        vec![(3, 0, 0, 960, 1080), (1, 960, 0, 960, 1080)]
    );

    host.service.window_minimized(2, false);
    let flushed = host.flush();
    assert_eq!(
        frames(&flushed[0].1),
        vec![
            (3, 0, 0, 960, 1080),
            (2, 960, 0, 960, 540),
            (1, 960, 540, 960, 540),
        ],
        "a restored window reclaims its old slot"
    );

    let widened = host.service.adjust_master_ratio("laptop", 0.25);
    assert_eq!(
        frames(&widened),
        vec![
            (3, 0, 0, 1440, 1080),
            (2, 1440, 0, 480, 540),
            (1, 1440, 540, 480, 540),
        ]
    );
}

#[test]
fn test_gap_and_padding_compose_through_the_pipeline() {
    let mut host = Host::with_settings(StaticSettings {
        zone_padding_px: 20.0,
        outer_gap_px: 30.0,
        ..StaticSettings::default()
    });
    host.enable("laptop", "columns");

    host.service.window_opened(1, "laptop");
    let outcome = host.service.window_opened(2, "laptop");
    assert_eq!(
        frames(&outcome),
        vec![(1, 40, 40, 910, 1000), (2, 970, 40, 910, 1000)]
    );

    // Zones sit exactly the padding apart; the gap stays at the display edge.
    let left = outcome.assignments[0];
    let right = outcome.assignments[1];
    assert_eq!(right.x - (left.x + left.width), 20);
    assert_eq!(left.x, 40);
    assert_eq!(right.x + right.width, 1920 - 30 - 10);
}

#[test]
fn test_runtime_registered_algorithm_drives_tiling() {
    struct Monocle;

    impl TilingAlgorithm for Monocle {
        fn generate(&self, window_count: usize, _params: &TilingParams) -> GeneratedRects {
            let mut rects = GeneratedRects::new();
            for _ in 0..window_count {
                rects.push(Rect::UNIT);
            }
            rects
        }
    }

    let mut host = Host::new();
    host.service
        .registry_mut()
        .register("monocle", Box::new(Monocle))
        .unwrap();
    host.enable("laptop", "monocle");

    host.service.window_opened(1, "laptop");
    let outcome = host.service.window_opened(2, "laptop");
    assert_eq!(
        frames(&outcome),
        vec![(1, 0, 0, 1920, 1080), (2, 0, 0, 1920, 1080)],
        "every window should fill the whole work area"
    );
}

// ============================================================================
// Snap Detection Against Live Layouts
// ============================================================================

#[test]
fn test_drag_snapping_follows_the_live_layout() {
    let mut host = Host::new();
    host.enable("laptop", "columns");
    host.service.window_opened(1, "laptop");
    host.service.window_opened(2, "laptop");
    host.service.window_opened(3, "laptop");

    let detector = ZoneDetector::default();
    let hit = detector.detect_zone(host.service.active_layout("laptop"), Point::new(700.0, 500.0));
    assert_eq!(hit.zone_number, Some(1));
    assert_eq!(hit.distance, 0.0);
    assert_eq!(hit.snap_geometry.to_pixel(), (640, 0, 640, 1080));

    // Below the display the nearest column still wins.
    let below = detector.detect_zone(host.service.active_layout("laptop"), Point::new(700.0, 2000.0));
    assert_eq!(below.zone_number, Some(1));
    assert_eq!(below.distance, 920.0);

    // A close reshapes the layout; the same cursor now lands elsewhere.
    host.service.window_closed(3);
    host.flush();
    let hit = detector.detect_zone(host.service.active_layout("laptop"), Point::new(700.0, 500.0));
    assert_eq!(hit.zone_number, Some(0));
    assert_eq!(hit.snap_geometry.to_pixel(), (0, 0, 960, 1080));
}

#[test]
fn test_edge_cursor_merges_neighbouring_zones() {
    let mut host = Host::new();
    host.enable("laptop", "columns");
    host.service.window_opened(1, "laptop");
    host.service.window_opened(2, "laptop");
    host.service.window_opened(3, "laptop");

    let detector = ZoneDetector::new(DetectorConfig {
        multi_zone_enabled: true,
        adjacent_threshold: 30.0,
        ..DetectorConfig::default()
    });
    let merged = detector.detect_multi_zone(
        host.service.active_layout("laptop"),
        Point::new(1280.0, 540.0),
    );

    assert!(merged.is_multi_zone, "a boundary cursor should span both columns");
    assert_eq!(merged.zone_number, Some(1));
    assert_eq!(merged.distance, 0.0);
    assert_eq!(merged.snap_geometry.to_pixel(), (640, 0, 1280, 1080));

    let layout = host.service.active_layout("laptop").expect("laptop is auto-tiled");
    let zones = layout.zones_by_number();
    assert_eq!(merged.adjacent_zones, vec![zones[1].id(), zones[2].id()]);
}

#[test]
fn test_manual_layout_takes_over_snapping() {
    let mut host = Host::new();
    host.enable("laptop", "columns");
    host.service.window_opened(1, "laptop");
    host.service.window_opened(2, "laptop");

    let mut halves = Layout::manual(
        "halves",
        vec![
            Zone::relative(0, Rect::new(0.0, 0.0, 0.5, 1.0)),
            Zone::relative(1, Rect::new(0.5, 0.0, 0.5, 1.0)),
        ],
    );

    let outcome = host.service.layout_changed("laptop", Some(halves.clone()));
    assert!(!outcome.handled, "manual layouts fall back to snap-based placement");
    assert!(!host.service.is_auto_tiled("laptop"));
    assert!(host.service.display_of(1).is_none());
    assert!(!host.service.window_opened(4, "laptop").handled);

    // The host owns placement now: resolve the authored zones and snap a
    // dragged window by cursor position.
    halves.recalculate_zone_geometries(&Rect::new(0.0, 0.0, 1920.0, 1080.0));
    let detector = ZoneDetector::default();
    let drop_target = detector.detect_zone(Some(&halves), Point::new(1400.0, 300.0));
    assert_eq!(drop_target.zone_number, Some(1));

    let snapped = Assignment::new(
        1,
        drop_target.zone_id.expect("the cursor is inside a zone"),
        &drop_target.snap_geometry,
    );
    assert_eq!(
        (snapped.x, snapped.y, snapped.width, snapped.height),
        (960, 0, 960, 1080)
    );
}
