//! Master-first auto-tiling.
//!
//! This module provides the [`AutoTileService`], the single owner of all
//! auto-tiling state. Implementation is split across submodules:
//!
//! - `state`: per-display window ordering and master tracking
//! - `debounce`: batched regeneration scheduling for close and minimize bursts
//!
//! # How It Works
//!
//! The service keeps one [`DisplayTiling`] record per auto-tiled display and
//! reacts to window lifecycle events:
//!
//! ```text
//!   window opened ──────▶ track + regenerate now
//!   closed / minimized ─▶ mark display ──▶ (quiet period) ──▶ regenerate batch
//!   layout changed ─────▶ adopt dynamic layout, or discard the display
//! ```
//!
//! Regeneration asks the active layout to rebuild its zones for the eligible
//! window count, resolves zone geometry against the display's usable area and
//! pairs windows with zones in order: the master window takes the lowest zone
//! number, the rest follow in tracking order. Results flow out through the
//! [`WindowTracker`] and [`ArrangementSink`] collaborators; the service never
//! touches the windowing system itself.

mod debounce;
mod state;

pub use self::debounce::RegenerationQueue;
pub use self::state::DisplayTiling;

use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

use crate::algorithm::AlgorithmRegistry;
use crate::constants::layout::{MASTER_RATIO_MAX, MASTER_RATIO_MIN, MIN_ZONE_DIMENSION, RATIO_EPSILON};
use crate::constants::timing::REGENERATE_DEBOUNCE_MS;
use crate::events::{ArrangementSink, Assignment, Assignments, TileOutcome};
use crate::layout::Layout;
use crate::resolver;
use crate::settings::SettingsSource;
use crate::traits::{DisplayAreas, WindowId, WindowTracker};

// ============================================================================
// Service
// ============================================================================

/// Coordinates dynamic tiling across displays.
///
/// All methods run on the caller's thread; nothing here spawns timers or
/// threads. Debounced work settles through [`AutoTileService::flush_debounced`],
/// which the host calls when [`AutoTileService::pending_deadline`] passes.
pub struct AutoTileService {
    tracker: Box<dyn WindowTracker>,
    displays: Box<dyn DisplayAreas>,
    settings: Box<dyn SettingsSource>,
    sink: Box<dyn ArrangementSink>,
    registry: AlgorithmRegistry,

    /// Tiling state per display name. Entries exist only for displays that
    /// adopted a dynamic layout; queries never create one.
    states: HashMap<String, DisplayTiling>,

    /// Reverse index from window to the display tracking it.
    window_index: HashMap<WindowId, String>,

    queue: RegenerationQueue,
    current_desktop: Option<String>,
}

impl AutoTileService {
    /// Creates a service with the built-in algorithm set.
    #[must_use]
    pub fn new(
        tracker: Box<dyn WindowTracker>,
        displays: Box<dyn DisplayAreas>,
        settings: Box<dyn SettingsSource>,
        sink: Box<dyn ArrangementSink>,
    ) -> Self {
        Self::with_registry(tracker, displays, settings, sink, AlgorithmRegistry::with_builtins())
    }

    /// Creates a service around a caller-assembled algorithm registry.
    #[must_use]
    pub fn with_registry(
        tracker: Box<dyn WindowTracker>,
        displays: Box<dyn DisplayAreas>,
        settings: Box<dyn SettingsSource>,
        sink: Box<dyn ArrangementSink>,
        registry: AlgorithmRegistry,
    ) -> Self {
        Self {
            tracker,
            displays,
            settings,
            sink,
            registry,
            states: HashMap::new(),
            window_index: HashMap::new(),
            queue: RegenerationQueue::new(Duration::from_millis(REGENERATE_DEBOUNCE_MS)),
            current_desktop: None,
        }
    }

    // ========================================================================
    // Window lifecycle events
    // ========================================================================

    /// Handles a window appearing on `display`.
    ///
    /// Doubles as a sync point: re-announcing an already-tracked window just
    /// re-tiles, and a window last seen on another display is pulled over
    /// first. Floating windows and displays without an active dynamic layout
    /// are left alone, reported as unhandled.
    pub fn window_opened(&mut self, window: WindowId, display: &str) -> TileOutcome {
        if !self.states.contains_key(display) {
            // Rebound for the capture: tracing's macros shadow locals named
            // `display` (tokio-rs/tracing#2332); same at every log site below.
            let display_name = display;
            tracing::debug!("window {window} opened on {display_name}, which is not auto-tiled");
            return TileOutcome::unhandled();
        }
        if self.tracker.is_window_floating(window) {
            tracing::debug!("window {window} floats above the tiled layer");
            return TileOutcome::unhandled();
        }

        if let Some(previous) = self.window_index.get(&window).cloned()
            && previous != display
        {
            let display_name = display;
            tracing::warn!("window {window} opened on {display_name} while still tracked on {previous}");
            self.window_index.remove(&window);
            if let Some(stale) = self.states.get_mut(&previous) {
                stale.remove_window(window);
                self.queue.mark(&previous, Instant::now());
            }
        }

        if !self.window_index.contains_key(&window)
            && let Some(state) = self.states.get_mut(display)
        {
            state.insert_window(window, self.settings.new_window_as_master());
            self.window_index.insert(window, display.to_owned());
        }

        self.regenerate(display)
    }

    /// Handles a window going away. Regeneration is debounced so that a burst
    /// of closes re-tiles each affected display once.
    pub fn window_closed(&mut self, window: WindowId) {
        let Some(display) = self.window_index.remove(&window) else {
            return;
        };
        if let Some(state) = self.states.get_mut(&display) {
            state.remove_window(window);
        }
        self.queue.mark(&display, Instant::now());
    }

    /// Handles a window minimizing or restoring.
    ///
    /// When minimized windows keep their zone this is a no-op; otherwise the
    /// window drops out of (or back into) the pairing and the display is
    /// queued for a debounced regeneration.
    pub fn window_minimized(&mut self, window: WindowId, minimized: bool) {
        if self.settings.count_minimized_windows() {
            return;
        }
        let Some(display) = self.window_index.get(&window).cloned() else {
            return;
        };
        let Some(state) = self.states.get_mut(&display) else {
            return;
        };
        state.set_minimized(window, minimized);
        self.queue.mark(&display, Instant::now());
    }

    /// Adopts `layout` as the active layout for `display`.
    ///
    /// A dynamic layout keeps the existing window ordering (or starts a fresh
    /// record) and re-tiles immediately. Anything else, including `None` and
    /// manual layouts, takes the display out of auto-tiling.
    pub fn layout_changed(&mut self, display: &str, layout: Option<Layout>) -> TileOutcome {
        match layout {
            Some(layout) if layout.is_dynamic() => {
                if let Some(state) = self.states.get_mut(display) {
                    state.layout = layout;
                } else {
                    self.states.insert(display.to_owned(), DisplayTiling::new(layout));
                }
                self.regenerate(display)
            }
            _ => {
                self.discard_display(display);
                TileOutcome::unhandled()
            }
        }
    }

    /// Moves `window` into the master slot and re-tiles.
    ///
    /// Promoting the current master is a handled no-op; untracked windows and
    /// untiled displays are unhandled.
    pub fn promote_master_window(&mut self, window: WindowId, display: &str) -> TileOutcome {
        let Some(state) = self.states.get_mut(display) else {
            let display_name = display;
            tracing::debug!("promote skipped: display {display_name} is not auto-tiled");
            return TileOutcome::unhandled();
        };
        if !state.contains(window) {
            let display_name = display;
            tracing::debug!("promote skipped: window {window} is not tracked on {display_name}");
            return TileOutcome::unhandled();
        }
        if state.master == Some(window) {
            return TileOutcome::noop();
        }

        state.promote(window);
        self.regenerate(display)
    }

    /// Nudges the master ratio by `delta`, clamped to the valid range.
    ///
    /// A delta that cannot move the ratio (already pinned at a bound, or too
    /// small to matter) is a handled no-op without regeneration.
    pub fn adjust_master_ratio(&mut self, display: &str, delta: f64) -> TileOutcome {
        let Some(state) = self.states.get_mut(display) else {
            let display_name = display;
            tracing::debug!("ratio change skipped: display {display_name} is not auto-tiled");
            return TileOutcome::unhandled();
        };

        let current = state.layout.master_ratio();
        let target = (current + delta).clamp(MASTER_RATIO_MIN, MASTER_RATIO_MAX);
        if (target - current).abs() < RATIO_EPSILON {
            return TileOutcome::noop();
        }

        state.layout.set_master_ratio(target);
        self.regenerate(display)
    }

    // ========================================================================
    // Regeneration
    // ========================================================================

    /// Re-tiles `display` immediately, bypassing the debounce queue.
    pub fn regenerate_for_display(&mut self, display: &str) -> TileOutcome { self.regenerate(display) }

    /// Regenerates every display whose debounce deadline has passed.
    ///
    /// Returns the per-display outcomes, empty while the deadline is still in
    /// the future.
    pub fn flush_debounced(&mut self, now: Instant) -> Vec<(String, TileOutcome)> {
        self.queue
            .drain_due(now)
            .into_iter()
            .map(|display| {
                let outcome = self.regenerate(&display);
                (display, outcome)
            })
            .collect()
    }

    fn regenerate(&mut self, display: &str) -> TileOutcome {
        // Any regeneration satisfies a pending debounce mark for the display.
        self.queue.remove(display);

        let Some(state) = self.states.get_mut(display) else {
            let display_name = display;
            tracing::debug!("regeneration skipped: display {display_name} is not auto-tiled");
            return TileOutcome::unhandled();
        };
        let Some(usable_area) = self.displays.usable_area(display) else {
            let display_name = display;
            tracing::debug!("regeneration skipped: no usable area for display {display_name}");
            return TileOutcome::unhandled();
        };

        let eligible = state.eligible_windows(self.settings.count_minimized_windows());
        let container = resolver::apply_outer_gap(&usable_area, self.settings.outer_gap_px());
        let aspect_ratio = if container.height > 0.0 {
            container.width / container.height
        } else {
            0.0
        };

        if let Err(err) = state.layout.regenerate_zones(eligible.len(), &self.registry, aspect_ratio) {
            let display_name = display;
            tracing::debug!("regeneration skipped on display {display_name}: {err}");
            return TileOutcome::unhandled();
        }
        state.layout.recalculate_zone_geometries(&container);

        let zones = state.layout.zones_by_number();
        if zones.len() != eligible.len() {
            let zone_count = zones.len();
            let window_count = eligible.len();
            let display_name = display;
            tracing::warn!(
                "layout produced {zone_count} zones for {window_count} windows on {display_name}; pairing what fits"
            );
        }

        let padding = self.settings.zone_padding_px();
        let mut assignments = Assignments::new();
        for (&window, zone) in eligible.iter().zip(zones) {
            let padded = resolver::with_zone_padding(&zone.absolute_geometry, padding);
            let clipped = resolver::clip_to_available_area(&padded, &usable_area, MIN_ZONE_DIMENSION);
            assignments.push(Assignment::new(window, zone.id(), &clipped));
        }

        for assignment in &assignments {
            self.tracker.assign_window_to_zone(
                assignment.window_id,
                assignment.zone_id,
                display,
                self.current_desktop.as_deref(),
            );
        }
        self.sink.geometries_changed(display, &assignments);

        TileOutcome::regenerated(assignments)
    }

    fn discard_display(&mut self, display: &str) {
        let Some(state) = self.states.remove(display) else {
            return;
        };
        for window in &state.ordered_windows {
            self.window_index.remove(window);
        }
        self.queue.remove(display);
        let display_name = display;
        tracing::debug!("auto-tiling disabled on display {display_name}");
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Whether `display` currently has an active dynamic layout.
    #[must_use]
    pub fn is_auto_tiled(&self, display: &str) -> bool { self.states.contains_key(display) }

    /// The active layout on `display`, if it is auto-tiled.
    #[must_use]
    pub fn active_layout(&self, display: &str) -> Option<&Layout> {
        self.states.get(display).map(|state| &state.layout)
    }

    /// The master window on `display`.
    #[must_use]
    pub fn master_of(&self, display: &str) -> Option<WindowId> {
        self.states.get(display).and_then(|state| state.master)
    }

    /// Tracked windows on `display`, master first.
    #[must_use]
    pub fn ordered_windows(&self, display: &str) -> Option<&[WindowId]> {
        self.states.get(display).map(|state| state.ordered_windows.as_slice())
    }

    /// The display tracking `window`, if any.
    #[must_use]
    pub fn display_of(&self, window: WindowId) -> Option<&str> {
        self.window_index.get(&window).map(String::as_str)
    }

    /// When the next debounced regeneration is due.
    #[must_use]
    pub fn pending_deadline(&self) -> Option<Instant> { self.queue.deadline() }

    /// Records the virtual desktop passed through to zone assignments.
    pub fn set_current_desktop(&mut self, desktop: Option<String>) { self.current_desktop = desktop; }

    /// The algorithm registry backing dynamic layouts.
    #[must_use]
    pub const fn registry(&self) -> &AlgorithmRegistry { &self.registry }

    /// Mutable access to the registry, for runtime registration.
    pub const fn registry_mut(&mut self) -> &mut AlgorithmRegistry { &mut self.registry }
}

impl fmt::Debug for AutoTileService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoTileService")
            .field("states", &self.states)
            .field("window_index", &self.window_index)
            .field("queue", &self.queue)
            .field("current_desktop", &self.current_desktop)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
