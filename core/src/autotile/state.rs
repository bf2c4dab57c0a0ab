//! Per-display tiling records.

use std::collections::HashSet;

use crate::layout::Layout;
use crate::traits::WindowId;

/// Tracking state for one auto-tiled display.
///
/// `ordered_windows` is the master-first ordering that regeneration pairs
/// against zone numbers; it survives regenerations unchanged. Minimized
/// windows stay in the list and are filtered out at pairing time, so a
/// restore puts a window back into its old position.
#[derive(Debug)]
pub struct DisplayTiling {
    /// The active dynamic layout, owned while the display is auto-tiled.
    pub layout: Layout,

    /// Tracked windows, master first.
    pub ordered_windows: Vec<WindowId>,

    /// Current master, kept in sync with the ordering (see
    /// [`DisplayTiling::refresh_master`]).
    pub master: Option<WindowId>,

    /// Windows currently minimized.
    pub minimized: HashSet<WindowId>,
}

impl DisplayTiling {
    /// Creates an empty record around the active layout.
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            ordered_windows: Vec::new(),
            master: None,
            minimized: HashSet::new(),
        }
    }

    /// Whether `window` is tracked on this display.
    #[must_use]
    pub fn contains(&self, window: WindowId) -> bool { self.ordered_windows.contains(&window) }

    /// First window in order that is not minimized.
    #[must_use]
    pub fn first_non_minimized(&self) -> Option<WindowId> {
        self.ordered_windows
            .iter()
            .copied()
            .find(|window| !self.minimized.contains(window))
    }

    /// Re-derives the master reference from the ordering.
    ///
    /// The master is the first non-minimized window. When every window is
    /// minimized the previous master is kept, so it can reclaim the slot on
    /// restore; an empty display has no master.
    pub fn refresh_master(&mut self) {
        if self.ordered_windows.is_empty() {
            self.master = None;
            return;
        }
        if let Some(first) = self.first_non_minimized() {
            self.master = Some(first);
        }
    }

    /// Tracks a new window, prepending when it should become master.
    pub fn insert_window(&mut self, window: WindowId, as_master: bool) {
        if as_master {
            self.ordered_windows.insert(0, window);
        } else {
            self.ordered_windows.push(window);
        }
        self.refresh_master();
    }

    /// Stops tracking `window`, promoting a successor when it was master.
    ///
    /// The successor is the first non-minimized survivor; when every
    /// survivor is minimized the plain first entry takes the slot so a
    /// later restore still has a master.
    ///
    /// Returns whether the window was tracked.
    pub fn remove_window(&mut self, window: WindowId) -> bool {
        let Some(position) = self.ordered_windows.iter().position(|&w| w == window) else {
            return false;
        };

        self.ordered_windows.remove(position);
        self.minimized.remove(&window);

        if self.master == Some(window) {
            self.master = self
                .first_non_minimized()
                .or_else(|| self.ordered_windows.first().copied());
        } else if self.ordered_windows.is_empty() {
            self.master = None;
        }
        true
    }

    /// Updates the minimized set and re-derives the master.
    pub fn set_minimized(&mut self, window: WindowId, minimized: bool) {
        if minimized {
            self.minimized.insert(window);
        } else {
            self.minimized.remove(&window);
        }
        self.refresh_master();
    }

    /// Moves `window` into the master slot by swapping it with the current
    /// master's position. Returns false when the window is untracked or
    /// already master.
    pub fn promote(&mut self, window: WindowId) -> bool {
        let Some(position) = self.ordered_windows.iter().position(|&w| w == window) else {
            return false;
        };
        if self.master == Some(window) {
            return false;
        }

        let master_position = self
            .master
            .and_then(|master| self.ordered_windows.iter().position(|&w| w == master));
        match master_position {
            Some(master_position) => self.ordered_windows.swap(position, master_position),
            None => {
                self.ordered_windows.remove(position);
                self.ordered_windows.insert(0, window);
            }
        }

        self.master = Some(window);
        true
    }

    /// Windows participating in layout generation, master-first.
    ///
    /// Minimized windows are filtered out unless the host counts them.
    #[must_use]
    pub fn eligible_windows(&self, count_minimized: bool) -> Vec<WindowId> {
        self.ordered_windows
            .iter()
            .copied()
            .filter(|window| count_minimized || !self.minimized.contains(window))
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> DisplayTiling { DisplayTiling::new(Layout::dynamic("main", "columns")) }

    #[test]
    fn test_insert_appends_and_sets_first_master() {
        let mut state = record();
        state.insert_window(1, false);
        state.insert_window(2, false);

        assert_eq!(state.ordered_windows, vec![1, 2]);
        assert_eq!(state.master, Some(1));
    }

    #[test]
    fn test_insert_as_master_prepends_and_takes_the_slot() {
        let mut state = record();
        state.insert_window(1, false);
        state.insert_window(2, true);

        assert_eq!(state.ordered_windows, vec![2, 1]);
        assert_eq!(state.master, Some(2));
    }

    #[test]
    fn test_remove_master_promotes_first_survivor() {
        let mut state = record();
        state.insert_window(1, false);
        state.insert_window(2, false);
        state.insert_window(3, false);

        assert!(state.remove_window(1));
        assert_eq!(state.master, Some(2));
        assert_eq!(state.ordered_windows, vec![2, 3]);
    }

    #[test]
    fn test_remove_skips_minimized_when_promoting() {
        let mut state = record();
        state.insert_window(1, false);
        state.insert_window(2, false);
        state.insert_window(3, false);
        state.set_minimized(2, true);

        state.remove_window(1);
        assert_eq!(state.master, Some(3));
    }

    #[test]
    fn test_remove_last_window_clears_master() {
        let mut state = record();
        state.insert_window(1, false);
        state.remove_window(1);
        assert_eq!(state.master, None);
        assert!(!state.remove_window(1));
    }

    #[test]
    fn test_minimizing_master_promotes_next() {
        let mut state = record();
        state.insert_window(1, false);
        state.insert_window(2, false);

        state.set_minimized(1, true);
        assert_eq!(state.master, Some(2));
    }

    #[test]
    fn test_all_minimized_preserves_master() {
        let mut state = record();
        state.insert_window(1, false);
        state.insert_window(2, false);
        state.set_minimized(1, true);
        state.set_minimized(2, true);

        // 2 was promoted when 1 minimized, then preserved.
        assert_eq!(state.master, Some(2));
    }

    #[test]
    fn test_restore_reclaims_by_list_position() {
        let mut state = record();
        state.insert_window(1, false);
        state.insert_window(2, false);
        state.set_minimized(1, true);
        state.set_minimized(2, true);

        // 1 sits earlier in the ordering, so restoring it reclaims master.
        state.set_minimized(1, false);
        assert_eq!(state.master, Some(1));
    }

    #[test]
    fn test_promote_swaps_positions() {
        let mut state = record();
        state.insert_window(1, false);
        state.insert_window(2, false);
        state.insert_window(3, false);

        assert!(state.promote(3));
        assert_eq!(state.ordered_windows, vec![3, 2, 1]);
        assert_eq!(state.master, Some(3));

        assert!(!state.promote(3));
        assert!(!state.promote(99));
    }

    #[test]
    fn test_eligible_windows_filters_minimized() {
        let mut state = record();
        state.insert_window(1, false);
        state.insert_window(2, false);
        state.insert_window(3, false);
        state.set_minimized(2, true);

        assert_eq!(state.eligible_windows(false), vec![1, 3]);
        assert_eq!(state.eligible_windows(true), vec![1, 2, 3]);
    }
}
