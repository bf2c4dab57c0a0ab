//! Zone-based window tiling for Zoner.
//!
//! This crate provides the layout model (zones, layouts, tiling algorithms),
//! the geometry resolver that turns relative zones into on-screen pixels, the
//! cursor-driven zone detector, and the auto-tiling service that keeps
//! windows paired with zones as they open, close and minimize. The host shell
//! plugs in through the traits in [`traits`], [`events`] and [`settings`].

pub mod algorithm;
pub mod autotile;
pub mod constants;
pub mod detector;
pub mod error;
pub mod events;
pub mod geometry;
pub mod layout;
pub mod resolver;
pub mod settings;
pub mod traits;
pub mod zone;

pub use algorithm::{AlgorithmRegistry, GeneratedRects, TilingAlgorithm, TilingParams};
pub use autotile::{AutoTileService, DisplayTiling, RegenerationQueue};
pub use detector::highlight::HighlightSink;
pub use detector::{DetectorConfig, ZoneDetector, ZoneMatch};
pub use error::ZonerError;
pub use events::{ArrangementSink, Assignment, Assignments, NullSink, TileOutcome};
pub use geometry::{Point, Rect};
pub use layout::{Layout, LayoutCategory};
pub use settings::{SettingsSource, StaticSettings};
pub use traits::{DisplayAreas, WindowId, WindowTracker};
pub use zone::{GeometryMode, Zone, ZoneAppearance};
