//! The layered-tree glyph and its mapping onto the canvas.
//!
//! Glyph points are authored on a 24x24 design grid so the symbol stays
//! independent of the output resolution. [`map_point`] projects them into a
//! square drawing area placed `pad` pixels from the canvas edge.

/// Width and height of the normalized design grid.
pub const GRID_UNITS: f32 = 24.0;

/// Vertical distance between two stacked tiers, in grid units.
pub const TIER_STEP: f32 = 5.0;

/// A point on the 24x24 design grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    pub x: f32,
    pub y: f32,
}

impl GridPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns this point moved down by `dy` grid units.
    pub const fn shifted_down(self, dy: f32) -> Self {
        Self::new(self.x, self.y + dy)
    }
}

/// An absolute pixel coordinate on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointPx {
    pub x: i32,
    pub y: i32,
}

impl PointPx {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The square region of the canvas the glyph grid is projected into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphArea {
    /// Offset from the canvas edge to the area's origin, on both axes.
    pub pad: i32,
    /// Side length of the area in pixels.
    pub size: u32,
}

impl GlyphArea {
    pub fn new(pad: i32, size: u32) -> Self {
        Self { pad, size }
    }

    /// Maps a grid point into this area. See [`map_point`].
    pub fn map(&self, point: GridPoint) -> PointPx {
        map_point(point, self.pad, self.size)
    }
}

/// Projects a grid point to pixels: `pad + round(p / 24 * size)` per axis.
///
/// Ties round to even on both axes. Results beyond the `i32` range saturate.
pub fn map_point(point: GridPoint, pad: i32, size: u32) -> PointPx {
    let axis = |p: f32| -> i32 {
        let offset = (f64::from(p) / f64::from(GRID_UNITS)) * f64::from(size);
        (f64::from(pad) + offset.round_ties_even()) as i32
    };
    PointPx::new(axis(point.x), axis(point.y))
}

// ============================================================================
// Glyph Definition
// ============================================================================

/// One stacked polygon of the glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tier {
    /// The crown: top, left, middle, right.
    Rhombus([GridPoint; 4]),
    /// A lower layer: left, middle, right.
    Triangle([GridPoint; 3]),
}

impl Tier {
    /// Returns the tier's vertices in drawing order.
    pub fn points(&self) -> &[GridPoint] {
        match self {
            Self::Rhombus(points) => points,
            Self::Triangle(points) => points,
        }
    }
}

const CROWN_TOP: GridPoint = GridPoint::new(12.0, 2.0);
const CROWN_LEFT: GridPoint = GridPoint::new(2.0, 7.0);
const CROWN_MID: GridPoint = GridPoint::new(12.0, 12.0);
const CROWN_RIGHT: GridPoint = GridPoint::new(22.0, 7.0);

/// The three tiers of the layered-tree symbol, top to bottom.
///
/// Each lower triangle reuses the crown's left/middle/right points shifted
/// down by another [`TIER_STEP`], so a tier ends on the row where the next
/// one begins.
pub const TREE_GLYPH: [Tier; 3] = [
    Tier::Rhombus([CROWN_TOP, CROWN_LEFT, CROWN_MID, CROWN_RIGHT]),
    Tier::Triangle([
        CROWN_LEFT.shifted_down(TIER_STEP),
        CROWN_MID.shifted_down(TIER_STEP),
        CROWN_RIGHT.shifted_down(TIER_STEP),
    ]),
    Tier::Triangle([
        CROWN_LEFT.shifted_down(2.0 * TIER_STEP),
        CROWN_MID.shifted_down(2.0 * TIER_STEP),
        CROWN_RIGHT.shifted_down(2.0 * TIER_STEP),
    ]),
];

/// A polygon whose vertices have been mapped to pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    pub points: Vec<PointPx>,
}

impl Polygon {
    /// Returns the inclusive `(min, max)` y range covered by the polygon.
    pub fn y_range(&self) -> Option<(i32, i32)> {
        let min = self.points.iter().map(|p| p.y).min()?;
        let max = self.points.iter().map(|p| p.y).max()?;
        Some((min, max))
    }
}

/// Maps every tier of `glyph` through the same area.
pub fn layout(glyph: &[Tier], area: GlyphArea) -> Vec<Polygon> {
    glyph
        .iter()
        .map(|tier| Polygon {
            points: tier.points().iter().map(|p| area.map(*p)).collect(),
        })
        .collect()
}
