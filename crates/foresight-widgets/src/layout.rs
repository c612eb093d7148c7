//! Overlay placement per viewport class.
//!
//! Slots are proportional, so the same table serves any canvas size. Narrow
//! viewports get four small charts flanking the headline; wide viewports get
//! seven larger ones around the edges.

use foresight_core::{Point, Viewport, ViewportClass};

use crate::overlay::{ChartKind, ChartOverlay};

const LINE_SERIES: [f32; 7] = [20.0, 45.0, 28.0, 80.0, 99.0, 43.0, 75.0];
const RISING_SERIES: [f32; 7] = [10.0, 30.0, 60.0, 40.0, 85.0, 55.0, 95.0];
const PIE_SERIES: [f32; 4] = [30.0, 25.0, 20.0, 25.0];
const BAR_SERIES: [f32; 5] = [45.0, 70.0, 25.0, 85.0, 60.0];
const WIDE_BAR_SERIES: [f32; 6] = [30.0, 50.0, 80.0, 40.0, 90.0, 35.0];
const AREA_SERIES: [f32; 7] = [10.0, 25.0, 40.0, 35.0, 60.0, 55.0, 80.0];

/// Chart body template of a slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotChart {
    /// Line chart over a series
    Line(&'static [f32]),
    /// Bar chart over a series
    Bar(&'static [f32]),
    /// Donut over a series
    Pie(&'static [f32]),
    /// Area chart over a series
    Area(&'static [f32]),
    /// Gauge at a value
    Gauge(f32),
}

impl SlotChart {
    fn build(self) -> ChartKind {
        match self {
            Self::Line(v) => ChartKind::Line(v.to_vec()),
            Self::Bar(v) => ChartKind::Bar(v.to_vec()),
            Self::Pie(v) => ChartKind::Pie(v.to_vec()),
            Self::Area(v) => ChartKind::Area(v.to_vec()),
            Self::Gauge(value) => ChartKind::Gauge(value),
        }
    }
}

/// One overlay slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    /// Chart template
    pub chart: SlotChart,
    /// Anchor X as a fraction of the canvas width
    pub fx: f32,
    /// Anchor Y as a fraction of the canvas height
    pub fy: f32,
    /// Chart size (px)
    pub size: f32,
    /// Rotation per tick (radians)
    pub speed: f32,
    /// Optional opacity
    pub opacity: Option<f32>,
}

const fn slot(chart: SlotChart, fx: f32, fy: f32, size: f32, speed: f32) -> Slot {
    Slot {
        chart,
        fx,
        fy,
        size,
        speed,
        opacity: None,
    }
}

const fn faded(chart: SlotChart, fx: f32, fy: f32, size: f32, speed: f32, opacity: f32) -> Slot {
    Slot {
        chart,
        fx,
        fy,
        size,
        speed,
        opacity: Some(opacity),
    }
}

/// Slots for narrow viewports.
pub const NARROW_SLOTS: [Slot; 4] = [
    slot(SlotChart::Line(&LINE_SERIES), 0.15, 0.45, 50.0, 0.002),
    slot(SlotChart::Pie(&PIE_SERIES), 0.85, 0.48, 45.0, 0.004),
    slot(SlotChart::Bar(&BAR_SERIES), 0.12, 0.65, 55.0, 0.003),
    faded(SlotChart::Area(&AREA_SERIES), 0.88, 0.62, 50.0, 0.006, 0.5),
];

/// Slots for wide viewports.
pub const WIDE_SLOTS: [Slot; 7] = [
    slot(SlotChart::Line(&LINE_SERIES), 0.12, 0.15, 80.0, 0.002),
    slot(SlotChart::Pie(&PIE_SERIES), 0.88, 0.18, 75.0, 0.004),
    slot(SlotChart::Bar(&BAR_SERIES), 0.08, 0.55, 85.0, 0.003),
    faded(SlotChart::Gauge(75.0), 0.92, 0.58, 70.0, -0.003, 0.65),
    faded(SlotChart::Area(&AREA_SERIES), 0.25, 0.88, 85.0, 0.006, 0.5),
    slot(SlotChart::Line(&RISING_SERIES), 0.75, 0.85, 90.0, -0.002),
    slot(SlotChart::Bar(&WIDE_BAR_SERIES), 0.50, 0.92, 80.0, -0.003),
];

/// Slot table for a viewport class.
#[must_use]
pub fn slots(class: ViewportClass) -> &'static [Slot] {
    match class {
        ViewportClass::Narrow => &NARROW_SLOTS,
        ViewportClass::Wide => &WIDE_SLOTS,
    }
}

/// Build the overlays for a viewport, in paint order.
#[must_use]
pub fn overlays_for(viewport: &Viewport) -> Vec<ChartOverlay> {
    slots(viewport.class())
        .iter()
        .map(|s| {
            let anchor = Point::new(viewport.width() * s.fx, viewport.height() * s.fy);
            let overlay = ChartOverlay::new(s.chart.build(), anchor, s.size, s.speed);
            match s.opacity {
                Some(opacity) => overlay.with_opacity(opacity),
                None => overlay,
            }
        })
        .collect()
}
