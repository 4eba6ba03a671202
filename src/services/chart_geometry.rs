use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartGeometryError {
    #[error("cannot lay out a chart over an empty series")]
    EmptySeries,
}

/// Padding between the canvas edge and the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartMargins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for ChartMargins {
    fn default() -> Self {
        Self {
            left: 36.0,
            right: 16.0,
            top: 16.0,
            bottom: 30.0,
        }
    }
}

/// A horizontal gridline: the percentage value it marks and its mapped
/// y-coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub value: f64,
    pub y: f64,
}

/// Pixel-space layout for one trend chart render.
///
/// Ephemeral output of [`compute_geometry`]: scoped to a single render
/// call, holds no references to its inputs, safe to recompute on every
/// resize.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub margins: ChartMargins,
    pub y_min: f64,
    pub y_max: f64,
    pub samples: usize,
    /// Mapped (x, y) for each series sample, in series order.
    pub points: Vec<(f64, f64)>,
    /// One gridline per multiple of 5 in `[y_min, y_max]` inclusive.
    pub grid_lines: Vec<GridLine>,
    /// Mapped y for the dashed target reference line.
    pub target_y: f64,
}

impl ChartGeometry {
    /// Horizontal position of sample `i`, spread linearly across the
    /// usable width. A single-sample series sits at the left margin.
    pub fn x_of(&self, index: usize) -> f64 {
        if self.samples <= 1 {
            return self.margins.left;
        }
        let usable = self.width - self.margins.left - self.margins.right;
        self.margins.left + (index as f64 / (self.samples as f64 - 1.0)) * usable
    }

    /// Vertical position of value `v`. Inverted: larger values map closer
    /// to the top of the canvas.
    pub fn y_of(&self, value: f64) -> f64 {
        let usable = self.height - self.margins.top - self.margins.bottom;
        self.margins.top + usable - ((value - self.y_min) / (self.y_max - self.y_min)) * usable
    }

    /// Bottom edge of the plot area; the baseline for area fills.
    pub fn plot_bottom(&self) -> f64 {
        self.height - self.margins.bottom
    }

    /// Right edge of the plot area.
    pub fn plot_right(&self) -> f64 {
        self.width - self.margins.right
    }
}

/// Lays out a bounded numeric series plus a target reference value onto a
/// canvas of the given size.
///
/// The value range is the series and target combined, then snapped outward
/// to multiples of 5 with an extra 5-unit pad on both sides, so extreme
/// samples and the target line never touch the plot border. The padding
/// also guarantees a non-zero vertical range when every value is
/// identical. Pure function of its inputs; an empty series is a contract
/// violation, not a recoverable case.
pub fn compute_geometry(
    series: &[f64],
    target: f64,
    width: f64,
    height: f64,
    margins: ChartMargins,
) -> Result<ChartGeometry, ChartGeometryError> {
    if series.is_empty() {
        return Err(ChartGeometryError::EmptySeries);
    }

    let mut min = target;
    let mut max = target;
    for value in series {
        min = min.min(*value);
        max = max.max(*value);
    }
    let y_min = (min / 5.0).floor() * 5.0 - 5.0;
    let y_max = (max / 5.0).ceil() * 5.0 + 5.0;

    let mut geometry = ChartGeometry {
        width,
        height,
        margins,
        y_min,
        y_max,
        samples: series.len(),
        points: Vec::with_capacity(series.len()),
        grid_lines: Vec::new(),
        target_y: 0.0,
    };

    geometry.points = series
        .iter()
        .enumerate()
        .map(|(i, v)| (geometry.x_of(i), geometry.y_of(*v)))
        .collect();

    let mut value = y_min;
    while value <= y_max {
        geometry.grid_lines.push(GridLine {
            value,
            y: geometry.y_of(value),
        });
        value += 5.0;
    }

    geometry.target_y = geometry.y_of(target);
    Ok(geometry)
}
