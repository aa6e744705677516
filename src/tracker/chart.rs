//! Chart projection and terminal rendering
//!
//! `project` shapes entries into chart points with a display date. Drawing is
//! left to a `ChartRenderer`; `TextChart` draws a line chart with a dashed
//! grid for the terminal.

use crate::storage::Entry;
use chrono::NaiveDate;
use serde::Serialize;

/// Display date format used when none is configured (e.g. `1/8/2024`)
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Widest gap between two plotted points, in columns
const MAX_SPACING: usize = 6;

/// Width of the y-axis gutter: 7 label chars, a space, the tick
const GUTTER: usize = 9;

/// One plotted point
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub id: i64,
    pub date: NaiveDate,
    pub date_formatted: String,
    pub weight: f64,
}

/// Shape entries into chart points, keeping their order
pub fn project(entries: &[Entry], date_format: &str) -> Vec<ChartPoint> {
    entries
        .iter()
        .map(|e| ChartPoint {
            id: e.id,
            date: e.date,
            date_formatted: e.date.format(date_format).to_string(),
            weight: e.weight,
        })
        .collect()
}

/// Draws an ordered series of points
pub trait ChartRenderer {
    fn render(&self, points: &[ChartPoint]) -> String;
}

/// Text line chart
#[derive(Debug, Clone)]
pub struct TextChart {
    /// Plot rows, not counting the x axis and labels
    pub height: usize,
    /// Column budget for the plot area
    pub max_width: usize,
    /// Print every point as `date weight` under the axis
    pub legend: bool,
}

impl Default for TextChart {
    fn default() -> Self {
        Self {
            height: 10,
            max_width: 60,
            legend: true,
        }
    }
}

impl TextChart {
    pub fn new(height: usize) -> Self {
        Self {
            height,
            ..Default::default()
        }
    }

    fn is_grid_row(&self, row: usize) -> bool {
        row % 3 == 0 || row + 1 == self.rows()
    }

    fn rows(&self) -> usize {
        self.height.max(2)
    }
}

impl ChartRenderer for TextChart {
    fn render(&self, points: &[ChartPoint]) -> String {
        if points.is_empty() {
            return String::new();
        }

        let rows = self.rows();
        let (mut lo, mut hi) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.weight), hi.max(p.weight))
            });
        if hi - lo < f64::EPSILON {
            lo -= 1.0;
            hi += 1.0;
        }

        let spacing = (self.max_width / points.len()).clamp(1, MAX_SPACING);
        let width = (points.len() - 1) * spacing + 1;
        let row_of = |weight: f64| -> usize {
            let scaled = (hi - weight) / (hi - lo) * (rows - 1) as f64;
            (scaled.round() as usize).min(rows - 1)
        };

        let mut grid: Vec<Vec<char>> = (0..rows)
            .map(|r| {
                let fill = if self.is_grid_row(r) { '┄' } else { ' ' };
                vec![fill; width]
            })
            .collect();

        for (i, pair) in points.windows(2).enumerate() {
            let x0 = i * spacing;
            let y0 = row_of(pair[0].weight) as f64;
            let y1 = row_of(pair[1].weight) as f64;
            for step in 1..spacing {
                let t = step as f64 / spacing as f64;
                let y = (y0 + (y1 - y0) * t).round() as usize;
                grid[y][x0 + step] = '•';
            }
        }
        for (i, point) in points.iter().enumerate() {
            grid[row_of(point.weight)][i * spacing] = '●';
        }

        let mut out = String::new();
        for (r, cells) in grid.iter().enumerate() {
            if self.is_grid_row(r) {
                let value = hi - (hi - lo) * r as f64 / (rows - 1) as f64;
                out.push_str(&format!("{:>7.1} ┤", value));
            } else {
                out.push_str(&format!("{:>7} │", ""));
            }
            let line: String = cells.iter().collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out.push_str(&format!("{:>7} └{}\n", "", "─".repeat(width)));

        // Date labels under the first and last point
        let first = &points[0].date_formatted;
        let mut labels = format!("{}{}", " ".repeat(GUTTER), first);
        if let Some(last) = points.last().filter(|_| points.len() > 1) {
            let used = first.chars().count();
            let last_start = width.saturating_sub(last.date_formatted.chars().count());
            if last_start > used {
                labels.push_str(&" ".repeat(last_start - used));
            } else {
                labels.push_str("  ");
            }
            labels.push_str(&last.date_formatted);
        }
        out.push_str(&labels);
        out.push('\n');

        if self.legend {
            out.push_str(&self.legend_rows(points));
        }

        out
    }
}

impl TextChart {
    /// `date weight` for every point, wrapped to the plot width
    fn legend_rows(&self, points: &[ChartPoint]) -> String {
        let limit = GUTTER + self.max_width.max(MAX_SPACING);
        let mut out = String::new();
        let mut line = " ".repeat(GUTTER);

        for point in points {
            let item = format!("{} {}", point.date_formatted, point.weight);
            let used = line.chars().count();
            if used > GUTTER && used + 3 + item.chars().count() > limit {
                out.push_str(&line);
                out.push('\n');
                line = " ".repeat(GUTTER);
            }
            if line.chars().count() > GUTTER {
                line.push_str("   ");
            }
            line.push_str(&item);
        }
        out.push_str(&line);
        out.push('\n');
        out
    }
}
