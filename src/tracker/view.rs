//! Presentation
//!
//! `TrackerView` is a derived snapshot of the tracker. `Panel` lays it out as
//! text: heading, status line, the statistics row and the chart. Statistics
//! and chart only appear when there are entries.

use crate::tracker::chart::{ChartPoint, ChartRenderer};
use crate::tracker::stats::Stats;
use serde::Serialize;

pub const TITLE: &str = "Fitness Weight Tracker";
pub const SUBTITLE: &str = "Track your weekly progress and crush your goals";

/// Everything the panel shows, recomputed from the entry list
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrackerView {
    pub status: String,
    pub stats: Option<Stats>,
    pub chart: Vec<ChartPoint>,
}

impl TrackerView {
    pub fn has_entries(&self) -> bool {
        !self.chart.is_empty()
    }
}

/// Text layout of a view
pub struct Panel<'a, R> {
    pub renderer: &'a R,
    pub unit: &'a str,
    pub show_header: bool,
}

impl<'a, R: ChartRenderer> Panel<'a, R> {
    pub fn new(renderer: &'a R, unit: &'a str) -> Self {
        Self {
            renderer,
            unit,
            show_header: true,
        }
    }

    pub fn render(&self, view: &TrackerView) -> String {
        let mut out = String::new();

        if self.show_header {
            out.push_str(&format!("{}\n{}\n\n", TITLE, SUBTITLE));
        }

        if !view.status.is_empty() {
            out.push_str(&format!("  {}\n\n", view.status));
        }

        match &view.stats {
            Some(stats) => {
                out.push_str(&self.stats_row(stats));
                out.push('\n');
            }
            None => {
                out.push_str("No entries yet.\n");
            }
        }

        if view.has_entries() {
            out.push_str("Weight Chart\n");
            out.push_str(&self.renderer.render(&view.chart));
        }

        out
    }

    fn stats_row(&self, stats: &Stats) -> String {
        // Down arrow marks a loss; flat or gain gets the up arrow
        let trend = if stats.is_loss() { '▼' } else { '▲' };
        let cells = [
            ("Start", format!("{} {}", stats.start, self.unit)),
            ("Current", format!("{} {}", stats.current, self.unit)),
            ("Change", format!("{:.1} {} {}", stats.change, self.unit, trend)),
        ];

        let mut labels = String::from(" ");
        let mut values = String::from(" ");
        for (label, value) in &cells {
            labels.push_str(&format!(" {:<14}", label));
            values.push_str(&format!(" {:<14}", value));
        }
        format!("{}\n{}\n", labels.trim_end(), values.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::chart::TextChart;
    use chrono::NaiveDate;

    fn point(weight: f64, day: u32) -> ChartPoint {
        ChartPoint {
            id: day as i64,
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            date_formatted: format!("1/{day}/2024"),
            weight,
        }
    }

    fn filled_view() -> TrackerView {
        TrackerView {
            status: "Entry added!".into(),
            stats: Some(Stats {
                start: 80.0,
                current: 78.5,
                change: -1.5,
            }),
            chart: vec![point(80.0, 1), point(78.5, 8)],
        }
    }

    #[test]
    fn test_empty_panel() {
        let view = TrackerView {
            status: String::new(),
            stats: None,
            chart: Vec::new(),
        };
        let chart = TextChart::default();
        let text = Panel::new(&chart, "kg").render(&view);

        assert!(text.starts_with(TITLE));
        assert!(text.contains("No entries yet."));
        assert!(!text.contains("Start"));
        assert!(!text.contains("Weight Chart"));
    }

    #[test]
    fn test_filled_panel() {
        let chart = TextChart::default();
        let text = Panel::new(&chart, "kg").render(&filled_view());

        assert!(text.contains("  Entry added!"));
        assert!(text.contains("Start"));
        assert!(text.contains("80 kg"));
        assert!(text.contains("78.5 kg"));
        assert!(text.contains("-1.5 kg ▼"));
        assert!(text.contains("Weight Chart"));
        assert_eq!(text.matches('●').count(), 2);
    }

    #[test]
    fn test_flat_change_marked_as_gain() {
        let view = TrackerView {
            status: String::new(),
            stats: Some(Stats {
                start: 80.0,
                current: 80.0,
                change: 0.0,
            }),
            chart: vec![point(80.0, 1), point(80.0, 2)],
        };
        let chart = TextChart::default();
        let text = Panel::new(&chart, "kg").render(&view);

        assert!(text.contains("0.0 kg ▲"));
        assert!(!text.contains('▼'));
    }

    #[test]
    fn test_panel_without_header() {
        let chart = TextChart::default();
        let mut panel = Panel::new(&chart, "lb");
        panel.show_header = false;
        let text = panel.render(&filled_view());

        assert!(!text.contains(TITLE));
        assert!(text.contains("78.5 lb"));
    }

    #[test]
    fn test_view_json() {
        let json = serde_json::to_value(filled_view()).unwrap();
        assert_eq!(json["stats"]["change"], -1.5);
        assert_eq!(json["chart"][1]["dateFormatted"], "1/8/2024");

        let empty = TrackerView {
            status: String::new(),
            stats: None,
            chart: Vec::new(),
        };
        let json = serde_json::to_value(empty).unwrap();
        assert!(json["stats"].is_null());
    }
}
