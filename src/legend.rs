use serde::Serialize;

use crate::constants::{LEGEND_DEPTH_BREAKPOINTS, LEGEND_POSITION, LEGEND_TITLE};
use crate::map::MapView;
use crate::style::{depth_color, DepthColor};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub color: DepthColor,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendControl {
    pub position: &'static str,
    pub title: String,
    pub entries: Vec<LegendEntry>,
    pub html: String,
}

impl LegendControl {
    pub fn depth_legend() -> Self {
        let mut legend = Self {
            position: LEGEND_POSITION,
            title: LEGEND_TITLE.to_string(),
            entries: depth_entries(&LEGEND_DEPTH_BREAKPOINTS),
            html: String::new(),
        };
        legend.html = legend.render_html();
        legend
    }

    /// `<h4>` title followed by one color swatch and range label per entry.
    pub fn render_html(&self) -> String {
        let swatches: Vec<String> = self
            .entries
            .iter()
            .map(|e| format!(r#"<i style="background:{}"></i> {}"#, e.color, e.label))
            .collect();
        format!("<h4>{}</h4>{}", self.title, swatches.join("<br>"))
    }
}

// Swatch colors sample one km past each breakpoint so they land in the bucket
// the label names.
fn depth_entries(breakpoints: &[u32]) -> Vec<LegendEntry> {
    breakpoints
        .iter()
        .enumerate()
        .map(|(i, &depth)| {
            let label = match breakpoints.get(i + 1) {
                Some(next) => format!("{}–{}", depth, next),
                None => format!("{}+", depth),
            };
            LegendEntry {
                color: depth_color(f64::from(depth) + 1.0),
                label,
            }
        })
        .collect()
}

/// Adds the static depth legend in the bottom-right corner.
pub fn add_legend(map: &mut MapView) {
    map.legends.push(LegendControl::depth_legend());
}
