use dioxus::prelude::*;

use crate::analysis::{pair_series, SeriesPoint};
use crate::t;

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 320.0;
const PAD_LEFT: f64 = 24.0;
const PAD_RIGHT: f64 = 24.0;
const PAD_TOP: f64 = 28.0;
const PAD_BOTTOM: f64 = 48.0;
const BAR_FILL: f64 = 0.7;
const LABEL_CHARS: usize = 10;

/// Bar chart of missing values per column.
#[component]
pub fn NullValueChart(data: Vec<u64>, labels: Vec<String>) -> Element {
    let title = t!("chart-title");

    let body = match pair_series(&data, &labels) {
        Ok(series) if series.is_empty() => rsx! {
            p { class: "results-card__placeholder", {t!("chart-empty")} }
        },
        Ok(series) => render_bars(&series, &title),
        Err(mismatch) => {
            tracing::warn!(
                labels = mismatch.labels,
                counts = mismatch.counts,
                "column names and missing-value counts disagree; chart skipped"
            );
            rsx! {
                p { class: "results-card__placeholder null-chart__mismatch",
                    {t!("chart-mismatch", labels = mismatch.labels, counts = mismatch.counts)}
                }
            }
        }
    };

    rsx! {
        section { class: "results-card null-chart",
            div { class: "results-card__header",
                h2 { "{title}" }
            }
            {body}
        }
    }
}

fn render_bars(series: &[SeriesPoint], title: &str) -> Element {
    let bars = layout_bars(series);
    let baseline = CHART_HEIGHT - PAD_BOTTOM;
    let axis_end = CHART_WIDTH - PAD_RIGHT;

    rsx! {
        svg {
            class: "null-chart__svg",
            view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT}",
            role: "img",
            "aria-label": "{title}",
            line {
                class: "null-chart__axis",
                x1: "{PAD_LEFT}",
                y1: "{baseline}",
                x2: "{axis_end}",
                y2: "{baseline}",
            }
            for bar in bars.into_iter() {
                g { key: "{bar.index}",
                    rect {
                        class: "null-chart__bar",
                        x: "{bar.x}",
                        y: "{bar.y}",
                        width: "{bar.width}",
                        height: "{bar.height}",
                    }
                    text {
                        class: "null-chart__value",
                        x: "{bar.center}",
                        y: "{bar.value_y}",
                        text_anchor: "middle",
                        "{bar.count}"
                    }
                    text {
                        class: "null-chart__label",
                        x: "{bar.center}",
                        y: "{bar.label_y}",
                        text_anchor: "middle",
                        "{bar.label}"
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct BarGeometry {
    index: usize,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    center: f64,
    value_y: f64,
    label_y: f64,
    count: u64,
    label: String,
}

fn layout_bars(series: &[SeriesPoint]) -> Vec<BarGeometry> {
    if series.is_empty() {
        return Vec::new();
    }

    let plot_width = CHART_WIDTH - PAD_LEFT - PAD_RIGHT;
    let plot_height = CHART_HEIGHT - PAD_TOP - PAD_BOTTOM;
    let baseline = CHART_HEIGHT - PAD_BOTTOM;
    let slot = plot_width / series.len() as f64;
    let width = slot * BAR_FILL;
    let max = series.iter().map(|p| p.count).max().unwrap_or(0);

    series
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let height = if max == 0 {
                0.0
            } else {
                point.count as f64 / max as f64 * plot_height
            };
            let x = PAD_LEFT + index as f64 * slot + (slot - width) / 2.0;
            let y = baseline - height;
            BarGeometry {
                index,
                x,
                y,
                width,
                height,
                center: x + width / 2.0,
                value_y: y - 6.0,
                label_y: baseline + 18.0,
                count: point.count,
                label: short_label(&point.label),
            }
        })
        .collect()
}

fn short_label(label: &str) -> String {
    if label.chars().count() <= LABEL_CHARS {
        label.to_string()
    } else {
        let head: String = label.chars().take(LABEL_CHARS - 1).collect();
        format!("{head}…")
    }
}
