use crate::domain::PieChart;
use maud::{html, Markup};
use std::f64::consts::PI;

const PALETTE: [&str; 10] = [
    "#524ed2", "#10b981", "#f59e0b", "#ef4444", "#3b82f6", "#8b5cf6", "#14b8a6", "#f97316",
    "#ec4899", "#6b7280",
];

const SIZE: f64 = 300.0;
const RADIUS: f64 = 130.0;
const HOLE: f64 = 0.3;

fn point(angle: f64) -> (f64, f64) {
    let c = SIZE / 2.0;
    // Start at 12 o'clock, go clockwise.
    let a = angle - PI / 2.0;
    (c + RADIUS * a.cos(), c + RADIUS * a.sin())
}

/// SVG path for the wedge between two angles (radians).
pub fn wedge_path(start: f64, end: f64) -> String {
    let c = SIZE / 2.0;
    let (x1, y1) = point(start);
    let (x2, y2) = point(end);
    let large_arc = if end - start > PI { 1 } else { 0 };
    format!(
        "M {c:.2} {c:.2} L {x1:.2} {y1:.2} A {RADIUS:.2} {RADIUS:.2} 0 {large_arc} 1 {x2:.2} {y2:.2} Z"
    )
}

pub fn pie_chart(chart: &PieChart) -> Markup {
    let total = chart.total();
    let c = SIZE / 2.0;

    let mut start = 0.0;
    let wedges: Vec<(String, &str)> = chart
        .slices
        .iter()
        .enumerate()
        .map(|(i, slice)| {
            let sweep = if total == 0 {
                0.0
            } else {
                2.0 * PI * slice.count as f64 / total as f64
            };
            let path = wedge_path(start, start + sweep);
            start += sweep;
            (path, PALETTE[i % PALETTE.len()])
        })
        .collect();

    html! {
        figure class="chart" {
            figcaption { strong { (chart.title) } }
            svg
                xmlns="http://www.w3.org/2000/svg"
                width=(SIZE)
                height=(SIZE)
                viewBox=(format!("0 0 {SIZE} {SIZE}"))
                role="img"
                aria-label=(chart.title)
            {
                @if chart.slices.len() == 1 {
                    // A single 360° arc degenerates; draw the full disc instead.
                    circle cx=(c) cy=(c) r=(RADIUS) fill=(PALETTE[0]) {}
                } @else {
                    @for (d, color) in &wedges {
                        path d=(d) fill=(color) stroke="#fff" stroke-width="1" {}
                    }
                }
                circle cx=(c) cy=(c) r=(RADIUS * HOLE) fill="#fff" {}
            }
            table class="data legend" {
                thead { tr { th { "Label" } th { "Count" } th { "Share" } } }
                tbody {
                    @for (i, slice) in chart.slices.iter().enumerate() {
                        tr {
                            td {
                                span class="swatch" style=(format!("background:{}", PALETTE[i % PALETTE.len()])) {}
                                (slice.label)
                            }
                            td { (slice.count) }
                            td { (format!("{:.1}%", slice.percentage)) }
                        }
                    }
                }
            }
        }
    }
}
