//! Procedural wealth-vs-income infographic.
//!
//! A fixed vector diagram with no inputs: a gold exponential wealth curve
//! climbing over a flat blue income line on a faint gridded field. Every
//! coordinate is a hand-authored constant, so two builds always produce
//! structurally identical trees.

use crate::markup::Element;

/// Logical canvas size, vertical 9:16 orientation.
const VIEW_WIDTH: u32 = 900;
const VIEW_HEIGHT: u32 = 1600;

/// Gridline positions, in canvas units.
const GRID_X: [u32; 5] = [150, 300, 450, 600, 750];
const GRID_Y: [u32; 7] = [200, 400, 600, 800, 1000, 1200, 1400];
const GRID_STROKE: &str = "rgba(255,255,255,0.06)";

/// Cubic composite path for the wealth curve, bottom-left to top-right with
/// accelerating curvature. Terminates at (760, 220), where the glow sits.
const WEALTH_PATH: &str = "M120 1300 C270 1280 420 1240 520 1070 C650 840 720 480 760 220";
const WEALTH_COLOR: &str = "var(--accent-gold)";

/// Flat income segment near the bottom of the canvas.
const INCOME_PATH: &str = "M120 1280 L780 1280";
const INCOME_COLOR: &str = "rgba(80,142,255,0.95)";
const INCOME_SHADOW_COLOR: &str = "rgba(35,66,133,0.95)";

const TITLE_ID: &str = "infographic-title";
const CHART_TITLE: &str =
    "Gold exponential curve labeled wealth contrasted with flat blue income line.";

/// Build the static comparative-curves diagram as an SVG element tree.
///
/// Parameterless and deterministic; the output carries a `<title>` plus
/// `role`/`aria-labelledby` wiring for assistive technology.
pub fn wealth_income_chart() -> Element {
    Element::new("svg")
        .attr("viewBox", format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}"))
        .attr("role", "img")
        .attr("aria-labelledby", TITLE_ID)
        .child(Element::new("title").attr("id", TITLE_ID).text(CHART_TITLE))
        .child(chart_defs())
        .child(
            Element::new("rect")
                .attr("width", VIEW_WIDTH.to_string())
                .attr("height", VIEW_HEIGHT.to_string())
                .attr("fill", "url(#grid)")
                .attr("opacity", "0.3"),
        )
        .child(
            Element::new("rect")
                .attr("width", VIEW_WIDTH.to_string())
                .attr("height", VIEW_HEIGHT.to_string())
                .attr("fill", "url(#gridlines)")
                .attr("opacity", "0.35"),
        )
        .child(
            Element::new("path")
                .attr("d", WEALTH_PATH)
                .attr("fill", "none")
                .attr("stroke", WEALTH_COLOR)
                .attr("stroke-width", "40")
                .attr("stroke-linecap", "round"),
        )
        .child(
            Element::new("path")
                .attr("d", INCOME_PATH)
                .attr("stroke", INCOME_COLOR)
                .attr("stroke-width", "46")
                .attr("stroke-linecap", "round"),
        )
        .child(
            // depth stroke directly beneath the income line
            Element::new("path")
                .attr("d", INCOME_PATH)
                .attr("stroke", INCOME_SHADOW_COLOR)
                .attr("stroke-width", "18")
                .attr("stroke-linecap", "round")
                .attr("opacity", "0.5"),
        )
        .child(
            Element::new("circle")
                .attr("cx", "760")
                .attr("cy", "220")
                .attr("r", "180")
                .attr("fill", "url(#wealth-glow)")
                .attr("opacity", "0.65"),
        )
        .child(series_label("WEALTH", "760", "210", "64", WEALTH_COLOR))
        .child(series_label("INCOME", "760", "1220", "54", INCOME_COLOR))
}

/// Gradients and the gridline pattern shared by the background rects.
fn chart_defs() -> Element {
    let mut gridlines = Element::new("pattern")
        .attr("id", "gridlines")
        .attr("width", VIEW_WIDTH.to_string())
        .attr("height", VIEW_HEIGHT.to_string())
        .attr("patternUnits", "userSpaceOnUse");
    for x in GRID_X {
        gridlines = gridlines.child(grid_path(format!("M{x} 0 L{x} {VIEW_HEIGHT}")));
    }
    for y in GRID_Y {
        gridlines = gridlines.child(grid_path(format!("M0 {y} L{VIEW_WIDTH} {y}")));
    }

    Element::new("defs")
        .child(
            Element::new("linearGradient")
                .attr("id", "grid")
                .attr("x1", "0")
                .attr("y1", "0")
                .attr("x2", "0")
                .attr("y2", "1")
                .child(gradient_stop("0%", "rgba(255,255,255,0.12)"))
                .child(gradient_stop("100%", "rgba(255,255,255,0.04)")),
        )
        .child(gridlines)
        .child(
            Element::new("radialGradient")
                .attr("id", "wealth-glow")
                .attr("cx", "0.8")
                .attr("cy", "0.2")
                .attr("r", "1")
                .child(gradient_stop("0%", "rgba(253, 220, 120, 0.55)"))
                .child(gradient_stop("40%", "rgba(253, 192, 46, 0.4)"))
                .child(gradient_stop("100%", "rgba(253, 192, 46, 0)")),
        )
}

fn grid_path(d: String) -> Element {
    Element::new("path")
        .attr("d", d)
        .attr("stroke", GRID_STROKE)
        .attr("stroke-width", "2")
}

fn gradient_stop(offset: &'static str, color: &'static str) -> Element {
    Element::new("stop")
        .attr("offset", offset)
        .attr("stop-color", color)
}

fn series_label(
    label: &'static str,
    x: &'static str,
    y: &'static str,
    font_size: &'static str,
    fill: &'static str,
) -> Element {
    Element::new("text")
        .attr("x", x)
        .attr("y", y)
        .attr("text-anchor", "end")
        .attr("font-size", font_size)
        .attr("fill", fill)
        .text(label)
}
