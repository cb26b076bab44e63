//! Chart Component
//!
//! Area chart on an HTML5 canvas. Scaling and projection come from
//! `climate_dashboard::chart`; this module only paints.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use climate_dashboard::chart::{self, Bounds, ChartRow, ChartSeries, Frame};

/// Number of horizontal grid intervals
const GRID_INTERVALS: usize = 5;

/// Opacity of the area under each line
const AREA_ALPHA: f64 = 0.15;

/// Area chart with one filled line per series on a shared time axis
#[component]
pub fn AreaChart(
    /// Rows in x order
    rows: Vec<ChartRow>,
    /// Series to plot, in paint order
    series: &'static [ChartSeries],
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let point_count = rows.len().to_string();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &rows, series);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="256"
                class="w-full h-64"
                data-testid="chart-canvas"
                data-points=point_count
            />

            <ChartLegend series=series />
        </div>
    }
}

/// Legend showing series colors
#[component]
fn ChartLegend(series: &'static [ChartSeries]) -> impl IntoView {
    view! {
        <div class="flex justify-end flex-wrap gap-4 mt-2">
            {series
                .iter()
                .map(|s| view! {
                    <div class="flex items-center space-x-2" data-testid="legend-entry">
                        <div
                            class="w-3 h-3 rounded-full"
                            style=format!("background-color: {}", s.color().hex())
                        />
                        <span class="text-sm text-gray-600">{s.name()}</span>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, rows: &[ChartRow], series: &[ChartSeries]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let frame = Frame::new(canvas.width() as f64, canvas.height() as f64);
    ctx.clear_rect(0.0, 0.0, frame.width, frame.height);

    let Some(bounds) = Bounds::of(rows) else {
        ctx.set_fill_style(&"#6b7280".into()); // gray-500
        ctx.set_font("16px sans-serif");
        ctx.set_text_align("center");
        let _ = ctx.fill_text("No data", frame.width / 2.0, frame.height / 2.0);
        return;
    };

    draw_grid(&ctx, &frame, &bounds);

    for s in series {
        let points: Vec<(f64, f64)> = rows
            .iter()
            .enumerate()
            .filter_map(|(i, row)| {
                row.value(*s)
                    .map(|v| (frame.x(i, rows.len()), frame.y(v, &bounds)))
            })
            .collect();

        draw_series(&ctx, &frame, &points, s.color().hex());
    }

    // X-axis labels
    ctx.set_fill_style(&"#6b7280".into());
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("center");
    for (i, row) in rows.iter().enumerate() {
        let _ = ctx.fill_text(
            &chart::axis_label(row.x),
            frame.x(i, rows.len()),
            frame.height - 12.0,
        );
    }
}

/// Horizontal grid lines with y-axis labels
fn draw_grid(ctx: &CanvasRenderingContext2d, frame: &Frame, bounds: &Bounds) {
    ctx.set_stroke_style(&"#e5e7eb".into()); // gray-200
    ctx.set_line_width(1.0);
    ctx.set_fill_style(&"#6b7280".into());
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("right");

    for value in bounds.ticks(GRID_INTERVALS) {
        let y = frame.y(value, bounds);

        ctx.begin_path();
        ctx.move_to(frame.margin_left, y);
        ctx.line_to(frame.width - frame.margin_right, y);
        ctx.stroke();

        let _ = ctx.fill_text(&format!("{:.0}", value), frame.margin_left - 8.0, y + 4.0);
    }
}

/// Filled area, line and point markers for one series
fn draw_series(ctx: &CanvasRenderingContext2d, frame: &Frame, points: &[(f64, f64)], color: &str) {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return;
    };

    // Area down to the baseline
    ctx.set_fill_style(&color.into());
    ctx.set_global_alpha(AREA_ALPHA);
    ctx.begin_path();
    ctx.move_to(first.0, frame.baseline());
    for (x, y) in points {
        ctx.line_to(*x, *y);
    }
    ctx.line_to(last.0, frame.baseline());
    ctx.close_path();
    ctx.fill();
    ctx.set_global_alpha(1.0);

    // Line
    ctx.set_stroke_style(&color.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, (x, y)) in points.iter().enumerate() {
        if i == 0 {
            ctx.move_to(*x, *y);
        } else {
            ctx.line_to(*x, *y);
        }
    }
    ctx.stroke();

    // Points
    for (x, y) in points {
        ctx.begin_path();
        let _ = ctx.arc(*x, *y, 3.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }
}
