// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use std::io::Cursor;
use std::path::Path;

use skia_safe as skia;

use crate::error::RenderError;
use crate::grid::{format_tick, linspace};
use crate::scale::PlotScale;
use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, WIDTH, HEIGHT};
use crate::view::ViewState;
use crate::Axis;

/// Vertical grid lines / x ticks.
const X_TICKS: usize = 9;
/// Horizontal grid lines / y ticks.
const Y_TICKS: usize = 6;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Title, axis labels and tick values. Off gives font-independent pixels.
    pub draw_labels: bool,
    pub grid: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
            grid: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: Option<String>,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: None,
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axis ranges to the data, keeping the axis labels.
    pub fn autoscale_axes(&mut self, margin_frac: f64) {
        ViewState::from_chart(self, margin_frac).apply_to_chart(self);
    }

    /// Render into a tightly packed, unpremultiplied RGBA8 buffer.
    /// Returns `(pixels, width, height, stride)`.
    ///
    /// The raster surface lives only for the duration of this call.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize), RenderError> {
        let (width, height) = (opts.width.max(1), opts.height.max(1));
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(RenderError::Surface { width, height })?;

        self.draw(surface.canvas(), width, height, opts);

        let info = skia::ImageInfo::new(
            (width, height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = width as usize * 4;
        let mut pixels = vec![0u8; stride * height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::ReadPixels);
        }
        Ok((pixels, width as u32, height as u32, stride))
    }

    /// Render and encode as PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        let (pixels, w, h, _stride) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w, h, pixels).ok_or(RenderError::ReadPixels)?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png)?;
        Ok(out.into_inner())
    }

    /// Render the chart to a PNG at `output_png_path`, replacing any existing file.
    /// The parent directory must already exist.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<Path>,
    ) -> Result<(), RenderError> {
        let path = output_png_path.as_ref();
        let data = self.render_to_png_bytes(opts)?;
        std::fs::write(path, data).map_err(|source| RenderError::Io { path: path.to_path_buf(), source })
    }

    fn draw(&self, canvas: &skia::Canvas, width: i32, height: i32, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        // Paddings & plot rect
        let plot_left = opts.insets.left as i32;
        let plot_right = (width - opts.insets.right as i32).max(plot_left + 1);
        let plot_top = opts.insets.top as i32;
        let plot_bottom = (height - opts.insets.bottom as i32).max(plot_top + 1);
        let scale = PlotScale::new((plot_left, plot_top, plot_right, plot_bottom), &self.x_axis, &self.y_axis);

        if opts.grid {
            draw_grid(canvas, &scale, theme);
        }
        draw_axes(canvas, &scale, theme);

        // Series, clipped to the plot area
        canvas.save();
        let clip = skia::Rect::from_ltrb(scale.left_px, scale.top_px, scale.right_px, scale.bottom_px);
        canvas.clip_rect(clip, skia::ClipOp::Intersect, true);
        for s in &self.series {
            draw_line_series(canvas, &scale, theme, s);
        }
        canvas.restore();

        if opts.draw_labels {
            let text = TextShaper::new();
            draw_tick_labels(canvas, &text, &scale, theme);
            draw_axis_labels(canvas, &text, &scale, theme, &self.x_axis, &self.y_axis);
            if let Some(title) = &self.title {
                let cx = (scale.left_px + scale.right_px) * 0.5;
                text.draw_centered(canvas, title, cx, scale.top_px - 18.0, 18.0, theme.axis_label);
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, scale: &PlotScale, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (l, t, r, b) = (scale.left_px, scale.top_px, scale.right_px, scale.bottom_px);
    // verticals
    for x in linspace(l as f64, r as f64, X_TICKS) {
        canvas.draw_line((x as f32, t), (x as f32, b), &paint);
    }
    // horizontals
    for y in linspace(t as f64, b as f64, Y_TICKS) {
        canvas.draw_line((l, y as f32), (r, y as f32), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, scale: &PlotScale, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    let (l, t, r, b) = (scale.left_px, scale.top_px, scale.right_px, scale.bottom_px);
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);
}

fn draw_tick_labels(canvas: &skia::Canvas, text: &TextShaper, scale: &PlotScale, theme: &Theme) {
    let size = 12.0;
    let x_step = (scale.x_max - scale.x_min) / (X_TICKS - 1) as f64;
    for v in linspace(scale.x_min, scale.x_max, X_TICKS) {
        let px = scale.to_px_x(v);
        text.draw_centered(canvas, &format_tick(v, x_step), px, scale.bottom_px + 18.0, size, theme.tick);
    }
    let y_step = (scale.y_max - scale.y_min) / (Y_TICKS - 1) as f64;
    for v in linspace(scale.y_min, scale.y_max, Y_TICKS) {
        let py = scale.to_px_y(v);
        text.draw_right(canvas, &format_tick(v, y_step), scale.left_px - 6.0, py + 4.0, size, theme.tick);
    }
}

fn draw_axis_labels(
    canvas: &skia::Canvas,
    text: &TextShaper,
    scale: &PlotScale,
    theme: &Theme,
    x: &Axis,
    y: &Axis,
) {
    let size = 14.0;
    let cx = (scale.left_px + scale.right_px) * 0.5;
    text.draw_centered(canvas, &x.label, cx, scale.bottom_px + 44.0, size, theme.axis_label);

    // Y label reads bottom-to-top along the left edge.
    let cy = (scale.top_px + scale.bottom_px) * 0.5;
    canvas.save();
    canvas.translate((scale.left_px - 64.0, cy));
    canvas.rotate(-90.0, None);
    text.draw_centered(canvas, &y.label, 0.0, 0.0, size, theme.axis_label);
    canvas.restore();
}

fn draw_line_series(canvas: &skia::Canvas, scale: &PlotScale, theme: &Theme, series: &Series) {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(theme.line_stroke);

    // Points are joined in insertion order; non-finite values leave a gap.
    for run in series.finite_runs() {
        if run.len() < 2 {
            continue;
        }
        let pts: Vec<skia::Point> = run
            .iter()
            .map(|&(x, y)| skia::Point::new(scale.to_px_x(x), scale.to_px_y(y)))
            .collect();
        canvas.draw_points(skia::canvas::PointMode::Polygon, &pts, &stroke);
    }
}
