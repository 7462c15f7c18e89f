//! PNG chart renderer.
//!
//! Curve charts put quantity on the x axis and price on the y axis.
//! File names are `<kind>-<YYYYmmdd-HHMMSS-mmm>-<n>.png`; `n` is a
//! per-renderer counter, so concurrent renders never share a name.

use super::canvas::{BLUE, Canvas, GREEN, ORANGE, RED, Range};
use chrono::Local;
use ecobot_application::ports::chart_renderer::{ChartRenderer, RenderError};
use ecobot_domain::{ChartKind, ChartSpec, CostCurves, LinearCurve};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

const CURVE_SAMPLES: usize = 200;

/// Chart renderer writing PNG files into one output directory.
pub struct PngChartRenderer {
    output_dir: PathBuf,
    width: u32,
    height: u32,
    counter: AtomicU64,
}

impl PngChartRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            width: 960,
            height: 640,
            counter: AtomicU64::new(0),
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn next_path(&self, kind: ChartKind) -> PathBuf {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        let stamp = Local::now().format("%Y%m%d-%H%M%S-%3f");
        self.output_dir
            .join(format!("{}-{}-{}.png", kind.file_stem(), stamp, n))
    }

    fn draw(&self, spec: &ChartSpec) -> Canvas {
        match spec {
            ChartSpec::Demand(curve) => self.draw_curves(spec, &[(*curve, BLUE)]),
            ChartSpec::Supply(curve) => self.draw_curves(spec, &[(*curve, ORANGE)]),
            ChartSpec::SupplyDemand { demand, supply } => {
                self.draw_curves(spec, &[(*demand, BLUE), (*supply, ORANGE)])
            }
            ChartSpec::Cost(cost) => self.draw_cost(cost),
            ChartSpec::Series(values) => self.draw_series(values),
        }
    }

    fn draw_curves(&self, spec: &ChartSpec, curves: &[(LinearCurve, image::Rgb<u8>)]) -> Canvas {
        let (p_min, p_max) = spec.price_range().unwrap_or((0.0, 100.0));
        let prices: Vec<f64> = (0..=CURVE_SAMPLES)
            .map(|i| p_min + (p_max - p_min) * i as f64 / CURVE_SAMPLES as f64)
            .collect();

        let lines: Vec<(Vec<(f64, f64)>, image::Rgb<u8>)> = curves
            .iter()
            .map(|(curve, color)| {
                let points = prices
                    .iter()
                    .map(|p| (curve.quantity_at(*p), *p))
                    .collect();
                (points, *color)
            })
            .collect();

        let quantities = lines
            .iter()
            .flat_map(|(points, _)| points.iter().map(|(q, _)| *q))
            .chain(std::iter::once(0.0));
        let x = Range::padded(quantities);
        let y = Range::new(p_min, p_max);

        let mut canvas = Canvas::new(self.width, self.height, x, y);
        for (points, color) in &lines {
            canvas.polyline(points, *color);
        }

        if let Some(eq) = spec.equilibrium()
            && y.contains(eq.price)
            && x.contains(eq.quantity)
        {
            canvas.guides(eq.quantity, eq.price, RED);
            canvas.marker(eq.quantity, eq.price, RED);
        }
        canvas
    }

    fn draw_cost(&self, cost: &CostCurves) -> Canvas {
        let marginal: Vec<(f64, f64)> = cost.quantities().map(|q| (q, cost.marginal(q))).collect();
        let average: Vec<(f64, f64)> = cost.quantities().map(|q| (q, cost.average(q))).collect();

        let x = Range::padded(marginal.iter().map(|(q, _)| *q));
        let y = Range::padded(
            marginal
                .iter()
                .chain(average.iter())
                .map(|(_, c)| *c)
                .chain(std::iter::once(0.0)),
        );

        let mut canvas = Canvas::new(self.width, self.height, x, y);
        canvas.polyline(&average, BLUE);
        canvas.polyline(&marginal, ORANGE);
        canvas
    }

    fn draw_series(&self, values: &[f64]) -> Canvas {
        let points: Vec<(f64, f64)> = values
            .iter()
            .enumerate()
            .map(|(i, v)| (i as f64, *v))
            .collect();

        let x = Range::padded(points.iter().map(|(i, _)| *i));
        let y = Range::padded(values.iter().copied());

        let mut canvas = Canvas::new(self.width, self.height, x, y);
        canvas.polyline(&points, GREEN);
        for (i, v) in &points {
            canvas.marker(*i, *v, GREEN);
        }
        canvas
    }
}

impl ChartRenderer for PngChartRenderer {
    fn render(&self, spec: &ChartSpec) -> Result<PathBuf, RenderError> {
        spec.validate()?;

        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.next_path(spec.kind());

        self.draw(spec)
            .into_image()
            .save(&path)
            .map_err(|e| RenderError::Image(e.to_string()))?;

        debug!(kind = %spec.kind(), path = %path.display(), "Chart saved");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecobot_domain::ChartError;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn renderer(dir: &Path) -> PngChartRenderer {
        PngChartRenderer::new(dir).with_size(320, 240)
    }

    fn file_name(path: &Path) -> String {
        path.file_name().unwrap().to_string_lossy().into_owned()
    }

    #[test]
    fn test_each_kind_writes_named_png() {
        let dir = tempfile::tempdir().unwrap();
        let r = renderer(dir.path());
        let specs = [
            ChartSpec::Demand(LinearCurve::DEFAULT_DEMAND),
            ChartSpec::Supply(LinearCurve::DEFAULT_SUPPLY),
            ChartSpec::SupplyDemand {
                demand: LinearCurve::DEFAULT_DEMAND,
                supply: LinearCurve::DEFAULT_SUPPLY,
            },
            ChartSpec::Cost(CostCurves::default()),
            ChartSpec::Series(vec![10.0, 12.0, 11.0, 15.0]),
        ];

        for spec in &specs {
            let path = r.render(spec).unwrap();
            let name = file_name(&path);
            assert!(name.starts_with(&format!("{}-", spec.kind().file_stem())));
            assert!(name.ends_with(".png"));
            assert!(path.exists());

            let image = image::open(&path).unwrap();
            assert_eq!(image.width(), 320);
        }
    }

    #[test]
    fn test_file_name_has_timestamp_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let path = renderer(dir.path())
            .render(&ChartSpec::Series(vec![1.0, 2.0]))
            .unwrap();
        // serie-YYYYmmdd-HHMMSS-mmm-1.png
        let name = file_name(&path);
        let parts: Vec<&str> = name.trim_end_matches(".png").split('-').collect();
        assert_eq!(parts[0], "serie");
        assert_eq!(parts[1].len(), 8);
        assert_eq!(parts[2].len(), 6);
        assert_eq!(parts[3].len(), 3);
        assert_eq!(parts[4], "1");
    }

    #[test]
    fn test_invalid_parameters_write_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("charts");
        let err = renderer(&out)
            .render(&ChartSpec::Demand(LinearCurve::new(100.0, 1.0)))
            .unwrap_err();
        assert!(matches!(
            err,
            RenderError::InvalidParameters(ChartError::DemandSlope(_))
        ));
        assert!(!out.exists());
    }

    #[test]
    fn test_concurrent_renders_get_distinct_paths() {
        let dir = tempfile::tempdir().unwrap();
        let r = Arc::new(renderer(dir.path()));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let r = Arc::clone(&r);
                std::thread::spawn(move || {
                    r.render(&ChartSpec::Supply(LinearCurve::DEFAULT_SUPPLY))
                        .unwrap()
                })
            })
            .collect();
        let paths: HashSet<PathBuf> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(paths.len(), 8);
    }
}
