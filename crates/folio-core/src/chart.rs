//! Scatter-chart rendering from aggregated query results.

use std::ops::Range;
use std::path::Path;

use log::{error, info, warn};
use plotters::prelude::*;

use crate::{
    db::{self, Database},
    error::{ReportError, Result},
    table::DataTable,
};

/// Column the aggregation query must expose for the x axis.
pub const AGE_COLUMN: &str = "age_when_published";
/// Column the aggregation query must expose for the y axis.
pub const YEAR_COLUMN: &str = "year_published";

const CHART_SIZE: (u32, u32) = (1200, 600);
const TEAL: RGBColor = RGBColor(0, 128, 128);

/// Specialized extension trait for chart-rendering Results.
trait ChartResultExt<T> {
    /// Map drawing-backend errors into [`ReportError::Chart`].
    fn chart_context(self) -> Result<T>;
}

impl<T, E: std::fmt::Display> ChartResultExt<T> for std::result::Result<T, E> {
    fn chart_context(self) -> Result<T> {
        self.map_err(|e| ReportError::chart(e.to_string()))
    }
}

/// Renders a scatter plot from the query stored in `query_file`.
///
/// The query result must contain the [`AGE_COLUMN`] and [`YEAR_COLUMN`]
/// columns. When either is missing, a warning is logged and `Ok(false)`
/// is returned without rendering anything. On success the chart is
/// written as a PNG to `out_path` and `Ok(true)` is returned.
pub fn create_scatter_plot(db: &Database, query_file: &Path, out_path: &Path) -> Result<bool> {
    match scatter_from_query(db, query_file, out_path) {
        Ok(rendered) => Ok(rendered),
        Err(e) => {
            error!("Failed to create scatter plot: {e}");
            Err(e)
        }
    }
}

fn scatter_from_query(db: &Database, query_file: &Path, out_path: &Path) -> Result<bool> {
    let table = db.query_file_to_table(query_file)?;

    if !table.has_column(AGE_COLUMN) || !table.has_column(YEAR_COLUMN) {
        warn!(
            "Expected columns not found in {}",
            db::file_name(query_file)
        );
        return Ok(false);
    }

    render_scatter(&table, out_path)?;
    info!("Scatter plot written to {}", out_path.display());
    Ok(true)
}

fn render_scatter(table: &DataTable, out_path: &Path) -> Result<()> {
    let points = table
        .numeric_pairs(AGE_COLUMN, YEAR_COLUMN)
        .unwrap_or_default();
    let (x_range, y_range) = axis_ranges(&points);

    let root = BitMapBackend::new(out_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).chart_context()?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Year Published vs Age of Author", ("sans-serif", 28))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d(x_range, y_range)
        .chart_context()?;

    chart
        .configure_mesh()
        .x_desc("Age of Author When Published")
        .y_desc("Year Published")
        .bold_line_style(BLACK.mix(0.3))
        .light_line_style(BLACK.mix(0.1))
        .draw()
        .chart_context()?;

    chart
        .draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, TEAL.mix(0.7).filled())),
        )
        .chart_context()?;

    root.present().chart_context()?;
    Ok(())
}

/// Padded axis ranges around the point cloud. An empty result still gets
/// a drawable default range.
fn axis_ranges(points: &[(f64, f64)]) -> (Range<f64>, Range<f64>) {
    if points.is_empty() {
        return (0.0..1.0, 0.0..1.0);
    }

    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &(x, y) in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    (padded(x_min, x_max), padded(y_min, y_max))
}

fn padded(min: f64, max: f64) -> Range<f64> {
    let span = max - min;
    let pad = if span == 0.0 { 1.0 } else { span * 0.05 };
    (min - pad)..(max + pad)
}
