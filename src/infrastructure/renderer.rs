//! Stacked-area chart rendering

use crate::domain::PivotTable;
use crate::error::{JournalChartError, Result};
#[cfg(not(feature = "ttf"))]
use crate::infrastructure::glyph_backend::GlyphTextBackend;
use crate::infrastructure::ChartConfig;
use chrono::NaiveDate;
use plotters::coord::combinators::BindKeyPoints;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::FontTransform;
use std::path::Path;

const FONT: &str = "sans-serif";
/// Half the width, in days, of the band drawn when the journal spans a single week
const SINGLE_WEEK_HALF_WIDTH: f64 = 2.8;

/// Image format, picked from the destination file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Svg,
    Bitmap,
}

impl ImageFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "svg" => Ok(ImageFormat::Svg),
            "png" | "bmp" | "jpg" | "jpeg" => Ok(ImageFormat::Bitmap),
            "" => Err(JournalChartError::Render(format!(
                "Output path has no extension: {}",
                path.display()
            ))),
            other => Err(JournalChartError::Render(format!(
                "Unsupported output extension: '{}'",
                other
            ))),
        }
    }
}

/// Chart title showing the total hours across every week and category
pub fn chart_title(total_hours: f64) -> String {
    format!("Weekly hours by category (total {:.2} h)", total_hours)
}

/// Draw `pivot` as a stacked-area chart and write it to `path`
pub fn render_chart(pivot: &PivotTable, path: &Path, size: ChartConfig) -> Result<()> {
    if pivot.is_empty() {
        return Err(JournalChartError::EmptyJournal);
    }

    let dimensions = (size.width, size.height);
    match ImageFormat::from_path(path)? {
        ImageFormat::Svg => {
            let root = SVGBackend::new(path, dimensions).into_drawing_area();
            draw_chart(root, pivot).map_err(|e| JournalChartError::Render(e.to_string()))
        }
        #[cfg(not(feature = "ttf"))]
        ImageFormat::Bitmap => {
            let backend = BitMapBackend::new(path, dimensions);
            let root = GlyphTextBackend::new(backend).into_drawing_area();
            draw_chart(root, pivot).map_err(|e| JournalChartError::Render(e.to_string()))
        }
        #[cfg(feature = "ttf")]
        ImageFormat::Bitmap => {
            let root = BitMapBackend::new(path, dimensions).into_drawing_area();
            draw_chart(root, pivot).map_err(|e| JournalChartError::Render(e.to_string()))
        }
    }
}

fn draw_chart<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    pivot: &PivotTable,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let weeks = pivot.weeks();
    let layers = pivot.stacked();
    let columns = x_positions(weeks);
    let (x_min, x_max) = x_range(weeks);
    let ticks: Vec<f64> = weeks.iter().map(|week| days_since(weeks, *week)).collect();
    let peak = layers
        .last()
        .map(|top| top.iter().copied().fold(0.0, f64::max))
        .unwrap_or(0.0);
    let y_max = if peak > 0.0 { peak * 1.05 } else { 1.0 };

    let mut chart = ChartBuilder::on(&root)
        .caption(chart_title(pivot.total()), (FONT, 24))
        .margin(20)
        .x_label_area_size(90)
        .y_label_area_size(60)
        .build_cartesian_2d((x_min..x_max).with_key_points(ticks), 0.0..y_max)?;

    let label_for = |x: &f64| week_label(weeks, *x);
    chart
        .configure_mesh()
        .x_labels(weeks.len())
        .x_label_formatter(&label_for)
        .x_label_style((FONT, 12).into_font().transform(FontTransform::Rotate90))
        .x_desc("Week")
        .y_desc("Hours")
        .draw()?;

    for (col, category) in pivot.categories().iter().enumerate() {
        let color = Palette99::pick(col).mix(0.85);
        let upper = &layers[col];
        let lower = |week: usize| if col == 0 { 0.0 } else { layers[col - 1][week] };

        let band: Vec<(f64, f64)> = columns
            .iter()
            .map(|&(x, week)| (x, upper[week]))
            .chain(columns.iter().rev().map(|&(x, week)| (x, lower(week))))
            .collect();

        chart
            .draw_series(std::iter::once(Polygon::new(band, color.filled())))?
            .label(category.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Days between the first week and `week`; the x coordinate of that week
fn days_since(weeks: &[NaiveDate], week: NaiveDate) -> f64 {
    weeks
        .first()
        .map(|first| (week - *first).num_days() as f64)
        .unwrap_or(0.0)
}

/// x coordinate of every drawn point paired with the week row it takes values from.
/// Gaps between weeks keep their length. A single week is widened into a band so
/// the area stays visible.
fn x_positions(weeks: &[NaiveDate]) -> Vec<(f64, usize)> {
    if weeks.len() == 1 {
        vec![(-SINGLE_WEEK_HALF_WIDTH, 0), (SINGLE_WEEK_HALF_WIDTH, 0)]
    } else {
        weeks
            .iter()
            .enumerate()
            .map(|(row, week)| (days_since(weeks, *week), row))
            .collect()
    }
}

fn x_range(weeks: &[NaiveDate]) -> (f64, f64) {
    match weeks.last() {
        Some(last) if weeks.len() > 1 => (0.0, days_since(weeks, *last)),
        _ => (-3.5, 3.5),
    }
}

/// Tick label for an axis position: the date of the week drawn there, blank elsewhere
fn week_label(weeks: &[NaiveDate], x: f64) -> String {
    weeks
        .iter()
        .find(|week| (days_since(weeks, **week) - x).abs() < 1e-6)
        .map(|week| week.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{summarize, Category, DerivedEntry, JournalEntry, WeekStart};
    use std::fs;
    use tempfile::TempDir;

    fn pivot(rows: &[(u32, u32, i64, &str)]) -> PivotTable {
        let derived: Vec<DerivedEntry> = rows
            .iter()
            .enumerate()
            .map(|(i, &(month, day, hours, label))| {
                let start = NaiveDate::from_ymd_opt(2024, month, day)
                    .unwrap()
                    .and_hms_opt(9, 0, 0)
                    .unwrap();
                let entry = JournalEntry::new(
                    i as u64 + 2,
                    start,
                    start + chrono::Duration::hours(hours),
                    Category::new(label).unwrap(),
                );
                DerivedEntry::from_entry(entry, WeekStart::Monday)
            })
            .collect();
        PivotTable::from_summaries(&summarize(&derived))
    }

    #[test]
    fn test_image_format_from_extension() {
        assert_eq!(ImageFormat::from_path(Path::new("out.svg")).unwrap(), ImageFormat::Svg);
        assert_eq!(ImageFormat::from_path(Path::new("out.PNG")).unwrap(), ImageFormat::Bitmap);
        assert_eq!(ImageFormat::from_path(Path::new("a/b.jpeg")).unwrap(), ImageFormat::Bitmap);
    }

    #[test]
    fn test_unsupported_extension() {
        let err = ImageFormat::from_path(Path::new("chart.txt")).unwrap_err();
        assert!(err.to_string().contains("'txt'"));
        assert!(ImageFormat::from_path(Path::new("chart")).is_err());
    }

    #[test]
    fn test_chart_title_two_decimals() {
        assert_eq!(chart_title(2.0), "Weekly hours by category (total 2.00 h)");
        assert_eq!(chart_title(10.0 / 3.0), "Weekly hours by category (total 3.33 h)");
    }

    fn weeks(dates: &[(u32, u32)]) -> Vec<NaiveDate> {
        dates
            .iter()
            .map(|&(month, day)| NaiveDate::from_ymd_opt(2024, month, day).unwrap())
            .collect()
    }

    #[test]
    fn test_week_labels_on_week_positions() {
        let weeks = weeks(&[(1, 1), (1, 8)]);
        assert_eq!(week_label(&weeks, 0.0), "2024-01-01");
        assert_eq!(week_label(&weeks, 7.0), "2024-01-08");
        assert_eq!(week_label(&weeks, 1.0), "");
        assert_eq!(week_label(&weeks, -7.0), "");
        assert_eq!(week_label(&weeks, 14.0), "");
    }

    #[test]
    fn test_gap_weeks_spaced_by_date() {
        // No entries between 8 Jan and 4 Mar
        let weeks = weeks(&[(1, 1), (1, 8), (3, 4)]);
        assert_eq!(x_positions(&weeks), vec![(0.0, 0), (7.0, 1), (63.0, 2)]);
        assert_eq!(x_range(&weeks), (0.0, 63.0));
        assert_eq!(week_label(&weeks, 63.0), "2024-03-04");
    }

    #[test]
    fn test_single_week_is_widened() {
        let weeks = weeks(&[(1, 1)]);
        assert_eq!(x_positions(&weeks), vec![(-2.8, 0), (2.8, 0)]);
        assert_eq!(x_range(&weeks), (-3.5, 3.5));
        assert_eq!(week_label(&weeks, 0.0), "2024-01-01");
    }

    #[test]
    fn test_render_svg() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("chart.svg");
        let table = pivot(&[(1, 1, 2, "work"), (1, 2, 1, "reading"), (1, 9, 3, "work")]);

        render_chart(&table, &path, ChartConfig::default()).unwrap();

        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Weekly hours by category (total 6.00 h)"));
        assert!(svg.contains("reading"));
        assert!(svg.contains("2024-01-08"));
    }

    #[test]
    fn test_render_png() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("chart.png");
        let table = pivot(&[(1, 1, 2, "work"), (1, 2, 1, "reading"), (3, 4, 3, "work")]);

        render_chart(&table, &path, ChartConfig::default()).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"\x89PNG"));
    }

    #[test]
    fn test_render_bmp_and_jpeg() {
        let temp = TempDir::new().unwrap();
        let table = pivot(&[(1, 1, 2, "work")]);

        for name in ["chart.bmp", "chart.jpg"] {
            let path = temp.path().join(name);
            render_chart(&table, &path, ChartConfig::default()).unwrap();
            assert!(fs::metadata(&path).unwrap().len() > 0);
        }
    }

    #[test]
    fn test_render_empty_pivot_fails() {
        let temp = TempDir::new().unwrap();
        let err = render_chart(
            &PivotTable::default(),
            &temp.path().join("chart.svg"),
            ChartConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, JournalChartError::EmptyJournal));
    }

    #[test]
    fn test_render_rejects_unknown_extension_before_writing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("chart.pdf");
        let table = pivot(&[(1, 1, 2, "work")]);

        assert!(render_chart(&table, &path, ChartConfig::default()).is_err());
        assert!(!path.exists());
    }
}
