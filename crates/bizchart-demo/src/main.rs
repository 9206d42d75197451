// File: crates/bizchart-demo/src/main.rs
// Summary: Demo builds (or loads from CSV) a business dataset and renders line and bar charts to PNGs.

use anyhow::{bail, Context, Result};
use bizchart_core::{Chart, ChartConfig, Dataset, MarkerChange, Point, Series};
use bizchart_render_skia::render_to_png;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Line,
    Bar,
    Both,
}

struct Args {
    kind: Kind,
    input: Option<PathBuf>,
    hover: Option<Point>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = parse_args(std::env::args().skip(1))?;

    let dataset = match &args.input {
        Some(path) => load_table_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?,
        None => company_performance()?,
    };
    info!(
        series = dataset.series().len(),
        categories = dataset.category_count(),
        interval = ?dataset.interval(),
        "dataset ready"
    );

    let stem = args
        .input
        .as_deref()
        .and_then(|p| p.file_stem())
        .and_then(|s| s.to_str())
        .unwrap_or("company_performance")
        .to_string();

    let mut config = ChartConfig::default();
    config.set_title(dataset.title().unwrap_or("Company Performance"));
    config.set_sub_grid_counts(0, 10);

    if matches!(args.kind, Kind::Line | Kind::Both) {
        let mut chart = Chart::line(config.clone());
        chart.set_dataset(dataset.clone());
        let out = out_name_with(&stem, "line");
        render_to_png(&mut chart, &out)?;
        println!("Wrote {}", out.display());

        if let Some(data) = chart.dataset_mut() {
            data.set_area(true);
        }
        let out_area = out_name_with(&stem, "area");
        render_to_png(&mut chart, &out_area)?;
        println!("Wrote {}", out_area.display());

        if let Some(cursor) = args.hover {
            report_hover(&mut chart, cursor, &out_name_with(&stem, "hover"))?;
        }
    }

    if matches!(args.kind, Kind::Bar | Kind::Both) {
        let mut chart = Chart::bar(config);
        chart.set_dataset(dataset);
        let out = out_name_with(&stem, "bar");
        render_to_png(&mut chart, &out)?;
        println!("Wrote {}", out.display());
    }

    Ok(())
}

/// `[line|bar|both] [table.csv] [--hover X,Y]`, in any order.
fn parse_args(raw: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args { kind: Kind::Both, input: None, hover: None };
    let mut raw = raw.peekable();
    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "line" => args.kind = Kind::Line,
            "bar" => args.kind = Kind::Bar,
            "both" => args.kind = Kind::Both,
            "--hover" => {
                let value = raw.next().context("--hover needs X,Y")?;
                args.hover = Some(parse_point(&value)?);
            }
            other if other.starts_with("--") => bail!("unknown option: {other}"),
            path => args.input = Some(PathBuf::from(path)),
        }
    }
    Ok(args)
}

fn parse_point(s: &str) -> Result<Point> {
    let (x, y) = s.split_once(',').with_context(|| format!("expected X,Y, got '{s}'"))?;
    let x = x.trim().parse::<f64>().with_context(|| format!("bad X in '{s}'"))?;
    let y = y.trim().parse::<f64>().with_context(|| format!("bad Y in '{s}'"))?;
    Ok(Point::new(x, y))
}

/// Move the cursor over the line chart and render the highlighted state.
fn report_hover(chart: &mut Chart, cursor: Point, out: &Path) -> Result<()> {
    if let MarkerChange::Show(_) = chart.hover(cursor) {
        if let (Some(hit), Some(data)) = (chart.hovered(), chart.dataset()) {
            let name = data.series()[hit.series].title().unwrap_or("?");
            println!("Hover ({}, {}) -> series '{}' point #{}", cursor.x, cursor.y, name, hit.index);
        }
        render_to_png(chart, out)?;
        println!("Wrote {}", out.display());
    } else {
        println!("Hover ({}, {}) -> no point", cursor.x, cursor.y);
    }
    Ok(())
}

/// The built-in "Company Performance" table.
fn company_performance() -> Result<Dataset> {
    let mut d = Dataset::new();
    d.set_title("Company Performance");
    d.set_absciss(Series::with_values([2004.0, 2005.0, 2006.0, 2007.0]).titled("Year"));
    d.append(Series::with_values([1000.0, 1170.0, 660.0, 1030.0]).titled("Sales"))?;
    d.append(Series::with_values([400.0, 460.0, 1120.0, 540.0]).titled("Expenses"))?;
    d.set_ymin(0.0);
    Ok(d)
}

/// Load a data table: header row, first column is the abscissa, every other column a series.
fn load_table_csv(path: &Path) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();
    if headers.len() < 2 {
        bail!("need an abscissa column and at least one series column, found {}", headers.len());
    }

    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        for (col, column) in columns.iter_mut().enumerate() {
            let cell = rec.get(col).unwrap_or("");
            let value = cell
                .parse::<f64>()
                .with_context(|| format!("row {}, column '{}': not a number: '{}'", row + 1, headers[col], cell))?;
            column.push(value);
        }
    }

    let mut d = Dataset::new();
    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
        d.set_title(stem.replace('_', " "));
    }
    let mut columns = columns.into_iter().zip(headers);
    if let Some((xs, name)) = columns.next() {
        d.set_absciss(Series::with_values(xs).titled(name));
    }
    for (values, name) in columns {
        if let Err(e) = d.append(Series::with_values(values).titled(name.clone())) {
            warn!(column = %name, error = %e, "skipping column");
        }
    }
    if d.series().is_empty() {
        bail!("no usable series in {}", path.display());
    }
    Ok(d)
}

/// Produce output file name like target/out/chart_<stem>_<suffix>.png
fn out_name_with(stem: &str, suffix: &str) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    if stem.is_empty() {
        out.push(format!("chart_{}.png", suffix));
    } else {
        out.push(format!("chart_{}_{}.png", stem, suffix));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Result<Args> { parse_args(v.iter().map(|s| s.to_string())) }

    #[test]
    fn defaults_render_both_kinds() {
        let a = args(&[]).unwrap();
        assert_eq!(a.kind, Kind::Both);
        assert!(a.input.is_none() && a.hover.is_none());
    }

    #[test]
    fn kind_path_and_hover_in_any_order() {
        let a = args(&["--hover", "15, 110", "sales.csv", "line"]).unwrap();
        assert_eq!(a.kind, Kind::Line);
        assert_eq!(a.input, Some(PathBuf::from("sales.csv")));
        assert_eq!(a.hover, Some(Point::new(15.0, 110.0)));
    }

    #[test]
    fn malformed_options_are_errors() {
        assert!(args(&["--hover"]).is_err());
        assert!(args(&["--hover", "15"]).is_err());
        assert!(args(&["--width", "3"]).is_err());
    }

    #[test]
    fn builtin_table_matches_company_performance() {
        let d = company_performance().unwrap();
        assert_eq!(d.category_count(), 4);
        assert_eq!(d.interval(), Some((0.0, 1170.0)));
    }

    #[test]
    fn csv_table_loads_columns_as_series() {
        let dir = std::env::temp_dir().join("bizchart_demo_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("quarterly_sales.csv");
        std::fs::write(&path, "Year,Sales,Expenses\n2004,1000,400\n2005,1170,460\n").unwrap();

        let d = load_table_csv(&path).unwrap();
        assert_eq!(d.title(), Some("quarterly sales"));
        assert_eq!(d.absciss().map(|a| a.values().to_vec()), Some(vec![2004.0, 2005.0]));
        assert_eq!(d.series().len(), 2);
        assert_eq!(d.series()[1].title(), Some("Expenses"));
    }

    #[test]
    fn csv_rejects_non_numeric_cells() {
        let dir = std::env::temp_dir().join("bizchart_demo_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.csv");
        std::fs::write(&path, "Year,Sales\n2004,lots\n").unwrap();
        assert!(load_table_csv(&path).is_err());
    }
}
