use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;

use crate::relativity::{KinematicFactors, ScaleMode, map};

#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    pub control_input: f64,
    pub velocity_fraction: f64,
    pub gamma: f64,
    pub proper_time: f64,
    pub dilated_time: f64,
    pub proper_length: f64,
    pub contracted_length: f64,
}

impl DataPoint {
    pub fn at(control_input: f64, mode: ScaleMode, proper_time: f64, proper_length: f64) -> Self {
        let velocity_fraction = map(control_input, mode);
        let k = KinematicFactors::compute(velocity_fraction);
        Self {
            control_input,
            velocity_fraction,
            gamma: k.gamma,
            proper_time,
            dilated_time: proper_time * k.time_dilation,
            proper_length,
            contracted_length: proper_length * k.length_contraction,
        }
    }
}

/// Evenly spaced control inputs from 0 to 1 inclusive.
pub fn sweep(mode: ScaleMode, samples: usize, proper_time: f64, proper_length: f64) -> Vec<DataPoint> {
    match samples {
        0 => Vec::new(),
        1 => vec![DataPoint::at(0.0, mode, proper_time, proper_length)],
        n => (0..n)
            .map(|i| {
                let x = i as f64 / (n - 1) as f64;
                DataPoint::at(x, mode, proper_time, proper_length)
            })
            .collect(),
    }
}

pub fn export_csv(path: &Path, points: &[DataPoint]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record([
        "control_input",
        "velocity_fraction",
        "gamma",
        "proper_time",
        "dilated_time",
        "proper_length",
        "contracted_length",
    ])?;
    for dp in points {
        writer.write_record([
            format!("{:.4}", dp.control_input),
            format!("{:.6}", dp.velocity_fraction),
            format!("{:.6}", dp.gamma),
            format!("{:.3}", dp.proper_time),
            format!("{:.3}", dp.dilated_time),
            format!("{:.3}", dp.proper_length),
            format!("{:.3}", dp.contracted_length),
        ])?;
    }
    writer
        .flush()
        .with_context(|| format!("writing {}", path.display()))?;
    log::info!("wrote {} rows to {}", points.len(), path.display());
    Ok(())
}

pub fn plot_results(path: &Path, points: &[DataPoint]) -> Result<()> {
    anyhow::ensure!(!points.is_empty(), "nothing to plot");

    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let x_min = points.iter().map(|d| d.velocity_fraction).fold(f64::INFINITY, f64::min);
    let x_max = points.iter().map(|d| d.velocity_fraction).fold(f64::NEG_INFINITY, f64::max);
    let x_max = if x_max > x_min { x_max } else { x_min + 1e-4 };
    // Plot ratios against rest values so both curves share an axis.
    let y_max = points.iter().map(|d| d.gamma).fold(1.0, f64::max).ceil();

    let mut chart = ChartBuilder::on(&root)
        .caption("Relativity Effects", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Velocity (fraction of c)")
        .y_desc("Factor")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            points.iter().map(|d| (d.velocity_fraction, d.dilated_time / d.proper_time)),
            &BLUE,
        ))?
        .label("Time Dilation")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], &BLUE));

    chart
        .draw_series(LineSeries::new(
            points.iter()
                .map(|d| (d.velocity_fraction, d.contracted_length / d.proper_length)),
            &RED,
        ))?
        .label("Length Contraction")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], &RED));

    chart.configure_series_labels().border_style(&BLACK).draw()?;
    root.present()
        .with_context(|| format!("saving {}", path.display()))?;

    log::info!("plot saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_covers_scale_range() {
        for mode in [ScaleMode::Linear, ScaleMode::Logarithmic] {
            let points = sweep(mode, 11, 10.0, 100.0);
            assert_eq!(points.len(), 11);
            let (lo, hi) = mode.range();
            assert!((points[0].velocity_fraction - lo).abs() < 1e-12);
            assert!((points[10].velocity_fraction - hi).abs() < 1e-12);
            for dp in &points {
                assert!(dp.dilated_time >= dp.proper_time);
                assert!(dp.contracted_length <= dp.proper_length);
            }
        }
    }

    #[test]
    fn test_sweep_edge_sizes() {
        assert!(sweep(ScaleMode::Linear, 0, 10.0, 100.0).is_empty());
        assert_eq!(sweep(ScaleMode::Linear, 1, 10.0, 100.0).len(), 1);
    }

    #[test]
    fn test_export_csv_writes_header_and_rows() {
        let path = std::env::temp_dir().join(format!("lorentz-lab-{}.csv", std::process::id()));
        let points = sweep(ScaleMode::Linear, 3, 10.0, 100.0);
        export_csv(&path, &points).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(&headers[1], "velocity_fraction");
        let rows: Vec<_> = reader.records().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[1][1], "0.500000");
        std::fs::remove_file(&path).ok();
    }
}
