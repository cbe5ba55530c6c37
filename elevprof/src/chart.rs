//! Profile charts, on disk and in the terminal.

use anyhow::{anyhow, Error as AnyError};
use plotters::{coord::Shift, prelude::*};
use std::path::Path;
use terrain::{Profile, Summary};
use textplots::{Chart, Plot, Shape};

const SIZE: (u32, u32) = (1000, 400);

/// Matplotlib's default blue and orange.
const TERRAIN: RGBColor = RGBColor(31, 119, 180);
const ZERO_LEVEL: RGBColor = RGBColor(255, 127, 14);
const FOREST: RGBColor = RGBColor(0, 128, 0);

/// Renders `profile` to `path`, as SVG if the extension is `svg`,
/// otherwise as a bitmap.
pub fn render(path: &Path, profile: &Profile) -> Result<(), AnyError> {
    let summary = profile
        .summary()
        .ok_or_else(|| anyhow!("cannot chart an empty profile"))?;
    let is_svg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    if is_svg {
        draw(SVGBackend::new(path, SIZE).into_drawing_area(), profile, &summary)
    } else {
        draw(BitMapBackend::new(path, SIZE).into_drawing_area(), profile, &summary)
    }
}

/// The y axis always includes 0 so the filled areas have a floor.
fn y_range(profile: &Profile, summary: &Summary) -> (f64, f64) {
    let zero_max = profile.zero_level_m.iter().copied().fold(0.0, f64::max);
    let lo = summary.min_m.min(0.0);
    let hi = summary.max_m.max(zero_max).max(lo + 1.0);
    (lo, hi + (hi - lo) * 0.1)
}

fn draw<DB>(
    root: DrawingArea<DB, Shift>,
    profile: &Profile,
    summary: &Summary,
) -> Result<(), AnyError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let x_max = profile.distance_km().max(f64::EPSILON);
    let (y_min, y_max) = y_range(profile, summary);
    let distances = &profile.distances_km;

    let mut chart = ChartBuilder::on(&root)
        .margin(15)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(0.0..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Distance, km")
        .y_desc("Elevation, m")
        .x_label_formatter(&|v| format!("{v:.1}"))
        .y_label_formatter(&|v| format!("{v:.0}"))
        .draw()?;

    let terrain = AreaSeries::new(
        distances.iter().copied().zip(profile.corrected_elev_m.iter().copied()),
        0.0,
        TERRAIN.mix(0.1),
    )
    .border_style(TERRAIN);
    chart
        .draw_series(terrain)?
        .label("terrain")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], TERRAIN));

    // Canopy band between the bare and the forested profile.
    let canopy: Vec<(f64, f64)> = distances
        .iter()
        .copied()
        .zip(profile.forest_elev_m.iter().copied())
        .chain(
            distances
                .iter()
                .copied()
                .zip(profile.corrected_elev_m.iter().copied())
                .rev(),
        )
        .collect();
    chart
        .draw_series(std::iter::once(Polygon::new(canopy, FOREST.mix(0.3))))?
        .label("forest")
        .legend(|(x, y)| {
            Rectangle::new([(x, y - 4), (x + 20, y + 4)], FOREST.mix(0.3).filled())
        });

    let zero_level = AreaSeries::new(
        distances.iter().copied().zip(profile.zero_level_m.iter().copied()),
        0.0,
        ZERO_LEVEL.mix(0.1),
    )
    .border_style(ZERO_LEVEL);
    chart
        .draw_series(zero_level)?
        .label("conditional zero level")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], ZERO_LEVEL));

    for (name, value, color) in [
        ("min", summary.min_m, GREEN),
        ("max", summary.max_m, RED),
        ("mean", summary.mean_m, YELLOW),
    ] {
        chart
            .draw_series(LineSeries::new(
                [(0.0, value), (x_max, value)],
                color.stroke_width(2),
            ))?
            .label(format!("{name}: {value:.3} m"))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    let peak = (summary.max_distance_km, summary.max_m);
    let annotation = format!(
        "max x={:.3} km, y={:.3} m, k={:.2}",
        summary.max_distance_km, summary.max_m, summary.max_ratio
    );
    chart.draw_series(std::iter::once(Circle::new(peak, 4, BLACK.filled())))?;
    chart.draw_series(std::iter::once(Text::new(
        annotation,
        (peak.0, peak.1 + (y_max - y_min) * 0.04),
        ("sans-serif", 14).into_font().color(&BLACK),
    )))?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::LowerRight)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Plots the forest adjusted profile to the terminal.
pub fn display(profile: &Profile) {
    #[allow(clippy::cast_possible_truncation)]
    let plot_data: Vec<(f32, f32)> = profile
        .distances_km
        .iter()
        .zip(profile.forest_elev_m.iter())
        .map(|(distance, elev)| (*distance as f32, *elev as f32))
        .collect();
    #[allow(clippy::cast_possible_truncation)]
    let x_max = profile.distance_km() as f32;
    if plot_data.is_empty() || x_max <= 0.0 {
        return;
    }
    Chart::new(200, 60, 0.0, x_max)
        .lineplot(&Shape::Lines(&plot_data))
        .display();
}
