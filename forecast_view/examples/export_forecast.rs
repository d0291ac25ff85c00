use forecast_view::align::need_layer;
use forecast_view::export::write_csv;
use forecast_view::{
    build_table, ChartSpec, DisplaySurface, NeedSeries, PredictionSet, SeriesLayer,
    SeriesToggleController, ViewConfig,
};
use std::io;

/// Prints layers instead of drawing them
struct ConsoleSurface;

impl DisplaySurface for ConsoleSurface {
    type Handle = String;

    fn add_layer(&mut self, layer: SeriesLayer) -> String {
        let points: Vec<String> = layer
            .points
            .iter()
            .map(|p| format!("({}, {:.1})", p.period, p.value))
            .collect();
        println!("+ {}: {}", layer.name, points.join(" "));
        layer.name
    }

    fn remove_layer(&mut self, handle: String) {
        println!("- {}", handle);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let needs = NeedSeries::new(vec![120.0, 135.0, 128.0, 150.0, 161.0, 158.0])?;
    let predictions = PredictionSet::from_pairs(vec![
        (3, vec![138.0, 146.0, 156.0]),
        (2, vec![131.5, 139.0, 155.5, 159.5]),
        (4, vec![147.0, 152.0, 160.0, 163.0, 166.0, 170.0, 171.5]),
    ])?;
    let config = ViewConfig::default();

    let mut surface = ConsoleSurface;
    surface.add_layer(need_layer(&needs, &config));

    let mut controller = SeriesToggleController::new(&needs, &predictions, &config);
    controller.select(3, &mut surface)?;
    controller.select(4, &mut surface)?;

    let chart = ChartSpec::new(&config, &needs, &predictions, controller.visible_keys())?;
    println!("{} (x up to {})", chart.title, chart.x_upper_bound);

    controller.deselect(3, &mut surface)?;
    controller.hide_all(&mut surface);

    println!("\n{}:", config.sheet_name);
    let table = build_table(&needs, &predictions, &config);
    write_csv(&table, io::stdout())?;

    Ok(())
}
