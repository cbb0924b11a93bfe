use edge_sketch::config::{load_config, SketchToolConfig};
use edge_sketch::image::io::{load_grayscale_image, load_mask, save_mask, save_raster_u8, write_json_file};
use edge_sketch::image::Mask;
use edge_sketch::pipeline::{autotune, run_sketch, SketchMasks};
use edge_sketch::session::SketchState;
use std::env;
use std::path::{Path, PathBuf};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let (width, height) = (gray.width(), gray.height());
    let region = load_optional_mask(config.region_mask.as_ref(), (width, height))?;
    let keep = load_optional_mask(config.keep_mask.as_ref(), (width, height))?;

    let mut state = SketchState::new(gray, config.edges.thresholds);
    if config.edges.auto {
        state = autotune(&state, region.as_ref()).map_err(|e| e.to_string())?;
    }

    let masks = SketchMasks {
        region: region.as_ref(),
        keep: keep.as_ref(),
    };
    let output = run_sketch(&state, masks, &config.select).map_err(|e| e.to_string())?;

    save_raster_u8(&output.sketch, &config.output.sketch_image)?;
    println!(
        "Saved sketch ({} of {} eligible edge pixels) to {}",
        output.selection.selected,
        output.selection.eligible,
        config.output.sketch_image.display()
    );

    write_extras(&config, &state, &output, masks)
}

fn write_extras(
    config: &SketchToolConfig,
    state: &SketchState,
    output: &edge_sketch::pipeline::SketchOutput,
    masks: SketchMasks<'_>,
) -> Result<(), String> {
    if let Some(path) = &config.output.edges_image {
        save_mask(state.edges(), path)?;
        println!("Saved edge mask to {}", path.display());
    }
    if let Some(path) = &config.output.report_json {
        let report = output.report(state, masks, &config.select);
        write_json_file(path, &report)?;
        println!("Saved report to {}", path.display());
    }
    Ok(())
}

fn load_optional_mask(
    path: Option<&PathBuf>,
    expected: (usize, usize),
) -> Result<Option<Mask>, String> {
    let Some(path) = path else {
        return Ok(None);
    };
    let mask = load_mask(path)?;
    if mask.dims() != expected {
        return Err(format!(
            "Mask {} is {:?} but the image is {:?}",
            path.display(),
            mask.dims(),
            expected
        ));
    }
    Ok(Some(mask))
}

fn usage() -> String {
    "Usage: sketch_tool <config.json>".to_string()
}
