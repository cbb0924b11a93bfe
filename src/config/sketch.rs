use crate::edges::CannyThresholds;
use crate::select::SelectParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON configuration of the `sketch_tool` binary.
///
/// ```json
/// {
///   "input": "photo.jpg",
///   "region_mask": "subject.png",
///   "keep_mask": "details.png",
///   "edges": { "auto": true },
///   "select": { "budget_ratio": 0.3, "lambda_connect": 0.0625 },
///   "output": { "sketch_image": "out/sketch.png", "report_json": "out/report.json" }
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct SketchToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub region_mask: Option<PathBuf>,
    #[serde(default)]
    pub keep_mask: Option<PathBuf>,
    #[serde(default)]
    pub edges: EdgeConfig,
    #[serde(default)]
    pub select: SelectParams,
    pub output: SketchOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EdgeConfig {
    /// Derive thresholds with Otsu (inside the region mask when given).
    pub auto: bool,
    /// Explicit thresholds; used when `auto` is false.
    pub thresholds: CannyThresholds,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            auto: true,
            thresholds: CannyThresholds::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SketchOutputConfig {
    pub sketch_image: PathBuf,
    #[serde(default)]
    pub edges_image: Option<PathBuf>,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

pub fn parse_config(json: &str) -> Result<SketchToolConfig, String> {
    serde_json::from_str(json).map_err(|e| format!("Failed to parse config: {e}"))
}

pub fn load_config(path: &Path) -> Result<SketchToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("{} ({})", e, path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg = parse_config(r#"{ "input": "a.png", "output": { "sketch_image": "b.png" } }"#)
            .unwrap();
        assert_eq!(cfg.input, PathBuf::from("a.png"));
        assert!(cfg.edges.auto);
        assert_eq!(cfg.select, SelectParams::default());
        assert!(cfg.region_mask.is_none());
        assert!(cfg.output.report_json.is_none());
    }

    #[test]
    fn partial_select_section_keeps_other_defaults() {
        let cfg = parse_config(
            r#"{
                "input": "a.png",
                "keep_mask": "k.png",
                "edges": { "auto": false, "thresholds": { "low": 20, "high": 80 } },
                "select": { "budget_ratio": 0.6 },
                "output": { "sketch_image": "b.png", "edges_image": "e.png" }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.select.budget_ratio, 0.6);
        assert_eq!(cfg.select.lambda_connect, SelectParams::default().lambda_connect);
        assert!(!cfg.edges.auto);
        assert_eq!(cfg.edges.thresholds, CannyThresholds::new(20.0, 80.0));
        assert_eq!(cfg.keep_mask, Some(PathBuf::from("k.png")));
    }

    #[test]
    fn missing_output_is_an_error() {
        assert!(parse_config(r#"{ "input": "a.png" }"#).is_err());
    }
}
