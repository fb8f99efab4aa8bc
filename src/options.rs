use dotfield_core::{FieldConfig, Palette};
use serde::Deserialize;

/// Constructor options: every field option at the top level plus an optional
/// `palette` object.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SurfaceOptions {
    #[serde(flatten)]
    pub field: FieldConfig,
    pub palette: Palette,
}

impl SurfaceOptions {
    pub fn parse(json: Option<&str>) -> anyhow::Result<Self> {
        let options = match json.map(str::trim) {
            None | Some("") => SurfaceOptions::default(),
            Some(text) => serde_json::from_str(text)?,
        };
        options.field.validate()?;
        Ok(options)
    }
}
