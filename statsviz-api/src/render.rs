use log::warn;
use serde::Serialize;
use statsviz_chart::{AxisScale, ChartData};
use std::path::{Path, PathBuf};
use tera::{Context, Tera};
use thiserror::Error;

const FALLBACK_TEMPLATE_NAME: &str = "chart.html";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to load template {}: {source}", path.display())]
    Load {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to render template: {0}")]
    Template(#[from] tera::Error),
    #[error("failed to encode chart data: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Renders the chart page template against uploaded chart data.
///
/// The template is read from disk on every call so it can be edited while
/// the server runs.
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    template_path: PathBuf,
}

impl ChartRenderer {
    pub fn new(template_path: impl Into<PathBuf>) -> Self {
        Self {
            template_path: template_path.into(),
        }
    }

    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    pub async fn render(&self, chart: &ChartData) -> Result<String, RenderError> {
        let source = tokio::fs::read_to_string(&self.template_path)
            .await
            .map_err(|source| RenderError::Load {
                path: self.template_path.clone(),
                source,
            })?;

        // Tera picks autoescaping from the template name's extension.
        let name = self
            .template_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| FALLBACK_TEMPLATE_NAME.to_string());

        let mut tera = Tera::default();
        tera.add_raw_template(&name, &source)?;

        Ok(tera.render(&name, &chart_context(chart)?)?)
    }
}

/// Template context: the chart data itself, `datasets_json` for embedding in
/// a script block, and `x_axis` / `y_axis` scales when there is anything to
/// scale.
fn chart_context(chart: &ChartData) -> Result<Context, RenderError> {
    let mut context = Context::from_serialize(chart)?;
    context.insert("datasets_json", &script_safe_json(&chart.datasets)?);

    for (name, bounds) in [("x_axis", chart.x_bounds()), ("y_axis", chart.y_bounds())] {
        let Some(bounds) = bounds else { continue };
        match AxisScale::from_bounds(bounds) {
            Ok(scale) => context.insert(name, &scale),
            Err(e) => warn!("skipping {name}: {e}"),
        }
    }

    Ok(context)
}

/// JSON that cannot close the surrounding `<script>` element.
fn script_safe_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(value)?.replace('<', "\\u003c"))
}
