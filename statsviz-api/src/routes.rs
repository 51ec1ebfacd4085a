use crate::error::ApiError;
use crate::form::UploadField;
use crate::render::ChartRenderer;
use axum::{Router, extract::State, response::Html, routing::any};
use log::{debug, warn};
use statsviz_chart::{ChartData, StatisticsRecord};
use std::path::Path;
use tower_http::services::ServeDir;

pub const UPLOAD_PATH: &str = "/uploadData";
pub const VISUALIZE_PATH: &str = "/visualizeData";
pub const STATIC_PREFIX: &str = "/static";

/// Build the application router. Both handlers answer any method.
pub fn router(renderer: ChartRenderer, static_dir: &Path) -> Router {
    Router::new()
        .route(UPLOAD_PATH, any(upload_data))
        .route(VISUALIZE_PATH, any(visualize_data))
        .nest_service(STATIC_PREFIX, ServeDir::new(static_dir))
        .with_state(renderer)
}

async fn upload_data(
    State(renderer): State<ChartRenderer>,
    UploadField(body): UploadField,
) -> Result<Html<String>, ApiError> {
    let records: Vec<StatisticsRecord> = serde_json::from_str(&body)?;
    debug!("Received {} statistics records", records.len());

    let chart = ChartData::from_records(records);
    for dataset in &chart.datasets {
        if dataset.data_x.len() != dataset.data_y.len() {
            warn!(
                "Series {:?} has {} timestamps and {} values, only {} points pair up",
                dataset.label,
                dataset.data_x.len(),
                dataset.data_y.len(),
                dataset.point_count()
            );
        }
    }

    let page = renderer.render(&chart).await?;

    Ok(Html(page))
}

async fn visualize_data() -> &'static str {
    "visualize data"
}
