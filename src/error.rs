use thiserror::Error;

use crate::core::ChartType;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("{operation} is not supported for chart type {chart_type:?}")]
    UnsupportedChartType {
        chart_type: ChartType,
        operation: &'static str,
    },
}
