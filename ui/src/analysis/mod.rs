mod chart;
pub use chart::NullValueChart;

mod overview;
pub use overview::DataOverview;

mod summary;
pub use summary::DatasetSummary;

use api::AnalysisResponse;

/// Summary statistics returned by the analysis backend for one dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisResult {
    pub total_rows: u64,
    pub total_cols: u64,
    /// Backend column order.
    pub column_names: Vec<String>,
    /// Parallel to `column_names`.
    pub missing_value_counts: Vec<u64>,
    pub result_text: String,
}

impl From<AnalysisResponse> for AnalysisResult {
    fn from(resp: AnalysisResponse) -> Self {
        Self {
            total_rows: resp.total_rows,
            total_cols: resp.total_columns,
            column_names: resp.columns,
            missing_value_counts: resp.na_values,
            result_text: resp.result,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesPoint {
    pub label: String,
    pub count: u64,
}

/// The backend sent a different number of labels than counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesMismatch {
    pub labels: usize,
    pub counts: usize,
}

/// Zip counts with their column labels. Lengths must agree; nothing is truncated.
pub fn pair_series(data: &[u64], labels: &[String]) -> Result<Vec<SeriesPoint>, SeriesMismatch> {
    if data.len() != labels.len() {
        return Err(SeriesMismatch {
            labels: labels.len(),
            counts: data.len(),
        });
    }

    Ok(labels
        .iter()
        .zip(data)
        .map(|(label, count)| SeriesPoint {
            label: label.clone(),
            count: *count,
        })
        .collect())
}
