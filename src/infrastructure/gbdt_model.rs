// gbdt-backed regression model
use crate::application::regression_model::RegressionModel;
use anyhow::{Result, anyhow};
use gbdt::decision_tree::{Data, DataVec, PredVec};
use gbdt::gradient_boost::GBDT;

/// Gradient-boosted trees loaded from a file in gbdt's native format.
pub struct GbdtRegressionModel {
    model: GBDT,
    feature_count: usize,
}

impl GbdtRegressionModel {
    /// Load the serialized model. The loaded model cannot report how many
    /// feature columns it was trained with, so the caller supplies it from
    /// configuration.
    pub fn load(path: &str, feature_count: usize) -> Result<Self> {
        let model = GBDT::load_model(path)
            .map_err(|e| anyhow!("failed to load regression model from {}: {}", path, e))?;

        Ok(Self {
            model,
            feature_count,
        })
    }
}

impl RegressionModel for GbdtRegressionModel {
    fn feature_count(&self) -> usize {
        self.feature_count
    }

    fn predict(&self, rows: &[Vec<f32>]) -> Result<Vec<f64>> {
        for row in rows {
            if row.len() != self.feature_count {
                return Err(anyhow!(
                    "feature row has {} columns, model expects {}",
                    row.len(),
                    self.feature_count
                ));
            }
        }

        let data: DataVec = rows
            .iter()
            .map(|row| Data::new_test_data(row.clone(), None))
            .collect();
        let predictions: PredVec = self.model.predict(&data);

        Ok(predictions.into_iter().map(f64::from).collect())
    }
}
