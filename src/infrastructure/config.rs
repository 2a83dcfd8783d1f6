use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ForecastConfig {
    pub model: ModelSettings,
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModelSettings {
    /// Serialized regression model in gbdt's native format.
    pub path: String,
    /// Feature columns the model was trained with. Checked against the
    /// pipeline's column layout before any scoring.
    pub feature_count: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub listen: String,
}

pub fn load_forecast_config() -> anyhow::Result<ForecastConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/forecast"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forecast_config() {
        let raw = r#"
            [model]
            path = "model/gbdt.model"
            feature_count = 9

            [server]
            listen = "0.0.0.0:8080"
        "#;

        let settings = config::Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()
            .unwrap();
        let parsed: ForecastConfig = settings.try_deserialize().unwrap();

        assert_eq!(parsed.model.path, "model/gbdt.model");
        assert_eq!(parsed.model.feature_count, 9);
        assert_eq!(parsed.server.listen, "0.0.0.0:8080");
    }
}
