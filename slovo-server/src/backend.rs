//! Pipeline construction

use crate::config::PipelineConfig;
use crate::error::CliError;
use slovo_core::Pipeline;
use std::sync::Arc;

/// Load the morphology pipeline this binary was built with
#[cfg(feature = "natasha")]
pub fn load_pipeline(config: &PipelineConfig) -> Result<Arc<dyn Pipeline>, CliError> {
    use slovo_natasha::{NatashaConfig, NatashaPipeline};

    let natasha_config = NatashaConfig {
        python_home: config.python_home.clone(),
        extra_python_paths: config.extra_python_paths.clone(),
    };

    let pipeline = NatashaPipeline::load(&natasha_config)
        .map_err(|e| CliError::PipelineError(e.to_string()))?;
    Ok(Arc::new(pipeline))
}

/// Load the morphology pipeline this binary was built with
#[cfg(not(feature = "natasha"))]
pub fn load_pipeline(_config: &PipelineConfig) -> Result<Arc<dyn Pipeline>, CliError> {
    Err(CliError::PipelineError(
        "built without a pipeline backend; enable the `natasha` feature".to_string(),
    ))
}
