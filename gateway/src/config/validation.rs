//! Configuration validation.

/// Both identifiers are interpolated into Vertex AI URLs.
pub(super) fn validate_vertex(
    project_id: &str,
    location: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if project_id.trim().is_empty() {
        return Err("Google Cloud project id must not be empty".into());
    }
    if location.trim().is_empty() {
        return Err("Google Cloud location must not be empty".into());
    }
    Ok(())
}

pub(super) fn validate_models(models: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    if models.is_empty() {
        return Err("At least one model must be configured".into());
    }

    for (index, model) in models.iter().enumerate() {
        if model.trim().is_empty() {
            return Err(format!("Model at position {index} is blank").into());
        }
        if models[..index].contains(model) {
            return Err(format!("Duplicate model id '{model}'").into());
        }
    }

    Ok(())
}
