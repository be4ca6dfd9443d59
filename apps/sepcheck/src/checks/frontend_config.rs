//! Frontend configuration check on the package manifest.

use crate::error::{ensure, CheckError, CheckResult};
use crate::models::{CheckContext, Outcome};
use crate::output::Reporter;
use serde_json::Value as Json;
use std::fs;
use std::io::Write;

pub fn check_frontend_config<W: Write>(
    ctx: &CheckContext,
    out: &mut Reporter<W>,
) -> CheckResult<Outcome> {
    let rules = &ctx.layout.manifest;
    let path = ctx.layout.frontend.root(&ctx.root).join(&rules.file);
    if !path.exists() {
        return Ok(Outcome::Passed);
    }
    let data = fs::read_to_string(&path).map_err(|e| CheckError::io("failed to read", &path, e))?;
    let config: Json = serde_json::from_str(&data)
        .map_err(|e| CheckError::assertion(format!("Invalid JSON in {}: {}", rules.file, e)))?;

    for key in &rules.required_keys {
        ensure(config.get(key).is_some(), || {
            format!("Missing {} in {}", key, rules.file)
        })?;
    }

    let has_dep = config
        .get(&rules.dependency_table)
        .and_then(Json::as_object)
        .map(|deps| deps.contains_key(&rules.required_dependency))
        .unwrap_or(false);
    ensure(has_dep, || {
        format!(
            "{} dependency not found in {}",
            rules.required_dependency, rules.file
        )
    })?;

    out.pass("Frontend configuration is valid");
    Ok(Outcome::Passed)
}
