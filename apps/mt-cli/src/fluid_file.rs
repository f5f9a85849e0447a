//! Fluid definition files (YAML or JSON).

use std::path::Path;

use mt_eos::{FluidCriticalProperties, FluidDefinition};

use crate::CliResult;

/// Load a manual fluid, picking the format from the file extension.
///
/// `.json` is read as JSON; anything else as YAML.
pub fn load_fluid(path: &Path) -> CliResult<FluidCriticalProperties> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        load_json(path)
    } else {
        load_yaml(path)
    }
}

pub fn load_yaml(path: &Path) -> CliResult<FluidCriticalProperties> {
    let content = std::fs::read_to_string(path)?;
    let definition: FluidDefinition = serde_yaml::from_str(&content)?;
    Ok(FluidCriticalProperties::try_from(definition)?)
}

pub fn load_json(path: &Path) -> CliResult<FluidCriticalProperties> {
    let content = std::fs::read_to_string(path)?;
    let definition: FluidDefinition = serde_json::from_str(&content)?;
    Ok(FluidCriticalProperties::try_from(definition)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use std::path::PathBuf;

    fn scratch(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("mt-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn yaml_definition_loads() {
        let path = scratch(
            "gas.yaml",
            "name: test gas\nformula: CH4\ntc: 190.0\npc: 46.0\nomega: 0.01\nmolar_mass: 16.04\n",
        );
        let fluid = load_fluid(&path).unwrap();
        assert_eq!(fluid.name(), "test gas");
        assert_eq!(fluid.formula(), Some("CH4"));
        assert_eq!(fluid.tc(), 190.0);
        assert!(fluid.vc().is_none());
    }

    #[test]
    fn json_definition_loads() {
        let path = scratch(
            "gas.json",
            r#"{"name": "test gas", "tc": 190.0, "pc": 46.0, "omega": 0.01, "molar_mass": 16.04}"#,
        );
        let fluid = load_fluid(&path).unwrap();
        assert_eq!(fluid.pc(), 46.0);
        assert_eq!(fluid.formula(), None);
    }

    #[test]
    fn invalid_constants_are_rejected_on_load() {
        let path = scratch(
            "bad.yaml",
            "name: bad\ntc: -5.0\npc: 46.0\nomega: 0.01\nmolar_mass: 16.04\n",
        );
        assert!(load_fluid(&path).is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_fluid(Path::new("/nonexistent/fluid.yaml")).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
