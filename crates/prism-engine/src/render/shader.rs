use std::fmt;

/// WGSL that failed to parse or validate.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderError {
    /// Label of the shader that failed (e.g. "phong").
    pub label: String,
    /// Compiler diagnostic.
    pub message: String,
}

impl ShaderError {
    pub(crate) fn new(label: &str, message: impl Into<String>) -> Self {
        Self { label: label.to_string(), message: message.into() }
    }
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shader {}: {}", self.label, self.message)
    }
}

impl std::error::Error for ShaderError {}

/// Shader sources shipped with the engine.
pub mod sources {
    pub const PHONG: &str = include_str!("shaders/phong.wgsl");
    pub const COLOR: &str = include_str!("shaders/color.wgsl");
    pub const FLAT: &str = include_str!("shaders/flat.wgsl");
}

/// A validated WGSL shader module.
pub struct ShaderProgram {
    module: wgpu::ShaderModule,
}

impl ShaderProgram {
    /// Parses and validates `source` on the CPU.
    ///
    /// Failures are logged at error level and returned; nothing is retried.
    pub fn validate(label: &str, source: &str) -> Result<naga::Module, ShaderError> {
        let module = naga::front::wgsl::parse_str(source).map_err(|e| {
            let err = ShaderError::new(label, e.emit_to_string(source));
            log::error!("{label}: {}", err.message);
            err
        })?;

        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        );

        validator.validate(&module).map_err(|e| {
            let err = ShaderError::new(label, format!("{e:?}"));
            log::error!("{label}: {}", err.message);
            err
        })?;

        Ok(module)
    }

    /// Validates `source` and creates the wgpu module from it.
    pub fn compile(device: &wgpu::Device, label: &str, source: &str) -> Result<Self, ShaderError> {
        Self::validate(label, source)?;

        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        });

        log::debug!("compiled shader {label}");
        Ok(Self { module })
    }

    pub fn module(&self) -> &wgpu::ShaderModule {
        &self.module
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_points(module: &naga::Module) -> Vec<&str> {
        module.entry_points.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn bundled_mesh_shaders_validate() {
        for (label, source) in [("phong", sources::PHONG), ("color", sources::COLOR)] {
            let module = ShaderProgram::validate(label, source)
                .unwrap_or_else(|e| panic!("{e}"));
            let names = entry_points(&module);
            assert!(names.contains(&"vs_main"), "{label}: {names:?}");
            assert!(names.contains(&"fs_main"), "{label}: {names:?}");
            assert!(names.contains(&"fs_line"), "{label}: {names:?}");
        }
    }

    #[test]
    fn flat_shader_validates() {
        let module = ShaderProgram::validate("flat", sources::FLAT).unwrap();
        assert_eq!(entry_points(&module), vec!["vs_main", "fs_main"]);
    }

    #[test]
    fn syntax_error_is_reported_with_label() {
        let err = ShaderProgram::validate("broken", "fn main( {").unwrap_err();
        assert_eq!(err.label, "broken");
        assert!(!err.message.is_empty());
        assert!(err.to_string().starts_with("shader broken: "));
    }

    #[test]
    fn type_error_fails_validation() {
        let source = "fn f() -> f32 { return vec2<f32>(1.0, 2.0); }";
        assert!(ShaderProgram::validate("mismatch", source).is_err());
    }
}
