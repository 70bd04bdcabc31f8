//! Definitions of errors that can occur during the execution of the deploy scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use plugin_config::errors::PluginConfigError;

/// Errors that can occur during the execution of the deploy scripts
#[derive(Debug)]
pub enum ScriptError {
    /// Invalid or missing deployment configuration
    Config(PluginConfigError),
    /// Error launching the deployment framework, or a failed deployment
    FrameworkInvocation(String),
    /// Error reading a generated file
    ReadFile(String),
    /// Error writing a generated file
    WriteFile(String),
    /// Generated module sources that differ from their descriptors
    StaleModuleSources(Vec<String>),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Config(e) => write!(f, "configuration error: {}", e),
            ScriptError::FrameworkInvocation(s) => {
                write!(f, "error invoking deployment framework: {}", s)
            }
            ScriptError::ReadFile(s) => write!(f, "error reading file: {}", s),
            ScriptError::WriteFile(s) => write!(f, "error writing file: {}", s),
            ScriptError::StaleModuleSources(files) => {
                write!(f, "module sources out of date: {}", files.join(", "))
            }
        }
    }
}

impl Error for ScriptError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ScriptError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PluginConfigError> for ScriptError {
    fn from(e: PluginConfigError) -> Self {
        ScriptError::Config(e)
    }
}
