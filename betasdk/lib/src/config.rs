/// Configuration for reading and writing payloads.
///
/// Use the builder methods to customize behavior.
///
/// ## Examples
///
/// ```
/// use betasdk_lib::SerializationConfig;
///
/// let config = SerializationConfig::new()
///     .pretty(true)
///     .skip_additional_data();
///
/// assert!(config.pretty);
/// assert!(!config.emit_additional_data);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializationConfig {
    /// Indent JSON text output.
    pub pretty: bool,
    /// Keep properties the models do not declare while parsing.
    pub capture_additional_data: bool,
    /// Write captured additional data back out while serializing.
    pub emit_additional_data: bool,
}

impl Default for SerializationConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            capture_additional_data: true,
            emit_additional_data: true,
        }
    }
}

impl SerializationConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Indent JSON text output.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Drop undeclared properties while parsing.
    pub fn ignore_additional_data(mut self) -> Self {
        self.capture_additional_data = false;
        self
    }

    /// Do not write additional data while serializing.
    pub fn skip_additional_data(mut self) -> Self {
        self.emit_additional_data = false;
        self
    }
}
