use std::env;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl OutputConfig {
    /// PAGETEXT_OUTPUT_FORMAT wins over the `--json` flag when set. Resolved once at
    /// startup; the result decides whether commands emit an envelope at all.
    pub fn resolve(json_flag: bool) -> Self {
        Self::from_vars(
            env::var("PAGETEXT_OUTPUT_FORMAT").ok().as_deref(),
            env::var("PAGETEXT_OUTPUT_PRETTY").ok().as_deref(),
            json_flag,
        )
    }

    fn from_vars(format: Option<&str>, pretty: Option<&str>, json_flag: bool) -> Self {
        let format = match format {
            Some("json") => OutputFormat::Json,
            Some("text") => OutputFormat::Text,
            _ if json_flag => OutputFormat::Json,
            _ => OutputFormat::Text,
        };
        let pretty = match pretty {
            Some(v) if v.eq_ignore_ascii_case("1") || v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("yes") => true,
            _ => false,
        };
        OutputConfig { format, pretty }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_variable_overrides_flag_both_ways() {
        assert!(OutputConfig::from_vars(Some("json"), None, false).is_json());
        assert!(!OutputConfig::from_vars(Some("text"), None, true).is_json());
        assert!(OutputConfig::from_vars(None, None, true).is_json());
        assert!(!OutputConfig::from_vars(Some("yaml"), None, false).is_json());
    }

    #[test]
    fn pretty_accepts_truthy_values() {
        assert!(OutputConfig::from_vars(None, Some("TRUE"), false).pretty);
        assert!(!OutputConfig::from_vars(None, Some("0"), false).pretty);
    }
}
