use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub format: OutputFormat,
    pub color: bool,
    pub prompt: bool,
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            prompt: false,
            quiet: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unset or unparseable
    /// values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let format = lookup("SORTED_STACK_FORMAT")
            .and_then(|v| OutputFormat::parse(&v))
            .unwrap_or(defaults.format);

        let no_color = lookup("NO_COLOR").is_some_and(|v| !v.is_empty());
        let color = !no_color && flag(&lookup, "SORTED_STACK_COLOR", defaults.color);

        // Prompts and the banner would corrupt a JSON document on stdout.
        let json = format == OutputFormat::Json;

        Self {
            format,
            color,
            prompt: !json && flag(&lookup, "SORTED_STACK_PROMPT", defaults.prompt),
            quiet: flag(&lookup, "SORTED_STACK_QUIET", defaults.quiet),
        }
    }
}

fn flag<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).map(|v| v.trim().to_lowercase()).as_deref() {
        Some("1" | "true" | "yes" | "on") => true,
        Some("0" | "false" | "no" | "off") => false,
        _ => default,
    }
}
