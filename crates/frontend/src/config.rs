use std::str::FromStr;

/// Apps Script deployment that stores entries and serves the option lists
pub const DEFAULT_ENDPOINT_URL: &str = "https://script.google.com/macros/s/AKfycbxcoyrV1yNPo8_mblCMUO3Us4SfN5kPJssRGSmvblqEmVfwAxnr3zNxW5q5AsNhgjGXDQ/exec";

/// How the write request is sent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// `no-cors`: the response is opaque, success is only inferred
    #[default]
    NoCors,
    /// `cors`: the endpoint must send CORS headers; status is readable
    Cors,
}

impl FromStr for WriteMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "no-cors" | "nocors" => Ok(WriteMode::NoCors),
            "cors" => Ok(WriteMode::Cors),
            other => Err(format!("unknown write mode '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    pub endpoint_url: String,
    pub write_mode: WriteMode,
}

impl FormConfig {
    /// Configuration baked in at build time.
    ///
    /// `ENTRY_ENDPOINT_URL` and `ENTRY_WRITE_MODE` are read by the compiler,
    /// not by the running page.
    pub fn from_build_env() -> Self {
        Self::resolve(
            option_env!("ENTRY_ENDPOINT_URL"),
            option_env!("ENTRY_WRITE_MODE"),
        )
    }

    fn resolve(endpoint_url: Option<&str>, write_mode: Option<&str>) -> Self {
        let endpoint_url = endpoint_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_ENDPOINT_URL)
            .to_string();

        let write_mode = match write_mode.map(WriteMode::from_str) {
            Some(Ok(mode)) => mode,
            Some(Err(e)) => {
                tracing::warn!("Ignoring ENTRY_WRITE_MODE: {}", e);
                WriteMode::default()
            }
            None => WriteMode::default(),
        };

        Self {
            endpoint_url,
            write_mode,
        }
    }
}
