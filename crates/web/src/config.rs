use std::path::PathBuf;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub categories_dir: PathBuf,
    pub ledger_path: PathBuf,
    pub history_path: PathBuf,
    pub outcomes_path: PathBuf,
    pub git_sync: bool,
    pub sheets: Option<SheetsConfig>,
}

/// Where the remote copy of the ledger lives. Only present when
/// `SHEETS_SPREADSHEET_ID` is set.
#[derive(Debug, Clone)]
pub struct SheetsConfig {
    pub credentials_path: Option<PathBuf>,
    pub spreadsheet_id: String,
    pub worksheet: String,
    pub access_token: Option<String>,
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            categories_dir: path_var("CATEGORIES_DIR", "categories"),
            ledger_path: path_var("LEDGER_PATH", "selections.csv"),
            history_path: path_var("HISTORY_PATH", "history/selections.csv"),
            outcomes_path: path_var("OUTCOMES_PATH", "history/outcomes.csv"),
            git_sync: parse_flag(std::env::var("GIT_SYNC").ok().as_deref())
                .context("GIT_SYNC must be true or false")?,
            sheets: SheetsConfig::from_env(),
        })
    }
}

impl SheetsConfig {
    fn from_env() -> Option<Self> {
        let spreadsheet_id = std::env::var("SHEETS_SPREADSHEET_ID")
            .ok()
            .filter(|s| !s.trim().is_empty())?;

        Some(Self {
            credentials_path: std::env::var("SHEETS_CREDENTIALS_PATH").ok().map(PathBuf::from),
            spreadsheet_id,
            worksheet: std::env::var("SHEETS_WORKSHEET").unwrap_or_else(|_| "selections".to_string()),
            access_token: std::env::var("SHEETS_ACCESS_TOKEN").ok(),
            base_url: std::env::var("SHEETS_BASE_URL")
                .unwrap_or_else(|_| "https://sheets.googleapis.com".to_string()),
        })
    }
}

fn path_var(name: &str, default: &str) -> PathBuf {
    std::env::var(name)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}

fn parse_flag(value: Option<&str>) -> Result<bool> {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        None => Ok(false),
        Some(v) if v.is_empty() => Ok(false),
        Some(v) => match v.as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => anyhow::bail!("unrecognised flag value '{}'", other),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(!parse_flag(None).unwrap());
        assert!(!parse_flag(Some("")).unwrap());
        assert!(parse_flag(Some("TRUE")).unwrap());
        assert!(parse_flag(Some(" yes ")).unwrap());
        assert!(!parse_flag(Some("off")).unwrap());
        assert!(parse_flag(Some("maybe")).is_err());
    }
}
