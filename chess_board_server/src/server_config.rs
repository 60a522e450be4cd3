use anyhow::Context;
use chess_board::CellEncoding;
use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    // Directory with the web page. When missing, only the API is served.
    #[serde(default)]
    pub static_content_dir: Option<String>,
    #[serde(default = "default_cell_encoding")]
    pub cell_encoding: CellEncoding,
}

fn default_cell_encoding() -> CellEncoding { CellEncoding::Structured }

impl ServerConfig {
    pub fn from_yaml(contents: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(contents).context("Failed to parse server config.")
    }
}

pub fn read_config_file(filename: &str) -> anyhow::Result<ServerConfig> {
    let contents = std::fs::read_to_string(filename)
        .with_context(|| format!("Failed to read config file '{filename}'."))?;
    ServerConfig::from_yaml(&contents)
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn full_config() {
        let config = ServerConfig::from_yaml(
            "bind_address: \"127.0.0.1:9000\"\nstatic_content_dir: www\ncell_encoding: Letter\n",
        )
        .unwrap();
        assert_eq!(config, ServerConfig {
            bind_address: "127.0.0.1:9000".to_owned(),
            static_content_dir: Some("www".to_owned()),
            cell_encoding: CellEncoding::Letter,
        });
    }

    #[test]
    fn defaults() {
        let config = ServerConfig::from_yaml("bind_address: \"0.0.0.0:8080\"\n").unwrap();
        assert_eq!(config.static_content_dir, None);
        assert_eq!(config.cell_encoding, CellEncoding::Structured);
    }

    #[test]
    fn bad_encoding() {
        let err = ServerConfig::from_yaml("bind_address: x\ncell_encoding: Fen\n").unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse server config.");
    }

    #[test]
    fn missing_file() {
        let err = read_config_file("/nonexistent/server.yaml").unwrap_err();
        assert_eq!(err.to_string(), "Failed to read config file '/nonexistent/server.yaml'.");
    }
}
