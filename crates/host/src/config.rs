use once_cell::sync::OnceCell;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub chatbot: ChatbotConfig,
    #[serde(default)]
    pub nonce: NonceConfig,
    pub current_user: CurrentUserConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Socket address the host binds to, e.g. "127.0.0.1:3000".
    pub bind: String,
    /// Directory served under /assets (stylesheet and wasm bundle).
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatbotConfig {
    pub api_url: String,
    pub upload_url: String,
    pub cors_origin: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct NonceConfig {
    /// Signing secret. When absent an ephemeral one is generated at startup,
    /// so minted nonces do not survive a restart.
    #[serde(default)]
    pub secret: Option<String>,
    /// Total validity window of a nonce in seconds.
    #[serde(default = "default_nonce_lifetime")]
    pub lifetime_secs: i64,
}

fn default_nonce_lifetime() -> i64 {
    86_400
}

/// Stand-in for the CMS user session: the real host resolves identity and
/// roles itself, this host only needs an id and a role list to decide
/// upload eligibility.
#[derive(Debug, Deserialize, Clone)]
pub struct CurrentUserConfig {
    pub id: i64,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl CurrentUserConfig {
    /// Editors and administrators may upload PDFs.
    pub fn can_upload(&self) -> bool {
        self.roles
            .iter()
            .any(|role| role == "editor" || role == "administrator")
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
bind = "127.0.0.1:3000"
static_dir = "static"

[chatbot]
api_url = "https://18.232.166.114/ask"
upload_url = "https://18.232.166.114/upload_pdf"
cors_origin = "https://consultas.miopiamagna.org/"

[nonce]
lifetime_secs = 86400

[current_user]
id = 1
roles = ["administrator"]
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Install the loaded configuration. A second call is ignored.
pub fn init(config: Config) {
    let _ = CONFIG.set(config);
}

pub fn get() -> &'static Config {
    CONFIG.get().expect("config not initialized")
}
