use std::path::PathBuf;

#[derive(clap::Args)]
pub struct Config {
    /// Base URL of the Connect backend API.
    #[arg(
        long,
        env = "CONNECT_API_BASE_URL",
        default_value = "https://backendconnectapp.onrender.com/api"
    )]
    pub api_base_url: String,

    /// Directory for persisted client state (session, avatar overrides).
    #[arg(long, env = "CONNECT_STATE_DIR")]
    pub state_dir: Option<PathBuf>,
}

impl Config {
    fn dir(&self) -> PathBuf {
        self.state_dir
            .clone()
            .unwrap_or_else(connect_api::session::state_dir)
    }

    pub fn session_path(&self) -> PathBuf {
        self.dir().join("session.toml")
    }

    pub fn avatars_path(&self) -> PathBuf {
        self.dir().join("avatars.toml")
    }
}
