//! Server configuration from flags and environment.
//!
//! The admin credential pair is injected here rather than hardcoded at
//! the comparison site; the defaults match the documented demo
//! credentials and should be overridden in any real deployment.

use std::path::PathBuf;

use clap::Parser;

/// feedbackd API server configuration.
#[derive(Debug, Parser)]
#[command(name = "feedbackd", about = "Feedback collection API server")]
pub struct ServerConfig {
    /// Address to bind.
    #[arg(long, env = "FEEDBACKD_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Directory holding the SQLite database file.
    #[arg(long, env = "FEEDBACKD_DATA_DIR", default_value = "./data")]
    pub data_dir: PathBuf,

    /// Admin username for /api/admin/login.
    #[arg(long, env = "FEEDBACKD_ADMIN_USERNAME", default_value = "admin")]
    pub admin_username: String,

    /// Admin password for /api/admin/login.
    #[arg(long, env = "FEEDBACKD_ADMIN_PASSWORD", default_value = "admin123")]
    pub admin_password: String,
}
