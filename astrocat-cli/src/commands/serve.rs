//! HTTP server command
//!
//! Connects to the catalog database (failing fast if it is unreachable) and
//! serves the REST API until Ctrl+C / SIGTERM.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use anyhow::{Context, Result};
use astrocat_server::db::pool::{DEFAULT_ACQUIRE_TIMEOUT, DEFAULT_MAX_CONNECTIONS};
use astrocat_server::{create_pool, run_server, AppState, DbConfig, ServerConfig};
use clap::Parser;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// HTTP listen port
    #[arg(long, env = "PORT", default_value_t = 8082)]
    pub port: u16,

    /// HTTP listen address
    #[arg(long, env = "BIND_HOST", default_value = "0.0.0.0")]
    pub bind_host: IpAddr,

    /// Per-request timeout in seconds, database time included
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Serve from in-process tables instead of PostgreSQL (data is lost on exit)
    #[arg(long)]
    pub in_memory: bool,

    /// Database host
    #[arg(long, env = "DB_HOST", required_unless_present = "in_memory")]
    pub db_host: Option<String>,

    /// Database port
    #[arg(long, env = "DB_PORT", default_value_t = 5432)]
    pub db_port: u16,

    /// Database user
    #[arg(long, env = "DB_USER", required_unless_present = "in_memory")]
    pub db_user: Option<String>,

    /// Database password
    #[arg(long, env = "DB_PASSWORD", hide_env_values = true, default_value = "")]
    pub db_password: String,

    /// Database name
    #[arg(long, env = "DB_NAME", required_unless_present = "in_memory")]
    pub db_name: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub db_max_connections: u32,

    /// Seconds to wait for a pooled connection before answering 503
    #[arg(long, env = "DB_ACQUIRE_TIMEOUT_SECS", default_value_t = DEFAULT_ACQUIRE_TIMEOUT.as_secs())]
    pub db_acquire_timeout_secs: u64,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: SocketAddr::new(self.bind_host, self.port),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }

    fn db_config(&self) -> Result<DbConfig> {
        Ok(DbConfig {
            host: self.db_host.clone().context("DB_HOST not set")?,
            port: self.db_port,
            user: self.db_user.clone().context("DB_USER not set")?,
            password: self.db_password.clone(),
            database: self.db_name.clone().context("DB_NAME not set")?,
            max_connections: self.db_max_connections,
            acquire_timeout: Duration::from_secs(self.db_acquire_timeout_secs),
        })
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.server_config();

    if args.in_memory {
        tracing::warn!("Serving from in-memory tables; data will not persist");
        run_server(AppState::in_memory(), config)
            .await
            .context("Server error")?;
        return Ok(());
    }

    let db_config = args.db_config()?;
    tracing::info!(
        host = %db_config.host,
        port = db_config.port,
        database = %db_config.database,
        "Connecting to database"
    );

    // Fail fast: no traffic is accepted until the database answers.
    let pool = create_pool(&db_config).await.with_context(|| {
        format!(
            "Failed to connect to database at {}:{}",
            db_config.host, db_config.port
        )
    })?;
    tracing::info!("Connected to database");

    let result = run_server(AppState::postgres(pool.clone()), config).await;

    pool.close().await;
    tracing::info!("Database pool closed");

    result.context("Server error")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        serve: ServeArgs,
    }

    fn parse(args: &[&str]) -> Result<ServeArgs, clap::Error> {
        let argv = std::iter::once("astrocat").chain(args.iter().copied());
        TestCli::try_parse_from(argv).map(|cli| cli.serve)
    }

    #[test]
    fn explicit_flags_build_configs() {
        let args = parse(&[
            "--db-host",
            "db.internal",
            "--db-user",
            "catalog",
            "--db-name",
            "cosmos",
            "--db-password",
            "secret",
            "--port",
            "9000",
        ])
        .unwrap();

        let server = args.server_config();
        assert_eq!(server.bind_addr.port(), 9000);

        let db = args.db_config().unwrap();
        assert_eq!(db.host, "db.internal");
        assert_eq!(db.port, 5432);
        assert_eq!(db.password, "secret");
        assert_eq!(db.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn in_memory_needs_no_database_flags() {
        let args = parse(&["--in-memory", "--port", "0"]).unwrap();
        assert!(args.in_memory);
    }
}
