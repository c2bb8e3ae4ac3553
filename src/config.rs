use std::net::{IpAddr, SocketAddr};

use clap::Parser;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Args {
    /// Postgres host.
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// Postgres port.
    #[arg(long, env = "DB_PORT", default_value_t = 5432)]
    pub db_port: u16,

    /// Postgres user name.
    #[arg(long, env = "DB_USERNAME")]
    pub db_username: String,

    /// Postgres password.
    #[arg(long, env = "DB_PASSWORD", hide_env_values = true)]
    pub db_password: String,

    /// Name of the database holding the trivia tables.
    #[arg(long, env = "DB_DATABASE")]
    pub db_database: String,

    /// TLS mode for the database connection (disable, prefer, require, ...).
    #[arg(long, env = "DB_SSL_MODE", default_value = "disable")]
    pub db_ssl_mode: PgSslMode,

    /// Upper bound on pooled database connections.
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 5)]
    pub db_max_connections: u32,

    /// The port the HTTP service listens on.
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// The interface to bind to.
    #[arg(long, env = "BIND_HOST", default_value = "0.0.0.0")]
    pub bind_host: IpAddr,
}

/// Connection parameters for the backing Postgres database.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
    pub ssl_mode: PgSslMode,
    pub max_connections: u32,
}

impl DbConfig {
    /// Options built only from these fields; no `~/.pgpass` lookup.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new_without_pgpass()
            .ssl_mode(self.ssl_mode)
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .database(&self.database)
    }
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub db: DbConfig,
    pub address: SocketAddr,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            db: DbConfig {
                host: args.db_host,
                port: args.db_port,
                username: args.db_username,
                password: args.db_password,
                database: args.db_database,
                ssl_mode: args.db_ssl_mode,
                max_connections: args.db_max_connections,
            },
            address: SocketAddr::new(args.bind_host, args.port),
        }
    }
}
