use clap::Parser;
use std::time::Duration;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "gatekeeper")]
#[command(about = "Static HTTP endpoint behind a global fixed-window rate limit")]
pub struct Args {
    // Address to listen on
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    // Port to run the server on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    // Max admitted requests per window
    #[arg(short, long, default_value_t = 5)]
    pub limit: u32,

    // Window length in seconds
    #[arg(short, long, default_value_t = 10)]
    pub interval: u64,

    // Body returned on a successful request
    #[arg(short, long, default_value = "Hello, World!")]
    pub body: String,

    // Serve /metrics and /health on this port (disabled when unset)
    #[arg(long)]
    pub metrics_port: Option<u16>,
}

impl Args {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn metrics_addr(&self) -> Option<String> {
        self.metrics_port.map(|port| format!("{}:{}", self.host, port))
    }

    pub fn window(&self) -> Duration {
        Duration::from_secs(self.interval)
    }
}
