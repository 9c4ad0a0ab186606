use clap::Parser;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "qr-gateway")]
#[command(about = "In-memory QR short-link backend with per-client rate limiting")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    // Rate limit max requests per window, per client
    #[arg(long, default_value_t = 10)]
    pub rate_limit: u32,

    // Rate limit window in seconds
    #[arg(long, default_value_t = 60)]
    pub rate_window: u64,

    // How often idle rate limit buckets are swept, in seconds
    #[arg(long, default_value_t = 300)]
    pub sweep_interval: u64,

    // Free plan: max QR codes in total
    #[arg(long, default_value_t = 20)]
    pub free_max_total: u32,

    // Free plan: max QR codes active at once
    #[arg(long, default_value_t = 5)]
    pub free_max_active: u32,
}
