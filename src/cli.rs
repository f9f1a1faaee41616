// cli.rs - Command-line interface configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "orbfield")]
#[command(about = "Decorative WebGPU orb scene", long_about = None)]
pub struct Cli {
    /// Seed for the procedural scene; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disable the FPS overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}
