//! Salt crust area per year from SCI

use anyhow::Result;
use surfarea_cli::{run, Cli, RunConfig};

fn main() -> Result<()> {
    let cli = Cli::parse_as("salt-area", "Salt surface area over time from SCI");
    run(cli, RunConfig::salt())
}
