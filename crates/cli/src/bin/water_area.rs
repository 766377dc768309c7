//! Surface water area per year from NDWI

use anyhow::Result;
use surfarea_cli::{run, Cli, RunConfig};

fn main() -> Result<()> {
    let cli = Cli::parse_as("water-area", "Water surface area over time from NDWI");
    run(cli, RunConfig::water())
}
