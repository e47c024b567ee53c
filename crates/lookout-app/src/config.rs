//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use lookout_core::enums::Weather;
use lookout_sim::SimConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "lookout")]
#[command(about = "Fire lookout: scan the ridges, sight fires, report their bearing")]
pub struct Args {
    /// Directory holding backgrounds, masks and sprites
    #[arg(long, default_value = "assets")]
    pub assets: PathBuf,
    /// RNG seed (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,
    /// Weather for the session: clear, rainy, windy or hot (rolled if omitted)
    #[arg(long)]
    pub weather: Option<Weather>,
    /// Quit after this many ticks
    #[arg(long)]
    pub max_ticks: Option<u64>,
    /// Write the final frame to this PNG on exit
    #[arg(long)]
    pub capture: Option<PathBuf>,
}

impl Args {
    /// Resolve the seed and weather for this session.
    ///
    /// The weather roll uses its own stream from the seed, so a given seed
    /// always picks the same weather.
    pub fn session(&self) -> SimConfig {
        let seed = self.seed.unwrap_or_else(rand::random);
        let weather = self.weather.unwrap_or_else(|| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            rng.set_stream(1);
            lookout_sim::weather::roll(&mut rng)
        });
        SimConfig { seed, weather }
    }
}
