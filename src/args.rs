use crate::engine::*;
use crate::harness;
use crate::player::Settings;
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(author, version, about = "Autonomous card-game player", long_about = None)]
pub struct Args {
    /// Coordinator address, e.g. http://localhost:8080
    pub host: String,
    /// Room to join
    #[arg(default_value = "")]
    pub room_name: String,
    /// Display name
    #[arg(default_value = "")]
    pub player: String,
    /// Event to rehearse against the development test tool
    pub event_name: Option<String>,
    /// Seed for reproducible color choices and coin flips
    #[arg(long)]
    pub seed: Option<u64>,
    /// Never send the special-logic signal
    #[arg(long)]
    pub no_special_logic: bool,
    /// Pause after pointing out a missing declaration, in milliseconds
    #[arg(long, default_value_t = 10)]
    pub pacing_ms: u64,
}

impl Args {
    pub fn is_test_tool(&self) -> bool {
        harness::is_test_tool(&self.host)
    }

    /// Validated session settings. A room and a name are required unless
    /// rehearsing against the test tool.
    pub fn settings(&self) -> anyhow::Result<Settings> {
        if self.host.trim().is_empty() {
            anyhow::bail!("host is required");
        }
        if !self.is_test_tool() && (self.room_name.is_empty() || self.player.is_empty()) {
            anyhow::bail!("room_name and player are required");
        }
        Ok(Settings {
            special_logic: !self.no_special_logic,
            pacing: Duration::from_millis(self.pacing_ms),
            ..Settings::default()
        })
    }

    pub fn strategy(&self) -> Strategy<Random> {
        self.seed
            .map(Random::seeded)
            .map(Strategy::new)
            .unwrap_or_default()
    }
}
