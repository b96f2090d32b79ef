//! Demo configuration from environment variables.

use std::env;

/// Settings for the demo menus.
#[derive(Clone, Debug)]
pub struct DemoConfig {
    /// Name used by the greeting action.
    pub player_name: String,

    /// Number of greetings before the hidden menu entry is revealed.
    pub reveal_after: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            player_name: "adventurer".to_string(),
            reveal_after: 3,
        }
    }
}

impl DemoConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DEMO_PLAYER_NAME` - Name used in greetings (default: "adventurer")
    /// - `DEMO_REVEAL_AFTER` - Greetings needed to reveal the secret entry (default: 3)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(name) = env::var("DEMO_PLAYER_NAME")
            && !name.is_empty()
        {
            config.player_name = name;
        }
        if let Some(count) = read_env::<u32>("DEMO_REVEAL_AFTER") {
            config.reveal_after = count.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
