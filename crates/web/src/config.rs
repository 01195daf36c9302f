// =============================================================================
// Cloudora Web - Build-Time Configuration
// =============================================================================
// Table of Contents:
// 1. Environment
// 2. Site Config
// 3. Tests
// =============================================================================

use std::time::Duration;

/// Default pause between leaving one view and showing the next.
pub const DEFAULT_TRANSITION_DELAY_MS: u64 = 1200;

/// How long a toast stays on screen before dismissing itself.
pub const TOAST_DURATION_MS: u32 = 4000;

// -----------------------------------------------------------------------------
// 1. Environment
// -----------------------------------------------------------------------------

/// Deployment environment the bundle was built for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("development") => Environment::Development,
            _ => Environment::Production,
        }
    }

    /// Log level used by the console logger.
    pub fn log_level(&self) -> log::Level {
        match self {
            Environment::Development => log::Level::Debug,
            Environment::Production => log::Level::Info,
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Site Config
// -----------------------------------------------------------------------------

/// Values baked into the bundle at build time.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// Waitlist submission endpoint. `None` when the build did not supply one.
    pub endpoint: Option<String>,

    /// Loading pause shown while switching views.
    pub transition_delay: Duration,

    pub environment: Environment,
}

impl SiteConfig {
    /// Read `WAITLIST_ENDPOINT`, `TRANSITION_DELAY_MS` and `ENVIRONMENT`.
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("WAITLIST_ENDPOINT"),
            option_env!("TRANSITION_DELAY_MS"),
            option_env!("ENVIRONMENT"),
        )
    }

    /// Build a config from raw values. Blank values count as unset.
    pub fn from_values(
        endpoint: Option<&str>,
        transition_delay_ms: Option<&str>,
        environment: Option<&str>,
    ) -> Self {
        let endpoint = endpoint
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        let delay_ms = transition_delay_ms
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TRANSITION_DELAY_MS);

        Self {
            endpoint,
            transition_delay: Duration::from_millis(delay_ms),
            environment: Environment::parse(environment),
        }
    }

    /// Transition delay in the unit `gloo_timers` expects.
    pub fn transition_delay_ms(&self) -> u32 {
        u32::try_from(self.transition_delay.as_millis()).unwrap_or(u32::MAX)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

// -----------------------------------------------------------------------------
// 3. Tests
// -----------------------------------------------------------------------------
