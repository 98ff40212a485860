use chrono::Duration;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("sample size must be > 0")]
    InvalidSampleSize,

    #[error("reveal delay must be between 0 and {max_ms} ms")]
    InvalidRevealDelay { max_ms: u64 },

    #[error("{key} is not a valid number: {value:?}")]
    InvalidEnvValue { key: &'static str, value: String },
}

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

/// Environment variable overriding [`DrillSettings::sample_size`].
pub const ENV_SAMPLE_SIZE: &str = "RANGE_DRILL_SAMPLE_SIZE";
/// Environment variable overriding [`DrillSettings::reveal_delay_ms`].
pub const ENV_REVEAL_MS: &str = "RANGE_DRILL_REVEAL_MS";

const DEFAULT_SAMPLE_SIZE: usize = 100;
const DEFAULT_REVEAL_DELAY_MS: u64 = 1_000;
const MAX_REVEAL_DELAY_MS: u64 = 10_000;

/// Configuration for a drill session.
///
/// - `sample_size`: maximum number of questions drawn from the catalog
/// - `reveal_delay_ms`: how long correctness feedback stays up before advancing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrillSettings {
    sample_size: usize,
    reveal_delay_ms: u64,
}

impl DrillSettings {
    /// Creates custom drill settings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if `sample_size` is zero or the reveal delay
    /// exceeds ten seconds.
    pub fn new(sample_size: usize, reveal_delay_ms: u64) -> Result<Self, SettingsError> {
        if sample_size == 0 {
            return Err(SettingsError::InvalidSampleSize);
        }
        if reveal_delay_ms > MAX_REVEAL_DELAY_MS {
            return Err(SettingsError::InvalidRevealDelay {
                max_ms: MAX_REVEAL_DELAY_MS,
            });
        }
        Ok(Self {
            sample_size,
            reveal_delay_ms,
        })
    }

    /// Reads overrides from `RANGE_DRILL_SAMPLE_SIZE` and `RANGE_DRILL_REVEAL_MS`.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if a variable is set but unparseable or out of range.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`DrillSettings::from_env`] with an injectable variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if a value is unparseable or out of range.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let sample_size = parse_var(&lookup, ENV_SAMPLE_SIZE)?.unwrap_or(defaults.sample_size);
        let reveal_delay_ms =
            parse_var(&lookup, ENV_REVEAL_MS)?.unwrap_or(defaults.reveal_delay_ms);
        Self::new(sample_size, reveal_delay_ms)
    }

    /// # Errors
    ///
    /// Returns `SettingsError::InvalidSampleSize` for zero.
    pub fn with_sample_size(self, sample_size: usize) -> Result<Self, SettingsError> {
        Self::new(sample_size, self.reveal_delay_ms)
    }

    /// # Errors
    ///
    /// Returns `SettingsError::InvalidRevealDelay` when above the maximum.
    pub fn with_reveal_delay_ms(self, reveal_delay_ms: u64) -> Result<Self, SettingsError> {
        Self::new(self.sample_size, reveal_delay_ms)
    }

    #[must_use]
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    #[must_use]
    pub fn reveal_delay_ms(&self) -> u64 {
        self.reveal_delay_ms
    }

    #[must_use]
    pub fn reveal_delay(&self) -> Duration {
        Duration::milliseconds(i64::try_from(self.reveal_delay_ms).unwrap_or(i64::MAX))
    }
}

impl Default for DrillSettings {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
        }
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, SettingsError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| SettingsError::InvalidEnvValue { key, value: raw })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_drill_contract() {
        let settings = DrillSettings::default();
        assert_eq!(settings.sample_size(), 100);
        assert_eq!(settings.reveal_delay_ms(), 1_000);
        assert_eq!(settings.reveal_delay(), Duration::seconds(1));
    }

    #[test]
    fn new_rejects_zero_sample_size() {
        assert_eq!(
            DrillSettings::new(0, 1_000).unwrap_err(),
            SettingsError::InvalidSampleSize
        );
    }

    #[test]
    fn new_rejects_long_reveal_delay() {
        let err = DrillSettings::new(10, 10_001).unwrap_err();
        assert_eq!(err, SettingsError::InvalidRevealDelay { max_ms: 10_000 });
        assert!(DrillSettings::new(10, 0).is_ok());
    }

    #[test]
    fn lookup_overrides_defaults() {
        let settings = DrillSettings::from_lookup(|key| match key {
            ENV_SAMPLE_SIZE => Some("20".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(settings.sample_size(), 20);
        assert_eq!(settings.reveal_delay_ms(), 1_000);
    }

    #[test]
    fn lookup_rejects_garbage() {
        let err = DrillSettings::from_lookup(|key| match key {
            ENV_REVEAL_MS => Some("soon".into()),
            _ => None,
        })
        .unwrap_err();
        assert_eq!(
            err,
            SettingsError::InvalidEnvValue {
                key: ENV_REVEAL_MS,
                value: "soon".into()
            }
        );
    }

    #[test]
    fn builders_revalidate() {
        let settings = DrillSettings::default()
            .with_sample_size(20)
            .and_then(|s| s.with_reveal_delay_ms(250))
            .unwrap();
        assert_eq!(settings.sample_size(), 20);
        assert_eq!(settings.reveal_delay_ms(), 250);
        assert_eq!(
            settings.with_sample_size(0).unwrap_err(),
            SettingsError::InvalidSampleSize
        );
        assert!(settings.with_reveal_delay_ms(60_000).is_err());
    }
}
