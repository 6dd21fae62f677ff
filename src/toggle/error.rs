//! Errors reported while resolving a toggle configuration.
//!
//! Most configuration mistakes never reach run time: a missing target, a
//! missing configuration or a mode outside the closed set fail during
//! compilation. The types here cover the one decision that can originate
//! from data instead of code, mapping a mode name onto [`Mode`]. Failures
//! raised by the wrapped callables themselves are never intercepted; they
//! propagate to the caller unchanged.
//!
//! [`Mode`]: super::Mode

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// The error returned when a mode name matches no recognized mode.
///
/// Produced by [`Mode::from_str`](super::Mode#impl-FromStr-for-Mode).
///
/// # Examples
///
/// ```rust
/// use togglepoint::toggle::Mode;
///
/// let error = "lazy".parse::<Mode>().unwrap_err();
///
/// assert_eq!(error.value(), "lazy");
/// assert_eq!(
///     error.to_string(),
///     "unrecognized toggle mode `lazy`, expected one of: sync, async, generator",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedModeError {
    value: String,
}

impl UnrecognizedModeError {
    /// Creates an error recording the rejected mode name.
    #[inline]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Returns the rejected mode name.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Display for UnrecognizedModeError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "unrecognized toggle mode `{}`, expected one of: sync, async, generator",
            self.value
        )
    }
}

impl Error for UnrecognizedModeError {}

/// The error reported when a toggle configuration cannot be resolved.
///
/// Callers assembling a configuration from external data, a settings file
/// for instance, surface this instead of the individual causes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigurationError {
    /// The configured mode name matches no recognized mode.
    UnrecognizedMode(UnrecognizedModeError),
}

impl Display for ConfigurationError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedMode(error) => {
                write!(formatter, "invalid toggle configuration: {error}")
            }
        }
    }
}

impl Error for ConfigurationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnrecognizedMode(error) => Some(error),
        }
    }
}

impl From<UnrecognizedModeError> for ConfigurationError {
    #[inline]
    fn from(error: UnrecognizedModeError) -> Self {
        Self::UnrecognizedMode(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_mode_error_display() {
        let error = UnrecognizedModeError::new("lazy");

        assert_eq!(
            error.to_string(),
            "unrecognized toggle mode `lazy`, expected one of: sync, async, generator"
        );
    }

    #[test]
    fn test_configuration_error_display_names_the_cause() {
        let error = ConfigurationError::from(UnrecognizedModeError::new("lazy"));

        assert_eq!(
            error.to_string(),
            "invalid toggle configuration: unrecognized toggle mode `lazy`, \
             expected one of: sync, async, generator"
        );
    }

    #[test]
    fn test_configuration_error_exposes_its_source() {
        let error = ConfigurationError::from(UnrecognizedModeError::new("lazy"));

        let source = error.source().expect("source should be present");
        assert!(source.downcast_ref::<UnrecognizedModeError>().is_some());
    }

    #[test]
    fn test_errors_coerce_to_trait_objects() {
        let boxed: Box<dyn Error> = Box::new(UnrecognizedModeError::new("lazy"));

        assert!(boxed.to_string().contains("lazy"));
    }
}
