//! Error types for the dreamspell-kin crate.

/// Error type for all fallible operations in the dreamspell-kin crate.
///
/// Kin 0 gets its own variant because it is the sentinel for the day out of
/// time rather than a malformed value; callers usually want to branch on it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KinError {
    /// Returned when a Kin value is outside 1..=260 and is not the 0 sentinel.
    #[error("kin out of range: {kin} (must be 1..=260)")]
    KinOutOfRange {
        /// The invalid Kin value that was provided.
        kin: u16,
    },

    /// Returned when Kin 0 (the day out of time) reaches an operation that
    /// only exists inside the 260-day cycle.
    #[error("kin 0 is outside the cycle and has no seal, tone or partners")]
    OutOfCycle,

    /// Returned when a seal number is outside 1..=20.
    #[error("seal out of range: {seal} (must be 1..=20)")]
    SealOutOfRange {
        /// The invalid seal number that was provided.
        seal: u16,
    },

    /// Returned when a tone number is outside 1..=13.
    #[error("tone out of range: {tone} (must be 1..=13)")]
    ToneOutOfRange {
        /// The invalid tone number that was provided.
        tone: u16,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kin_out_of_range() {
        let err = KinError::KinOutOfRange { kin: 261 };
        assert_eq!(err.to_string(), "kin out of range: 261 (must be 1..=260)");
    }

    #[test]
    fn error_out_of_cycle() {
        assert_eq!(
            KinError::OutOfCycle.to_string(),
            "kin 0 is outside the cycle and has no seal, tone or partners"
        );
    }

    #[test]
    fn error_seal_out_of_range() {
        let err = KinError::SealOutOfRange { seal: 21 };
        assert_eq!(err.to_string(), "seal out of range: 21 (must be 1..=20)");
    }

    #[test]
    fn error_tone_out_of_range() {
        let err = KinError::ToneOutOfRange { tone: 0 };
        assert_eq!(err.to_string(), "tone out of range: 0 (must be 1..=13)");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<KinError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<KinError>();
    }

    #[test]
    fn error_is_partial_eq() {
        assert_eq!(KinError::OutOfCycle, KinError::OutOfCycle);
        assert_ne!(
            KinError::KinOutOfRange { kin: 300 },
            KinError::KinOutOfRange { kin: 301 }
        );
    }
}
