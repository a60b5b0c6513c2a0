//! Closed set of detection outcomes

use serde::{Deserialize, Serialize};

/// Primary GPU classification
///
/// The discriminants are the process exit codes the `gputype` binary
/// reports, so launchers can branch on them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
#[allow(clippy::upper_case_acronyms)]
pub enum GraphicsCardType {
    /// Enumeration completed without an NVIDIA or AMD adapter
    UNKNOWN = -2,
    /// The inventory query failed
    ERROR = -1,
    /// An NVIDIA adapter is present
    NVIDIA = 1,
    /// An AMD adapter is present and no NVIDIA adapter is
    AMD = 2,
}

impl GraphicsCardType {
    /// All outcomes, in exit code order
    pub const ALL: [GraphicsCardType; 4] = [
        GraphicsCardType::UNKNOWN,
        GraphicsCardType::ERROR,
        GraphicsCardType::NVIDIA,
        GraphicsCardType::AMD,
    ];

    /// Process exit status for this outcome
    pub fn exit_code(self) -> i32 {
        self as i32
    }

    /// Whether a recognized vendor was found
    pub fn is_detected(self) -> bool {
        matches!(self, GraphicsCardType::NVIDIA | GraphicsCardType::AMD)
    }
}

impl std::fmt::Display for GraphicsCardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GraphicsCardType::UNKNOWN => "UNKNOWN",
            GraphicsCardType::ERROR => "ERROR",
            GraphicsCardType::NVIDIA => "NVIDIA",
            GraphicsCardType::AMD => "AMD",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(GraphicsCardType::UNKNOWN.exit_code(), -2);
        assert_eq!(GraphicsCardType::ERROR.exit_code(), -1);
        assert_eq!(GraphicsCardType::NVIDIA.exit_code(), 1);
        assert_eq!(GraphicsCardType::AMD.exit_code(), 2);
    }

    #[test]
    fn test_only_vendors_count_as_detected() {
        assert!(GraphicsCardType::NVIDIA.is_detected());
        assert!(GraphicsCardType::AMD.is_detected());
        assert!(!GraphicsCardType::UNKNOWN.is_detected());
        assert!(!GraphicsCardType::ERROR.is_detected());
    }

    #[test]
    fn test_serializes_as_name() {
        let json = serde_json::to_string(&GraphicsCardType::NVIDIA).unwrap();
        assert_eq!(json, "\"NVIDIA\"");
    }
}
