//! Operation log entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Operation;

/// Kinds of mutation recorded in the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Add,
    Subtract,
    Clear,
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationKind::Add => write!(f, "ADD"),
            OperationKind::Subtract => write!(f, "SUBTRACT"),
            OperationKind::Clear => write!(f, "CLEAR"),
        }
    }
}

/// A single operation log entry
///
/// Records one mutation with the total before and after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: OperationKind,

    /// Amount added or subtracted (absent for clear)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    /// Total before the operation
    pub before: i64,

    /// Total after the operation
    pub after: i64,
}

impl LogEntry {
    /// Build an entry for a mutating operation
    ///
    /// Returns `None` for `Operation::Total`, which is a read.
    pub fn for_operation(op: &Operation, before: i64, after: i64) -> Option<Self> {
        let (operation, amount) = match *op {
            Operation::Add(amount) => (OperationKind::Add, Some(amount)),
            Operation::Subtract(amount) => (OperationKind::Subtract, Some(amount)),
            Operation::Clear => (OperationKind::Clear, None),
            Operation::Total => return None,
        };

        Some(Self {
            timestamp: Utc::now(),
            operation,
            amount,
            before,
            after,
        })
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation
        );

        if let Some(amount) = self.amount {
            output.push_str(&format!(" {}", amount));
        }

        output.push_str(&format!(" ({} -> {})", self.before, self.after));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(OperationKind::Add.to_string(), "ADD");
        assert_eq!(OperationKind::Subtract.to_string(), "SUBTRACT");
        assert_eq!(OperationKind::Clear.to_string(), "CLEAR");
    }

    #[test]
    fn test_for_operation() {
        let entry = LogEntry::for_operation(&Operation::Add(5), 0, 5).unwrap();
        assert_eq!(entry.operation, OperationKind::Add);
        assert_eq!(entry.amount, Some(5));
        assert_eq!((entry.before, entry.after), (0, 5));

        let entry = LogEntry::for_operation(&Operation::Clear, 7, 0).unwrap();
        assert_eq!(entry.operation, OperationKind::Clear);
        assert_eq!(entry.amount, None);

        assert!(LogEntry::for_operation(&Operation::Total, 3, 3).is_none());
    }

    #[test]
    fn test_clear_omits_amount() {
        let entry = LogEntry::for_operation(&Operation::Clear, 7, 0).unwrap();
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("amount"));
        assert!(json.contains(r#""operation":"clear""#));

        let deserialized: LogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, entry);
    }

    #[test]
    fn test_human_readable_format() {
        let entry = LogEntry::for_operation(&Operation::Subtract(2), -5, -7).unwrap();
        let formatted = entry.format_human_readable();
        assert!(formatted.contains("SUBTRACT 2"));
        assert!(formatted.ends_with("(-5 -> -7)"));
        assert!(formatted.contains("UTC]"));
    }
}
