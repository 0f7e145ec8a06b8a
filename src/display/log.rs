//! Operation log display formatting
//!
//! Formats log entries as a column-aligned table for terminal output.

use crate::audit::LogEntry;

/// Format log entries as a table, oldest first
pub fn format_log_entries(entries: &[LogEntry]) -> String {
    if entries.is_empty() {
        return "No operations logged.".to_string();
    }

    let op_width = entries
        .iter()
        .map(|e| e.operation.to_string().len())
        .max()
        .unwrap_or(9)
        .max(9);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<23}  {:<op_width$}  {:>12}  {:>12}  {:>12}\n",
        "Timestamp",
        "Operation",
        "Amount",
        "Before",
        "After",
        op_width = op_width,
    ));
    output.push_str(&format!(
        "{:-<23}  {:-<op_width$}  {:->12}  {:->12}  {:->12}\n",
        "",
        "",
        "",
        "",
        "",
        op_width = op_width,
    ));

    for entry in entries {
        let amount = entry.amount.map(|a| a.to_string()).unwrap_or_default();
        output.push_str(&format!(
            "{:<23}  {:<op_width$}  {:>12}  {:>12}  {:>12}\n",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            entry.operation.to_string(),
            amount,
            entry.before,
            entry.after,
            op_width = op_width,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Operation;

    #[test]
    fn test_empty() {
        assert_eq!(format_log_entries(&[]), "No operations logged.");
    }

    #[test]
    fn test_table_rows() {
        let entries = vec![
            LogEntry::for_operation(&Operation::Add(5), 0, 5).unwrap(),
            LogEntry::for_operation(&Operation::Clear, 5, 0).unwrap(),
        ];

        let output = format_log_entries(&entries);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Operation"));
        assert!(lines[2].contains("ADD"));
        assert!(lines[2].trim_end().ends_with('5'));
        assert!(lines[3].contains("CLEAR"));
    }
}
