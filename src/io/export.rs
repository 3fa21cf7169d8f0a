use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Ledger, Statement};

/// Versioned wrapper around a ledger statement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub statement: Statement,
}

/// Render a statement as pretty-printed JSON.
pub fn statement_to_json(statement: &Statement) -> Result<String> {
    Ok(serde_json::to_string_pretty(statement)?)
}

/// Exporter for writing ledger data out as JSON
pub struct Exporter<'a> {
    ledger: &'a Ledger,
}

impl<'a> Exporter<'a> {
    pub fn new(ledger: &'a Ledger) -> Self {
        Self { ledger }
    }

    /// Write a versioned statement snapshot to `writer`.
    pub fn export_statement_json<W: Write>(&self, mut writer: W) -> Result<StatementSnapshot> {
        let snapshot = StatementSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            statement: self.ledger.statement(),
        };

        let json = serde_json::to_string_pretty(&snapshot)?;
        writer.write_all(json.as_bytes())?;
        writer.flush()?;

        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_to_json() -> Result<()> {
        let mut ledger = Ledger::open("checking", 1000);
        ledger.deposit(500)?;

        let json = statement_to_json(&ledger.statement())?;
        let value: serde_json::Value = serde_json::from_str(&json)?;

        assert_eq!(value["label"], "checking");
        assert_eq!(value["balance"], 1500);
        assert_eq!(value["history"][0]["amount_cents"], 500);
        Ok(())
    }

    #[test]
    fn test_export_statement_json_reads_back() -> Result<()> {
        let mut ledger = Ledger::open("checking", 1000);
        ledger.withdraw(250)?;

        let mut buffer = Vec::new();
        let snapshot = Exporter::new(&ledger).export_statement_json(&mut buffer)?;

        let parsed: StatementSnapshot = serde_json::from_slice(&buffer)?;
        assert_eq!(parsed.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(parsed.statement, snapshot.statement);
        assert_eq!(parsed.statement.balance, 750);
        Ok(())
    }
}
