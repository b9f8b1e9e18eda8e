//! Batches of encrypted messages.
//!
//! A batch is a JSON document shaped like
//! `{"messages": [{"id": 1, "encrypt_text": "..."}]}`. Every message with
//! ciphertext is cracked and written to a plain text report. Messages
//! without ciphertext are skipped, the cracker is never called on them.

use crate::config::Config;
use crate::crack_with_config;
use crate::error::KasiskiError;
use log::{info, trace, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Identifier of a message, the batch may use numbers or strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageId {
    /// A numeric id
    Number(i64),
    /// Any other id
    Text(String),
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageId::Number(n) => write!(f, "{}", n),
            MessageId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One encrypted record
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EncryptedMessage {
    /// Identifier carried through to the report
    pub id: MessageId,
    /// The ciphertext, may be missing
    #[serde(default)]
    pub encrypt_text: Option<String>,
}

/// The whole input document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageBatch {
    /// Messages in input order
    #[serde(default)]
    pub messages: Vec<EncryptedMessage>,
}

/// What the cracker made of one message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageReport {
    /// Identifier of the message
    pub id: MessageId,
    /// The recovered key
    pub key: String,
    /// The decrypted text
    pub plaintext: String,
}

/// The outcome of processing one message
#[derive(Debug, Clone, PartialEq)]
pub enum MessageOutcome {
    /// The message had ciphertext and was cracked
    Cracked(MessageReport),
    /// The message had no ciphertext
    Skipped(MessageId),
}

/// Parses a batch from a JSON string
pub fn parse_batch(json: &str) -> Result<MessageBatch, KasiskiError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads a batch from a JSON file
pub fn read_batch(path: &Path) -> Result<MessageBatch, KasiskiError> {
    trace!("Reading message batch from {}", path.display());
    let contents = fs::read_to_string(path)?;
    parse_batch(&contents)
}

/// Cracks every message that has ciphertext.
///
/// Messages are independent so they are cracked in parallel; the outcomes
/// keep the input order.
pub fn crack_batch(batch: &MessageBatch, config: &Config) -> Vec<MessageOutcome> {
    batch
        .messages
        .par_iter()
        .map(|message| match message.encrypt_text.as_deref() {
            Some(ciphertext) if !ciphertext.is_empty() => {
                let result = crack_with_config(ciphertext, config);
                info!("Processed message ID: {}", message.id);
                MessageOutcome::Cracked(MessageReport {
                    id: message.id.clone(),
                    key: result.key,
                    plaintext: result.unencrypted_text,
                })
            }
            _ => {
                warn!("Skipping message ID: {}, no 'encrypt_text' found.", message.id);
                MessageOutcome::Skipped(message.id.clone())
            }
        })
        .collect()
}

/// Renders the plain text report for the cracked messages
pub fn render_report(reports: &[MessageReport]) -> String {
    reports
        .iter()
        .map(|report| {
            format!(
                "Message ID: {}\nKey: {}\nDecrypted Text: {}\n\n",
                report.id, report.key, report.plaintext
            )
        })
        .collect()
}

/// Writes the report to `path`, replacing anything already there
pub fn write_report(path: &Path, reports: &[MessageReport]) -> Result<(), KasiskiError> {
    fs::write(path, render_report(reports))?;
    trace!("Wrote {} results to {}", reports.len(), path.display());
    Ok(())
}

/// Only the cracked messages, in order
pub fn cracked_reports(outcomes: &[MessageOutcome]) -> Vec<MessageReport> {
    outcomes
        .iter()
        .filter_map(|outcome| match outcome {
            MessageOutcome::Cracked(report) => Some(report.clone()),
            MessageOutcome::Skipped(_) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_ids_and_missing_text() {
        let batch = parse_batch(
            r#"{"messages": [
                {"id": 1, "encrypt_text": "LXFOPVEFRNHR"},
                {"id": "two"},
                {"id": 3, "encrypt_text": null}
            ]}"#,
        )
        .unwrap();
        assert_eq!(batch.messages.len(), 3);
        assert_eq!(batch.messages[0].id, MessageId::Number(1));
        assert_eq!(batch.messages[1].id, MessageId::Text("two".to_string()));
        assert!(batch.messages[1].encrypt_text.is_none());
        assert!(batch.messages[2].encrypt_text.is_none());
    }

    #[test]
    fn missing_messages_key_is_empty_batch() {
        let batch = parse_batch("{}").unwrap();
        assert!(batch.messages.is_empty());
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        let result = parse_batch("{\"messages\": [");
        assert!(matches!(result, Err(KasiskiError::Serialization(_))));
    }

    #[test]
    fn skips_empty_and_missing_ciphertext() {
        let batch = parse_batch(
            r#"{"messages": [
                {"id": 1, "encrypt_text": ""},
                {"id": 2},
                {"id": 3, "encrypt_text": "KHOOR"}
            ]}"#,
        )
        .unwrap();
        let outcomes = crack_batch(&batch, &Config::default());
        assert_eq!(outcomes[0], MessageOutcome::Skipped(MessageId::Number(1)));
        assert_eq!(outcomes[1], MessageOutcome::Skipped(MessageId::Number(2)));
        assert!(matches!(&outcomes[2], MessageOutcome::Cracked(r) if r.id == MessageId::Number(3)));
        assert_eq!(cracked_reports(&outcomes).len(), 1);
    }

    #[test]
    fn report_format() {
        let reports = vec![
            MessageReport {
                id: MessageId::Number(7),
                key: "LEMON".to_string(),
                plaintext: "ATTACKATDAWN".to_string(),
            },
            MessageReport {
                id: MessageId::Text("b".to_string()),
                key: "KEY".to_string(),
                plaintext: "HI".to_string(),
            },
        ];
        assert_eq!(
            render_report(&reports),
            "Message ID: 7\nKey: LEMON\nDecrypted Text: ATTACKATDAWN\n\nMessage ID: b\nKey: KEY\nDecrypted Text: HI\n\n"
        );
    }
}
