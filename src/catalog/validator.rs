//! Catalog data validation.
//!
//! Parsing guarantees structure; validation checks the data invariants a
//! well-formed file can still break: duplicate `(context, source)` pairs,
//! and translations whose placeholders no longer mirror their source.
//! Placeholder mismatches are warnings rather than faults, since the
//! formatter degrades (it leaves unmatched tokens verbatim) instead of
//! failing at render time.

use crate::catalog::model::{Message, TranslationState, TsDocument};
use crate::catalog::placeholders;
use std::collections::HashSet;

/// Validation report containing errors and warnings about a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Data errors: the file should be fixed before shipping
    pub errors: Vec<String>,

    /// Non-critical issues worth a translator's attention
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a parsed document against the catalog data invariants.
pub fn validate_document(doc: &TsDocument) -> ValidationReport {
    let mut report = ValidationReport::new();

    for context in &doc.contexts {
        let mut seen: HashSet<(&str, Option<&str>)> = HashSet::new();

        for message in &context.messages {
            let key = (message.source.as_str(), message.comment.as_deref());
            if !seen.insert(key) {
                report.errors.push(format!(
                    "duplicate message '{}' in context '{}'",
                    message.source, context.name
                ));
            }

            if !message.is_translated() {
                if message.translation.is_empty() && message.state == TranslationState::Finished {
                    report.warnings.push(format!(
                        "empty translation for '{}' in context '{}'",
                        message.source, context.name
                    ));
                }
                // Unfinished/vanished entries fall back to source at lookup;
                // nothing to check against
                continue;
            }

            check_placeholders(&mut report, &context.name, message);
        }
    }

    report
}

/// Compare source and translation token sequences.
fn check_placeholders(report: &mut ValidationReport, context: &str, message: &Message) {
    let source_tokens = placeholders::positional(&message.source);
    let translation_tokens = placeholders::positional(&message.translation);

    if source_tokens != translation_tokens {
        report.warnings.push(format!(
            "placeholder mismatch in context '{}' for '{}': source has {:?}, translation has {:?}",
            context, message.source, source_tokens, translation_tokens
        ));
    }

    let source_escapes = placeholders::escape_count(&message.source);
    let translation_escapes = placeholders::escape_count(&message.translation);
    if source_escapes != translation_escapes {
        report.warnings.push(format!(
            "%% escape mismatch in context '{}' for '{}': source has {}, translation has {}",
            context, message.source, source_escapes, translation_escapes
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::MessageContext;

    fn document_with(messages: Vec<Message>) -> TsDocument {
        let mut doc = TsDocument::new("2.1", "ru_RU");
        let mut ctx = MessageContext::new("QObject");
        ctx.messages = messages;
        doc.contexts.push(ctx);
        doc
    }

    // ==================== Clean Catalog Tests ====================

    #[test]
    fn test_validate_clean_catalog() {
        let doc = document_with(vec![
            Message::new("Data usage: %1 / %2", "Использование данных: %1 / %2"),
            Message::new("Unlimited", "Неограниченный"),
            Message::new("Update downloading: %1%%", "Загрузка обновлений: %1%%"),
        ]);

        let report = validate_document(&doc);
        assert!(report.is_clean(), "unexpected findings: {report:?}");
    }

    #[test]
    fn test_validate_empty_document_is_clean() {
        let doc = TsDocument::new("2.1", "ru_RU");
        assert!(validate_document(&doc).is_clean());
    }

    // ==================== Duplicate Tests ====================

    #[test]
    fn test_validate_duplicate_pair_is_error() {
        let doc = document_with(vec![
            Message::new("On", "На"),
            Message::new("On", "Вкл"),
        ]);

        let report = validate_document(&doc);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("duplicate"));
        assert!(report.errors[0].contains("QObject"));
    }

    #[test]
    fn test_validate_same_source_in_different_contexts_is_fine() {
        let mut doc = document_with(vec![Message::new("On", "На")]);
        let mut other = MessageContext::new("BackendCommander");
        other.messages.push(Message::new("On", "На"));
        doc.contexts.push(other);

        assert!(validate_document(&doc).is_clean());
    }

    #[test]
    fn test_validate_same_source_distinct_comments_is_fine() {
        let mut first = Message::new("On", "На");
        first.comment = Some("firewall state".to_string());
        let mut second = Message::new("On", "Вкл");
        second.comment = Some("connect state".to_string());

        let report = validate_document(&document_with(vec![first, second]));
        assert!(report.is_clean());
    }

    // ==================== Placeholder Tests ====================

    #[test]
    fn test_validate_missing_placeholder_is_warning() {
        let doc = document_with(vec![Message::new("Error: %1", "Ошибка")]);

        let report = validate_document(&doc);
        assert!(!report.has_errors());
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("placeholder mismatch"));
    }

    #[test]
    fn test_validate_reordered_placeholders_is_warning() {
        let doc = document_with(vec![Message::new("Protocol: %1:%2", "Протокол: %2:%1")]);

        let report = validate_document(&doc);
        assert!(report.has_warnings());
    }

    #[test]
    fn test_validate_escape_count_mismatch_is_warning() {
        let doc = document_with(vec![Message::new(
            "Update downloading: %1%%",
            "Загрузка обновлений: %1",
        )]);

        let report = validate_document(&doc);
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("%% escape mismatch"));
    }

    #[test]
    fn test_validate_repeated_placeholder_must_repeat() {
        let doc = document_with(vec![Message::new("%1 of %1", "%1 из")]);

        let report = validate_document(&doc);
        assert!(report.has_warnings());
    }

    // ==================== State Tests ====================

    #[test]
    fn test_validate_unfinished_translation_not_checked() {
        let mut msg = Message::new("Error: %1", "");
        msg.state = TranslationState::Unfinished;

        let report = validate_document(&document_with(vec![msg]));
        assert!(report.is_clean());
    }

    #[test]
    fn test_validate_empty_finished_translation_is_warning() {
        let doc = document_with(vec![Message::new("Rate limited", "")]);

        let report = validate_document(&doc);
        assert!(!report.has_errors());
        assert!(report.warnings[0].contains("empty translation"));
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_report_new_is_clean() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_report_with_error_not_clean() {
        let mut report = ValidationReport::new();
        report.errors.push("boom".to_string());
        assert!(report.has_errors());
        assert!(!report.is_clean());
    }
}
