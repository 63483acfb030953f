//! Doctrinal review scan over draft text.
//!
//! # Responsibility
//! - Flag terms that usually signal doctrinal drift in sermon drafts.
//!
//! # Invariants
//! - Matching is case-insensitive substring search; the scan never fails
//!   and an empty draft yields no findings.

/// Flagged term -> review note shown to the writer.
const DOCTRINE_FLAGS: &[(&str, &str)] = &[
    (
        "energia",
        "CUIDADO: Termo metafísico vago. Use 'Espírito Santo' ou 'Poder de Deus'.",
    ),
    (
        "universo",
        "ALERTA: Substituição panteísta. O correto é 'O Criador'.",
    ),
    (
        "força",
        "NOTA: Verifique se refere a Star Wars ou ao Senhor.",
    ),
    (
        "vibrar",
        "NOTA: Linguagem emocionalista/coaching detectada.",
    ),
];

/// Scans a draft and returns the review notes for every flagged term found.
pub fn scan_doctrine(text: &str) -> Vec<&'static str> {
    if text.is_empty() {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    DOCTRINE_FLAGS
        .iter()
        .filter(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, note)| *note)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::scan_doctrine;

    #[test]
    fn empty_draft_has_no_findings() {
        assert!(scan_doctrine("").is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let findings = scan_doctrine("Sinta a ENERGIA do Universo");
        assert_eq!(findings.len(), 2);
    }

    #[test]
    fn clean_draft_passes() {
        assert!(scan_doctrine("A graça de Deus basta").is_empty());
    }
}
