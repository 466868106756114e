use serde::{Deserialize, Serialize};

use crate::validation::{CnpjChecksum, CpfChecksum, Validator};

/// Which taxpayer document a piece of text claims to be. Deserializable so
/// callers can pick the validator from configuration.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentKind {
    Cpf,
    Cnpj,
}

impl DocumentKind {
    /// Length of the canonical digit-only form.
    pub fn digit_count(&self) -> usize {
        match self {
            DocumentKind::Cpf => 11,
            DocumentKind::Cnpj => 14,
        }
    }
}

impl Validator for DocumentKind {
    fn is_valid(&self, doc: &str) -> bool {
        match self {
            DocumentKind::Cpf => CpfChecksum.is_valid(doc),
            DocumentKind::Cnpj => CnpjChecksum.is_valid(doc),
        }
    }
}
