// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod document;
mod validation;

// This is the public API of the document validation library
pub use document::DocumentKind;
pub use validation::{CnpjChecksum, CpfChecksum, Validator};

/// Returns true if `doc` is a structurally valid CPF with correct check
/// digits. Conventional punctuation (`XXX.XXX.XXX-XX`) is accepted but not
/// required.
pub fn is_cpf(doc: &str) -> bool {
    CpfChecksum.is_valid(doc)
}

/// Returns true if `doc` is a structurally valid CNPJ with correct check
/// digits. Conventional punctuation (`XX.XXX.XXX/YYYY-ZZ`) is accepted but
/// not required.
pub fn is_cnpj(doc: &str) -> bool {
    CnpjChecksum.is_valid(doc)
}
