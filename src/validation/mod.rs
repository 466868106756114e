mod cnpj;
mod cpf;

pub use crate::validation::cnpj::CnpjChecksum;
pub use crate::validation::cpf::CpfChecksum;

pub trait Validator: Send + Sync {
    /// Returns true if the candidate document is well formed and carries
    /// correct check digits.
    fn is_valid(&self, doc: &str) -> bool;
}

/// Canonical digit sequence of a document: every decimal digit, in order.
fn collect_digits(doc: &str) -> Vec<u32> {
    doc.chars().filter_map(|c| c.to_digit(10)).collect()
}

/// A run of identical digits satisfies the mod-11 arithmetic and is a
/// known-invalid class.
fn all_digits_equal(digits: &[u32]) -> bool {
    match digits.first() {
        Some(first) => digits.iter().all(|d| d == first),
        None => false,
    }
}

/// Computes one check digit over `digits`. The weight starts at
/// `starting_weight`, decreases by one per digit and resets to 9 whenever it
/// would drop below 2. Remainders 0 and 1 map to check digit 0.
fn mod11_check_digit(digits: &[u32], starting_weight: u32) -> u32 {
    let mut weight = starting_weight;
    let mut sum = 0;
    for &digit in digits {
        sum += digit * weight;
        weight -= 1;
        if weight < 2 {
            weight = 9;
        }
    }
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}

/// Shared pipeline for both document kinds once the format pattern has
/// approved the input. `base_len` is the digit count ahead of the two check
/// digits and `first_weight` the starting weight of the first one; the second
/// check digit always starts one weight higher and covers the first.
fn verify_check_digits(digits: &[u32], base_len: usize, first_weight: u32) -> bool {
    if digits.len() != base_len + 2 {
        return false;
    }
    if all_digits_equal(digits) {
        return false;
    }

    let mut base = digits[..base_len].to_vec();
    let first = mod11_check_digit(&base, first_weight);
    base.push(first);
    let second = mod11_check_digit(&base, first_weight + 1);

    first == digits[base_len] && second == digits[base_len + 1]
}
