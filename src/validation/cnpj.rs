use lazy_static::lazy_static;
use regex::Regex;

use crate::validation::{collect_digits, verify_check_digits, Validator};

pub struct CnpjChecksum;

const CNPJ_BASE_DIGIT_COUNT: usize = 12;
const CNPJ_FIRST_DIGIT_WEIGHT: u32 = 5;

lazy_static! {
    // XX.XXX.XXX/YYYY-ZZ, each separator individually optional but
    // position-fixed. The branch alternation admits 0001-9999 only; an
    // all-zero branch never names a real establishment.
    static ref CNPJ_PATTERN: Regex = Regex::new(
        r"^\d{2}\.?\d{3}\.?\d{3}/?(?:\d{3}[1-9]|\d{2}[1-9]\d|\d[1-9]\d{2}|[1-9]\d{3})-?\d{2}$"
    )
    .unwrap();
}

impl Validator for CnpjChecksum {
    // https://pt.wikipedia.org/wiki/Cadastro_Nacional_da_Pessoa_Jur%C3%ADdica
    fn is_valid(&self, doc: &str) -> bool {
        if !CNPJ_PATTERN.is_match(doc) {
            return false;
        }
        verify_check_digits(
            &collect_digits(doc),
            CNPJ_BASE_DIGIT_COUNT,
            CNPJ_FIRST_DIGIT_WEIGHT,
        )
    }
}
