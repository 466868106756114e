use lazy_static::lazy_static;
use regex::Regex;

use crate::validation::{collect_digits, verify_check_digits, Validator};

pub struct CpfChecksum;

const CPF_BASE_DIGIT_COUNT: usize = 9;
const CPF_FIRST_DIGIT_WEIGHT: u32 = 10;

lazy_static! {
    // XXX.XXX.XXX-XX, each separator individually optional but position-fixed
    static ref CPF_PATTERN: Regex = Regex::new(r"^\d{3}\.?\d{3}\.?\d{3}-?\d{2}$").unwrap();
}

impl Validator for CpfChecksum {
    // https://pt.wikipedia.org/wiki/Cadastro_de_Pessoas_F%C3%ADsicas#C%C3%A1lculo_do_d%C3%ADgito_verificador
    fn is_valid(&self, doc: &str) -> bool {
        if !CPF_PATTERN.is_match(doc) {
            return false;
        }
        verify_check_digits(
            &collect_digits(doc),
            CPF_BASE_DIGIT_COUNT,
            CPF_FIRST_DIGIT_WEIGHT,
        )
    }
}
