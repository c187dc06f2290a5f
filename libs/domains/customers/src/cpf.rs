//! Brazilian individual taxpayer number (CPF).
//!
//! Eleven digits, the last two being check digits over the first nine and
//! ten respectively. Usually written `529.982.247-25`.

/// Number of digits in a CPF.
pub const CPF_LEN: usize = 11;

/// Strip formatting and keep the digits only.
///
/// `"529.982.247-25"` becomes `"52998224725"`. No validation happens here.
pub fn normalize(cpf: &str) -> String {
    cpf.chars().filter(char::is_ascii_digit).collect()
}

/// Whether `cpf`, formatted or not, is a well-formed CPF.
///
/// Rejects anything that is not exactly eleven digits once formatting is
/// removed, the repeated-digit sequences (`111.111.111-11` passes the check
/// digit arithmetic but is never issued) and wrong check digits.
pub fn is_valid(cpf: &str) -> bool {
    if cpf.chars().any(|c| !c.is_ascii_digit() && !matches!(c, '.' | '-' | ' ')) {
        return false;
    }

    let digits: Vec<u32> = cpf.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != CPF_LEN {
        return false;
    }

    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    check_digit(&digits[..9]) == digits[9] && check_digit(&digits[..10]) == digits[10]
}

/// Weights run from `len + 1` down to 2.
fn check_digit(digits: &[u32]) -> u32 {
    let weight_start = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (weight_start - i as u32))
        .sum();

    match (sum * 10) % 11 {
        10 => 0,
        digit => digit,
    }
}
