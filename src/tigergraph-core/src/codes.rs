/// Response codes that accompany a successful `results` payload rather than
/// a failure. Any other non-null `code` in a response envelope is an error.
pub const GOOD_CODES: &[&str] = &["REST-0001", "REST-0003"];

pub fn is_good_code(code: &str) -> bool {
    GOOD_CODES.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_good_codes_pass() {
        assert!(is_good_code("REST-0001"));
        assert!(is_good_code("REST-0003"));
    }

    #[test]
    fn test_other_codes_fail() {
        assert!(!is_good_code("REST-1004"));
        assert!(!is_good_code("601"));
        assert!(!is_good_code(""));
    }
}
