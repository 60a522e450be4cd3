use itertools::Itertools;


// If a string consists of a single character, returns the character. Otherwise returns none.
pub fn as_single_char(s: &str) -> Option<char> {
    s.chars().collect_tuple().map(|(single_char,)| single_char)
}

// Mimics JS truthiness for the values a board cell can hold.
pub fn is_falsy_json(value: &serde_json::Value) -> bool {
    use serde_json::Value;
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_none_or(|x| x == 0.0 || x.is_nan()),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}


#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn single_char() {
        assert_eq!(as_single_char("P"), Some('P'));
        assert_eq!(as_single_char("♞"), Some('♞'));
        assert_eq!(as_single_char(""), None);
        assert_eq!(as_single_char("PN"), None);
    }

    #[test]
    fn falsy() {
        assert!(is_falsy_json(&json!(null)));
        assert!(is_falsy_json(&json!(false)));
        assert!(is_falsy_json(&json!(0)));
        assert!(is_falsy_json(&json!(0.0)));
        assert!(is_falsy_json(&json!("")));
        assert!(!is_falsy_json(&json!(" ")));
        assert!(!is_falsy_json(&json!(true)));
        assert!(!is_falsy_json(&json!(1)));
        assert!(!is_falsy_json(&json!([])));
        assert!(!is_falsy_json(&json!({})));
    }
}
