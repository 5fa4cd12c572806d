//! Environment variable helpers

/// Read an environment variable as a string, empty if unset or not UTF-8.
///
/// Secrets sourced this way fail at use time rather than at startup, so a
/// missing variable is deliberately not an error here.
pub fn env_string(name: &str) -> String {
    std::env::var(name).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_string_reads_set_variable() {
        unsafe {
            std::env::set_var("GROQ_UTILS_TEST_VAR", "value");
        }
        assert_eq!(env_string("GROQ_UTILS_TEST_VAR"), "value");
        unsafe {
            std::env::remove_var("GROQ_UTILS_TEST_VAR");
        }
    }

    #[test]
    fn test_env_string_is_empty_when_unset() {
        assert_eq!(env_string("GROQ_UTILS_TEST_VAR_UNSET"), "");
    }
}
