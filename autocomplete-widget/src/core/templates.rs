//! Option formatting hooks

use std::fmt;

/// Caller-supplied pure functions that turn an option into text.
///
/// `input_value` produces the query text written back on commit (and used
/// for the hint); `suggestion` produces the text shown in the option row.
pub struct Templates<T> {
    input_value: Box<dyn Fn(&T) -> String>,
    suggestion: Box<dyn Fn(&T) -> String>,
}

impl<T> Templates<T> {
    pub fn new(
        input_value: impl Fn(&T) -> String + 'static,
        suggestion: impl Fn(&T) -> String + 'static,
    ) -> Self {
        Self {
            input_value: Box::new(input_value),
            suggestion: Box::new(suggestion),
        }
    }

    pub fn input_value(&self, option: &T) -> String {
        (self.input_value)(option)
    }

    pub fn suggestion(&self, option: &T) -> String {
        (self.suggestion)(option)
    }
}

impl<T: AsRef<str>> Templates<T> {
    /// Both templates return the option text unchanged.
    pub fn plain() -> Self {
        Self::new(|o: &T| o.as_ref().to_string(), |o: &T| o.as_ref().to_string())
    }
}

impl<T> fmt::Debug for Templates<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Templates").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Country {
        name: &'static str,
        code: &'static str,
    }

    #[test]
    fn test_plain_templates() {
        let t: Templates<String> = Templates::plain();
        let o = "Spain".to_string();
        assert_eq!(t.input_value(&o), "Spain");
        assert_eq!(t.suggestion(&o), "Spain");
    }

    #[test]
    fn test_custom_templates() {
        let t = Templates::new(
            |c: &Country| c.name.to_string(),
            |c: &Country| format!("{} ({})", c.name, c.code),
        );
        let fr = Country {
            name: "France",
            code: "FR",
        };
        assert_eq!(t.input_value(&fr), "France");
        assert_eq!(t.suggestion(&fr), "France (FR)");
    }
}
