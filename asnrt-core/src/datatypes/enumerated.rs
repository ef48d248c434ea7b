//! Enumerated value capability

/// Capability of generated ENUMERATED types
///
/// Generated code implements this for every ASN.1 ENUMERATED so that codecs
/// can encode a value by its ordinal and report it by name.
pub trait Enumerated {
    /// Identifier of the value as written in the ASN.1 module
    fn name(&self) -> &str;

    /// Numeric value of the enumeration item
    fn ordinal(&self) -> i32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Color {
        Red,
        Blue,
    }

    impl Enumerated for Color {
        fn name(&self) -> &str {
            match self {
                Color::Red => "red",
                Color::Blue => "blue",
            }
        }

        fn ordinal(&self) -> i32 {
            match self {
                Color::Red => 0,
                Color::Blue => 5,
            }
        }
    }

    #[test]
    fn test_enumerated_as_trait_object() {
        let values: Vec<Box<dyn Enumerated>> = vec![Box::new(Color::Red), Box::new(Color::Blue)];
        let names: Vec<&str> = values.iter().map(|v| v.name()).collect();
        assert_eq!(names, ["red", "blue"]);
        assert_eq!(values[1].ordinal(), 5);
    }
}
