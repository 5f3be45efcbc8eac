//! Loaded template source.

use std::borrow::Cow;

use super::DomainError;

/// Template source code paired with the name it was requested under.
///
/// The name is the caller's logical name, never the resolved storage path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    code: Vec<u8>,
    name: String,
}

impl Source {
    pub fn new(code: impl Into<Vec<u8>>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Raw bytes as returned by the backend.
    pub fn code(&self) -> &[u8] {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Borrow the code as text.
    pub fn as_str(&self) -> Result<&str, DomainError> {
        std::str::from_utf8(&self.code).map_err(|_| DomainError::InvalidEncoding {
            name: self.name.clone(),
        })
    }

    /// Lossy view for display, replacing invalid sequences.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.code)
    }

    /// Take the code as an owned `String`.
    pub fn into_string(self) -> Result<String, DomainError> {
        let Self { code, name } = self;
        String::from_utf8(code).map_err(|_| DomainError::InvalidEncoding { name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_views() {
        let source = Source::new("{{ template }}", "test/Object.twig");
        assert_eq!(source.as_str().unwrap(), "{{ template }}");
        assert_eq!(source.name(), "test/Object.twig");
        assert_eq!(source.into_string().unwrap(), "{{ template }}");
    }

    #[test]
    fn invalid_utf8_is_reported_with_name() {
        let source = Source::new(vec![0xff, 0xfe], "bad.twig");
        assert_eq!(
            source.as_str(),
            Err(DomainError::InvalidEncoding {
                name: "bad.twig".into()
            })
        );
        assert_eq!(source.to_string_lossy(), "\u{fffd}\u{fffd}");
    }
}
