//! Indentation of generated declarations.

const SPACES: &str = "        ";

/// One level of indentation in generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces, clamped to at most eight per level.
    Spaces(u8),
    Tab,
}

impl Indent {
    /// The indentation of every generated declaration file.
    pub const FOUR_SPACES: Self = Self::Spaces(4);

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(width) => &SPACES[..usize::from(*width).min(SPACES.len())],
            Self::Tab => "\t",
        }
    }

    /// The indentation of `depth` nested levels.
    pub fn repeat(&self, depth: usize) -> String {
        self.as_str().repeat(depth)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::FOUR_SPACES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(3).as_str(), "   ");
        assert_eq!(Indent::Spaces(12).as_str(), "        ");
        assert_eq!(Indent::Tab.as_str(), "\t");
        assert_eq!(Indent::default(), Indent::Spaces(4));
    }

    #[test]
    fn test_repeat() {
        assert_eq!(Indent::Spaces(2).repeat(3), "      ");
        assert_eq!(Indent::Tab.repeat(0), "");
    }
}
