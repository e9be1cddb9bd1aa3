//! Parser configuration.

/// Inline constructs that can be toggled individually.
///
/// Disabling a construct removes its matcher from the engine's registry;
/// its markup then falls through to literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "kebab-case")
)]
pub struct Extensions {
    /// `**text**`
    pub bold: bool,
    /// `*text*`
    pub italic: bool,
    /// `` `code` ``
    pub code: bool,
    /// `![alt](url)`
    pub image: bool,
    /// `[text](url)`
    pub link: bool,
    /// `#tag`
    pub tag: bool,
    /// `~~text~~`
    pub strikethrough: bool,
}

impl Default for Extensions {
    fn default() -> Self {
        Self {
            bold: true,
            italic: true,
            code: true,
            image: true,
            link: true,
            tag: true,
            strikethrough: true,
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "kebab-case")
)]
pub struct Config {
    /// Bound on the nested re-parse of bold content. A span nested deeper
    /// than this is emitted as literal text instead of being matched.
    pub max_nesting_depth: usize,
    /// Which inline constructs the engine recognizes.
    pub extensions: Extensions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_nesting_depth: 4,
            extensions: Extensions::default(),
        }
    }
}

/// Builder for [`Config`].
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn max_nesting_depth(mut self, depth: usize) -> Self {
        self.config.max_nesting_depth = depth;
        self
    }

    pub fn extensions(mut self, extensions: Extensions) -> Self {
        self.config.extensions = extensions;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_every_extension() {
        let config = Config::default();
        assert!(config.extensions.bold);
        assert!(config.extensions.italic);
        assert!(config.extensions.code);
        assert!(config.extensions.image);
        assert!(config.extensions.link);
        assert!(config.extensions.tag);
        assert!(config.extensions.strikethrough);
    }

    #[test]
    fn test_builder() {
        let config = ConfigBuilder::default()
            .max_nesting_depth(2)
            .extensions(Extensions {
                code: false,
                ..Extensions::default()
            })
            .build();
        assert_eq!(config.max_nesting_depth, 2);
        assert!(!config.extensions.code);
        assert!(config.extensions.bold);
    }
}
