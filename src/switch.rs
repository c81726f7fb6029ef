use std::collections::HashMap;

use crate::error::ConfigError;

/// A flag that expands to a fixed key/value pair when present.
///
/// A switch is matched either by its single-character key (written after the
/// switch prefix, e.g. `-c`) or by its long alias (written after the optional
/// argument prefix, e.g. `--copy`). At least one of the two must be set. When
/// matched, the switch contributes its emitted `(name, value)` pair to the
/// optional mapping of the parse result.
///
/// # Example
///
/// ```
/// use cmdspec::SwitchArgument;
///
/// let sw = SwitchArgument::builder("copy", "true")
///     .key('c')
///     .alias("copy")
///     .description("Turns on copying.")
///     .build()?;
/// assert_eq!(Some('c'), sw.key());
/// assert_eq!("true", sw.value());
/// # Ok::<(), cmdspec::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchArgument {
    key: Option<char>,
    alias: Option<String>,
    name: String,
    value: String,
    description: String,
}

/// A builder struct for [`SwitchArgument`].
pub struct SwitchBuilder {
    key: Option<char>,
    alias: Option<String>,
    name: String,
    value: String,
    description: String,
}

impl SwitchBuilder {
    /// Set the single-character key of the switch.
    pub fn key(mut self, key: char) -> Self {
        self.key = Some(key);
        self
    }

    /// Set the long alias of the switch.
    pub fn alias(mut self, alias: &str) -> Self {
        self.alias = Some(alias.to_owned());
        self
    }

    /// Set the description of the switch.
    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_owned();
        self
    }

    /// Build the [`SwitchArgument`].
    ///
    /// # Error
    ///
    /// Returns [`ConfigError::MissingKeyAndAlias`] if neither a key nor an
    /// alias was set.
    pub fn build(self) -> Result<SwitchArgument, ConfigError> {
        if self.key.is_none() && self.alias.is_none() {
            return Err(ConfigError::MissingKeyAndAlias);
        }
        Ok(SwitchArgument {
            key: self.key,
            alias: self.alias,
            name: self.name,
            value: self.value,
            description: self.description,
        })
    }
}

impl SwitchArgument {
    /// Create a [`SwitchBuilder`] for a switch emitting the given
    /// `name`/`value` pair.
    pub fn builder(name: &str, value: &str) -> SwitchBuilder {
        SwitchBuilder {
            key: None,
            alias: None,
            name: name.to_owned(),
            value: value.to_owned(),
            description: String::new(),
        }
    }

    /// Get the single-character key, if any.
    pub fn key(&self) -> Option<char> {
        self.key
    }

    /// Get the long alias, if any.
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Get the key of the emitted pair.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the value of the emitted pair.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Get the description of the switch.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// An immutable collection of [`SwitchArgument`], queryable by key or alias.
///
/// Keys (in their one-character string form) and aliases share a single
/// lookup namespace: two switches collide whenever any of their string forms
/// are equal, regardless of role. Collisions fail at build time.
///
/// # Example
///
/// ```
/// use cmdspec::{SwitchArgument, SwitchMap};
///
/// let switches = SwitchMap::builder()
///     .add_switch(SwitchArgument::builder("copy", "true")
///         .key('c')
///         .alias("copy")
///         .build()?)?
///     .build();
/// assert!(switches.get("c").is_some());
/// assert!(switches.get("copy").is_some());
/// # Ok::<(), cmdspec::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SwitchMap {
    switches: Vec<SwitchArgument>,
    lookup: HashMap<String, usize>,
}

/// A builder struct for [`SwitchMap`].
#[derive(Default)]
pub struct SwitchMapBuilder {
    switches: Vec<SwitchArgument>,
    lookup: HashMap<String, usize>,
}

impl SwitchMapBuilder {
    /// Register a switch.
    ///
    /// # Error
    ///
    /// Returns [`ConfigError::DuplicateKey`] or [`ConfigError::DuplicateAlias`]
    /// if the switch's key or alias is already in use, under either role.
    pub fn add_switch(mut self, switch: SwitchArgument) -> Result<Self, ConfigError> {
        let index = self.switches.len();
        if let Some(key) = switch.key() {
            if self.lookup.insert(key.to_string(), index).is_some() {
                return Err(ConfigError::DuplicateKey(key));
            }
        }
        if let Some(alias) = switch.alias() {
            if self.lookup.insert(alias.to_owned(), index).is_some() {
                return Err(ConfigError::DuplicateAlias(alias.to_owned()));
            }
        }
        self.switches.push(switch);
        Ok(self)
    }

    /// Finalize the immutable [`SwitchMap`].
    pub fn build(self) -> SwitchMap {
        SwitchMap {
            switches: self.switches,
            lookup: self.lookup,
        }
    }
}

impl SwitchMap {
    /// Create a [`SwitchMapBuilder`] to register switches.
    pub fn builder() -> SwitchMapBuilder {
        SwitchMapBuilder::default()
    }

    /// Get a switch from its key or alias, or [`None`] if nothing is
    /// registered under that exact string.
    pub fn get(&self, token: &str) -> Option<&SwitchArgument> {
        self.lookup.get(token).map(|&i| &self.switches[i])
    }

    /// Get all registered switches, in registration order.
    pub fn values(&self) -> &[SwitchArgument] {
        &self.switches
    }

    /// Check if the map contains no switches.
    pub fn is_empty(&self) -> bool {
        self.switches.is_empty()
    }
}
