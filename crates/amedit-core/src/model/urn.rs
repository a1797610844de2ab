//! Element identifiers
//!
//! An element is named by `urn:samm:<namespace>:<major>.<minor>.<patch>#<name>`.
//! The namespace plus version is the element's [`NamespaceScope`]; documents,
//! copies and version bumps all operate on scopes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{EditError, Result};
use crate::vocab::URN_PREFIX;

/// Which component of a version to increase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VersionPart {
    Major,
    Minor,
    Patch,
}

/// Semantic version of a namespace (`major.minor.patch`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse `major.minor.patch`
    ///
    /// # Errors
    ///
    /// Returns `InvalidVersion` unless the value has exactly three numeric parts.
    pub fn parse(value: &str) -> Result<Self> {
        let invalid = || EditError::InvalidVersion {
            value: value.to_string(),
        };
        let mut parts = value.split('.');
        let mut next = || -> Result<u32> {
            let part = parts.next().ok_or_else(invalid)?;
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse::<u32>().map_err(|_| invalid())
        };
        let version = Version::new(next()?, next()?, next()?);
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(version)
    }

    /// The version with one component increased and all lower components reset
    ///
    /// # Errors
    ///
    /// Returns `InvalidVersion` if the component is already at its maximum.
    pub fn bumped(&self, part: VersionPart) -> Result<Self> {
        let bump = |n: u32| {
            n.checked_add(1).ok_or_else(|| EditError::InvalidVersion {
                value: self.to_string(),
            })
        };
        Ok(match part {
            VersionPart::Major => Version::new(bump(self.major)?, 0, 0),
            VersionPart::Minor => Version::new(self.major, bump(self.minor)?, 0),
            VersionPart::Patch => Version::new(self.major, self.minor, bump(self.patch)?),
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// A namespace together with its version
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NamespaceScope {
    pub namespace: String,
    pub version: Version,
}

impl NamespaceScope {
    pub fn new(namespace: impl Into<String>, version: Version) -> Self {
        Self {
            namespace: namespace.into(),
            version,
        }
    }

    /// Parse `<namespace>:<major>.<minor>.<patch>`
    ///
    /// # Errors
    ///
    /// Returns `InvalidUrn` if the namespace part is malformed, or
    /// `InvalidVersion` if the version part is.
    pub fn parse(value: &str) -> Result<Self> {
        let (namespace, version) = value.rsplit_once(':').ok_or_else(|| EditError::InvalidUrn {
            value: value.to_string(),
            reason: "expected <namespace>:<version>".to_string(),
        })?;
        validate_namespace(value, namespace)?;
        Ok(Self::new(namespace, Version::parse(version)?))
    }

    /// The same namespace with a bumped version
    ///
    /// # Errors
    ///
    /// Returns `InvalidVersion` if the bumped component would overflow.
    pub fn bumped(&self, part: VersionPart) -> Result<Self> {
        let version = self.version.bumped(part)?;
        Ok(Self::new(self.namespace.clone(), version))
    }

    /// Identifier of a named element inside this scope
    pub fn element(&self, name: impl Into<String>) -> ElementUrn {
        ElementUrn {
            scope: self.clone(),
            name: name.into(),
        }
    }

    /// `urn:samm:<namespace>:<version>#`
    pub fn urn_prefix(&self) -> String {
        format!("{}{}:{}#", URN_PREFIX, self.namespace, self.version)
    }
}

impl fmt::Display for NamespaceScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.version)
    }
}

/// Identifier of a named model element
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ElementUrn {
    pub scope: NamespaceScope,
    pub name: String,
}

impl ElementUrn {
    /// Parse an element URN
    ///
    /// Meta-model URNs such as
    /// `urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#Aspect` are rejected:
    /// their namespace part contains a `:`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidUrn` or `InvalidVersion` describing the malformed part.
    pub fn parse(value: &str) -> Result<Self> {
        let invalid = |reason: &str| EditError::InvalidUrn {
            value: value.to_string(),
            reason: reason.to_string(),
        };
        let rest = value
            .strip_prefix(URN_PREFIX)
            .ok_or_else(|| invalid("missing urn:samm: prefix"))?;
        let (scope_part, name) = rest
            .split_once('#')
            .ok_or_else(|| invalid("missing #<name> part"))?;
        if name.is_empty() || name.contains('#') || name.chars().any(char::is_whitespace) {
            return Err(invalid(
                "local name must be non-empty without '#' or whitespace",
            ));
        }
        let (namespace, version) = scope_part
            .rsplit_once(':')
            .ok_or_else(|| invalid("missing version part"))?;
        validate_namespace(value, namespace)?;
        Ok(Self {
            scope: NamespaceScope::new(namespace, Version::parse(version)?),
            name: name.to_string(),
        })
    }

    /// Parse an IRI if it is an element URN, `None` otherwise
    pub fn try_from_iri(iri: &str) -> Option<Self> {
        Self::parse(iri).ok()
    }

    /// The same local name in another scope
    pub fn with_scope(&self, scope: &NamespaceScope) -> Self {
        scope.element(self.name.clone())
    }

    /// The same scope with another local name
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        self.scope.element(name)
    }

    pub fn namespace(&self) -> &str {
        &self.scope.namespace
    }

    pub fn version(&self) -> Version {
        self.scope.version
    }
}

impl fmt::Display for ElementUrn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.scope.urn_prefix(), self.name)
    }
}

impl FromStr for ElementUrn {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ElementUrn {
    type Error = EditError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<ElementUrn> for String {
    fn from(urn: ElementUrn) -> Self {
        urn.to_string()
    }
}

fn validate_namespace(value: &str, namespace: &str) -> Result<()> {
    let ok = !namespace.is_empty()
        && namespace
            .split('.')
            .all(|segment| {
                !segment.is_empty()
                    && segment
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            });
    if ok {
        Ok(())
    } else {
        Err(EditError::InvalidUrn {
            value: value.to_string(),
            reason: format!("invalid namespace '{}'", namespace),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_element_urn() {
        let urn = ElementUrn::parse("urn:samm:org.eclipse.examples:1.0.0#Movement").unwrap();
        assert_eq!(urn.namespace(), "org.eclipse.examples");
        assert_eq!(urn.version(), Version::new(1, 0, 0));
        assert_eq!(urn.name, "Movement");
        assert_eq!(
            urn.to_string(),
            "urn:samm:org.eclipse.examples:1.0.0#Movement"
        );
    }

    #[test]
    fn test_meta_model_urn_is_not_an_element() {
        assert!(
            ElementUrn::try_from_iri("urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#Aspect")
                .is_none()
        );
        let xsd_string = "http://www.w3.org/2001/XMLSchema#string";
        assert!(ElementUrn::try_from_iri(xsd_string).is_none());
    }

    #[test]
    fn test_invalid_urns() {
        for bad in [
            "urn:samm:org.example:1.0.0",
            "urn:samm:org.example:1.0#X",
            "urn:samm::1.0.0#X",
            "urn:samm:org.example:1.0.0#",
            "urn:samm:org..example:1.0.0#X",
            "urn:other:org.example:1.0.0#X",
        ] {
            assert!(ElementUrn::parse(bad).is_err(), "accepted {}", bad);
        }
    }

    #[test]
    fn test_version_bumps_reset_lower_parts() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bumped(VersionPart::Major).unwrap(), Version::new(2, 0, 0));
        assert_eq!(v.bumped(VersionPart::Minor).unwrap(), Version::new(1, 3, 0));
        assert_eq!(v.bumped(VersionPart::Patch).unwrap(), Version::new(1, 2, 4));
    }

    #[test]
    fn test_version_bump_overflow_is_an_error() {
        let v = Version::parse("4294967295.4294967295.4294967295").unwrap();
        for part in [VersionPart::Major, VersionPart::Minor, VersionPart::Patch] {
            assert!(matches!(
                v.bumped(part),
                Err(EditError::InvalidVersion { .. })
            ));
        }
        // only the bumped component has to have room
        let v = Version::new(1, u32::MAX, 7);
        assert_eq!(v.bumped(VersionPart::Major).unwrap(), Version::new(2, 0, 0));
    }

    #[test]
    fn test_version_parse_rejects_garbage() {
        assert!(Version::parse("1.2").is_err());
        assert!(Version::parse("1.2.3.4").is_err());
        assert!(Version::parse("1.x.3").is_err());
        assert!(Version::parse("+1.2.3").is_err());
    }

    #[test]
    fn test_scope_parse_and_element() {
        let scope = NamespaceScope::parse("org.example:2.0.0").unwrap();
        assert_eq!(scope.to_string(), "org.example:2.0.0");
        assert_eq!(
            scope.element("Speed").to_string(),
            "urn:samm:org.example:2.0.0#Speed"
        );
    }

    #[test]
    fn test_urn_serializes_as_string() {
        let urn = ElementUrn::parse("urn:samm:org.example:1.0.0#Speed").unwrap();
        let json = serde_json::to_string(&urn).unwrap();
        assert_eq!(json, "\"urn:samm:org.example:1.0.0#Speed\"");
        let back: ElementUrn = serde_json::from_str(&json).unwrap();
        assert_eq!(back, urn);
    }
}
