//! Discovery selectors.
//!
//! A selector names something an engine should search for tests in. The
//! payloads are opaque here: a path is never checked for existence and a
//! class or method name is never resolved.

use crate::error::{RequestError, RequestResult};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// A single discovery target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DiscoverySelector {
    Package(PackageSelector),
    Class(ClassSelector),
    Method(MethodSelector),
    Path(PathSelector),
    UniqueId(UniqueIdSelector),
}

impl DiscoverySelector {
    pub fn package(package_name: impl Into<String>) -> Self {
        PackageSelector::for_package_name(package_name).into()
    }

    pub fn class_name(class_name: impl Into<String>) -> Self {
        ClassSelector::for_class_name(class_name).into()
    }

    pub fn method(class_name: impl Into<String>, method_name: impl Into<String>) -> Self {
        MethodSelector::for_method(class_name, method_name).into()
    }

    pub fn path(path: impl AsRef<Path>) -> Self {
        PathSelector::for_path(path).into()
    }

    pub fn unique_id(unique_id: impl Into<String>) -> Self {
        UniqueIdSelector::for_unique_id(unique_id).into()
    }

    /// Short name of the variant, as used in summaries
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Package(_) => "package",
            Self::Class(_) => "class",
            Self::Method(_) => "method",
            Self::Path(_) => "path",
            Self::UniqueId(_) => "unique-id",
        }
    }
}

impl fmt::Display for DiscoverySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Package(s) => write!(f, "package:{}", s.package_name()),
            Self::Class(s) => write!(f, "class:{}", s.class_name()),
            Self::Method(s) => write!(f, "method:{s}"),
            Self::Path(s) => write!(f, "path:{}", s.path().display()),
            Self::UniqueId(s) => write!(f, "unique-id:{}", s.unique_id()),
        }
    }
}

/// Lets a request hand out the selectors of one variant.
pub trait SelectorVariant {
    fn from_selector(selector: &DiscoverySelector) -> Option<&Self>;
}

macro_rules! selector_variant {
    ($variant:ident, $ty:ty) => {
        impl SelectorVariant for $ty {
            fn from_selector(selector: &DiscoverySelector) -> Option<&Self> {
                match selector {
                    DiscoverySelector::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        }

        impl From<$ty> for DiscoverySelector {
            fn from(selector: $ty) -> Self {
                DiscoverySelector::$variant(selector)
            }
        }
    };
}

selector_variant!(Package, PackageSelector);
selector_variant!(Class, ClassSelector);
selector_variant!(Method, MethodSelector);
selector_variant!(Path, PathSelector);
selector_variant!(UniqueId, UniqueIdSelector);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PackageSelector {
    package_name: String,
}

impl PackageSelector {
    pub fn for_package_name(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
        }
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }
}

/// How a class selector was created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassOrigin {
    /// From a Rust type known at compile time
    Type,
    /// From a plain name
    Name,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ClassSelector {
    class_name: String,
    origin: ClassOrigin,
}

impl ClassSelector {
    pub fn for_class_name(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            origin: ClassOrigin::Name,
        }
    }

    /// Select a type by reference. The name recorded is `std::any::type_name`.
    pub fn for_type<T: ?Sized>() -> Self {
        Self {
            class_name: std::any::type_name::<T>().to_string(),
            origin: ClassOrigin::Type,
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn origin(&self) -> ClassOrigin {
        self.origin
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MethodSelector {
    class_name: String,
    method_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameter_types: Option<Vec<String>>,
}

impl MethodSelector {
    pub fn for_method(class_name: impl Into<String>, method_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            method_name: method_name.into(),
            parameter_types: None,
        }
    }

    pub fn for_method_with_parameter_types<I, S>(
        class_name: impl Into<String>,
        method_name: impl Into<String>,
        parameter_types: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            class_name: class_name.into(),
            method_name: method_name.into(),
            parameter_types: Some(parameter_types.into_iter().map(Into::into).collect()),
        }
    }

    pub fn for_type_method<T: ?Sized>(method_name: impl Into<String>) -> Self {
        Self::for_method(std::any::type_name::<T>(), method_name)
    }

    /// Parse `Class#method` or `Class#method(TypeA, TypeB)`.
    ///
    /// `Class#method()` records an empty parameter list, which differs from
    /// leaving the parameter types out entirely.
    pub fn parse(fully_qualified: &str) -> RequestResult<Self> {
        let invalid = || RequestError::InvalidMethodName(fully_qualified.to_string());

        let (class_name, rest) = fully_qualified.split_once('#').ok_or_else(invalid)?;
        let class_name = class_name.trim();
        if class_name.is_empty() || rest.contains('#') {
            return Err(invalid());
        }

        let (method_name, parameter_types) = match rest.find('(') {
            None => (rest.trim(), None),
            Some(open) => {
                let params = rest[open + 1..].strip_suffix(')').ok_or_else(invalid)?;
                if params.contains('(') || params.contains(')') {
                    return Err(invalid());
                }
                let types: Vec<String> = if params.trim().is_empty() {
                    Vec::new()
                } else {
                    params.split(',').map(|p| p.trim().to_string()).collect()
                };
                if types.iter().any(String::is_empty) {
                    return Err(invalid());
                }
                (rest[..open].trim(), Some(types))
            }
        };

        if method_name.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            class_name: class_name.to_string(),
            method_name: method_name.to_string(),
            parameter_types,
        })
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    pub fn parameter_types(&self) -> Option<&[String]> {
        self.parameter_types.as_deref()
    }
}

impl fmt::Display for MethodSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.class_name, self.method_name)?;
        if let Some(types) = &self.parameter_types {
            write!(f, "({})", types.join(", "))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PathSelector {
    path: PathBuf,
}

impl PathSelector {
    pub fn for_path(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct UniqueIdSelector {
    unique_id: String,
}

impl UniqueIdSelector {
    pub fn for_unique_id(unique_id: impl Into<String>) -> Self {
        Self {
            unique_id: unique_id.into(),
        }
    }

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SampleTestClass;

    #[test]
    fn test_variant_lookup() {
        let selector = DiscoverySelector::package("org.example");

        assert_eq!(
            PackageSelector::from_selector(&selector).map(PackageSelector::package_name),
            Some("org.example")
        );
        assert!(ClassSelector::from_selector(&selector).is_none());
        assert_eq!(selector.kind(), "package");
    }

    #[test]
    fn test_class_selector_from_type_and_name() {
        let by_type = ClassSelector::for_type::<SampleTestClass>();
        let by_name = ClassSelector::for_class_name("com.example.SampleTestClass");

        assert!(by_type.class_name().ends_with("SampleTestClass"));
        assert_eq!(by_type.origin(), ClassOrigin::Type);
        assert_eq!(by_name.origin(), ClassOrigin::Name);
    }

    #[test]
    fn test_path_is_not_checked() {
        let selector = PathSelector::for_path("/some/local/path/that/does/not/exist");
        assert_eq!(
            selector.path(),
            Path::new("/some/local/path/that/does/not/exist")
        );
    }

    #[test]
    fn test_parse_method_without_parameters() {
        let selector = MethodSelector::parse("com.example.SampleTest#test2").unwrap();

        assert_eq!(selector.class_name(), "com.example.SampleTest");
        assert_eq!(selector.method_name(), "test2");
        assert_eq!(selector.parameter_types(), None);
    }

    #[test]
    fn test_parse_method_with_parameters() {
        let selector = MethodSelector::parse("Sample#testWithParams(int, java.lang.String)").unwrap();

        assert_eq!(selector.method_name(), "testWithParams");
        assert_eq!(
            selector.parameter_types(),
            Some(&["int".to_string(), "java.lang.String".to_string()][..])
        );
        assert_eq!(
            selector.to_string(),
            "Sample#testWithParams(int, java.lang.String)"
        );
    }

    #[test]
    fn test_parse_method_with_empty_parameter_list() {
        let selector = MethodSelector::parse("Sample#test()").unwrap();
        assert_eq!(selector.parameter_types(), Some(&[] as &[String]));
    }

    #[test]
    fn test_parse_rejects_malformed_names() {
        for input in [
            "Sample",
            "#test",
            "Sample#",
            "Sample#test(",
            "Sample#test(int)x",
            "Sample#test(int,)",
            "Sample#a#b",
            "  #  ",
        ] {
            assert!(
                matches!(MethodSelector::parse(input), Err(RequestError::InvalidMethodName(_))),
                "expected '{input}' to be rejected"
            );
        }
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let json = serde_json::to_value(DiscoverySelector::unique_id("engine:bla:id1")).unwrap();

        assert_eq!(json["kind"], "unique-id");
        assert_eq!(json["unique_id"], "engine:bla:id1");
    }
}
