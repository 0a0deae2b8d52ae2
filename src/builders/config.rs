//! Mock configuration object answering dotted-path lookups.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::double::{DoubleSet, MethodDouble, OutcomeSpec};
use crate::error::{Error, Result};
use crate::object::MockObject;
use crate::values::TestValue;

type Props = BTreeMap<String, TestValue>;

const GET: &str = "get";

/// A configuration object backed by an in-memory property tree.
///
/// `get("a.b.c")` walks nested objects and arrays, where an array segment is
/// a numeric index. A missing segment, or a step into a scalar, yields
/// [`TestValue::Undefined`]. Lookups go through a
/// `get` double, so tests can check which paths were read.
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeMap;
/// use testkit_doubles::builders::ConfigMock;
/// use testkit_doubles::values::TestValue;
///
/// let mut db = BTreeMap::new();
/// db.insert("host".to_string(), TestValue::from("localhost"));
/// let mut props = BTreeMap::new();
/// props.insert("db".to_string(), TestValue::Object(db));
///
/// let config = ConfigMock::new(TestValue::Object(props));
/// assert_eq!(config.get("db.host"), TestValue::from("localhost"));
/// assert_eq!(config.get("db.port"), TestValue::Undefined);
/// assert_eq!(config.getter().call_count(), 2);
/// ```
pub struct ConfigMock {
    set: DoubleSet<TestValue, String>,
    props: Arc<Mutex<Props>>,
    getter: MethodDouble<TestValue, String>,
}

impl ConfigMock {
    /// Create a config holding `props`. Anything but an object is replaced
    /// by an empty object.
    ///
    /// # Panics
    ///
    /// Panics if the `get` method cannot be installed.
    #[must_use]
    pub fn new(props: TestValue) -> Self {
        let props = Arc::new(Mutex::new(match props {
            TestValue::Object(map) => map,
            _ => Props::new(),
        }));

        let store = Arc::clone(&props);
        let set = DoubleSet::default();
        set.add_methods(
            GET,
            OutcomeSpec::factory(move |args: &[TestValue]| match args.first() {
                Some(TestValue::Str(path)) => lookup(&store.lock(), path),
                _ => TestValue::Undefined,
            }),
            true,
        )
        .expect("config get method is valid");

        let getter = set
            .double(GET)
            .expect("config get method was just installed");
        Self { set, props, getter }
    }

    /// Look up a dotted property path.
    pub fn get(&self, path: &str) -> TestValue {
        match self.set.target().invoke(GET, &[TestValue::from(path)]) {
            Ok(outcome) => outcome.ready().unwrap_or_default(),
            Err(err) => {
                tracing::warn!(%path, %err, "config mock get method is no longer available");
                TestValue::Undefined
            }
        }
    }

    /// Merge `props` into the store, overwriting same-named top-level keys.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `props` is not an object.
    pub fn add_properties(&self, props: TestValue) -> Result<&Self> {
        let TestValue::Object(map) = props else {
            return Err(Error::invalid_argument(1, "Invalid properties specified"));
        };
        self.props.lock().extend(map);
        Ok(self)
    }

    /// Snapshot of the current properties.
    #[must_use]
    pub fn props(&self) -> BTreeMap<String, TestValue> {
        self.props.lock().clone()
    }

    /// The double behind `get`.
    #[must_use]
    pub fn getter(&self) -> &MethodDouble<TestValue, String> {
        &self.getter
    }

    /// The underlying config object.
    #[must_use]
    pub fn target(&self) -> &MockObject<TestValue, String> {
        self.set.target()
    }
}

impl Default for ConfigMock {
    fn default() -> Self {
        Self::new(TestValue::Undefined)
    }
}

impl fmt::Debug for ConfigMock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigMock")
            .field("props", &*self.props.lock())
            .field("lookups", &self.getter.call_count())
            .finish()
    }
}

fn lookup(props: &Props, path: &str) -> TestValue {
    let mut segments = path.split('.');
    let Some(first) = segments.next() else {
        return TestValue::Undefined;
    };

    let mut current = props.get(first);
    for segment in segments {
        current = match current {
            Some(TestValue::Object(map)) => map.get(segment),
            Some(TestValue::Array(items)) => segment
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get(index)),
            _ => None,
        };
    }
    current.cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::all_but_object;

    fn object(entries: &[(&str, TestValue)]) -> TestValue {
        TestValue::Object(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        )
    }

    fn sample() -> ConfigMock {
        ConfigMock::new(object(&[
            ("name", TestValue::from("svc")),
            (
                "db",
                object(&[
                    ("port", TestValue::from(5432)),
                    ("auth", object(&[("user", TestValue::from("admin"))])),
                ]),
            ),
        ]))
    }

    #[test]
    fn test_get_top_level_and_nested() {
        let config = sample();

        assert_eq!(config.get("name"), TestValue::from("svc"));
        assert_eq!(config.get("db.port"), TestValue::Number(5432.0));
        assert_eq!(config.get("db.auth.user"), TestValue::from("admin"));
        assert!(matches!(config.get("db"), TestValue::Object(_)));
    }

    #[test]
    fn test_get_missing_paths() {
        let config = sample();

        assert_eq!(config.get("missing"), TestValue::Undefined);
        assert_eq!(config.get("db.missing.deeper"), TestValue::Undefined);
        assert_eq!(config.get("name.length"), TestValue::Undefined);
        assert_eq!(config.get(""), TestValue::Undefined);
    }

    #[test]
    fn test_get_indexes_into_arrays() {
        let config = ConfigMock::new(object(&[(
            "hosts",
            TestValue::Array(vec![
                TestValue::from("alpha"),
                object(&[("name", TestValue::from("beta"))]),
            ]),
        )]));

        assert_eq!(config.get("hosts.0"), TestValue::from("alpha"));
        assert_eq!(config.get("hosts.1.name"), TestValue::from("beta"));
        assert_eq!(config.get("hosts.2"), TestValue::Undefined);
        assert_eq!(config.get("hosts.x"), TestValue::Undefined);
        assert_eq!(config.get("hosts.-1"), TestValue::Undefined);
    }

    #[test]
    fn test_get_without_method_is_undefined() {
        let config = sample();
        config.target().take(GET);

        assert_eq!(config.get("name"), TestValue::Undefined);
        assert_eq!(config.getter().call_count(), 0);
    }

    #[test]
    fn test_lookups_are_recorded() {
        let config = sample();
        config.get("name");
        config.get("db.port");

        let calls = config.getter().responses();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].args, vec![TestValue::from("db.port")]);
        assert_eq!(calls[1].return_value(), Some(&TestValue::Number(5432.0)));
    }

    #[test]
    fn test_non_object_props_become_empty() {
        for value in all_but_object([]) {
            let config = ConfigMock::new(value);
            assert!(config.props().is_empty());
        }
    }

    #[test]
    fn test_add_properties_overwrites() {
        let config = sample();

        config
            .add_properties(object(&[
                ("name", TestValue::from("renamed")),
                ("extra", TestValue::from(true)),
            ]))
            .unwrap();

        assert_eq!(config.get("name"), TestValue::from("renamed"));
        assert_eq!(config.get("extra"), TestValue::Bool(true));
        assert_eq!(config.get("db.port"), TestValue::Number(5432.0));
    }

    #[test]
    fn test_add_properties_rejects_non_objects() {
        let config = ConfigMock::default();

        for value in all_but_object([]) {
            let err = config.add_properties(value).unwrap_err();
            assert_eq!(err.to_string(), "Invalid properties specified (arg #1)");
        }
    }
}
