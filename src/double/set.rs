//! Sets of doubles installed on one target object.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

use parking_lot::Mutex;

use super::method::{Behavior, MethodDouble, OutcomeSpec};
use crate::error::{Error, Result};
use crate::object::{Method, MockObject};

/// One or more method names.
///
/// Implemented for single names and for collections of names, so
/// [`DoubleSet`] operations accept either.
pub trait MethodNames {
    /// Convert into a list of names.
    fn into_names(self) -> Vec<String>;
}

impl MethodNames for &str {
    fn into_names(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl MethodNames for String {
    fn into_names(self) -> Vec<String> {
        vec![self]
    }
}

impl MethodNames for &String {
    fn into_names(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl MethodNames for &[&str] {
    fn into_names(self) -> Vec<String> {
        self.iter().map(ToString::to_string).collect()
    }
}

impl<const N: usize> MethodNames for [&str; N] {
    fn into_names(self) -> Vec<String> {
        self.iter().map(ToString::to_string).collect()
    }
}

impl MethodNames for Vec<&str> {
    fn into_names(self) -> Vec<String> {
        self.into_iter().map(ToString::to_string).collect()
    }
}

impl MethodNames for Vec<String> {
    fn into_names(self) -> Vec<String> {
        self
    }
}

/// A double standing in for object construction.
///
/// Every call to [`construct`](Self::construct) records its arguments and
/// returns the set's target.
pub struct ConstructorDouble<V, E> {
    target: MockObject<V, E>,
    calls: Arc<Mutex<Vec<Vec<V>>>>,
}

impl<V: Clone, E> ConstructorDouble<V, E> {
    fn new(target: MockObject<V, E>) -> Self {
        Self {
            target,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// "Create" an instance: records `args` and returns the target.
    pub fn construct(&self, args: &[V]) -> MockObject<V, E> {
        self.calls.lock().push(args.to_vec());
        self.target.clone()
    }

    /// Arguments of every construction, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<Vec<V>> {
        self.calls.lock().clone()
    }

    /// Get the number of constructions.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Check if construction happened at least once.
    #[must_use]
    pub fn was_called(&self) -> bool {
        self.call_count() > 0
    }

    /// Forget all recorded constructions.
    pub fn reset(&self) {
        self.calls.lock().clear();
    }
}

impl<V, E> Clone for ConstructorDouble<V, E> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
            calls: Arc::clone(&self.calls),
        }
    }
}

impl<V, E> Debug for ConstructorDouble<V, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConstructorDouble")
            .field("call_count", &self.calls.lock().len())
            .finish()
    }
}

struct Installed<V, E> {
    double: MethodDouble<V, E>,
    /// Slot contents before the first double was installed under this name.
    original: Option<Method<V, E>>,
}

/// The doubles installed on one target object.
///
/// The set exclusively owns its doubles and remembers what each doubled slot
/// held before, so [`remove_methods`](Self::remove_methods) can put it back.
///
/// # Example
///
/// ```rust
/// use testkit_doubles::double::DoubleSet;
///
/// let set = DoubleSet::<i32, String>::default();
/// set.add_methods(["width", "height"], 10, true)
///     .unwrap()
///     .add_async_methods("load", true)
///     .unwrap();
///
/// let target = set.target();
/// assert_eq!(target.invoke("width", &[]).unwrap().ready(), Some(10));
/// assert!(target.invoke("load", &[1]).unwrap().is_deferred());
///
/// set.remove_methods("load");
/// assert!(set.double("load").is_none());
/// ```
pub struct DoubleSet<V, E> {
    target: MockObject<V, E>,
    constructor: ConstructorDouble<V, E>,
    doubles: Mutex<HashMap<String, Installed<V, E>>>,
}

impl<V, E> DoubleSet<V, E>
where
    V: Clone + Default + Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    /// Create a set around `target`, or around a fresh empty object.
    #[must_use]
    pub fn new(target: Option<MockObject<V, E>>) -> Self {
        let target = target.unwrap_or_default();
        tracing::debug!(methods = ?target.method_names(), "creating double set");
        Self {
            constructor: ConstructorDouble::new(target.clone()),
            target,
            doubles: Mutex::new(HashMap::new()),
        }
    }

    /// Install immediate doubles returning `value` under each of `names`.
    ///
    /// Existing doubles under the same names are replaced outright.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if a name is empty.
    /// - [`Error::InvalidMethod`] if a method is missing and `create` is `false`.
    ///
    /// Names are validated before anything is installed.
    pub fn add_methods(
        &self,
        names: impl MethodNames,
        value: impl Into<OutcomeSpec<V>>,
        create: bool,
    ) -> Result<&Self> {
        let spec = value.into();
        self.install_all(names.into_names(), create, |_| {
            Behavior::Immediate(spec.clone())
        })
    }

    /// Install deferred doubles under each of `names`.
    ///
    /// # Errors
    ///
    /// Same as [`add_methods`](Self::add_methods).
    pub fn add_async_methods(&self, names: impl MethodNames, create: bool) -> Result<&Self> {
        self.install_all(names.into_names(), create, |_| Behavior::Deferred)
    }

    fn install_all<F>(&self, names: Vec<String>, create: bool, behavior: F) -> Result<&Self>
    where
        F: Fn(&str) -> Behavior<V>,
    {
        let mut doubles = self.doubles.lock();

        for name in &names {
            if name.is_empty() {
                return Err(Error::invalid_argument(1, "method name not specified"));
            }
            if !create && !doubles.contains_key(name) && !self.target.has_method(name) {
                return Err(Error::invalid_method(name.as_str()));
            }
        }

        for name in names {
            let original = match doubles.remove(&name) {
                Some(previous) => {
                    tracing::debug!(method = %name, "overwriting method double");
                    previous.double.mark_uninstalled();
                    previous.original
                }
                None => self.target.method(&name),
            };
            let double = MethodDouble::install(&self.target, &name, behavior(&name), true)?;
            doubles.insert(name, Installed { double, original });
        }

        Ok(self)
    }
}

impl<V, E> DoubleSet<V, E> {
    /// Remove the doubles under each of `names`, restoring the original
    /// methods. Names without a double are ignored.
    pub fn remove_methods(&self, names: impl MethodNames) -> &Self {
        let mut doubles = self.doubles.lock();
        for name in names.into_names() {
            if let Some(installed) = doubles.remove(&name) {
                installed.double.mark_uninstalled();
                self.target.restore(&name, installed.original);
                tracing::debug!(method = %name, "removed method double");
            }
        }
        self
    }

    /// The object the doubles are installed on.
    #[must_use]
    pub fn target(&self) -> &MockObject<V, E> {
        &self.target
    }

    /// The double standing in for construction of the target.
    #[must_use]
    pub fn constructor(&self) -> &ConstructorDouble<V, E> {
        &self.constructor
    }

    /// The double installed under `name`.
    #[must_use]
    pub fn double(&self, name: &str) -> Option<MethodDouble<V, E>> {
        self.doubles
            .lock()
            .get(name)
            .map(|installed| installed.double.clone())
    }

    /// All installed doubles, by method name.
    #[must_use]
    pub fn doubles(&self) -> HashMap<String, MethodDouble<V, E>> {
        self.doubles
            .lock()
            .iter()
            .map(|(name, installed)| (name.clone(), installed.double.clone()))
            .collect()
    }

    /// Names of all doubled methods, sorted.
    #[must_use]
    pub fn method_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.doubles.lock().keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of installed doubles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.doubles.lock().len()
    }

    /// Returns `true` if no doubles are installed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.doubles.lock().is_empty()
    }
}

impl<V, E> Default for DoubleSet<V, E>
where
    V: Clone + Default + Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new(None)
    }
}

impl<V, E> Debug for DoubleSet<V, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DoubleSet")
            .field("target", &self.target)
            .field("doubles", &self.method_names())
            .finish()
    }
}
