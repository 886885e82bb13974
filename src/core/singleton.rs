//! Four ways of keeping exactly one instance of a type per process.
//!
//! Every accessor hands out a `&'static` reference, so "the same instance"
//! means pointer equality. Lazily built types count how often their
//! constructor ran; the count never exceeds one.

use crate::domain::ports::OutputSink;
use crate::utils::error::Result;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{LazyLock, Mutex, OnceLock, PoisonError};

/// Constructor used by [`Singleton`] on first access.
///
/// Only the holder should call `construct`; building a value any other way
/// defeats the single-instance guarantee.
pub trait SingletonConstruct: Sized + Send + Sync + 'static {
    fn construct() -> Self;
}

/// Generic holder with deferred, exactly-once construction.
///
/// Declare one as a `static` per singleton type:
///
/// ```
/// use gof_patterns::core::singleton::{Singleton, SingletonConstruct};
///
/// struct Registry;
///
/// impl SingletonConstruct for Registry {
///     fn construct() -> Self {
///         Registry
///     }
/// }
///
/// static REGISTRY: Singleton<Registry> = Singleton::new();
///
/// assert!(std::ptr::eq(REGISTRY.instance(), REGISTRY.instance()));
/// ```
#[derive(Debug)]
pub struct Singleton<T> {
    cell: OnceLock<T>,
}

impl<T> Singleton<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T: SingletonConstruct> Singleton<T> {
    pub fn instance(&'static self) -> &'static T {
        self.cell.get_or_init(T::construct)
    }
}

impl<T> Default for Singleton<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sample type living in the generic holder.
#[derive(Debug)]
pub struct TestClass {
    _private: (),
}

static TEST_CLASS: Singleton<TestClass> = Singleton::new();
static TEST_CLASS_CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

impl SingletonConstruct for TestClass {
    fn construct() -> Self {
        TEST_CLASS_CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
        tracing::debug!("Constructing TestClass");
        TestClass { _private: () }
    }
}

impl TestClass {
    pub fn instance() -> &'static TestClass {
        TEST_CLASS.instance()
    }

    pub fn test_proc(&self) -> &'static str {
        "Hello World"
    }

    pub fn construction_count() -> usize {
        TEST_CLASS_CONSTRUCTIONS.load(Ordering::SeqCst)
    }
}

/// Lazy singleton behind a private holder static.
#[derive(Debug)]
pub struct Singleton1 {
    _private: (),
}

mod singleton1_creator {
    use super::Singleton1;
    use std::sync::LazyLock;

    pub(super) static INSTANCE: LazyLock<Singleton1> = LazyLock::new(Singleton1::construct);
}

static SINGLETON1_CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

impl Singleton1 {
    fn construct() -> Self {
        SINGLETON1_CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
        tracing::debug!("Constructing Singleton1");
        Singleton1 { _private: () }
    }

    pub fn instance() -> &'static Singleton1 {
        LazyLock::force(&singleton1_creator::INSTANCE)
    }

    pub fn construction_count() -> usize {
        SINGLETON1_CONSTRUCTIONS.load(Ordering::SeqCst)
    }
}

/// Eager singleton: the instance is a compile-time constant.
#[derive(Debug)]
pub struct Singleton2 {
    _private: (),
}

static SINGLETON2: Singleton2 = Singleton2 { _private: () };

impl Singleton2 {
    pub fn instance() -> &'static Singleton2 {
        &SINGLETON2
    }
}

/// Lazy singleton built behind an explicit "is it there yet?" check.
///
/// The check and the store share one lock, so threads racing on the first
/// access still construct a single instance.
#[derive(Debug)]
pub struct Singleton3 {
    _private: (),
}

static SINGLETON3: Mutex<Option<&'static Singleton3>> = Mutex::new(None);
static SINGLETON3_CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

impl Singleton3 {
    fn construct() -> Self {
        SINGLETON3_CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
        tracing::debug!("Constructing Singleton3");
        Singleton3 { _private: () }
    }

    pub fn instance() -> &'static Singleton3 {
        // The slot is write-once, so a poisoned lock still holds a valid value.
        let mut slot = SINGLETON3.lock().unwrap_or_else(PoisonError::into_inner);
        match *slot {
            Some(instance) => instance,
            None => {
                let instance: &'static Singleton3 = Box::leak(Box::new(Singleton3::construct()));
                *slot = Some(instance);
                instance
            }
        }
    }

    pub fn construction_count() -> usize {
        SINGLETON3_CONSTRUCTIONS.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SingletonVariant {
    Generic,
    NestedHolder,
    Eager,
    NullCheck,
}

impl SingletonVariant {
    pub const ALL: [SingletonVariant; 4] = [
        SingletonVariant::Generic,
        SingletonVariant::NestedHolder,
        SingletonVariant::Eager,
        SingletonVariant::NullCheck,
    ];

    pub fn type_name(self) -> &'static str {
        match self {
            SingletonVariant::Generic => "TestClass",
            SingletonVariant::NestedHolder => "Singleton1",
            SingletonVariant::Eager => "Singleton2",
            SingletonVariant::NullCheck => "Singleton3",
        }
    }

    /// Address of the variant's instance, initialising it if needed.
    pub fn instance_address(self) -> usize {
        match self {
            SingletonVariant::Generic => TestClass::instance() as *const TestClass as usize,
            SingletonVariant::NestedHolder => Singleton1::instance() as *const Singleton1 as usize,
            SingletonVariant::Eager => Singleton2::instance() as *const Singleton2 as usize,
            SingletonVariant::NullCheck => Singleton3::instance() as *const Singleton3 as usize,
        }
    }

    /// `None` for the eager variant, which has no runtime constructor.
    pub fn construction_count(self) -> Option<usize> {
        match self {
            SingletonVariant::Generic => Some(TestClass::construction_count()),
            SingletonVariant::NestedHolder => Some(Singleton1::construction_count()),
            SingletonVariant::Eager => None,
            SingletonVariant::NullCheck => Some(Singleton3::construction_count()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingletonCheck {
    pub variant: SingletonVariant,
    pub same_instance: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SingletonReport {
    pub checks: Vec<SingletonCheck>,
}

impl SingletonReport {
    pub fn all_same(&self) -> bool {
        self.checks.iter().all(|check| check.same_instance)
    }
}

/// Accesses every variant twice and reports whether both accesses agree.
#[derive(Debug, Default)]
pub struct SingletonDemo;

impl SingletonDemo {
    pub fn run<S: OutputSink + ?Sized>(&self, sink: &S) -> Result<SingletonReport> {
        sink.show(&format!("TestClass says {}", TestClass::instance().test_proc()))?;

        let mut report = SingletonReport::default();
        for variant in SingletonVariant::ALL {
            let first = variant.instance_address();
            let second = variant.instance_address();
            let same_instance = first == second;

            tracing::debug!(variant = variant.type_name(), same_instance, "Singleton checked");
            sink.show(&format!(
                "{}: same instance = {}",
                variant.type_name(),
                same_instance
            ))?;
            report.checks.push(SingletonCheck {
                variant,
                same_instance,
            });
        }

        Ok(report)
    }
}
