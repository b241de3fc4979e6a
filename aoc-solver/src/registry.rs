//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;

/// Days per event (1-25)
pub const DAYS: usize = 25;

/// Calculate flat index from a day, returning None if out of bounds
#[inline]
fn calc_index(day: u8) -> Option<usize> {
    if day == 0 || day as usize > DAYS {
        return None;
    }
    Some((day - 1) as usize)
}

/// Reconstruct the day from a flat index
#[inline]
fn from_index(index: usize) -> u8 {
    index as u8 + 1
}

/// Factory function type for creating solver instances
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver factory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    /// The day number (1-25)
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
    /// Tags the solver was registered with
    pub tags: &'static [&'static str],
}

struct SolverFactoryEntry {
    factory: SolverFactory,
    parts: u8,
    tags: &'static [&'static str],
}

/// Immutable storage for solver factories with O(1) access by day
pub struct SolverStorage {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl SolverStorage {
    /// Iterate over metadata for all registered factories, ordered by day
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|e| FactoryInfo {
                day: from_index(i),
                parts: e.parts,
                tags: e.tags,
            })
        })
    }

    /// Get metadata for a specific day
    pub fn get_info(&self, day: u8) -> Option<FactoryInfo> {
        calc_index(day)
            .and_then(|i| self.entries.get(i)?.as_ref())
            .map(|e| FactoryInfo {
                day,
                parts: e.parts,
                tags: e.tags,
            })
    }

    /// Check if a factory exists for the day
    pub fn contains(&self, day: u8) -> bool {
        self.get_info(day).is_some()
    }

    /// Get the number of registered factories
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Check if storage is empty
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }
}

/// Builder for constructing a [`SolverRegistry`]
///
/// # Example
///
/// ```no_run
/// # use aoc_solver::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register_all_plugins()
///     .unwrap()
///     .build();
/// ```
pub struct RegistryBuilder {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder with one slot per day
    pub fn new() -> Self {
        Self {
            entries: (0..DAYS).map(|_| None).collect(),
        }
    }

    /// Register a solver factory with explicit parts count
    ///
    /// Returns an error if the day is out of bounds or already registered.
    pub fn register_factory<F>(
        self,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        self.insert(day, parts, &[], Box::new(factory))
    }

    /// Register a [`Solver`] type for a day
    pub fn register<S>(self, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + Sync + 'static,
    {
        self.register_factory(day, S::PARTS, move |input| {
            let solver: Box<dyn DynSolver + '_> = Box::new(SolverInstance::<S>::new(day, input)?);
            Ok(solver)
        })
    }

    /// Register all collected solver plugins
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// ```no_run
    /// # use aoc_solver::RegistryBuilder;
    /// // Register only solvers tagged as "grid"
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.tags.contains(&"grid"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.day)?;
                self.tag(plugin.day, plugin.tags);
            }
        }
        Ok(self)
    }

    fn insert(
        mut self,
        day: u8,
        parts: u8,
        tags: &'static [&'static str],
        factory: SolverFactory,
    ) -> Result<Self, RegistrationError> {
        let index = calc_index(day).ok_or(RegistrationError::InvalidDay(day))?;
        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(day));
        }
        self.entries[index] = Some(SolverFactoryEntry {
            factory,
            parts,
            tags,
        });
        Ok(self)
    }

    fn tag(&mut self, day: u8, tags: &'static [&'static str]) {
        if let Some(entry) = calc_index(day).and_then(|i| self.entries[i].as_mut()) {
            entry.tags = tags;
        }
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            storage: SolverStorage {
                entries: self.entries,
            },
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry mapping days to solver factories
pub struct SolverRegistry {
    storage: SolverStorage,
}

impl SolverRegistry {
    /// Get readonly access to the factory storage for iteration/lookup
    pub fn storage(&self) -> &SolverStorage {
        &self.storage
    }

    /// Create a solver instance for a specific day by parsing `input`
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Successfully created solver
    /// * `Err(SolverError)` - Invalid day, solver not found, or parsing failed
    pub fn create_solver<'a>(
        &self,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let index = calc_index(day).ok_or(SolverError::InvalidDay(day))?;

        let entry = self
            .storage
            .entries
            .get(index)
            .and_then(|e| e.as_ref())
            .ok_or(SolverError::NotFound(day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }
}

/// Trait for solvers that can register themselves with a registry builder
///
/// Unlike [`Solver`], this trait has no associated types, so different solver
/// types can be stored together as `&'static dyn RegisterableSolver`.
/// Every `Solver` gets it through a blanket impl.
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for a specific day
    fn register_with(
        &self,
        builder: RegistryBuilder,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;

    /// Number of parts this solver supports
    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register::<S>(day)
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// Plugin information for automatic solver registration
///
/// Usually submitted by `#[derive(AutoRegisterSolver)]`, but can be written by hand:
///
/// ```no_run
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverPlugin};
///
/// struct Day1Solver;
///
/// impl AocParser for Day1Solver {
///     type SharedData<'a> = ();
///
///     fn parse(_: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(())
///     }
/// }
///
/// impl Solver for Day1Solver {
///     const PARTS: u8 = 1;
///
///     fn solve_part(_: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         Err(SolveError::PartNotImplemented(part))
///     }
/// }
///
/// aoc_solver::inventory::submit! {
///     SolverPlugin {
///         day: 1,
///         solver: &Day1Solver,
///         tags: &["easy"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// The day number (1-25)
    pub day: u8,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Optional tags for filtering (e.g., "grid", "parsing")
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);
