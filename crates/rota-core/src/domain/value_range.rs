//! Value range providers for planning variables.
//!
//! A value range provider lists the values a planning variable may take.
//! The rota's only variable draws from the employee collection.

use std::marker::PhantomData;

/// Provides values for a planning variable.
///
/// # Example
///
/// ```
/// use rota_core::ValueRangeProvider;
///
/// struct Team {
///     size: usize,
/// }
///
/// struct MemberRange;
///
/// impl ValueRangeProvider<Team, usize> for MemberRange {
///     fn get_values(&self, team: &Team) -> Vec<usize> {
///         (0..team.size).collect()
///     }
/// }
///
/// let team = Team { size: 3 };
/// assert_eq!(MemberRange.get_values(&team), vec![0, 1, 2]);
/// assert_eq!(MemberRange.value_count(&team), 3);
/// ```
pub trait ValueRangeProvider<S, V>: Send + Sync {
    /// Returns all possible values for the variable.
    fn get_values(&self, solution: &S) -> Vec<V>;

    /// Returns the number of possible values.
    ///
    /// Implementations may override this when the count is known without
    /// materializing the values.
    fn value_count(&self, solution: &S) -> usize {
        self.get_values(solution).len()
    }

    /// Returns whether the value range is empty.
    fn is_empty(&self, solution: &S) -> bool {
        self.value_count(solution) == 0
    }
}

/// A value range made of the indices of a collection held by the solution.
///
/// The collection itself is never cloned; only its length is read.
pub struct FieldValueRangeProvider<S, T, F>
where
    F: Fn(&S) -> &[T] + Send + Sync,
{
    getter: F,
    _marker: PhantomData<fn(&S) -> &[T]>,
}

impl<S, T, F> FieldValueRangeProvider<S, T, F>
where
    F: Fn(&S) -> &[T] + Send + Sync,
{
    /// Creates a new index-based value range provider.
    pub fn new(getter: F) -> Self {
        Self {
            getter,
            _marker: PhantomData,
        }
    }
}

impl<S, T, F> ValueRangeProvider<S, usize> for FieldValueRangeProvider<S, T, F>
where
    F: Fn(&S) -> &[T] + Send + Sync,
{
    fn get_values(&self, solution: &S) -> Vec<usize> {
        (0..(self.getter)(solution).len()).collect()
    }

    fn value_count(&self, solution: &S) -> usize {
        (self.getter)(solution).len()
    }
}
