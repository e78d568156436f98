/// Inline buffer for the legal actions of a single state.
///
/// Sixteen slots cover every position of the bundled games without spilling;
/// larger games fall back to the heap transparently.
pub type ActionList<T> = smallvec::SmallVec<[T; 16]>;

#[macro_export]
macro_rules! action_list {
    () => {
        $crate::smallvec::SmallVec::<[_; 16]>::new()
    };
    ($($e : expr),+ $(,)?) => {
        $crate::smallvec::smallvec![$($e),+]
    }
}
