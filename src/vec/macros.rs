/// Create a [`SimpleVec`](crate::SimpleVec) containing the arguments.
///
/// ```
/// use simple_vec::simple_vec;
///
/// let v = simple_vec![1, 2, 3];
/// assert_eq!(v, [1, 2, 3]);
/// assert_eq!(v.capacity(), 3);
///
/// let v = simple_vec![0u8; 4];
/// assert_eq!(v, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! simple_vec {
    () => (
        $crate::vec::SimpleVec::new()
    );
    ($elem:expr; $n:expr) => (
        $crate::vec::SimpleVec::from_elem($elem, $n)
    );
    ($($x:expr),+ $(,)?) => (
        $crate::vec::SimpleVec::from([$($x),+])
    );
}
