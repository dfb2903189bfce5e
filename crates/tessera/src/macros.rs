//! Construction macro.

/// Create a [`Vector`](crate::Vector) from a list of elements or from an
/// element and a count.
///
/// ```
/// use tessera::vector;
///
/// let empty: tessera::Vector<u8> = vector![];
/// assert!(empty.is_empty());
///
/// let listed = vector![1, 2, 3];
/// assert_eq!(listed, [1, 2, 3]);
///
/// let repeated = vector![String::from("x"); 2];
/// assert_eq!(repeated, ["x", "x"]);
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::Vector::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::Vector::from_elem($elem, $n)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::Vector::from([$($x),+])
    };
}
