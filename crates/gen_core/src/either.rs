//! A two-case tagged union.
//!
//! [`Either`] is the value produced by a two-way weighted choice
//! ([`either`](fn@crate::either)); the `optional` and `as_result` combinators map it
//! into `Option` and `Result`.

/// A value of one of two types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Either<L, R> {
    /// The left case.
    Left(L),
    /// The right case.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Exchanges the two cases.
    pub fn swapped(self) -> Either<R, L> {
        match self {
            Either::Left(left) => Either::Right(left),
            Either::Right(right) => Either::Left(right),
        }
    }

    /// Returns the left value, if any.
    pub fn left(self) -> Option<L> {
        match self {
            Either::Left(left) => Some(left),
            Either::Right(_) => None,
        }
    }

    /// Returns the right value, if any.
    pub fn right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(right) => Some(right),
        }
    }

    /// Returns `true` for the left case.
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns `true` for the right case.
    pub fn is_right(&self) -> bool {
        !self.is_left()
    }

    /// Transforms the left value, leaving a right value untouched.
    pub fn map_left<T>(self, transform: impl FnOnce(L) -> T) -> Either<T, R> {
        match self {
            Either::Left(left) => Either::Left(transform(left)),
            Either::Right(right) => Either::Right(right),
        }
    }

    /// Transforms the right value, leaving a left value untouched.
    pub fn map_right<T>(self, transform: impl FnOnce(R) -> T) -> Either<L, T> {
        match self {
            Either::Left(left) => Either::Left(left),
            Either::Right(right) => Either::Right(transform(right)),
        }
    }

    /// Converts into a `Result`: left is success, right is failure.
    pub fn into_result(self) -> Result<L, R> {
        match self {
            Either::Left(left) => Ok(left),
            Either::Right(right) => Err(right),
        }
    }
}

impl<T> Either<T, T> {
    /// Returns the value regardless of case.
    pub fn into_inner(self) -> T {
        match self {
            Either::Left(value) | Either::Right(value) => value,
        }
    }
}

impl<L, R> From<Result<L, R>> for Either<L, R> {
    fn from(result: Result<L, R>) -> Self {
        match result {
            Ok(left) => Either::Left(left),
            Err(right) => Either::Right(right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let left: Either<i32, &str> = Either::Left(1);
        let right: Either<i32, &str> = Either::Right("r");

        assert_eq!(left.left(), Some(1));
        assert_eq!(left.right(), None);
        assert_eq!(right.right(), Some("r"));
        assert!(left.is_left() && right.is_right());
    }

    #[test]
    fn test_swapped_and_maps() {
        let left: Either<i32, &str> = Either::Left(2);
        assert_eq!(left.swapped(), Either::Right(2));
        assert_eq!(left.map_left(|x| x * 10), Either::Left(20));
        assert_eq!(left.map_right(str::len), Either::Left(2));

        let right: Either<i32, &str> = Either::Right("abc");
        assert_eq!(right.map_right(str::len), Either::Right(3));
    }

    #[test]
    fn test_result_conversions() {
        let ok: Either<u8, String> = Either::Left(7);
        assert_eq!(ok.into_result(), Ok(7));

        let err: Either<u8, String> = Either::from(Err::<u8, String>("bad".to_string()));
        assert_eq!(err.into_result(), Err("bad".to_string()));
    }

    #[test]
    fn test_into_inner_and_ordering() {
        assert_eq!(Either::<u8, u8>::Right(4).into_inner(), 4);
        assert!(Either::<u8, u8>::Left(9) < Either::Right(0));
    }
}
