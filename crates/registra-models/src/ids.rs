//! Strongly-typed ID newtypes for domain entities.
//!
//! The backend identifies every record with a numeric id. Wrapping each
//! entity's id in its own newtype prevents accidental misuse (e.g., passing
//! a `DepartmentId` where a `CourseId` is expected) without changing the
//! wire format.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to define a strongly-typed ID newtype over `i64`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            #[inline]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            #[inline]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            #[inline]
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            #[inline]
            fn from(id: $name) -> i64 {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i64>().map(Self)
            }
        }
    };
}

define_id!(
    /// Strongly-typed ID for Faculty entities.
    FacultyId
);

define_id!(
    /// Strongly-typed ID for Department entities.
    DepartmentId
);

define_id!(
    /// Strongly-typed ID for Program entities.
    ProgramId
);

define_id!(
    /// Strongly-typed ID for Course entities.
    CourseId
);

define_id!(
    /// Strongly-typed ID for AcademicSession entities.
    SessionId
);

define_id!(
    /// Strongly-typed ID for CreditHourRule entities.
    RuleId
);
