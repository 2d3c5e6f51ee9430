//! Leveled assertions. Cheap checks are always on; the expensive ones (such as evaluating every
//! constraint of the model on a solution) only run in tests or with the `debug-checks` feature.

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const REGATTA_ASSERT_LEVEL_DEFINITION: u8 = REGATTA_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const REGATTA_ASSERT_LEVEL_DEFINITION: u8 = REGATTA_ASSERT_EXTREME;

pub const REGATTA_ASSERT_SIMPLE: u8 = 1;
pub const REGATTA_ASSERT_MODERATE: u8 = 2;
pub const REGATTA_ASSERT_ADVANCED: u8 = 3;
pub const REGATTA_ASSERT_EXTREME: u8 = 4;

#[macro_export]
#[doc(hidden)]
macro_rules! print_regatta_assert_warning_message {
    () => {
        if $crate::asserts::REGATTA_ASSERT_LEVEL_DEFINITION >= $crate::asserts::REGATTA_ASSERT_MODERATE {
            log::warn!("Potential performance degradation: the regatta assert level is set to {}, meaning many debug asserts are active which may result in performance degradation.", $crate::asserts::REGATTA_ASSERT_LEVEL_DEFINITION);
        };
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! regatta_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::REGATTA_ASSERT_LEVEL_DEFINITION >= $crate::asserts::REGATTA_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! regatta_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::REGATTA_ASSERT_LEVEL_DEFINITION >= $crate::asserts::REGATTA_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! regatta_assert_extreme {
    ($($arg:tt)*) => {
        if $crate::asserts::REGATTA_ASSERT_LEVEL_DEFINITION >= $crate::asserts::REGATTA_ASSERT_EXTREME {
            assert!($($arg)*);
        }
    };
}
