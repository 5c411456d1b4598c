//! Early-return helper

/// Return early with an error unless `cond` holds
///
/// `ensure!(cond, ctor, "message")` returns `Err(Error::ctor().context("message"))`.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $ctor:ident, $($msg:tt)+) => {
        if !$cond {
            return Err($crate::error::Error::$ctor().context(format!($($msg)+)));
        }
    };
}
