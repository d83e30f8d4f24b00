pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

#[cold]
pub fn invalid_arg<T>(name: &str, condition: &str) -> Result<T> {
    Err(crate::error::ErrorKind::InvalidArgument {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}

#[cold]
pub fn out_of_bounds<T>(index: u64, len: u64) -> Result<T> {
    Err(crate::error::ErrorKind::OutOfBounds { index, len }.into())
}

#[cold]
pub fn exhausted<T>(len: u64) -> Result<T> {
    Err(crate::error::ErrorKind::Exhausted { len }.into())
}

#[cold]
pub fn overflow<T>(len: u64) -> Result<T> {
    Err(crate::error::ErrorKind::Overflow { len }.into())
}
