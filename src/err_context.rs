//! Pairing errors with a human readable context.

/// Some context (C) attached to an error (E)
pub struct ErrorContext<C, E>(pub C, pub E);

/// Extends `Result` so a failure site can record what it was doing.
pub trait ErrorContextExt<T, E> {
    fn context<C>(self, c: C) -> Result<T, ErrorContext<C, E>>;
}

impl<T, E> ErrorContextExt<T, E> for Result<T, E> {
    fn context<C>(self, c: C) -> Result<T, ErrorContext<C, E>> {
        self.map_err(|e| ErrorContext(c, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_is_attached_to_the_error() {
        let res: Result<(), &str> = Err("boom");
        let ErrorContext(context, source) = res.context("reading settings").unwrap_err();
        assert_eq!(context, "reading settings");
        assert_eq!(source, "boom");
    }

    #[test]
    fn ok_values_pass_through() {
        let res: Result<u32, &str> = Ok(42);
        assert_eq!(res.context("unused").ok(), Some(42));
    }
}
