//! BORROWED combinator - validate an owned value through its borrowed form
//!
//! Text rules are written against `str`; fields hold a `String`. This
//! adapter lets the same rule run on any type that borrows as the rule's
//! input, the way `Borrow` lets `HashMap<String, _>` be queried with `&str`.

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

/// Runs `V` on `O` by borrowing `O` as `V::Input`.
///
/// # Examples
///
/// ```rust
/// use fieldguard_validator::prelude::*;
///
/// let rule = min_length(3).borrowed::<String>();
/// assert!(rule.validate(&"abc".to_string()).is_ok());
/// assert_eq!(
///     rule.check(&"ab".to_string()).as_deref(),
///     Some("Debe tener al menos 3 caracteres")
/// );
/// ```
pub struct Borrowed<V, O: ?Sized> {
    inner: V,
    _owned: PhantomData<fn(&O)>,
}

impl<V, O: ?Sized> Borrowed<V, O> {
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            _owned: PhantomData,
        }
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V, O> Validate for Borrowed<V, O>
where
    V: Validate,
    O: Borrow<V::Input> + ?Sized,
{
    type Input = O;

    fn validate(&self, input: &O) -> Result<(), ValidationError> {
        self.inner.validate(Borrow::<V::Input>::borrow(input))
    }
}

impl<V: Clone, O: ?Sized> Clone for Borrowed<V, O> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<V: Copy, O: ?Sized> Copy for Borrowed<V, O> {}

impl<V: fmt::Debug, O: ?Sized> fmt::Debug for Borrowed<V, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Borrowed").field("inner", &self.inner).finish()
    }
}

/// Creates a [`Borrowed`] adapter for `validator`.
pub fn borrowed<V, O>(validator: V) -> Borrowed<V, O>
where
    V: Validate,
    O: Borrow<V::Input> + ?Sized,
{
    Borrowed::new(validator)
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{email, length, min};

    #[test]
    fn test_string_through_str_rule() {
        let rule = borrowed::<_, String>(length(2, Some(4)));
        assert!(rule.validate(&"abc".to_string()).is_ok());
        assert_eq!(
            rule.check(&"abcde".to_string()).as_deref(),
            Some("Debe tener como máximo 4 caracteres")
        );
    }

    #[test]
    fn test_cow_and_box_inputs() {
        let rule = email().borrowed::<Cow<'static, str>>();
        assert!(rule.validate(&Cow::Borrowed("ana@correo.es")).is_ok());
        assert!(rule.validate(&Cow::Owned("ana".into())).is_err());

        let boxed = email().borrowed::<Box<str>>();
        assert!(boxed.validate(&Box::from("luis@correo.es")).is_ok());
    }

    #[test]
    fn test_reflexive_borrow_is_identity() {
        let rule = min(10).borrowed::<i32>();
        assert!(rule.validate(&10).is_ok());
        assert_eq!(rule.check(&9).as_deref(), Some("El valor mínimo es 10"));
    }

    #[test]
    fn test_composes_after_adapting() {
        let rule = length(3, None)
            .and(email())
            .borrowed::<String>()
            .with_message("Correo demasiado corto o no válido");
        assert_eq!(
            rule.check(&"a@".to_string()).as_deref(),
            Some("Correo demasiado corto o no válido")
        );
        assert!(rule.into_inner().into_inner().validate("ana@correo.es").is_ok());
    }
}
