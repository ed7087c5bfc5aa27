// entity.rs

use std::any::Any;

/// Runtime type identity of a stored entity.
///
/// Blanket-implemented for every sized `'static` type. A capability trait
/// declares `Entity` as a supertrait so that `dyn Capability` can report the
/// concrete type hiding behind it:
///
/// ```
/// use entity_bag::Entity;
///
/// trait Foo: Entity {
///     fn update(&self) -> String;
/// }
/// entity_bag::entity_base!(Foo);
/// ```
pub trait Entity: Any {
    fn as_any(&self) -> &dyn Any;

    fn entity_type_name(&self) -> &'static str;
}

impl<T: Any> Entity for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn entity_type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// Views a concrete `T` through the capability `Self`.
///
/// Implemented on the capability (usually a `dyn Trait`), once for every `T`
/// that implements it. `entity_base!` writes the impl.
pub trait Upcast<T> {
    fn upcast(value: &T) -> &Self;

    fn upcast_mut(value: &mut T) -> &mut Self;
}

/// Makes `dyn $base` usable as the capability of an `EntityBag`.
#[macro_export]
macro_rules! entity_base {
    ($base:ident) => {
        impl<T: $base> $crate::Upcast<T> for dyn $base {
            fn upcast(value: &T) -> &Self {
                value
            }

            fn upcast_mut(value: &mut T) -> &mut Self {
                value
            }
        }
    };
}

#[cfg(test)]
mod test {
    use std::any::TypeId;

    use super::{Entity, Upcast};

    trait Shape: Entity {
        fn area(&self) -> f32;
    }
    crate::entity_base!(Shape);

    struct Square(f32);
    impl Shape for Square {
        fn area(&self) -> f32 {
            self.0 * self.0
        }
    }

    struct Rect(f32, f32);
    impl Shape for Rect {
        fn area(&self) -> f32 {
            self.0 * self.1
        }
    }

    #[test]
    fn erased_reference_reports_concrete_type() {
        let square = Square(2.0);
        let shape: &dyn Shape = <dyn Shape as Upcast<Square>>::upcast(&square);

        assert_eq!(shape.area(), 4.0);
        assert_eq!(shape.as_any().type_id(), TypeId::of::<Square>());
        assert!(shape.entity_type_name().ends_with("Square"));
        assert!(shape.as_any().downcast_ref::<Rect>().is_none());
    }

    #[test]
    fn upcast_mut_keeps_identity() {
        let mut rect = Rect(1.0, 3.0);
        let shape: &mut dyn Shape = <dyn Shape as Upcast<Rect>>::upcast_mut(&mut rect);
        assert_eq!(shape.area(), 3.0);
        assert!((*shape).as_any().downcast_ref::<Rect>().is_some());
    }
}
