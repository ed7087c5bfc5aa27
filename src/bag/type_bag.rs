// type_bag.rs

use std::{
    any::{type_name, Any, TypeId},
    fmt,
    slice::{Iter, IterMut},
};

use super::{
    entity::{Entity, Upcast},
    error::BagError,
};

/// Contiguous, append-only storage for every entity of one concrete type.
pub struct TypeBag<T> {
    pub(crate) elems: Vec<T>,
}

impl<T: Entity> TypeBag<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            elems: Vec::with_capacity(cap),
        }
    }

    /// Appends `value` and returns its index. Growing the storage may move
    /// every entity of this bag, never those of other bags.
    pub fn emplace(&mut self, value: T) -> usize {
        let index = self.elems.len();
        self.elems.push(value);
        index
    }

    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.elems.capacity()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.elems.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.elems.get_mut(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elems
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.elems
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.elems.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.elems.iter_mut()
    }
}

impl<T: Entity> Default for TypeBag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for TypeBag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeBag")
            .field("type", &type_name::<T>())
            .field("len", &self.elems.len())
            .finish()
    }
}

/// A type bag seen only through the shared capability `B`.
///
/// This is what the registry stores: one boxed `TypeBag<T>` per concrete
/// type, all viewed as `dyn AnyTypeBag<B>`.
pub trait AnyTypeBag<B: ?Sized> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name of the concrete type held by this bag.
    fn type_name(&self) -> &'static str;

    /// `TypeId` of the concrete type held by this bag.
    fn bag_type_id(&self) -> TypeId;

    fn entity(&self, index: usize) -> Option<&B>;

    fn entity_mut(&mut self, index: usize) -> Option<&mut B>;

    /// Panics if `index` is out of range.
    fn entity_at(&self, index: usize) -> &B {
        match self.entity(index) {
            Some(entity) => entity,
            None => panic!(
                "{}",
                BagError::IndexOutOfBounds {
                    index,
                    len: self.len(),
                    type_name: self.type_name(),
                }
            ),
        }
    }

    /// Appends a copy of `value`, whose concrete type must be the one this
    /// bag holds.
    fn try_emplace_erased(&mut self, value: &B) -> Result<(), BagError>;

    /// Panics if the concrete type of `value` is not the one this bag holds.
    fn emplace_erased(&mut self, value: &B) {
        if let Err(err) = self.try_emplace_erased(value) {
            panic!("{}", err);
        }
    }

    fn entities_mut<'a>(&'a mut self) -> Box<dyn Iterator<Item = &'a mut B> + 'a>;

    fn as_any_bag(&self) -> &dyn Any;

    fn as_any_bag_mut(&mut self) -> &mut dyn Any;
}

impl<B, T> AnyTypeBag<B> for TypeBag<T>
where
    B: ?Sized + Entity + Upcast<T>,
    T: Entity + Clone,
{
    fn len(&self) -> usize {
        self.elems.len()
    }

    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }

    fn bag_type_id(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn entity(&self, index: usize) -> Option<&B> {
        self.elems.get(index).map(<B as Upcast<T>>::upcast)
    }

    fn entity_mut(&mut self, index: usize) -> Option<&mut B> {
        self.elems.get_mut(index).map(<B as Upcast<T>>::upcast_mut)
    }

    fn try_emplace_erased(&mut self, value: &B) -> Result<(), BagError> {
        match Entity::as_any(value).downcast_ref::<T>() {
            Some(concrete) => {
                self.elems.push(concrete.clone());
                Ok(())
            }
            None => Err(BagError::TypeMismatch {
                expected: type_name::<T>(),
                found: value.entity_type_name(),
            }),
        }
    }

    fn entities_mut<'a>(&'a mut self) -> Box<dyn Iterator<Item = &'a mut B> + 'a> {
        Box::new(self.elems.iter_mut().map(<B as Upcast<T>>::upcast_mut))
    }

    fn as_any_bag(&self) -> &dyn Any {
        self
    }

    fn as_any_bag_mut(&mut self) -> &mut dyn Any {
        self
    }
}
