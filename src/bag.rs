// bag.rs

pub mod entity;
pub mod error;
pub mod iter;
pub(crate) mod registry;
pub mod type_bag;

use std::{any::TypeId, fmt};

use self::{
    entity::{Entity, Upcast},
    error::BagError,
    iter::{Iter, IterMut},
    registry::BagRegistry,
    type_bag::{AnyTypeBag, TypeBag},
};

/// Heterogeneous container storing entities of many concrete types, each type
/// in its own contiguous `TypeBag`, all reachable through the capability `B`.
///
/// ```
/// use entity_bag::{Entity, EntityBag};
///
/// trait Foo: Entity {
///     fn update(&self) -> String;
/// }
/// entity_bag::entity_base!(Foo);
///
/// #[derive(Clone)]
/// struct Bar(i32);
/// impl Foo for Bar {
///     fn update(&self) -> String {
///         format!("Bar {}", self.0)
///     }
/// }
///
/// let mut bag: EntityBag<dyn Foo> = EntityBag::new();
/// bag.emplace(Bar(1));
/// bag.emplace(Bar(2));
///
/// let out: Vec<String> = bag.iter().map(|e| e.update()).collect();
/// assert_eq!(out, ["Bar 1", "Bar 2"]);
/// ```
pub struct EntityBag<B: ?Sized> {
    registry: BagRegistry<B>,
}

impl<B: ?Sized + Entity> EntityBag<B> {
    pub fn new() -> Self {
        Self::with_bag_capacity(0)
    }

    /// Every bag created from now on reserves room for `cap` entities.
    pub fn with_bag_capacity(cap: usize) -> Self {
        Self {
            registry: BagRegistry::new(cap),
        }
    }

    /// Inserts `value` into the bag of its concrete type, creating the bag on
    /// first use. References into that bag are invalidated; other bags are
    /// untouched.
    pub fn emplace<T>(&mut self, value: T)
    where
        B: Upcast<T>,
        T: Entity + Clone,
    {
        self.registry.bag_for::<T>().emplace(value);
    }

    /// Constructs the entity directly at the end of its bag.
    pub fn emplace_with<T, F>(&mut self, f: F)
    where
        B: Upcast<T>,
        T: Entity + Clone,
        F: FnOnce() -> T,
    {
        // build first so a panicking constructor leaves no empty bag behind
        let value = f();
        self.registry.bag_for::<T>().emplace(value);
    }

    /// Inserts a copy of `value`, whose concrete type is only known at
    /// runtime.
    ///
    /// A bag for that type must already exist, i.e. at least one value of it
    /// was inserted through [`EntityBag::emplace`]. Panics otherwise, naming
    /// the type.
    pub fn emplace_erased(&mut self, value: &B) {
        if let Err(err) = self.try_emplace_erased(value) {
            log::error!("[EntityBag::emplace_erased] {}", err);
            panic!("{}", err);
        }
    }

    /// Like [`EntityBag::emplace_erased`], returning
    /// `BagError::UnknownType` instead of panicking.
    pub fn try_emplace_erased(&mut self, value: &B) -> Result<(), BagError> {
        let type_id = value.as_any().type_id();
        let type_name = value.entity_type_name();
        match self.registry.find_mut(type_id) {
            Some(bag) => {
                log::trace!("[EntityBag] erased insert into bag of {}", type_name);
                bag.try_emplace_erased(value)
            }
            None => Err(BagError::UnknownType { type_name }),
        }
    }

    /// Cursor at the first entity of the first non-empty bag.
    pub fn begin(&self) -> Iter<'_, B> {
        Iter::begin(&self.registry.bags)
    }

    /// Cursor past the last entity.
    pub fn end(&self) -> Iter<'_, B> {
        Iter::end(&self.registry.bags)
    }

    pub fn iter(&self) -> Iter<'_, B> {
        self.begin()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, B> {
        IterMut::new(&mut self.registry.bags)
    }

    pub fn for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut B),
    {
        for entity in self.iter_mut() {
            f(entity);
        }
    }

    /// Total number of entities over all bags.
    pub fn len(&self) -> usize {
        self.registry.entity_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of distinct concrete types inserted so far.
    pub fn bag_count(&self) -> usize {
        self.registry.len()
    }

    pub fn contains_type<T: Entity>(&self) -> bool {
        self.registry.contains(TypeId::of::<T>())
    }

    pub fn bag<T: Entity>(&self) -> Option<&TypeBag<T>> {
        self.registry.get::<T>()
    }

    pub fn bag_mut<T: Entity>(&mut self) -> Option<&mut TypeBag<T>> {
        self.registry.get_mut::<T>()
    }

    /// Bag holding the runtime type of `value`, if one exists.
    pub fn find_bag(&self, value: &B) -> Option<&dyn AnyTypeBag<B>> {
        self.registry.find(value.as_any().type_id())
    }

    pub fn bags(&self) -> impl Iterator<Item = &dyn AnyTypeBag<B>> + '_ {
        self.registry.bags.iter().map(|bag| {
            let bag: &dyn AnyTypeBag<B> = &**bag;
            bag
        })
    }

    pub fn type_names(&self) -> Vec<&'static str> {
        self.bags().map(|bag| bag.type_name()).collect()
    }
}

impl<B: ?Sized + Entity> Default for EntityBag<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: ?Sized + Entity> fmt::Debug for EntityBag<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for bag in self.bags() {
            map.entry(&bag.type_name(), &bag.len());
        }
        map.finish()
    }
}

impl<'a, B: ?Sized + Entity> IntoIterator for &'a EntityBag<B> {
    type Item = &'a B;
    type IntoIter = Iter<'a, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, B: ?Sized + Entity> IntoIterator for &'a mut EntityBag<B> {
    type Item = &'a mut B;
    type IntoIter = IterMut<'a, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
