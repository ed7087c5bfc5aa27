//! Heterogeneous entity container.
//!
//! An [`EntityBag<B>`] stores values of many concrete types. All values of one
//! concrete type live together in a contiguous [`TypeBag`], so a pass over
//! every entity touches one type's storage at a time. Callers only ever see
//! the entities through the shared capability `B`, usually a `dyn Trait`
//! whose trait has [`Entity`] as a supertrait.
//!
//! The set of concrete types is discovered from the insertions themselves.
//! A value whose concrete type is hidden behind `&B` can be copied in with
//! [`EntityBag::emplace_erased`], but only once a bag for its type exists.
//!
//! The container is single-threaded and has no removal API.

pub mod bag;
pub mod utils;

pub use bag::{
    entity::{Entity, Upcast},
    error::BagError,
    iter::{Iter, IterMut},
    type_bag::{AnyTypeBag, TypeBag},
    EntityBag,
};
