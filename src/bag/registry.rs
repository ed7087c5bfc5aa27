// registry.rs

use std::any::{type_name, TypeId};

use crate::utils::typeid_map::TypeIdMap;

use super::{
    entity::{Entity, Upcast},
    type_bag::{AnyTypeBag, TypeBag},
};

/// Owns every type bag of an `EntityBag`, in the order their types were first
/// inserted.
pub(crate) struct BagRegistry<B: ?Sized> {
    pub(crate) bags: Vec<Box<dyn AnyTypeBag<B>>>,
    pub(crate) typeid_slot_map: TypeIdMap<usize>,
    pub(crate) bag_capacity: usize,
}

impl<B: ?Sized + Entity> BagRegistry<B> {
    pub(crate) fn new(bag_capacity: usize) -> Self {
        Self {
            bags: Vec::new(),
            typeid_slot_map: TypeIdMap::new(),
            bag_capacity,
        }
    }

    pub(crate) fn bag_for<T>(&mut self) -> &mut TypeBag<T>
    where
        B: Upcast<T>,
        T: Entity + Clone,
    {
        let slot = match self.typeid_slot_map.get_typed::<T>() {
            Some(slot) => *slot,
            None => {
                let slot = self.bags.len();
                log::debug!(
                    "[BagRegistry] new type bag #{} for {}",
                    slot,
                    type_name::<T>()
                );
                self.bags
                    .push(Box::new(TypeBag::<T>::with_capacity(self.bag_capacity)));
                self.typeid_slot_map.insert_typed::<T>(slot);
                slot
            }
        };

        self.bags[slot]
            .as_any_bag_mut()
            .downcast_mut::<TypeBag<T>>()
            .expect("ERROR: type bag slot does not hold the type it is keyed by!")
    }

    pub(crate) fn get<T: Entity>(&self) -> Option<&TypeBag<T>> {
        let slot = *self.typeid_slot_map.get_typed::<T>()?;
        self.bags[slot].as_any_bag().downcast_ref::<TypeBag<T>>()
    }

    pub(crate) fn get_mut<T: Entity>(&mut self) -> Option<&mut TypeBag<T>> {
        let slot = *self.typeid_slot_map.get_typed::<T>()?;
        self.bags[slot].as_any_bag_mut().downcast_mut::<TypeBag<T>>()
    }

    pub(crate) fn find(&self, type_id: TypeId) -> Option<&dyn AnyTypeBag<B>> {
        let slot = *self.typeid_slot_map.get(&type_id)?;
        let bag: &dyn AnyTypeBag<B> = &*self.bags[slot];
        Some(bag)
    }

    pub(crate) fn find_mut(&mut self, type_id: TypeId) -> Option<&mut dyn AnyTypeBag<B>> {
        let slot = *self.typeid_slot_map.get(&type_id)?;
        let bag: &mut dyn AnyTypeBag<B> = &mut *self.bags[slot];
        Some(bag)
    }

    pub(crate) fn contains(&self, type_id: TypeId) -> bool {
        self.typeid_slot_map.contains(&type_id)
    }

    pub(crate) fn len(&self) -> usize {
        self.bags.len()
    }

    pub(crate) fn entity_count(&self) -> usize {
        self.bags.iter().map(|bag| bag.len()).sum()
    }
}
