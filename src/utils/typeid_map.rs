// typeid_map.rs

use std::any::TypeId;

use ahash::AHashMap;

pub struct TypeIdMap<V> {
    map: AHashMap<TypeId, V>,
}

impl<V> TypeIdMap<V> {
    pub fn new() -> Self {
        Self {
            map: AHashMap::new(),
        }
    }

    pub fn insert_typed<K: 'static>(&mut self, value: V) -> Option<V> {
        self.map.insert(TypeId::of::<K>(), value)
    }

    pub fn get_typed<K: 'static>(&self) -> Option<&V> {
        self.map.get(&TypeId::of::<K>())
    }

    pub fn get(&self, type_id: &TypeId) -> Option<&V> {
        self.map.get(type_id)
    }

    pub fn contains(&self, type_id: &TypeId) -> bool {
        self.map.contains_key(type_id)
    }
}

impl<V> Default for TypeIdMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use std::any::TypeId;

    use super::TypeIdMap;

    struct Pos;
    struct Vel;

    #[test]
    fn typed_and_untyped_lookup_agree() {
        let mut map: TypeIdMap<usize> = TypeIdMap::new();
        assert!(map.get_typed::<Pos>().is_none());

        assert_eq!(map.insert_typed::<Pos>(0), None);
        assert_eq!(map.insert_typed::<Vel>(1), None);

        assert_eq!(map.get_typed::<Pos>(), Some(&0));
        assert_eq!(map.get(&TypeId::of::<Vel>()), Some(&1));
        assert!(map.contains(&TypeId::of::<Pos>()));
        assert!(!map.contains(&TypeId::of::<u8>()));

        assert_eq!(map.insert_typed::<Pos>(7), Some(0));
        assert_eq!(map.get_typed::<Pos>(), Some(&7));
    }
}
