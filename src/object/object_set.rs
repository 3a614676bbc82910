use crate::object::Object;
use crate::query::{self, CollisionMode, Correction, SatOptions};
use crate::shape::GeometryError;
use core::ops::{Index, IndexMut};
use slab::Slab;

/// The handle of an object inserted into an [`ObjectSet`].
///
/// Handles are plain slot indices without any generation: once its object is removed, a
/// handle refers to whatever object is inserted next into the same slot. A set can't hold
/// more than `u32::MAX + 1` objects at once.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectHandle(u32);

impl ObjectHandle {
    /// The index of the object this handle refers to.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A dynamically-sized arena of objects.
///
/// Handles stay valid until the object they refer to is removed. The slot of a removed
/// object may be reused by the next insertion.
#[derive(Clone, Debug, Default)]
pub struct ObjectSet {
    objects: Slab<Object>,
}

impl ObjectSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an object to this set.
    ///
    /// # Panics
    ///
    /// Panics if the set already holds `u32::MAX + 1` objects.
    pub fn insert(&mut self, object: Object) -> ObjectHandle {
        let id = self.objects.vacant_key();
        assert!(
            u32::try_from(id).is_ok(),
            "ObjectSet: the number of objects exceeds u32::MAX + 1."
        );
        ObjectHandle(self.objects.insert(object) as u32)
    }

    /// Removes an object from this set.
    ///
    /// Returns `None` if `handle` doesn't refer to any object.
    pub fn remove(&mut self, handle: ObjectHandle) -> Option<Object> {
        self.objects.try_remove(handle.index())
    }

    /// Removes every object from this set.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// The object referred to by `handle`.
    #[inline]
    pub fn get(&self, handle: ObjectHandle) -> Option<&Object> {
        self.objects.get(handle.index())
    }

    /// The object referred to by `handle`.
    #[inline]
    pub fn get_mut(&mut self, handle: ObjectHandle) -> Option<&mut Object> {
        self.objects.get_mut(handle.index())
    }

    /// Does `handle` refer to an object of this set?
    #[inline]
    pub fn contains(&self, handle: ObjectHandle) -> bool {
        self.objects.contains(handle.index())
    }

    /// The number of objects in this set.
    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Is this set empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterates through all the objects of this set, by increasing handle index.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectHandle, &Object)> {
        self.objects
            .iter()
            .map(|(id, object)| (ObjectHandle(id as u32), object))
    }

    /// Iterates mutably through all the objects of this set, by increasing handle index.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ObjectHandle, &mut Object)> {
        self.objects
            .iter_mut()
            .map(|(id, object)| (ObjectHandle(id as u32), object))
    }

    /// The handle following `handle` by increasing index, wrapping around to the first one.
    ///
    /// This is useful to cycle through the objects of the set. `handle` doesn't have to
    /// refer to an object of this set. Returns `None` if the set is empty.
    pub fn next_handle(&self, handle: ObjectHandle) -> Option<ObjectHandle> {
        let mut handles = self.iter().map(|(h, _)| h);
        let first = handles.next()?;

        if first > handle {
            return Some(first);
        }

        Some(handles.find(|h| *h > handle).unwrap_or(first))
    }

    /// Recomputes the normals of every object for the given collision mode.
    ///
    /// If the normals of any object can't be computed, the first error is returned and no
    /// object is modified.
    pub fn update_all_normals(
        &mut self,
        mode: CollisionMode,
        options: &SatOptions,
    ) -> Result<(), GeometryError> {
        let normals = self
            .objects
            .iter()
            .map(|(_, object)| object.compute_normals(mode, options))
            .collect::<Result<Vec<_>, _>>()?;

        for ((_, object), normals) in self.objects.iter_mut().zip(normals) {
            object.set_normals(normals);
        }

        Ok(())
    }

    /// Runs a collision query between the object `handle` and every other object of the set.
    ///
    /// Returns, for each other object, its handle and the correction to apply to the
    /// object `handle`. Returns an empty list if `handle` doesn't refer to any object.
    pub fn collisions_with(
        &self,
        handle: ObjectHandle,
        mode: CollisionMode,
        options: &SatOptions,
    ) -> Vec<(ObjectHandle, Correction)> {
        let Some(object1) = self.get(handle) else {
            return Vec::new();
        };

        self.iter()
            .filter(|(other, _)| *other != handle)
            .map(|(other, object2)| {
                let correction =
                    query::detect_collision_with_options(object1, object2, mode, options);
                (other, correction)
            })
            .collect()
    }
}

impl Index<ObjectHandle> for ObjectSet {
    type Output = Object;

    fn index(&self, handle: ObjectHandle) -> &Object {
        &self.objects[handle.index()]
    }
}

impl IndexMut<ObjectHandle> for ObjectSet {
    fn index_mut(&mut self, handle: ObjectHandle) -> &mut Object {
        &mut self.objects[handle.index()]
    }
}
