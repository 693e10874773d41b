//! Document object storage.
//!
//! A minimal stand-in for the owning document: it registers indirect objects
//! and hands out references. Appearance rendering registers a fresh Form
//! XObject here on every pass; object ids increase monotonically and are
//! never reused, so two consecutive renders of the same field always yield
//! distinct references.

use crate::error::{Error, Result};
use crate::object::{Object, ObjectRef};
use bytes::Bytes;
use std::collections::HashMap;

/// Registry of indirect objects owned by a document.
#[derive(Debug, Default)]
pub struct ObjectStore {
    objects: HashMap<ObjectRef, Object>,
    next_object_id: u32,
}

impl ObjectStore {
    /// Create an empty store. Object numbering starts at 1, as in a PDF body.
    pub fn new() -> Self {
        Self {
            objects: HashMap::new(),
            next_object_id: 1,
        }
    }

    /// Register an object and return its freshly allocated reference.
    pub fn add_object(&mut self, object: Object) -> ObjectRef {
        let obj_ref = ObjectRef::new(self.allocate_object_id(), 0);
        log::trace!("registered {} ({})", obj_ref, object.type_name());
        self.objects.insert(obj_ref, object);
        obj_ref
    }

    /// Look up a registered object.
    pub fn get(&self, obj_ref: ObjectRef) -> Option<&Object> {
        self.objects.get(&obj_ref)
    }

    /// Look up a registered stream object and return its data.
    ///
    /// Errors if the reference is unknown or resolves to a non-stream object.
    pub fn get_stream_data(&self, obj_ref: ObjectRef) -> Result<&Bytes> {
        match self.get(obj_ref) {
            Some(Object::Stream { data, .. }) => Ok(data),
            Some(other) => Err(Error::InvalidObjectType {
                expected: "Stream".to_string(),
                found: other.type_name().to_string(),
            }),
            None => Err(Error::ObjectNotFound(obj_ref.id, obj_ref.gen)),
        }
    }

    /// Number of registered objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the store holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    fn allocate_object_id(&mut self) -> u32 {
        let id = self.next_object_id;
        self.next_object_id += 1;
        id
    }
}
