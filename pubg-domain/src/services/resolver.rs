// Relationship resolver
// Turns `relationships.<name>.data` pointers into side objects from the index

use serde_json::Value;

use crate::entities::RawRecord;
use crate::services::resource_index::ResourceIndex;
use crate::value_objects::ResourceRef;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relationship {
    One(ResourceRef),
    Many(Vec<ResourceRef>),
    Absent,
}

impl Relationship {
    pub fn of(resource: &RawRecord, name: &str) -> Self {
        let Some(relationships) = resource.object("relationships") else {
            return Relationship::Absent;
        };
        let Some(relationship) = relationships.object(name) else {
            return Relationship::Absent;
        };
        match relationship.get("data") {
            Some(value @ Value::Object(_)) => Relationship::One(ResourceRef::from_value(value)),
            Some(Value::Array(items)) => {
                Relationship::Many(items.iter().map(ResourceRef::from_value).collect())
            }
            _ => Relationship::Absent,
        }
    }

    pub fn ids(&self) -> Vec<String> {
        match self {
            Relationship::One(pointer) => vec![pointer.id.clone()],
            Relationship::Many(pointers) => pointers.iter().map(|p| p.id.clone()).collect(),
            Relationship::Absent => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<'a> {
    Found {
        pointer: ResourceRef,
        record: &'a RawRecord,
    },
    Unresolved(ResourceRef),
}

impl<'a> Resolved<'a> {
    pub fn pointer(&self) -> &ResourceRef {
        match self {
            Resolved::Found { pointer, .. } => pointer,
            Resolved::Unresolved(pointer) => pointer,
        }
    }

    pub fn id(&self) -> &str {
        &self.pointer().id
    }

    pub fn record(&self) -> Option<&'a RawRecord> {
        match self {
            Resolved::Found { record, .. } => Some(record),
            Resolved::Unresolved(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedValue<'a> {
    Single(Resolved<'a>),
    // Same length and order as the pointer list.
    Many(Vec<Resolved<'a>>),
    Absent,
}

pub fn resolve_one<'a>(pointer: &ResourceRef, index: &'a ResourceIndex) -> Resolved<'a> {
    match index.lookup(&pointer.kind, &pointer.id) {
        Some(record) => Resolved::Found {
            pointer: pointer.clone(),
            record,
        },
        None => Resolved::Unresolved(pointer.clone()),
    }
}

pub fn resolve_many<'a>(pointers: &[ResourceRef], index: &'a ResourceIndex) -> Vec<Resolved<'a>> {
    pointers
        .iter()
        .map(|pointer| resolve_one(pointer, index))
        .collect()
}

pub fn resolve<'a>(relationship: &Relationship, index: &'a ResourceIndex) -> ResolvedValue<'a> {
    match relationship {
        Relationship::One(pointer) => ResolvedValue::Single(resolve_one(pointer, index)),
        Relationship::Many(pointers) => ResolvedValue::Many(resolve_many(pointers, index)),
        Relationship::Absent => ResolvedValue::Absent,
    }
}

pub fn resolve_list<'a>(
    resource: &RawRecord,
    name: &str,
    index: &'a ResourceIndex,
) -> Vec<Resolved<'a>> {
    match resolve(&Relationship::of(resource, name), index) {
        ResolvedValue::Single(resolved) => vec![resolved],
        ResolvedValue::Many(resolved) => resolved,
        ResolvedValue::Absent => Vec::new(),
    }
}
