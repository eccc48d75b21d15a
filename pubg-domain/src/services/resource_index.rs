// Resource index over a response's `included` side objects

use std::collections::HashMap;

use crate::entities::RawRecord;
use crate::value_objects::ResourceKey;

#[derive(Debug, Clone, Default)]
pub struct ResourceIndex {
    entries: HashMap<ResourceKey, RawRecord>,
}

impl ResourceIndex {
    // Records without a string `type` and `id` are skipped. On duplicate keys the
    // last record wins.
    pub fn build(included: &[RawRecord]) -> Self {
        let mut entries = HashMap::with_capacity(included.len());
        for record in included {
            let (Some(kind), Some(id)) = (record.str_field("type"), record.str_field("id")) else {
                continue;
            };
            entries.insert(ResourceKey::new(kind, id), record.clone());
        }
        Self { entries }
    }

    pub fn lookup(&self, kind: &str, id: &str) -> Option<&RawRecord> {
        self.entries.get(&ResourceKey::new(kind, id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
