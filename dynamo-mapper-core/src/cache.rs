/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use once_cell::sync::OnceCell;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::SchemaError;
use crate::schema::Schema;
use crate::traits::MappedItem;

type Slot = Arc<dyn Any + Send + Sync>;
type Entries = HashMap<TypeId, Slot>;
type Cell<T> = OnceCell<Arc<Schema<T>>>;

/// Memoizes one [`Schema`] per record type.
///
/// Each record type gets its own cell. The shared map is only locked to find that cell, so a
/// schema builder may look up the schemas of other types. The first request for a type builds
/// its schema; every later request, from any thread, gets the same `Arc`. Builds that fail are
/// not stored.
#[derive(Debug, Default)]
pub struct SchemaCache {
    inner: OnceCell<Mutex<Entries>>,
}

impl SchemaCache {
    /// Creates an empty cache.
    pub const fn new() -> Self {
        Self {
            inner: OnceCell::new(),
        }
    }

    fn entries(&self) -> MutexGuard<'_, Entries> {
        // Cells are only inserted, never mutated in place, so a poisoned lock still guards a valid map.
        self.inner
            .get_or_init(|| Mutex::new(HashMap::new()))
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn cell<T: MappedItem>(&self) -> Arc<Cell<T>> {
        let mut entries = self.entries();
        let entry = entries
            .entry(TypeId::of::<T>())
            .or_insert_with(|| -> Slot { Arc::new(Cell::<T>::new()) });
        match Arc::clone(entry).downcast::<Cell<T>>() {
            Ok(cell) => cell,
            Err(_) => {
                let cell = Arc::new(Cell::<T>::new());
                *entry = cell.clone() as Slot;
                cell
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn get<T: MappedItem>(&self) -> Option<Arc<Schema<T>>> {
        self.cell::<T>().get().cloned()
    }

    /// Returns the schema for `T`, building and storing it on first use.
    pub fn get_or_build<T: MappedItem>(&self) -> Result<Arc<Schema<T>>, SchemaError> {
        let cell = self.cell::<T>();
        let schema = cell.get_or_try_init(|| {
            tracing::debug!(owner = std::any::type_name::<T>(), "schema cache miss");
            T::schema_builder().build().map(Arc::new)
        })?;
        Ok(Arc::clone(schema))
    }
}

#[cfg(test)]
mod tests {
    use super::SchemaCache;
    use crate::codec::S;
    use crate::error::SchemaError;
    use crate::schema::SchemaBuilder;
    use crate::traits::MappedItem;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Barrier};

    static BUILDS: AtomicUsize = AtomicUsize::new(0);

    #[derive(Default)]
    struct Counted {
        id: String,
    }

    impl MappedItem for Counted {
        fn schema_builder() -> SchemaBuilder<Self> {
            BUILDS.fetch_add(1, Ordering::SeqCst);
            SchemaBuilder::<Self>::with_default().required("ID", S, |c| &c.id, |c| &mut c.id)
        }
    }

    #[derive(Default)]
    struct Keyed {
        key: String,
    }

    impl MappedItem for Keyed {
        fn schema_builder() -> SchemaBuilder<Self> {
            SchemaBuilder::<Self>::with_default().required("KEY", S, |k| &k.key, |k| &mut k.key)
        }
    }

    #[derive(Default)]
    struct Other {
        name: String,
    }

    impl MappedItem for Other {
        fn schema_builder() -> SchemaBuilder<Self> {
            SchemaBuilder::<Self>::with_default().nullable(
                "NAME",
                S,
                |o| &o.name,
                |o| &mut o.name,
            )
        }
    }

    #[derive(Default)]
    struct Broken {
        a: String,
    }

    impl MappedItem for Broken {
        fn schema_builder() -> SchemaBuilder<Self> {
            SchemaBuilder::<Self>::with_default()
                .required("A", S, |b| &b.a, |b| &mut b.a)
                .nullable("A", S, |b| &b.a, |b| &mut b.a)
        }
    }

    static NESTED: SchemaCache = SchemaCache::new();

    #[derive(Default)]
    struct Inner {
        id: String,
    }

    impl MappedItem for Inner {
        fn schema_builder() -> SchemaBuilder<Self> {
            SchemaBuilder::<Self>::with_default().required("INNER_ID", S, |i| &i.id, |i| &mut i.id)
        }
    }

    #[derive(Default)]
    struct Outer {
        ids: Vec<String>,
    }

    impl MappedItem for Outer {
        fn schema_builder() -> SchemaBuilder<Self> {
            let inner = NESTED.get_or_build::<Inner>().unwrap();
            let wire_name = format!("{}S", inner.fields()[0].wire_name());
            SchemaBuilder::<Self>::with_default().nullable(
                wire_name,
                crate::codec::Ss,
                |o| &o.ids,
                |o| &mut o.ids,
            )
        }
    }

    #[test]
    fn test_schema_cache_returns_same_schema_for_same_type() {
        let cache = SchemaCache::new();
        assert!(cache.get::<Other>().is_none());

        let first = cache.get_or_build::<Other>().unwrap();
        let second = cache.get_or_build::<Other>().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&first, &cache.get::<Other>().unwrap()));
    }

    #[test]
    fn test_schema_cache_keeps_types_apart() {
        let cache = SchemaCache::new();
        let other = cache.get_or_build::<Other>().unwrap();
        let keyed = cache.get_or_build::<Keyed>().unwrap();
        assert_eq!("NAME", other.fields()[0].wire_name());
        assert_eq!("KEY", keyed.fields()[0].wire_name());
        assert!(Arc::ptr_eq(&other, &cache.get::<Other>().unwrap()));
        assert!(Arc::ptr_eq(&keyed, &cache.get::<Keyed>().unwrap()));
    }

    #[test]
    fn test_schema_cache_does_not_store_failed_builds() {
        let cache = SchemaCache::new();
        assert!(matches!(
            cache.get_or_build::<Broken>(),
            Err(SchemaError::DuplicateWireName { .. })
        ));
        assert!(cache.get::<Broken>().is_none());
        assert!(cache.get_or_build::<Broken>().is_err());
    }

    #[test]
    fn test_schema_cache_builds_once_under_concurrent_first_access() {
        let cache = Arc::new(SchemaCache::new());
        let barrier = Arc::new(Barrier::new(8));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = cache.clone();
                let barrier = barrier.clone();
                std::thread::spawn(move || {
                    barrier.wait();
                    cache.get_or_build::<Counted>().unwrap()
                })
            })
            .collect();
        let schemas: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert!(schemas.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
        assert_eq!(1, BUILDS.load(Ordering::SeqCst));
    }

    #[test]
    fn test_schema_builder_can_look_up_other_schemas() {
        let (tx, rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let outer = NESTED.get_or_build::<Outer>().map(|s| s.fields()[0].wire_name().to_owned());
            let _ = tx.send(outer);
        });
        let outer = rx
            .recv_timeout(std::time::Duration::from_secs(5))
            .expect("nested schema lookup finished");
        assert_eq!("INNER_IDS", outer.unwrap());
        assert!(NESTED.get::<Inner>().is_some());
    }
}
