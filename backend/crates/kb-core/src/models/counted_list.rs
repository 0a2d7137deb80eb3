use serde::{Deserialize, Serialize};

/// A list that also carries a total count.
///
/// Board members and card attachments historically arrived either as a bare
/// number or as a list of records. Both shapes deserialize into this type:
///
/// - `3` becomes `{count: 3, items: []}`
/// - `[a, b]` becomes `{count: 2, items: [a, b]}`
/// - `{count, items}` is taken as-is, with `count` raised to `items.len()`
///
/// `count` is never lower than `items.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "CountedListWire<T>",
    bound(deserialize = "T: Deserialize<'de>", serialize = "T: Serialize")
)]
pub struct CountedList<T> {
    pub count: u32,
    pub items: Vec<T>,
}

impl<T> Default for CountedList<T> {
    fn default() -> Self {
        Self {
            count: 0,
            items: Vec::new(),
        }
    }
}

impl<T> CountedList<T> {
    pub fn from_items(items: Vec<T>) -> Self {
        Self {
            count: items.len() as u32,
            items,
        }
    }

    pub fn from_count(count: u32) -> Self {
        Self {
            count,
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.count = self.count.saturating_add(1);
    }

    /// Remove the first item matching `predicate`, decrementing the count.
    pub fn remove_first<F>(&mut self, predicate: F) -> Option<T>
    where
        F: Fn(&T) -> bool,
    {
        let index = self.items.iter().position(predicate)?;
        self.count = self.count.saturating_sub(1);
        Some(self.items.remove(index))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CountedListWire<T> {
    Count(u32),
    Items(Vec<T>),
    Full {
        count: u32,
        #[serde(default = "Vec::new")]
        items: Vec<T>,
    },
}

impl<T> From<CountedListWire<T>> for CountedList<T> {
    fn from(wire: CountedListWire<T>) -> Self {
        match wire {
            CountedListWire::Count(count) => CountedList::from_count(count),
            CountedListWire::Items(items) => CountedList::from_items(items),
            CountedListWire::Full { count, items } => CountedList {
                count: count.max(items.len() as u32),
                items,
            },
        }
    }
}
