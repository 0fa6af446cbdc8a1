use std::collections::{HashMap, VecDeque};

/// Text width per exact string.
///
/// Entries are never invalidated: a font change on the input does not clear
/// them. With a capacity, the oldest inserted string is evicted first.
#[derive(Clone, Debug, Default)]
pub struct MeasureCache {
    widths: HashMap<String, f32>,
    order: VecDeque<String>,
    capacity: Option<usize>,
}

impl MeasureCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: Option<usize>) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    pub fn get(&self, text: &str) -> Option<f32> {
        self.widths.get(text).copied()
    }

    /// Store `width` under `text`. Overwriting an entry keeps its age.
    pub fn insert(&mut self, text: &str, width: f32) {
        if let Some(slot) = self.widths.get_mut(text) {
            *slot = width;
            return;
        }

        if let Some(cap) = self.capacity {
            while self.order.len() >= cap {
                let Some(oldest) = self.order.pop_front() else {
                    break;
                };
                self.widths.remove(&oldest);
                log::trace!(target: "autowidth.measure", "evicted {oldest:?}");
            }
        }

        self.widths.insert(text.to_string(), width);
        self.order.push_back(text.to_string());
    }

    pub fn contains(&self, text: &str) -> bool {
        self.widths.contains_key(text)
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }
}
