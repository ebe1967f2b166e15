use crate::{try_filled, Error, Result, Weight};

/// A queued vertex together with its current key
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeapNode<W> {
    pub vertex: usize,
    pub distance: W,
}

/// Binary min-heap over vertices with an index from vertex to heap slot.
///
/// The position table gives O(1) membership tests and lets `decrease_key`
/// locate a vertex without scanning, so it runs in O(log n). Two invariants
/// hold whenever a public method returns:
///
/// - every occupied slot `i` satisfies `position[nodes[i].vertex] == Some(i)`
/// - every slot's distance is `<=` the distances of its children
///
/// Ties between equal distances are broken towards the left child when
/// sifting down; callers must not rely on any particular order among equal keys.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<W> {
    /// Heap-ordered nodes
    nodes: Vec<HeapNode<W>>,

    /// Slot of each vertex in `nodes`, `None` when not queued
    position: Vec<Option<usize>>,
}

impl<W: Weight> IndexedMinHeap<W> {
    /// Creates an empty heap able to hold vertices `0..capacity`
    pub fn new(capacity: usize) -> Result<Self> {
        let mut nodes = Vec::new();
        nodes
            .try_reserve_exact(capacity)
            .map_err(|_| Error::AllocationFailed(capacity))?;

        Ok(IndexedMinHeap {
            nodes,
            position: try_filled(capacity, None)?,
        })
    }

    /// Maximum number of queued vertices, also the exclusive bound on vertex IDs
    pub fn capacity(&self) -> usize {
        self.position.len()
    }

    /// Returns the number of queued vertices
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if nothing is queued
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns true if `vertex` is currently queued
    pub fn contains(&self, vertex: usize) -> bool {
        matches!(self.position.get(vertex), Some(Some(_)))
    }

    /// Returns the key of a queued vertex
    pub fn distance_of(&self, vertex: usize) -> Option<W> {
        let slot = (*self.position.get(vertex)?)?;
        Some(self.nodes[slot].distance)
    }

    /// Returns the minimum node without removing it
    pub fn peek(&self) -> Option<&HeapNode<W>> {
        self.nodes.first()
    }

    /// Queues `vertex` with key `distance`.
    ///
    /// Fails with `CapacityExceeded` when the heap is full and with
    /// `AlreadyQueued` if the vertex is present; use `decrease_key` for that.
    pub fn insert(&mut self, vertex: usize, distance: W) -> Result<()> {
        if self.nodes.len() == self.capacity() {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        if vertex >= self.capacity() {
            return Err(Error::InvalidVertex(vertex));
        }
        if self.position[vertex].is_some() {
            return Err(Error::AlreadyQueued(vertex));
        }

        let slot = self.nodes.len();
        self.nodes.push(HeapNode { vertex, distance });
        self.position[vertex] = Some(slot);
        self.sift_up(slot);
        Ok(())
    }

    /// Removes and returns the node with the smallest distance
    pub fn extract_min(&mut self) -> Result<HeapNode<W>> {
        if self.nodes.is_empty() {
            return Err(Error::HeapEmpty);
        }

        let last = self.nodes.len() - 1;
        self.swap_slots(0, last);
        let min = self.nodes.pop().ok_or(Error::HeapEmpty)?;
        self.position[min.vertex] = None;

        if !self.nodes.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    /// Lowers the key of `vertex` to `distance`, inserting it if absent.
    ///
    /// A request that is not strictly smaller than the current key is ignored.
    pub fn decrease_key(&mut self, vertex: usize, distance: W) -> Result<()> {
        if vertex >= self.capacity() {
            return Err(Error::InvalidVertex(vertex));
        }

        match self.position[vertex] {
            None => self.insert(vertex, distance),
            Some(slot) => {
                if distance < self.nodes[slot].distance {
                    self.nodes[slot].distance = distance;
                    self.sift_up(slot);
                }
                Ok(())
            }
        }
    }

    /// Empties the heap, keeping its allocation
    pub fn clear(&mut self) {
        for node in self.nodes.drain(..) {
            self.position[node.vertex] = None;
        }
    }

    // The only place nodes move; keeps the position table in step.
    fn swap_slots(&mut self, a: usize, b: usize) {
        self.nodes.swap(a, b);
        self.position[self.nodes[a].vertex] = Some(a);
        self.position[self.nodes[b].vertex] = Some(b);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.nodes[slot].distance < self.nodes[parent].distance {
                self.swap_slots(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.nodes.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;

            if left < len && self.nodes[left].distance < self.nodes[smallest].distance {
                smallest = left;
            }
            if right < len && self.nodes[right].distance < self.nodes[smallest].distance {
                smallest = right;
            }
            if smallest == slot {
                break;
            }

            self.swap_slots(slot, smallest);
            slot = smallest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashMap;

    fn assert_invariants<W: Weight>(heap: &IndexedMinHeap<W>) {
        for (slot, node) in heap.nodes.iter().enumerate() {
            assert_eq!(
                heap.position[node.vertex],
                Some(slot),
                "position of vertex {} is out of sync",
                node.vertex
            );
            for child in [2 * slot + 1, 2 * slot + 2] {
                if child < heap.nodes.len() {
                    assert!(
                        node.distance <= heap.nodes[child].distance,
                        "slot {} is larger than child {}",
                        slot,
                        child
                    );
                }
            }
        }
        let queued = heap.position.iter().filter(|p| p.is_some()).count();
        assert_eq!(queued, heap.nodes.len(), "stale entries in position table");
    }

    #[test]
    fn test_extract_in_sorted_order() {
        let mut heap = IndexedMinHeap::new(6).unwrap();
        for (vertex, distance) in [(0, 5), (1, 3), (2, 8), (3, 1), (4, 9), (5, 2)] {
            heap.insert(vertex, distance).unwrap();
            assert_invariants(&heap);
        }

        let mut order = Vec::new();
        while !heap.is_empty() {
            order.push(heap.extract_min().unwrap().distance);
            assert_invariants(&heap);
        }
        assert_eq!(order, vec![1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn test_extract_from_empty_heap_fails() {
        let mut heap: IndexedMinHeap<i64> = IndexedMinHeap::new(3).unwrap();
        assert_eq!(heap.extract_min(), Err(Error::HeapEmpty));

        heap.insert(1, 4).unwrap();
        heap.extract_min().unwrap();
        assert_eq!(heap.extract_min(), Err(Error::HeapEmpty));
    }

    #[test]
    fn test_insert_beyond_capacity_fails() {
        let mut heap = IndexedMinHeap::new(2).unwrap();
        heap.insert(0, 1.0).unwrap();
        heap.insert(1, 2.0).unwrap();
        assert_eq!(
            heap.insert(0, 0.5),
            Err(Error::CapacityExceeded { capacity: 2 })
        );
        assert_eq!(heap.len(), 2);
        assert_invariants(&heap);
    }

    #[test]
    fn test_insert_rejects_duplicates_and_out_of_range_vertices() {
        let mut heap = IndexedMinHeap::new(4).unwrap();
        heap.insert(2, 7).unwrap();
        assert_eq!(heap.insert(2, 1), Err(Error::AlreadyQueued(2)));
        assert_eq!(heap.insert(4, 1), Err(Error::InvalidVertex(4)));
        assert_eq!(heap.distance_of(2), Some(7));
    }

    #[test]
    fn test_decrease_key_moves_vertex_to_top() {
        let mut heap = IndexedMinHeap::new(5).unwrap();
        for vertex in 0..5 {
            heap.insert(vertex, 10 * (vertex as i64 + 1)).unwrap();
        }

        heap.decrease_key(4, 5).unwrap();
        assert_invariants(&heap);
        assert_eq!(heap.peek(), Some(&HeapNode { vertex: 4, distance: 5 }));
        assert_eq!(heap.extract_min().unwrap().vertex, 4);
        assert_eq!(heap.extract_min().unwrap().vertex, 0);
    }

    #[test]
    fn test_decrease_key_ignores_larger_or_equal_keys() {
        let mut heap = IndexedMinHeap::new(3).unwrap();
        heap.insert(0, 4).unwrap();
        heap.insert(1, 6).unwrap();

        heap.decrease_key(0, 9).unwrap();
        heap.decrease_key(1, 6).unwrap();
        assert_eq!(heap.distance_of(0), Some(4));
        assert_eq!(heap.distance_of(1), Some(6));
        assert_invariants(&heap);
    }

    #[test]
    fn test_decrease_key_on_absent_vertex_inserts() {
        let mut heap = IndexedMinHeap::new(3).unwrap();
        heap.decrease_key(2, 3).unwrap();
        assert!(heap.contains(2));
        assert!(!heap.contains(0));
        assert!(!heap.contains(17));
        assert_eq!(heap.len(), 1);
    }

    #[test]
    fn test_clear_resets_positions() {
        let mut heap = IndexedMinHeap::new(3).unwrap();
        heap.insert(0, 1).unwrap();
        heap.insert(2, 0).unwrap();
        heap.clear();
        assert!(heap.is_empty());
        assert!(!heap.contains(0) && !heap.contains(2));
        heap.insert(2, 5).unwrap();
        assert_invariants(&heap);
    }

    #[test]
    fn test_random_operations_match_model() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let capacity = 64;
        let mut heap = IndexedMinHeap::new(capacity).unwrap();
        let mut model: HashMap<usize, i64> = HashMap::new();

        for _ in 0..5_000 {
            match rng.gen_range(0..3) {
                0 => {
                    let vertex = rng.gen_range(0..capacity);
                    let distance = rng.gen_range(0..1_000);
                    if model.contains_key(&vertex) {
                        assert_eq!(
                            heap.insert(vertex, distance),
                            Err(Error::AlreadyQueued(vertex))
                        );
                    } else {
                        heap.insert(vertex, distance).unwrap();
                        model.insert(vertex, distance);
                    }
                }
                1 => {
                    let vertex = rng.gen_range(0..capacity);
                    let distance = rng.gen_range(0..1_000);
                    heap.decrease_key(vertex, distance).unwrap();
                    let entry = model.entry(vertex).or_insert(distance);
                    if distance < *entry {
                        *entry = distance;
                    }
                }
                _ => match heap.extract_min() {
                    Ok(node) => {
                        let smallest = model.values().copied().min().unwrap();
                        assert_eq!(node.distance, smallest);
                        assert_eq!(model.remove(&node.vertex), Some(node.distance));
                    }
                    Err(err) => {
                        assert_eq!(err, Error::HeapEmpty);
                        assert!(model.is_empty());
                    }
                },
            }

            assert_invariants(&heap);
            assert_eq!(heap.len(), model.len());
            for (&vertex, &distance) in &model {
                assert_eq!(heap.distance_of(vertex), Some(distance));
            }
        }
    }
}
