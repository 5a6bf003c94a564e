//! Tests for sparse elevation accumulation and bounds handling

#[cfg(test)]
mod tests {
    use terrabrush::terrain::{ElevationStore, MapPoint};

    // Tests a fresh store is empty and reports its bounds
    // Verified by swapping width and height in the constructor
    #[test]
    fn test_new_store_is_empty() {
        let store = ElevationStore::new(200, 150);

        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.width(), 200);
        assert_eq!(store.height(), 150);
        assert_eq!(store.get(MapPoint::new(0, 0)), None);
    }

    // Tests values accumulate instead of being overwritten
    // Verified by replacing += with assignment
    #[test]
    fn test_accumulate_adds_to_existing_value() {
        let mut store = ElevationStore::new(10, 10);
        let point = MapPoint::new(3, 4);

        assert!(store.accumulate(point, 2.5));
        assert!(store.accumulate(point, -1.0));

        assert_eq!(store.get(point), Some(1.5));
        assert_eq!(store.len(), 1);
    }

    // Tests out-of-bounds points never enter the store
    // Verified by removing the bounds check
    #[test]
    fn test_accumulate_rejects_out_of_bounds() {
        let mut store = ElevationStore::new(10, 5);

        assert!(!store.accumulate(MapPoint::new(10, 0), 1.0));
        assert!(!store.accumulate(MapPoint::new(0, 5), 1.0));
        assert!(store.is_empty());
        assert!(store.in_bounds(MapPoint::new(9, 4)));
    }

    // Tests a point that returns to zero stays present
    // Verified by deleting entries that reach zero
    #[test]
    fn test_zeroed_entry_is_kept() {
        let mut store = ElevationStore::new(4, 4);
        let point = MapPoint::new(1, 1);

        store.accumulate(point, 7.0);
        store.accumulate(point, -7.0);

        assert_eq!(store.get(point), Some(0.0));
        assert_eq!(store.iter().count(), 1);
    }
}
