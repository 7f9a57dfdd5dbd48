//! Tests for the cell visited set

#[cfg(test)]
mod tests {
    use tilegrid::algorithm::bitset::CellBitset;

    // Tests insert reports only new members
    // Verified by always returning true from insert
    #[test]
    fn test_insert_and_contains() {
        let mut set = CellBitset::new(10);
        assert!(set.is_empty());
        assert_eq!(set.capacity(), 10);

        assert!(set.insert(3));
        assert!(!set.insert(3));
        assert!(set.insert(9));
        assert!(set.contains(3));
        assert!(!set.contains(4));
        assert_eq!(set.count(), 2);
        assert_eq!(set.to_vec(), vec![3, 9]);
    }

    // Tests indices past the end are never members
    // Verified by growing the set on insert
    #[test]
    fn test_out_of_range_indices() {
        let mut set = CellBitset::new(4);
        assert!(!set.insert(4));
        assert!(!set.contains(4));
        assert!(!set.contains(usize::MAX));
        assert!(set.is_empty());
    }

    // Tests clearing keeps the capacity
    // Verified by truncating the bits on clear
    #[test]
    fn test_clear_and_display() {
        let mut set = CellBitset::new(5);
        set.insert(1);
        set.insert(2);
        assert_eq!(set.to_string(), "CellBitset(2 cells: [1, 2])");

        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.capacity(), 5);
        assert_eq!(set.to_string(), "CellBitset(0 cells: [])");
    }
}
