//! Tests for the undo and redo stacks

#[cfg(test)]
mod tests {
    use tilegrid::editor::history::EditHistory;
    use tilegrid::spatial::grid::TileSnapshot;
    use tilegrid::spatial::tiles::Tile;

    fn snapshot(sprite_x: u32) -> TileSnapshot {
        TileSnapshot::new(vec![Tile::new(sprite_x, 0, "FL").unwrap()])
    }

    fn sprite_x(snapshot: &TileSnapshot) -> Option<u32> {
        snapshot.tiles().first().map(Tile::sprite_x)
    }

    // Tests undo returns the committed state and feeds redo
    // Verified by discarding the current state on undo
    #[test]
    fn test_undo_then_redo() {
        let mut history = EditHistory::new(10);
        history.commit(snapshot(1));

        let restored = history.undo(snapshot(2)).unwrap();
        assert_eq!(sprite_x(&restored), Some(1));
        assert!(!history.can_undo());
        assert!(history.can_redo());

        let restored = history.redo(snapshot(1)).unwrap();
        assert_eq!(sprite_x(&restored), Some(2));
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    // Tests empty stacks return nothing and change nothing
    // Verified by pushing current before popping
    #[test]
    fn test_empty_stacks_are_noops() {
        let mut history = EditHistory::new(10);
        assert!(history.undo(snapshot(1)).is_none());
        assert!(history.redo(snapshot(1)).is_none());
        assert_eq!(history.undo_len(), 0);
        assert_eq!(history.redo_len(), 0);
    }

    // Tests a new commit invalidates the redo stack
    // Verified by keeping redo entries across commits
    #[test]
    fn test_commit_clears_redo() {
        let mut history = EditHistory::new(10);
        history.commit(snapshot(1));
        history.commit(snapshot(2));
        history.undo(snapshot(3));
        assert_eq!(history.redo_len(), 1);

        history.commit(snapshot(4));
        assert_eq!(history.redo_len(), 0);
        assert_eq!(history.undo_len(), 2);
    }

    // Tests the limit evicts the oldest snapshots
    // Verified by evicting the newest snapshot instead
    #[test]
    fn test_limit_evicts_oldest() {
        let mut history = EditHistory::new(3);
        for x in 0..5 {
            history.commit(snapshot(x));
        }
        assert_eq!(history.limit(), 3);
        assert_eq!(history.undo_len(), 3);

        let mut popped = Vec::new();
        while let Some(previous) = history.undo(snapshot(99)) {
            popped.push(sprite_x(&previous));
        }
        assert_eq!(popped, vec![Some(4), Some(3), Some(2)]);
    }

    // Tests clear empties both stacks
    // Verified by clearing only the undo stack
    #[test]
    fn test_clear() {
        let mut history = EditHistory::new(10);
        history.commit(snapshot(1));
        history.commit(snapshot(2));
        history.undo(snapshot(3));
        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
