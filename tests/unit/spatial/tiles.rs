//! Tests for tile decoding, the empty marker and field ranges

#[cfg(test)]
mod tests {
    use tilegrid::EditorError;
    use tilegrid::spatial::tiles::{FieldRange, Tile, TileCodec, TileField};

    fn codec() -> TileCodec {
        TileCodec::new("00")
    }

    // Tests decoding splits all three fields
    // Verified by swapping the sprite fields
    #[test]
    fn test_decode_fields() {
        let tile = codec().decode("1-2-FL").unwrap();
        assert_eq!(tile.sprite_x(), 1);
        assert_eq!(tile.sprite_y(), 2);
        assert_eq!(tile.sprite_index(), (1, 2));
        assert_eq!(tile.type_id(), "FL");
    }

    // Tests encoding and display produce the dash-joined key
    // Verified by changing the separator
    #[test]
    fn test_encode_and_display() {
        let codec = codec();
        assert_eq!(codec.encode(12, 0, "WA"), "12-0-WA");
        let tile = Tile::new(12, 0, "WA").unwrap();
        assert_eq!(tile.to_string(), "12-0-WA");
        assert_eq!(tile.key(), "12-0-WA");
        assert_eq!(codec.decode(&tile.key()).unwrap(), tile);
    }

    // Tests every malformed shape is rejected
    // Verified by accepting keys with more than three fields
    #[test]
    fn test_decode_rejects_malformed_keys() {
        let codec = codec();
        for key in [
            "", "1-2", "1-2-FL-3", "a-2-FL", "1-b-FL", "-1-2-FL", "1-2-", "1-2-F L", "1.5-2-FL",
        ] {
            assert!(
                matches!(codec.decode(key), Err(EditorError::MalformedTileKey { .. })),
                "expected '{key}' to be rejected"
            );
        }
    }

    // Tests sprite fields must be written in canonical form
    // Verified by parsing sprite fields with plain integer parsing
    #[test]
    fn test_decode_requires_canonical_sprite_fields() {
        let codec = codec();
        for key in ["+1-0-FL", "01-0-FL", "1-+2-FL", "1-00-FL"] {
            assert!(
                matches!(codec.decode(key), Err(EditorError::MalformedTileKey { .. })),
                "expected '{key}' to be rejected"
            );
        }
        for key in ["0-0-00", "10-0-FL", "4294967295-7-WA"] {
            assert_eq!(codec.decode(key).unwrap().key(), key);
        }
    }

    // Tests the malformed error keeps the offending key
    // Verified by reporting an empty key
    #[test]
    fn test_malformed_error_reports_key() {
        let Err(EditorError::MalformedTileKey { key, .. }) = codec().decode("x-1-FL") else {
            unreachable!("expected MalformedTileKey");
        };
        assert_eq!(key, "x-1-FL");
    }

    // Tests empty detection ignores sprite fields
    // Verified by comparing the whole key against the empty key
    #[test]
    fn test_is_empty_ignores_sprite_fields() {
        let codec = codec();
        assert!(codec.is_empty_key("0-0-00"));
        assert!(codec.is_empty_key("5-7-00"));
        assert!(!codec.is_empty_key("0-0-FL"));
        assert!(codec.is_empty(&Tile::new(9, 9, "00").unwrap()));
        assert!(!codec.is_empty(&Tile::new(0, 0, "FL").unwrap()));
    }

    // Tests the canonical empty key follows the configured code
    // Verified by hard-coding "00"
    #[test]
    fn test_empty_key_uses_configured_code() {
        assert_eq!(codec().empty_key(), "0-0-00");
        let custom = TileCodec::new("XX");
        assert_eq!(custom.empty_key(), "0-0-XX");
        assert_eq!(custom.empty_tile().to_string(), "0-0-XX");
        assert!(custom.is_empty_key("3-3-XX"));
        assert!(!custom.is_empty_key("3-3-00"));
    }

    // Tests range construction bounds
    // Verified by allowing end == start
    #[test]
    fn test_field_range_new() {
        assert_eq!(FieldRange::new(0, 3).unwrap(), FieldRange::ALL);
        assert_eq!(FieldRange::new(0, 2).unwrap(), FieldRange::SPRITE);
        assert_eq!(FieldRange::new(2, 3).unwrap(), FieldRange::TYPE);
        assert!(matches!(
            FieldRange::new(2, 2),
            Err(EditorError::InvalidParameter { .. })
        ));
        assert!(FieldRange::new(0, 4).is_err());
    }

    // Tests matches only compares fields inside the range
    // Verified by comparing all fields regardless of range
    #[test]
    fn test_field_range_matches() {
        let floor = Tile::new(1, 1, "FL").unwrap();
        let wall = Tile::new(1, 1, "WA").unwrap();
        assert!(FieldRange::SPRITE.matches(&floor, &wall));
        assert!(!FieldRange::TYPE.matches(&floor, &wall));
        assert!(!FieldRange::ALL.matches(&floor, &wall));
        assert!(FieldRange::ALL.matches(&floor, &floor.clone()));
    }

    // Tests apply copies only fields inside the range
    // Verified by copying the whole tile
    #[test]
    fn test_field_range_apply() {
        let source = Tile::new(4, 5, "WA").unwrap();

        let mut target = Tile::new(1, 1, "FL").unwrap();
        FieldRange::TYPE.apply(&mut target, &source);
        assert_eq!(target.to_string(), "1-1-WA");

        let mut target = Tile::new(1, 1, "FL").unwrap();
        FieldRange::SPRITE.apply(&mut target, &source);
        assert_eq!(target.to_string(), "4-5-FL");

        let mut target = Tile::new(1, 1, "FL").unwrap();
        FieldRange::new(1, 3).unwrap().apply(&mut target, &source);
        assert_eq!(target.to_string(), "1-5-WA");
    }

    // Tests field membership and ordering
    // Verified by making the range end inclusive
    #[test]
    fn test_field_range_fields() {
        assert_eq!(
            FieldRange::SPRITE.fields().collect::<Vec<_>>(),
            vec![TileField::SpriteX, TileField::SpriteY]
        );
        assert!(FieldRange::TYPE.contains(TileField::TypeId));
        assert!(!FieldRange::TYPE.contains(TileField::SpriteY));
        assert_eq!(FieldRange::ALL.start(), 0);
        assert_eq!(FieldRange::ALL.end(), 3);
    }
}
