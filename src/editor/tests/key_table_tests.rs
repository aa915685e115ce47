use crate::core::keycodes::{vk_letter, VK_LCONTROL, VK_RCONTROL};
use crate::core::{ConflictKind, Key, KeyRemap};
use crate::editor::{Column, EditError, KeyRemapTable};

fn letter(c: char) -> Key {
    Key(vk_letter(c))
}

#[test]
fn test_add_and_set_row() {
    let mut table = KeyRemapTable::new();
    let row = table.add_row();

    table.set_key(row, Column::Original, letter('A')).unwrap();
    table.set_key(row, Column::New, letter('B')).unwrap();

    assert_eq!(table.key(row, Column::Original), Ok(Some(letter('A'))));
    assert_eq!(table.key(row, Column::New), Ok(Some(letter('B'))));
    assert!(!table.needs_warning(row).unwrap());
}

#[test]
fn test_map_to_same_key_clears_cell() {
    let mut table = KeyRemapTable::new();
    let row = table.add_row();
    table.set_key(row, Column::Original, letter('A')).unwrap();

    let result = table.set_key(row, Column::New, letter('A'));
    assert_eq!(result, Err(EditError::Rejected(ConflictKind::MapToSameKey)));
    assert_eq!(table.key(row, Column::New), Ok(None), "Rejected cell is cleared");
    assert_eq!(table.key(row, Column::Original), Ok(Some(letter('A'))));
}

#[test]
fn test_original_overlap_with_other_row() {
    let mut table = KeyRemapTable::new();
    let first = table.add_row();
    let second = table.add_row();
    table.set_key(first, Column::Original, letter('A')).unwrap();

    assert_eq!(
        table.set_key(second, Column::Original, letter('A')),
        Err(EditError::Rejected(ConflictKind::SameKeyPreviouslyMapped))
    );
    assert_eq!(table.key(second, Column::Original), Ok(None));
}

#[test]
fn test_left_and_right_modifier_rows_coexist() {
    let mut table = KeyRemapTable::new();
    let first = table.add_row();
    let second = table.add_row();

    table.set_key(first, Column::Original, Key(VK_LCONTROL)).unwrap();
    assert!(table.set_key(second, Column::Original, Key(VK_RCONTROL)).is_ok());
}

#[test]
fn test_new_column_may_repeat_across_rows() {
    let mut table = KeyRemapTable::new();
    let first = table.add_row();
    let second = table.add_row();

    table.set_key(first, Column::New, letter('Z')).unwrap();
    assert!(table.set_key(second, Column::New, letter('Z')).is_ok());
}

#[test]
fn test_none_clears_cell() {
    let mut table = KeyRemapTable::new();
    let row = table.add_row();
    table.set_key(row, Column::Original, letter('A')).unwrap();

    table.set_key(row, Column::Original, Key::NONE).unwrap();
    assert_eq!(table.key(row, Column::Original), Ok(None));
    assert!(table.needs_warning(row).unwrap());
}

#[test]
fn test_row_ids_survive_removal() {
    let mut table = KeyRemapTable::new();
    let first = table.add_row();
    let second = table.add_row();
    let third = table.add_row();
    table.set_key(third, Column::Original, letter('C')).unwrap();

    table.remove_row(second).unwrap();

    assert_eq!(table.row_ids(), vec![first, third]);
    assert_eq!(table.key(third, Column::Original), Ok(Some(letter('C'))));
    assert_eq!(
        table.key(second, Column::Original),
        Err(EditError::UnknownRow(second))
    );
    assert_eq!(table.remove_row(second), Err(EditError::UnknownRow(second)));
}

#[test]
fn test_untouched_row_needs_no_warning() {
    let mut table = KeyRemapTable::new();
    let row = table.add_row();
    assert!(!table.needs_warning(row).unwrap());
}

#[test]
fn test_apply_skips_incomplete_and_conflicting_rows() {
    let mut table = KeyRemapTable::new();
    let complete = table.add_row_with(KeyRemap {
        original: letter('A'),
        new: letter('B'),
    });
    let incomplete = table.add_row_with(KeyRemap {
        original: letter('C'),
        new: Key::NONE,
    });
    // Loaded rows bypass edit checks; apply must catch the duplicate
    let duplicate = table.add_row_with(KeyRemap {
        original: letter('A'),
        new: letter('D'),
    });

    let summary = table.apply();
    assert_eq!(
        summary.applied,
        vec![KeyRemap {
            original: letter('A'),
            new: letter('B'),
        }]
    );
    assert_eq!(summary.skipped, vec![incomplete, duplicate]);
    assert!(!summary.is_complete());
    assert_eq!(
        summary.status_message(),
        "All remappings were not successfully applied."
    );
    assert_eq!(table.row_ids()[0], complete);
}

#[test]
fn test_apply_all_rows() {
    let mut table = KeyRemapTable::new();
    table.add_row_with(KeyRemap {
        original: Key(VK_LCONTROL),
        new: letter('A'),
    });
    table.add_row_with(KeyRemap {
        original: Key(VK_RCONTROL),
        new: letter('B'),
    });

    let summary = table.apply();
    assert!(summary.is_complete());
    assert_eq!(summary.status_message(), "Remapping successful!");
}
