//! Integration tests for decoding and rendering `LF_OEM2` records through the public API.

use pdbscope::prelude::*;

/// Builds an `LF_OEM2` payload from its parts.
fn payload(guid: [u8; 16], count: i32, numbers: &[u32], trailing: &[u8]) -> Vec<u8> {
    let mut data = guid.to_vec();
    data.extend_from_slice(&count.to_le_bytes());
    for number in numbers {
        data.extend_from_slice(&number.to_le_bytes());
    }
    data.extend_from_slice(trailing);
    data
}

fn decode(data: &[u8]) -> Result<OemDefinableString2> {
    OemDefinableString2::read(&mut Parser::new(data))
}

#[test]
fn empty_reference_list_with_oem_data() {
    let data = payload([0; 16], 0, &[], &[0xDE, 0xAD, 0xBE, 0xEF]);
    let record = decode(&data).unwrap();

    assert!(record.record_numbers().is_empty());
    assert_eq!(record.remaining_bytes().len(), 4);

    let text = record.emit();
    assert!(text.contains("  count: 0\n"));
    assert!(text.contains("  additional data length: 4\n"));
    assert!(!text.contains("recordNumber["));
}

#[test]
fn two_references_without_oem_data() {
    let guid = [
        0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F,
        0x10,
    ];
    let data = payload(guid, 2, &[0x100, 0x205], &[]);
    let record = decode(&data).unwrap();

    let text = record.emit();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "OEM Definable String 2",
            "  GUID: 04030201-0605-0807-090a-0b0c0d0e0f10",
            "  count: 2",
            "    recordNumber[0]: 0x00000100",
            "    recordNumber[1]: 0x00000205",
            "  additional data length: 0",
        ]
    );
}

#[test]
fn counts_and_trailing_lengths() {
    for count in [0usize, 1, 7, 64] {
        for trailing in [0usize, 1, 3, 17] {
            let numbers: Vec<u32> = (0..count as u32).map(|i| 0x1000 + i).collect();
            let tail = vec![0x5A; trailing];
            let data = payload([0xAB; 16], count as i32, &numbers, &tail);

            let record = decode(&data).unwrap();
            assert_eq!(record.record_numbers().len(), count);
            assert_eq!(record.remaining_bytes(), tail.as_slice());

            let text = record.emit();
            let reference_lines = text
                .lines()
                .filter(|line| line.trim_start().starts_with("recordNumber["))
                .count();
            assert_eq!(reference_lines, count);
            assert!(text.contains(&format!("  count: {}\n", count)));
            assert!(text.contains(&format!("  additional data length: {}\n", trailing)));
        }
    }
}

#[test]
fn payload_shorter_than_guid() {
    for length in 0..16 {
        let data = vec![0u8; length];
        assert!(matches!(
            decode(&data),
            Err(Error::InsufficientData { needed: 16, .. })
        ));
    }
}

#[test]
fn fewer_references_than_declared() {
    let data = payload([0; 16], 3, &[0x1000, 0x1001], &[]);
    assert!(matches!(
        decode(&data),
        Err(Error::InsufficientData {
            needed: 4,
            remaining: 0,
            ..
        })
    ));
}

#[test]
fn minus_one_count_is_rejected() {
    let data = payload([0; 16], -1, &[0x1000], &[0x00]);
    assert!(matches!(decode(&data), Err(Error::InvalidCount(-1))));

    let data = payload([0; 16], i32::MIN, &[], &[]);
    assert!(matches!(decode(&data), Err(Error::InvalidCount(i32::MIN))));
}

#[test]
fn identical_input_renders_identically() {
    let data = payload([0x77; 16], 2, &[0xFFFF_FFFF, 0x0000_0074], &[0x01, 0x02]);

    let first = decode(&data).unwrap().emit();
    let second = decode(&data).unwrap().emit();
    assert_eq!(first, second);
    assert!(first.contains("    recordNumber[0]: 0xffffffff\n"));
    assert!(first.contains("    recordNumber[1]: 0x00000074\n"));
}

#[test]
fn dispatch_by_leaf() {
    let data = payload([0; 16], 1, &[0x1003], &[0x99]);

    let record = TypeRecord::parse(TypeLeaf::OemDefinableString2 as u16, &data).unwrap();
    assert_eq!(record.leaf(), OemDefinableString2::PDB_ID);
    assert_eq!(record.emit(), decode(&data).unwrap().emit());

    let unknown = TypeRecord::parse(0x1203, &data).unwrap();
    assert!(matches!(unknown, TypeRecord::Unknown { leaf: 0x1203, .. }));
}
