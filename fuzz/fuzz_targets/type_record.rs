#![no_main]

use libfuzzer_sys::fuzz_target;
use pdbscope::{OemDefinableString2, TypeRecord};

fuzz_target!(|data: &[u8]| {
    if let Ok(record) = TypeRecord::parse(OemDefinableString2::PDB_ID, data) {
        let _ = record.emit();
    }
});
