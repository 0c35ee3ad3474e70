#![no_main]
use libfuzzer_sys::fuzz_target;
use megatech_menu::FieldSet;

fuzz_target!(|data: &str| {
    let _ = FieldSet::from_ini_str(data);
});
