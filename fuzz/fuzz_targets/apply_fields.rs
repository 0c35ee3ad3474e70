#![no_main]
use libfuzzer_sys::{arbitrary::Arbitrary, fuzz_target};
use megatech_menu::{FieldSet, apply, layout::required_image_len, read_fields};

#[derive(Arbitrary, Debug)]
struct Input {
    game_name: String,
    page1_header: String,
    page1_lines: Vec<String>,
    page2_header: String,
    page2_lines: Vec<String>,
}

fuzz_target!(|input: Input| {
    let fields = FieldSet {
        game_name: input.game_name,
        page1_header: input.page1_header,
        page1_lines: input.page1_lines,
        page2_header: input.page2_header,
        page2_lines: input.page2_lines,
    };
    let source = vec![0u8; required_image_len()];
    if let Ok(image) = apply(&source, &fields) {
        assert_eq!(image.len(), source.len());
        // Everything that was written must decode again.
        read_fields(&image).unwrap();
    }
});
