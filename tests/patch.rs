use megatech_menu::{
    FieldName, FieldSet, PatchError, ValidationError, apply, apply_in_place,
    layout::required_image_len,
};

/// Source image with a recognizable byte at every position.
fn source_image() -> Vec<u8> {
    (0..0x800).map(|i| (i % 251) as u8).collect()
}

fn valid_fields() -> FieldSet {
    FieldSet::new("Tetris")
        .page1("hi", ["Stack the blocks", "to clear lines", "good luck"])
        .page2("How to play", ["Left/right: move", "A: rotate"])
}

#[test]
fn test_game_name_plain_ascii() {
    let image = apply(&source_image(), &valid_fields()).unwrap();
    let name = &image[0x10..0x10 + 24];
    assert_eq!(name, b"TETRIS                  ");
    assert_eq!(String::from_utf8_lossy(name), format!("{:<24}", "TETRIS"));
}

#[test]
fn test_page1_header_planes() {
    let image = apply(&source_image(), &valid_fields()).unwrap();

    let ink = &image[0xDB..0xDB + 28];
    assert_eq!(&ink[..4], &[0xF6, 0x6C, 0xF6, 0x70]);
    assert!(ink[4..].iter().all(|&b| b == 0x20));

    let visibility = &image[0xF7..0xF7 + 28];
    assert_eq!(&visibility[..4], &[0x00; 4]);
    assert!(visibility[4..].iter().all(|&b| b == 0x20));
}

#[test]
fn test_page1_rows_use_double_stride() {
    let image = apply(&source_image(), &valid_fields()).unwrap();
    let row = |i: usize| &image[0x19F + i * 56..0x19F + i * 56 + 28];
    assert_eq!(row(0), b"STACK THE BLOCKS            ");
    assert_eq!(row(1), b"TO CLEAR LINES              ");
    assert_eq!(row(2), b"GOOD LUCK                   ");
    for i in 3..7 {
        assert_eq!(row(i), [b' '; 28], "row {i}");
    }

    // odd screen rows in between stay untouched
    let source = source_image();
    for i in 0..6 {
        let gap = 0x19F + i * 56 + 28..0x19F + (i + 1) * 56;
        assert_eq!(&image[gap.clone()], &source[gap]);
    }
}

#[test]
fn test_page2_header_and_tail_clear() {
    let source = source_image();
    let image = apply(&source, &valid_fields()).unwrap();
    assert_eq!(&image[0x584..0x584 + 18], b"HOW TO PLAY       ");
    assert_eq!(&image[0x596..0x5A2], &source[0x596..0x5A2]);
    assert_eq!(&image[0x5A2..0x5A2 + 16], [b' '; 16]);
}

#[test]
fn test_page2_rows_are_contiguous() {
    let image = apply(&source_image(), &valid_fields()).unwrap();
    assert_eq!(&image[0x5CF..0x5CF + 28], b"LEFT/RIGHT: MOVE            ");
    assert_eq!(&image[0x5CF + 28..0x5CF + 56], b"A: ROTATE                   ");
    assert!(image[0x5CF + 56..0x5CF + 16 * 28].iter().all(|&b| b == b' '));
}

#[test]
fn test_extra_lines_are_dropped() {
    let lines: Vec<String> = (0..20).map(|i| format!("line {i}")).collect();
    let fields = valid_fields().page2("Many", lines);
    let source = source_image();
    let image = apply(&source, &fields).unwrap();
    assert_eq!(&image[0x5CF + 15 * 28..0x5CF + 15 * 28 + 7], b"LINE 15");
    assert_eq!(&image[0x5CF + 16 * 28..], &source[0x5CF + 16 * 28..]);
}

#[test]
fn test_long_lines_are_truncated() {
    let fields = valid_fields().page1("hi", ["x".repeat(40)]);
    let image = apply(&source_image(), &fields).unwrap();
    assert_eq!(&image[0x19F..0x19F + 28], "X".repeat(28).as_bytes());
}

#[test]
fn test_game_name_boundaries() {
    let source = source_image();

    let fields = FieldSet { game_name: "A".repeat(24), ..valid_fields() };
    assert!(apply(&source, &fields).is_ok());

    let fields = FieldSet { game_name: "A".repeat(25), ..valid_fields() };
    let err = apply(&source, &fields).unwrap_err();
    assert_eq!(
        err.validation_errors(),
        &[ValidationError::LengthOutOfRange {
            field: FieldName::GameName,
            got: 25,
            allowed: 24
        }]
    );

    let fields = FieldSet { game_name: String::new(), ..valid_fields() };
    let err = apply(&source, &fields).unwrap_err();
    assert!(matches!(
        err.validation_errors(),
        [ValidationError::LengthOutOfRange { got: 0, .. }]
    ));
}

#[test]
fn test_header_limits() {
    let source = source_image();
    let fields = valid_fields()
        .page1("A".repeat(14), Vec::<String>::new())
        .page2("B".repeat(18), Vec::<String>::new());
    assert!(apply(&source, &fields).is_ok());

    let fields = valid_fields()
        .page1("A".repeat(15), Vec::<String>::new())
        .page2("B".repeat(19), Vec::<String>::new());
    let fields_in_error: Vec<FieldName> = apply(&source, &fields)
        .unwrap_err()
        .validation_errors()
        .iter()
        .map(ValidationError::field)
        .collect();
    assert_eq!(fields_in_error, vec![FieldName::Page1Header, FieldName::Page2Header]);
}

#[test]
fn test_all_errors_collected_in_order() {
    let fields = FieldSet {
        game_name: String::new(),
        page1_header: "Mega-Tech".to_string(),
        page1_lines: vec!["caf\u{e9}".to_string()],
        page2_header: String::new(),
        page2_lines: Vec::new(),
    };
    let err = apply(&source_image(), &fields).unwrap_err();
    let fields_in_error: Vec<FieldName> = err.validation_errors().iter().map(ValidationError::field).collect();
    assert_eq!(
        fields_in_error,
        vec![
            FieldName::GameName,
            FieldName::Page1Header,
            FieldName::Page1Lines,
            FieldName::Page2Header,
        ]
    );
    assert_eq!(err.to_string(), "4 field(s) failed validation");
}

#[test]
fn test_unsupported_header_character() {
    let fields = valid_fields().page1("Sonic 2", Vec::<String>::new());
    let err = apply(&source_image(), &fields).unwrap_err();
    assert_eq!(
        err.validation_errors(),
        &[ValidationError::UnsupportedCharacter {
            field: FieldName::Page1Header,
            line: None,
            position: 6,
            character: '2',
        }]
    );
    assert_eq!(
        err.validation_errors()[0].to_string(),
        "page1_header: unsupported character '2' at column 7"
    );
}

#[test]
fn test_source_is_not_modified() {
    let source = source_image();
    let copy = source.clone();
    let _ = apply(&source, &valid_fields()).unwrap();
    assert_eq!(source, copy);
}

#[test]
fn test_image_too_small() {
    let source = vec![0u8; required_image_len() - 1];
    match apply(&source, &valid_fields()).unwrap_err() {
        PatchError::PreconditionViolation {
            field,
            offset,
            width,
            image_len,
        } => {
            assert_eq!(field, FieldName::Page2Lines);
            assert_eq!(offset, 0x5CF + 15 * 28);
            assert_eq!(width, 28);
            assert_eq!(image_len, required_image_len() - 1);
        }
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn test_exact_size_image() {
    let source = vec![0u8; required_image_len()];
    assert!(apply(&source, &valid_fields()).is_ok());
}

#[test]
fn test_apply_in_place_fails_closed() {
    let mut image = source_image();
    let fields = FieldSet { page2_header: String::new(), ..valid_fields() };
    assert!(apply_in_place(&mut image, &fields).is_err());
    assert_eq!(image, source_image());

    let mut image = vec![0u8; 0x100];
    assert!(apply_in_place(&mut image, &valid_fields()).is_err());
    assert_eq!(image, vec![0u8; 0x100]);
}

#[test]
fn test_apply_in_place_matches_apply() {
    let mut image = source_image();
    apply_in_place(&mut image, &valid_fields()).unwrap();
    assert_eq!(image, apply(&source_image(), &valid_fields()).unwrap());
}
