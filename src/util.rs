use bstr::BString;

/// Trims trailing spaces and null bytes.
pub(crate) fn trim_spaces(buf: &[u8]) -> BString {
    let mut end = buf.len();
    while end > 0 {
        let b = buf[end - 1];
        if b != b' ' && b != 0 {
            break;
        }
        end -= 1;
    }
    BString::from(&buf[..end])
}

/// Pads trailing whitespaces or cut too long data.
pub(crate) fn space_pad(data: &[u8], len: usize) -> Vec<u8> {
    let mut data = data.to_vec();
    data.resize(len, b' ');
    data
}

/// A run of `len` spaces.
pub(crate) fn blank(len: usize) -> Vec<u8> {
    vec![b' '; len]
}
