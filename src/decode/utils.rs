pub(crate) fn gen_blanks(span: usize) -> String {
    " ".repeat(span)
}

pub fn escape_char(byte: u8) -> String {
    match byte {
        b' ' => " ".into(),
        b'"' => format!("\\x{:02x}", byte),
        _ if byte.is_ascii_graphic() => format!("{}", byte as char),
        _ => format!("\\x{:02x}", byte),
    }
}

pub fn escape_string(bytes: &[u8]) -> String {
    let mut result = String::new();
    for c in bytes.iter() {
        result.push_str(&escape_char(*c));
    }

    result
}
