/// Parse a `#!interpreter [arg]` header into the interpreter token and at
/// most one trailing argument.
///
/// `buf` is the raw header buffer, already confirmed to start with `#!`
/// and be at least 3 bytes long. Returns `None` when there is no newline
/// within the buffer (the caller treats that as non-executable) or when
/// the interpreter token is empty.
pub fn parse_shebang(buf: &[u8]) -> Option<(String, Option<String>)> {
    let newline_idx = buf.iter().position(|&b| b == b'\n')?;
    let line = trim_trailing_spaces(&buf[2..newline_idx]);

    let mut i = 0;
    while i < line.len() && line[i] == b' ' {
        i += 1;
    }

    let interp_start = i;
    while i < line.len() && !line[i].is_ascii_whitespace() {
        i += 1;
    }
    let interp_end = i;

    if interp_start == interp_end {
        return None;
    }

    let orig_interpreter = String::from_utf8_lossy(&line[interp_start..interp_end]).into_owned();

    while i < line.len() && line[i] == b' ' {
        i += 1;
    }
    let arg_start = i;

    let interpreter_arg = if arg_start < line.len() {
        Some(String::from_utf8_lossy(&line[arg_start..]).into_owned())
    } else {
        None
    };

    Some((orig_interpreter, interpreter_arg))
}

fn trim_trailing_spaces(line: &[u8]) -> &[u8] {
    let mut end = line.len();
    while end > 0 && line[end - 1] == b' ' {
        end -= 1;
    }
    &line[..end]
}
