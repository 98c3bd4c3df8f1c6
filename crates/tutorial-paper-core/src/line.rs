use std::io::{self, BufRead};

/// Read every line from `reader`, keeping each line's terminator.
///
/// The rewrite rules operate on raw lines, so the terminator is part of the
/// text they see. `\r\n` is normalised to `\n`; a final line without a
/// newline is returned as-is.
pub fn read_lines<R: BufRead>(reader: &mut R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = reader.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        let mut line = buffer.clone();
        if line.ends_with("\r\n") {
            line.truncate(line.len() - 2);
            line.push('\n');
        }
        lines.push(line);
    }

    Ok(lines)
}
